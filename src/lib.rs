//! A1 range resolution and value grid shaping for spreadsheet web APIs
//!
//! # Status
//!
//! **sheetgrid** is a pure Rust library for the client-side half of a
//! spreadsheet web service conversation: it parses human readable A1
//! notation into grid coordinates, pads the ragged value grids the service
//! returns into the requested rectangle, and models the request and
//! response bodies as plain serde types. It performs no I/O: credentials,
//! sessions and HTTP belong to the caller.
//!
//! # Examples
//! ```
//! use sheetgrid::{A1Range, Value, ValueRange};
//!
//! // resolve a human readable range
//! let range: A1Range = "testing!A1:D2".parse().expect("invalid range");
//! assert_eq!(range.get_size(), (2, 4));
//!
//! // the service trims trailing empty cells from read responses;
//! // grow the grid back to the full rectangle
//! let response = ValueRange {
//!     values: vec![vec![Value::from("1")]],
//!     ..ValueRange::default()
//! };
//! let values = response.into_rectangular(&range);
//! assert_eq!(values[0], vec![Value::from("1"), Value::from(""), Value::from(""), Value::from("")]);
//! assert_eq!(values[1].len(), 4);
//! ```
//!
//! Formatting calls want numeric sheet ids and 0-based half-open indices
//! instead of A1 text; resolution goes through the spreadsheet metadata:
//!
//! ```
//! use sheetgrid::{repeat_background_color, A1Range, Color, SpreadsheetMeta};
//!
//! let meta: SpreadsheetMeta = serde_json::from_str(
//!     r#"{"spreadsheetId": "1lSFT", "sheets": [{"properties": {"sheetId": 77, "title": "testing"}}]}"#,
//! )
//! .expect("invalid metadata");
//!
//! let range: A1Range = "testing!A1:D2".parse().expect("invalid range");
//! let coords = meta.resolve(&range).expect("unknown sheet");
//! let body = repeat_background_color(coords, Color::rgb(0.9, 0.9, 0.7).expect("bad color"));
//! assert_eq!(body.requests.len(), 1);
//! ```
#![deny(missing_docs)]

use std::fmt;

macro_rules! from_err {
    ($from:ty, $to:tt, $var:tt) => {
        impl From<$from> for $to {
            fn from(e: $from) -> $to {
                $to::$var(e)
            }
        }
    };
}

pub mod a1;
pub mod format;
pub mod meta;
pub mod values;

pub use a1::{A1Error, A1Range, CellRef};
pub use format::{
    repeat_background_color, repeat_cell_format, BatchUpdateRequest, CellData, CellFormat, Color,
    FormatError, Request, RowData, UpdateCellsRequest,
};
pub use meta::{GridCoords, MetaError, Sheet, SheetProperties, SpreadsheetMeta};
pub use values::{
    ensure_rectangular, ensure_rectangular_with, MajorDimension, Value, ValueInputOption,
    ValueRange,
};

/// A struct to handle any sheetgrid specific error
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A1 notation error
    A1(a1::A1Error),
    /// Metadata resolution error
    Meta(meta::MetaError),
    /// Cell format error
    Format(format::FormatError),
}

from_err!(a1::A1Error, Error, A1);
from_err!(meta::MetaError, Error, Meta);
from_err!(format::FormatError, Error, Format);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::A1(e) => write!(f, "{e}"),
            Error::Meta(e) => write!(f, "{e}"),
            Error::Format(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::A1(e) => Some(e),
            Error::Meta(e) => Some(e),
            Error::Format(e) => Some(e),
        }
    }
}
