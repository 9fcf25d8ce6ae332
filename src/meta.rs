//! Spreadsheet metadata and range resolution
//!
//! The low-level formatting calls do not take A1 text; they want a numeric
//! sheet id plus 0-based, end-exclusive row and column indices. This module
//! holds the subset of the spreadsheet metadata response needed to perform
//! that resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::a1::A1Range;

/// An enum for metadata resolution specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaError {
    /// No sheet with the requested title
    SheetNotFound {
        /// Title that was looked up
        title: String,
        /// Titles the spreadsheet does have
        known: Vec<String>,
    },
    /// The range carries no sheet qualifier to resolve against
    UnqualifiedRange(String),
}

impl fmt::Display for MetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaError::SheetNotFound { title, known } => {
                write!(f, "sheet '{title}' not found, spreadsheet has {known:?}")
            }
            MetaError::UnqualifiedRange(range) => {
                write!(f, "range '{range}' has no sheet qualifier")
            }
        }
    }
}

impl std::error::Error for MetaError {}

/// Properties of a single sheet within a spreadsheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetProperties {
    /// Numeric sheet id, stable across title changes
    pub sheet_id: i64,
    /// Human readable sheet title, as shown on the tab
    pub title: String,
}

/// One sheet entry of a spreadsheet metadata response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sheet {
    /// The sheet's properties
    pub properties: SheetProperties,
}

/// The subset of a spreadsheet metadata response this crate consumes
///
/// Deserializes straight from the service's `spreadsheets.get` JSON; fields
/// this crate has no use for are ignored.
///
/// # Examples
/// ```
/// use sheetgrid::SpreadsheetMeta;
///
/// let meta: SpreadsheetMeta = serde_json::from_str(
///     r#"{
///         "spreadsheetId": "1lSFT",
///         "sheets": [{"properties": {"sheetId": 77, "title": "testing"}}]
///     }"#,
/// )
/// .unwrap();
/// assert_eq!(meta.sheet_id("testing").unwrap(), 77);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpreadsheetMeta {
    /// The spreadsheet id from the document URL
    pub spreadsheet_id: String,
    /// The sheets of the spreadsheet, in tab order
    pub sheets: Vec<Sheet>,
}

impl SpreadsheetMeta {
    /// Resolves a sheet title to its numeric sheet id
    pub fn sheet_id(&self, title: &str) -> Result<i64, MetaError> {
        self.sheets
            .iter()
            .find(|s| s.properties.title == title)
            .map(|s| s.properties.sheet_id)
            .ok_or_else(|| MetaError::SheetNotFound {
                title: title.to_string(),
                known: self.sheet_titles(),
            })
    }

    /// All sheet titles, in tab order
    pub fn sheet_titles(&self) -> Vec<String> {
        self.sheets
            .iter()
            .map(|s| s.properties.title.clone())
            .collect()
    }

    /// Resolves a parsed range to the indexed form used by formatting calls
    ///
    /// The range must carry a sheet qualifier; resolution has nothing to
    /// fall back on without one.
    pub fn resolve(&self, range: &A1Range) -> Result<GridCoords, MetaError> {
        let sheet = range
            .sheet
            .as_deref()
            .ok_or_else(|| MetaError::UnqualifiedRange(range.to_string()))?;
        Ok(GridCoords::new(self.sheet_id(sheet)?, range))
    }
}

/// An A1 range resolved to the service's indexed form
///
/// Start indices are 0-based and inclusive, end indices are exclusive, per
/// the service's grid range convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCoords {
    /// Numeric sheet id
    pub sheet_id: i64,
    /// 0-based first row
    pub start_row_index: u32,
    /// 0-based first column
    pub start_column_index: u32,
    /// Exclusive end row
    pub end_row_index: u32,
    /// Exclusive end column
    pub end_column_index: u32,
}

impl GridCoords {
    /// Builds indexed coordinates for `range` on sheet `sheet_id`
    pub fn new(sheet_id: i64, range: &A1Range) -> GridCoords {
        GridCoords {
            sheet_id,
            start_row_index: range.start.row - 1,
            start_column_index: range.start.col - 1,
            end_row_index: range.end.row,
            end_column_index: range.end.col,
        }
    }

    /// Get row count
    pub fn height(&self) -> usize {
        (self.end_row_index - self.start_row_index) as usize
    }

    /// Get column count
    pub fn width(&self) -> usize {
        (self.end_column_index - self.start_column_index) as usize
    }
}
