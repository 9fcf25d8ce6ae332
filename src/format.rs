//! Cell formatting request bodies
//!
//! The service applies formatting through a batch update call whose
//! `updateCells` entry carries one [`CellData`] per cell in the target
//! range. [`repeat_cell_format`] replicates a single format over the whole
//! rectangle, which is all the original client surface needs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::meta::GridCoords;

/// Field mask limiting an update to the background color
const BACKGROUND_COLOR_FIELDS: &str = "userEnteredFormat.backgroundColor";

/// An enum for cell format specific errors
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatError {
    /// Color channel outside 0.0..=1.0
    ChannelOutOfRange(f64),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::ChannelOutOfRange(c) => {
                write!(f, "color channel {c} is not within 0.0..=1.0")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// An RGB color with channels normalized to 0.0..=1.0
///
/// This is the service's wire form; alpha and named colors are not
/// supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Color {
    /// Red channel
    pub red: f64,
    /// Green channel
    pub green: f64,
    /// Blue channel
    pub blue: f64,
}

impl Color {
    /// Creates a color, validating that every channel is within 0.0..=1.0
    ///
    /// # Examples
    /// ```
    /// use sheetgrid::Color;
    ///
    /// assert!(Color::rgb(0.9, 0.9, 0.7).is_ok());
    /// assert!(Color::rgb(1.1, 0.0, 0.0).is_err());
    /// ```
    pub fn rgb(red: f64, green: f64, blue: f64) -> Result<Color, FormatError> {
        for c in [red, green, blue] {
            if !c.is_finite() || !(0.0..=1.0).contains(&c) {
                return Err(FormatError::ChannelOutOfRange(c));
            }
        }
        Ok(Color { red, green, blue })
    }
}

/// The format attributes this crate can apply to a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellFormat {
    /// Cell background fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

impl CellFormat {
    /// A format that sets only the background color
    pub fn background(color: Color) -> CellFormat {
        CellFormat {
            background_color: Some(color),
        }
    }
}

/// A single cell of an `updateCells` row
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellData {
    /// Format written as if entered by the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_entered_format: Option<CellFormat>,
}

/// One row of cells in an `updateCells` request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowData {
    /// The row's cells, left to right
    pub values: Vec<CellData>,
}

/// An `updateCells` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCellsRequest {
    /// Target coordinates
    pub range: GridCoords,
    /// Cell rows covering the target rectangle
    pub rows: Vec<RowData>,
    /// Field mask restricting which cell attributes are written
    pub fields: String,
}

/// A single entry of a batch update request
///
/// Externally tagged so each entry serializes as `{"updateCells": {...}}`,
/// the service's request union shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    /// Write cell data over a range
    UpdateCells(UpdateCellsRequest),
}

/// A batch update request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchUpdateRequest {
    /// The entries to apply, in order
    pub requests: Vec<Request>,
}

/// Builds the batch update body applying `format` to every cell of `coords`
///
/// One [`RowData`] is emitted per row with the format repeated across the
/// row's cells, under the background color field mask.
///
/// # Examples
/// ```
/// use sheetgrid::{repeat_cell_format, A1Range, CellFormat, Color, GridCoords};
///
/// let range: A1Range = "A1:D2".parse().unwrap();
/// let coords = GridCoords::new(77, &range);
/// let color = Color::rgb(0.9, 0.9, 0.7).unwrap();
/// let body = repeat_cell_format(coords, CellFormat::background(color));
/// assert_eq!(body.requests.len(), 1);
/// ```
pub fn repeat_cell_format(coords: GridCoords, format: CellFormat) -> BatchUpdateRequest {
    let row = RowData {
        values: vec![
            CellData {
                user_entered_format: Some(format),
            };
            coords.width()
        ],
    };
    BatchUpdateRequest {
        requests: vec![Request::UpdateCells(UpdateCellsRequest {
            range: coords,
            rows: vec![row; coords.height()],
            fields: BACKGROUND_COLOR_FIELDS.to_string(),
        })],
    }
}

/// Builds the batch update body painting every cell of `coords` with `color`
pub fn repeat_background_color(coords: GridCoords, color: Color) -> BatchUpdateRequest {
    repeat_cell_format(coords, CellFormat::background(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a1::A1Range;

    fn coords(text: &str, sheet_id: i64) -> GridCoords {
        let range: A1Range = text.parse().unwrap();
        GridCoords::new(sheet_id, &range)
    }

    #[test]
    fn test_color_validation() {
        assert!(Color::rgb(0.0, 0.0, 0.0).is_ok());
        assert!(Color::rgb(1.0, 1.0, 1.0).is_ok());
        assert_eq!(
            Color::rgb(1.1, 0.0, 0.0),
            Err(FormatError::ChannelOutOfRange(1.1)),
        );
        assert_eq!(
            Color::rgb(0.0, -0.2, 0.0),
            Err(FormatError::ChannelOutOfRange(-0.2)),
        );
        assert!(Color::rgb(0.0, 0.0, f64::NAN).is_err());
        assert!(Color::rgb(f64::INFINITY, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_repeat_format_shape() {
        let color = Color::rgb(0.8, 0.9, 0.8).unwrap();
        let body = repeat_background_color(coords("A3:D6", 12), color);
        let Request::UpdateCells(req) = &body.requests[0];
        assert_eq!(req.rows.len(), 4);
        for row in &req.rows {
            assert_eq!(row.values.len(), 4);
            for cell in &row.values {
                assert_eq!(
                    cell.user_entered_format.and_then(|f| f.background_color),
                    Some(color),
                );
            }
        }
        assert_eq!(req.fields, "userEnteredFormat.backgroundColor");
    }

    #[test]
    fn test_batch_update_json() {
        let color = Color::rgb(0.5, 0.0, 1.0).unwrap();
        let body = repeat_background_color(coords("B2:B2", 3), color);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            concat!(
                r#"{"requests":[{"updateCells":{"#,
                r#""range":{"sheetId":3,"startRowIndex":1,"startColumnIndex":1,"endRowIndex":2,"endColumnIndex":2},"#,
                r#""rows":[{"values":[{"userEnteredFormat":{"backgroundColor":{"red":0.5,"green":0.0,"blue":1.0}}}]}],"#,
                r#""fields":"userEnteredFormat.backgroundColor"}}]}"#,
            ),
        );
    }
}
