//! Cell values and value grid shaping
//!
//! The service hands grids back as JSON arrays of rows, trimmed of trailing
//! empty cells and rows. [`ensure_rectangular`] grows such a grid back to the
//! rectangle of the range it was read from; it only ever appends, it never
//! drops cells.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::a1::A1Range;

/// An enum to represent the JSON scalars the service stores in cells
///
/// Integers are kept apart from floats so that values written back keep
/// their identity on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Signed integer
    Int(i64),
    /// Float
    Float(f64),
    /// Boolean
    Bool(bool),
    /// String
    String(String),
}

impl Default for Value {
    fn default() -> Value {
        Value::String(String::new())
    }
}

impl Value {
    /// Whether this is the empty string, the service's vacant cell
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::String(v.to_string())
    }
}

/// Whether a grid is listed row-major or column-major on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MajorDimension {
    /// One inner array per row
    Rows,
    /// One inner array per column
    Columns,
}

/// How the service should interpret written values
///
/// Rendered in the wire form expected by the `valueInputOption` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    /// Store values as-is, without parsing
    Raw,
    /// Parse values as if typed into the grid by a user
    UserEntered,
}

impl ValueInputOption {
    /// The wire form, for use in a query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

impl fmt::Display for ValueInputOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The body of a values read or update call
///
/// A read response for a range with no trailing data omits `values`
/// entirely; the serde defaults turn that into an empty grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValueRange {
    /// The range the values cover, in A1 notation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Row-major or column-major listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<MajorDimension>,
    /// The cell values, one inner `Vec` per row
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    /// Builds the body of a values update call over `range`
    ///
    /// # Examples
    /// ```
    /// use sheetgrid::{A1Range, Value, ValueRange};
    ///
    /// let range: A1Range = "testing!A1:B1".parse().unwrap();
    /// let body = ValueRange::for_update(&range, vec![vec![Value::from(1), Value::from(2)]]);
    /// assert_eq!(body.range.as_deref(), Some("testing!A1:B1"));
    /// ```
    pub fn for_update(range: &A1Range, values: Vec<Vec<Value>>) -> ValueRange {
        ValueRange {
            range: Some(range.to_string()),
            major_dimension: Some(MajorDimension::Rows),
            values,
        }
    }

    /// Consumes a read response and pads its grid to the range rectangle
    pub fn into_rectangular(self, range: &A1Range) -> Vec<Vec<Value>> {
        ensure_rectangular(range, self.values)
    }
}

/// Pads `values` to the rectangle of `range` with empty strings
///
/// See [`ensure_rectangular_with`] for the padding rules.
pub fn ensure_rectangular(range: &A1Range, values: Vec<Vec<Value>>) -> Vec<Vec<Value>> {
    ensure_rectangular_with(range, values, &Value::default())
}

/// Pads `values` to the rectangle of `range` with copies of `fill`
///
/// Missing rows are appended, then every row shorter than the range width is
/// extended with `fill`. Rows and columns are never dropped: a grid larger
/// than the rectangle on either axis keeps its extra cells, so the operation
/// is idempotent once the grid meets the rectangle.
pub fn ensure_rectangular_with(
    range: &A1Range,
    mut values: Vec<Vec<Value>>,
    fill: &Value,
) -> Vec<Vec<Value>> {
    let (height, width) = range.get_size();
    if values.len() > height {
        warn!(
            "grid has {} rows for a {height}x{width} range, keeping the extra rows",
            values.len()
        );
    }
    if values.len() < height {
        values.resize_with(height, Vec::new);
    }
    for row in &mut values {
        if row.len() < width {
            row.resize(width, fill.clone());
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(text: &str) -> A1Range {
        text.parse().unwrap()
    }

    #[test]
    fn test_pad_short_grid() {
        let values = ensure_rectangular(&range("A1:D2"), vec![vec![Value::from("1")]]);
        assert_eq!(
            values,
            vec![
                vec![
                    Value::from("1"),
                    Value::from(""),
                    Value::from(""),
                    Value::from(""),
                ],
                vec![
                    Value::from(""),
                    Value::from(""),
                    Value::from(""),
                    Value::from(""),
                ],
            ],
        );
    }

    #[test]
    fn test_pad_is_idempotent() {
        let r = range("A1:D2");
        let once = ensure_rectangular(&r, vec![vec![Value::from("1")]]);
        let twice = ensure_rectangular(&r, once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pad_never_truncates() {
        // 3 rows and 3 columns against a 2x2 range: everything is kept and
        // the short second row is still padded to the range width
        let r = range("A1:B2");
        let values = ensure_rectangular(
            &r,
            vec![
                vec![Value::from(1), Value::from(2), Value::from(3)],
                vec![Value::from(4)],
                vec![Value::from(5), Value::from(6)],
            ],
        );
        assert_eq!(values.len(), 3);
        assert_eq!(values[0].len(), 3);
        assert_eq!(values[1], vec![Value::from(4), Value::from("")]);
        assert_eq!(values[2], vec![Value::from(5), Value::from(6)]);
    }

    #[test]
    fn test_pad_custom_fill() {
        let values =
            ensure_rectangular_with(&range("A1:B1"), vec![vec![]], &Value::from(0));
        assert_eq!(values, vec![vec![Value::from(0), Value::from(0)]]);
    }

    #[test]
    fn test_pad_empty_grid() {
        let values = ensure_rectangular(&range("A1:A1"), Vec::new());
        assert_eq!(values, vec![vec![Value::from("")]]);
    }

    #[test]
    fn test_value_untagged_json() {
        let grid: Vec<Vec<Value>> =
            serde_json::from_str(r#"[["a", 1, 2.5, true], [""]]"#).unwrap();
        assert_eq!(
            grid,
            vec![
                vec![
                    Value::from("a"),
                    Value::from(1),
                    Value::from(2.5),
                    Value::from(true),
                ],
                vec![Value::from("")],
            ],
        );
        assert_eq!(
            serde_json::to_string(&grid).unwrap(),
            r#"[["a",1,2.5,true],[""]]"#,
        );
    }

    #[test]
    fn test_value_range_missing_values() {
        let body: ValueRange = serde_json::from_str(r#"{"range": "A1:B2"}"#).unwrap();
        assert!(body.values.is_empty());
        let values = body.into_rectangular(&range("A1:B2"));
        assert!(values.iter().flatten().all(Value::is_empty));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_update_body_json() {
        let body = ValueRange::for_update(
            &range("testing!A1:B1"),
            vec![vec![Value::from("x"), Value::from(2)]],
        );
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"range":"testing!A1:B1","majorDimension":"ROWS","values":[["x",2]]}"#,
        );
    }
}
