//! A module to parse and render A1 notation
//!
//! # Reference
//! Google Sheets API concepts, "A1 notation"
//! https://developers.google.com/sheets/api/guides/concepts

use std::fmt;
use std::str::FromStr;

/// An enum for A1 notation specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum A1Error {
    /// Text is not a letters-then-digits cell reference
    InvalidCellReference(String),
    /// Wrong number of ':' or '!' separators
    InvalidRangeFormat(String),
    /// End coordinate precedes start coordinate
    InvalidRangeOrder {
        /// Top left cell as parsed
        start: CellRef,
        /// Bottom right cell as parsed
        end: CellRef,
    },
}

impl fmt::Display for A1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            A1Error::InvalidCellReference(s) => {
                write!(f, "'{s}' is not an A1 cell reference")
            }
            A1Error::InvalidRangeFormat(s) => write!(f, "'{s}' is not an A1 cell range"),
            A1Error::InvalidRangeOrder { start, end } => {
                write!(f, "range end '{end}' precedes its start '{start}'")
            }
        }
    }
}

impl std::error::Error for A1Error {}

/// A single cell position, 1-based on both axes
///
/// The column comes from the bijective base-26 letter run ('A' is 1, 'Z' is
/// 26, 'AA' is 27), the row from the decimal numeral. Both components are
/// required, so the smallest reference is `A1` at (1, 1).
///
/// # Examples
/// ```
/// use sheetgrid::CellRef;
///
/// let cell: CellRef = "ADG666".parse().unwrap();
/// assert_eq!((cell.row, cell.col), (666, 787));
/// assert_eq!(cell.to_string(), "ADG666");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellRef {
    /// 1-based row number
    pub row: u32,
    /// 1-based column number
    pub col: u32,
}

impl CellRef {
    /// Creates a new `CellRef` from 1-based row and column numbers
    pub fn new(row: u32, col: u32) -> CellRef {
        CellRef { row, col }
    }
}

/// Splits a cell reference into its letter and digit runs.
///
/// Enforces the letters-then-digits shape; a letter after the first digit or
/// any other character is an error. Either run may come back empty.
fn split_runs(text: &str) -> Result<(&str, &str), A1Error> {
    let mut digits_at = None;
    for (i, c) in text.bytes().enumerate() {
        match c {
            b'A'..=b'Z' | b'a'..=b'z' => {
                if digits_at.is_some() {
                    return Err(A1Error::InvalidCellReference(text.to_string()));
                }
            }
            b'0'..=b'9' => {
                if digits_at.is_none() {
                    digits_at = Some(i);
                }
            }
            _ => return Err(A1Error::InvalidCellReference(text.to_string())),
        }
    }
    let at = digits_at.unwrap_or(text.len());
    Ok((&text[..at], &text[at..]))
}

impl FromStr for CellRef {
    type Err = A1Error;

    fn from_str(s: &str) -> Result<CellRef, A1Error> {
        let (letters, digits) = split_runs(s)?;
        if letters.is_empty() || digits.is_empty() {
            return Err(A1Error::InvalidCellReference(s.to_string()));
        }
        let mut col = 0u32;
        for c in letters.bytes() {
            let value = (c.to_ascii_uppercase() - b'A') as u32 + 1;
            col = col
                .checked_mul(26)
                .and_then(|col| col.checked_add(value))
                .ok_or_else(|| A1Error::InvalidCellReference(s.to_string()))?;
        }
        // leading zeros are allowed and ignored ("A0001" is "A1")
        let row = digits
            .parse::<u32>()
            .map_err(|_| A1Error::InvalidCellReference(s.to_string()))?;
        if row == 0 {
            return Err(A1Error::InvalidCellReference(s.to_string()));
        }
        Ok(CellRef { row, col })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut num = self.col;
        let mut letters = String::new();
        while num > 0 {
            letters.insert(0, (b'A' + ((num - 1) % 26) as u8) as char);
            num = (num - 1) / 26;
        }
        write!(f, "{}{}", letters, self.row)
    }
}

/// A rectangular cell selection with an optional sheet qualifier
///
/// Parsed from text of the form `[sheet!]start:end`. The sheet name is
/// present iff the text carried a '!' qualifier. Both axes are 1-based and
/// inclusive; `start <= end` holds on both axes (equality is a single-cell
/// range).
///
/// # Examples
/// ```
/// use sheetgrid::A1Range;
///
/// let range: A1Range = "Sheet1!A1:B2".parse().unwrap();
/// assert_eq!(range.sheet.as_deref(), Some("Sheet1"));
/// assert_eq!(range.get_size(), (2, 2));
/// assert_eq!(range.to_string(), "Sheet1!A1:B2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct A1Range {
    /// Sheet qualifier, present iff the text carried a '!'
    pub sheet: Option<String>,
    /// Top left cell
    pub start: CellRef,
    /// Bottom right cell
    pub end: CellRef,
}

impl A1Range {
    /// Creates a new `A1Range`, validating the endpoint order
    pub fn new(sheet: Option<String>, start: CellRef, end: CellRef) -> Result<A1Range, A1Error> {
        if start.row > end.row || start.col > end.col {
            return Err(A1Error::InvalidRangeOrder { start, end });
        }
        Ok(A1Range { sheet, start, end })
    }

    /// Get row count
    pub fn height(&self) -> usize {
        (self.end.row - self.start.row + 1) as usize
    }

    /// Get column count
    pub fn width(&self) -> usize {
        (self.end.col - self.start.col + 1) as usize
    }

    /// Get size in (height, width) format
    pub fn get_size(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// Whether both endpoints name the same cell
    pub fn is_single_cell(&self) -> bool {
        self.start == self.end
    }
}

impl FromStr for A1Range {
    type Err = A1Error;

    fn from_str(s: &str) -> Result<A1Range, A1Error> {
        let mut parts = s.split('!');
        let (sheet, cells) = match (parts.next(), parts.next(), parts.next()) {
            (Some(cells), None, _) => (None, cells),
            (Some(sheet), Some(cells), None) => (Some(sheet.to_string()), cells),
            _ => return Err(A1Error::InvalidRangeFormat(s.to_string())),
        };
        let mut ends = cells.split(':');
        let (start, end) = match (ends.next(), ends.next(), ends.next()) {
            (Some(start), Some(end), None) => (start.parse()?, end.parse()?),
            _ => return Err(A1Error::InvalidRangeFormat(s.to_string())),
        };
        A1Range::new(sheet, start, end)
    }
}

impl fmt::Display for A1Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref sheet) = self.sheet {
            write!(f, "{sheet}!")?;
        }
        write!(f, "{}:{}", self.start, self.end)
    }
}
