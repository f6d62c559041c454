use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Delimiter – inferred from the header line
// ---------------------------------------------------------------------------

/// Cell separator used by a table. Chosen once from the header line and
/// applied to every data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    /// Runs of spaces and/or tabs.
    Whitespace,
}

impl Delimiter {
    /// Guess the delimiter of a single line.
    pub fn detect(line: &str) -> Self {
        if line.contains(',') {
            Delimiter::Comma
        } else {
            Delimiter::Whitespace
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Whitespace => write!(f, "whitespace"),
        }
    }
}

// ---------------------------------------------------------------------------
// RawTable – header + string cells, straight from the text
// ---------------------------------------------------------------------------

/// Parsed tabular text. Every row has exactly `header.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Preamble lines preceding the header, in file order.
    pub metadata: Vec<String>,
    /// Column names.
    pub header: Vec<String>,
    /// Data rows (string cells).
    pub rows: Vec<Vec<String>>,
    pub delimiter: Delimiter,
    /// Lines after the header that were dropped for having the wrong cell count.
    pub skipped: usize,
}

impl RawTable {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header name of a 0-based column, if it exists.
    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.header.get(index).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Point – one (x, y) sample
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// `[x, y]` as egui_plot expects it.
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}
