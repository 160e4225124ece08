use serde::{Deserialize, Serialize};

use crate::cursor::RowCursor;
use crate::error::{ReaderError, ReaderResult};
use crate::value::{ScalarType, Value};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryColumn {
    pub name: String,
    pub scalar: ScalarType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    BeforeFirst,
    At(usize),
    AfterLast,
}

/// Buffered result set: declared columns plus rows of cells, read front to back once.
#[derive(Clone, Debug)]
pub struct MemoryCursor {
    columns: Vec<MemoryColumn>,
    rows: Vec<Vec<Value>>,
    position: Position,
    closed: bool,
}

impl MemoryCursor {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = (S, ScalarType)>) -> Self {
        let columns = columns
            .into_iter()
            .map(|(name, scalar)| MemoryColumn { name: name.into(), scalar })
            .collect();
        Self { columns, rows: Vec::new(), position: Position::BeforeFirst, closed: false }
    }

    /// Cursor without column metadata; the field count comes from the first row.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        Self { columns: Vec::new(), rows, position: Position::BeforeFirst, closed: false }
    }

    pub fn with_row<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_row(row);
        self
    }

    pub fn push_row<I, V>(&mut self, row: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn columns(&self) -> &[MemoryColumn] { &self.columns }

    pub fn row_count(&self) -> usize { self.rows.len() }

    fn current(&self) -> ReaderResult<&[Value]> {
        if self.closed {
            return Err(ReaderError::CursorClosed);
        }
        match self.position {
            Position::At(i) => Ok(&self.rows[i]),
            Position::BeforeFirst | Position::AfterLast => Err(ReaderError::NoCurrentRow),
        }
    }

    fn cell(&self, ordinal: usize) -> ReaderResult<&Value> {
        let row = self.current()?;
        row.get(ordinal)
            .ok_or(ReaderError::OrdinalOutOfRange { ordinal, field_count: row.len() })
    }
}

impl RowCursor for MemoryCursor {
    fn advance(&mut self) -> ReaderResult<bool> {
        if self.closed {
            return Err(ReaderError::CursorClosed);
        }
        let next = match self.position {
            Position::BeforeFirst => 0,
            Position::At(i) => i + 1,
            Position::AfterLast => return Ok(false),
        };
        if next < self.rows.len() {
            self.position = Position::At(next);
            Ok(true)
        } else {
            self.position = Position::AfterLast;
            Ok(false)
        }
    }

    fn field_count(&self) -> usize {
        if !self.columns.is_empty() {
            return self.columns.len();
        }
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    fn column_name(&self, ordinal: usize) -> Option<&str> {
        self.columns.get(ordinal).map(|c| c.name.as_str())
    }

    fn column_type(&self, ordinal: usize) -> Option<ScalarType> {
        self.columns.get(ordinal).map(|c| c.scalar)
    }

    fn is_null(&self, ordinal: usize) -> ReaderResult<bool> {
        Ok(self.cell(ordinal)?.is_null())
    }

    fn value(&self, ordinal: usize) -> ReaderResult<Value> {
        self.cell(ordinal).cloned()
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn is_closed(&self) -> bool { self.closed }
}
