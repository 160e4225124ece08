//! Ownership-aware typed wrapper around a `RowCursor`.

use chrono::NaiveDateTime;
use tracing::{debug, error};
use uuid::Uuid;

use crate::config::ReaderConfig;
use crate::cursor::RowCursor;
use crate::error::{ReaderError, ReaderResult};
use crate::schema::ViewSchema;
use crate::value::{Numeric, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReaderState {
    BeforeFirst,
    OnRow,
    Exhausted,
    Closed,
}

/// Typed, ordinal-based view over a cursor.
///
/// With `owns_cursor` the cursor is closed when the reader is closed or dropped;
/// otherwise the caller keeps it and it stays usable after the reader is gone.
pub struct DataReader<C: RowCursor> {
    cursor: Option<C>,
    owns_cursor: bool,
    state: ReaderState,
    config: ReaderConfig,
}

macro_rules! reader_get {
    ($name:ident, $nullable:ident -> $t:ty) => {
        pub fn $name(&self, ordinal: usize) -> ReaderResult<$t> {
            let r = self.cursor()?.$name(ordinal);
            self.log_failure(stringify!($name), ordinal, r)
        }

        pub fn $nullable(&self, ordinal: usize) -> ReaderResult<Option<$t>> {
            if self.is_null(ordinal)? {
                return Ok(None);
            }
            self.$name(ordinal).map(Some)
        }
    };
}

impl<C: RowCursor> DataReader<C> {
    pub fn new(cursor: C, owns_cursor: bool) -> Self {
        Self::build(cursor, owns_cursor, ReaderConfig::default())
    }

    /// Wrap with explicit settings; nothing is read until `read`.
    pub fn with_config(cursor: C, owns_cursor: bool, config: ReaderConfig) -> Self {
        Self::build(cursor, owns_cursor, config)
    }

    fn build(cursor: C, owns_cursor: bool, config: ReaderConfig) -> Self {
        debug!(target: "catalog_reader::reader", owns_cursor, fields = cursor.field_count(), "reader opened");
        Self { cursor: Some(cursor), owns_cursor, state: ReaderState::BeforeFirst, config }
    }

    pub fn state(&self) -> ReaderState { self.state }

    pub fn owns_cursor(&self) -> bool { self.owns_cursor }

    pub fn config(&self) -> &ReaderConfig { &self.config }

    pub fn is_closed(&self) -> bool { self.state == ReaderState::Closed }

    fn cursor(&self) -> ReaderResult<&C> {
        self.cursor.as_ref().ok_or(ReaderError::ReaderClosed)
    }

    fn log_failure<T>(&self, op: &str, ordinal: usize, r: ReaderResult<T>) -> ReaderResult<T> {
        if let Err(e) = &r {
            if self.config.log_errors {
                error!(target: "catalog_reader::reader", code = e.code_str(), "Exception in {}({}) - {}", op, ordinal, e);
            }
        }
        r
    }

    /// Advance to the next row. Once exhausted this keeps returning `Ok(false)`
    /// without touching the cursor.
    pub fn read(&mut self) -> ReaderResult<bool> {
        match self.state {
            ReaderState::Closed => return Err(ReaderError::ReaderClosed),
            ReaderState::Exhausted => return Ok(false),
            ReaderState::BeforeFirst | ReaderState::OnRow => {}
        }
        let cursor = self.cursor.as_mut().ok_or(ReaderError::ReaderClosed)?;
        let r = cursor.advance();
        let has_row = self.log_failure("read", 0, r)?;
        self.state = if has_row { ReaderState::OnRow } else { ReaderState::Exhausted };
        Ok(has_row)
    }

    pub fn field_count(&self) -> ReaderResult<usize> {
        Ok(self.cursor()?.field_count())
    }

    pub fn column_name(&self, ordinal: usize) -> Option<&str> {
        self.cursor.as_ref().and_then(|c| c.column_name(ordinal))
    }

    pub fn is_null(&self, ordinal: usize) -> ReaderResult<bool> {
        let r = self.cursor()?.is_null(ordinal);
        self.log_failure("is_null", ordinal, r)
    }

    pub fn get_value(&self, ordinal: usize) -> ReaderResult<Value> {
        let r = self.cursor()?.value(ordinal);
        self.log_failure("get_value", ordinal, r)
    }

    reader_get!(get_i16, get_nullable_i16 -> i16);
    reader_get!(get_i32, get_nullable_i32 -> i32);
    reader_get!(get_i64, get_nullable_i64 -> i64);
    reader_get!(get_byte, get_nullable_byte -> u8);
    reader_get!(get_bool, get_nullable_bool -> bool);
    reader_get!(get_f32, get_nullable_f32 -> f32);
    reader_get!(get_f64, get_nullable_f64 -> f64);
    reader_get!(get_numeric, get_nullable_numeric -> Numeric);
    reader_get!(get_date_time, get_nullable_date_time -> NaiveDateTime);
    reader_get!(get_guid, get_nullable_guid -> Uuid);
    reader_get!(get_string, get_nullable_string -> String);
    reader_get!(get_bytes, get_nullable_bytes -> Vec<u8>);

    /// Compare a view's ordinal table with the cursor's result metadata.
    pub fn verify(&self, view: &ViewSchema) -> ReaderResult<()> {
        let r = view.verify(self.cursor()?);
        if let Err(e) = &r {
            error!(target: "catalog_reader::reader", view = %view.dotted_name(), "schema check failed: {}", e);
        }
        r
    }

    /// Release the cursor: closed when owned, left alone otherwise. Idempotent.
    pub fn close(&mut self) {
        if self.state == ReaderState::Closed {
            return;
        }
        self.state = ReaderState::Closed;
        if let Some(mut cursor) = self.cursor.take() {
            if self.owns_cursor && !cursor.is_closed() {
                cursor.close();
            }
            debug!(target: "catalog_reader::reader", owns_cursor = self.owns_cursor, "reader closed");
        }
    }

    /// Hand the cursor back to the caller without closing it.
    pub fn into_cursor(mut self) -> Option<C> {
        self.state = ReaderState::Closed;
        self.cursor.take()
    }
}

impl<C: RowCursor> Drop for DataReader<C> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
