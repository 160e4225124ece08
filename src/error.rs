//! Unified reader error model.
//! Every failure raised by a cursor, the typed wrapper or a generated view binding
//! surfaces as a `ReaderError`; readers never translate or swallow them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::ScalarType;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReaderError {
    #[error("ordinal {ordinal} is out of range for a row with {field_count} fields")]
    OrdinalOutOfRange { ordinal: usize, field_count: usize },
    #[error("column {ordinal} holds {actual}, not {expected}")]
    TypeMismatch { ordinal: usize, expected: ScalarType, actual: ScalarType },
    #[error("column {ordinal} is null but was read as non-nullable {expected}")]
    NullValue { ordinal: usize, expected: ScalarType },
    #[error("the cursor is not positioned on a row")]
    NoCurrentRow,
    #[error("the cursor has been closed")]
    CursorClosed,
    #[error("the reader has been closed")]
    ReaderClosed,
    #[error("{value} is not a valid {type_name}")]
    InvalidEnumValue { type_name: String, value: i64 },
    #[error("{view}: {detail}")]
    SchemaMismatch { view: String, detail: String },
    #[error("column {ordinal}: {detail}")]
    Unsupported { ordinal: usize, detail: String },
    #[error("driver error: {message}")]
    Driver { message: String },
}

impl ReaderError {
    pub fn code_str(&self) -> &'static str {
        match self {
            ReaderError::OrdinalOutOfRange { .. } => "ordinal_out_of_range",
            ReaderError::TypeMismatch { .. } => "type_mismatch",
            ReaderError::NullValue { .. } => "null_value",
            ReaderError::NoCurrentRow => "no_current_row",
            ReaderError::CursorClosed => "cursor_closed",
            ReaderError::ReaderClosed => "reader_closed",
            ReaderError::InvalidEnumValue { .. } => "invalid_enum_value",
            ReaderError::SchemaMismatch { .. } => "schema_mismatch",
            ReaderError::Unsupported { .. } => "unsupported",
            ReaderError::Driver { .. } => "driver_error",
        }
    }

    pub fn driver<S: Into<String>>(msg: S) -> Self { ReaderError::Driver { message: msg.into() } }
    pub fn schema_mismatch<S: Into<String>>(view: S, detail: S) -> Self {
        ReaderError::SchemaMismatch { view: view.into(), detail: detail.into() }
    }
    pub fn unsupported<S: Into<String>>(ordinal: usize, detail: S) -> Self {
        ReaderError::Unsupported { ordinal, detail: detail.into() }
    }

    /// True for errors that indicate a binding that disagrees with the result shape
    /// (wrong ordinal table, wrong declared type, or a null in a non-nullable column).
    pub fn is_binding_defect(&self) -> bool {
        matches!(
            self,
            ReaderError::OrdinalOutOfRange { .. }
                | ReaderError::TypeMismatch { .. }
                | ReaderError::NullValue { .. }
                | ReaderError::SchemaMismatch { .. }
        )
    }
}

pub type ReaderResult<T> = Result<T, ReaderError>;

impl From<anyhow::Error> for ReaderError {
    fn from(err: anyhow::Error) -> Self {
        ReaderError::Driver { message: err.to_string() }
    }
}

impl From<polars::prelude::PolarsError> for ReaderError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        ReaderError::Driver { message: err.to_string() }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
