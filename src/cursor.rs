//! Positional, forward-only row cursor contract.
//! A driver hands one of these to a reader; the reader never looks at column names
//! while reading rows, only at ordinals.

pub mod frame;
pub mod memory;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::{ReaderError, ReaderResult};
use crate::value::{Numeric, ScalarType, Value};

pub use frame::FrameCursor;
pub use memory::MemoryCursor;

/// Build the error for a cell that does not hold the requested scalar.
pub fn mismatch(ordinal: usize, expected: ScalarType, found: &Value) -> ReaderError {
    match found.scalar_type() {
        None => ReaderError::NullValue { ordinal, expected },
        Some(actual) => ReaderError::TypeMismatch { ordinal, expected, actual },
    }
}

macro_rules! typed_get {
    ($(#[$m:meta])* $name:ident -> $t:ty, $variant:ident) => {
        $(#[$m])*
        fn $name(&self, ordinal: usize) -> ReaderResult<$t> {
            match self.value(ordinal)? {
                Value::$variant(v) => Ok(v),
                other => Err(mismatch(ordinal, ScalarType::$variant, &other)),
            }
        }
    };
}

pub trait RowCursor {
    /// Move to the next row. `Ok(false)` once the rows are exhausted.
    fn advance(&mut self) -> ReaderResult<bool>;

    /// Number of columns in each row.
    fn field_count(&self) -> usize;

    /// Column name at `ordinal`, when the driver exposes result metadata.
    fn column_name(&self, _ordinal: usize) -> Option<&str> { None }

    fn column_type(&self, _ordinal: usize) -> Option<ScalarType> { None }

    fn is_null(&self, ordinal: usize) -> ReaderResult<bool>;

    /// Cell at `ordinal` of the current row.
    fn value(&self, ordinal: usize) -> ReaderResult<Value>;

    typed_get!(get_i16 -> i16, Int16);
    typed_get!(get_i32 -> i32, Int32);
    typed_get!(get_i64 -> i64, Int64);
    typed_get!(get_byte -> u8, Byte);
    typed_get!(get_bool -> bool, Bool);
    typed_get!(get_f32 -> f32, Float);
    typed_get!(get_f64 -> f64, Double);
    typed_get!(get_numeric -> Numeric, Numeric);
    typed_get!(get_date_time -> NaiveDateTime, DateTime);
    typed_get!(get_guid -> Uuid, Guid);
    typed_get!(get_string -> String, Text);
    typed_get!(get_bytes -> Vec<u8>, Bytes);

    fn close(&mut self) {}

    fn is_closed(&self) -> bool { false }
}

macro_rules! forward_cursor {
    () => {
        fn advance(&mut self) -> ReaderResult<bool> { (**self).advance() }
        fn field_count(&self) -> usize { (**self).field_count() }
        fn column_name(&self, ordinal: usize) -> Option<&str> { (**self).column_name(ordinal) }
        fn column_type(&self, ordinal: usize) -> Option<ScalarType> { (**self).column_type(ordinal) }
        fn is_null(&self, ordinal: usize) -> ReaderResult<bool> { (**self).is_null(ordinal) }
        fn value(&self, ordinal: usize) -> ReaderResult<Value> { (**self).value(ordinal) }
        fn get_i16(&self, ordinal: usize) -> ReaderResult<i16> { (**self).get_i16(ordinal) }
        fn get_i32(&self, ordinal: usize) -> ReaderResult<i32> { (**self).get_i32(ordinal) }
        fn get_i64(&self, ordinal: usize) -> ReaderResult<i64> { (**self).get_i64(ordinal) }
        fn get_byte(&self, ordinal: usize) -> ReaderResult<u8> { (**self).get_byte(ordinal) }
        fn get_bool(&self, ordinal: usize) -> ReaderResult<bool> { (**self).get_bool(ordinal) }
        fn get_f32(&self, ordinal: usize) -> ReaderResult<f32> { (**self).get_f32(ordinal) }
        fn get_f64(&self, ordinal: usize) -> ReaderResult<f64> { (**self).get_f64(ordinal) }
        fn get_numeric(&self, ordinal: usize) -> ReaderResult<Numeric> { (**self).get_numeric(ordinal) }
        fn get_date_time(&self, ordinal: usize) -> ReaderResult<NaiveDateTime> { (**self).get_date_time(ordinal) }
        fn get_guid(&self, ordinal: usize) -> ReaderResult<Uuid> { (**self).get_guid(ordinal) }
        fn get_string(&self, ordinal: usize) -> ReaderResult<String> { (**self).get_string(ordinal) }
        fn get_bytes(&self, ordinal: usize) -> ReaderResult<Vec<u8>> { (**self).get_bytes(ordinal) }
        fn close(&mut self) { (**self).close() }
        fn is_closed(&self) -> bool { (**self).is_closed() }
    };
}

// A reader can wrap a borrowed cursor; closing through the reference closes the
// caller's cursor, so borrowed cursors are normally wrapped with `owns_cursor = false`.
impl<C: RowCursor + ?Sized> RowCursor for &mut C {
    forward_cursor!();
}

impl<C: RowCursor + ?Sized> RowCursor for Box<C> {
    forward_cursor!();
}
