use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::cursor::RowCursor;
use crate::error::ReaderResult;
use crate::reader::DataReader;
use crate::value::{Numeric, ScalarType};

/// A Rust type a bound column can be read into.
///
/// Plain types are non-nullable; `Option<T>` checks for null before reading `T`.
pub trait ColumnValue: Sized {
    const SCALAR: ScalarType;
    const NULLABLE: bool = false;

    fn read_column<C: RowCursor>(reader: &DataReader<C>, ordinal: usize) -> ReaderResult<Self>;
}

macro_rules! column_value {
    ($($t:ty => $scalar:ident, $getter:ident;)*) => {
        $(
            impl ColumnValue for $t {
                const SCALAR: ScalarType = ScalarType::$scalar;

                fn read_column<C: RowCursor>(reader: &DataReader<C>, ordinal: usize) -> ReaderResult<Self> {
                    reader.$getter(ordinal)
                }
            }
        )*
    };
}

column_value! {
    i16 => Int16, get_i16;
    i32 => Int32, get_i32;
    i64 => Int64, get_i64;
    u8 => Byte, get_byte;
    bool => Bool, get_bool;
    f32 => Float, get_f32;
    f64 => Double, get_f64;
    Numeric => Numeric, get_numeric;
    NaiveDateTime => DateTime, get_date_time;
    Uuid => Guid, get_guid;
    String => Text, get_string;
    Vec<u8> => Bytes, get_bytes;
}

impl<T: ColumnValue> ColumnValue for Option<T> {
    const SCALAR: ScalarType = T::SCALAR;
    const NULLABLE: bool = true;

    fn read_column<C: RowCursor>(reader: &DataReader<C>, ordinal: usize) -> ReaderResult<Self> {
        if reader.is_null(ordinal)? {
            return Ok(None);
        }
        T::read_column(reader, ordinal).map(Some)
    }
}
