use chrono::{DateTime, NaiveDateTime};
use polars::prelude::{AnyValue, DataFrame, DataType, TimeUnit};
use uuid::Uuid;

use crate::cursor::{mismatch, RowCursor};
use crate::error::{ReaderError, ReaderResult};
use crate::value::{Numeric, ScalarType, Value};

/// Cursor over the rows of a polars `DataFrame`.
///
/// Columns map to scalars by dtype; GUID columns are stored as 16-byte binary or
/// as canonical text, and are only recognised when read through `get_guid`.
pub struct FrameCursor {
    frame: DataFrame,
    row: Option<usize>,
    exhausted: bool,
    closed: bool,
}

impl FrameCursor {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame, row: None, exhausted: false, closed: false }
    }

    pub fn frame(&self) -> &DataFrame { &self.frame }

    pub fn into_frame(self) -> DataFrame { self.frame }

    fn current_row(&self) -> ReaderResult<usize> {
        if self.closed {
            return Err(ReaderError::CursorClosed);
        }
        self.row.ok_or(ReaderError::NoCurrentRow)
    }

    fn any_value(&self, ordinal: usize) -> ReaderResult<AnyValue<'_>> {
        let row = self.current_row()?;
        let cols = self.frame.get_columns();
        let col = cols
            .get(ordinal)
            .ok_or(ReaderError::OrdinalOutOfRange { ordinal, field_count: cols.len() })?;
        Ok(col.as_materialized_series().get(row)?)
    }
}

fn dtype_to_scalar(dtype: &DataType) -> Option<ScalarType> {
    Some(match dtype {
        DataType::Boolean => ScalarType::Bool,
        DataType::UInt8 => ScalarType::Byte,
        DataType::Int16 => ScalarType::Int16,
        DataType::Int32 => ScalarType::Int32,
        DataType::Int64 => ScalarType::Int64,
        DataType::Float32 => ScalarType::Float,
        DataType::Float64 => ScalarType::Double,
        DataType::Decimal(..) => ScalarType::Numeric,
        DataType::Datetime(..) => ScalarType::DateTime,
        DataType::String => ScalarType::Text,
        DataType::Binary => ScalarType::Bytes,
        _ => return None,
    })
}

fn datetime_from(v: i64, unit: TimeUnit, ordinal: usize) -> ReaderResult<NaiveDateTime> {
    let dt = match unit {
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(v)),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(v),
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(v),
    };
    dt.map(|d| d.naive_utc())
        .ok_or_else(|| ReaderError::unsupported(ordinal, format!("timestamp {} is out of range", v)))
}

fn to_value(av: AnyValue<'_>, ordinal: usize) -> ReaderResult<Value> {
    Ok(match av {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::UInt8(v) => Value::Byte(v),
        AnyValue::Int16(v) => Value::Int16(v),
        AnyValue::Int32(v) => Value::Int32(v),
        AnyValue::Int64(v) => Value::Int64(v),
        AnyValue::Float32(v) => Value::Float(v),
        AnyValue::Float64(v) => Value::Double(v),
        AnyValue::String(s) => Value::Text(s.to_string()),
        AnyValue::StringOwned(s) => Value::Text(s.to_string()),
        AnyValue::Binary(b) => Value::Bytes(b.to_vec()),
        AnyValue::BinaryOwned(b) => Value::Bytes(b),
        AnyValue::Datetime(v, unit, ..) => Value::DateTime(datetime_from(v, unit, ordinal)?),
        AnyValue::Decimal(v, scale, ..) => Value::Numeric(Numeric::new(v, scale as u8)),
        other => {
            return Err(ReaderError::unsupported(ordinal, format!("no scalar mapping for {}", other.dtype())));
        }
    })
}

impl RowCursor for FrameCursor {
    fn advance(&mut self) -> ReaderResult<bool> {
        if self.closed {
            return Err(ReaderError::CursorClosed);
        }
        if self.exhausted {
            return Ok(false);
        }
        let next = self.row.map(|r| r + 1).unwrap_or(0);
        if next < self.frame.height() {
            self.row = Some(next);
            Ok(true)
        } else {
            self.row = None;
            self.exhausted = true;
            Ok(false)
        }
    }

    fn field_count(&self) -> usize { self.frame.width() }

    fn column_name(&self, ordinal: usize) -> Option<&str> {
        self.frame.get_columns().get(ordinal).map(|c| c.name().as_str())
    }

    fn column_type(&self, ordinal: usize) -> Option<ScalarType> {
        self.frame.get_columns().get(ordinal).and_then(|c| dtype_to_scalar(c.dtype()))
    }

    fn is_null(&self, ordinal: usize) -> ReaderResult<bool> {
        Ok(matches!(self.any_value(ordinal)?, AnyValue::Null))
    }

    fn value(&self, ordinal: usize) -> ReaderResult<Value> {
        to_value(self.any_value(ordinal)?, ordinal)
    }

    fn get_guid(&self, ordinal: usize) -> ReaderResult<Uuid> {
        match self.value(ordinal)? {
            Value::Guid(g) => Ok(g),
            Value::Bytes(b) if b.len() == 16 => Uuid::from_slice(&b)
                .map_err(|e| ReaderError::unsupported(ordinal, e.to_string())),
            Value::Text(s) => Uuid::parse_str(&s).map_err(|_| ReaderError::TypeMismatch {
                ordinal,
                expected: ScalarType::Guid,
                actual: ScalarType::Text,
            }),
            other => Err(mismatch(ordinal, ScalarType::Guid, &other)),
        }
    }

    fn close(&mut self) {
        self.closed = true;
        self.row = None;
    }

    fn is_closed(&self) -> bool { self.closed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom, Series};

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("schema_id".into(), vec![1i32, 4]).into(),
            Series::new("name".into(), vec![Some("dbo"), None]).into(),
            Series::new("principal_id".into(), vec![Some(1i32), None]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn reads_cells_and_nulls() {
        let mut c = FrameCursor::new(frame());
        assert_eq!(c.field_count(), 3);
        assert_eq!(c.column_name(1), Some("name"));
        assert_eq!(c.column_type(0), Some(ScalarType::Int32));
        assert!(c.advance().unwrap());
        assert_eq!(c.get_i32(0).unwrap(), 1);
        assert_eq!(c.get_string(1).unwrap(), "dbo");
        assert!(c.advance().unwrap());
        assert!(c.is_null(1).unwrap());
        assert!(c.is_null(2).unwrap());
        assert_eq!(c.get_i32(2), Err(ReaderError::NullValue { ordinal: 2, expected: ScalarType::Int32 }));
        assert!(!c.advance().unwrap());
        assert!(!c.advance().unwrap());
    }

    #[test]
    fn out_of_range_and_unpositioned() {
        let mut c = FrameCursor::new(frame());
        assert_eq!(c.value(0), Err(ReaderError::NoCurrentRow));
        c.advance().unwrap();
        assert_eq!(c.value(7), Err(ReaderError::OrdinalOutOfRange { ordinal: 7, field_count: 3 }));
    }

    #[test]
    fn guid_from_text_and_binary() {
        let g = Uuid::parse_str("6f9619ff-8b86-d011-b42d-00c04fc964ff").unwrap();
        let df = DataFrame::new(vec![
            Series::new("as_text".into(), vec![g.to_string()]).into(),
            Series::new("as_bytes".into(), vec![&g.as_bytes()[..]]).into(),
        ])
        .unwrap();
        let mut c = FrameCursor::new(df);
        c.advance().unwrap();
        assert_eq!(c.get_guid(0).unwrap(), g);
        assert_eq!(c.get_guid(1).unwrap(), g);
    }

    #[test]
    fn every_dtype_maps_to_its_scalar() {
        let ts = NaiveDateTime::parse_from_str("2024-02-29 13:45:10.123456789", "%Y-%m-%d %H:%M:%S%.9f").unwrap();
        let nanos = ts.and_utc().timestamp_nanos_opt().unwrap();
        let datetime = |name: &str, v: i64, unit: TimeUnit| -> Column {
            Series::new(name.into(), vec![v]).cast(&DataType::Datetime(unit, None)).unwrap().into()
        };
        let df = DataFrame::new(vec![
            Series::new("tiny".into(), vec![200u8]).into(),
            Series::new("small".into(), vec![-300i16]).into(),
            Series::new("big".into(), vec![i64::MIN]).into(),
            Series::new("real".into(), vec![1.5f32]).into(),
            Series::new("float".into(), vec![-2.25f64]).into(),
            Series::new("bit".into(), vec![true]).into(),
            Series::new("blob".into(), vec![&b"\x00\xff"[..]]).into(),
            datetime("ms", nanos / 1_000_000, TimeUnit::Milliseconds),
            datetime("us", nanos / 1_000, TimeUnit::Microseconds),
            datetime("ns", nanos, TimeUnit::Nanoseconds),
            Series::new("lsn".into(), vec![12345i64]).cast(&DataType::Decimal(Some(20), Some(2))).unwrap().into(),
            Series::new("unsigned".into(), vec![7u32]).into(),
        ])
        .unwrap();
        let mut c = FrameCursor::new(df);
        assert!(c.advance().unwrap());

        assert_eq!(c.get_byte(0).unwrap(), 200);
        assert_eq!(c.get_i16(1).unwrap(), -300);
        assert_eq!(c.get_i64(2).unwrap(), i64::MIN);
        assert_eq!(c.get_f32(3).unwrap(), 1.5);
        assert_eq!(c.get_f64(4).unwrap(), -2.25);
        assert!(c.get_bool(5).unwrap());
        assert_eq!(c.get_bytes(6).unwrap(), vec![0x00, 0xff]);

        let at = |fmt: &str| NaiveDateTime::parse_from_str(&ts.format(fmt).to_string(), "%Y-%m-%d %H:%M:%S%.9f").unwrap();
        assert_eq!(c.get_date_time(7).unwrap(), at("%Y-%m-%d %H:%M:%S%.3f000000"));
        assert_eq!(c.get_date_time(8).unwrap(), at("%Y-%m-%d %H:%M:%S%.6f000"));
        assert_eq!(c.get_date_time(9).unwrap(), ts);
        assert_eq!(c.column_type(9), Some(ScalarType::DateTime));

        assert_eq!(c.get_numeric(10).unwrap(), Numeric::new(1_234_500, 2));
        assert_eq!(c.column_type(10), Some(ScalarType::Numeric));

        assert_eq!(c.column_type(11), None);
        assert!(matches!(c.value(11), Err(ReaderError::Unsupported { ordinal: 11, .. })));
    }
}
