use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Scalar column types a catalog binding can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    Int16,
    Int32,
    Int64,
    Byte,
    Bool,
    Float,
    Double,
    Numeric,
    DateTime,
    Guid,
    Text,
    Bytes,
}

impl ScalarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Int16 => "int16",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::Byte => "byte",
            ScalarType::Bool => "bool",
            ScalarType::Float => "float",
            ScalarType::Double => "double",
            ScalarType::Numeric => "numeric",
            ScalarType::DateTime => "datetime",
            ScalarType::Guid => "guid",
            ScalarType::Text => "text",
            ScalarType::Bytes => "bytes",
        }
    }

    /// SQL Server type name this scalar is read from.
    pub fn sql_type_name(&self) -> &'static str {
        match self {
            ScalarType::Int16 => "smallint",
            ScalarType::Int32 => "int",
            ScalarType::Int64 => "bigint",
            ScalarType::Byte => "tinyint",
            ScalarType::Bool => "bit",
            ScalarType::Float => "real",
            ScalarType::Double => "float",
            ScalarType::Numeric => "numeric",
            ScalarType::DateTime => "datetime",
            ScalarType::Guid => "uniqueidentifier",
            ScalarType::Text => "nvarchar",
            ScalarType::Bytes => "varbinary",
        }
    }
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-point decimal as delivered for `numeric`/`decimal` columns.
/// `mantissa` is the unscaled integer, so `12.50` is `{ mantissa: 1250, scale: 2 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Numeric {
    pub mantissa: i128,
    pub scale: u8,
}

impl Numeric {
    pub const fn new(mantissa: i128, scale: u8) -> Self { Self { mantissa, scale } }
    pub const fn integer(value: i128) -> Self { Self { mantissa: value, scale: 0 } }

    /// Integral part, truncating toward zero.
    pub fn trunc(&self) -> i128 {
        // 10^39 exceeds any i128 mantissa, so a wider scale leaves no integral part.
        10i128.checked_pow(self.scale as u32).map_or(0, |d| self.mantissa / d)
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.mantissa);
        }
        let scale = self.scale as usize;
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let digits = format!("{:0>width$}", self.mantissa.unsigned_abs(), width = scale + 1);
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

/// One cell as handed out by a cursor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Byte(u8),
    Bool(bool),
    Float(f32),
    Double(f64),
    Numeric(Numeric),
    DateTime(NaiveDateTime),
    Guid(Uuid),
    Text(String),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool { matches!(self, Value::Null) }

    /// Scalar type of a non-null value.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        Some(match self {
            Value::Null => return None,
            Value::Int16(_) => ScalarType::Int16,
            Value::Int32(_) => ScalarType::Int32,
            Value::Int64(_) => ScalarType::Int64,
            Value::Byte(_) => ScalarType::Byte,
            Value::Bool(_) => ScalarType::Bool,
            Value::Float(_) => ScalarType::Float,
            Value::Double(_) => ScalarType::Double,
            Value::Numeric(_) => ScalarType::Numeric,
            Value::DateTime(_) => ScalarType::DateTime,
            Value::Guid(_) => ScalarType::Guid,
            Value::Text(_) => ScalarType::Text,
            Value::Bytes(_) => ScalarType::Bytes,
        })
    }
}

macro_rules! value_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self { Value::$variant(v) }
            }
        )*
    };
}

value_from! {
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Byte,
    bool => Bool,
    f32 => Float,
    f64 => Double,
    Numeric => Numeric,
    NaiveDateTime => DateTime,
    Uuid => Guid,
    String => Text,
    Vec<u8> => Bytes,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self { Value::Text(v.to_string()) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
