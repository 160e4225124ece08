//! Generic row mapper: turns a positioned `DataReader` into value objects.
//!
//! A catalog binding is a `CatalogRow` (schema + per-row constructor); `TypedReader`
//! drives any cursor through it. `catalog_view!` generates both from a column table.

use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::config::ReaderConfig;
use crate::cursor::RowCursor;
use crate::error::ReaderResult;
use crate::reader::DataReader;
use crate::schema::ViewSchema;

pub trait CatalogRow: Sized {
    const SCHEMA: &'static ViewSchema;

    /// Build the value object from the reader's current row.
    fn from_reader<C: RowCursor>(reader: &DataReader<C>) -> ReaderResult<Self>;
}

pub struct TypedReader<T: CatalogRow, C: RowCursor> {
    reader: DataReader<C>,
    _row: PhantomData<fn() -> T>,
}

impl<T: CatalogRow, C: RowCursor> TypedReader<T, C> {
    pub fn new(cursor: C, owns_cursor: bool) -> Self {
        Self { reader: DataReader::new(cursor, owns_cursor), _row: PhantomData }
    }

    /// Wrap with explicit settings. With `verify_schema` the cursor's metadata is
    /// checked against `T::SCHEMA` before any row is read.
    pub fn with_config(cursor: C, owns_cursor: bool, config: ReaderConfig) -> ReaderResult<Self> {
        let reader = DataReader::with_config(cursor, owns_cursor, config);
        if config.verify_schema {
            reader.verify(T::SCHEMA)?;
        }
        Ok(Self { reader, _row: PhantomData })
    }

    pub fn schema(&self) -> &'static ViewSchema { T::SCHEMA }

    pub fn read(&mut self) -> ReaderResult<bool> { self.reader.read() }

    /// Materialize the current row.
    pub fn to_value_object(&self) -> ReaderResult<T> {
        T::from_reader(&self.reader)
    }

    /// Drain the cursor into a list, in cursor order. The first failure ends the drain.
    pub fn to_list(&mut self) -> ReaderResult<Vec<T>> {
        let mut list = Vec::new();
        while self.reader.read()? {
            list.push(self.to_value_object()?);
        }
        debug!(target: "catalog_reader::mapper", view = T::SCHEMA.name, rows = list.len(), "drained");
        Ok(list)
    }

    /// Row-by-row alternative to `to_list`.
    pub fn rows(&mut self) -> Rows<'_, T, C> {
        Rows { inner: self, failed: false }
    }

    pub fn reader(&self) -> &DataReader<C> { &self.reader }

    pub fn reader_mut(&mut self) -> &mut DataReader<C> { &mut self.reader }

    pub fn close(&mut self) { self.reader.close() }

    pub fn into_cursor(self) -> Option<C> { self.reader.into_cursor() }
}

impl<T: CatalogRow, C: RowCursor> Deref for TypedReader<T, C> {
    type Target = DataReader<C>;
    fn deref(&self) -> &Self::Target { &self.reader }
}

impl<T: CatalogRow, C: RowCursor> DerefMut for TypedReader<T, C> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.reader }
}

pub struct Rows<'a, T: CatalogRow, C: RowCursor> {
    inner: &'a mut TypedReader<T, C>,
    failed: bool,
}

impl<T: CatalogRow, C: RowCursor> Iterator for Rows<'_, T, C> {
    type Item = ReaderResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let step = match self.inner.read() {
            Ok(true) => self.inner.to_value_object(),
            Ok(false) => return None,
            Err(e) => Err(e),
        };
        self.failed = step.is_err();
        Some(step)
    }
}

/// Read every row of `cursor` as `T`, then close it.
///
/// To keep a cursor open afterwards, drain it through
/// `TypedReader::new(&mut cursor, false)` instead.
pub fn read_all<T: CatalogRow, C: RowCursor>(cursor: C) -> ReaderResult<Vec<T>> {
    TypedReader::<T, C>::new(cursor, true).to_list()
}

/// Generate a catalog view binding in the current module.
///
/// Produces `SQL`, `COLUMNS`, `SCHEMA`, an `ordinal` module with one constant per
/// column, the value object struct with its `CatalogRow` impl, and a reader type
/// with one accessor per column. The caller crate needs `serde` with `derive`.
///
/// ```ignore
/// catalog_reader::catalog_view! {
///     /// A row of sys.schemas
///     row Schema, reader SchemasReader;
///     view "sys"."schemas" as "s";
///     sql "SELECT s.[name], s.[schema_id], s.[principal_id] FROM [sys].[schemas] s";
///     columns {
///         0 => name: String,
///         1 => schema_id: i32,
///         2 => principal_id: Option<i32>,
///     }
/// }
/// ```
#[macro_export]
macro_rules! catalog_view {
    (
        $(#[$row_meta:meta])*
        row $row:ident, reader $reader:ident;
        view $schema:literal . $name:literal as $alias:literal;
        sql $sql:literal;
        columns {
            $( $(#[$col_meta:meta])* $ord:literal => $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        pub const SQL: &str = $sql;

        pub const COLUMNS: &[$crate::schema::ColumnBinding] = &[
            $(
                $crate::schema::ColumnBinding::new(
                    $ord,
                    stringify!($field),
                    <$ty as $crate::column::ColumnValue>::SCALAR,
                    <$ty as $crate::column::ColumnValue>::NULLABLE,
                ),
            )+
        ];

        pub const SCHEMA: $crate::schema::ViewSchema = $crate::schema::ViewSchema {
            schema: $schema,
            name: $name,
            alias: $alias,
            sql: $sql,
            columns: COLUMNS,
        };

        #[allow(non_upper_case_globals)]
        pub mod ordinal {
            $( pub const $field: usize = $ord; )+
        }

        $(#[$row_meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $row {
            $( $(#[$col_meta])* pub $field: $ty, )+
        }

        impl $crate::mapper::CatalogRow for $row {
            const SCHEMA: &'static $crate::schema::ViewSchema = &SCHEMA;

            fn from_reader<C: $crate::cursor::RowCursor>(
                reader: &$crate::reader::DataReader<C>,
            ) -> $crate::error::ReaderResult<Self> {
                Ok(Self {
                    $( $field: <$ty as $crate::column::ColumnValue>::read_column(reader, $ord)?, )+
                })
            }
        }

        pub struct $reader<C: $crate::cursor::RowCursor> {
            inner: $crate::mapper::TypedReader<$row, C>,
        }

        impl<C: $crate::cursor::RowCursor> $reader<C> {
            pub const SQL: &'static str = $sql;

            pub fn new(cursor: C, owns_cursor: bool) -> Self {
                Self { inner: $crate::mapper::TypedReader::new(cursor, owns_cursor) }
            }

            pub fn with_config(
                cursor: C,
                owns_cursor: bool,
                config: $crate::config::ReaderConfig,
            ) -> $crate::error::ReaderResult<Self> {
                Ok(Self { inner: $crate::mapper::TypedReader::with_config(cursor, owns_cursor, config)? })
            }

            $(
                pub fn $field(&self) -> $crate::error::ReaderResult<$ty> {
                    <$ty as $crate::column::ColumnValue>::read_column(self.inner.reader(), $ord)
                }
            )+

            pub fn into_typed(self) -> $crate::mapper::TypedReader<$row, C> {
                self.inner
            }
        }

        impl<C: $crate::cursor::RowCursor> ::std::ops::Deref for $reader<C> {
            type Target = $crate::mapper::TypedReader<$row, C>;
            fn deref(&self) -> &Self::Target { &self.inner }
        }

        impl<C: $crate::cursor::RowCursor> ::std::ops::DerefMut for $reader<C> {
            fn deref_mut(&mut self) -> &mut Self::Target { &mut self.inner }
        }
    };
}

/// Enum stored as an integer code in a catalog column.
///
/// ```ignore
/// catalog_reader::catalog_enum! {
///     pub enum RecoveryModel: u8 { Full = 1, BulkLogged = 2, Simple = 3 }
/// }
/// ```
#[macro_export]
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[repr($repr)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            pub const fn code(self) -> $repr { self as $repr }
        }

        impl ::std::convert::TryFrom<$repr> for $name {
            type Error = $crate::error::ReaderError;

            fn try_from(code: $repr) -> ::std::result::Result<Self, Self::Error> {
                match code {
                    $( $value => Ok($name::$variant), )+
                    other => Err($crate::error::ReaderError::InvalidEnumValue {
                        type_name: stringify!($name).to_string(),
                        value: other as i64,
                    }),
                }
            }
        }

        impl $crate::column::ColumnValue for $name {
            const SCALAR: $crate::value::ScalarType = <$repr as $crate::column::ColumnValue>::SCALAR;

            fn read_column<C: $crate::cursor::RowCursor>(
                reader: &$crate::reader::DataReader<C>,
                ordinal: usize,
            ) -> $crate::error::ReaderResult<Self> {
                let code = <$repr as $crate::column::ColumnValue>::read_column(reader, ordinal)?;
                <$name as ::std::convert::TryFrom<$repr>>::try_from(code)
            }
        }
    };
}

#[cfg(test)]
#[path = "mapper_tests.rs"]
mod mapper_tests;
