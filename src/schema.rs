//! Declarative description of a catalog view binding: the query text plus the
//! ordinal table the generated accessors read from.

use serde::Serialize;

use crate::cursor::RowCursor;
use crate::error::{ReaderError, ReaderResult};
use crate::value::ScalarType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnBinding {
    pub ordinal: usize,
    pub name: &'static str,
    pub scalar: ScalarType,
    pub nullable: bool,
}

impl ColumnBinding {
    pub const fn new(ordinal: usize, name: &'static str, scalar: ScalarType, nullable: bool) -> Self {
        Self { ordinal, name, scalar, nullable }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ViewSchema {
    /// Catalog schema the view lives in, e.g. `sys`.
    pub schema: &'static str,
    pub name: &'static str,
    /// Table alias used in `sql`.
    pub alias: &'static str,
    pub sql: &'static str,
    pub columns: &'static [ColumnBinding],
}

impl ViewSchema {
    /// `[schema].[name]`
    pub fn qualified_name(&self) -> String {
        format!("[{}].[{}]", self.schema, self.name)
    }

    pub fn dotted_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    pub fn column(&self, ordinal: usize) -> Option<&'static ColumnBinding> {
        self.columns.get(ordinal)
    }

    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().find(|c| c.name.eq_ignore_ascii_case(name)).map(|c| c.ordinal)
    }

    /// Alias-qualified column reference for filter clauses, e.g. `sd.[database_id]`.
    pub fn column_ref(&self, name: &str) -> String {
        format!("{}.[{}]", self.alias, name)
    }

    /// Check the ordinal table is dense and ordered (`columns[i].ordinal == i`).
    pub fn check_ordinals(&self) -> ReaderResult<()> {
        for (i, c) in self.columns.iter().enumerate() {
            if c.ordinal != i {
                return Err(ReaderError::schema_mismatch(
                    self.dotted_name(),
                    format!("column '{}' is bound to ordinal {} but listed at position {}", c.name, c.ordinal, i),
                ));
            }
        }
        Ok(())
    }

    /// Compare the ordinal table against a cursor's result metadata.
    ///
    /// The field count must match. Names and scalar types are compared only for the
    /// columns the cursor reports metadata for; names compare case-insensitively.
    pub fn verify<C: RowCursor + ?Sized>(&self, cursor: &C) -> ReaderResult<()> {
        self.check_ordinals()?;
        let width = cursor.field_count();
        if width != self.columns.len() {
            return Err(ReaderError::schema_mismatch(
                self.dotted_name(),
                format!("expected {} columns, cursor has {}", self.columns.len(), width),
            ));
        }
        for c in self.columns {
            if let Some(actual) = cursor.column_name(c.ordinal) {
                if !actual.eq_ignore_ascii_case(c.name) {
                    return Err(ReaderError::schema_mismatch(
                        self.dotted_name(),
                        format!("ordinal {} is '{}' in the result, bound as '{}'", c.ordinal, actual, c.name),
                    ));
                }
            }
            if let Some(actual) = cursor.column_type(c.ordinal) {
                // Text may carry a GUID when the cursor has no native uniqueidentifier type.
                let compatible = actual == c.scalar || (c.scalar == ScalarType::Guid && matches!(actual, ScalarType::Text | ScalarType::Bytes));
                if !compatible {
                    return Err(ReaderError::schema_mismatch(
                        self.dotted_name(),
                        format!("column '{}' is {} in the result, bound as {}", c.name, actual, c.scalar),
                    ));
                }
            }
        }
        Ok(())
    }
}
