//! Composition of catalog query text and the seam to whatever executes it.

use std::fmt::{Display, Formatter};

use tracing::debug;

use crate::cursor::RowCursor;
use crate::error::ReaderResult;
use crate::mapper::{CatalogRow, TypedReader};
use crate::schema::ViewSchema;
use crate::value::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct QueryParam {
    /// Parameter name including the `@` prefix.
    pub name: String,
    pub value: Value,
}

/// A view's base query plus filters, ordering and named parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogQuery {
    view: &'static ViewSchema,
    filters: Vec<String>,
    order_by: Vec<String>,
    params: Vec<QueryParam>,
}

impl CatalogQuery {
    pub fn new(view: &'static ViewSchema) -> Self {
        Self { view, filters: Vec::new(), order_by: Vec::new(), params: Vec::new() }
    }

    pub fn of<T: CatalogRow>() -> Self {
        Self::new(T::SCHEMA)
    }

    pub fn view(&self) -> &'static ViewSchema { self.view }

    pub fn params(&self) -> &[QueryParam] { &self.params }

    /// Raw `WHERE` predicate, ANDed with the others.
    pub fn filter<S: Into<String>>(mut self, predicate: S) -> Self {
        self.filters.push(predicate.into());
        self
    }

    /// `alias.[column] = @param`, binding `value` to `@param`.
    pub fn where_eq<V: Into<Value>>(mut self, column: &str, param: &str, value: V) -> Self {
        let param = if param.starts_with('@') { param.to_string() } else { format!("@{}", param) };
        self.filters.push(format!("{} = {}", self.view.column_ref(column), param));
        self.params.push(QueryParam { name: param, value: value.into() });
        self
    }

    pub fn order_by(mut self, column: &str) -> Self {
        self.order_by.push(self.view.column_ref(column));
        self
    }

    /// Full statement text.
    pub fn sql(&self) -> String {
        let mut sql = self.view.sql.trim_end().to_string();
        if !self.filters.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.filters.join(" AND "));
        }
        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by.join(", "));
        }
        sql
    }
}

impl Display for CatalogQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.sql())
    }
}

/// Runs catalog queries. Implemented by the caller on top of its driver.
pub trait QueryExecutor {
    type Cursor: RowCursor;

    fn execute(&mut self, query: &CatalogQuery) -> ReaderResult<Self::Cursor>;
}

/// Execute `query` and read every row as `T`. The cursor is closed afterwards.
pub fn fetch_all<T, E>(executor: &mut E, query: &CatalogQuery) -> ReaderResult<Vec<T>>
where
    T: CatalogRow,
    E: QueryExecutor + ?Sized,
{
    debug!(target: "catalog_reader::query", view = query.view().name, params = query.params().len(), "fetch_all");
    let cursor = executor.execute(query)?;
    TypedReader::<T, E::Cursor>::new(cursor, true).to_list()
}

/// Execute `query` and read the first row as `T`, if any.
pub fn fetch_optional<T, E>(executor: &mut E, query: &CatalogQuery) -> ReaderResult<Option<T>>
where
    T: CatalogRow,
    E: QueryExecutor + ?Sized,
{
    debug!(target: "catalog_reader::query", view = query.view().name, "fetch_optional");
    let cursor = executor.execute(query)?;
    let mut reader = TypedReader::<T, E::Cursor>::new(cursor, true);
    if reader.read()? {
        return reader.to_value_object().map(Some);
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnBinding;
    use crate::value::ScalarType;

    const COLS: &[ColumnBinding] = &[
        ColumnBinding::new(0, "name", ScalarType::Text, false),
        ColumnBinding::new(1, "schema_id", ScalarType::Int32, false),
    ];
    static VIEW: ViewSchema = ViewSchema {
        schema: "sys",
        name: "schemas",
        alias: "s",
        sql: "SELECT s.[name], s.[schema_id] FROM [sys].[schemas] s\n",
        columns: COLS,
    };

    #[test]
    fn base_query_is_unchanged_without_filters() {
        let q = CatalogQuery::new(&VIEW);
        assert_eq!(q.sql(), "SELECT s.[name], s.[schema_id] FROM [sys].[schemas] s");
        assert!(q.params().is_empty());
    }

    #[test]
    fn filters_are_anded_and_params_bound() {
        let q = CatalogQuery::new(&VIEW)
            .where_eq("schema_id", "SchemaId", 5)
            .filter("s.[name] <> N'sys'")
            .order_by("name");
        assert_eq!(
            q.sql(),
            "SELECT s.[name], s.[schema_id] FROM [sys].[schemas] s WHERE s.[schema_id] = @SchemaId AND s.[name] <> N'sys' ORDER BY s.[name]"
        );
        assert_eq!(q.params(), &[QueryParam { name: "@SchemaId".into(), value: Value::Int32(5) }]);
        assert_eq!(q.to_string(), q.sql());
    }
}
