use crate::query::CatalogQuery;

crate::catalog_view! {
    /// A row of `sys.schemas`.
    row Schema, reader SchemasReader;
    view "sys"."schemas" as "s";
    sql r#"
        SELECT
          s.[name],
          s.[schema_id],
          s.[principal_id]
        FROM
          [sys].[schemas] s
    "#;
    columns {
        0 => name: String,
        1 => schema_id: i32,
        /// Owner; null for schemas owned by an application role.
        2 => principal_id: Option<i32>,
    }
}

pub fn all() -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).order_by("name")
}

pub fn by_id(schema_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).where_eq("schema_id", "SchemaId", schema_id)
}

pub fn by_name(name: &str) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).where_eq("name", "SchemaName", name)
}
