use chrono::NaiveDateTime;

use crate::query::CatalogQuery;

crate::catalog_view! {
    /// A schema-scoped object: table, view, procedure, constraint and so on.
    row Object, reader ObjectsReader;
    view "sys"."objects" as "so";
    sql r#"
        SELECT
          so.[name],
          so.[object_id],
          so.[principal_id],
          so.[schema_id],
          so.[parent_object_id],
          so.[type] AS [object_type],
          so.[type_desc],
          so.[create_date],
          so.[modify_date],
          so.[is_ms_shipped],
          so.[is_published],
          so.[is_schema_published]
        FROM
          [sys].[objects] so
    "#;
    columns {
        0 => name: String,
        1 => object_id: i32,
        2 => principal_id: Option<i32>,
        3 => schema_id: i32,
        4 => parent_object_id: i32,
        5 => object_type: String,
        6 => type_desc: Option<String>,
        7 => create_date: NaiveDateTime,
        8 => modify_date: NaiveDateTime,
        9 => is_ms_shipped: bool,
        10 => is_published: bool,
        11 => is_schema_published: bool,
    }
}

pub fn in_schema(schema_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).where_eq("schema_id", "SchemaId", schema_id)
}

pub fn by_id(object_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).where_eq("object_id", "ObjectId", object_id)
}

pub fn by_name(schema_id: i32, name: &str) -> CatalogQuery {
    in_schema(schema_id).where_eq("name", "ObjectName", name)
}
