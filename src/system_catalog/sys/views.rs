use chrono::NaiveDateTime;

use crate::query::CatalogQuery;

crate::catalog_view! {
    row View, reader ViewsReader;
    view "sys"."views" as "sv";
    sql r#"
        SELECT
          sv.[name],
          sv.[object_id],
          sv.[principal_id],
          sv.[schema_id],
          sv.[parent_object_id],
          sv.[type] AS [object_type],
          sv.[type_desc],
          sv.[create_date],
          sv.[modify_date],
          sv.[is_ms_shipped],
          sv.[is_published],
          sv.[is_schema_published],
          sv.[is_replicated],
          sv.[has_replication_filter],
          sv.[has_opaque_metadata],
          sv.[has_unchecked_assembly_data],
          sv.[with_check_option],
          sv.[is_date_correlation_view],
          sv.[is_tracked_by_cdc]
        FROM
          [sys].[views] sv
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
        12 => is_replicated: Option<bool>,
        13 => has_replication_filter: Option<bool>,
        14 => has_opaque_metadata: bool,
        15 => has_unchecked_assembly_data: bool,
        16 => with_check_option: bool,
        17 => is_date_correlation_view: bool,
        18 => is_tracked_by_cdc: Option<bool>,
    }
}

pub fn in_schema(schema_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).where_eq("schema_id", "SchemaId", schema_id)
}

pub fn by_id(schema_id: i32, view_id: i32) -> CatalogQuery {
    in_schema(schema_id).where_eq("object_id", "ViewId", view_id)
}

pub fn by_name(schema_id: i32, name: &str) -> CatalogQuery {
    in_schema(schema_id).where_eq("name", "ViewName", name)
}
