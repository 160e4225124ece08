use crate::query::CatalogQuery;

crate::catalog_view! {
    /// A column of a table, view or table-valued function.
    row Column, reader ColumnsReader;
    view "sys"."columns" as "sc";
    sql r#"
        SELECT
          sc.[object_id],
          sc.[name],
          sc.[column_id],
          sc.[system_type_id],
          sc.[user_type_id],
          sc.[max_length],
          sc.[precision],
          sc.[scale],
          sc.[collation_name],
          sc.[is_nullable],
          sc.[is_ansi_padded],
          sc.[is_rowguidcol],
          sc.[is_identity],
          sc.[is_computed],
          sc.[is_filestream],
          sc.[is_replicated],
          sc.[is_non_sql_subscribed],
          sc.[is_merge_published],
          sc.[is_dts_replicated],
          sc.[is_xml_document],
          sc.[xml_collection_id],
          sc.[default_object_id],
          sc.[rule_object_id],
          sc.[is_sparse],
          sc.[is_column_set],
          sc.[generated_always_type],
          sc.[generated_always_type_desc],
          sc.[encryption_type],
          sc.[encryption_type_desc],
          sc.[encryption_algorithm_name],
          sc.[column_encryption_key_id],
          sc.[column_encryption_key_database_name],
          sc.[is_hidden],
          sc.[is_masked]
        FROM
          [sys].[columns] sc
    "#;
    columns {
        0 => object_id: i32,
        1 => name: String,
        2 => column_id: i32,
        3 => system_type_id: u8,
        4 => user_type_id: i32,
        5 => max_length: i16,
        6 => precision: u8,
        7 => scale: u8,
        8 => collation_name: Option<String>,
        9 => is_nullable: bool,
        10 => is_ansi_padded: bool,
        11 => is_rowguidcol: bool,
        12 => is_identity: bool,
        13 => is_computed: bool,
        14 => is_filestream: bool,
        15 => is_replicated: Option<bool>,
        16 => is_non_sql_subscribed: Option<bool>,
        17 => is_merge_published: Option<bool>,
        18 => is_dts_replicated: Option<bool>,
        19 => is_xml_document: bool,
        20 => xml_collection_id: i32,
        21 => default_object_id: i32,
        22 => rule_object_id: i32,
        23 => is_sparse: Option<bool>,
        24 => is_column_set: Option<bool>,
        25 => generated_always_type: Option<u8>,
        26 => generated_always_type_desc: Option<String>,
        27 => encryption_type: Option<i32>,
        28 => encryption_type_desc: Option<String>,
        29 => encryption_algorithm_name: Option<String>,
        30 => column_encryption_key_id: Option<i32>,
        31 => column_encryption_key_database_name: Option<String>,
        32 => is_hidden: Option<bool>,
        33 => is_masked: bool,
    }
}

/// Columns of a table or view in column order.
pub fn for_object(object_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA)
        .where_eq("object_id", "ObjectId", object_id)
        .order_by("column_id")
}

pub fn by_id(object_id: i32, column_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA)
        .where_eq("object_id", "ObjectId", object_id)
        .where_eq("column_id", "ColumnId", column_id)
}
