use crate::query::CatalogQuery;

crate::catalog_view! {
    row MaskedColumn, reader MaskedColumnsReader;
    view "sys"."masked_columns" as "mc";
    sql r#"
        SELECT
          mc.[object_id],
          mc.[name],
          mc.[column_id],
          mc.[system_type_id],
          mc.[user_type_id],
          mc.[max_length],
          mc.[precision],
          mc.[scale],
          mc.[collation_name],
          mc.[is_nullable],
          mc.[is_ansi_padded],
          mc.[is_rowguidcol],
          mc.[is_identity],
          mc.[is_filestream],
          mc.[is_replicated],
          mc.[is_non_sql_subscribed],
          mc.[is_merge_published],
          mc.[is_dts_replicated],
          mc.[is_xml_document],
          mc.[xml_collection_id],
          mc.[default_object_id],
          mc.[rule_object_id],
          mc.[definition],
          mc.[uses_database_collation],
          mc.[is_persisted],
          mc.[is_computed],
          mc.[is_sparse],
          mc.[is_column_set],
          mc.[generated_always_type],
          mc.[generated_always_type_desc],
          mc.[encryption_type],
          mc.[encryption_type_desc],
          mc.[encryption_algorithm_name],
          mc.[column_encryption_key_id],
          mc.[column_encryption_key_database_name],
          mc.[is_hidden],
          mc.[is_masked],
          mc.[masking_function],
          mc.[graph_type],
          mc.[graph_type_desc]
        FROM
          [sys].[masked_columns] mc
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
        13 => is_filestream: bool,
        14 => is_replicated: bool,
        15 => is_non_sql_subscribed: bool,
        16 => is_merge_published: bool,
        17 => is_dts_replicated: bool,
        18 => is_xml_document: bool,
        19 => xml_collection_id: Option<i32>,
        20 => default_object_id: Option<i32>,
        21 => rule_object_id: Option<i32>,
        22 => definition: Option<String>,
        23 => uses_database_collation: bool,
        24 => is_persisted: bool,
        25 => is_computed: bool,
        26 => is_sparse: bool,
        27 => is_column_set: bool,
        28 => generated_always_type: u8,
        29 => generated_always_type_desc: Option<String>,
        30 => encryption_type: Option<i32>,
        31 => encryption_type_desc: Option<String>,
        32 => encryption_algorithm_name: Option<String>,
        33 => column_encryption_key_id: Option<i32>,
        34 => column_encryption_key_database_name: Option<String>,
        35 => is_hidden: bool,
        36 => is_masked: bool,
        37 => masking_function: Option<String>,
        38 => graph_type: Option<i32>,
        39 => graph_type_desc: Option<String>,
    }
}

/// Masked columns of one table, in column order.
pub fn for_object(object_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA)
        .where_eq("object_id", "ObjectId", object_id)
        .order_by("column_id")
}
