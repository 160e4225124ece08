use crate::query::CatalogQuery;

crate::catalog_view! {
    row IndexColumn, reader IndexColumnsReader;
    view "sys"."index_columns" as "sic";
    sql r#"
        SELECT
          sic.[object_id],
          sic.[index_id],
          sic.[index_column_id],
          sic.[column_id],
          sic.[key_ordinal],
          sic.[partition_ordinal],
          sic.[is_descending_key],
          sic.[is_included_column],
          sic.[column_store_order_ordinal]
        FROM
          [sys].[index_columns] sic
    "#;
    columns {
        0 => object_id: i32,
        1 => index_id: i32,
        2 => index_column_id: i32,
        3 => column_id: i32,
        4 => key_ordinal: u8,
        5 => partition_ordinal: u8,
        6 => is_descending_key: Option<bool>,
        7 => is_included_column: Option<bool>,
        8 => column_store_order_ordinal: u8,
    }
}

/// Key and included columns of one index, key columns first in key order.
pub fn for_index(object_id: i32, index_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA)
        .where_eq("object_id", "ObjectId", object_id)
        .where_eq("index_id", "IndexId", index_id)
        .order_by("key_ordinal")
}
