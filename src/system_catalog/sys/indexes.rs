use crate::query::CatalogQuery;

crate::catalog_view! {
    /// An index or heap of a tabular object.
    row Index, reader IndexesReader;
    view "sys"."indexes" as "si";
    sql r#"
        SELECT
          si.[object_id],
          si.[name],
          si.[index_id],
          si.[type] AS [index_type],
          si.[type_desc],
          si.[is_unique],
          si.[data_space_id],
          si.[ignore_dup_key],
          si.[is_primary_key],
          si.[is_unique_constraint],
          si.[fill_factor],
          si.[is_padded],
          si.[is_disabled],
          si.[is_hypothetical],
          si.[is_ignored_in_optimization],
          si.[allow_row_locks],
          si.[allow_page_locks],
          si.[has_filter],
          si.[filter_definition],
          si.[compression_delay],
          si.[suppress_dup_key_messages],
          si.[auto_created],
          si.[optimize_for_sequential_key]
        FROM
          [sys].[indexes] si
    "#;
    columns {
        0 => object_id: i32,
        1 => name: Option<String>,
        2 => index_id: i32,
        3 => index_type: IndexType,
        4 => type_desc: Option<String>,
        5 => is_unique: Option<bool>,
        6 => data_space_id: Option<i32>,
        7 => ignore_dup_key: Option<bool>,
        8 => is_primary_key: Option<bool>,
        9 => is_unique_constraint: Option<bool>,
        10 => fill_factor: u8,
        11 => is_padded: Option<bool>,
        12 => is_disabled: Option<bool>,
        13 => is_hypothetical: Option<bool>,
        14 => is_ignored_in_optimization: Option<bool>,
        15 => allow_row_locks: Option<bool>,
        16 => allow_page_locks: Option<bool>,
        17 => has_filter: Option<bool>,
        18 => filter_definition: Option<String>,
        19 => compression_delay: Option<i32>,
        20 => suppress_dup_key_messages: Option<bool>,
        21 => auto_created: Option<bool>,
        22 => optimize_for_sequential_key: Option<bool>,
    }
}

crate::catalog_enum! {
    pub enum IndexType: u8 {
        Heap = 0,
        Clustered = 1,
        Nonclustered = 2,
        Xml = 3,
        Spatial = 4,
        ClusteredColumnstore = 5,
        NonclusteredColumnstore = 6,
        NonclusteredHash = 7,
    }
}

pub fn for_object(object_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA)
        .where_eq("object_id", "ObjectId", object_id)
        .order_by("index_id")
}

/// At most one row: the index backing the PRIMARY KEY constraint.
pub fn primary_key(object_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA)
        .where_eq("object_id", "ObjectId", object_id)
        .filter("si.[is_primary_key] = 1")
}
