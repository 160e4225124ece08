use chrono::NaiveDateTime;

use crate::query::CatalogQuery;

crate::catalog_view! {
    /// A user table.
    row Table, reader TablesReader;
    view "sys"."tables" as "st";
    sql r#"
        SELECT
          st.[name],
          st.[object_id],
          st.[principal_id],
          st.[schema_id],
          st.[parent_object_id],
          st.[type] AS [object_type],
          st.[type_desc],
          st.[create_date],
          st.[modify_date],
          st.[is_ms_shipped],
          st.[is_published],
          st.[is_schema_published],
          st.[lob_data_space_id],
          st.[filestream_data_space_id],
          st.[max_column_id_used],
          st.[lock_on_bulk_load],
          st.[uses_ansi_nulls],
          st.[is_replicated],
          st.[has_replication_filter],
          st.[is_merge_published],
          st.[is_sync_tran_subscribed],
          st.[has_unchecked_assembly_data],
          st.[text_in_row_limit],
          st.[large_value_types_out_of_row],
          st.[is_tracked_by_cdc],
          st.[lock_escalation],
          st.[lock_escalation_desc],
          st.[is_filetable],
          st.[is_memory_optimized],
          st.[durability],
          st.[durability_desc],
          st.[temporal_type],
          st.[temporal_type_desc],
          st.[history_table_id],
          st.[is_remote_data_archive_enabled],
          st.[is_external]
        FROM
          [sys].[tables] st
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
        12 => lob_data_space_id: i32,
        13 => filestream_data_space_id: Option<i32>,
        14 => max_column_id_used: i32,
        15 => lock_on_bulk_load: bool,
        16 => uses_ansi_nulls: Option<bool>,
        17 => is_replicated: Option<bool>,
        18 => has_replication_filter: Option<bool>,
        19 => is_merge_published: Option<bool>,
        20 => is_sync_tran_subscribed: Option<bool>,
        21 => has_unchecked_assembly_data: bool,
        22 => text_in_row_limit: Option<i32>,
        23 => large_value_types_out_of_row: Option<bool>,
        24 => is_tracked_by_cdc: Option<bool>,
        25 => lock_escalation: Option<u8>,
        26 => lock_escalation_desc: Option<String>,
        27 => is_filetable: Option<bool>,
        28 => is_memory_optimized: Option<bool>,
        29 => durability: Option<u8>,
        30 => durability_desc: Option<String>,
        31 => temporal_type: Option<u8>,
        32 => temporal_type_desc: Option<String>,
        33 => history_table_id: Option<i32>,
        34 => is_remote_data_archive_enabled: Option<bool>,
        35 => is_external: bool,
    }
}

pub fn in_schema(schema_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).where_eq("schema_id", "SchemaId", schema_id)
}

pub fn by_id(schema_id: i32, object_id: i32) -> CatalogQuery {
    in_schema(schema_id).where_eq("object_id", "ObjectId", object_id)
}

pub fn by_name(schema_id: i32, name: &str) -> CatalogQuery {
    in_schema(schema_id).where_eq("name", "ObjectName", name)
}
