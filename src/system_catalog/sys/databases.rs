use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::query::CatalogQuery;

crate::catalog_view! {
    /// A row of `sys.databases`.
    row Database, reader DatabasesReader;
    view "sys"."databases" as "sd";
    sql r#"
        SELECT
          sd.[name],
          sd.[database_id],
          sd.[source_database_id],
          sd.[owner_sid],
          sd.[create_date],
          sd.[compatibility_level],
          sd.[collation_name],
          sd.[user_access],
          sd.[user_access_desc],
          sd.[is_read_only],
          sd.[is_auto_close_on],
          sd.[is_auto_shrink_on],
          sd.[state],
          sd.[state_desc],
          sd.[is_in_standby],
          sd.[is_cleanly_shutdown],
          sd.[is_supplemental_logging_enabled],
          sd.[snapshot_isolation_state],
          sd.[snapshot_isolation_state_desc],
          sd.[is_read_committed_snapshot_on],
          sd.[recovery_model],
          sd.[recovery_model_desc],
          sd.[page_verify_option],
          sd.[page_verify_option_desc],
          sd.[is_auto_create_stats_on],
          sd.[is_auto_create_stats_incremental_on],
          sd.[is_auto_update_stats_on],
          sd.[is_auto_update_stats_async_on],
          sd.[is_ansi_null_default_on],
          sd.[is_ansi_nulls_on],
          sd.[is_ansi_padding_on],
          sd.[is_ansi_warnings_on],
          sd.[is_arithabort_on],
          sd.[is_concat_null_yields_null_on],
          sd.[is_numeric_roundabort_on],
          sd.[is_quoted_identifier_on],
          sd.[is_recursive_triggers_on],
          sd.[is_cursor_close_on_commit_on],
          sd.[is_local_cursor_default],
          sd.[is_fulltext_enabled],
          sd.[is_trustworthy_on],
          sd.[is_db_chaining_on],
          sd.[is_parameterization_forced],
          sd.[is_master_key_encrypted_by_server],
          sd.[is_query_store_on],
          sd.[is_published],
          sd.[is_subscribed],
          sd.[is_merge_published],
          sd.[is_distributor],
          sd.[is_sync_with_backup],
          sd.[service_broker_guid],
          sd.[is_broker_enabled],
          sd.[log_reuse_wait],
          sd.[log_reuse_wait_desc],
          sd.[is_date_correlation_on],
          sd.[is_cdc_enabled],
          sd.[is_encrypted],
          sd.[is_honor_broker_priority_on],
          sd.[replica_id],
          sd.[group_database_id],
          sd.[resource_pool_id],
          sd.[default_language_lcid],
          sd.[default_language_name],
          sd.[default_fulltext_language_lcid],
          sd.[default_fulltext_language_name],
          sd.[is_nested_triggers_on],
          sd.[is_transform_noise_words_on],
          sd.[two_digit_year_cutoff],
          sd.[containment],
          sd.[containment_desc],
          sd.[target_recovery_time_in_seconds],
          sd.[delayed_durability],
          sd.[delayed_durability_desc],
          sd.[is_memory_optimized_elevate_to_snapshot_on],
          sd.[is_federation_member],
          sd.[is_remote_data_archive_enabled],
          sd.[is_mixed_page_allocation_on],
          sd.[is_temporal_history_retention_enabled],
          sd.[catalog_collation_type],
          sd.[catalog_collation_type_desc],
          sd.[physical_database_name],
          sd.[is_result_set_caching_on],
          sd.[is_accelerated_database_recovery_on],
          sd.[is_tempdb_spill_to_remote_store],
          sd.[is_stale_page_detection_on],
          sd.[is_memory_optimized_enabled]
        FROM
          [sys].[databases] sd
    "#;
    columns {
        0 => name: String,
        1 => database_id: i32,
        2 => source_database_id: Option<i32>,
        3 => owner_sid: Vec<u8>,
        4 => create_date: NaiveDateTime,
        5 => compatibility_level: u8,
        6 => collation_name: Option<String>,
        7 => user_access: DatabaseUserAccess,
        8 => user_access_desc: String,
        9 => is_read_only: bool,
        10 => is_auto_close_on: bool,
        11 => is_auto_shrink_on: bool,
        12 => state: DatabaseState,
        13 => state_desc: String,
        14 => is_in_standby: bool,
        15 => is_cleanly_shutdown: bool,
        16 => is_supplemental_logging_enabled: bool,
        17 => snapshot_isolation_state: u8,
        18 => snapshot_isolation_state_desc: String,
        19 => is_read_committed_snapshot_on: bool,
        20 => recovery_model: RecoveryModel,
        21 => recovery_model_desc: String,
        22 => page_verify_option: PageVerifyOption,
        23 => page_verify_option_desc: String,
        24 => is_auto_create_stats_on: bool,
        25 => is_auto_create_stats_incremental_on: bool,
        26 => is_auto_update_stats_on: bool,
        27 => is_auto_update_stats_async_on: bool,
        28 => is_ansi_null_default_on: bool,
        29 => is_ansi_nulls_on: bool,
        30 => is_ansi_padding_on: bool,
        31 => is_ansi_warnings_on: bool,
        32 => is_arithabort_on: bool,
        33 => is_concat_null_yields_null_on: bool,
        34 => is_numeric_roundabort_on: bool,
        35 => is_quoted_identifier_on: bool,
        36 => is_recursive_triggers_on: bool,
        37 => is_cursor_close_on_commit_on: bool,
        38 => is_local_cursor_default: bool,
        39 => is_fulltext_enabled: bool,
        40 => is_trustworthy_on: bool,
        41 => is_db_chaining_on: bool,
        42 => is_parameterization_forced: bool,
        43 => is_master_key_encrypted_by_server: bool,
        44 => is_query_store_on: bool,
        45 => is_published: bool,
        46 => is_subscribed: bool,
        47 => is_merge_published: bool,
        48 => is_distributor: bool,
        49 => is_sync_with_backup: bool,
        50 => service_broker_guid: Uuid,
        51 => is_broker_enabled: bool,
        52 => log_reuse_wait: i16,
        53 => log_reuse_wait_desc: String,
        54 => is_date_correlation_on: bool,
        55 => is_cdc_enabled: bool,
        56 => is_encrypted: bool,
        57 => is_honor_broker_priority_on: bool,
        58 => replica_id: Option<Uuid>,
        59 => group_database_id: Option<Uuid>,
        60 => resource_pool_id: i32,
        61 => default_language_lcid: i16,
        62 => default_language_name: Option<String>,
        63 => default_fulltext_language_lcid: Option<i32>,
        64 => default_fulltext_language_name: Option<String>,
        65 => is_nested_triggers_on: bool,
        66 => is_transform_noise_words_on: bool,
        67 => two_digit_year_cutoff: i16,
        68 => containment: u8,
        69 => containment_desc: String,
        70 => target_recovery_time_in_seconds: Option<i32>,
        71 => delayed_durability: u8,
        72 => delayed_durability_desc: String,
        73 => is_memory_optimized_elevate_to_snapshot_on: bool,
        74 => is_federation_member: bool,
        75 => is_remote_data_archive_enabled: bool,
        76 => is_mixed_page_allocation_on: bool,
        77 => is_temporal_history_retention_enabled: bool,
        78 => catalog_collation_type: i32,
        79 => catalog_collation_type_desc: String,
        80 => physical_database_name: String,
        81 => is_result_set_caching_on: bool,
        82 => is_accelerated_database_recovery_on: bool,
        83 => is_tempdb_spill_to_remote_store: bool,
        84 => is_stale_page_detection_on: bool,
        85 => is_memory_optimized_enabled: bool,
    }
}

crate::catalog_enum! {
    pub enum DatabaseUserAccess: u8 {
        MultiUser = 0,
        SingleUser = 1,
        RestrictedUser = 2,
    }
}

crate::catalog_enum! {
    pub enum DatabaseState: u8 {
        Online = 0,
        Restoring = 1,
        Recovering = 2,
        RecoveryPending = 3,
        Suspect = 4,
        Emergency = 5,
        Offline = 6,
        Copying = 7,
        /// Azure SQL Database, geo-replication secondary.
        OfflineSecondary = 10,
    }
}

crate::catalog_enum! {
    pub enum RecoveryModel: u8 {
        Full = 1,
        BulkLogged = 2,
        Simple = 3,
    }
}

crate::catalog_enum! {
    pub enum PageVerifyOption: u8 {
        None = 0,
        TornPageDetection = 1,
        Checksum = 2,
    }
}

pub fn all() -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).order_by("database_id")
}

pub fn by_id(database_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).where_eq("database_id", "DatabaseId", database_id)
}

pub fn by_name(name: &str) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).where_eq("name", "DatabaseName", name)
}

#[cfg(test)]
#[path = "databases_tests.rs"]
mod databases_tests;
