use uuid::Uuid;

use crate::query::CatalogQuery;
use crate::value::Numeric;

crate::catalog_view! {
    /// In-memory OLTP checkpoint statistics for the current database.
    row DmDbXtpCheckpointStat, reader DmDbXtpCheckpointStatsReader;
    view "sys"."dm_db_xtp_checkpoint_stats" as "ddxcs";
    sql r#"
        SELECT
          ddxcs.[last_lsn_processed],
          ddxcs.[end_of_log_lsn],
          ddxcs.[bytes_to_end_of_log],
          ddxcs.[log_consumption_rate],
          ddxcs.[active_scan_time_in_ms],
          ddxcs.[total_wait_time_in_ms],
          ddxcs.[waits_for_io_count],
          ddxcs.[io_wait_time_in_ms],
          ddxcs.[waits_for_new_log_count],
          ddxcs.[new_log_wait_time_in_ms],
          ddxcs.[idle_attempts_count],
          ddxcs.[tx_segments_dispatched_count],
          ddxcs.[segment_bytes_dispatched],
          ddxcs.[bytes_serialized],
          ddxcs.[serializer_user_time_in_ms],
          ddxcs.[serializer_kernel_time_in_ms],
          ddxcs.[xtp_log_bytes_consumed],
          ddxcs.[checkpoints_closed],
          ddxcs.[last_closed_checkpoint_ts],
          ddxcs.[hardened_recovery_lsn],
          ddxcs.[hardened_root_file_guid],
          ddxcs.[hardened_root_file_watermark],
          ddxcs.[hardened_truncation_lsn],
          ddxcs.[log_bytes_since_last_close],
          ddxcs.[time_since_last_close_in_ms],
          ddxcs.[current_checkpoint_id],
          ddxcs.[current_checkpoint_segment_count],
          ddxcs.[recovery_lsn_candidate],
          ddxcs.[outstanding_checkpoint_count],
          ddxcs.[closing_checkpoint_id],
          ddxcs.[recovery_checkpoint_id],
          ddxcs.[recovery_checkpoint_ts],
          ddxcs.[bootstrap_recovery_lsn],
          ddxcs.[bootstrap_root_file_guid],
          ddxcs.[internal_error_code],
          ddxcs.[tail_cache_page_count],
          ddxcs.[tail_cache_max_page_count],
          ddxcs.[tail_cache_min_needed_lsn],
          ddxcs.[merge_outstanding_merges],
          ddxcs.[merge_stats_number_of_merges],
          ddxcs.[merge_stats_log_blocks_merged],
          ddxcs.[merge_stats_bytes_merged],
          ddxcs.[merge_stats_user_time],
          ddxcs.[merge_stats_kernel_time],
          ddxcs.[bytes_of_large_data_serialized]
        FROM
          [sys].[dm_db_xtp_checkpoint_stats] ddxcs
    "#;
    columns {
        0 => last_lsn_processed: Option<Numeric>,
        1 => end_of_log_lsn: Option<Numeric>,
        2 => bytes_to_end_of_log: Option<i64>,
        3 => log_consumption_rate: Option<i64>,
        4 => active_scan_time_in_ms: Option<i64>,
        5 => total_wait_time_in_ms: Option<i64>,
        6 => waits_for_io_count: Option<i64>,
        7 => io_wait_time_in_ms: Option<i64>,
        8 => waits_for_new_log_count: Option<i64>,
        9 => new_log_wait_time_in_ms: Option<i64>,
        10 => idle_attempts_count: Option<i64>,
        11 => tx_segments_dispatched_count: Option<i64>,
        12 => segment_bytes_dispatched: Option<i64>,
        13 => bytes_serialized: Option<i64>,
        14 => serializer_user_time_in_ms: Option<i64>,
        15 => serializer_kernel_time_in_ms: Option<i64>,
        16 => xtp_log_bytes_consumed: Option<i64>,
        17 => checkpoints_closed: Option<i64>,
        18 => last_closed_checkpoint_ts: Option<i64>,
        19 => hardened_recovery_lsn: Option<Numeric>,
        20 => hardened_root_file_guid: Option<Uuid>,
        21 => hardened_root_file_watermark: Option<i64>,
        22 => hardened_truncation_lsn: Option<Numeric>,
        23 => log_bytes_since_last_close: Option<i64>,
        24 => time_since_last_close_in_ms: Option<i64>,
        25 => current_checkpoint_id: Option<i64>,
        26 => current_checkpoint_segment_count: Option<i64>,
        27 => recovery_lsn_candidate: Option<Numeric>,
        28 => outstanding_checkpoint_count: Option<i64>,
        29 => closing_checkpoint_id: Option<i64>,
        30 => recovery_checkpoint_id: Option<i64>,
        31 => recovery_checkpoint_ts: Option<i64>,
        32 => bootstrap_recovery_lsn: Option<Numeric>,
        33 => bootstrap_root_file_guid: Option<Uuid>,
        34 => internal_error_code: Option<i64>,
        35 => tail_cache_page_count: Option<i64>,
        36 => tail_cache_max_page_count: Option<i64>,
        37 => tail_cache_min_needed_lsn: Option<Numeric>,
        38 => merge_outstanding_merges: Option<i64>,
        39 => merge_stats_number_of_merges: Option<i64>,
        40 => merge_stats_log_blocks_merged: Option<i64>,
        41 => merge_stats_bytes_merged: Option<i64>,
        42 => merge_stats_user_time: Option<i64>,
        43 => merge_stats_kernel_time: Option<i64>,
        44 => bytes_of_large_data_serialized: Option<i64>,
    }
}

/// The view holds a single row per database; this is its plain select.
pub fn current() -> CatalogQuery {
    CatalogQuery::new(&SCHEMA)
}
