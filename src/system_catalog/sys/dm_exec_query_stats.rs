use chrono::NaiveDateTime;

use crate::query::CatalogQuery;

crate::catalog_view! {
    /// Aggregate performance statistics for one cached plan statement.
    row DmExecQueryStat, reader DmExecQueryStatsReader;
    view "sys"."dm_exec_query_stats" as "deqs";
    sql r#"
        SELECT
          deqs.[sql_handle],
          deqs.[statement_start_offset],
          deqs.[statement_end_offset],
          deqs.[plan_generation_num],
          deqs.[plan_handle],
          deqs.[creation_time],
          deqs.[last_execution_time],
          deqs.[execution_count],
          deqs.[total_worker_time],
          deqs.[last_worker_time],
          deqs.[min_worker_time],
          deqs.[max_worker_time],
          deqs.[total_physical_reads],
          deqs.[last_physical_reads],
          deqs.[min_physical_reads],
          deqs.[max_physical_reads],
          deqs.[total_logical_writes],
          deqs.[last_logical_writes],
          deqs.[min_logical_writes],
          deqs.[max_logical_writes],
          deqs.[total_logical_reads],
          deqs.[last_logical_reads],
          deqs.[min_logical_reads],
          deqs.[max_logical_reads],
          deqs.[total_clr_time],
          deqs.[last_clr_time],
          deqs.[min_clr_time],
          deqs.[max_clr_time],
          deqs.[total_elapsed_time],
          deqs.[last_elapsed_time],
          deqs.[min_elapsed_time],
          deqs.[max_elapsed_time],
          deqs.[query_hash],
          deqs.[query_plan_hash],
          deqs.[total_rows],
          deqs.[last_rows],
          deqs.[min_rows],
          deqs.[max_rows],
          deqs.[statement_sql_handle],
          deqs.[statement_context_id],
          deqs.[total_dop],
          deqs.[last_dop],
          deqs.[min_dop],
          deqs.[max_dop],
          deqs.[total_grant_kb],
          deqs.[last_grant_kb],
          deqs.[min_grant_kb],
          deqs.[max_grant_kb],
          deqs.[total_used_grant_kb],
          deqs.[last_used_grant_kb],
          deqs.[min_used_grant_kb],
          deqs.[max_used_grant_kb],
          deqs.[total_ideal_grant_kb],
          deqs.[last_ideal_grant_kb],
          deqs.[min_ideal_grant_kb],
          deqs.[max_ideal_grant_kb],
          deqs.[total_reserved_threads],
          deqs.[last_reserved_threads],
          deqs.[min_reserved_threads],
          deqs.[max_reserved_threads],
          deqs.[total_used_threads],
          deqs.[last_used_threads],
          deqs.[min_used_threads],
          deqs.[max_used_threads],
          deqs.[total_columnstore_segment_reads],
          deqs.[last_columnstore_segment_reads],
          deqs.[min_columnstore_segment_reads],
          deqs.[max_columnstore_segment_reads],
          deqs.[total_columnstore_segment_skips],
          deqs.[last_columnstore_segment_skips],
          deqs.[min_columnstore_segment_skips],
          deqs.[max_columnstore_segment_skips],
          deqs.[total_spills],
          deqs.[last_spills],
          deqs.[min_spills],
          deqs.[max_spills],
          deqs.[total_num_physical_reads],
          deqs.[last_num_physical_reads],
          deqs.[min_num_physical_reads],
          deqs.[max_num_physical_reads],
          deqs.[total_page_server_reads],
          deqs.[last_page_server_reads],
          deqs.[min_page_server_reads],
          deqs.[max_page_server_reads],
          deqs.[total_num_page_server_reads],
          deqs.[last_num_page_server_reads],
          deqs.[min_num_page_server_reads],
          deqs.[max_num_page_server_reads]
        FROM
          [sys].[dm_exec_query_stats] deqs
    "#;
    columns {
        0 => sql_handle: Vec<u8>,
        1 => statement_start_offset: i32,
        2 => statement_end_offset: i32,
        3 => plan_generation_num: Option<i64>,
        4 => plan_handle: Vec<u8>,
        5 => creation_time: Option<NaiveDateTime>,
        6 => last_execution_time: Option<NaiveDateTime>,
        7 => execution_count: i64,
        8 => total_worker_time: i64,
        9 => last_worker_time: i64,
        10 => min_worker_time: i64,
        11 => max_worker_time: i64,
        12 => total_physical_reads: i64,
        13 => last_physical_reads: i64,
        14 => min_physical_reads: i64,
        15 => max_physical_reads: i64,
        16 => total_logical_writes: i64,
        17 => last_logical_writes: i64,
        18 => min_logical_writes: i64,
        19 => max_logical_writes: i64,
        20 => total_logical_reads: i64,
        21 => last_logical_reads: i64,
        22 => min_logical_reads: i64,
        23 => max_logical_reads: i64,
        24 => total_clr_time: i64,
        25 => last_clr_time: i64,
        26 => min_clr_time: i64,
        27 => max_clr_time: i64,
        28 => total_elapsed_time: i64,
        29 => last_elapsed_time: i64,
        30 => min_elapsed_time: i64,
        31 => max_elapsed_time: i64,
        32 => query_hash: Option<Vec<u8>>,
        33 => query_plan_hash: Option<Vec<u8>>,
        34 => total_rows: Option<i64>,
        35 => last_rows: Option<i64>,
        36 => min_rows: Option<i64>,
        37 => max_rows: Option<i64>,
        38 => statement_sql_handle: Option<Vec<u8>>,
        39 => statement_context_id: Option<i64>,
        40 => total_dop: Option<i64>,
        41 => last_dop: Option<i64>,
        42 => min_dop: Option<i64>,
        43 => max_dop: Option<i64>,
        44 => total_grant_kb: Option<i64>,
        45 => last_grant_kb: Option<i64>,
        46 => min_grant_kb: Option<i64>,
        47 => max_grant_kb: Option<i64>,
        48 => total_used_grant_kb: Option<i64>,
        49 => last_used_grant_kb: Option<i64>,
        50 => min_used_grant_kb: Option<i64>,
        51 => max_used_grant_kb: Option<i64>,
        52 => total_ideal_grant_kb: Option<i64>,
        53 => last_ideal_grant_kb: Option<i64>,
        54 => min_ideal_grant_kb: Option<i64>,
        55 => max_ideal_grant_kb: Option<i64>,
        56 => total_reserved_threads: Option<i64>,
        57 => last_reserved_threads: Option<i64>,
        58 => min_reserved_threads: Option<i64>,
        59 => max_reserved_threads: Option<i64>,
        60 => total_used_threads: Option<i64>,
        61 => last_used_threads: Option<i64>,
        62 => min_used_threads: Option<i64>,
        63 => max_used_threads: Option<i64>,
        64 => total_columnstore_segment_reads: Option<i64>,
        65 => last_columnstore_segment_reads: Option<i64>,
        66 => min_columnstore_segment_reads: Option<i64>,
        67 => max_columnstore_segment_reads: Option<i64>,
        68 => total_columnstore_segment_skips: Option<i64>,
        69 => last_columnstore_segment_skips: Option<i64>,
        70 => min_columnstore_segment_skips: Option<i64>,
        71 => max_columnstore_segment_skips: Option<i64>,
        72 => total_spills: Option<i64>,
        73 => last_spills: Option<i64>,
        74 => min_spills: Option<i64>,
        75 => max_spills: Option<i64>,
        76 => total_num_physical_reads: i64,
        77 => last_num_physical_reads: i64,
        78 => min_num_physical_reads: i64,
        79 => max_num_physical_reads: i64,
        80 => total_page_server_reads: i64,
        81 => last_page_server_reads: i64,
        82 => min_page_server_reads: i64,
        83 => max_page_server_reads: i64,
        84 => total_num_page_server_reads: i64,
        85 => last_num_page_server_reads: i64,
        86 => min_num_page_server_reads: i64,
        87 => max_num_page_server_reads: i64,
    }
}

pub fn for_plan(plan_handle: Vec<u8>) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA)
        .where_eq("plan_handle", "PlanHandle", plan_handle)
        .order_by("statement_start_offset")
}

pub fn for_query_hash(query_hash: Vec<u8>) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).where_eq("query_hash", "QueryHash", query_hash)
}
