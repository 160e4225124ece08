use chrono::NaiveDateTime;

use crate::query::CatalogQuery;

crate::catalog_view! {
    /// Query Store runtime statistics for one plan and interval.
    row QueryStoreRuntimeStat, reader QueryStoreRuntimeStatsReader;
    view "sys"."query_store_runtime_stats" as "qsrs";
    sql r#"
        SELECT
          qsrs.[runtime_stats_id],
          qsrs.[plan_id],
          qsrs.[runtime_stats_interval_id],
          qsrs.[execution_type],
          qsrs.[execution_type_desc],
          qsrs.[first_execution_time],
          qsrs.[last_execution_time],
          qsrs.[count_executions],
          qsrs.[avg_duration],
          qsrs.[last_duration],
          qsrs.[min_duration],
          qsrs.[max_duration],
          qsrs.[stdev_duration],
          qsrs.[avg_cpu_time],
          qsrs.[last_cpu_time],
          qsrs.[min_cpu_time],
          qsrs.[max_cpu_time],
          qsrs.[stdev_cpu_time],
          qsrs.[avg_logical_io_reads],
          qsrs.[last_logical_io_reads],
          qsrs.[min_logical_io_reads],
          qsrs.[max_logical_io_reads],
          qsrs.[stdev_logical_io_reads],
          qsrs.[avg_logical_io_writes],
          qsrs.[last_logical_io_writes],
          qsrs.[min_logical_io_writes],
          qsrs.[max_logical_io_writes],
          qsrs.[stdev_logical_io_writes],
          qsrs.[avg_physical_io_reads],
          qsrs.[last_physical_io_reads],
          qsrs.[min_physical_io_reads],
          qsrs.[max_physical_io_reads],
          qsrs.[stdev_physical_io_reads],
          qsrs.[avg_clr_time],
          qsrs.[last_clr_time],
          qsrs.[min_clr_time],
          qsrs.[max_clr_time],
          qsrs.[stdev_clr_time],
          qsrs.[avg_dop],
          qsrs.[last_dop],
          qsrs.[min_dop],
          qsrs.[max_dop],
          qsrs.[stdev_dop],
          qsrs.[avg_query_max_used_memory],
          qsrs.[last_query_max_used_memory],
          qsrs.[min_query_max_used_memory],
          qsrs.[max_query_max_used_memory],
          qsrs.[stdev_query_max_used_memory],
          qsrs.[avg_rowcount],
          qsrs.[last_rowcount],
          qsrs.[min_rowcount],
          qsrs.[max_rowcount],
          qsrs.[stdev_rowcount],
          qsrs.[avg_num_physical_io_reads],
          qsrs.[last_num_physical_io_reads],
          qsrs.[min_num_physical_io_reads],
          qsrs.[max_num_physical_io_reads],
          qsrs.[stdev_num_physical_io_reads],
          qsrs.[avg_log_bytes_used],
          qsrs.[last_log_bytes_used],
          qsrs.[min_log_bytes_used],
          qsrs.[max_log_bytes_used],
          qsrs.[stdev_log_bytes_used],
          qsrs.[avg_tempdb_space_used],
          qsrs.[last_tempdb_space_used],
          qsrs.[min_tempdb_space_used],
          qsrs.[max_tempdb_space_used],
          qsrs.[stdev_tempdb_space_used]
        FROM
          [sys].[query_store_runtime_stats] qsrs
    "#;
    columns {
        0 => runtime_stats_id: i64,
        1 => plan_id: i64,
        2 => runtime_stats_interval_id: i64,
        3 => execution_type: u8,
        4 => execution_type_desc: Option<String>,
        5 => first_execution_time: NaiveDateTime,
        6 => last_execution_time: NaiveDateTime,
        7 => count_executions: i64,
        8 => avg_duration: Option<f64>,
        9 => last_duration: i64,
        10 => min_duration: i64,
        11 => max_duration: i64,
        12 => stdev_duration: Option<f64>,
        13 => avg_cpu_time: Option<f64>,
        14 => last_cpu_time: i64,
        15 => min_cpu_time: i64,
        16 => max_cpu_time: i64,
        17 => stdev_cpu_time: Option<f64>,
        18 => avg_logical_io_reads: Option<f64>,
        19 => last_logical_io_reads: i64,
        20 => min_logical_io_reads: i64,
        21 => max_logical_io_reads: i64,
        22 => stdev_logical_io_reads: Option<f64>,
        23 => avg_logical_io_writes: Option<f64>,
        24 => last_logical_io_writes: i64,
        25 => min_logical_io_writes: i64,
        26 => max_logical_io_writes: i64,
        27 => stdev_logical_io_writes: Option<f64>,
        28 => avg_physical_io_reads: Option<f64>,
        29 => last_physical_io_reads: i64,
        30 => min_physical_io_reads: i64,
        31 => max_physical_io_reads: i64,
        32 => stdev_physical_io_reads: Option<f64>,
        33 => avg_clr_time: Option<f64>,
        34 => last_clr_time: i64,
        35 => min_clr_time: i64,
        36 => max_clr_time: i64,
        37 => stdev_clr_time: Option<f64>,
        38 => avg_dop: Option<f64>,
        39 => last_dop: i64,
        40 => min_dop: i64,
        41 => max_dop: i64,
        42 => stdev_dop: Option<f64>,
        43 => avg_query_max_used_memory: Option<f64>,
        44 => last_query_max_used_memory: i64,
        45 => min_query_max_used_memory: i64,
        46 => max_query_max_used_memory: i64,
        47 => stdev_query_max_used_memory: Option<f64>,
        48 => avg_rowcount: Option<f64>,
        49 => last_rowcount: i64,
        50 => min_rowcount: i64,
        51 => max_rowcount: i64,
        52 => stdev_rowcount: Option<f64>,
        53 => avg_num_physical_io_reads: Option<f64>,
        54 => last_num_physical_io_reads: Option<i64>,
        55 => min_num_physical_io_reads: Option<i64>,
        56 => max_num_physical_io_reads: Option<i64>,
        57 => stdev_num_physical_io_reads: Option<f64>,
        58 => avg_log_bytes_used: Option<f64>,
        59 => last_log_bytes_used: Option<i64>,
        60 => min_log_bytes_used: Option<i64>,
        61 => max_log_bytes_used: Option<i64>,
        62 => stdev_log_bytes_used: Option<f64>,
        63 => avg_tempdb_space_used: Option<f64>,
        64 => last_tempdb_space_used: Option<i64>,
        65 => min_tempdb_space_used: Option<i64>,
        66 => max_tempdb_space_used: Option<i64>,
        67 => stdev_tempdb_space_used: Option<f64>,
    }
}

pub fn for_plan(plan_id: i64) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA)
        .where_eq("plan_id", "PlanId", plan_id)
        .order_by("runtime_stats_interval_id")
}
