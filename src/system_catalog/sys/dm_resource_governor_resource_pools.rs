use chrono::NaiveDateTime;

use crate::query::CatalogQuery;

crate::catalog_view! {
    row DmResourceGovernorResourcePool, reader DmResourceGovernorResourcePoolsReader;
    view "sys"."dm_resource_governor_resource_pools" as "drgrp";
    sql r#"
        SELECT
          drgrp.[pool_id],
          drgrp.[name],
          drgrp.[statistics_start_time],
          drgrp.[total_cpu_usage_ms],
          drgrp.[cache_memory_kb],
          drgrp.[compile_memory_kb],
          drgrp.[used_memgrant_kb],
          drgrp.[total_memgrant_count],
          drgrp.[total_memgrant_timeout_count],
          drgrp.[active_memgrant_count],
          drgrp.[active_memgrant_kb],
          drgrp.[memgrant_waiter_count],
          drgrp.[max_memory_kb],
          drgrp.[used_memory_kb],
          drgrp.[target_memory_kb],
          drgrp.[out_of_memory_count],
          drgrp.[min_cpu_percent],
          drgrp.[max_cpu_percent],
          drgrp.[min_memory_percent],
          drgrp.[max_memory_percent],
          drgrp.[cap_cpu_percent],
          drgrp.[min_iops_per_volume],
          drgrp.[max_iops_per_volume],
          drgrp.[read_io_queued_total],
          drgrp.[read_io_issued_total],
          drgrp.[read_io_completed_total],
          drgrp.[read_io_throttled_total],
          drgrp.[read_bytes_total],
          drgrp.[read_io_stall_total_ms],
          drgrp.[read_io_stall_queued_ms],
          drgrp.[write_io_queued_total],
          drgrp.[write_io_issued_total],
          drgrp.[write_io_completed_total],
          drgrp.[write_io_throttled_total],
          drgrp.[write_bytes_total],
          drgrp.[write_io_stall_total_ms],
          drgrp.[write_io_stall_queued_ms],
          drgrp.[io_issue_violations_total],
          drgrp.[io_issue_delay_total_ms],
          drgrp.[io_issue_ahead_total_ms],
          drgrp.[reserved_io_limited_by_volume_total],
          drgrp.[io_issue_delay_non_throttled_total_ms],
          drgrp.[total_cpu_delayed_ms],
          drgrp.[total_cpu_active_ms],
          drgrp.[total_cpu_violation_delay_ms],
          drgrp.[total_cpu_violation_sec],
          drgrp.[total_cpu_usage_preemptive_ms]
        FROM
          [sys].[dm_resource_governor_resource_pools] drgrp
    "#;
    columns {
        0 => pool_id: i32,
        1 => name: String,
        2 => statistics_start_time: NaiveDateTime,
        3 => total_cpu_usage_ms: i64,
        4 => cache_memory_kb: i64,
        5 => compile_memory_kb: i64,
        6 => used_memgrant_kb: i64,
        7 => total_memgrant_count: i64,
        8 => total_memgrant_timeout_count: i64,
        9 => active_memgrant_count: i32,
        10 => active_memgrant_kb: i64,
        11 => memgrant_waiter_count: i32,
        12 => max_memory_kb: i64,
        13 => used_memory_kb: i64,
        14 => target_memory_kb: i64,
        15 => out_of_memory_count: i64,
        16 => min_cpu_percent: i32,
        17 => max_cpu_percent: i32,
        18 => min_memory_percent: i32,
        19 => max_memory_percent: i32,
        20 => cap_cpu_percent: i32,
        21 => min_iops_per_volume: Option<i32>,
        22 => max_iops_per_volume: Option<i32>,
        23 => read_io_queued_total: Option<i32>,
        24 => read_io_issued_total: Option<i32>,
        25 => read_io_completed_total: i32,
        26 => read_io_throttled_total: Option<i32>,
        27 => read_bytes_total: i64,
        28 => read_io_stall_total_ms: i64,
        29 => read_io_stall_queued_ms: Option<i64>,
        30 => write_io_queued_total: Option<i32>,
        31 => write_io_issued_total: Option<i32>,
        32 => write_io_completed_total: i32,
        33 => write_io_throttled_total: Option<i32>,
        34 => write_bytes_total: i64,
        35 => write_io_stall_total_ms: i64,
        36 => write_io_stall_queued_ms: Option<i64>,
        37 => io_issue_violations_total: Option<i32>,
        38 => io_issue_delay_total_ms: Option<i64>,
        39 => io_issue_ahead_total_ms: Option<i64>,
        40 => reserved_io_limited_by_volume_total: Option<i32>,
        41 => io_issue_delay_non_throttled_total_ms: Option<i64>,
        42 => total_cpu_delayed_ms: i64,
        43 => total_cpu_active_ms: i64,
        44 => total_cpu_violation_delay_ms: i64,
        45 => total_cpu_violation_sec: i64,
        46 => total_cpu_usage_preemptive_ms: i64,
    }
}

pub fn by_id(pool_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).where_eq("pool_id", "PoolId", pool_id)
}

pub fn by_name(name: &str) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).where_eq("name", "PoolName", name)
}
