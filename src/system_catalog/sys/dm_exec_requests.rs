use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::query::CatalogQuery;

crate::catalog_view! {
    /// A request currently executing on the server.
    row DmExecRequest, reader DmExecRequestsReader;
    view "sys"."dm_exec_requests" as "der";
    sql r#"
        SELECT
          der.[session_id],
          der.[request_id],
          der.[start_time],
          der.[status],
          der.[command],
          der.[sql_handle],
          der.[statement_start_offset],
          der.[statement_end_offset],
          der.[plan_handle],
          der.[database_id],
          der.[user_id],
          der.[connection_id],
          der.[blocking_session_id],
          der.[wait_type],
          der.[wait_time],
          der.[last_wait_type],
          der.[wait_resource],
          der.[open_transaction_count],
          der.[open_resultset_count],
          der.[transaction_id],
          der.[context_info],
          der.[percent_complete],
          der.[estimated_completion_time],
          der.[cpu_time],
          der.[total_elapsed_time],
          der.[scheduler_id],
          der.[task_address],
          der.[reads],
          der.[writes],
          der.[logical_reads],
          der.[text_size],
          der.[language],
          der.[date_format],
          der.[date_first],
          der.[quoted_identifier],
          der.[arithabort],
          der.[ansi_null_dflt_on],
          der.[ansi_defaults],
          der.[ansi_warnings],
          der.[ansi_padding],
          der.[ansi_nulls],
          der.[concat_null_yields_null],
          der.[transaction_isolation_level],
          der.[lock_timeout],
          der.[deadlock_priority],
          der.[row_count],
          der.[prev_error],
          der.[nest_level],
          der.[granted_query_memory],
          der.[executing_managed_code],
          der.[group_id],
          der.[query_hash],
          der.[query_plan_hash],
          der.[statement_sql_handle],
          der.[statement_context_id],
          der.[dop],
          der.[parallel_worker_count],
          der.[external_script_request_id],
          der.[is_resumable],
          der.[page_resource],
          der.[page_server_reads]
        FROM
          [sys].[dm_exec_requests] der
    "#;
    columns {
        0 => session_id: i16,
        1 => request_id: i32,
        2 => start_time: NaiveDateTime,
        3 => status: String,
        4 => command: String,
        5 => sql_handle: Option<Vec<u8>>,
        6 => statement_start_offset: Option<i32>,
        7 => statement_end_offset: Option<i32>,
        8 => plan_handle: Option<Vec<u8>>,
        9 => database_id: i16,
        10 => user_id: i32,
        11 => connection_id: Option<Uuid>,
        12 => blocking_session_id: Option<i16>,
        13 => wait_type: Option<String>,
        14 => wait_time: i32,
        15 => last_wait_type: String,
        16 => wait_resource: String,
        17 => open_transaction_count: i32,
        18 => open_resultset_count: i32,
        19 => transaction_id: i64,
        20 => context_info: Option<Vec<u8>>,
        21 => percent_complete: f32,
        22 => estimated_completion_time: i64,
        23 => cpu_time: i32,
        24 => total_elapsed_time: i32,
        25 => scheduler_id: Option<i32>,
        26 => task_address: Option<Vec<u8>>,
        27 => reads: i64,
        28 => writes: i64,
        29 => logical_reads: i64,
        30 => text_size: i32,
        31 => language: Option<String>,
        32 => date_format: Option<String>,
        33 => date_first: i16,
        34 => quoted_identifier: bool,
        35 => arithabort: bool,
        36 => ansi_null_dflt_on: bool,
        37 => ansi_defaults: bool,
        38 => ansi_warnings: bool,
        39 => ansi_padding: bool,
        40 => ansi_nulls: bool,
        41 => concat_null_yields_null: bool,
        42 => transaction_isolation_level: i16,
        43 => lock_timeout: i32,
        44 => deadlock_priority: i32,
        45 => row_count: i64,
        46 => prev_error: i32,
        47 => nest_level: i32,
        48 => granted_query_memory: i32,
        49 => executing_managed_code: bool,
        50 => group_id: i32,
        51 => query_hash: Option<Vec<u8>>,
        52 => query_plan_hash: Option<Vec<u8>>,
        53 => statement_sql_handle: Option<Vec<u8>>,
        54 => statement_context_id: Option<i64>,
        55 => dop: i32,
        56 => parallel_worker_count: Option<i32>,
        57 => external_script_request_id: Option<Uuid>,
        58 => is_resumable: bool,
        59 => page_resource: Option<Vec<u8>>,
        60 => page_server_reads: i64,
    }
}

pub fn for_session(session_id: i16) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA)
        .where_eq("session_id", "SessionId", session_id)
        .order_by("request_id")
}

/// Requests waiting on another session.
pub fn blocked() -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).filter("der.[blocking_session_id] <> 0")
}
