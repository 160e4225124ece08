//! Bindings for the SQL Server `sys` catalog and DMV views.

use crate::schema::ViewSchema;

pub mod columns;
pub mod databases;
pub mod dm_db_xtp_checkpoint_stats;
pub mod dm_exec_query_stats;
pub mod dm_exec_requests;
pub mod dm_resource_governor_resource_pools;
pub mod foreign_key_columns;
pub mod foreign_keys;
pub mod index_columns;
pub mod indexes;
pub mod masked_columns;
pub mod objects;
pub mod query_store_runtime_stats;
pub mod schemas;
pub mod tables;
pub mod views;

pub use columns::{Column, ColumnsReader};
pub use databases::{Database, DatabasesReader};
pub use dm_db_xtp_checkpoint_stats::{DmDbXtpCheckpointStat, DmDbXtpCheckpointStatsReader};
pub use dm_exec_query_stats::{DmExecQueryStat, DmExecQueryStatsReader};
pub use dm_exec_requests::{DmExecRequest, DmExecRequestsReader};
pub use dm_resource_governor_resource_pools::{DmResourceGovernorResourcePool, DmResourceGovernorResourcePoolsReader};
pub use foreign_key_columns::{ForeignKeyColumn, ForeignKeyColumnsReader};
pub use foreign_keys::{ForeignKey, ForeignKeysReader};
pub use index_columns::{IndexColumn, IndexColumnsReader};
pub use indexes::{Index, IndexesReader};
pub use masked_columns::{MaskedColumn, MaskedColumnsReader};
pub use objects::{Object, ObjectsReader};
pub use query_store_runtime_stats::{QueryStoreRuntimeStat, QueryStoreRuntimeStatsReader};
pub use schemas::{Schema, SchemasReader};
pub use tables::{Table, TablesReader};
pub use views::{View, ViewsReader};

/// Views the registry starts with.
pub fn defaults() -> [&'static ViewSchema; 16] {
    [
        &databases::SCHEMA,
        &schemas::SCHEMA,
        &objects::SCHEMA,
        &tables::SCHEMA,
        &views::SCHEMA,
        &columns::SCHEMA,
        &indexes::SCHEMA,
        &index_columns::SCHEMA,
        &foreign_keys::SCHEMA,
        &foreign_key_columns::SCHEMA,
        &masked_columns::SCHEMA,
        &dm_exec_requests::SCHEMA,
        &dm_exec_query_stats::SCHEMA,
        &dm_db_xtp_checkpoint_stats::SCHEMA,
        &dm_resource_governor_resource_pools::SCHEMA,
        &query_store_runtime_stats::SCHEMA,
    ]
}
