//! Typed, ownership-aware readers over forward-only SQL Server catalog result sets.

pub mod error;
pub mod config;
pub mod logging;
pub mod value;
pub mod cursor;
pub mod reader;
pub mod column;
pub mod schema;
pub mod mapper;
pub mod query;
pub mod system_catalog;

pub use column::ColumnValue;
pub use config::ReaderConfig;
pub use cursor::{FrameCursor, MemoryCursor, RowCursor};
pub use error::{ReaderError, ReaderResult};
pub use mapper::{read_all, CatalogRow, TypedReader};
pub use query::{fetch_all, fetch_optional, CatalogQuery, QueryExecutor};
pub use reader::{DataReader, ReaderState};
pub use schema::{ColumnBinding, ViewSchema};
pub use value::{Numeric, ScalarType, Value};

// Test-only printing helper: expands to eprintln! in debug builds and is a no-op otherwise.
// Usage in tests: tprintln!("debug: {}", value);
#[cfg(any(test, debug_assertions))]
#[macro_export]
macro_rules! tprintln {
    ($($arg:tt)*) => ( eprintln!($($arg)*) );
}

#[cfg(not(any(test, debug_assertions)))]
#[macro_export]
macro_rules! tprintln {
    ($($arg:tt)*) => ({
        if false { let _ = format!($($arg)*); }
    });
}
