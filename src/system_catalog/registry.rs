use std::collections::HashMap;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use polars::prelude::{DataFrame, DataType, Series, TimeUnit};
use tracing::debug;

use crate::error::ReaderResult;
use crate::schema::ViewSchema;
use crate::value::ScalarType;

static REGISTRY: OnceCell<Mutex<Vec<&'static ViewSchema>>> = OnceCell::new();

fn registry() -> &'static Mutex<Vec<&'static ViewSchema>> {
    REGISTRY.get_or_init(|| Mutex::new(super::sys::defaults().to_vec()))
}

/// Add a view, replacing any entry with the same schema and name.
pub fn register(view: &'static ViewSchema) {
    let mut reg = registry().lock();
    reg.retain(|v| !same_view(v, view.schema, view.name));
    reg.push(view);
    debug!(target: "catalog_reader::registry", view = %view.dotted_name(), "registered");
}

/// Registration happens on first access; kept for callers that want it eager.
pub fn ensure_registered() {
    let _ = registry();
}

pub fn all() -> Vec<&'static ViewSchema> {
    registry().lock().clone()
}

fn same_view(v: &ViewSchema, schema: &str, name: &str) -> bool {
    v.schema.eq_ignore_ascii_case(schema) && v.name.eq_ignore_ascii_case(name)
}

pub fn find(schema: &str, name: &str) -> Option<&'static ViewSchema> {
    registry().lock().iter().copied().find(|v| same_view(v, schema, name))
}

/// Resolve `sys.databases`, `[sys].[databases]`, `"sys"."databases"` or a bare
/// `databases` (searched in `sys`). A trailing alias or `;` is ignored.
pub fn lookup_from_str(input: &str) -> Option<&'static ViewSchema> {
    let mut base = input.trim();
    if let Some(idx) = base.find(char::is_whitespace) {
        base = &base[..idx];
    }
    let base = base.trim_end_matches(';');
    let parts: Vec<String> = base
        .split('.')
        .map(|p| p.trim_matches(|c| matches!(c, '[' | ']' | '"' | '\'')).to_string())
        .collect();
    match parts.as_slice() {
        [.., schema, name] if !schema.is_empty() && !name.is_empty() => find(schema, name),
        [name] if !name.is_empty() => find("sys", name),
        _ => None,
    }
}

/// Polars dtype a column of `scalar` is stored as in a frame.
pub fn scalar_to_dtype(scalar: ScalarType) -> DataType {
    match scalar {
        ScalarType::Int16 => DataType::Int16,
        ScalarType::Int32 => DataType::Int32,
        ScalarType::Int64 => DataType::Int64,
        ScalarType::Byte => DataType::UInt8,
        ScalarType::Bool => DataType::Boolean,
        ScalarType::Float => DataType::Float32,
        ScalarType::Double => DataType::Float64,
        ScalarType::Numeric => DataType::Decimal(Some(38), Some(0)),
        ScalarType::DateTime => DataType::Datetime(TimeUnit::Microseconds, None),
        ScalarType::Guid | ScalarType::Text => DataType::String,
        ScalarType::Bytes => DataType::Binary,
    }
}

/// Column name -> DataType for a view.
pub fn schema_map_for(view: &ViewSchema) -> HashMap<String, DataType> {
    view.columns
        .iter()
        .map(|c| (c.name.to_string(), scalar_to_dtype(c.scalar)))
        .collect()
}

/// Zero-row frame carrying the view's columns in ordinal order.
pub fn build_empty(view: &ViewSchema) -> ReaderResult<DataFrame> {
    let columns = view
        .columns
        .iter()
        .map(|c| Series::new_empty(c.name.into(), &scalar_to_dtype(c.scalar)).into())
        .collect();
    Ok(DataFrame::new(columns)?)
}
