//! Catalog views known to the crate and the registry that indexes them.

pub mod registry;
pub mod sys;
