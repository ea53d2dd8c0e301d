//! CLI commands for munigraph

pub mod dispatch;
pub mod edit;
pub mod file;
pub mod query;
pub mod traverse;
