//! Pure aggregation and query logic over the record store.

pub mod query;
pub mod stats;
