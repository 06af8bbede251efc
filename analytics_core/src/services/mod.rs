//! Service layer: orchestration of the pure core against caller-owned data.

pub mod ingest;

pub use ingest::*;
