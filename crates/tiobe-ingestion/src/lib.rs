//! tiobe-ingestion — Index retrieval and serving pipeline.
//! - Index sources (live TIOBE page scraper)
//! - HTML table parsing
//! - Built-in fallback snapshot
//! - Language profile catalog
//! - Per-period TTL cache
//! - `IndexService`, which ties the above together for the web layer

pub mod sources;
pub mod parser;
pub mod fallback;
pub mod profiles;
pub mod cache;
pub mod service;

pub use service::{IndexService, Origin, Rankings};
