//! tiobe-common — Shared types, errors, and the sandboxed HTTP client used across all rust-tiobe crates.

pub mod error;
pub mod models;
pub mod sandbox;

// Re-export commonly used types
pub use models::{IndexPeriod, Language, LanguageDetail};
