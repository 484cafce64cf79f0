//! HTTP handlers for all web routes.

pub mod languages;
pub mod system;
