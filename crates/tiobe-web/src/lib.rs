//! tiobe-web — HTTP front end for the TIOBE index.
//! Provides:
//!   - JSON ranking and language-detail API
//!   - OpenAPI document and Swagger UI for the API
//!   - Health/lifecycle endpoint
//!   - Static file serving for the bundled front end

pub mod router;
pub mod handlers;
pub mod state;
pub mod openapi;
pub mod server;
