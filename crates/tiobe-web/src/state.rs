//! Shared application state for the web server.

use std::sync::Arc;
use serde::Serialize;
use tiobe_config::Config;
use tiobe_ingestion::IndexService;
use tokio::sync::watch;

/// Process lifecycle: `Starting` until the listener is bound, then `Serving`
/// until a stop signal ends the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Starting,
    Serving,
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,
    pub service: IndexService,
    phase: watch::Sender<Phase>,
}

impl AppState {
    /// State backed by the live TIOBE source described in `config`.
    pub fn new(config: Config) -> tiobe_common::error::Result<Self> {
        let service = IndexService::from_config(&config)?;
        Ok(Self::with_service(config, service))
    }

    pub fn with_service(config: Config, service: IndexService) -> Self {
        let (phase, _) = watch::channel(Phase::Starting);
        Self { config, service, phase }
    }

    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    pub fn mark_serving(&self) {
        self.phase.send_replace(Phase::Serving);
    }

    pub fn subscribe_phase(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }
}

pub type SharedState = Arc<AppState>;
