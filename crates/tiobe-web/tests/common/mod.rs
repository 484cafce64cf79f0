//! Test helpers: an in-memory index source and state builders.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tiobe_common::error::{Result, TiobeError};
use tiobe_common::{IndexPeriod, Language};
use tiobe_config::Config;
use tiobe_ingestion::cache::IndexCache;
use tiobe_ingestion::sources::IndexSource;
use tiobe_ingestion::IndexService;
use tiobe_web::state::{AppState, SharedState};

pub struct StaticSource {
    pub rows: Option<Vec<Language>>,
}

#[async_trait]
impl IndexSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self, _period: Option<IndexPeriod>) -> Result<Vec<Language>> {
        self.rows.clone().ok_or_else(|| TiobeError::UpstreamStatus {
            status: 502,
            url: "http://upstream.invalid/".to_string(),
        })
    }
}

pub fn live_rows() -> Vec<Language> {
    vec![
        Language::new(1, 1, "Python", "25.00%", "+1.36%"),
        Language::new(2, 3, "C++", "10.00%", "+1.05%"),
        Language::new(3, 2, "Rust", "9.50%", "+8.20%"),
    ]
}

pub fn state_with(rows: Option<Vec<Language>>, config: Config) -> SharedState {
    let service = IndexService::new(
        Arc::new(StaticSource { rows }),
        IndexCache::new(Duration::from_secs(60), 8),
    );
    Arc::new(AppState::with_service(config, service))
}

pub fn live_state() -> SharedState {
    state_with(Some(live_rows()), Config::default())
}

pub fn failing_state() -> SharedState {
    state_with(None, Config::default())
}
