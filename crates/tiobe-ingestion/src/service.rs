//! Ranking service used by the HTTP layer.
//!
//! Order of resolution for a period: fresh cache entry, then the live
//! source, then the built-in snapshot. Snapshot results are never cached so
//! the next request retries the source.

use std::sync::Arc;
use tiobe_common::{IndexPeriod, Language, LanguageDetail};
use tiobe_config::Config;
use tracing::{debug, warn};

use crate::cache::IndexCache;
use crate::fallback::fallback_rankings;
use crate::profiles::language_detail;
use crate::sources::tiobe::TiobeClient;
use crate::sources::IndexSource;

/// Where a ranking list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Live,
    Cached,
    Fallback,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Live     => "live",
            Origin::Cached   => "cached",
            Origin::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rankings {
    pub languages: Arc<Vec<Language>>,
    pub origin: Origin,
}

pub struct IndexService {
    source: Arc<dyn IndexSource>,
    cache: IndexCache,
}

impl IndexService {
    pub fn new(source: Arc<dyn IndexSource>, cache: IndexCache) -> Self {
        Self { source, cache }
    }

    /// Service backed by the live TIOBE site, as configured.
    pub fn from_config(config: &Config) -> tiobe_common::error::Result<Self> {
        let source = TiobeClient::from_config(&config.source)?;
        Ok(Self::new(Arc::new(source), IndexCache::from_config(&config.cache)))
    }

    pub fn cache(&self) -> &IndexCache {
        &self.cache
    }

    pub async fn rankings(&self, period: Option<IndexPeriod>) -> Rankings {
        if let Some(languages) = self.cache.get(&period).await {
            debug!(?period, "Ranking served from cache");
            return Rankings { languages, origin: Origin::Cached };
        }

        match self.source.fetch(period).await {
            Ok(languages) if !languages.is_empty() => {
                let languages = Arc::new(languages);
                self.cache.insert(period, Arc::clone(&languages)).await;
                Rankings { languages, origin: Origin::Live }
            }
            Ok(_) => {
                warn!(source = self.source.name(), ?period, "Source returned no rows, serving fallback snapshot");
                Self::fallback()
            }
            Err(e) => {
                warn!(source = self.source.name(), ?period, error = %e, "Source fetch failed, serving fallback snapshot");
                Self::fallback()
            }
        }
    }

    /// Detail for `name` in the ranking of `period`. Names missing from the
    /// ranking still get a profile, with rank 0 and rating "N/A".
    pub async fn language_detail(&self, name: &str, period: Option<IndexPeriod>) -> (LanguageDetail, Origin) {
        let rankings = self.rankings(period).await;
        let detail = match rankings.languages.iter().find(|l| l.matches(name)) {
            Some(lang) => language_detail(name, lang),
            None => language_detail(name, &Language::unranked(name)),
        };
        (detail, rankings.origin)
    }

    fn fallback() -> Rankings {
        Rankings {
            languages: Arc::new(fallback_rankings()),
            origin: Origin::Fallback,
        }
    }
}
