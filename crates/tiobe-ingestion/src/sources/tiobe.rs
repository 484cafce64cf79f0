//! Client for the public TIOBE index page.
//!
//! Current index:    https://www.tiobe.com/tiobe-index/
//! Historical month: https://www.tiobe.com/tiobe-index/?page=index&year=Y&month=M

use async_trait::async_trait;
use tiobe_common::error::{Result, TiobeError};
use tiobe_common::sandbox::{SandboxClient as Client, DEFAULT_TIMEOUT};
use tiobe_common::{IndexPeriod, Language};
use tiobe_config::SourceConfig;
use tracing::{debug, info, instrument};
use url::Url;

use super::IndexSource;
use crate::parser::parse_index_table;

pub struct TiobeClient {
    client: Client,
    base_url: String,
}

impl TiobeClient {
    /// Client against the public site with default timeout and user agent.
    pub fn new() -> Result<Self> {
        let defaults = SourceConfig::default();
        let client = Client::new(DEFAULT_TIMEOUT, &defaults.user_agent)?;
        Ok(Self { client, base_url: defaults.base_url })
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let mut client = Client::new(config.timeout(), &config.user_agent)?;

        let host = Url::parse(&config.base_url)
            .ok()
            .and_then(|u| u.host_str().map(String::from))
            .ok_or_else(|| TiobeError::Config(format!("invalid source URL {}", config.base_url)))?;
        client.allow_domain(&host);

        Ok(Self { client, base_url: config.base_url.clone() })
    }

    /// URL of the index page for `period`.
    pub fn index_url(&self, period: Option<IndexPeriod>) -> String {
        match period {
            Some(p) => {
                let sep = if self.base_url.contains('?') { '&' } else { '?' };
                format!("{}{}page=index&year={}&month={}", self.base_url, sep, p.year, p.month)
            }
            None => self.base_url.clone(),
        }
    }
}

#[async_trait]
impl IndexSource for TiobeClient {
    fn name(&self) -> &'static str {
        "tiobe"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, period: Option<IndexPeriod>) -> Result<Vec<Language>> {
        let url = self.index_url(period);
        info!(url = %url, "Fetching TIOBE index");

        let resp = self.client.get(&url)?.send().await?;
        if !resp.status().is_success() {
            return Err(TiobeError::UpstreamStatus {
                status: resp.status().as_u16(),
                url,
            });
        }

        let body = resp.text().await?;
        let languages = parse_index_table(&body)?;
        debug!(count = languages.len(), "Parsed index rows");

        Ok(languages)
    }
}
