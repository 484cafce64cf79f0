use reqwest::{redirect, Client, ClientBuilder};
use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use url::Url;
use crate::error::TiobeError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 10;

type Allowlist = Arc<RwLock<HashSet<String>>>;

/// An HTTP client that only allows requests to approved domains.
///
/// Redirects are checked against the same allowlist, hop by hop.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: Allowlist,
}

impl SandboxClient {
    /// Creates a client with the default allowlist (the TIOBE site) and the given user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, TiobeError> {
        let allowlist: Allowlist = Arc::new(RwLock::new(
            ["www.tiobe.com", "tiobe.com"].iter().map(|d| d.to_string()).collect(),
        ));

        let policy_list = Arc::clone(&allowlist);
        let policy = redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() >= MAX_REDIRECTS {
                attempt.error("too many redirects")
            } else if url_allowed(&policy_list, attempt.url()) {
                attempt.follow()
            } else {
                let msg = format!("redirect to {} leaves the allowlist", attempt.url());
                attempt.error(msg)
            }
        });

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(policy)
            .build()
            .map_err(|e| TiobeError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        if let Ok(mut list) = self.allowlist.write() {
            list.insert(domain.to_string());
        }
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        Url::parse(url)
            .map(|parsed| url_allowed(&self.allowlist, &parsed))
            .unwrap_or(false)
    }

    /// GET request builder, refused for hosts outside the allowlist.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, TiobeError> {
        if !self.is_allowed(url) {
            return Err(TiobeError::SecurityError(format!(
                "domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}

fn url_allowed(allowlist: &Allowlist, url: &Url) -> bool {
    let (Some(host), Ok(list)) = (url.host_str(), allowlist.read()) else {
        return false;
    };
    // Exact match or subdomain of an allowed domain
    list.iter()
        .any(|allowed| host == allowed || host.ends_with(&format!(".{}", allowed)))
}
