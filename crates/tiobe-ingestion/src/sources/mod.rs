//! Index source clients.

pub mod tiobe;

use async_trait::async_trait;
use tiobe_common::error::Result;
use tiobe_common::{IndexPeriod, Language};

/// Common interface for anything that can produce a ranking.
#[async_trait]
pub trait IndexSource: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the ranking for `period`, or the current index when `None`.
    /// An empty list means the source answered but carried no rows.
    async fn fetch(&self, period: Option<IndexPeriod>) -> Result<Vec<Language>>;
}
