use crate::domain::model::PageResult;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A searchable vacancy board.
///
/// Implementations return [`StatsError::ConnectionError`] for transient
/// connectivity faults and any other variant for protocol faults.
///
/// [`StatsError::ConnectionError`]: crate::utils::error::StatsError::ConnectionError
#[async_trait]
pub trait JobSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_page(&self, keyword: &str, page: u64) -> Result<PageResult>;
}
