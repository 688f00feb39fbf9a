//! Rate-limit handling and page pacing around any [`MlsApiClient`].

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use crate::client::MlsApiClient;
use crate::errors::MlsApiError;
use crate::models::{EntityType, PageCursor, RecordFilter, RecordPage};

/// Default cool-down after a rate-limit response.
pub const DEFAULT_RATE_LIMIT_COOLDOWN_SECS: u64 = 30;

/// Default pause between consecutive pages.
pub const DEFAULT_PAGE_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// How long to wait after a 429 before the single retry.
    pub rate_limit_cooldown: Duration,
    /// Pause before every follow-up page request.
    pub page_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            rate_limit_cooldown: Duration::from_secs(DEFAULT_RATE_LIMIT_COOLDOWN_SECS),
            page_delay: Duration::from_millis(DEFAULT_PAGE_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// No waiting at all. Useful for tests and local fixtures.
    pub fn immediate() -> Self {
        Self {
            rate_limit_cooldown: Duration::ZERO,
            page_delay: Duration::ZERO,
        }
    }
}

/// Wraps a client so that each page request is paced and retried exactly once
/// after a rate-limit response. A second rate-limit on the same page becomes
/// [`MlsApiError::RateLimitExceeded`].
pub struct RateLimitedClient<C> {
    inner: C,
    policy: RetryPolicy,
}

impl<C: MlsApiClient> RateLimitedClient<C> {
    pub fn new(inner: C, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: MlsApiClient> MlsApiClient for RateLimitedClient<C> {
    async fn fetch_page(
        &self,
        entity: EntityType,
        filter: &RecordFilter,
        cursor: Option<&PageCursor>,
    ) -> Result<RecordPage, MlsApiError> {
        if cursor.is_some() && !self.policy.page_delay.is_zero() {
            debug!("Pausing {:?} before next {} page", self.policy.page_delay, entity);
            tokio::time::sleep(self.policy.page_delay).await;
        }

        match self.inner.fetch_page(entity, filter, cursor).await {
            Err(err) if err.is_rate_limited() => {
                warn!(
                    "Rate limited fetching {}; waiting {:?} before retrying",
                    entity, self.policy.rate_limit_cooldown
                );
                tokio::time::sleep(self.policy.rate_limit_cooldown).await;

                self.inner
                    .fetch_page(entity, filter, cursor)
                    .await
                    .map_err(|retry_err| {
                        if retry_err.is_rate_limited() {
                            MlsApiError::RateLimitExceeded {
                                resource: entity.resource().to_string(),
                                cooldown_secs: self.policy.rate_limit_cooldown.as_secs(),
                            }
                        } else {
                            retry_err
                        }
                    })
            }
            other => other,
        }
    }
}
