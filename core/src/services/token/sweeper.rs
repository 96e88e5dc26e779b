//! Periodic sweep of expired revocation records.
//!
//! Logout also triggers an on-demand cleanup, but the periodic sweep is
//! what actually bounds the store: it runs on its own schedule so logout
//! latency is never coupled to cleanup cost.

use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::RevokedTokenRepository;

/// Configuration for the revocation sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run the sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether to run the background task at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            // Run every hour
            interval_seconds: 3600,
            enabled: true,
        }
    }
}

/// Background sweeper deleting revocation records past their expiry
pub struct RevocationSweeper<R: RevokedTokenRepository + 'static> {
    repository: Arc<R>,
    config: SweeperConfig,
}

impl<R: RevokedTokenRepository> RevocationSweeper<R> {
    /// Create a new sweeper over the given store
    pub fn new(repository: Arc<R>, config: SweeperConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single sweep cycle
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of records removed
    /// * `Err(DomainError)` - If the store rejected the delete
    pub async fn run_once(&self) -> Result<u64, DomainError> {
        let removed = self
            .repository
            .cleanup_expired(Utc::now().timestamp())
            .await?;
        if removed > 0 {
            info!(removed, "revocation sweep removed expired records");
        }
        Ok(removed)
    }

    /// Start the sweeper as a background task.
    ///
    /// Spawns a tokio task that runs a sweep at the configured interval.
    /// Failures are logged and the loop continues; a missed sweep only
    /// delays storage reclamation, never correctness.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("revocation sweeper is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval_seconds,
                "revocation sweeper started"
            );

            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so startup is quiet.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if let Err(e) = self.run_once().await {
                    error!(error = %e, "revocation sweep failed");
                }
            }
        });
    }
}
