//! Post-activation reload scheduling
//!
//! After a successful activation the whole application reloads so that every
//! independently rendered region picks up the new colors. This module only
//! decides *when*; the host application decides what a reload means and
//! listens for [`ReloadRequest`]s.

use std::time::Duration;
use tokio::sync::broadcast;

/// Default delay between a confirmed activation and the reload
pub const DEFAULT_RELOAD_DELAY: Duration = Duration::from_secs(1);

/// A request for the host application to reload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadRequest {
    /// Theme whose activation triggered the reload
    pub theme_id: String,
}

/// Schedules full application reloads
#[cfg_attr(test, mockall::automock)]
pub trait ReloadScheduler: Send + Sync {
    /// Request a reload after `delay`
    fn schedule_reload(&self, theme_id: &str, delay: Duration);
}

/// Reload scheduler that publishes requests on a broadcast channel
///
/// # Example
///
/// ```
/// use app_state::reload::{BroadcastReloadScheduler, ReloadScheduler};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() {
///     let scheduler = BroadcastReloadScheduler::new();
///     let mut rx = scheduler.subscribe();
///
///     scheduler.schedule_reload("ocean-blue", Duration::from_millis(10));
///
///     let request = rx.recv().await.unwrap();
///     assert_eq!(request.theme_id, "ocean-blue");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BroadcastReloadScheduler {
    reload_tx: broadcast::Sender<ReloadRequest>,
}

impl BroadcastReloadScheduler {
    /// Create a scheduler with no subscribers yet
    pub fn new() -> Self {
        let (reload_tx, _) = broadcast::channel(8);
        Self { reload_tx }
    }

    /// Subscribe to reload requests
    pub fn subscribe(&self) -> broadcast::Receiver<ReloadRequest> {
        self.reload_tx.subscribe()
    }
}

impl Default for BroadcastReloadScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ReloadScheduler for BroadcastReloadScheduler {
    fn schedule_reload(&self, theme_id: &str, delay: Duration) {
        let reload_tx = self.reload_tx.clone();
        let request = ReloadRequest {
            theme_id: theme_id.to_string(),
        };

        tracing::debug!(theme_id, ?delay, "reload scheduled");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if reload_tx.send(request).is_err() {
                tracing::warn!("reload requested but nobody is listening");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[tokio::test(start_paused = true)]
    async fn test_reload_fires_after_delay() {
        let scheduler = BroadcastReloadScheduler::new();
        let mut rx = scheduler.subscribe();

        scheduler.schedule_reload("ocean-blue", DEFAULT_RELOAD_DELAY);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(
            rx.try_recv(),
            Ok(ReloadRequest {
                theme_id: "ocean-blue".to_string()
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reload_without_listeners_is_harmless() {
        let scheduler = BroadcastReloadScheduler::new();
        scheduler.schedule_reload("ocean-blue", Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_subscriber_is_told() {
        let scheduler = BroadcastReloadScheduler::new();
        let mut first = scheduler.subscribe();
        let mut second = scheduler.subscribe();

        scheduler.schedule_reload("forest-green", Duration::from_millis(10));

        assert_eq!(first.recv().await.unwrap().theme_id, "forest-green");
        assert_eq!(second.recv().await.unwrap().theme_id, "forest-green");
    }
}
