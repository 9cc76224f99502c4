//! Active-theme tracking
//!
//! The active theme id is derived state: it is recomputed from the applied
//! colors every time the [`ThemeContext`] changes, and optimistically set when
//! an activation is confirmed by the server.

use parking_lot::Mutex;
use std::sync::Arc;
use theme_catalog::{resolve_active_id, ColorTokens, ThemeRegistry};
use tokio::sync::{oneshot, watch};

use crate::context::ThemeContext;

/// Tracker for the id of the active catalog theme
pub struct ActiveThemeTracker {
    registry: Arc<ThemeRegistry>,
    active_tx: watch::Sender<String>,
    /// Light colors the current id was last resolved from
    resolved_from: Mutex<ColorTokens>,
}

impl ActiveThemeTracker {
    /// Create a tracker resolved against the given light colors
    pub fn new(registry: Arc<ThemeRegistry>, current_light: &ColorTokens) -> Self {
        let initial = resolve_active_id(current_light, registry.themes()).to_string();
        let (active_tx, _) = watch::channel(initial);
        Self {
            registry,
            active_tx,
            resolved_from: Mutex::new(current_light.clone()),
        }
    }

    /// Create a tracker resolved against a context's current colors
    pub fn for_context(registry: Arc<ThemeRegistry>, context: &ThemeContext) -> Self {
        Self::new(registry, &context.current_light())
    }

    /// The registry used for resolution
    pub fn registry(&self) -> &Arc<ThemeRegistry> {
        &self.registry
    }

    /// Current active theme id
    pub fn active_id(&self) -> String {
        self.active_tx.borrow().clone()
    }

    /// Check whether `id` is the active theme
    pub fn is_active(&self, id: &str) -> bool {
        *self.active_tx.borrow() == id
    }

    /// Re-run the resolver against new light colors
    ///
    /// Colors identical to the last resolved ones leave the active id alone,
    /// including one set by [`confirm`](Self::confirm). Returns the active id.
    pub fn recompute(&self, current_light: &ColorTokens) -> String {
        let mut resolved_from = self.resolved_from.lock();
        if *resolved_from == *current_light {
            return self.active_id();
        }
        *resolved_from = current_light.clone();

        let resolved = resolve_active_id(current_light, self.registry.themes());
        self.set(resolved);
        resolved.to_string()
    }

    /// Record an activation the server has accepted
    pub fn confirm(&self, id: &str) {
        tracing::debug!(theme_id = id, "active theme confirmed");
        self.set(id);
    }

    /// Subscribe to active id changes
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.active_tx.subscribe()
    }

    fn set(&self, id: &str) {
        let changed = self.active_tx.send_if_modified(|current| {
            if current.as_str() == id {
                false
            } else {
                *current = id.to_string();
                true
            }
        });
        if changed {
            tracing::info!(theme_id = id, "active theme changed");
        }
    }

    /// Keep the tracker in sync with a theming context
    ///
    /// Spawns a task that re-resolves the active id whenever the context's
    /// colors change. The task stops when the returned handle is dropped or
    /// the context goes away.
    pub fn spawn_sync(self: &Arc<Self>, context: &ThemeContext) -> SyncHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let tracker = Arc::clone(self);
        let mut colors_rx = context.subscribe();

        // Catch up with anything applied between construction and now
        tracker.recompute(&colors_rx.borrow_and_update().light);

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    changed = colors_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let light = colors_rx.borrow_and_update().light.clone();
                        tracker.recompute(&light);
                    }
                    _ = &mut stop_rx => {
                        break;
                    }
                }
            }
        });

        SyncHandle {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }
}

/// Handle for the context sync task
///
/// When dropped, the sync task will be stopped.
pub struct SyncHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl SyncHandle {
    /// Stop syncing and wait for the task to finish
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use theme_catalog::FALLBACK_THEME_ID;

    fn registry() -> Arc<ThemeRegistry> {
        Arc::new(ThemeRegistry::built_in().clone())
    }

    fn colors(id: &str) -> theme_catalog::ColorTokenSet {
        ThemeRegistry::built_in().get(id).unwrap().color_tokens.clone()
    }

    fn custom_colors(primary: &str) -> theme_catalog::ColorTokenSet {
        let mut set = colors("ocean-blue");
        set.light.primary = primary.to_string();
        set
    }

    #[test]
    fn test_initial_resolution() {
        let tracker = ActiveThemeTracker::new(registry(), &colors("ocean-blue").light);
        assert_eq!(tracker.active_id(), "ocean-blue");
        assert!(tracker.is_active("ocean-blue"));

        let tracker = ActiveThemeTracker::new(registry(), &custom_colors("#000000").light);
        assert_eq!(tracker.active_id(), FALLBACK_THEME_ID);
    }

    #[test]
    fn test_recompute() {
        let tracker = ActiveThemeTracker::new(registry(), &colors("neutral-default").light);
        assert_eq!(tracker.recompute(&colors("violet-dusk").light), "violet-dusk");
        assert_eq!(tracker.active_id(), "violet-dusk");

        assert_eq!(tracker.recompute(&custom_colors("#000000").light), FALLBACK_THEME_ID);
        assert_eq!(tracker.active_id(), FALLBACK_THEME_ID);
    }

    #[test]
    fn test_confirm_overrides_until_next_change() {
        let tracker = ActiveThemeTracker::new(registry(), &colors("neutral-default").light);
        tracker.confirm("amber-glow");
        assert_eq!(tracker.active_id(), "amber-glow");

        // Same colors as before the confirm
        assert_eq!(tracker.recompute(&colors("neutral-default").light), "amber-glow");

        tracker.recompute(&colors("slate-mono").light);
        assert_eq!(tracker.active_id(), "slate-mono");
    }

    #[tokio::test]
    async fn test_pending_sync_does_not_undo_confirm() {
        let context = ThemeContext::new(colors("neutral-default"));
        let tracker = Arc::new(ActiveThemeTracker::for_context(registry(), &context));
        let handle = tracker.spawn_sync(&context);

        // Apply and resolve eagerly, leaving the sync task's wake-up queued
        context.apply(colors("forest-green"));
        assert_eq!(tracker.recompute(&context.current_light()), "forest-green");

        tracker.confirm("ocean-blue");
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        assert_eq!(tracker.active_id(), "ocean-blue");

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_subscription_skips_unchanged_ids() {
        let tracker = ActiveThemeTracker::new(registry(), &colors("neutral-default").light);
        let mut rx = tracker.subscribe();

        tracker.recompute(&colors("neutral-default").light);
        assert!(!rx.has_changed().unwrap());

        tracker.recompute(&colors("rose-garden").light);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), "rose-garden");
    }

    #[tokio::test]
    async fn test_sync_follows_context() {
        let context = ThemeContext::new(colors("neutral-default"));
        let tracker = Arc::new(ActiveThemeTracker::for_context(registry(), &context));
        let mut rx = tracker.subscribe();
        let handle = tracker.spawn_sync(&context);

        context.apply(colors("forest-green"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "forest-green");

        context.apply(custom_colors("#ABCDEF"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), FALLBACK_THEME_ID);

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_sync_catches_up_on_spawn() {
        let context = ThemeContext::new(colors("neutral-default"));
        let tracker = Arc::new(ActiveThemeTracker::for_context(registry(), &context));

        context.apply(colors("slate-mono"));
        let handle = tracker.spawn_sync(&context);
        assert_eq!(tracker.active_id(), "slate-mono");

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_stopped_sync_ignores_context() {
        let context = ThemeContext::new(colors("neutral-default"));
        let tracker = Arc::new(ActiveThemeTracker::for_context(registry(), &context));

        tracker.spawn_sync(&context).stop().await;

        context.apply(colors("ocean-blue"));
        tokio::task::yield_now().await;
        assert_eq!(tracker.active_id(), "neutral-default");
    }
}
