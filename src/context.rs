//! Cancellation-aware execution context
//!
//! A `Context` is handed to every GraphQL request and every page load. It is
//! cheap to clone; all clones observe the same cancellation signal.
//!
//! ```rust,ignore
//! let (ctx, cancel) = Context::with_cancel();
//! let mut providers = client.access_provider().list_access_providers(&ctx, Default::default());
//! while let Some(item) = providers.next().await {
//!     // ...
//!     if done_early {
//!         cancel.cancel();
//!         break;
//!     }
//! }
//! ```

use futures::future::{select_all, BoxFuture, FutureExt};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Cooperative cancellation signal plus an optional deadline
#[derive(Debug, Clone)]
pub struct Context {
    /// One receiver per cancellable scope, outermost first
    signals: Vec<watch::Receiver<bool>>,
    /// Earliest deadline of this scope and all ancestors
    deadline: Option<Instant>,
}

/// Handle that cancels the `Context` it was created with
#[derive(Debug, Clone)]
pub struct CancelHandle {
    sender: std::sync::Arc<watch::Sender<bool>>,
}

/// Cancels its context when dropped
#[derive(Debug)]
pub struct CancelGuard {
    handle: CancelHandle,
    armed: bool,
}

impl Context {
    /// A context that is never cancelled
    pub fn background() -> Self {
        Self {
            signals: Vec::new(),
            deadline: None,
        }
    }

    /// A new root context with its cancel handle
    pub fn with_cancel() -> (Self, CancelHandle) {
        Self::background().child()
    }

    /// A root context that cancels itself after `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().child_with_deadline(Instant::now() + timeout)
    }

    /// A root context that cancels itself at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::background().child_with_deadline(deadline)
    }

    /// A nested scope: cancelled by its own handle or by any ancestor
    pub fn child(&self) -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        let mut signals = self.signals.clone();
        signals.push(receiver);
        (
            Self {
                signals,
                deadline: self.deadline,
            },
            CancelHandle {
                sender: std::sync::Arc::new(sender),
            },
        )
    }

    /// A nested scope with a (possibly tighter) deadline
    pub fn child_with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current <= deadline => current,
            _ => deadline,
        };
        Self {
            signals: self.signals.clone(),
            deadline: Some(deadline),
        }
    }

    /// The effective deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Non-blocking check of the cancellation state
    pub fn is_cancelled(&self) -> bool {
        if self.signals.iter().any(|rx| *rx.borrow()) {
            return true;
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Resolves once the context is cancelled; pends forever for `background()`
    pub async fn cancelled(&self) {
        if self.is_cancelled() {
            return;
        }

        let mut waiters: Vec<BoxFuture<'static, ()>> = self
            .signals
            .iter()
            .cloned()
            .map(|rx| wait_for_signal(rx).boxed())
            .collect();
        if let Some(deadline) = self.deadline {
            waiters.push(tokio::time::sleep_until(deadline).boxed());
        }

        if waiters.is_empty() {
            std::future::pending::<()>().await;
        }
        select_all(waiters).await;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}

/// Wait for one scope's signal; a dropped handle means it can never fire
async fn wait_for_signal(mut rx: watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

impl CancelHandle {
    /// Signal cancellation. Idempotent.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Whether `cancel` has been called
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Turn this handle into a guard that cancels on drop
    pub fn drop_guard(self) -> CancelGuard {
        CancelGuard {
            handle: self,
            armed: true,
        }
    }
}

impl CancelGuard {
    /// Give the handle back without cancelling
    pub fn disarm(mut self) -> CancelHandle {
        self.armed = false;
        self.handle.clone()
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        if self.armed {
            self.handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_never_cancelled() {
        let ctx = Context::background();
        assert!(!ctx.is_cancelled());
        assert!(ctx.deadline().is_none());
    }

    #[tokio::test]
    async fn test_cancel_wakes_waiters() {
        let (ctx, cancel) = Context::with_cancel();
        assert!(!ctx.is_cancelled());

        let waiter = {
            let ctx = ctx.clone();
            tokio::spawn(async move { ctx.cancelled().await })
        };

        cancel.cancel();
        cancel.cancel();
        assert!(cancel.is_cancelled());
        assert!(ctx.is_cancelled());

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }

    #[test]
    fn test_cancelled_pending_until_cancel() {
        let (ctx, cancel) = Context::with_cancel();
        let mut waiter = tokio_test::task::spawn(ctx.cancelled());

        tokio_test::assert_pending!(waiter.poll());
        cancel.cancel();
        assert!(waiter.is_woken());
        tokio_test::assert_ready!(waiter.poll());
    }

    #[tokio::test]
    async fn test_parent_cancels_child() {
        let (parent, cancel_parent) = Context::with_cancel();
        let (child, cancel_child) = parent.child();

        assert!(!child.is_cancelled());
        cancel_parent.cancel();
        assert!(child.is_cancelled());
        assert!(!cancel_child.is_cancelled());
    }

    #[tokio::test]
    async fn test_child_does_not_cancel_parent() {
        let (parent, _cancel_parent) = Context::with_cancel();
        let (child, cancel_child) = parent.child();

        cancel_child.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());
    }

    #[tokio::test]
    async fn test_dropped_handle_does_not_cancel() {
        let (ctx, cancel) = Context::with_cancel();
        drop(cancel);
        assert!(!ctx.is_cancelled());

        let result = tokio::time::timeout(Duration::from_millis(50), ctx.cancelled()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_drop_guard_cancels() {
        let (ctx, cancel) = Context::with_cancel();
        {
            let _guard = cancel.drop_guard();
        }
        assert!(ctx.is_cancelled());
    }

    #[tokio::test]
    async fn test_disarmed_guard_does_not_cancel() {
        let (ctx, cancel) = Context::with_cancel();
        let handle = cancel.drop_guard().disarm();
        assert!(!ctx.is_cancelled());
        handle.cancel();
        assert!(ctx.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_fires() {
        let ctx = Context::with_timeout(Duration::from_secs(5));
        assert!(!ctx.is_cancelled());

        tokio::time::advance(Duration::from_secs(6)).await;
        assert!(ctx.is_cancelled());
        ctx.cancelled().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_child_keeps_tighter_deadline() {
        let parent = Context::with_timeout(Duration::from_secs(1));
        let child = parent.child_with_deadline(Instant::now() + Duration::from_secs(10));
        assert_eq!(child.deadline(), parent.deadline());
    }
}
