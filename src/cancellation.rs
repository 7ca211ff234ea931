//! A cancellation token shared between the signal listener and the runner.
//!
//! The token is cancelled at most once. Every clone observes the same state,
//! so the listener task can own one clone while the runner and the prober
//! check another one.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Clone, Debug, Default)]
pub struct Cancellation {
    inner: Arc<NotifyOnce>,
}

impl Cancellation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the token and wakes up every task waiting on it.
    ///
    /// Returns `true` only for the call that actually cancelled it.
    pub fn cancel(&self) -> bool {
        self.inner.notify_waiters()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_notified()
    }

    /// Resolves once the token has been cancelled.
    ///
    /// Resolves immediately if it was already cancelled.
    pub async fn cancelled(&self) {
        self.inner.notified().await;
    }
}

#[derive(Debug, Default)]
struct NotifyOnce {
    notified: AtomicBool,
    notify: Notify,
}

impl NotifyOnce {
    fn notify_waiters(&self) -> bool {
        if self.notified.swap(true, Ordering::SeqCst) {
            return false;
        }

        self.notify.notify_waiters();

        true
    }

    fn is_notified(&self) -> bool {
        self.notified.load(Ordering::SeqCst)
    }

    async fn notified(&self) {
        // Registered before the flag is read so a concurrent `notify_waiters` is not missed.
        let future = self.notify.notified();

        if !self.notified.load(Ordering::SeqCst) {
            future.await;
        }
    }
}
