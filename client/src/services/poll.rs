//! Cancellable polling counters
//!
//! The unread-notification and pending-discrepancy badges each poll on a
//! fixed interval. The two loops are independent; each only overwrites its
//! own counter. A poller is bound to whatever owns it and stops when
//! dropped, so no timer outlives its page.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::api::{discrepancies, notifications, ApiClient};
use crate::error::ClientResult;

/// A background counter poll. The first fetch fires immediately, then once
/// per period. Fetch failures keep the previous value.
pub struct CounterPoller {
    receiver: watch::Receiver<u64>,
    task: JoinHandle<()>,
}

impl CounterPoller {
    pub fn spawn<F, Fut>(period: Duration, mut fetch: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ClientResult<u64>> + Send,
    {
        let (sender, receiver) = watch::channel(0u64);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match fetch().await {
                    Ok(count) => {
                        if sender.send(count).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "counter poll failed");
                    }
                }
            }
        });

        Self { receiver, task }
    }

    /// Most recently fetched value
    pub fn latest(&self) -> u64 {
        *self.receiver.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.receiver.clone()
    }

    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for CounterPoller {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Unread-notification badge in the layout header
pub fn unread_notifications(api: Arc<ApiClient>, period: Duration) -> CounterPoller {
    CounterPoller::spawn(period, move || {
        let api = api.clone();
        async move {
            let list = notifications::list(&api).await?;
            Ok(shared::models::unread_count(&list) as u64)
        }
    })
}

/// Pending-discrepancy badge in the admin sidebar
pub fn pending_discrepancies(api: Arc<ApiClient>, period: Duration) -> CounterPoller {
    CounterPoller::spawn(period, move || {
        let api = api.clone();
        async move { discrepancies::pending_count(&api).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[tokio::test]
    async fn test_poller_ticks_and_publishes() {
        let calls = Arc::new(AtomicU64::new(0));
        let counter = calls.clone();
        let poller = CounterPoller::spawn(Duration::from_millis(10), move || {
            let counter = counter.clone();
            async move { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }
        });

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(poller.latest() >= 2, "expected at least two ticks");
    }

    #[tokio::test]
    async fn test_stop_cancels_the_loop() {
        let calls = Arc::new(AtomicU64::new(0));
        let counter = calls.clone();
        let poller = CounterPoller::spawn(Duration::from_millis(5), move || {
            let counter = counter.clone();
            async move { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        poller.stop();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let after_stop = calls.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(calls.load(Ordering::SeqCst), after_stop);
    }
}
