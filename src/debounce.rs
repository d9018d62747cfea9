use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Deferred callback with cancel-and-reschedule semantics: each `call`
/// aborts any still-pending invocation, so only the last call in a burst
/// fires once the quiet interval elapses.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            f();
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    // Let spawned tasks get polled so their sleep registers against the
    // paused clock before we advance it.
    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_quiet_interval() {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        debouncer.call(move || {
            tx.send("abc").unwrap();
        });
        settle().await;
        tokio::time::advance(Duration::from_millis(499)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
        tokio::time::advance(Duration::from_millis(2)).await;
        settle().await;
        assert_eq!(rx.try_recv(), Ok("abc"));
    }

    #[tokio::test(start_paused = true)]
    async fn burst_fires_once_with_last_value() {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        for term in ["x", "xy", "xyz"] {
            let tx = tx.clone();
            debouncer.call(move || {
                tx.send(term).unwrap();
            });
            settle().await;
            tokio::time::advance(Duration::from_millis(100)).await;
        }
        tokio::time::advance(Duration::from_millis(600)).await;
        settle().await;
        let fired: Vec<_> = rx.try_iter().collect();
        assert_eq!(fired, vec!["xyz"]);
    }

    #[tokio::test(start_paused = true)]
    async fn new_call_resets_the_clock() {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let tx1 = tx.clone();
        debouncer.call(move || {
            tx1.send("first").unwrap();
        });
        settle().await;
        tokio::time::advance(Duration::from_millis(400)).await;
        settle().await;
        debouncer.call(move || {
            tx.send("second").unwrap();
        });
        settle().await;
        // 400ms into the second window: past the original deadline, under
        // the rescheduled one.
        tokio::time::advance(Duration::from_millis(400)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
        tokio::time::advance(Duration::from_millis(101)).await;
        settle().await;
        let fired: Vec<_> = rx.try_iter().collect();
        assert_eq!(fired, vec!["second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_call() {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        debouncer.call(move || {
            tx.send(()).unwrap();
        });
        settle().await;
        assert!(debouncer.is_pending());
        debouncer.cancel();
        tokio::time::advance(Duration::from_millis(1000)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }
}
