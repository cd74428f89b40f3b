//! Sleep abstraction for the polling loop

use std::time::Duration;

use trait_variant::make;

/// Source of the pause between polling iterations
///
/// Injected into the poller so tests can count iterations without waiting
/// on the wall clock.
#[make(Send)]
pub trait Sleeper: Sync + 'static {
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::Sleeper;

    /// Sleeper that returns immediately and remembers every requested pause
    #[derive(Debug, Clone, Default)]
    pub struct RecordingSleeper {
        calls: Arc<Mutex<Vec<Duration>>>,
    }

    impl RecordingSleeper {
        pub fn calls(&self) -> Vec<Duration> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.calls.lock().unwrap().push(duration);
            tokio::task::yield_now().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_sleeper_waits_full_interval() {
        let start = tokio::time::Instant::now();
        TokioSleeper.sleep(Duration::from_secs(1)).await;
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
