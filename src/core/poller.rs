//! Periodic station info polling loop

use std::{io::Write, sync::Arc, time::Duration};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    backend::WirelessBackend,
    core::{
        clock::Sleeper,
        error::ServiceResult,
        output::SignalWriter,
        types::Interface,
    },
};

/// Default pause between two fetches
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Counters accumulated over one run of the poller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollSummary {
    pub iterations: u64,
    pub records: u64,
    pub errors: u64,
}

/// Fetches station info for one interface on a fixed interval
///
/// Fetch failures are reported and the loop carries on; only output
/// failures end it early. Without `max_iterations` the loop runs until the
/// shutdown signal fires.
pub struct Poller<B: WirelessBackend, S: Sleeper, W: Write> {
    backend: Arc<B>,
    interface: Interface,
    sleeper: S,
    output: SignalWriter<W>,
    interval: Duration,
    max_iterations: Option<u64>,
}

impl<B: WirelessBackend, S: Sleeper, W: Write> Poller<B, S, W> {
    pub fn new(backend: Arc<B>, interface: Interface, sleeper: S, output: SignalWriter<W>) -> Self {
        Self {
            backend,
            interface,
            sleeper,
            output,
            interval: DEFAULT_INTERVAL,
            max_iterations: None,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Stop after `max_iterations` fetches instead of running forever
    pub fn with_max_iterations(mut self, max_iterations: Option<u64>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Run one fetch and write its lines
    async fn poll_once(&mut self, summary: &mut PollSummary) -> ServiceResult<()> {
        match self.backend.station_info(&self.interface).await {
            Ok(stations) => {
                debug!(count = stations.len(), "Fetched station info");
                for station in &stations {
                    self.output.station(station)?;
                }
                summary.records += stations.len() as u64;
            }
            Err(e) => {
                warn!("Station info for {} failed: {}", self.interface, e);
                self.output.error(&e)?;
                summary.errors += 1;
            }
        }
        self.output.flush()
    }

    fn limit_reached(&self, summary: &PollSummary) -> bool {
        self.max_iterations
            .is_some_and(|max| summary.iterations >= max)
    }

    /// Poll until shutdown or the iteration limit
    ///
    /// Any change on `shutdown`, or its sender going away, stops the loop at
    /// the next sleep.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> ServiceResult<PollSummary> {
        let mut summary = PollSummary::default();
        info!(
            "Polling station info on {} every {:?}",
            self.interface, self.interval
        );

        loop {
            if *shutdown.borrow() || self.limit_reached(&summary) {
                break;
            }

            self.poll_once(&mut summary).await?;
            summary.iterations += 1;

            if self.limit_reached(&summary) {
                break;
            }

            tokio::select! {
                _ = self.sleeper.sleep(self.interval) => {}
                _ = shutdown.changed() => {
                    info!("Shutdown requested, stopping poller");
                    break;
                }
            }
        }

        debug!(?summary, "Poller stopped");
        Ok(summary)
    }

    pub fn into_output(self) -> SignalWriter<W> {
        self.output
    }
}
