//! Mock wireless backend for testing

use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::backend::WirelessBackend;
use crate::core::error::{WifiError, WifiResult};
use crate::core::types::{Interface, StationInfo};

/// Internal state for the mock backend
#[derive(Debug, Clone, Default)]
struct MockState {
    interfaces: Vec<Interface>,
    should_fail_interfaces: bool,
    scripted_stations: VecDeque<WifiResult<Vec<StationInfo>>>,
    default_stations: Vec<StationInfo>,
    interface_calls: usize,
    station_calls: Vec<u32>,
}

/// Mock wireless backend for testing
///
/// Allows configuring behavior for tests without requiring actual hardware.
#[derive(Debug, Clone, Default)]
pub struct MockWirelessBackend {
    inner: Arc<Mutex<MockState>>,
}

impl MockWirelessBackend {
    /// Create a new mock backend with no interfaces
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure mock to return specific interfaces on enumeration
    pub async fn set_interfaces(&self, interfaces: Vec<Interface>) {
        self.inner.lock().await.interfaces = interfaces;
    }

    /// Configure mock to fail interface enumeration
    pub async fn set_interfaces_failure(&self, should_fail: bool) {
        self.inner.lock().await.should_fail_interfaces = should_fail;
    }

    /// Queue one result for the next station query
    ///
    /// Queued results are consumed in order; once the queue is empty the
    /// default station list is returned.
    pub async fn push_station_result(&self, result: WifiResult<Vec<StationInfo>>) {
        self.inner.lock().await.scripted_stations.push_back(result);
    }

    /// Records returned once the scripted queue is exhausted
    pub async fn set_default_stations(&self, stations: Vec<StationInfo>) {
        self.inner.lock().await.default_stations = stations;
    }

    /// Number of times interfaces were enumerated
    pub async fn interface_calls(&self) -> usize {
        self.inner.lock().await.interface_calls
    }

    /// Interface indexes passed to each station query, in call order
    pub async fn station_calls(&self) -> Vec<u32> {
        self.inner.lock().await.station_calls.clone()
    }
}

impl WirelessBackend for MockWirelessBackend {
    async fn interfaces(&self) -> WifiResult<Vec<Interface>> {
        let mut state = self.inner.lock().await;
        state.interface_calls += 1;
        if state.should_fail_interfaces {
            Err(WifiError::Netlink("Mock enumeration failure".into()))
        } else {
            Ok(state.interfaces.clone())
        }
    }

    async fn station_info(&self, interface: &Interface) -> WifiResult<Vec<StationInfo>> {
        let mut state = self.inner.lock().await;
        state.station_calls.push(interface.index);
        match state.scripted_stations.pop_front() {
            Some(result) => result,
            None => Ok(state.default_stations.clone()),
        }
    }
}
