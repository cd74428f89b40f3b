//! Wireless backend trait definition

use trait_variant::make;

use crate::core::error::WifiResult;
use crate::core::types::{Interface, StationInfo};

/// Abstraction over the kernel wireless subsystem (typically nl80211)
///
/// This trait enables testing by allowing mock implementations
/// while providing a standard interface for the queries the monitor needs.
/// Acquiring the handle is the implementation's constructor; releasing it
/// is its `Drop`.
#[make(Send)]
pub trait WirelessBackend: Sync + 'static {
    /// Enumerate all wireless interfaces known to the kernel
    async fn interfaces(&self) -> WifiResult<Vec<Interface>>;

    /// Fetch the current station records for an interface
    ///
    /// A station interface reports one record for the access point it is
    /// associated with. An interface with no peers yields
    /// [`WifiError::NoStationInfo`](crate::core::error::WifiError::NoStationInfo).
    async fn station_info(&self, interface: &Interface) -> WifiResult<Vec<StationInfo>>;
}
