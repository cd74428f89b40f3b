//! Wireless backend abstraction layer

pub mod mock_backend;
pub mod nl80211;
pub mod wireless_backend;

pub use nl80211::Nl80211Backend;
pub use wireless_backend::WirelessBackend;

#[cfg(test)]
pub use mock_backend::MockWirelessBackend;
