//! WiFi Signal Monitor
//!
//! Polls the kernel wireless subsystem (nl80211) for the station link of
//! the first station-mode interface and prints its signal strength.

pub mod backend;
pub mod config;
pub mod core;

pub use core::{
    error::{ServiceError, WifiError},
    types::{Interface, InterfaceType, MacAddr, StationInfo},
};
