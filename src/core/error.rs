//! Error types for the signal monitor

use thiserror::Error;

/// Result type for wireless backend operations
pub type WifiResult<T> = Result<T, WifiError>;

/// Result type for monitor operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors related to wireless backend operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WifiError {
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Network interface error: {0}")]
    InterfaceError(String),

    #[error("Station info request failed: {0}")]
    StationInfoFailed(String),

    #[error("No station info for interface {0}")]
    NoStationInfo(String),

    #[error("Netlink error: {0}")]
    Netlink(String),
}

/// Errors related to the monitor startup sequence and polling loop
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("No station interface found")]
    NoStationInterface,

    #[error("No station interface named {0:?} found")]
    NoNamedStationInterface(String),

    #[error("Backend error: {0}")]
    Backend(#[from] WifiError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
