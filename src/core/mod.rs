//! Core monitoring logic

pub mod clock;
pub mod error;
pub mod monitor;
pub mod output;
pub mod poller;
pub mod selection;
pub mod types;
