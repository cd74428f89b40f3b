//! Runtime settings

use std::time::Duration;

use tracing::warn;

use crate::config::CliArgs;
use crate::core::{output::OutputFormat, poller::DEFAULT_INTERVAL};

/// Runtime configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub interface: Option<String>,
    pub interval: Duration,
    pub max_iterations: Option<u64>,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            interface: None,
            interval: DEFAULT_INTERVAL,
            max_iterations: None,
            format: OutputFormat::Text,
        }
    }
}

impl From<CliArgs> for Settings {
    fn from(args: CliArgs) -> Self {
        let interval = Duration::try_from_secs_f64(args.interval)
            .ok()
            .filter(|interval| !interval.is_zero())
            .unwrap_or_else(|| {
                warn!(
                    "Invalid interval {}, using {:?}",
                    args.interval, DEFAULT_INTERVAL
                );
                DEFAULT_INTERVAL
            });

        let format = if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Settings {
            interface: args.interface,
            interval,
            max_iterations: args.count,
            format,
        }
    }
}
