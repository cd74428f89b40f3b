//! Rendering of station records to the output stream

use std::io::Write;

use serde::Serialize;

use crate::core::{
    error::{ServiceResult, WifiError},
    types::StationInfo,
};

/// Format of the lines written for each polling iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Signal: <dBm>` per record, `Station err: <message>` per failure
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct ErrorLine<'a> {
    error: &'a str,
}

/// Line-oriented writer for signal readings
pub struct SignalWriter<W: Write> {
    inner: W,
    format: OutputFormat,
}

impl<W: Write> SignalWriter<W> {
    pub fn new(inner: W, format: OutputFormat) -> Self {
        Self { inner, format }
    }

    /// Write one line for a station record
    pub fn station(&mut self, info: &StationInfo) -> ServiceResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.inner, "Signal: {}", info.signal)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.inner, info)?;
                writeln!(self.inner)?;
            }
        }
        Ok(())
    }

    /// Write one diagnostic line for a failed fetch
    pub fn error(&mut self, err: &WifiError) -> ServiceResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.inner, "Station err: {}", err)?,
            OutputFormat::Json => {
                let message = err.to_string();
                serde_json::to_writer(&mut self.inner, &ErrorLine { error: &message })?;
                writeln!(self.inner)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> ServiceResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
