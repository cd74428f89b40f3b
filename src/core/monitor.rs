//! Startup sequence: acquire the handle, pick an interface, poll

use std::{io::Write, sync::Arc};

use tokio::sync::watch;
use tracing::info;

use crate::{
    backend::WirelessBackend,
    config::Settings,
    core::{
        clock::Sleeper,
        error::{ServiceResult, WifiResult},
        output::SignalWriter,
        poller::{PollSummary, Poller},
        selection::select_station,
    },
};

/// Run the signal monitor to completion
///
/// `open` acquires the wireless subsystem handle. Each step before polling
/// is fatal on failure: a failed acquisition returns before any interface
/// is enumerated, and a failed enumeration or a missing station interface
/// returns before any fetch. The handle is released when this returns.
pub async fn run<B, F, S, W>(
    open: F,
    settings: &Settings,
    sleeper: S,
    writer: W,
    shutdown: watch::Receiver<bool>,
) -> ServiceResult<PollSummary>
where
    B: WirelessBackend,
    F: FnOnce() -> WifiResult<B>,
    S: Sleeper,
    W: Write,
{
    let backend = Arc::new(open()?);
    info!("Wireless subsystem handle acquired");

    let interfaces = backend.interfaces().await?;
    info!("Found {} wireless interface(s)", interfaces.len());

    let interface = select_station(&interfaces, settings.interface.as_deref())?;
    info!("Monitoring station interface {}", interface);

    #[cfg(feature = "systemd")]
    if let Err(e) = sd_notify::notify(false, &[sd_notify::NotifyState::Ready]) {
        tracing::warn!("Failed to notify systemd: {}", e);
    }

    let mut poller = Poller::new(
        backend,
        interface,
        sleeper,
        SignalWriter::new(writer, settings.format),
    )
    .with_interval(settings.interval)
    .with_max_iterations(settings.max_iterations);

    poller.run(shutdown).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::backend::MockWirelessBackend;
    use crate::backend::mock_backend::fixtures::{interface, station};
    use crate::core::{
        clock::recording::RecordingSleeper,
        error::{ServiceError, WifiError},
        output::OutputFormat,
        types::InterfaceType,
    };

    /// Output sink that stays readable after being moved into the monitor
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn settings(max_iterations: u64) -> Settings {
        Settings {
            interface: None,
            interval: Duration::from_secs(1),
            max_iterations: Some(max_iterations),
            format: OutputFormat::Text,
        }
    }

    #[tokio::test]
    async fn test_acquisition_failure_is_fatal() {
        let (_tx, rx) = watch::channel(false);
        let out = SharedBuffer::default();
        let sleeper = RecordingSleeper::default();

        let result = run(
            || -> WifiResult<MockWirelessBackend> {
                Err(WifiError::BackendUnavailable("permission denied".into()))
            },
            &settings(1),
            sleeper.clone(),
            out.clone(),
            rx,
        )
        .await;

        assert!(matches!(
            result,
            Err(ServiceError::Backend(WifiError::BackendUnavailable(_)))
        ));
        assert_eq!(out.contents(), "");
        assert!(sleeper.calls().is_empty());
    }

    #[tokio::test]
    async fn test_enumeration_failure_is_fatal() {
        let backend = MockWirelessBackend::new();
        backend.set_interfaces_failure(true).await;
        let (_tx, rx) = watch::channel(false);

        let result = run(
            || Ok(backend.clone()),
            &settings(1),
            RecordingSleeper::default(),
            SharedBuffer::default(),
            rx,
        )
        .await;

        assert!(matches!(
            result,
            Err(ServiceError::Backend(WifiError::Netlink(_)))
        ));
        assert!(backend.station_calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_no_station_interface_is_fatal() {
        let backend = MockWirelessBackend::new();
        backend
            .set_interfaces(vec![
                interface(2, "mon0", InterfaceType::Monitor),
                interface(5, "ap0", InterfaceType::Ap),
            ])
            .await;
        let (_tx, rx) = watch::channel(false);
        let out = SharedBuffer::default();

        let result = run(
            || Ok(backend.clone()),
            &settings(1),
            RecordingSleeper::default(),
            out.clone(),
            rx,
        )
        .await;

        assert!(matches!(result, Err(ServiceError::NoStationInterface)));
        assert!(backend.station_calls().await.is_empty());
        assert_eq!(out.contents(), "");
    }

    #[tokio::test]
    async fn test_polls_first_station_interface() {
        let backend = MockWirelessBackend::new();
        backend
            .set_interfaces(vec![
                interface(2, "mon0", InterfaceType::Monitor),
                interface(3, "wlan0", InterfaceType::Station),
                interface(4, "wlan1", InterfaceType::Station),
            ])
            .await;
        backend.set_default_stations(vec![station(-48)]).await;
        let (_tx, rx) = watch::channel(false);
        let out = SharedBuffer::default();
        let sleeper = RecordingSleeper::default();

        let summary = run(
            || Ok(backend.clone()),
            &settings(3),
            sleeper.clone(),
            out.clone(),
            rx,
        )
        .await
        .unwrap();

        assert_eq!(summary.iterations, 3);
        assert_eq!(backend.interface_calls().await, 1);
        assert_eq!(backend.station_calls().await, vec![3, 3, 3]);
        assert_eq!(out.contents(), "Signal: -48\nSignal: -48\nSignal: -48\n");
        assert_eq!(sleeper.calls(), vec![Duration::from_secs(1); 2]);
    }
}
