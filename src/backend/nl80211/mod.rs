//! nl80211 backend implementation over generic netlink

pub mod consts;
pub mod parse;

use std::sync::{Arc, Mutex};

use neli::{
    consts::{
        nl::{NlmF, NlmFFlags},
        socket::NlFamily,
    },
    err::NlError,
    genl::{Genlmsghdr, Nlattr},
    nl::{NlPayload, Nlmsghdr},
    socket::NlSocketHandle,
    types::{Buffer, GenlBuffer},
};
use tracing::debug;

use self::{
    consts::{NL80211_GENL_NAME, NL80211_GENL_VERSION, Nl80211Attribute, Nl80211Command},
    parse::{Nl80211Message, parse_interface, parse_station},
};
use crate::{
    backend::WirelessBackend,
    core::{
        error::{WifiError, WifiResult},
        types::{Interface, StationInfo},
    },
};

const NLMSG_DONE: u16 = 3;

/// An open generic netlink socket bound to the nl80211 family
struct Nl80211Socket {
    socket: NlSocketHandle,
    family_id: u16,
}

impl Nl80211Socket {
    fn connect() -> WifiResult<Self> {
        let mut socket = NlSocketHandle::connect(NlFamily::Generic, None, &[]).map_err(|e| {
            WifiError::BackendUnavailable(format!("Failed to open generic netlink socket: {}", e))
        })?;

        let family_id = socket.resolve_genl_family(NL80211_GENL_NAME).map_err(|e| {
            WifiError::BackendUnavailable(format!(
                "Failed to resolve {} family: {}",
                NL80211_GENL_NAME, e
            ))
        })?;

        Ok(Self { socket, family_id })
    }

    /// Send a dump request and collect every reply until NLMSG_DONE
    fn dump(
        &mut self,
        cmd: Nl80211Command,
        attrs: GenlBuffer<Nl80211Attribute, Buffer>,
    ) -> WifiResult<Vec<Nl80211Message>> {
        let genlhdr = Genlmsghdr::new(cmd, NL80211_GENL_VERSION, attrs);
        let nlhdr = Nlmsghdr::new(
            None,
            self.family_id,
            NlmFFlags::new(&[NlmF::Request, NlmF::Dump]),
            None,
            None,
            NlPayload::Payload(genlhdr),
        );

        self.socket
            .send(nlhdr)
            .map_err(|e| WifiError::Netlink(format!("Failed to send request: {}", e)))?;

        let mut replies = Vec::new();
        loop {
            let msg: Nlmsghdr<u16, Nl80211Message> = match self.socket.recv() {
                Ok(Some(msg)) => msg,
                Ok(None) => break,
                Err(NlError::Nlmsgerr(err)) => return Err(errno_error(err.error)),
                Err(e) => {
                    return Err(WifiError::Netlink(format!("Failed to receive reply: {}", e)));
                }
            };

            if msg.nl_type == NLMSG_DONE {
                break;
            }

            if let NlPayload::Payload(genl) = msg.nl_payload {
                replies.push(genl);
            }
        }

        Ok(replies)
    }
}

/// Kernel errors carry a negated errno
fn errno_error(error: i32) -> WifiError {
    let errno = error.abs();
    WifiError::Netlink(format!(
        "{} (errno {})",
        std::io::Error::from_raw_os_error(errno),
        errno
    ))
}

/// Turn a station dump into records; an empty dump means no link
fn station_records(
    interface: &Interface,
    replies: &[Nl80211Message],
) -> WifiResult<Vec<StationInfo>> {
    if replies.is_empty() {
        return Err(WifiError::NoStationInfo(interface.to_string()));
    }
    replies.iter().map(parse_station).collect()
}

impl Drop for Nl80211Socket {
    fn drop(&mut self) {
        debug!("Releasing nl80211 socket (family {})", self.family_id);
    }
}

/// Real nl80211 backend implementation
///
/// Holds one generic netlink socket for its whole lifetime. Requests are
/// serialized through a mutex and run on the blocking thread pool.
#[derive(Clone)]
pub struct Nl80211Backend {
    socket: Arc<Mutex<Nl80211Socket>>,
}

impl Nl80211Backend {
    /// Acquire a handle to the wireless subsystem
    pub fn connect() -> WifiResult<Self> {
        let socket = Nl80211Socket::connect()?;
        debug!("Resolved nl80211 family id {}", socket.family_id);
        Ok(Self {
            socket: Arc::new(Mutex::new(socket)),
        })
    }

    async fn dump(
        &self,
        cmd: Nl80211Command,
        attrs: GenlBuffer<Nl80211Attribute, Buffer>,
    ) -> WifiResult<Vec<Nl80211Message>> {
        let socket = self.socket.clone();

        tokio::task::spawn_blocking(move || {
            let mut socket = socket
                .lock()
                .map_err(|_| WifiError::Netlink("nl80211 socket lock poisoned".into()))?;
            socket.dump(cmd, attrs)
        })
        .await
        .map_err(|e| WifiError::Netlink(format!("Task join error: {}", e)))?
    }
}

impl WirelessBackend for Nl80211Backend {
    async fn interfaces(&self) -> WifiResult<Vec<Interface>> {
        debug!("Dumping nl80211 interfaces");

        let replies = self
            .dump(Nl80211Command::GetInterface, GenlBuffer::new())
            .await?;

        replies.iter().map(parse_interface).collect()
    }

    async fn station_info(&self, interface: &Interface) -> WifiResult<Vec<StationInfo>> {
        if interface.index == 0 {
            return Err(WifiError::InterfaceError(format!(
                "Interface {} has no network device index",
                interface
            )));
        }

        let ifindex = Nlattr::new(false, false, Nl80211Attribute::IfIndex, interface.index)
            .map_err(|e| WifiError::Netlink(format!("Failed to build request: {}", e)))?;
        let mut attrs = GenlBuffer::new();
        attrs.push(ifindex);

        let replies = self.dump(Nl80211Command::GetStation, attrs).await?;
        station_records(interface, &replies)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{backend::mock_backend::fixtures::interface, core::types::InterfaceType};

    #[test]
    fn test_errno_error_names_the_os_error() {
        let err = errno_error(-19);
        let expected = format!("{} (errno 19)", std::io::Error::from_raw_os_error(19));

        assert_eq!(err, WifiError::Netlink(expected));
    }

    #[test]
    fn test_empty_station_dump_names_unnamed_interface() {
        let wdev = interface(7, "", InterfaceType::Station);

        let err = station_records(&wdev, &[]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "No station info for interface #7 (station)"
        );
    }

    #[test]
    fn test_empty_station_dump_names_interface() {
        let wlan0 = interface(3, "wlan0", InterfaceType::Station);

        assert_eq!(
            station_records(&wlan0, &[]),
            Err(WifiError::NoStationInfo("wlan0 (station)".into()))
        );
    }
}
