//! Domain types for wireless interfaces and station statistics

use std::{fmt, time::Duration};

use serde::{Serialize, Serializer};

/// IEEE 802 hardware address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    /// Build an address from a netlink attribute payload
    ///
    /// Returns `None` unless the payload is exactly six octets.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; 6]>::try_from(bytes).ok().map(MacAddr)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Virtual interface type, as reported by `nl80211_iftype`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceType {
    Unspecified,
    AdHoc,
    /// Client of an access point
    Station,
    Ap,
    ApVlan,
    Wds,
    Monitor,
    MeshPoint,
    P2pClient,
    P2pGo,
    P2pDevice,
    Ocb,
    Nan,
    Unknown(u32),
}

impl From<u32> for InterfaceType {
    fn from(value: u32) -> Self {
        match value {
            0 => InterfaceType::Unspecified,
            1 => InterfaceType::AdHoc,
            2 => InterfaceType::Station,
            3 => InterfaceType::Ap,
            4 => InterfaceType::ApVlan,
            5 => InterfaceType::Wds,
            6 => InterfaceType::Monitor,
            7 => InterfaceType::MeshPoint,
            8 => InterfaceType::P2pClient,
            9 => InterfaceType::P2pGo,
            10 => InterfaceType::P2pDevice,
            11 => InterfaceType::Ocb,
            12 => InterfaceType::Nan,
            other => InterfaceType::Unknown(other),
        }
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InterfaceType::Unspecified => "unspecified",
            InterfaceType::AdHoc => "ad-hoc",
            InterfaceType::Station => "station",
            InterfaceType::Ap => "access point",
            InterfaceType::ApVlan => "access point VLAN",
            InterfaceType::Wds => "WDS",
            InterfaceType::Monitor => "monitor",
            InterfaceType::MeshPoint => "mesh point",
            InterfaceType::P2pClient => "P2P client",
            InterfaceType::P2pGo => "P2P group owner",
            InterfaceType::P2pDevice => "P2P device",
            InterfaceType::Ocb => "outside context of BSS",
            InterfaceType::Nan => "NAN",
            InterfaceType::Unknown(value) => return write!(f, "unknown({value})"),
        };
        f.write_str(name)
    }
}

/// A wireless network interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    /// Kernel interface index, zero for non-netdev interfaces
    pub index: u32,
    /// Interface name, empty for non-netdev interfaces
    pub name: String,
    pub hardware_addr: Option<MacAddr>,
    /// Index of the physical device (wiphy)
    pub phy: Option<u32>,
    /// Wireless device identifier
    pub device: Option<u64>,
    /// Operating frequency in MHz
    pub frequency: Option<u32>,
    pub interface_type: InterfaceType,
}

impl Interface {
    pub fn is_station(&self) -> bool {
        self.interface_type == InterfaceType::Station
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "#{} ({})", self.index, self.interface_type)
        } else {
            write!(f, "{} ({})", self.name, self.interface_type)
        }
    }
}

/// Live link statistics for one peer of a wireless interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StationInfo {
    /// Hardware address of the peer
    pub hardware_addr: Option<MacAddr>,
    /// Signal strength of the last received frame in dBm
    pub signal: i32,
    /// Average signal strength in dBm
    pub signal_average: Option<i32>,
    #[serde(serialize_with = "serialize_secs")]
    pub connected_time: Duration,
    #[serde(serialize_with = "serialize_secs")]
    pub inactive_time: Duration,
    pub received_bytes: u64,
    pub transmitted_bytes: u64,
    pub received_packets: u32,
    pub transmitted_packets: u32,
    pub transmit_retries: u32,
    pub transmit_failed: u32,
    pub beacon_loss: u32,
    /// Last unicast receive rate in bits per second
    pub receive_bitrate: u64,
    /// Current unicast transmit rate in bits per second
    pub transmit_bitrate: u64,
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}
