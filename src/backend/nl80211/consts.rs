//! nl80211 constants used by the monitor
//!
//! Values follow `/usr/include/linux/nl80211.h`. Only the commands and
//! attributes this crate sends or reads are listed.

use neli::consts::genl::{Cmd, NlAttrType};
use neli::neli_enum;

/// Generic netlink family name of the wireless subsystem
pub const NL80211_GENL_NAME: &str = "nl80211";

/// Generic netlink header version sent with every request
pub const NL80211_GENL_VERSION: u8 = 1;

/// enum nl80211_commands
#[neli_enum(serialized_type = "u8")]
#[non_exhaustive]
pub enum Nl80211Command {
    /// Request an interface's configuration; dump to list all interfaces
    GetInterface = 5,
    /// Reply to %NL80211_CMD_GET_INTERFACE
    NewInterface = 7,
    /// Get station attributes; dump with %NL80211_ATTR_IFINDEX to list all peers
    GetStation = 17,
    /// Reply to %NL80211_CMD_GET_STATION
    NewStation = 19,
}
impl Cmd for Nl80211Command {}

/// enum nl80211_attrs
#[neli_enum(serialized_type = "u16")]
#[non_exhaustive]
pub enum Nl80211Attribute {
    Unspecified = 0,
    /// index of wiphy to operate on (u32)
    Wiphy = 1,
    /// network interface index of the device to operate on (u32)
    IfIndex = 3,
    /// network interface name (NUL terminated string)
    IfName = 4,
    /// type of virtual interface, see &enum nl80211_iftype (u32)
    IfType = 5,
    /// MAC address
    Mac = 6,
    /// nested attribute with station info, see &enum nl80211_sta_info
    StaInfo = 21,
    /// frequency of the selected channel in MHz (u32)
    WiphyFreq = 38,
    /// wireless device identifier (u64)
    Wdev = 153,
}
impl NlAttrType for Nl80211Attribute {}

/// enum nl80211_sta_info
#[neli_enum(serialized_type = "u16")]
#[non_exhaustive]
pub enum Nl80211StaInfo {
    Unspecified = 0,
    /// time since last activity (u32, msecs)
    InactiveTime = 1,
    /// total received bytes (u32)
    RxBytes = 2,
    /// total transmitted bytes (u32)
    TxBytes = 3,
    /// signal strength of last received PPDU (u8, dBm)
    Signal = 7,
    /// current unicast tx rate, nested &enum nl80211_rate_info
    TxBitrate = 8,
    /// total received packets (u32)
    RxPackets = 9,
    /// total transmitted packets (u32)
    TxPackets = 10,
    /// total retries (u32)
    TxRetries = 11,
    /// total failed packets (u32)
    TxFailed = 12,
    /// signal strength average (u8, dBm)
    SignalAvg = 13,
    /// last unicast data frame rx rate, nested &enum nl80211_rate_info
    RxBitrate = 14,
    /// time since the station is last connected (u32, seconds)
    ConnectedTime = 16,
    /// count of times beacon loss was detected (u32)
    BeaconLoss = 18,
    /// total received bytes (u64)
    RxBytes64 = 23,
    /// total transmitted bytes (u64)
    TxBytes64 = 24,
}
impl NlAttrType for Nl80211StaInfo {}

/// enum nl80211_rate_info
#[neli_enum(serialized_type = "u16")]
#[non_exhaustive]
pub enum Nl80211RateInfo {
    Unspecified = 0,
    /// total bitrate (u16, 100 kbps)
    Bitrate = 1,
    /// total bitrate (u32, 100 kbps)
    Bitrate32 = 5,
}
impl NlAttrType for Nl80211RateInfo {}
