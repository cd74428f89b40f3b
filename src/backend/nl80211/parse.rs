//! Conversion of nl80211 replies into domain types

use std::time::Duration;

use neli::genl::Genlmsghdr;

use super::consts::{Nl80211Attribute, Nl80211Command, Nl80211RateInfo, Nl80211StaInfo};
use crate::core::{
    error::{WifiError, WifiResult},
    types::{Interface, InterfaceType, MacAddr, StationInfo},
};

/// A generic netlink message of the nl80211 family
pub type Nl80211Message = Genlmsghdr<Nl80211Command, Nl80211Attribute>;

/// Rate attributes are reported in units of 100 kbit/s
const BITRATE_UNIT: u64 = 100_000;

/// Build an [`Interface`] from a `NL80211_CMD_NEW_INTERFACE` reply
pub fn parse_interface(msg: &Nl80211Message) -> WifiResult<Interface> {
    let handle = msg.get_attr_handle();

    let index = handle
        .get_attr_payload_as::<u32>(Nl80211Attribute::IfIndex)
        .unwrap_or(0);
    let name = handle
        .get_attribute(Nl80211Attribute::IfName)
        .map(|attr| c_string(attr.nla_payload.as_ref()))
        .unwrap_or_default();
    let hardware_addr = handle
        .get_attribute(Nl80211Attribute::Mac)
        .and_then(|attr| MacAddr::from_slice(attr.nla_payload.as_ref()));
    let interface_type = handle
        .get_attr_payload_as::<u32>(Nl80211Attribute::IfType)
        .map(InterfaceType::from)
        .map_err(|e| WifiError::InterfaceError(format!("Missing interface type: {}", e)))?;

    Ok(Interface {
        index,
        name,
        hardware_addr,
        phy: handle.get_attr_payload_as::<u32>(Nl80211Attribute::Wiphy).ok(),
        device: handle.get_attr_payload_as::<u64>(Nl80211Attribute::Wdev).ok(),
        frequency: handle
            .get_attr_payload_as::<u32>(Nl80211Attribute::WiphyFreq)
            .ok(),
        interface_type,
    })
}

/// Build a [`StationInfo`] from a `NL80211_CMD_NEW_STATION` reply
pub fn parse_station(msg: &Nl80211Message) -> WifiResult<StationInfo> {
    let handle = msg.get_attr_handle();

    let hardware_addr = handle
        .get_attribute(Nl80211Attribute::Mac)
        .and_then(|attr| MacAddr::from_slice(attr.nla_payload.as_ref()));

    let sta = handle
        .get_attribute(Nl80211Attribute::StaInfo)
        .ok_or_else(|| WifiError::StationInfoFailed("Missing station info attribute".into()))?
        .get_attr_handle::<Nl80211StaInfo>()
        .map_err(|e| WifiError::StationInfoFailed(format!("Malformed station info: {}", e)))?;

    let u32_or_zero = |attr| sta.get_attr_payload_as::<u32>(attr).unwrap_or(0);

    // Prefer the 64-bit counters, older kernels only send the 32-bit ones
    let byte_counter = |wide, narrow| {
        sta.get_attr_payload_as::<u64>(wide)
            .or_else(|_| sta.get_attr_payload_as::<u32>(narrow).map(u64::from))
            .unwrap_or(0)
    };

    // Signal attributes are dBm carried in an unsigned octet
    let dbm = |attr| {
        sta.get_attr_payload_as::<u8>(attr)
            .ok()
            .map(|raw| i32::from(raw as i8))
    };

    let bitrate = |attr| {
        sta.get_attribute(attr)
            .and_then(|rate| rate.get_attr_handle::<Nl80211RateInfo>().ok())
            .and_then(|rate| {
                rate.get_attr_payload_as::<u32>(Nl80211RateInfo::Bitrate32)
                    .or_else(|_| {
                        rate.get_attr_payload_as::<u16>(Nl80211RateInfo::Bitrate)
                            .map(u32::from)
                    })
                    .ok()
            })
            .map_or(0, |units| u64::from(units) * BITRATE_UNIT)
    };

    Ok(StationInfo {
        hardware_addr,
        signal: dbm(Nl80211StaInfo::Signal).unwrap_or(0),
        signal_average: dbm(Nl80211StaInfo::SignalAvg),
        connected_time: Duration::from_secs(u32_or_zero(Nl80211StaInfo::ConnectedTime).into()),
        inactive_time: Duration::from_millis(u32_or_zero(Nl80211StaInfo::InactiveTime).into()),
        received_bytes: byte_counter(Nl80211StaInfo::RxBytes64, Nl80211StaInfo::RxBytes),
        transmitted_bytes: byte_counter(Nl80211StaInfo::TxBytes64, Nl80211StaInfo::TxBytes),
        received_packets: u32_or_zero(Nl80211StaInfo::RxPackets),
        transmitted_packets: u32_or_zero(Nl80211StaInfo::TxPackets),
        transmit_retries: u32_or_zero(Nl80211StaInfo::TxRetries),
        transmit_failed: u32_or_zero(Nl80211StaInfo::TxFailed),
        beacon_loss: u32_or_zero(Nl80211StaInfo::BeaconLoss),
        receive_bitrate: bitrate(Nl80211StaInfo::RxBitrate),
        transmit_bitrate: bitrate(Nl80211StaInfo::TxBitrate),
    })
}

/// Decode a NUL terminated netlink string attribute
fn c_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
