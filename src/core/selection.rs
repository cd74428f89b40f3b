//! Station interface selection

use tracing::debug;

use crate::core::{
    error::{ServiceError, ServiceResult},
    types::Interface,
};

/// Pick the interface to monitor
///
/// Returns the first station-mode interface in enumeration order. When
/// `name` is given the interface must also carry that name. Having no
/// candidate is an error rather than an empty selection.
pub fn select_station(interfaces: &[Interface], name: Option<&str>) -> ServiceResult<Interface> {
    for iface in interfaces {
        debug!(
            index = iface.index,
            name = %iface.name,
            kind = %iface.interface_type,
            "Found wireless interface"
        );
    }

    interfaces
        .iter()
        .filter(|iface| iface.is_station())
        .find(|iface| name.is_none_or(|wanted| iface.name == wanted))
        .cloned()
        .ok_or_else(|| match name {
            Some(wanted) => ServiceError::NoNamedStationInterface(wanted.to_string()),
            None => ServiceError::NoStationInterface,
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::backend::mock_backend::fixtures::interface;
    use crate::core::types::InterfaceType;

    #[test]
    fn test_selects_first_station() {
        let interfaces = vec![
            interface(2, "mon0", InterfaceType::Monitor),
            interface(3, "wlan0", InterfaceType::Station),
            interface(4, "wlan1", InterfaceType::Station),
        ];

        let selected = select_station(&interfaces, None).unwrap();
        assert_eq!(selected, interfaces[1]);
    }

    #[test]
    fn test_no_station_interface() {
        let interfaces = vec![
            interface(2, "mon0", InterfaceType::Monitor),
            interface(5, "ap0", InterfaceType::Ap),
        ];

        assert!(matches!(
            select_station(&interfaces, None),
            Err(ServiceError::NoStationInterface)
        ));
        assert!(matches!(
            select_station(&[], None),
            Err(ServiceError::NoStationInterface)
        ));
    }

    #[test]
    fn test_selects_by_name() {
        let interfaces = vec![
            interface(3, "wlan0", InterfaceType::Station),
            interface(4, "wlan1", InterfaceType::Station),
        ];

        let selected = select_station(&interfaces, Some("wlan1")).unwrap();
        assert_eq!(selected.index, 4);
    }

    #[test]
    fn test_named_interface_must_be_station() {
        let interfaces = vec![
            interface(3, "wlan0", InterfaceType::Ap),
            interface(4, "wlan1", InterfaceType::Station),
        ];

        let err = select_station(&interfaces, Some("wlan0")).unwrap_err();
        assert_eq!(err.to_string(), "No station interface named \"wlan0\" found");
    }
}
