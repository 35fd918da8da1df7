//! # Provisioning Records
//!
//! One record per phone, made of the sections the UCM zero-config import
//! expects. Every section is written as:
//!
//! ```text
//! <title line>
//! <column header>
//! <data rows>
//! <blank line>
//! ```
//!
//! The builders are pure formatters. Inputs arrive already validated and typed,
//! so a record can never hold a truncated or malformed address.

use std::net::Ipv4Addr;

use kgzcfg_common::account::AccountId;
use kgzcfg_common::model::DeviceModel;
use kgzcfg_common::network::mac::MacAddress;
use kgzcfg_common::network::subnet::SubnetMask;

/// Firmware version announced in the `device_start` row.
pub const FIRMWARE_VERSION: &str = "1.0.5.58";
pub const VENDOR: &str = "Grandstream";
pub const SIP_PORT: u16 = 5060;
/// Fixed `last_access` stamp. Rendering never reads the clock.
pub const LAST_ACCESS: &str = "2024-07-27 16:08:27";

/// Address announced for phones that obtain theirs from DHCP.
pub const DHCP_PLACEHOLDER_IP: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    DeviceStart,
    BasicSettings,
    AdvancedSettings,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::DeviceStart => "======== Device Start ========",
            SectionKind::BasicSettings => "######## Basic Settings ########",
            SectionKind::AdvancedSettings => "******** Advanced Settings ********",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            SectionKind::DeviceStart => {
                "mac,model,ip,file_url,version,vendor,url_parameter,config_name,account_secret,state,ad_state,port,hot_desking,last_access"
            }
            SectionKind::BasicSettings => "mac,element,element_number,entity_name,value",
            SectionKind::AdvancedSettings => "mac,field_name,element_number,entity_name,value",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    /// Comma-joined data rows, header excluded.
    pub rows: Vec<String>,
}

impl Section {
    /// Every output line of the section, separator included.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [self.kind.title(), self.kind.header()]
            .into_iter()
            .chain(self.rows.iter().map(String::as_str))
            .chain(std::iter::once(""))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningRecord {
    pub mac: MacAddress,
    pub sections: Vec<Section>,
}

impl ProvisioningRecord {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().flat_map(Section::lines)
    }
}

pub fn build_dhcp_record(
    mac: MacAddress,
    account_id: AccountId,
    model: DeviceModel,
    ucm_ip: Ipv4Addr,
) -> ProvisioningRecord {
    ProvisioningRecord {
        mac,
        sections: vec![
            device_start(mac, model, DHCP_PLACEHOLDER_IP, ucm_ip),
            basic_settings(mac, account_id),
        ],
    }
}

/// Static-address record.
///
/// The gateway also fills the secondary DNS server slot, which is what the
/// provisioning consumer has always received.
#[allow(clippy::too_many_arguments)]
pub fn build_static_record(
    mac: MacAddress,
    ip: Ipv4Addr,
    account_id: AccountId,
    model: DeviceModel,
    dns_ip: Ipv4Addr,
    subnet_mask: SubnetMask,
    gateway_ip: Ipv4Addr,
    ucm_ip: Ipv4Addr,
) -> ProvisioningRecord {
    ProvisioningRecord {
        mac,
        sections: vec![
            device_start(mac, model, ip, ucm_ip),
            basic_settings(mac, account_id),
            advanced_settings(mac, ip, dns_ip, subnet_mask, gateway_ip),
        ],
    }
}

fn device_start(mac: MacAddress, model: DeviceModel, ip: Ipv4Addr, ucm_ip: Ipv4Addr) -> Section {
    let row: String = format!(
        "{mac},{model},{ip},https://{ucm_ip}:8089/zccgi/,{FIRMWARE_VERSION},{VENDOR},,,,8,0,{SIP_PORT},no,{LAST_ACCESS}"
    );
    Section {
        kind: SectionKind::DeviceStart,
        rows: vec![row],
    }
}

fn basic_settings(mac: MacAddress, account_id: AccountId) -> Section {
    Section {
        kind: SectionKind::BasicSettings,
        rows: vec![format!("{mac},Account,1,AccountChoice,{account_id}")],
    }
}

fn advanced_settings(
    mac: MacAddress,
    ip: Ipv4Addr,
    dns_ip: Ipv4Addr,
    subnet_mask: SubnetMask,
    gateway_ip: Ipv4Addr,
) -> Section {
    let setting = |entity: &str, value: &dyn std::fmt::Display| {
        format!("{mac},IPAddressMode,1,{entity},{value}")
    };

    let mut rows: Vec<String> = vec![setting("AddressMode", &1), setting("DNSAddressType", &0)];

    let expanded: [(&str, [u8; 4]); 5] = [
        ("DNSServer1", dns_ip.octets()),
        ("DNSServer2", gateway_ip.octets()),
        ("Gateway", gateway_ip.octets()),
        ("StaticIP", ip.octets()),
        ("SubnetMask", subnet_mask.octets()),
    ];
    for (entity, octets) in expanded {
        for (idx, octet) in octets.iter().enumerate() {
            rows.push(setting(&format!("{entity}_{}", idx + 1), octet));
        }
    }

    Section {
        kind: SectionKind::AdvancedSettings,
        rows,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn mac() -> MacAddress {
        MacAddress::parse("AABBCCDDEEFF").unwrap()
    }

    fn model() -> DeviceModel {
        DeviceModel::parse("GRP2601P").unwrap()
    }

    fn static_record() -> ProvisioningRecord {
        build_static_record(
            mac(),
            Ipv4Addr::new(192, 168, 1, 20),
            AccountId::new(2000),
            model(),
            Ipv4Addr::new(8, 8, 8, 8),
            SubnetMask::parse("255.255.255.0").unwrap(),
            Ipv4Addr::new(192, 168, 1, 1),
            Ipv4Addr::new(192, 168, 1, 10),
        )
    }

    #[test]
    fn test_dhcp_record_sections() {
        let record = build_dhcp_record(
            mac(),
            AccountId::new(2000),
            model(),
            Ipv4Addr::new(192, 168, 1, 10),
        );

        assert_eq!(record.sections.len(), 2);
        assert!(record.section(SectionKind::AdvancedSettings).is_none());

        let device = record.section(SectionKind::DeviceStart).unwrap();
        assert_eq!(
            device.rows,
            vec![
                "AABBCCDDEEFF,GRP2601P,0.0.0.0,https://192.168.1.10:8089/zccgi/,1.0.5.58,Grandstream,,,,8,0,5060,no,2024-07-27 16:08:27"
            ]
        );

        let basic = record.section(SectionKind::BasicSettings).unwrap();
        assert_eq!(basic.rows, vec!["AABBCCDDEEFF,Account,1,AccountChoice,2000"]);
    }

    #[test]
    fn test_dhcp_record_text_layout() {
        let record = build_dhcp_record(
            mac(),
            AccountId::new(2000),
            model(),
            Ipv4Addr::new(192, 168, 1, 10),
        );
        let lines: Vec<&str> = record.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "======== Device Start ========");
        assert_eq!(lines[1], SectionKind::DeviceStart.header());
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "######## Basic Settings ########");
        assert_eq!(lines[5], "mac,element,element_number,entity_name,value");
        assert_eq!(lines[7], "");
    }

    #[test]
    fn test_static_record_advanced_rows() {
        let record = static_record();
        assert_eq!(record.sections.len(), 3);

        let device = record.section(SectionKind::DeviceStart).unwrap();
        assert!(device.rows[0].starts_with("AABBCCDDEEFF,GRP2601P,192.168.1.20,"));

        let advanced = record.section(SectionKind::AdvancedSettings).unwrap();
        assert_eq!(advanced.rows.len(), 22);
        assert_eq!(advanced.rows[0], "AABBCCDDEEFF,IPAddressMode,1,AddressMode,1");
        assert_eq!(advanced.rows[1], "AABBCCDDEEFF,IPAddressMode,1,DNSAddressType,0");
        assert_eq!(advanced.rows[2], "AABBCCDDEEFF,IPAddressMode,1,DNSServer1_1,8");
        assert_eq!(advanced.rows[6], "AABBCCDDEEFF,IPAddressMode,1,DNSServer2_1,192");
        assert_eq!(advanced.rows[9], "AABBCCDDEEFF,IPAddressMode,1,DNSServer2_4,1");
        assert_eq!(advanced.rows[13], "AABBCCDDEEFF,IPAddressMode,1,Gateway_4,1");
        assert_eq!(advanced.rows[17], "AABBCCDDEEFF,IPAddressMode,1,StaticIP_4,20");
        assert_eq!(advanced.rows[21], "AABBCCDDEEFF,IPAddressMode,1,SubnetMask_4,0");
        assert_eq!(
            advanced.lines().next(),
            Some("******** Advanced Settings ********")
        );
    }

    #[test]
    fn test_static_record_is_idempotent() {
        assert_eq!(static_record(), static_record());
        let first: Vec<String> = static_record().lines().map(str::to_string).collect();
        let second: Vec<String> = static_record().lines().map(str::to_string).collect();
        assert_eq!(first, second);
    }
}
