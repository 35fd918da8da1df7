use std::net::Ipv4Addr;

use kgzcfg_common::model::DeviceModel;
use kgzcfg_common::network::mac::MacAddress;
use kgzcfg_common::network::subnet::SubnetMask;
use kgzcfg_core::batch::{NetworkParams, StaticSettings};

pub fn macs(tokens: &[&str]) -> Vec<MacAddress> {
    tokens.iter().map(|t| MacAddress::parse(t).unwrap()).collect()
}

pub fn model(name: &str) -> DeviceModel {
    DeviceModel::parse(name).unwrap()
}

pub fn dhcp_params(ucm: Ipv4Addr) -> NetworkParams {
    NetworkParams {
        ucm_ip: ucm,
        static_settings: None,
    }
}

pub fn static_params(ucm: Ipv4Addr, mask: &str, gateway: Ipv4Addr, dns: Ipv4Addr) -> NetworkParams {
    NetworkParams {
        ucm_ip: ucm,
        static_settings: Some(StaticSettings {
            subnet_mask: SubnetMask::parse(mask).unwrap(),
            gateway,
            dns,
        }),
    }
}
