//! # Batch Assignment
//!
//! Pairs every MAC address with an account (and, in static mode, an IP
//! address) by position, then renders one record per phone. The MAC order
//! decides who gets what, so callers must hand the lists in as collected.
//!
//! The batch is all-or-nothing: a length mismatch yields an error and no records.

use std::fmt;
use std::net::Ipv4Addr;

use kgzcfg_common::account::AccountId;
use kgzcfg_common::error::ProvisionError;
use kgzcfg_common::model::DeviceModel;
use kgzcfg_common::network::mac::MacAddress;
use kgzcfg_common::network::mode::NetworkMode;
use kgzcfg_common::network::subnet::SubnetMask;
use tracing::debug;

use crate::record::{self, ProvisioningRecord};

/// Addressing shared by every phone of a static batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticSettings {
    pub subnet_mask: SubnetMask,
    pub gateway: Ipv4Addr,
    pub dns: Ipv4Addr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    pub ucm_ip: Ipv4Addr,
    /// Required in static mode, ignored otherwise.
    pub static_settings: Option<StaticSettings>,
}

/// What one phone received. Doubles as the deployment summary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceAssignment {
    pub mac: MacAddress,
    pub account: AccountId,
    pub ip: Option<Ipv4Addr>,
}

impl DeviceAssignment {
    /// Row of the deployment details file.
    pub fn summary_line(&self) -> String {
        match self.ip {
            Some(ip) => format!("MAC Address,{},IP,{},Account,{}", self.mac, ip, self.account),
            None => format!("MAC Address,{},Account,{}", self.mac, self.account),
        }
    }
}

impl fmt::Display for DeviceAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ip {
            Some(ip) => write!(f, "MAC Address: {} - IP: {} - Account: {}", self.mac, ip, self.account),
            None => write!(f, "MAC Address: {} - Account: {}", self.mac, self.account),
        }
    }
}

/// Every phone needs exactly one account.
pub fn ensure_account_count(macs: &[MacAddress], account_ids: &[AccountId]) -> Result<(), ProvisionError> {
    if macs.len() != account_ids.len() {
        return Err(ProvisionError::CountMismatch {
            macs: macs.len(),
            accounts: account_ids.len(),
        });
    }
    Ok(())
}

/// Renders the whole batch.
///
/// Returns the records in MAC order together with the deployment summary.
pub fn assign_and_render(
    macs: &[MacAddress],
    account_ids: &[AccountId],
    ips: Option<&[Ipv4Addr]>,
    model: DeviceModel,
    mode: NetworkMode,
    params: &NetworkParams,
) -> Result<(Vec<ProvisioningRecord>, Vec<DeviceAssignment>), ProvisionError> {
    ensure_account_count(macs, account_ids)?;

    let assignments: Vec<DeviceAssignment> = match mode {
        NetworkMode::Dhcp => macs
            .iter()
            .zip(account_ids)
            .map(|(mac, account)| DeviceAssignment {
                mac: *mac,
                account: *account,
                ip: None,
            })
            .collect(),
        NetworkMode::Static => {
            let ips: &[Ipv4Addr] = ips.unwrap_or_default();
            if ips.len() != macs.len() {
                return Err(ProvisionError::IpCountMismatch {
                    macs: macs.len(),
                    ips: ips.len(),
                });
            }
            macs.iter()
                .zip(account_ids)
                .zip(ips)
                .map(|((mac, account), ip)| DeviceAssignment {
                    mac: *mac,
                    account: *account,
                    ip: Some(*ip),
                })
                .collect()
        }
    };

    let static_settings: Option<StaticSettings> = match mode {
        NetworkMode::Dhcp => None,
        NetworkMode::Static => Some(
            params
                .static_settings
                .ok_or(ProvisionError::MissingStaticSettings)?,
        ),
    };

    let records: Vec<ProvisioningRecord> = assignments
        .iter()
        .map(|assignment| render(assignment, model, params.ucm_ip, static_settings.as_ref()))
        .collect();

    debug!(devices = records.len(), %mode, "rendered provisioning batch");

    Ok((records, assignments))
}

fn render(
    assignment: &DeviceAssignment,
    model: DeviceModel,
    ucm_ip: Ipv4Addr,
    static_settings: Option<&StaticSettings>,
) -> ProvisioningRecord {
    match (assignment.ip, static_settings) {
        (Some(ip), Some(net)) => record::build_static_record(
            assignment.mac,
            ip,
            assignment.account,
            model,
            net.dns,
            net.subnet_mask,
            net.gateway,
            ucm_ip,
        ),
        _ => record::build_dhcp_record(assignment.mac, assignment.account, model, ucm_ip),
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
