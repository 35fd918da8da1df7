use std::net::Ipv4Addr;

use thiserror::Error;

/// Errors raised while expanding and assigning a provisioning batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProvisionError {
    #[error("{count} addresses starting at {start} run past the last octet (255)")]
    OctetOverflow { start: Ipv4Addr, count: usize },

    #[error("{count} account numbers starting at {start} overflow the account range")]
    AccountOverflow { start: u64, count: usize },

    #[error(
        "number of MAC addresses and account numbers does not match (MAC addresses: {macs}, accounts: {accounts})"
    )]
    CountMismatch { macs: usize, accounts: usize },

    #[error(
        "number of MAC addresses and IP addresses does not match (MAC addresses: {macs}, IP addresses: {ips})"
    )]
    IpCountMismatch { macs: usize, ips: usize },

    #[error("static mode requires subnet mask, gateway and DNS settings")]
    MissingStaticSettings,
}

/// Rejected operator input. Carries the offending text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid IPv4 address: '{0}'")]
    InvalidIp(String),

    #[error("invalid subnet mask: '{0}'")]
    InvalidSubnetMask(String),

    #[error("invalid MAC address: '{0}'")]
    InvalidMac(String),

    #[error("invalid account number: '{0}' (at least two digits)")]
    InvalidAccount(String),

    #[error("unsupported phone model: '{0}'")]
    UnsupportedModel(String),

    #[error("invalid network mode: '{0}' (1 = DHCP, 2 = Static)")]
    InvalidMode(String),
}
