//! # IPv4 Input
//!
//! Dotted-quad parsing that accepts exactly what the provisioning server
//! accepts: four groups of one to three decimal digits, each at most 255.
//! Leading zeros are tolerated (`010` is octet 10), surrounding whitespace is not.

use std::net::Ipv4Addr;

use crate::error::ParseError;
use crate::network::subnet;

/// Parses a strict dotted-quad string.
pub fn parse_ipv4(s: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut groups = s.split('.');

    for octet in octets.iter_mut() {
        *octet = parse_octet(groups.next()?)?;
    }

    if groups.next().is_some() {
        return None;
    }

    Some(Ipv4Addr::from(octets))
}

fn parse_octet(group: &str) -> Option<u8> {
    if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    group.parse::<u8>().ok()
}

pub fn is_valid_ip(s: &str) -> bool {
    parse_ipv4(s).is_some()
}

/// A valid dotted quad that does not also read as a subnet mask.
///
/// Prompts for the UCM, start, gateway and DNS addresses use this to catch a
/// mask typed into the wrong field.
pub fn is_host_address(s: &str) -> bool {
    is_valid_ip(s) && !subnet::is_valid_subnet_mask(s)
}

/// Parses a host address, see [`is_host_address`].
pub fn parse_host(s: &str) -> Result<Ipv4Addr, ParseError> {
    match parse_ipv4(s) {
        Some(ip) if !subnet::is_valid_subnet_mask(s) => Ok(ip),
        _ => Err(ParseError::InvalidIp(s.to_string())),
    }
}

/// Default gateway offered for a static range: the start address with `.1` as last octet.
pub fn default_gateway(start: Ipv4Addr) -> Ipv4Addr {
    let [a, b, c, _] = start.octets();
    Ipv4Addr::new(a, b, c, 1)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
