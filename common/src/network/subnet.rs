//! # Subnet Mask
//!
//! Accepts the three notations operators use for a mask:
//! * prefix length (`24`),
//! * dotted netmask (`255.255.255.0`),
//! * dotted hostmask (`0.0.0.255`).
//!
//! Every notation resolves to a prefix length; a zero-length prefix is rejected.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::{self, Ipv4Network};

use crate::error::ParseError;
use crate::network::ip;

/// A subnet mask with a prefix length in `1..=32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetMask {
    network: Ipv4Network,
}

impl SubnetMask {
    pub fn from_prefix(prefix: u8) -> Option<Self> {
        if prefix == 0 {
            return None;
        }
        Ipv4Network::new(Ipv4Addr::UNSPECIFIED, prefix)
            .ok()
            .map(|network| Self { network })
    }

    /// Dotted netmask form, e.g. `255.255.255.0` for `/24`.
    pub fn netmask(&self) -> Ipv4Addr {
        self.network.mask()
    }

    pub fn octets(&self) -> [u8; 4] {
        self.netmask().octets()
    }

    pub fn parse(s: &str) -> Result<Self, ParseError> {
        resolve_prefix(s)
            .and_then(Self::from_prefix)
            .ok_or_else(|| ParseError::InvalidSubnetMask(s.to_string()))
    }
}

impl Default for SubnetMask {
    fn default() -> Self {
        Self {
            network: Ipv4Network::new(Ipv4Addr::UNSPECIFIED, 24).expect("24 is a valid prefix"),
        }
    }
}

impl FromStr for SubnetMask {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.netmask())
    }
}

pub fn is_valid_subnet_mask(s: &str) -> bool {
    SubnetMask::parse(s).is_ok()
}

/// Resolves any supported notation to a prefix length, `/0` included.
fn resolve_prefix(s: &str) -> Option<u8> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<u8>().ok().filter(|prefix| *prefix <= 32);
    }

    let mask = ip::parse_ipv4(s)?;
    ipnetwork::ipv4_mask_to_prefix(mask)
        .or_else(|_| ipnetwork::ipv4_mask_to_prefix(!mask))
        .ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
