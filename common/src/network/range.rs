//! # Sequential Address Assignment
//!
//! Static-mode phones get consecutive addresses: the first phone takes the
//! start address, each following phone the next last-octet value. The range
//! never carries into the third octet.

use std::net::Ipv4Addr;

use crate::error::ProvisionError;

/// An inclusive run of addresses sharing the first three octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    /// Range of `count` addresses beginning at `start`.
    ///
    /// `None` for an empty range, `OctetOverflow` when the last address
    /// would need a last octet above 255.
    pub fn from_start(start: Ipv4Addr, count: usize) -> Result<Option<Self>, ProvisionError> {
        if count == 0 {
            return Ok(None);
        }

        let [a, b, c, d] = start.octets();
        let last: u8 = u8::try_from(count - 1)
            .ok()
            .and_then(|offset| d.checked_add(offset))
            .ok_or(ProvisionError::OctetOverflow { start, count })?;

        Ok(Some(Self {
            start_addr: start,
            end_addr: Ipv4Addr::new(a, b, c, last),
        }))
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        (start..=end).map(Ipv4Addr::from)
    }
}

/// One address per device, in device order.
pub fn generate_ip_range(start: Ipv4Addr, count: usize) -> Result<Vec<Ipv4Addr>, ProvisionError> {
    let range = Ipv4Range::from_start(start, count)?;
    Ok(range.map(|r| r.iter().collect()).unwrap_or_default())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
