//! # MAC Address Model
//!
//! Phones are keyed by their hardware address in the provisioning export.
//! Operators paste addresses in any common notation (`00:0b:82:aa:bb:cc`,
//! `00-0B-82-AA-BB-CC`, `000B82AABBCC`); the export wants 12 uppercase hex
//! digits without separators.
//!
//! List files are free text: every MAC-shaped run of a line is a candidate,
//! so inventory pastes like `Phone 1: 00:0B:82:11:22:33` work as-is.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use pnet::util::MacAddr;
use regex::Regex;

use crate::error::ParseError;

/// Six hex pairs, optionally separated by `:` or `-`.
static MAC_CANDIDATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9A-Fa-f]{2}(?:[:\-]?[0-9A-Fa-f]{2}){5}").expect("Invalid MAC candidate regex")
});

/// A validated hardware address. Renders as 12 uppercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress(MacAddr);

impl MacAddress {
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let cleaned: String = normalize(s);
        if !is_well_formed(&cleaned) {
            return Err(ParseError::InvalidMac(s.to_string()));
        }

        let mut bytes = [0u8; 6];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&cleaned[i * 2..i * 2 + 2], 16)
                .map_err(|_| ParseError::InvalidMac(s.to_string()))?;
        }
        let [a, b, c, d, e, f] = bytes;

        Ok(Self(MacAddr::new(a, b, c, d, e, f)))
    }

    pub fn octets(&self) -> [u8; 6] {
        let MacAddr(a, b, c, d, e, f) = self.0;
        [a, b, c, d, e, f]
    }
}

impl FromStr for MacAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.octets() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

/// Strips `:` and `-` separators and uppercases.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != ':' && *c != '-')
        .collect::<String>()
        .to_uppercase()
}

/// 12 hex digits with more than one distinct character.
///
/// Addresses like `000000000000` or `FFFFFFFFFFFF` are placeholders, never a real phone.
fn is_well_formed(cleaned: &str) -> bool {
    if cleaned.len() != 12 || !cleaned.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    let first = cleaned.as_bytes()[0];
    cleaned.bytes().any(|b| b != first)
}

pub fn is_valid_mac(s: &str) -> bool {
    is_well_formed(&normalize(s))
}

/// MAC-shaped substrings of `line`, left to right.
pub fn extract_candidates(line: &str) -> Vec<&str> {
    MAC_CANDIDATE_REGEX
        .find_iter(line)
        .map(|found| found.as_str())
        .collect()
}

/// Splits candidate tokens into valid addresses and rejected input.
///
/// Tokens are trimmed and blank tokens skipped. Both buckets keep input order;
/// the valid order is the order accounts and IPs get assigned in.
pub fn normalize_and_classify<I, S>(tokens: I) -> (Vec<MacAddress>, Vec<String>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut valid: Vec<MacAddress> = Vec::new();
    let mut invalid: Vec<String> = Vec::new();

    for token in tokens {
        let token: &str = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        match MacAddress::parse(token) {
            Ok(mac) => valid.push(mac),
            Err(_) => invalid.push(token.to_string()),
        }
    }

    (valid, invalid)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
