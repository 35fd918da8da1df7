//! # Supported Phone Models
//!
//! The zero-config export is only accepted for models the UCM knows how to
//! provision. Names compare case-insensitively and are stored uppercase.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Model names accepted by the provisioning server.
pub const SUPPORTED_MODELS: &[&str] = &[
    "GHP610", "GHP610W", "GHP611", "GHP611W", "GHP620", "GHP620W", "GHP621", "GHP621W",
    "GHP630", "GHP630W", "GHP631", "GHP631W",
    "GRP2601", "GRP2601P", "GRP2601W", "GRP2602", "GRP2602G", "GRP2602P", "GRP2602W",
    "GRP2603", "GRP2603P", "GRP2604", "GRP2604P", "GRP2612", "GRP2612G", "GRP2612P",
    "GRP2612W", "GRP2613", "GRP2614", "GRP2615", "GRP2616", "GRP2624", "GRP2634", "GRP2636",
    "GRP2650", "GRP2670",
    "GSC3505", "GSC3506", "GSC3510", "GSC3516", "GSC3570", "GSC3574", "GSC3575", "GSC3610",
    "GSC3615", "GSC3620",
    "GXP1100", "GXP1105", "GXP1600C", "GXP1610C", "GXP1610P", "GXP1615", "GXP1628B",
    "GXP1760", "GXP1760W", "GXP1780", "GXP1782", "GXP2130", "GXP2135", "GXP2136", "GXP2140",
    "GXP2160", "GXP2170",
    "GXV3240", "GXV3275", "GXV3350", "GXV3370", "GXV3380", "GXV3450", "GXV3470", "GXV3480",
    "GXV3500",
    "WP800", "WP810", "WP816", "WP820", "WP822", "WP825", "WP826", "WP856",
];

/// Offered at the model prompt when the operator just hits enter.
pub const DEFAULT_MODEL: &str = "GRP2601P";

/// A catalog entry, always in canonical (uppercase) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceModel(&'static str);

impl DeviceModel {
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        SUPPORTED_MODELS
            .iter()
            .find(|model| model.eq_ignore_ascii_case(s))
            .map(|model| Self(*model))
            .ok_or_else(|| ParseError::UnsupportedModel(s.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl Default for DeviceModel {
    fn default() -> Self {
        Self(DEFAULT_MODEL)
    }
}

impl FromStr for DeviceModel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub fn is_supported_model(s: &str) -> bool {
    DeviceModel::parse(s).is_ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
