use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// How the phones obtain their address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkMode {
    /// The phone asks DHCP; only the account mapping is provisioned.
    Dhcp,
    /// IP, mask, gateway and DNS are written into the provisioning record.
    Static,
}

impl FromStr for NetworkMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "dhcp" => Ok(NetworkMode::Dhcp),
            "2" | "static" => Ok(NetworkMode::Static),
            _ => Err(ParseError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkMode::Dhcp => write!(f, "DHCP"),
            NetworkMode::Static => write!(f, "Static"),
        }
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

    #[test]
    fn test_mode_codes() {
        assert_eq!("1".parse::<NetworkMode>(), Ok(NetworkMode::Dhcp));
        assert_eq!("2".parse::<NetworkMode>(), Ok(NetworkMode::Static));
        assert_eq!("Static".parse::<NetworkMode>(), Ok(NetworkMode::Static));
        assert!("3".parse::<NetworkMode>().is_err());
        assert!("".parse::<NetworkMode>().is_err());
    }
}
