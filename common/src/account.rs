//! # SIP Account Numbers
//!
//! Each phone registers against one account (extension) on the UCM. Accounts
//! come either from a list file or from a start number counted upwards.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ProvisionError};

/// An account number of at least two digits.
///
/// Keeps the width it was written with, so `0100` stays `0100` in the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId {
    value: u64,
    width: usize,
}

impl AccountId {
    pub fn new(value: u64) -> Self {
        Self {
            value,
            width: value.to_string().len(),
        }
    }

    pub fn parse(s: &str) -> Result<Self, ParseError> {
        if !is_numeric_id(s) {
            return Err(ParseError::InvalidAccount(s.to_string()));
        }
        s.parse::<u64>()
            .map(|value| Self { value, width: s.len() })
            .map_err(|_| ParseError::InvalidAccount(s.to_string()))
    }
}

impl FromStr for AccountId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = self.width)
    }
}

/// All ASCII digits, at least two of them.
pub fn is_numeric_id(s: &str) -> bool {
    s.len() >= 2 && s.bytes().all(|b| b.is_ascii_digit())
}

/// `count` consecutive accounts beginning at `start`, zero-padded to its width.
pub fn generate_account_ids(start: AccountId, count: usize) -> Result<Vec<AccountId>, ProvisionError> {
    (0..count)
        .map(|i| {
            u64::try_from(i)
                .ok()
                .and_then(|offset| start.value.checked_add(offset))
                .map(|value| AccountId {
                    value,
                    width: start.width,
                })
                .ok_or(ProvisionError::AccountOverflow {
                    start: start.value,
                    count,
                })
        })
        .collect()
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
    fn test_numeric_id_syntax() {
        assert!(is_numeric_id("10"));
        assert!(is_numeric_id("2000"));
        assert!(is_numeric_id("0042"));
        assert!(!is_numeric_id("7"));
        assert!(!is_numeric_id(""));
        assert!(!is_numeric_id("12a"));
        assert!(!is_numeric_id("-12"));
        assert!(!is_numeric_id(" 12"));
    }

    #[test]
    fn test_parse_rejects_overflowing_text() {
        assert_eq!(AccountId::parse("2000"), Ok(AccountId::new(2000)));
        assert!(AccountId::parse("99999999999999999999999").is_err());
    }

    #[test]
    fn test_parse_keeps_leading_zeros() {
        let account = AccountId::parse("0100").unwrap();
        assert_eq!(account.to_string(), "0100");
        assert_ne!(account, AccountId::new(100));
        assert_eq!(AccountId::new(100).to_string(), "100");
    }

    #[test]
    fn test_generate_account_ids() {
        let ids = generate_account_ids(AccountId::new(1000), 4).unwrap();
        let values: Vec<String> = ids.iter().map(AccountId::to_string).collect();
        assert_eq!(values, vec!["1000", "1001", "1002", "1003"]);
    }

    #[test]
    fn test_generate_keeps_start_width() {
        let ids = generate_account_ids(AccountId::parse("0098").unwrap(), 3).unwrap();
        let values: Vec<String> = ids.iter().map(AccountId::to_string).collect();
        assert_eq!(values, vec!["0098", "0099", "0100"]);
    }

    #[test]
    fn test_generate_empty_and_overflow() {
        assert!(generate_account_ids(AccountId::new(1000), 0).unwrap().is_empty());
        assert_eq!(
            generate_account_ids(AccountId::new(u64::MAX), 2),
            Err(ProvisionError::AccountOverflow { start: u64::MAX, count: 2 })
        );
    }
}
