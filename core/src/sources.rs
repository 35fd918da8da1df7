//! # List Files
//!
//! Optional operator-maintained inputs:
//! * `mac.txt`: MAC addresses in free text, any number per line,
//! * `account.txt`: one account number per line.
//!
//! Blank lines and `#` comments are ignored in both. A missing or unreadable
//! file is reported as a typed [`SourceError`] so the caller can fall back to
//! asking the operator.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use kgzcfg_common::account::AccountId;
use kgzcfg_common::network::mac;
use tracing::debug;

use crate::error::SourceError;

/// Accounts read from a list file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountList {
    pub accounts: Vec<AccountId>,
    /// Lines that were not account numbers.
    pub skipped: Vec<String>,
}

/// Reads the raw MAC tokens of a list file, unvalidated.
///
/// Each MAC-shaped run of a line is a token. A line without one is kept
/// whole so it shows up among the rejected input.
pub fn read_mac_list(path: &Path) -> Result<Vec<String>, SourceError> {
    let content: String = read(path)?;
    let mut tokens: Vec<String> = Vec::new();

    for entry in entries(&content) {
        let candidates: Vec<&str> = mac::extract_candidates(entry);
        if candidates.is_empty() {
            tokens.push(entry.to_string());
        } else {
            tokens.extend(candidates.into_iter().map(str::to_string));
        }
    }

    debug!(path = %path.display(), tokens = tokens.len(), "read MAC list");
    Ok(tokens)
}

pub fn read_account_list(path: &Path) -> Result<AccountList, SourceError> {
    let content: String = read(path)?;
    let mut list = AccountList::default();

    for entry in entries(&content) {
        match AccountId::parse(entry) {
            Ok(account) => list.accounts.push(account),
            Err(_) => list.skipped.push(entry.to_string()),
        }
    }

    debug!(
        path = %path.display(),
        accounts = list.accounts.len(),
        skipped = list.skipped.len(),
        "read account list"
    );
    Ok(list)
}

fn read(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SourceError::FileAbsent {
            path: path.to_path_buf(),
        },
        _ => SourceError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Trimmed non-empty lines with trailing `#` comments removed.
fn entries(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .filter_map(|line| line.split('#').next())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
