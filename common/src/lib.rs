//! # kgzcfg common
//!
//! Value types and validators shared by the provisioning engine and the CLI.
//!
//! * **[`network`]**: IPv4 addresses, subnet masks, MAC addresses, address ranges.
//! * **[`account`]**: SIP account numbers.
//! * **[`model`]**: the supported phone model catalog.
//! * **[`config`]**: runtime options collected from the command line.
//! * **[`error`]**: typed errors of the validation and assignment layer.

pub mod account;
pub mod config;
pub mod error;
pub mod model;
pub mod network;

pub use tracing;

/// Logs a completed step. Rendered with a distinct symbol by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "kgzcfg::success", $($arg)*)
    };
}
