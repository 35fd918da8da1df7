//! # kgzcfg core
//!
//! Turns validated operator input into zero-config provisioning records.
//!
//! * **[`record`]**: renders the CSV sections for one phone.
//! * **[`batch`]**: pairs MACs with accounts and addresses, renders the whole batch.
//! * **[`export`]**: CSV encoding and appending to the site files.
//! * **[`sources`]**: optional MAC and account list files.
//! * **[`workspace`]**: the on-disk layout of a site.

pub mod batch;
pub mod error;
pub mod export;
pub mod record;
pub mod sources;
pub mod workspace;
