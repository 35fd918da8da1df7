//! # Network Values
//!
//! Parsing and validation of the addresses an operator types in.
//!
//! * [`ip`]: strict dotted-quad IPv4 parsing.
//! * [`subnet::SubnetMask`]: netmask, hostmask or prefix-length notation.
//! * [`mac::MacAddress`]: normalized 12-digit hardware addresses.
//! * [`range`]: sequential address assignment.
//! * [`mode::NetworkMode`]: DHCP or static addressing for the phones.

pub mod ip;
pub mod mac;
pub mod mode;
pub mod range;
pub mod subnet;
