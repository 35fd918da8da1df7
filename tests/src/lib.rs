#![cfg(test)]

mod provisioning;
mod util;
