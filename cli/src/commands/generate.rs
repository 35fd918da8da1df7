use std::io::{BufRead, Write};
use std::net::Ipv4Addr;
use std::path::Path;

use anyhow::Context;
use colored::*;
use tracing::{info, warn};

use crate::commands::CommandLine;
use crate::kprint;
use crate::terminal::colors;
use crate::terminal::print;
use crate::terminal::prompt::Prompt;
use kgzcfg_common::account::{self, AccountId};
use kgzcfg_common::config::Config;
use kgzcfg_common::model::{DEFAULT_MODEL, DeviceModel};
use kgzcfg_common::network::ip::{self, parse_ipv4};
use kgzcfg_common::network::mac::{self, MacAddress};
use kgzcfg_common::network::mode::NetworkMode;
use kgzcfg_common::network::range;
use kgzcfg_common::network::subnet::SubnetMask;
use kgzcfg_common::success;
use kgzcfg_core::batch::{self, DeviceAssignment, NetworkParams, StaticSettings};
use kgzcfg_core::error::SourceError;
use kgzcfg_core::export;
use kgzcfg_core::sources;
use kgzcfg_core::workspace::{self, Workspace};

const DEFAULT_SUBNET_MASK: &str = "255.255.255.0";
const DEFAULT_DNS: &str = "8.8.8.8";

/// Values taken from the command line. Anything missing or malformed is asked for.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Presets {
    pub site: Option<String>,
    pub model: Option<DeviceModel>,
    pub ucm_ip: Option<Ipv4Addr>,
    pub start_ip: Option<Ipv4Addr>,
    pub subnet_mask: Option<SubnetMask>,
    pub gateway_ip: Option<Ipv4Addr>,
    pub dns_ip: Option<Ipv4Addr>,
    pub start_account: Option<AccountId>,
    pub mode: Option<NetworkMode>,
}

impl Presets {
    pub fn from_flags(cmd: &CommandLine) -> Self {
        Self {
            site: cmd
                .site
                .as_deref()
                .filter(|site| workspace::is_valid_site_name(site))
                .map(|site| site.trim().to_string()),
            model: preset("-m", cmd.model.as_deref(), |s| DeviceModel::parse(s).ok()),
            ucm_ip: preset("-u", cmd.ucm_ip.as_deref(), |s| ip::parse_host(s).ok()),
            start_ip: preset("-s", cmd.start_ip.as_deref(), |s| ip::parse_host(s).ok()),
            subnet_mask: preset("-n", cmd.subnet_mask.as_deref(), |s| SubnetMask::parse(s).ok()),
            gateway_ip: preset("-g", cmd.gateway_ip.as_deref(), |s| ip::parse_host(s).ok()),
            dns_ip: preset("-d", cmd.dns_ip.as_deref(), |s| ip::parse_host(s).ok()),
            start_account: preset("-a", cmd.start_account.as_deref(), |s| AccountId::parse(s).ok()),
            mode: preset("-i", cmd.ip_mode.as_deref(), |s| s.parse::<NetworkMode>().ok()),
        }
    }
}

fn preset<T>(flag: &str, raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw: &str = raw?;
    let parsed: Option<T> = parse(raw);
    if parsed.is_none() {
        warn!("Ignoring {flag} '{raw}': not a valid value");
    }
    parsed
}

/// Runs the interactive generator on stdin/stdout.
pub fn generate(cmd: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let presets: Presets = Presets::from_flags(cmd);
    let mut prompt = Prompt::stdio();
    run(&mut prompt, presets, cfg)
}

pub fn run<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    presets: Presets,
    cfg: &Config,
) -> anyhow::Result<()> {
    let workspace: Workspace = match presets.site.as_deref() {
        Some(site) => Workspace::new(&cfg.base_dir, site)?,
        None => prompt.ask_until("Enter Site Name", None, |s| {
            Workspace::new(&cfg.base_dir, s).map_err(|e| e.to_string())
        })?,
    };
    workspace.prepare()?;

    let macs: Vec<MacAddress> = collect_macs(prompt, &workspace.mac_path)?;

    let ucm_ip: Ipv4Addr = match presets.ucm_ip {
        Some(ip) => ip,
        None => prompt.ask_until("Enter the UCM IP address", None, host_ip)?,
    };

    let model: DeviceModel = match presets.model {
        Some(model) => model,
        None => prompt.ask_until("Enter the Model", Some(DEFAULT_MODEL), |s| {
            DeviceModel::parse(s).map_err(|e| e.to_string())
        })?,
    };

    let accounts: Vec<AccountId> =
        collect_accounts(prompt, &workspace.account_path, presets.start_account, macs.len())?;
    batch::ensure_account_count(&macs, &accounts)?;

    let mode: NetworkMode = match presets.mode {
        Some(mode) => mode,
        None => prompt.ask_until("Enter IP Phone network mode (1. DHCP 2. Static)", None, |s| {
            s.parse::<NetworkMode>().map_err(|e| e.to_string())
        })?,
    };

    let (ips, static_settings) = match mode {
        NetworkMode::Dhcp => (None, None),
        NetworkMode::Static => {
            let (start_ip, settings) = collect_static_settings(prompt, &presets)?;
            let ips: Vec<Ipv4Addr> = range::generate_ip_range(start_ip, macs.len())?;
            (Some(ips), Some(settings))
        }
    };

    let params = NetworkParams {
        ucm_ip,
        static_settings,
    };
    let (records, assignments) =
        batch::assign_and_render(&macs, &accounts, ips.as_deref(), model, mode, &params)?;

    export::append_records(&workspace.export_path, &records)
        .context("could not write the zero-config export")?;
    export::append_deployment(&workspace.deployment_path, &assignments)
        .context("could not write the deployment details")?;

    print_assignments(&assignments, mode, cfg);
    print_summary(&workspace, model, mode, ucm_ip, cfg);
    success!(
        "Provisioned {} {} for site '{}' ({mode}, {model})",
        assignments.len(),
        if assignments.len() == 1 { "phone" } else { "phones" },
        workspace.site
    );
    Ok(())
}

/// MAC addresses from the list file, or from the operator when the file is
/// missing, unreadable, or holds no valid address.
fn collect_macs<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    mac_path: &Path,
) -> anyhow::Result<Vec<MacAddress>> {
    match sources::read_mac_list(mac_path) {
        Ok(tokens) => {
            info!("MAC addresses read from {}", mac_path.display());
            let (valid, invalid) = mac::normalize_and_classify(&tokens);
            report_macs(&valid, &invalid);
            if !valid.is_empty() {
                return Ok(valid);
            }
            warn!("No valid MAC addresses found in the file");
        }
        Err(err @ SourceError::FileAbsent { .. }) => info!("{err}, asking for MAC addresses"),
        Err(err @ SourceError::FileUnreadable { .. }) => warn!("{err}, asking for MAC addresses"),
    }

    prompt.ask_until("Enter the MAC addresses (comma-separated)", None, |s| {
        let (valid, invalid) = mac::normalize_and_classify(s.split(','));
        report_macs(&valid, &invalid);
        if valid.is_empty() {
            Err("No valid MAC addresses found. Please try again.".to_string())
        } else {
            Ok(valid)
        }
    })
}

fn report_macs(valid: &[MacAddress], invalid: &[String]) {
    if !valid.is_empty() {
        print::print_status("Valid MAC addresses:");
        for (idx, mac) in valid.iter().enumerate() {
            print::list_item(idx + 1, mac.to_string().color(colors::MAC_ADDR));
        }
    }
    if !invalid.is_empty() {
        print::print_status("Invalid MAC addresses:");
        for (idx, raw) in invalid.iter().enumerate() {
            print::list_item(idx + 1, raw.as_str().color(colors::INVALID));
        }
    }
}

/// Accounts from the list file, or a generated run from a start number.
fn collect_accounts<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    account_path: &Path,
    start_account: Option<AccountId>,
    count: usize,
) -> anyhow::Result<Vec<AccountId>> {
    match sources::read_account_list(account_path) {
        Ok(list) => {
            info!(
                "{} accounts read from {}",
                list.accounts.len(),
                account_path.display()
            );
            for skipped in &list.skipped {
                warn!("Skipping '{skipped}' in {}: not an account number", account_path.display());
            }
            return Ok(list.accounts);
        }
        Err(err @ SourceError::FileAbsent { .. }) => info!("{err}, generating accounts"),
        Err(err @ SourceError::FileUnreadable { .. }) => warn!("{err}, generating accounts"),
    }

    let start: AccountId = match start_account {
        Some(start) => start,
        None => prompt.ask_until("Enter the starting Account number", None, |s| {
            AccountId::parse(s).map_err(|e| e.to_string())
        })?,
    };
    Ok(account::generate_account_ids(start, count)?)
}

fn collect_static_settings<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    presets: &Presets,
) -> anyhow::Result<(Ipv4Addr, StaticSettings)> {
    let start_ip: Ipv4Addr = match presets.start_ip {
        Some(ip) => ip,
        None => prompt.ask_until("Enter the IP Phone starting IP address", None, host_ip)?,
    };

    let subnet_mask: SubnetMask = match presets.subnet_mask {
        Some(mask) => mask,
        None => prompt.ask_until("Enter the Subnet Mask", Some(DEFAULT_SUBNET_MASK), |s| {
            SubnetMask::parse(s)
                .map_err(|_| "Invalid subnet mask. Please enter a valid subnet mask.".to_string())
        })?,
    };

    let gateway: Ipv4Addr = match presets.gateway_ip {
        Some(ip) => ip,
        None => {
            let default_gateway: String = ip::default_gateway(start_ip).to_string();
            prompt.ask_until("Enter the Gateway IP address", Some(&default_gateway), host_ip)?
        }
    };

    let dns: Ipv4Addr = match presets.dns_ip {
        Some(ip) => ip,
        None => prompt.ask_until("Enter the DNS IP address", Some(DEFAULT_DNS), host_ip)?,
    };

    Ok((
        start_ip,
        StaticSettings {
            subnet_mask,
            gateway,
            dns,
        },
    ))
}

fn host_ip(s: &str) -> Result<Ipv4Addr, String> {
    match parse_ipv4(s) {
        None => Err("Invalid IP address. Please enter a valid IPv4 address.".to_string()),
        Some(_) if !ip::is_host_address(s) => {
            Err("Entered value is a subnet mask, not an IP address.".to_string())
        }
        Some(ip) => Ok(ip),
    }
}

fn print_assignments(assignments: &[DeviceAssignment], mode: NetworkMode, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    kprint!();
    match mode {
        NetworkMode::Dhcp => print::header("assigned MAC address to accounts", 0),
        NetworkMode::Static => print::header("assigned IPs and accounts", 0),
    }

    for assignment in assignments {
        let mut line: String = format!(
            "{} {}",
            "MAC".color(colors::SEPARATOR),
            assignment.mac.to_string().color(colors::MAC_ADDR)
        );
        if let Some(ip) = assignment.ip {
            line.push_str(&format!(
                " {} {}",
                "IP".color(colors::SEPARATOR),
                ip.to_string().color(colors::IPV4_ADDR)
            ));
        }
        line.push_str(&format!(
            " {} {}",
            "Account".color(colors::SEPARATOR),
            assignment.account.to_string().color(colors::ACCOUNT)
        ));
        print::print_status(line);
    }
    print::fat_separator();
}

fn print_summary(
    workspace: &Workspace,
    model: DeviceModel,
    mode: NetworkMode,
    ucm_ip: Ipv4Addr,
    cfg: &Config,
) {
    if cfg.quiet > 0 {
        return;
    }

    let key_width: usize = 10;
    print::aligned_line("Site", workspace.site.as_str(), key_width);
    print::aligned_line("Model", model.name(), key_width);
    print::aligned_line("Mode", mode.to_string(), key_width);
    print::aligned_line("UCM", ucm_ip.to_string().color(colors::IPV4_ADDR), key_width);
    print::aligned_line("Export", workspace.export_path.display().to_string(), key_width);
    print::aligned_line("Details", workspace.deployment_path.display().to_string(), key_width);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
