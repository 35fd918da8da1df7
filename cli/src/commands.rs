pub mod generate;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Flags mirror the prompts. A flag with a malformed value is ignored with a
/// warning and the value is asked for interactively instead.
#[derive(Parser, Debug, Default)]
#[command(name = "kgzcfg")]
#[command(about = "Grandstream zero-config provisioning file generator.")]
#[command(version, disable_version_flag = true)]
pub struct CommandLine {
    /// Print version info
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// IP phone model
    #[arg(short = 'm', value_name = "MODEL")]
    pub model: Option<String>,

    /// UCM IP address
    #[arg(short = 'u', value_name = "IP")]
    pub ucm_ip: Option<String>,

    /// Starting IP address of the phones (static mode)
    #[arg(short = 's', value_name = "IP")]
    pub start_ip: Option<String>,

    /// Subnet mask (static mode)
    #[arg(short = 'n', value_name = "MASK")]
    pub subnet_mask: Option<String>,

    /// Gateway IP address (static mode)
    #[arg(short = 'g', value_name = "IP")]
    pub gateway_ip: Option<String>,

    /// Starting account number
    #[arg(short = 'a', value_name = "ACCOUNT")]
    pub start_account: Option<String>,

    /// DNS IP address (static mode)
    #[arg(short = 'd', value_name = "IP")]
    pub dns_ip: Option<String>,

    /// IP phones network mode (1 = DHCP, 2 = Static)
    #[arg(short = 'i', value_name = "MODE")]
    pub ip_mode: Option<String>,

    /// Site name, skips the site prompt
    #[arg(long, value_name = "NAME")]
    pub site: Option<String>,

    /// Directory holding the kgzcfg/ folder
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Skip the logo and loading animation
    #[arg(long)]
    pub no_banner: bool,

    /// Reduce output (-q hides cosmetics, -qq also hides the assignment list)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cmd = CommandLine::try_parse_from([
            "kgzcfg", "-m", "grp2601p", "-u", "192.168.1.10", "-i", "2", "-s", "10.0.0.5", "-qq",
        ])
        .unwrap();

        assert_eq!(cmd.model.as_deref(), Some("grp2601p"));
        assert_eq!(cmd.ucm_ip.as_deref(), Some("192.168.1.10"));
        assert_eq!(cmd.ip_mode.as_deref(), Some("2"));
        assert_eq!(cmd.start_ip.as_deref(), Some("10.0.0.5"));
        assert_eq!(cmd.quiet, 2);
        assert_eq!(cmd.dir, PathBuf::from("."));
    }

    #[test]
    fn test_version_flag_exits() {
        let err = CommandLine::try_parse_from(["kgzcfg", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
