//! # Site Workspace
//!
//! On-disk layout, relative to the base directory:
//!
//! ```text
//! kgzcfg/
//! ├── mac.txt                          (optional input)
//! ├── account.txt                      (optional input)
//! └── <site>/
//!     ├── kgzcfg_export_zc_devices.csv (appended)
//!     └── deployment-details.csv       (appended)
//! ```

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::WorkspaceError;

pub const TOOL_DIR: &str = "kgzcfg";
pub const EXPORT_FILE: &str = "kgzcfg_export_zc_devices.csv";
pub const DEPLOYMENT_FILE: &str = "deployment-details.csv";
pub const MAC_FILE: &str = "mac.txt";
pub const ACCOUNT_FILE: &str = "account.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub site: String,
    pub site_dir: PathBuf,
    pub export_path: PathBuf,
    pub deployment_path: PathBuf,
    pub mac_path: PathBuf,
    pub account_path: PathBuf,
}

impl Workspace {
    /// Resolves the paths of `site` below `base_dir`. Touches nothing on disk.
    pub fn new(base_dir: &Path, site: &str) -> Result<Self, WorkspaceError> {
        let site: &str = site.trim();
        if !is_valid_site_name(site) {
            return Err(WorkspaceError::InvalidSiteName(site.to_string()));
        }

        let tool_dir: PathBuf = base_dir.join(TOOL_DIR);
        let site_dir: PathBuf = tool_dir.join(site);

        Ok(Self {
            site: site.to_string(),
            export_path: site_dir.join(EXPORT_FILE),
            deployment_path: site_dir.join(DEPLOYMENT_FILE),
            mac_path: tool_dir.join(MAC_FILE),
            account_path: tool_dir.join(ACCOUNT_FILE),
            site_dir,
        })
    }

    /// Creates the site folder and both output files when missing.
    pub fn prepare(&self) -> Result<(), WorkspaceError> {
        if self.site_dir.is_dir() {
            info!("Folder '{}' already exists", self.site_dir.display());
        } else {
            fs::create_dir_all(&self.site_dir).map_err(|source| WorkspaceError::Io {
                path: self.site_dir.clone(),
                source,
            })?;
            info!("Folder '{}' created", self.site_dir.display());
        }

        for path in [&self.export_path, &self.deployment_path] {
            touch(path, &self.site)?;
        }
        Ok(())
    }
}

fn touch(path: &Path, site: &str) -> Result<(), WorkspaceError> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if path.is_file() {
        info!("Found existing '{name}' in the '{site}' folder");
        return Ok(());
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| WorkspaceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Created '{name}' in the '{site}' folder");
    Ok(())
}

/// A single, non-empty path component.
pub fn is_valid_site_name(s: &str) -> bool {
    let s: &str = s.trim();
    !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\'])
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
