//! Application configuration management.
//!
//! Settings are layered with figment, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config FILE`, or `config.toml` in the platform config dir)
//! 3. Environment variables prefixed `DUPEFIND_` (e.g. `DUPEFIND_IO_THREADS=8`)
//! 4. Command-line flags
//!
//! ```toml
//! follow_links = true
//! follow_file_links = true
//! io_threads = 4
//! format = "text"
//! progress = true
//! ```

use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::scanner::WalkerConfig;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "DUPEFIND_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Descend into symlinked directories.
    pub follow_links: bool,
    /// Size and hash symlinked regular files through their target.
    pub follow_file_links: bool,
    /// Hashing worker threads.
    pub io_threads: usize,
    /// Report format.
    pub format: OutputFormat,
    /// Show progress bars on stderr.
    pub progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            follow_links: true,
            follow_file_links: true,
            io_threads: 4,
            format: OutputFormat::Text,
            progress: true,
        }
    }
}

impl Config {
    /// Build the layered figment: defaults, TOML file, environment.
    ///
    /// A missing file contributes nothing.
    #[must_use]
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration from an explicit file or the default location.
    ///
    /// # Errors
    ///
    /// Fails if an explicitly named file does not exist or if any layer
    /// holds a malformed value.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Some(path.to_path_buf())
            }
            None => Self::default_path(),
        };

        if let Some(ref path) = file {
            log::debug!("Loading configuration from {}", path.display());
        }

        let config: Config = Self::figment(file.as_deref())
            .extract()
            .context("Invalid configuration")?;

        if config.io_threads == 0 {
            anyhow::bail!("Invalid configuration: io_threads must be at least 1");
        }

        Ok(config)
    }

    /// Apply command-line flags on top of the loaded layers.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.no_follow_links {
            self.follow_links = false;
        }
        if cli.no_follow_file_links {
            self.follow_file_links = false;
        }
        if let Some(threads) = cli.io_threads {
            self.io_threads = threads;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.no_progress || cli.quiet {
            self.progress = false;
        }
    }

    /// Walker settings derived from the link options.
    #[must_use]
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig::new(self.follow_links, self.follow_file_links)
    }

    /// Get the default platform-specific configuration path.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "dupefind").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
