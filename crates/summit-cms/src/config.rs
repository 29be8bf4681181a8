use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::endpoint;

/// Repository inspected when nothing else is configured.
pub const DEFAULT_REPOSITORY: &str = "p2backpack";

/// Where the local Slice Machine UI listens by default.
pub const DEFAULT_SLICE_MACHINE_URL: &str = "http://localhost:9999";

/// Configuration for summit.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SUMMIT_* prefix)
/// 3. Config file (~/.config/summit/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name of the content repository.
    ///
    /// Can be set via:
    /// - CLI: --repository NAME
    /// - ENV: SUMMIT_REPOSITORY_NAME
    /// - Config: repository_name = "..."
    #[serde(default = "default_repository")]
    pub repository_name: String,

    /// Explicit API root, overriding the one derived from the repository name.
    pub api_endpoint: Option<String>,

    /// Access token for repositories with private API access.
    ///
    /// Can be set via:
    /// - ENV: SUMMIT_ACCESS_TOKEN
    /// - Config: access_token = "..."
    pub access_token: Option<String>,

    /// Local Slice Machine UI, referenced by the setup instructions.
    #[serde(default = "default_slice_machine_url")]
    pub slice_machine_url: String,

    #[serde(default)]
    pub logging: twyg::Opts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository_name: default_repository(),
            api_endpoint: None,
            access_token: None,
            slice_machine_url: default_slice_machine_url(),
            logging: twyg::Opts::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/summit/config.toml
    /// Reads environment variables with SUMMIT_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("summit");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded configuration.
    #[must_use]
    pub fn with_overrides(mut self, repository: Option<String>, endpoint: Option<String>) -> Self {
        if let Some(name) = repository {
            self.repository_name = name;
        }
        if endpoint.is_some() {
            self.api_endpoint = endpoint;
        }
        self
    }

    /// Web UI of the configured repository.
    pub fn dashboard_url(&self) -> String {
        endpoint::dashboard_url(&self.repository_name)
    }
}

fn default_repository() -> String {
    DEFAULT_REPOSITORY.to_string()
}

fn default_slice_machine_url() -> String {
    DEFAULT_SLICE_MACHINE_URL.to_string()
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/summit/config.toml
/// - macOS: ~/Library/Application Support/summit/config.toml
/// - Windows: %APPDATA%\summit\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("summit")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Summit Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SUMMIT_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Name of the content repository to inspect
#
# Can also be set via:
# - CLI: summit --repository my-repo check
# - Environment: SUMMIT_REPOSITORY_NAME=my-repo
repository_name = "p2backpack"

# Access token, only needed when the repository's API is private
#
# Generate one under Settings > API & Security in the repository dashboard.
#
# Can also be set via:
# - Environment: SUMMIT_ACCESS_TOKEN=your-token-here
#access_token = "your-access-token-here"

# Explicit API root, e.g. for a local proxy
#
# Default: https://<repository_name>.cdn.prismic.io/api/v2
#api_endpoint = "http://localhost:3000/api/v2"

# Slice Machine UI used to push custom types
slice_machine_url = "http://localhost:9999"

# Logging
#
# Passing --verbose on the command line switches the level to debug.
#
#[logging]
#coloured = true
#level = "info"
#report_caller = false
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
