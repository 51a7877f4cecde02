use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CDN base every blob-storage URL is spliced onto.
pub const DEFAULT_CONTENT_BASE_URL: &str = "https://content.gogetempowered.com";

/// Replacement for the `:10000` port marker on legacy paths.
pub const DEFAULT_LEGACY_PORT_FRAGMENT: &str = "/org-content";

/// strftime pattern for rendered content dates.
pub const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

/// Resolver configuration loaded from `~/.config/respath/config.toml`.
///
/// Built once at startup and never mutated afterwards; the resolver takes
/// ownership of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Legacy (pre-CDN) base URL, e.g. `https://lxp.example.com`.
    pub base_url: String,
    /// Legacy substitute for the `org-content` marker.
    pub org_content_path: String,
    /// Legacy blob fragment prefixed to root-relative paths.
    pub blob_path: String,
    /// Legacy blob fragment prefixed to bare relative paths.
    pub blob_path_alt: String,
    /// CDN base URL used when blob storage is enabled.
    pub content_base_url: String,
    /// Tenant code namespacing content on the CDN. May be empty.
    pub org_code: String,
    /// Route resources through the CDN instead of the legacy server.
    pub blob_enabled: bool,
    /// Replacement for the `:10000` port marker.
    pub legacy_port_fragment: String,
    /// strftime pattern used by [`crate::dates`].
    pub date_format: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            org_content_path: String::new(),
            blob_path: String::new(),
            blob_path_alt: String::new(),
            content_base_url: DEFAULT_CONTENT_BASE_URL.to_string(),
            org_code: String::new(),
            blob_enabled: false,
            legacy_port_fragment: DEFAULT_LEGACY_PORT_FRAGMENT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Pretty TOML form, as written by [`load_or_init`].
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize resolver config")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("respath")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
///
/// The generated file leaves `base_url` empty; building a resolver from it
/// fails until the value is filled in.
pub fn load_or_init() -> Result<ResolverConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ResolverConfig::default();
        let toml = default_cfg.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit TOML file.
pub fn load_from(path: &Path) -> Result<ResolverConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: ResolverConfig = toml::from_str(&data)
        .with_context(|| format!("parse config file: {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
