//! `config.toml` for leadsheet.
//!
//! Every value has an embedded default, so a user file only needs the keys
//! it changes. The file lives under `$XDG_CONFIG_HOME/leadsheet/` (or
//! `~/.config/leadsheet/`) and is written out on first run.

use crate::phone::PhoneRules;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Published export of the shared lead sheet.
pub const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1X-i11_6zvQfmfurcq45nnzH1rVhqNUAhVJnQtenuWKk/export?format=csv";

const DEFAULT_CONFIG: &str = r#"
[source]
url = "https://docs.google.com/spreadsheets/d/1X-i11_6zvQfmfurcq45nnzH1rVhqNUAhVJnQtenuWKk/export?format=csv"

[ui]
theme         = "default"
show_links    = true
skeleton_rows = 4

[phone]
country_code = "91"
local_digits = 10
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub phone: PhoneConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String { DEFAULT_SHEET_URL.to_string() }

impl Default for SourceConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_show_links")]
    pub show_links: bool,
    #[serde(default = "default_skeleton_rows")]
    pub skeleton_rows: u16,
}

fn default_theme() -> String { "default".to_string() }
fn default_show_links() -> bool { true }
fn default_skeleton_rows() -> u16 { 4 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_links: default_show_links(),
            skeleton_rows: default_skeleton_rows(),
        }
    }
}

/// Dialling rules; see [`PhoneRules`].
#[derive(Debug, Clone, Deserialize)]
pub struct PhoneConfig {
    #[serde(default = "default_country_code")]
    pub country_code: String,
    #[serde(default = "default_local_digits")]
    pub local_digits: usize,
}

fn default_country_code() -> String { crate::phone::DEFAULT_COUNTRY_CODE.to_string() }
fn default_local_digits() -> usize { crate::phone::LOCAL_DIGITS }

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            country_code: default_country_code(),
            local_digits: default_local_digits(),
        }
    }
}

impl PhoneConfig {
    pub fn rules(&self) -> PhoneRules {
        PhoneRules {
            country_code: self.country_code.clone(),
            local_digits: self.local_digits,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Read the user file, creating it from the defaults when missing.
    /// Without a usable home directory nothing is written and the defaults
    /// are returned.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_create(config_path(
            std::env::var_os("XDG_CONFIG_HOME"),
            std::env::var_os("HOME"),
        ))
    }

    fn load_or_create(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            tracing::debug!("no config directory known, using defaults");
            return Ok(Self::defaults());
        };
        if !path.exists() {
            std::fs::create_dir_all(path.parent().unwrap_or(Path::new(".")))?;
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }
        Self::from_path(&path)
    }

    /// `path` layered over the defaults. A missing file is an error here,
    /// unlike [`Config::load`].
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let layered = embedded().add_source(config::File::from(path)).build()?;
        Ok(layered.try_deserialize()?)
    }

    pub fn defaults() -> Self {
        embedded()
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_else(|e| panic!("embedded default config does not parse: {e}"))
    }
}

fn embedded() -> config::ConfigBuilder<config::builder::DefaultState> {
    config::Config::builder()
        .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
}

/// `$XDG_CONFIG_HOME/leadsheet/config.toml`, else under `$HOME/.config`.
/// Empty or relative values are ignored rather than resolved against the
/// working directory.
fn config_path(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let absolute = |v: OsString| Some(PathBuf::from(v)).filter(|p| p.is_absolute());
    let base = xdg_config_home
        .and_then(absolute)
        .or_else(|| home.and_then(absolute).map(|h| h.join(".config")))?;
    Some(base.join("leadsheet").join("config.toml"))
}
