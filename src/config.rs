//! Runtime configuration.
//!
//! Layering: [`Defaults`] → TOML file → `--base-url` / `FOOD_MEME_BASE_URL`.
//! Everything is validated here, once, so the rest of the app only sees typed values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::chain::{Chain, LAUNCH_CHAINS, LOOKUP_CHAINS};
use crate::defaults::Defaults;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: Url,
    pub wallet_address: String,
    pub launch_out_dir: Option<PathBuf>,
    pub launch_chains: Vec<Chain>,
    pub lookup_chains: Vec<Chain>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(Defaults::BASE_URL).expect("default base URL is valid"),
            wallet_address: Defaults::WALLET_ADDRESS.to_string(),
            launch_out_dir: None,
            launch_chains: LAUNCH_CHAINS.to_vec(),
            lookup_chains: LOOKUP_CHAINS.to_vec(),
        }
    }
}

/// File shape. All keys optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    base_url: Option<String>,
    wallet_address: Option<String>,
    launch_out_dir: Option<PathBuf>,
    launch_chains: Option<Vec<String>>,
    lookup_chains: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base_url `{0}`: {1}")]
    InvalidUrl(String, url::ParseError),
    #[error("base_url `{0}` must use http or https")]
    UnsupportedScheme(String),
    #[error("{key}: unknown chain `{value}`")]
    UnknownChain { key: &'static str, value: String },
    #[error("{key}: chain `{value}` is not offered there")]
    ChainNotOffered { key: &'static str, value: String },
    #[error("{0} must list at least one chain")]
    EmptyChainList(&'static str),
    #[error("wallet_address must not be empty")]
    EmptyWalletAddress,
}

pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(raw.to_string()));
    }
    Ok(url)
}

/// Parse a chain list, accepting only chains that appear in `offered`.
fn parse_chains(key: &'static str, raw: Vec<String>, offered: &[Chain]) -> Result<Vec<Chain>, ConfigError> {
    if raw.is_empty() {
        return Err(ConfigError::EmptyChainList(key));
    }
    let mut out = Vec::with_capacity(raw.len());
    for value in raw {
        let chain: Chain = value
            .parse()
            .map_err(|_| ConfigError::UnknownChain { key, value: value.clone() })?;
        if !offered.contains(&chain) {
            return Err(ConfigError::ChainNotOffered { key, value });
        }
        if !out.contains(&chain) {
            out.push(chain);
        }
    }
    Ok(out)
}

impl AppConfig {
    /// Parse a TOML document on top of the defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(text).context("parsing config TOML")?;
        let mut cfg = Self::default();

        if let Some(u) = raw.base_url {
            cfg.base_url = parse_base_url(&u)?;
        }
        if let Some(w) = raw.wallet_address {
            if w.trim().is_empty() {
                return Err(ConfigError::EmptyWalletAddress.into());
            }
            cfg.wallet_address = w.trim().to_string();
        }
        cfg.launch_out_dir = raw.launch_out_dir;
        if let Some(list) = raw.launch_chains {
            cfg.launch_chains = parse_chains("launch_chains", list, LAUNCH_CHAINS)?;
        }
        if let Some(list) = raw.lookup_chains {
            cfg.lookup_chains = parse_chains("lookup_chains", list, LOOKUP_CHAINS)?;
        }
        Ok(cfg)
    }

    /// Load from `path` (must exist) or from the default location (optional),
    /// then apply the base URL override.
    pub fn load(path: Option<&Path>, base_url_override: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.is_file()),
        };

        let mut cfg = match file {
            Some(p) => {
                let text = fs::read_to_string(&p).with_context(|| format!("reading {}", p.display()))?;
                let cfg = Self::from_toml(&text).with_context(|| format!("loading {}", p.display()))?;
                tracing::info!(path = %p.display(), "config loaded");
                cfg
            }
            None => Self::default(),
        };

        if let Some(u) = base_url_override {
            cfg.base_url = parse_base_url(u)?;
        }
        Ok(cfg)
    }
}

pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "", "food-meme")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join(Defaults::CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:8000/");
    }

    #[test]
    fn chain_lists_are_parsed_and_deduplicated() {
        let cfg = AppConfig::from_toml(r#"launch_chains = ["polygon", "Base", "polygon"]"#).unwrap();
        assert_eq!(cfg.launch_chains, vec![Chain::Polygon, Chain::Base]);
    }

    #[test]
    fn launch_chains_refuse_lookup_only_entries() {
        let err = parse_chains("launch_chains", vec!["MasterChain".into()], LAUNCH_CHAINS).unwrap_err();
        assert!(
            matches!(&err, ConfigError::ChainNotOffered { key: "launch_chains", value } if value == "MasterChain"),
            "{err}"
        );
        assert!(AppConfig::from_toml(r#"launch_chains = ["ethereum", "masterchain"]"#).is_err());

        let cfg = AppConfig::from_toml(r#"lookup_chains = ["masterchain"]"#).unwrap();
        assert_eq!(cfg.lookup_chains, vec![Chain::MasterChain]);
        assert_eq!(cfg.launch_chains, LAUNCH_CHAINS.to_vec());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppConfig::from_toml("base_uri = \"http://x\"").is_err());
    }

    #[test]
    fn scheme_must_be_http() {
        assert!(matches!(parse_base_url("ftp://x"), Err(ConfigError::UnsupportedScheme(_))));
        assert!(parse_base_url("https://svc.example/api").is_ok());
    }
}
