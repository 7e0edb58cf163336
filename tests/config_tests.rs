//! Configuration Loading Tests
//!
//! File loading with `tempfile`, the CLI/env override, and validation errors.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

use food_meme_factory::chain::{Chain, LOOKUP_CHAINS};
use food_meme_factory::config::{AppConfig, ConfigError};

fn write_config(body: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, body).unwrap();
    (dir, path)
}

#[test]
fn test_full_file_is_loaded() {
    let (_dir, path) = write_config(
        r#"
base_url = "https://memes.example/api/"
wallet_address = "0x0000000000000000000000000000000000000001"
launch_out_dir = "/tmp/launches"
launch_chains = ["ethereum", "solana"]
lookup_chains = ["masterchain", "harmony"]
"#,
    );

    let cfg = AppConfig::load(Some(&path), None).unwrap();

    assert_eq!(cfg.base_url.as_str(), "https://memes.example/api/");
    assert_eq!(cfg.wallet_address, "0x0000000000000000000000000000000000000001");
    assert_eq!(cfg.launch_out_dir, Some(PathBuf::from("/tmp/launches")));
    assert_eq!(cfg.launch_chains, vec![Chain::Ethereum, Chain::Solana]);
    assert_eq!(cfg.lookup_chains, vec![Chain::MasterChain, Chain::Harmony]);
}

#[test]
fn test_base_url_override_wins_over_file() {
    let (_dir, path) = write_config(r#"base_url = "http://from-file:1""#);
    let cfg = AppConfig::load(Some(&path), Some("http://from-cli:2")).unwrap();
    assert_eq!(cfg.base_url.as_str(), "http://from-cli:2/");
    assert_eq!(cfg.lookup_chains, LOOKUP_CHAINS.to_vec());
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(AppConfig::load(Some(&dir.path().join("nope.toml")), None).is_err());
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let err = AppConfig::from_toml(r#"base_url = "not a url""#).unwrap_err();
    assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::InvalidUrl(..))), "{err:#}");

    let err = AppConfig::load(None, Some("ftp://files.example")).unwrap_err();
    assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::UnsupportedScheme(_))));
}

#[test]
fn test_unknown_chain_is_rejected() {
    let err = AppConfig::from_toml(r#"launch_chains = ["ethereum", "dogechain"]"#).unwrap_err();
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::UnknownChain { key, value }) => {
            assert_eq!(*key, "launch_chains");
            assert_eq!(value, "dogechain");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_masterchain_is_lookup_only() {
    let (_dir, path) = write_config(r#"launch_chains = ["masterchain"]"#);
    let err = AppConfig::load(Some(&path), None).unwrap_err();
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::ChainNotOffered { key, value }) => {
            assert_eq!(*key, "launch_chains");
            assert_eq!(value, "masterchain");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let (_dir, path) = write_config(r#"lookup_chains = ["masterchain"]"#);
    assert_eq!(AppConfig::load(Some(&path), None).unwrap().lookup_chains, vec![Chain::MasterChain]);
}

#[test]
fn test_empty_lists_and_wallet_are_rejected() {
    assert!(AppConfig::from_toml("lookup_chains = []").is_err());
    assert!(AppConfig::from_toml(r#"wallet_address = "   ""#).is_err());
}
