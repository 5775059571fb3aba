//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.billsplit/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The file only seeds the starting friends; balances are never written back.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::forms::DEFAULT_IMAGE_URL;
use crate::core::friend::{Friend, FriendId, demo_friends};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BillsplitConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub friends: Vec<FriendEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_image_url: Option<String>,
    pub seed_demo_friends: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FriendEntry {
    pub id: Option<String>,
    pub name: String,
    pub image: Option<String>,
    pub balance: Option<i64>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_image_url: String,
    pub friends: Vec<Friend>,
}

/// Settings that come from CLI flags.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub no_seed: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.billsplit/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".billsplit").join("config.toml"))
}

/// Load config from `explicit` or, if `None`, from `~/.billsplit/config.toml`.
///
/// A missing default file is generated (commented out) and yields
/// `BillsplitConfig::default()`. A missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<BillsplitConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BillsplitConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BillsplitConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<BillsplitConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BillsplitConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Billsplit Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_image_url = "https://i.pravatar.cc/48"   # Or set BILLSPLIT_IMAGE_URL
# seed_demo_friends = true                         # Or set BILLSPLIT_SEED_DEMO

# Friends listed here replace the demo friends at startup.
# [[friends]]
# id = "118836"                # optional, a random id is generated otherwise
# name = "Clark"
# image = "https://i.pravatar.cc/48?u=118836"
# balance = -7                 # negative: you owe them, positive: they owe you
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &BillsplitConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &BillsplitConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Default avatar: env → config → default
    let default_image_url = env("BILLSPLIT_IMAGE_URL")
        .or_else(|| config.general.default_image_url.clone())
        .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

    // Demo seeding: CLI → env → config → default (on)
    let seed_demo = !cli.no_seed
        && env("BILLSPLIT_SEED_DEMO")
            .and_then(|v| parse_bool(&v))
            .or(config.general.seed_demo_friends)
            .unwrap_or(true);

    let friends = if cli.no_seed {
        Vec::new()
    } else if !config.friends.is_empty() {
        configured_friends(&config.friends, &default_image_url)
    } else if seed_demo {
        demo_friends()
    } else {
        Vec::new()
    };

    ResolvedConfig {
        default_image_url,
        friends,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!("Ignoring unrecognised boolean value: {:?}", value);
            None
        }
    }
}

/// Turn `[[friends]]` entries into friends, skipping blank names and repeated ids.
fn configured_friends(entries: &[FriendEntry], default_image_url: &str) -> Vec<Friend> {
    let mut seen = HashSet::new();
    let mut friends = Vec::with_capacity(entries.len());

    for entry in entries {
        let name = entry.name.trim();
        if name.is_empty() {
            warn!("Skipping configured friend with an empty name");
            continue;
        }

        let id = entry
            .id
            .as_deref()
            .map(FriendId::from)
            .unwrap_or_else(FriendId::random);
        if !seen.insert(id.clone()) {
            warn!("Skipping configured friend {:?}: duplicate id {}", name, id);
            continue;
        }

        let image = entry
            .image
            .clone()
            .unwrap_or_else(|| format!("{default_image_url}?u={id}"));
        friends.push(Friend::new(id, name, image, entry.balance.unwrap_or(0)));
    }

    friends
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = BillsplitConfig::default();
        assert!(config.friends.is_empty());
        assert!(config.general.default_image_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&BillsplitConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.default_image_url, DEFAULT_IMAGE_URL);
        assert_eq!(resolved.friends, demo_friends());
    }

    #[test]
    fn test_cli_no_seed_wins() {
        let toml_str = r#"
[[friends]]
name = "Kim"
"#;
        let config: BillsplitConfig = toml::from_str(toml_str).unwrap();
        let cli = CliOverrides { no_seed: true };
        let resolved = resolve_with_env(&config, &cli, |_| Some("true".to_string()));
        assert!(resolved.friends.is_empty());
    }

    #[test]
    fn test_env_overrides_config() {
        let config = BillsplitConfig {
            general: GeneralConfig {
                default_image_url: Some("https://example.com/a".to_string()),
                seed_demo_friends: Some(true),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), |key| match key {
            "BILLSPLIT_IMAGE_URL" => Some("https://env.example/b".to_string()),
            "BILLSPLIT_SEED_DEMO" => Some("false".to_string()),
            _ => None,
        });
        assert_eq!(resolved.default_image_url, "https://env.example/b");
        assert!(resolved.friends.is_empty());
    }

    #[test]
    fn test_configured_friends_replace_demo() {
        let toml_str = r#"
[general]
default_image_url = "https://img.example/48"

[[friends]]
id = "k1"
name = "Kim"
balance = -4

[[friends]]
name = "Lee"
image = "https://img.example/lee.png"
"#;
        let config: BillsplitConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);

        assert_eq!(resolved.friends.len(), 2);
        assert_eq!(resolved.friends[0].id, FriendId::from("k1"));
        assert_eq!(resolved.friends[0].image, "https://img.example/48?u=k1");
        assert_eq!(resolved.friends[0].balance, -4);
        assert_eq!(resolved.friends[1].image, "https://img.example/lee.png");
        assert_eq!(resolved.friends[1].balance, 0);
    }

    #[test]
    fn test_duplicate_and_blank_friends_skipped() {
        let entries = vec![
            FriendEntry { id: Some("1".into()), name: "Ann".into(), image: None, balance: None },
            FriendEntry { id: Some("1".into()), name: "Bob".into(), image: None, balance: None },
            FriendEntry { id: None, name: "  ".into(), image: None, balance: None },
        ];
        let friends = configured_friends(&entries, DEFAULT_IMAGE_URL);
        assert_eq!(friends.len(), 1);
        assert_eq!(friends[0].name, "Ann");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
seed_demo_friends = false
"#;
        let config: BillsplitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.seed_demo_friends, Some(false));
        assert!(config.general.default_image_url.is_none());
        assert!(config.friends.is_empty());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("billsplit-test-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\nseed_demo_friends = ").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("billsplit-missing-{}.toml", uuid::Uuid::new_v4()));
        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
