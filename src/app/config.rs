use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::types::CardProps;

fn default_asset_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_window_size() -> [f32; 2] {
    [520.0, 560.0]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Root that `imageSrc` paths resolve against, like a web public dir.
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,
    /// UI language code; `None` follows the system locale.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
    /// Card to show instead of the built-in example.
    #[serde(default)]
    pub card: Option<CardProps>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_dir: default_asset_dir(),
            language: None,
            window_size: default_window_size(),
            card: None,
        }
    }
}

lazy_static! {
    pub static ref APP_CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

fn config_file_path() -> PathBuf {
    // Allow override for tests via env var
    if let Ok(p) = std::env::var("CARD_APP_CONFIG_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from("app_config.json")
}

impl AppConfig {
    pub fn load_from_file(path: &std::path::Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let s: AppConfig = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(s)
    }

    /// The configured card, or the built-in example.
    pub fn card_props(&self) -> CardProps {
        self.card.clone().unwrap_or_else(CardProps::alphonso)
    }
}

/// Snapshot of the current config.
pub fn current() -> AppConfig {
    APP_CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_default()
}

/// Read-only: a missing or unreadable file leaves the defaults in place and
/// nothing is written back.
pub fn load_config_from_disk() -> bool {
    load_config_from(&config_file_path())
}

fn load_config_from(path: &std::path::Path) -> bool {
    match AppConfig::load_from_file(path) {
        Ok(cfg) => {
            if let Ok(mut slot) = APP_CONFIG.write() {
                *slot = cfg;
            }
            log::info!("Loaded app_config from {}", path.to_string_lossy());
            true
        }
        Err(e) => {
            log::info!(
                "Using default app_config; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Badge;

    // Per-process temp file so parallel runs don't clobber each other or a real config.
    fn temp_config_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("{}_{}.json", name, std::process::id()));
        p
    }

    #[test]
    fn round_trips_through_disk() {
        let path = temp_config_path("card_config_roundtrip");
        let mut cfg = AppConfig::default();
        cfg.language = Some("en".into());
        let mut card = CardProps::alphonso();
        card.badges.push(Badge::new("Organic"));
        card.stock_left = Some(0);
        cfg.card = Some(card);

        std::fs::write(&path, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();
        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, cfg);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let path = temp_config_path("card_config_partial");
        std::fs::write(&path, r#"{ "asset_dir": "assets" }"#).unwrap();
        let cfg = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(cfg.asset_dir, PathBuf::from("assets"));
        assert_eq!(cfg.window_size, [520.0, 560.0]);
        assert_eq!(cfg.card_props(), CardProps::alphonso());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_not_created_on_load() {
        let path = temp_config_path("card_config_absent");
        let _ = std::fs::remove_file(&path);
        assert!(!load_config_from(&path));
        assert!(!path.exists());
    }

    #[test]
    fn garbage_is_invalid_data() {
        let path = temp_config_path("card_config_garbage");
        std::fs::write(&path, "not json").unwrap();
        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);

        let _ = std::fs::remove_file(path);
    }
}
