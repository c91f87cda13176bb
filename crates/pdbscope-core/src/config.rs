//! Configuration file handling.
//!
//! The file is TOML. Every key has a default, so an absent file or a
//! partial one both load. Path resolution order: explicit path, the
//! `<PROJECT>_CONFIG` environment variable, then
//! `<config_dir>/<project>/config.toml`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::scene::Viewport;
use crate::{Error, PdbId, Result};

/// Behaviour shared by configuration types that live in a TOML file.
pub trait ConfigManager: Default + Serialize + DeserializeOwned {
    /// Project name used for the config directory and env var prefix.
    fn project_name() -> &'static str;

    /// Name of the environment variable that overrides the config path.
    fn env_var() -> String {
        format!("{}_CONFIG", Self::project_name().to_uppercase())
    }

    /// Platform default location of the config file.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(Self::project_name()).join("config.toml"))
    }

    /// Resolve which file to read, without checking that it exists.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(Self::env_var()) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::default_config_path()
    }

    /// Load from the resolved path, falling back to defaults when no file exists.
    fn load(config_path: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(config_path) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) if config_path.is_some() => Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            ))),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse a specific file.
    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Serialize as pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten into `PROJECT_SECTION_KEY=value` pairs.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_env(&Self::project_name().to_uppercase(), &value, &mut vars);
        Ok(vars)
    }
}

fn flatten_env(prefix: &str, value: &toml::Value, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let name = format!("{prefix}_{}", key.to_uppercase());
                flatten_env(&name, child, out);
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

// ============================================================================
// PdbScopeConfig
// ============================================================================

/// Top-level pdbscope configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdbScopeConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Upstream RCSB endpoints.
    pub rcsb: RcsbConfig,
    /// Dashboard viewer settings.
    pub viewer: ViewerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl ConfigManager for PdbScopeConfig {
    fn project_name() -> &'static str {
        "pdbscope"
    }
}

impl PdbScopeConfig {
    /// Reject values that would only fail later at request time.
    pub fn validate(&self) -> Result<()> {
        if self.viewer.width == 0 || self.viewer.height == 0 {
            return Err(Error::config("viewer.width and viewer.height must be non-zero"));
        }
        if self.rcsb.entity_id == 0 {
            return Err(Error::config("rcsb.entity_id starts at 1"));
        }
        for (key, url) in [
            ("rcsb.data_api_base", &self.rcsb.data_api_base),
            ("rcsb.files_base", &self.rcsb.files_base),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::config(format!("{key} must be an http(s) URL, got '{url}'")));
            }
        }
        Ok(())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8501".to_string(),
        }
    }
}

/// Upstream RCSB endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RcsbConfig {
    /// Base of the Data API (`/entry/{id}` and `/polymer_entity/{id}/{n}` live below it).
    pub data_api_base: String,
    /// Base of the file server (`/{id}.pdb` lives below it).
    pub files_base: String,
    /// Which polymer entity to read the organism from.
    pub entity_id: u32,
}

impl Default for RcsbConfig {
    fn default() -> Self {
        Self {
            data_api_base: "https://data.rcsb.org/rest/v1/core".to_string(),
            files_base: "https://files.rcsb.org/view".to_string(),
            entity_id: 1,
        }
    }
}

/// Dashboard viewer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Viewport width in CSS pixels.
    pub width: u32,
    /// Viewport height in CSS pixels.
    pub height: u32,
    /// Identifier pre-filled when the page is first opened.
    pub default_pdb_id: String,
    /// Where the browser loads 3Dmol.js from.
    pub script_url: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            default_pdb_id: "1ubq".to_string(),
            script_url: "https://3Dmol.org/build/3Dmol-min.js".to_string(),
        }
    }
}

impl ViewerConfig {
    /// The configured viewport.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.width,
            height: self.height,
        }
    }

    /// The default identifier, if one is configured.
    pub fn default_id(&self) -> Option<PdbId> {
        PdbId::parse(&self.default_pdb_id)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = PdbScopeConfig::default();
        assert_eq!(config.server.bind, "127.0.0.1:8501");
        assert_eq!(config.rcsb.entity_id, 1);
        assert_eq!(config.viewer.viewport(), Viewport { width: 800, height: 500 });
        assert_eq!(config.viewer.default_id().unwrap().as_str(), "1ubq");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: PdbScopeConfig = toml::from_str(
            r#"
            [viewer]
            width = 640

            [unknown_section]
            anything = true
            "#,
        )
        .unwrap();
        assert_eq!(config.viewer.width, 640);
        assert_eq!(config.viewer.height, 500);
        assert_eq!(config.rcsb, RcsbConfig::default());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pdbscope.toml");
        std::fs::write(&path, "[server]\nbind = \"0.0.0.0:9000\"\n").unwrap();

        let config = PdbScopeConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
    }

    #[test]
    fn test_load_explicit_missing_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let err = PdbScopeConfig::load(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_malformed_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[server\n").unwrap();
        let err = PdbScopeConfig::load(Some(path.to_str().unwrap())).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PdbScopeConfig::default();
        let text = config.to_toml_string().unwrap();
        let back: PdbScopeConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_env_vars() {
        let vars = PdbScopeConfig::default().to_env_vars().unwrap();
        assert!(vars.contains(&("PDBSCOPE_VIEWER_WIDTH".to_string(), "800".to_string())));
        assert!(vars.contains(&(
            "PDBSCOPE_SERVER_BIND".to_string(),
            "127.0.0.1:8501".to_string()
        )));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = PdbScopeConfig::default();
        config.viewer.height = 0;
        assert!(config.validate().is_err());

        let mut config = PdbScopeConfig::default();
        config.rcsb.files_base = "ftp://files.rcsb.org".to_string();
        assert!(config.validate().is_err());

        let mut config = PdbScopeConfig::default();
        config.rcsb.entity_id = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(PdbScopeConfig::env_var(), "PDBSCOPE_CONFIG");
    }
}
