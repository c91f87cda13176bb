//! Handler functions for config CLI commands.
//!
//! The `cmd_config_*` functions are generic over
//! [`ConfigManager`](pdbscope_core::ConfigManager); dispatch binds them to
//! [`PdbScopeConfig`].

use crate::cli::ConfigAction;
use pdbscope_core::{ConfigManager, Error, PdbScopeConfig, Result};
use std::path::PathBuf;

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path::<PdbScopeConfig>(config_path),
        ConfigAction::Show => cmd_config_show::<PdbScopeConfig>(config_path),
        ConfigAction::Get { key } => cmd_config_get::<PdbScopeConfig>(config_path, &key),
        ConfigAction::Init { file, force } => {
            cmd_config_init::<PdbScopeConfig>(file.as_deref(), force)
        }
        ConfigAction::Export { docker_env } => {
            let config = PdbScopeConfig::load(config_path)?;
            cmd_config_export(&config, docker_env)
        }
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path<C: ConfigManager>(config_path: Option<&str>) -> Result<()> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!(
            "(file does not exist, run `{} config init` to create it)",
            C::project_name()
        );
    }
    Ok(())
}

/// Print the effective configuration, defaults included.
pub fn cmd_config_show<C: ConfigManager>(config_path: Option<&str>) -> Result<()> {
    let config = C::load(config_path)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Get a configuration value by dotted key.
pub fn cmd_config_get<C: ConfigManager>(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = C::load(config_path)?;
    println!("{}", lookup_key(&config, key)?);
    Ok(())
}

/// Create a default configuration file.
pub fn cmd_config_init<C: ConfigManager>(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => C::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, C::default().to_toml_string()?)?;

    println!("Config file created at {}", path.display());
    Ok(())
}

/// Export configuration as environment variables.
pub fn cmd_config_export<C: ConfigManager>(config: &C, docker_env: bool) -> Result<()> {
    for (key, value) in config.to_env_vars()? {
        if docker_env {
            println!("--env {key}={value}");
        } else {
            println!("{key}={value}");
        }
    }
    Ok(())
}

/// Render the value at a dotted key of `config`.
pub fn lookup_key<C: ConfigManager>(config: &C, key: &str) -> Result<String> {
    let value = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}
