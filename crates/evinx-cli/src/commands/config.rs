//! Config command - manage the optional configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use evinx_core::models::config::EvinxConfig;
use evinx_core::Pipeline;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Write a configuration file with default values
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "extraction.description_prefix")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value (JSON literal or plain string)
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

/// Runs against `--config` when given, otherwise the per-user file.
pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => show_config(&path),
        ConfigCommand::Init(init_args) => init_config(&path, init_args),
        ConfigCommand::Get { key } => get_config(&path, &key),
        ConfigCommand::Set { key, value } => set_config(&path, &key, &value),
        ConfigCommand::Path => show_path(&path),
    }
}

/// Per-user configuration file, read when `--config` is not given.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("evinx")
        .join("config.json")
}

fn load_or_default(path: &Path) -> anyhow::Result<EvinxConfig> {
    if path.exists() {
        Ok(EvinxConfig::from_file(path)?)
    } else {
        Ok(EvinxConfig::default())
    }
}

fn show_config(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        eprintln!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }
    let config = load_or_default(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn init_config(path: &Path, args: InitArgs) -> anyhow::Result<()> {
    if path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    EvinxConfig::default().save(path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        path.display()
    );
    Ok(())
}

fn get_config(path: &Path, key: &str) -> anyhow::Result<()> {
    let json = serde_json::to_value(load_or_default(path)?)?;
    let value = lookup(&json, key)?;
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn set_config(path: &Path, key: &str, raw_value: &str) -> anyhow::Result<()> {
    let mut json = serde_json::to_value(load_or_default(path)?)?;

    // Plain words are taken as strings
    let value: Value =
        serde_json::from_str(raw_value).unwrap_or_else(|_| Value::String(raw_value.to_string()));
    assign(&mut json, key, value.clone())?;

    let config: EvinxConfig = serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
    Pipeline::new(config.clone())?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        key,
        serde_json::to_string(&value)?
    );
    Ok(())
}

fn show_path(path: &Path) -> anyhow::Result<()> {
    println!("Configuration file: {}", path.display());

    if path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'evinx config init' to create a configuration file.");
    }
    Ok(())
}

/// Value at a dotted key path.
fn lookup<'a>(json: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    key.split('.').try_fold(json, |current, part| {
        current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
    })
}

/// Replace the value at an existing dotted key path.
fn assign(json: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let slot = key.split('.').try_fold(json, |current, part| {
        current
            .get_mut(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
    })?;

    if slot.is_object() {
        anyhow::bail!("{} is a section, set one of its keys instead", key);
    }
    *slot = value;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup() {
        let json = serde_json::to_value(EvinxConfig::default()).unwrap();
        assert_eq!(
            lookup(&json, "extraction.description_prefix").unwrap(),
            &json!("Home Charging Basic")
        );
        assert!(lookup(&json, "extraction.missing").is_err());
    }

    #[test]
    fn test_assign() {
        let mut json = serde_json::to_value(EvinxConfig::default()).unwrap();
        assign(&mut json, "pdf.max_pages", json!(3)).unwrap();

        let config: EvinxConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.pdf.max_pages, 3);
    }

    #[test]
    fn test_assign_rejects_unknown_and_sections() {
        let mut json = serde_json::to_value(EvinxConfig::default()).unwrap();
        assert!(assign(&mut json, "pdf.dpi", json!(300)).is_err());
        assert!(assign(&mut json, "export", json!("x")).is_err());
    }
}
