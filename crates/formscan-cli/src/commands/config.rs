//! Config command - inspect and edit the configuration file.
//!
//! Subcommands act on the file given with `--config`, or on the user
//! configuration file when none is given.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use formscan_core::{FixedFormParser, FormscanConfig};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a configuration file with the built-in defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value (e.g. "garbage.ui_words")
    Get {
        /// Dotted key path
        key: String,
    },

    /// Change one value; JSON literals are parsed, anything else is a string
    Set {
        /// Dotted key path
        key: String,
        /// New value
        value: String,
    },

    /// Check that the configuration builds a working parser
    Check,

    /// Show configuration file path
    Path,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => {
            let config = load_or_default(&path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { force } => init_config(&path, force)?,
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(load_or_default(&path)?)?;
            println!("{}", serde_json::to_string_pretty(lookup(&json, &key)?)?);
        }
        ConfigCommand::Set { key, value } => set_config(&path, &key, &value)?,
        ConfigCommand::Check => {
            FixedFormParser::from_config(&load_or_default(&path)?)?;
            println!("{} Configuration is valid", style("✓").green());
        }
        ConfigCommand::Path => show_path(&path),
    }

    Ok(())
}

/// Location of the user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("formscan")
        .join("config.json")
}

fn load_or_default(path: &Path) -> anyhow::Result<FormscanConfig> {
    if path.exists() {
        Ok(FormscanConfig::from_file(path)?)
    } else {
        Ok(FormscanConfig::default())
    }
}

fn save(path: &Path, config: &FormscanConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    save(path, &FormscanConfig::default())?;
    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        path.display()
    );

    Ok(())
}

fn set_config(path: &Path, key: &str, raw_value: &str) -> anyhow::Result<()> {
    let value: Value =
        serde_json::from_str(raw_value).unwrap_or_else(|_| Value::String(raw_value.to_string()));

    let mut json = serde_json::to_value(load_or_default(path)?)?;
    assign(&mut json, key, value.clone())?;

    let config: FormscanConfig = serde_json::from_value(json)?;
    // Reject values that would not produce a working parser.
    FixedFormParser::from_config(&config)?;
    save(path, &config)?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        key,
        serde_json::to_string(&value)?
    );

    Ok(())
}

fn show_path(path: &Path) {
    println!("Configuration file: {}", path.display());

    if path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'formscan config init' to create a configuration file.");
    }
}

fn lookup<'a>(json: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    key.split('.').try_fold(json, |current, part| {
        current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
    })
}

fn assign(json: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let (parent_key, last) = match key.rsplit_once('.') {
        Some((parent, last)) => (Some(parent), last),
        None => (None, key),
    };

    let mut parent = json;
    if let Some(parent_key) = parent_key {
        for part in parent_key.split('.') {
            parent = parent
                .get_mut(part)
                .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
        }
    }

    let object = parent
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("Cannot set value at non-object path: {}", key))?;

    if !object.contains_key(last) {
        anyhow::bail!("Configuration key not found: {}", key);
    }
    object.insert(last.to_string(), value);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup() {
        let json = serde_json::to_value(FormscanConfig::default()).unwrap();

        assert_eq!(lookup(&json, "server.port").unwrap(), &json!(5001));
        assert!(lookup(&json, "server.missing").is_err());
    }

    #[test]
    fn test_assign() {
        let mut json = serde_json::to_value(FormscanConfig::default()).unwrap();

        assign(&mut json, "server.host", json!("0.0.0.0")).unwrap();
        assert_eq!(json["server"]["host"], "0.0.0.0");

        assert!(assign(&mut json, "server.hostname", json!("x")).is_err());
        assert!(assign(&mut json, "server.port.value", json!(1)).is_err());
    }

    #[test]
    fn test_set_and_init() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        init_config(&path, false).unwrap();
        assert!(init_config(&path, false).is_err());

        set_config(&path, "server.port", "8080").unwrap();
        set_config(&path, "garbage.ui_words", r#"["print"]"#).unwrap();

        let config = FormscanConfig::from_file(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.garbage.ui_words, ["print"]);
    }

    #[test]
    fn test_set_rejects_wrong_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert!(set_config(&path, "server.port", "not-a-port").is_err());
        assert!(!path.exists());
    }
}
