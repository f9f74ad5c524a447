//! Config command handlers

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use golden_core::Config;

use crate::output::{Output, OutputFormat};

const VALID_KEYS: &str = "data_dir, backend, seed_sample_data, username, email, log_file";

/// Show current configuration
pub fn show(config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "backend": config.backend.to_string(),
                    "seed_sample_data": config.seed_sample_data,
                    "username": config.username,
                    "email": config.email,
                    "log_file": config.log_file
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            let effective_path = config_path
                .cloned()
                .unwrap_or_else(Config::config_file_path);
            println!("Configuration:");
            println!("  data_dir:         {}", config.data_dir.display());
            println!("  backend:          {}", config.backend);
            println!("  seed_sample_data: {}", config.seed_sample_data);
            println!("  username:         {}", config.username);
            println!("  email:            {}", config.email);
            println!(
                "  log_file:         {}",
                config
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!();
            println!("Config file: {}", effective_path.display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(
    key: String,
    value: String,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    let save_path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);
    set_in_file(&save_path, &key, &value)?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

/// Apply one key/value change to the config stored at `path`
fn set_in_file(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut config = Config::read_file(path).context("Failed to load configuration")?;

    match key {
        "data_dir" => {
            config.data_dir = value.into();
        }
        "backend" => {
            config.backend = value.parse()?;
        }
        "seed_sample_data" => {
            config.seed_sample_data = value
                .parse()
                .context("Invalid value for seed_sample_data. Use 'true' or 'false'.")?;
        }
        "username" => {
            if value.trim().is_empty() {
                bail!("username must not be empty");
            }
            config.username = value.trim().to_string();
        }
        "email" => {
            config.email = value.trim().to_string();
        }
        "log_file" => {
            config.log_file = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.into())
            };
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\nValid keys: {}",
                key,
                VALID_KEYS
            );
        }
    }

    config
        .save_to_path(path)
        .context("Failed to save configuration")?;
    Ok(())
}
