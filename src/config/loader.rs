use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment};
use log::{info, trace};

use super::defaults::ClientConfig;

const CLIENT_SECTION: &str = "client";

pub fn get_default_config() -> &'static str {
    include_str!("../../config/config.toml")
}

pub fn load_configuration(path: &Path) -> Result<Config> {
    if !path.exists() {
        let sources = get_default_config();
        write_config_to(path, sources).context("Could not create default config")?;
        info!(path:% = path.display(); "Created new configuration file");
    }

    let filename = path.to_str().context("Invalid config file path")?;

    Config::builder()
        .add_source(config::File::with_name(filename))
        .add_source(Environment::with_prefix("ALEO").prefix_separator("_").separator("__"))
        .build()
        .context("Could not build config")
}

/// Reads the `[client]` section, falling back to defaults when it is absent.
pub fn client_config(cfg: &Config) -> Result<ClientConfig> {
    match cfg.get::<ClientConfig>(CLIENT_SECTION) {
        Ok(client) => Ok(client),
        Err(config::ConfigError::NotFound(_)) => {
            trace!("No client section in config, using defaults");
            Ok(ClientConfig::default())
        },
        Err(e) => Err(e).context("Could not read client configuration"),
    }
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    file.write_all(b"\n").context("Failed to write newline")?;
    Ok(())
}
