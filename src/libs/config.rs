//! Configuration management for the horizons application.
//!
//! Handles loading, saving, and interactive setup of application settings.
//! Configuration lives as JSON in the platform application-data directory
//! and degrades gracefully: a missing file yields the default configuration
//! with every optional module disabled.
//!
//! ## Modules
//!
//! - **Cloud**: endpoint and account for the hosted sync backend
//!
//! Each module is optional (`Option<T>`) and omitted from the JSON output
//! when unset, so configuration files stay minimal and new modules can be
//! added without breaking existing setups.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use horizons::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(cloud) = &config.cloud {
//!     println!("Sync endpoint: {}", cloud.api_url);
//! }
//! # anyhow::Ok(())
//! ```

use super::data_storage::DataStorage;
use crate::api::cloud::CloudConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
///
/// Used during interactive setup to present the list of available modules.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Main configuration container for the entire application.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Cloud sync backend configuration.
    ///
    /// When configured, enables `login`, `logout`, and `sync` against the
    /// hosted API. Local-only usage needs no configuration at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud: Option<CloudConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns the default configuration when no file exists yet; a file
    /// that exists but cannot be read or parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Presents a multi-select list of available modules, then walks each
    /// selected module through its own prompts, pre-filling existing values
    /// as defaults. Returns the updated configuration for saving.
    pub fn init() -> Result<Self> {
        // Existing configuration provides the prompt defaults
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = vec![CloudConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "cloud" => {
                    msg_print!(Message::ConfigModuleCloud);
                    config.cloud = Some(CloudConfig::init(&config.cloud)?);
                }
                _ => {} // Unknown module keys are safely ignored
            }
        }

        Ok(config)
    }
}
