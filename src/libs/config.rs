//! Configuration management for the rollcall application.
//!
//! Settings live in a `config.json` under the platform application data
//! directory. Everything is optional: with no file present the defaults
//! apply, so the application runs without any setup. The `init` command
//! drives the interactive wizard defined here.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

use crate::libs::messages::Message;

pub const CONFIG_FILE_NAME: &str = "config.json";

fn default_seed_roster() -> bool {
    true
}

/// Application settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Overrides the platform data directory for the state blobs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,

    /// Installs the sample roster when the stored roster is empty.
    ///
    /// Useful to turn off when the register is scripted from scratch.
    #[serde(default = "default_seed_roster")]
    pub seed_roster: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_dir: None,
            seed_roster: true,
        }
    }
}

impl Config {
    /// Reads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Deletes the configuration file if one exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration wizard, starting from the
    /// current values.
    pub fn init() -> Result<Config> {
        let current = Config::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let storage_dir: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptStorageDir.to_string())
            .with_initial_text(
                current
                    .storage_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        let seed_roster = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptSeedRoster.to_string())
            .default(current.seed_roster)
            .interact()?;

        let storage_dir = storage_dir.trim();
        Ok(Config {
            storage_dir: if storage_dir.is_empty() {
                None
            } else {
                Some(PathBuf::from(storage_dir))
            },
            seed_roster,
        })
    }

    /// The storage location the register should use: the configured
    /// override, or the platform default.
    pub fn data_storage(&self) -> DataStorage {
        match &self.storage_dir {
            Some(dir) => DataStorage::with_base(dir.clone()),
            None => DataStorage::new(),
        }
    }
}
