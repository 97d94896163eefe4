// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. The file only
//! holds presentation and logging settings, never catalog content.

use std::path::Path;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "songbook";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Log filter directives, used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub show_durations: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            log_filter: "info".to_string(),
            show_durations: true,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

/// Loads the configuration from an explicit file, falling back to defaults.
pub fn load_config_from(path: impl AsRef<Path>) -> AppConfig {
    confy::load_path(path).unwrap_or_default()
}

pub fn save_config_to(path: impl AsRef<Path>, cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store_path(path, cfg)
}
