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

//! # Songbook.
//!
//! Builds a small sample catalog through the library API and prints its
//! summary.
//!
//! Logging goes to stderr through `tracing-subscriber`. The filter comes from
//! `RUST_LOG` when set, otherwise from the `log_filter` configuration value.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use songbook::{
    Catalog,
    config::{self, AppConfig},
};

/// The entry point of the application.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config).context("Failed to initialise logging")?;

    let catalog = sample_catalog().context("Failed to build sample catalog")?;
    info!(
        albums = catalog.album_count(),
        songs = catalog.song_count(),
        "catalog ready"
    );

    print!("{}", catalog.summary().render(config.show_durations));

    Ok(())
}

/// Installs the global fmt subscriber.
///
/// # Errors
///
/// Returns an error if the configured filter directives cannot be parsed or a
/// global subscriber is already installed.
fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .with_context(|| format!("Invalid log filter: {}", config.log_filter))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn sample_catalog() -> songbook::Result<Catalog> {
    let mut catalog = Catalog::new();

    catalog.add_album("The Piper at the Gates of Dawn", 1967);
    catalog.add_album("Meddle", 1971);
    catalog.add_album("Obscured by Clouds", 1972);
    catalog.add_album("Relics", 1971);

    catalog.add_song("Astronomy Domine", Some("The Piper at the Gates of Dawn"), 252.0)?;
    catalog.add_song("Interstellar Overdrive", Some("The Piper at the Gates of Dawn"), 581.0)?;
    catalog.add_song("One of These Days", Some("Meddle"), 357.0)?;
    catalog.add_song("Fearless", Some("Meddle"), 368.0)?;
    catalog.add_song("Echoes", Some("Meddle"), 1413.0)?;
    catalog.add_song("Free Four", Some("Obscured by Clouds"), 255.0)?;
    catalog.add_song("Arnold Layne", None, 175.0)?;
    catalog.add_song("See Emily Play", None, 173.0)?;

    Ok(catalog)
}
