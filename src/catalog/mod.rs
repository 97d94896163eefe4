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

//! Music catalog.
//!
//! The catalog owns every registered album, keyed by name, and the set of
//! songs added to it. It only ever grows: albums and songs are added through
//! [`Catalog::add_album`] and [`Catalog::add_song`] and are never removed.
//!
//! Read queries live in the `query` module and the display snapshot in
//! [`summary`].
//!
//! # Threading
//!
//! A catalog is a plain owned value with no interior locking. Callers sharing
//! one between threads must wrap the whole catalog in their own lock.

mod query;
pub mod summary;

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::{
    error::{CatalogError, Result},
    model::Song,
};

#[derive(Debug, Default, Clone)]
pub struct Catalog {
    albums: HashMap<String, i32>,
    songs: HashSet<Song>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an album, replacing the year if the name is already known.
    pub fn add_album(&mut self, name: impl Into<String>, year: i32) {
        let name = name.into();

        match self.albums.insert(name.clone(), year) {
            Some(previous) => debug!(album = %name, previous, year, "album year replaced"),
            None => debug!(album = %name, year, "album added"),
        }
    }

    /// Adds a song to the catalog.
    ///
    /// A song with no album is always accepted. A song on an album must name
    /// an album already registered with [`Catalog::add_album`].
    ///
    /// Returns `true` if the song was inserted, or `false` if an identical
    /// song (same name, album and duration) was already present.
    ///
    /// # Errors
    ///
    /// The catalog is left unchanged and an error is returned if:
    /// * `album` names an album that is not registered
    ///   ([`CatalogError::InvalidReference`]).
    /// * `duration` is negative or not finite ([`CatalogError::InvalidDuration`]).
    pub fn add_song(
        &mut self,
        name: impl Into<String>,
        album: Option<&str>,
        duration: f64,
    ) -> Result<bool> {
        let name = name.into();

        if let Some(album) = album {
            if !self.albums.contains_key(album) {
                warn!(song = %name, album, "rejected song with unknown album");
                return Err(CatalogError::InvalidReference {
                    album: album.to_string(),
                });
            }
        }

        let song = Song::new(name, album.map(str::to_string), duration).inspect_err(|e| {
            warn!(error = %e, "rejected song");
        })?;

        debug!(song = %song, "song added");

        Ok(self.songs.insert(song))
    }
}
