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

//! Domain models and core data structures.
//!
//! This module defines the two entities held by the catalog, Albums and
//! Songs. Both are plain values with no identity beyond their contents.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    error::{CatalogError, Result},
    util::format::format_time,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Album {
    pub name: String,
    pub year: i32,
}

/// A single track, optionally belonging to an album.
///
/// Equality and hashing are structural over the name, the album reference and
/// the duration, so two songs built from the same triple collapse to a single
/// entry in a set. Durations compare bitwise, which is sound because
/// [`Song::new`] only admits finite, non-negative values and folds `-0.0`
/// into `0.0`.
#[derive(Debug, Clone)]
pub struct Song {
    name: String,
    album: Option<String>,
    duration: f64,
}

impl Song {
    /// Creates a song record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidDuration`] if `duration` is negative,
    /// infinite or NaN.
    pub fn new(name: impl Into<String>, album: Option<String>, duration: f64) -> Result<Self> {
        let name = name.into();

        if !duration.is_finite() || duration < 0.0 {
            return Err(CatalogError::InvalidDuration {
                song: name,
                duration,
            });
        }

        Ok(Self {
            name,
            album,
            // -0.0 == 0.0 but their bits differ
            duration: if duration == 0.0 { 0.0 } else { duration },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub(crate) fn is_on(&self, album: &str) -> bool {
        self.album.as_deref() == Some(album)
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.album == other.album
            && self.duration.to_bits() == other.duration.to_bits()
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.album.hash(state);
        self.duration.to_bits().hash(state);
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.album {
            Some(album) => write!(
                f,
                "{} [{}] ({})",
                self.name,
                album,
                format_time(self.duration)
            ),
            None => write!(f, "{} ({})", self.name, format_time(self.duration)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn identical_songs_collapse_in_a_set() {
        let mut songs = HashSet::new();
        songs.insert(Song::new("Time", Some("Meddle".into()), 420.5).unwrap());
        songs.insert(Song::new("Time", Some("Meddle".into()), 420.5).unwrap());
        songs.insert(Song::new("Time", None, 420.5).unwrap());
        songs.insert(Song::new("Time", Some("Meddle".into()), 421.0).unwrap());

        assert_eq!(songs.len(), 3);
    }

    #[test]
    fn negative_zero_is_the_same_song_as_zero() {
        let a = Song::new("Silence", None, 0.0).unwrap();
        let b = Song::new("Silence", None, -0.0).unwrap();

        assert_eq!(a, b);
        assert_eq!(b.duration().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn rejects_unusable_durations() {
        for duration in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Song::new("Bad", None, duration).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidDuration { ref song, .. } if song == "Bad"));
        }
    }

    #[test]
    fn display_includes_album_when_present() {
        let on_album = Song::new("Echoes", Some("Meddle".into()), 1413.0).unwrap();
        let single = Song::new("Arnold Layne", None, 175.0).unwrap();

        assert_eq!(on_album.to_string(), "Echoes [Meddle] (23:33)");
        assert_eq!(single.to_string(), "Arnold Layne (02:55)");
    }
}
