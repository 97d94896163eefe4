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

//! Read-only catalog queries.
//!
//! Sequence queries return iterators borrowing the catalog, so calling one
//! again after a mutation reflects the current state. Queries that may find
//! nothing return a zero count or `None`, never an error.

use std::collections::HashMap;

use tracing::trace;

use super::Catalog;
use crate::model::{Album, Song};

impl Catalog {
    /// All registered album names, in no particular order.
    pub fn album_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.albums.keys().map(String::as_str)
    }

    /// All registered albums, in no particular order.
    pub fn albums(&self) -> impl Iterator<Item = Album> + '_ {
        self.albums.iter().map(|(name, year)| Album {
            name: name.clone(),
            year: *year,
        })
    }

    pub fn album_year(&self, name: &str) -> Option<i32> {
        self.albums.get(name).copied()
    }

    /// Names of albums released in `year`, in no particular order.
    pub fn albums_in_year(&self, year: i32) -> impl Iterator<Item = &str> + '_ {
        self.albums
            .iter()
            .filter(move |(_, y)| **y == year)
            .map(|(name, _)| name.as_str())
    }

    /// All songs, in no particular order.
    pub fn songs(&self) -> impl Iterator<Item = &Song> + '_ {
        self.songs.iter()
    }

    /// Every song name in ascending lexicographic order.
    ///
    /// Distinct songs sharing a name each contribute an entry.
    pub fn ordered_song_names(&self) -> impl Iterator<Item = &str> + '_ {
        let mut names: Vec<&str> = self.songs.iter().map(Song::name).collect();
        names.sort_unstable();
        names.into_iter()
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty() && self.songs.is_empty()
    }

    /// Number of songs on `album`, zero if the album is unknown.
    pub fn count_songs(&self, album: &str) -> usize {
        self.songs_on(album).count()
    }

    pub fn count_songs_with_no_album(&self) -> usize {
        self.songs.iter().filter(|s| s.album().is_none()).count()
    }

    /// Mean duration of the songs on `album`.
    ///
    /// Returns `None` when the album has no songs, including when the album is
    /// not registered at all.
    pub fn average_duration(&self, album: &str) -> Option<f64> {
        let (count, total) = self
            .songs_on(album)
            .fold((0usize, 0.0), |(count, total), s| (count + 1, total + s.duration()));

        (count > 0).then(|| total / count as f64)
    }

    /// Summed duration of the songs on `album`, zero if there are none.
    pub fn total_duration(&self, album: &str) -> f64 {
        self.songs_on(album).map(Song::duration).sum()
    }

    /// Name of the song with the greatest duration.
    ///
    /// When several songs share that duration the lexicographically smallest
    /// name is returned. `None` only for a catalog with no songs.
    pub fn longest_song(&self) -> Option<&str> {
        self.songs
            .iter()
            .max_by(|a, b| {
                a.duration()
                    .total_cmp(&b.duration())
                    .then_with(|| b.name().cmp(a.name()))
            })
            .map(Song::name)
    }

    /// Name of the album holding the most songs.
    ///
    /// When several albums share that count the lexicographically smallest
    /// name is returned. `None` if no song belongs to an album.
    pub fn longest_album(&self) -> Option<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for album in self.songs.iter().filter_map(Song::album) {
            *counts.entry(album).or_default() += 1;
        }

        trace!(candidates = counts.len(), "selecting longest album");

        counts
            .into_iter()
            .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then_with(|| b.cmp(a)))
            .map(|(name, _)| name)
    }

    fn songs_on<'a>(&'a self, album: &'a str) -> impl Iterator<Item = &'a Song> + 'a {
        self.songs.iter().filter(move |s| s.is_on(album))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_album("Meddle", 1971);
        catalog.add_album("Obscured by Clouds", 1972);
        catalog.add_album("Atom Heart Mother", 1970);
        catalog.add_album("Relics", 1971);

        catalog.add_song("One of These Days", Some("Meddle"), 357.0).unwrap();
        catalog.add_song("Fearless", Some("Meddle"), 368.0).unwrap();
        catalog.add_song("Echoes", Some("Meddle"), 1413.0).unwrap();
        catalog.add_song("Free Four", Some("Obscured by Clouds"), 255.0).unwrap();
        catalog.add_song("Childhood's End", Some("Obscured by Clouds"), 271.0).unwrap();
        catalog.add_song("Arnold Layne", None, 175.0).unwrap();
        catalog
    }

    fn sorted<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
        let mut names: Vec<&str> = names.collect();
        names.sort_unstable();
        names
    }

    #[test]
    fn album_names_lists_every_album() {
        let catalog = catalog();

        assert_eq!(
            sorted(catalog.album_names()),
            vec!["Atom Heart Mother", "Meddle", "Obscured by Clouds", "Relics"]
        );
    }

    #[test]
    fn album_names_reflects_later_additions() {
        let mut catalog = catalog();
        assert_eq!(catalog.album_names().count(), 4);

        catalog.add_album("The Wall", 1979);

        assert_eq!(catalog.album_names().count(), 5);
    }

    #[test]
    fn albums_in_year_filters_by_release_year() {
        let catalog = catalog();

        assert_eq!(sorted(catalog.albums_in_year(1971)), vec!["Meddle", "Relics"]);
        assert_eq!(catalog.albums_in_year(1999).count(), 0);
    }

    #[test]
    fn ordered_song_names_keeps_duplicate_names() {
        let mut catalog = catalog();
        catalog.add_song("Echoes", None, 1400.0).unwrap();

        let names: Vec<&str> = catalog.ordered_song_names().collect();

        assert_eq!(
            names,
            vec![
                "Arnold Layne",
                "Childhood's End",
                "Echoes",
                "Echoes",
                "Fearless",
                "Free Four",
                "One of These Days",
            ]
        );
    }

    #[test]
    fn counts_songs_per_album() {
        let catalog = catalog();

        assert_eq!(catalog.count_songs("Meddle"), 3);
        assert_eq!(catalog.count_songs("Relics"), 0);
        assert_eq!(catalog.count_songs("Animals"), 0);
        assert_eq!(catalog.count_songs_with_no_album(), 1);
    }

    #[test]
    fn average_duration_is_none_without_songs() {
        let catalog = catalog();

        assert_eq!(catalog.average_duration("Obscured by Clouds"), Some(263.0));
        assert_eq!(catalog.average_duration("Relics"), None);
        assert_eq!(catalog.average_duration("Animals"), None);
    }

    #[test]
    fn total_duration_sums_album_songs() {
        let catalog = catalog();

        assert_eq!(catalog.total_duration("Meddle"), 2138.0);
        assert_eq!(catalog.total_duration("Relics"), 0.0);
    }

    #[test]
    fn longest_song_prefers_smallest_name_on_tie() {
        let mut catalog = Catalog::new();
        catalog.add_song("b", None, 10.0).unwrap();
        catalog.add_song("c", None, 10.0).unwrap();
        catalog.add_song("a", None, 10.0).unwrap();
        catalog.add_song("d", None, 9.0).unwrap();

        assert_eq!(catalog.longest_song(), Some("a"));
    }

    #[test]
    fn longest_album_prefers_smallest_name_on_tie() {
        let mut catalog = Catalog::new();
        catalog.add_album("Y", 2001);
        catalog.add_album("X", 2000);
        catalog.add_song("1", Some("Y"), 1.0).unwrap();
        catalog.add_song("2", Some("Y"), 1.0).unwrap();
        catalog.add_song("3", Some("X"), 1.0).unwrap();
        catalog.add_song("4", Some("X"), 1.0).unwrap();
        catalog.add_song("5", None, 1.0).unwrap();
        catalog.add_song("6", None, 1.0).unwrap();
        catalog.add_song("7", None, 1.0).unwrap();

        assert_eq!(catalog.longest_album(), Some("X"));
    }

    #[test]
    fn longest_album_ignores_songs_without_album() {
        let mut catalog = Catalog::new();
        catalog.add_album("Empty", 2000);
        catalog.add_song("Loose", None, 100.0).unwrap();

        assert_eq!(catalog.longest_album(), None);
        assert_eq!(catalog.longest_song(), Some("Loose"));
    }

    #[test]
    fn albums_carry_their_year() {
        let catalog = catalog();
        let mut albums: Vec<Album> = catalog.albums().collect();
        albums.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            albums[0],
            Album {
                name: "Atom Heart Mother".to_string(),
                year: 1970
            }
        );
        assert_eq!(catalog.album_year("Relics"), Some(1971));
        assert_eq!(catalog.album_year("Animals"), None);
    }
}
