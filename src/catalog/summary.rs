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

//! Catalog summary.
//!
//! A [`CatalogSummary`] is an owned snapshot of the catalog aggregates, taken
//! once and then rendered as text. Album lines are ordered by release year and
//! then by name so the output is stable regardless of hash ordering.

use std::fmt;

use super::Catalog;
use crate::{model::Album, util::format::format_time};

#[derive(Debug, Clone, PartialEq)]
pub struct AlbumSummary {
    pub album: Album,
    pub song_count: usize,
    pub total_duration: f64,
    pub average_duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub album_count: usize,
    pub song_count: usize,
    pub songs_without_album: usize,
    pub longest_song: Option<String>,
    pub longest_album: Option<String>,
    pub albums: Vec<AlbumSummary>,
}

impl Catalog {
    /// Takes a summary snapshot of the catalog.
    pub fn summary(&self) -> CatalogSummary {
        let mut albums: Vec<AlbumSummary> = self
            .albums()
            .map(|album| AlbumSummary {
                song_count: self.count_songs(&album.name),
                total_duration: self.total_duration(&album.name),
                average_duration: self.average_duration(&album.name),
                album,
            })
            .collect();

        albums.sort_by(|a, b| {
            a.album
                .year
                .cmp(&b.album.year)
                .then_with(|| a.album.name.cmp(&b.album.name))
        });

        CatalogSummary {
            album_count: self.album_count(),
            song_count: self.song_count(),
            songs_without_album: self.count_songs_with_no_album(),
            longest_song: self.longest_song().map(str::to_string),
            longest_album: self.longest_album().map(str::to_string),
            albums,
        }
    }
}

impl CatalogSummary {
    /// Renders the summary as plain text, one album per line.
    ///
    /// With `show_durations` unset the per-album duration columns are left
    /// out.
    pub fn render(&self, show_durations: bool) -> String {
        let mut out = format!(
            "{} albums, {} songs ({} without album)\n",
            self.album_count, self.song_count, self.songs_without_album
        );

        out.push_str(&format!(
            "Longest song: {}\n",
            self.longest_song.as_deref().unwrap_or("-")
        ));
        out.push_str(&format!(
            "Longest album: {}\n",
            self.longest_album.as_deref().unwrap_or("-")
        ));

        for line in &self.albums {
            out.push_str(&format!(
                "{:>6}  {:<32} {:>3} songs",
                line.album.year, line.album.name, line.song_count
            ));
            if show_durations {
                let average = line
                    .average_duration
                    .map_or_else(|| "--:--".to_string(), format_time);
                out.push_str(&format!(
                    "  total {}  avg {}",
                    format_time(line.total_duration),
                    average
                ));
            }
            out.push('\n');
        }

        out
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}
