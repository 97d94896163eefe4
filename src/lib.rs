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
//! An in-memory music catalog of albums and songs.
//!
//! Albums are registered by name with a release year. Songs carry a name, a
//! duration in seconds and optionally the name of the album they belong to.
//! The [`Catalog`] answers aggregate queries over both: ordering, filtering,
//! counting, averaging and extremal search.
//!
//! ```
//! use songbook::Catalog;
//!
//! let mut catalog = Catalog::new();
//! catalog.add_album("Meddle", 1971);
//! catalog.add_song("Echoes", Some("Meddle"), 1413.0)?;
//! catalog.add_song("Arnold Layne", None, 175.0)?;
//!
//! assert_eq!(catalog.count_songs("Meddle"), 1);
//! assert_eq!(catalog.longest_song(), Some("Echoes"));
//! # Ok::<(), songbook::CatalogError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod util;

pub use catalog::{
    Catalog,
    summary::{AlbumSummary, CatalogSummary},
};
pub use error::{CatalogError, Result};
pub use model::{Album, Song};
