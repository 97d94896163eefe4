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

//! Catalog errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A song named an album that has not been registered.
    #[error("invalid album reference: {album}")]
    InvalidReference { album: String },

    /// A song duration was negative, infinite or NaN.
    #[error("invalid duration for song {song}: {duration}")]
    InvalidDuration { song: String, duration: f64 },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
