/*
galaxy.rs

Copyright 2025 Hervé Quatremain

This file is part of Mathgalaxy.

Mathgalaxy is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mathgalaxy is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mathgalaxy. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate the galaxy of the space exploration game.
//!
//! The galaxy is an unbounded 2-D plane split into fixed-size chunks, see [`chunk::ChunkCoord`].
//! The entities of a chunk (planets and traders) are generated on demand from the world seed and
//! the chunk coordinates only, so a chunk can be regenerated identically at any time, in any
//! order, and on any device.
//!
//! * [`rng::DeterministicRng`] is the seeded random stream.
//! * [`picker::pick`] selects a resource from the catalog according to its rarity.
//! * [`entities::generate_chunk`] generates the entities of one chunk.
//! * [`cache::ChunkCache`] keeps the generated chunks so that they are generated only once.

pub mod cache;
pub mod chunk;
pub mod entities;
pub mod picker;
pub mod resources;
pub mod rng;

use std::error::Error;
use std::fmt;

use chunk::Position;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GalaxyError {
    /// The resource catalog is empty, so no resource can be assigned to the entities.
    EmptyCatalog,

    /// The chunk width or height is zero.
    EmptyChunk,

    /// The position is too far from the origin to be addressed.
    OutOfRange(Position),
}

impl fmt::Display for GalaxyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GalaxyError::EmptyCatalog => write!(f, "the resource catalog is empty"),
            GalaxyError::EmptyChunk => write!(f, "the chunk width and height must not be zero"),
            GalaxyError::OutOfRange(p) => write!(f, "position {},{} is out of range", p.x, p.y),
        }
    }
}

impl Error for GalaxyError {}
