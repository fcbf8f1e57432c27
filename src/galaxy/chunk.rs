/*
chunk.rs

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

//! Chunk addressing.
//!
//! A chunk covers the global positions `[x * width, (x + 1) * width)` horizontally and
//! `[y * height, (y + 1) * height)` vertically. Chunk coordinates can be negative.
//!
//! Chunk coordinates are `i32` and chunk sizes are `u32`, so the global position of any point of
//! any chunk fits in an `i64`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GalaxyError;

/// Default chunk width.
pub const CHUNK_WIDTH: u32 = 1100;

/// Default chunk height.
pub const CHUNK_HEIGHT: u32 = 700;

/// Size of a chunk.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChunkSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self {
            width: CHUNK_WIDTH,
            height: CHUNK_HEIGHT,
        }
    }
}

impl ChunkSize {
    /// Create a [`ChunkSize`] object.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether the width or the height is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Global position.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Chunk coordinates.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl ChunkCoord {
    /// Create a [`ChunkCoord`] object.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the chunk that contains the given global position.
    ///
    /// Positions left of or above the origin belong to negative chunks: with a width of 1100,
    /// `x = -1` is in chunk `-1`, not in chunk `0`.
    ///
    /// # Errors
    ///
    /// Return [`GalaxyError::OutOfRange`] if the chunk coordinates do not fit in an `i32`, which
    /// can only happen with very small chunks and very distant positions.
    pub fn from_position(position: Position, size: ChunkSize) -> Result<Self, GalaxyError> {
        let x: i64 = position.x.div_euclid(i64::from(size.width.max(1)));
        let y: i64 = position.y.div_euclid(i64::from(size.height.max(1)));
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => Ok(Self { x, y }),
            _ => Err(GalaxyError::OutOfRange(position)),
        }
    }

    /// Return the key of the chunk, in the `x,y` format.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Return the global position of the top-left corner of the chunk.
    pub fn offset(&self, size: ChunkSize) -> Position {
        Position {
            x: i64::from(self.x) * i64::from(size.width),
            y: i64::from(self.y) * i64::from(size.height),
        }
    }

    /// Return the seed string for the chunk, in the `<world_seed>-x,y` format.
    ///
    /// Two different chunks of the same world never share a seed.
    pub fn seed(&self, world_seed: &str) -> String {
        format!("{world_seed}-{}", self.key())
    }

    /// Whether the global position is inside the chunk.
    pub fn contains(&self, position: Position, size: ChunkSize) -> bool {
        let offset: Position = self.offset(size);
        position.x >= offset.x
            && position.x < offset.x + i64::from(size.width)
            && position.y >= offset.y
            && position.y < offset.y + i64::from(size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_to_chunk() {
        let size = ChunkSize::new(1300, 900);
        assert_eq!(
            ChunkCoord::from_position(Position::new(0, 0), size),
            Ok(ChunkCoord::new(0, 0))
        );
        assert_eq!(
            ChunkCoord::from_position(Position::new(1299, 899), size),
            Ok(ChunkCoord::new(0, 0))
        );
        assert_eq!(
            ChunkCoord::from_position(Position::new(1300, 900), size),
            Ok(ChunkCoord::new(1, 1))
        );
        assert_eq!(
            ChunkCoord::from_position(Position::new(-1, -901), size),
            Ok(ChunkCoord::new(-1, -2))
        );
    }

    #[test]
    fn extreme_chunks_do_not_overflow() {
        let size = ChunkSize::new(u32::MAX, u32::MAX);
        for c in [
            ChunkCoord::new(i32::MAX, i32::MIN),
            ChunkCoord::new(i32::MIN, i32::MAX),
        ] {
            let offset: Position = c.offset(size);
            assert!(c.contains(offset, size));
            let last = Position::new(offset.x + i64::from(u32::MAX) - 1, offset.y);
            assert!(c.contains(last, size));
            assert_eq!(ChunkCoord::from_position(last, size), Ok(c));
        }

        let size = ChunkSize::default();
        let far = ChunkCoord::new(i32::MAX, 0);
        assert_eq!(far.offset(size), Position::new(i64::from(i32::MAX) * 1100, 0));
        assert!(!far.contains(Position::new(i64::MAX, 0), size));
    }

    #[test]
    fn distant_positions_are_out_of_range() {
        let size = ChunkSize::default();
        let p = Position::new(i64::MAX, 0);
        assert_eq!(
            ChunkCoord::from_position(p, size),
            Err(GalaxyError::OutOfRange(p))
        );
        let p = Position::new(0, i64::MIN);
        assert_eq!(
            ChunkCoord::from_position(p, size),
            Err(GalaxyError::OutOfRange(p))
        );
    }

    #[test]
    fn key_offset_and_seed() {
        let c = ChunkCoord::new(-2, 3);
        assert_eq!(c.key(), "-2,3");
        assert_eq!(c.offset(ChunkSize::default()), Position::new(-2200, 2100));
        assert_eq!(c.seed("SEED-1"), "SEED-1--2,3");
    }

    #[test]
    fn chunk_contains_its_positions() {
        let size = ChunkSize::default();
        let c = ChunkCoord::new(1, 0);
        assert!(c.contains(Position::new(1100, 0), size));
        assert!(c.contains(Position::new(2199, 699), size));
        assert!(!c.contains(Position::new(2200, 0), size));
        assert!(!c.contains(Position::new(1099, 0), size));
        assert!(!c.contains(Position::new(1500, 700), size));
    }
}
