/*
cache.rs

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

//! Keep the generated chunks of a world.
//!
//! A chunk is generated the first time it is requested and then served from the cache.
//! Because the generation only depends on the world seed and the chunk coordinates, dropping the
//! cache and regenerating the chunks gives the same entities.

use log::debug;
use std::collections::HashMap;

use super::GalaxyError;
use super::chunk::{ChunkCoord, ChunkSize, Position};
use super::entities::{self, GalaxyEntity};
use super::resources::Resource;

/// [`ChunkCache`] object.
#[derive(Debug, Clone)]
pub struct ChunkCache {
    /// Seed of the world.
    world_seed: String,

    /// Resource catalog used to assign resources to the entities.
    catalog: Vec<Resource>,

    /// Size of the chunks.
    size: ChunkSize,

    /// Number of entities per chunk.
    entities_per_chunk: usize,

    /// Generated chunks indexed by their coordinates.
    chunks: HashMap<ChunkCoord, Vec<GalaxyEntity>>,
}

impl ChunkCache {
    /// Create a [`ChunkCache`] object.
    pub fn new(
        world_seed: &str,
        catalog: Vec<Resource>,
        size: ChunkSize,
        entities_per_chunk: usize,
    ) -> Self {
        Self {
            world_seed: world_seed.to_string(),
            catalog,
            size,
            entities_per_chunk,
            chunks: HashMap::new(),
        }
    }

    /// Return the world seed.
    pub fn world_seed(&self) -> &str {
        &self.world_seed
    }

    /// Return the chunk size.
    pub fn size(&self) -> ChunkSize {
        self.size
    }

    /// Return the entities of the chunk, and generate them if the chunk is not in the cache yet.
    pub fn get_or_generate(&mut self, coord: ChunkCoord) -> Result<&[GalaxyEntity], GalaxyError> {
        if self.chunks.contains_key(&coord) {
            debug!("Chunk {coord}: cache hit");
        } else {
            debug!("Chunk {coord}: cache miss");
            let generated: Vec<GalaxyEntity> = entities::generate_world_chunk(
                &self.world_seed,
                coord,
                &self.catalog,
                self.entities_per_chunk,
                self.size,
            )?;
            self.chunks.insert(coord, generated);
        }
        Ok(self.chunks.get(&coord).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Return the entities of the chunk that contains the global position.
    pub fn at_position(&mut self, position: Position) -> Result<&[GalaxyEntity], GalaxyError> {
        let coord: ChunkCoord = ChunkCoord::from_position(position, self.size)?;
        self.get_or_generate(coord)
    }

    /// Whether the chunk has been generated.
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Return the number of generated chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether no chunk has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Drop all the generated chunks.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }
}
