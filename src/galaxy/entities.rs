/*
entities.rs

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

//! Generate the planets and traders of a chunk.
//!
//! For each entity, the values are drawn from the random stream in a fixed order: the type, the
//! horizontal position, the vertical position, and then the resource.
//! The same seed, catalog, count, size, and offset always give the same entities.

use log::debug;
use serde::{Deserialize, Serialize};

use super::GalaxyError;
use super::chunk::{ChunkCoord, ChunkSize, Position};
use super::picker;
use super::resources::Resource;
use super::rng::DeterministicRng;

/// Number of entities per chunk.
pub const ENTITIES_PER_CHUNK: usize = 20;

/// Number of entities in the single-shot galaxy.
pub const LEGACY_ENTITY_COUNT: usize = 100;

/// Area of the single-shot galaxy.
pub const LEGACY_SIZE: ChunkSize = ChunkSize {
    width: 1000,
    height: 600,
};

/// Probability for an entity to be a trader.
const TRADER_PROBABILITY: f64 = 0.25;

/// Type of entity.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Planet,
    Trader,
}

/// Generated entity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GalaxyEntity {
    /// Index of the entity in its chunk. Unique only inside the chunk.
    pub id: usize,

    /// Global horizontal position.
    pub x: i64,

    /// Global vertical position.
    pub y: i64,

    #[serde(rename = "type")]
    pub kind: EntityKind,

    pub resource: Resource,
}

impl GalaxyEntity {
    /// Return the global position.
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Return the position relative to the top-left corner of the chunk.
    pub fn local_position(&self, coord: ChunkCoord, size: ChunkSize) -> Position {
        let offset: Position = coord.offset(size);
        Position::new(self.x - offset.x, self.y - offset.y)
    }
}

/// Generate `count` entities in the `size` area that starts at `offset`.
///
/// # Errors
///
/// Return an error if the catalog is empty, if the area is empty, or if the area extends past
/// the `i64` plane.
pub fn generate_chunk(
    seed: &str,
    catalog: &[Resource],
    count: usize,
    size: ChunkSize,
    offset: Position,
) -> Result<Vec<GalaxyEntity>, GalaxyError> {
    if catalog.is_empty() {
        return Err(GalaxyError::EmptyCatalog);
    }
    if size.is_empty() {
        return Err(GalaxyError::EmptyChunk);
    }

    debug!("Generating {count} entities for seed {seed}");
    let mut rng = DeterministicRng::new(seed);
    let mut entities: Vec<GalaxyEntity> = Vec::with_capacity(count);
    for id in 0..count {
        let kind: EntityKind = if rng.next_f64() < TRADER_PROBABILITY {
            EntityKind::Trader
        } else {
            EntityKind::Planet
        };
        let x: i64 = scale(rng.next_f64(), size.width)
            .checked_add(offset.x)
            .ok_or(GalaxyError::OutOfRange(offset))?;
        let y: i64 = scale(rng.next_f64(), size.height)
            .checked_add(offset.y)
            .ok_or(GalaxyError::OutOfRange(offset))?;
        let resource: Resource = picker::pick(&mut rng, catalog)
            .ok_or(GalaxyError::EmptyCatalog)?
            .clone();
        entities.push(GalaxyEntity {
            id,
            x,
            y,
            kind,
            resource,
        });
    }
    Ok(entities)
}

/// Generate the entities of a chunk of the world.
pub fn generate_world_chunk(
    world_seed: &str,
    coord: ChunkCoord,
    catalog: &[Resource],
    count: usize,
    size: ChunkSize,
) -> Result<Vec<GalaxyEntity>, GalaxyError> {
    generate_chunk(
        &coord.seed(world_seed),
        catalog,
        count,
        size,
        coord.offset(size),
    )
}

/// Generate the whole galaxy in one shot: [`LEGACY_ENTITY_COUNT`] entities in the
/// [`LEGACY_SIZE`] area at the origin.
pub fn generate_galaxy(
    seed: &str,
    catalog: &[Resource],
) -> Result<Vec<GalaxyEntity>, GalaxyError> {
    generate_chunk(
        seed,
        catalog,
        LEGACY_ENTITY_COUNT,
        LEGACY_SIZE,
        Position::default(),
    )
}

/// Return the entities located in the chunk.
pub fn visible_entities(
    entities: &[GalaxyEntity],
    coord: ChunkCoord,
    size: ChunkSize,
) -> Vec<&GalaxyEntity> {
    entities
        .iter()
        .filter(|e| coord.contains(e.position(), size))
        .collect()
}

/// Convert a value in `[0, 1)` to an integer in `[0, length)`.
fn scale(value: f64, length: u32) -> i64 {
    let v: i64 = (value * f64::from(length)).floor() as i64;
    v.min(i64::from(length) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galaxy::resources::default_catalog;

    #[test]
    fn generation_is_deterministic() {
        let catalog: Vec<Resource> = default_catalog();
        let size = ChunkSize::new(1300, 900);
        let offset = Position::new(2600, -900);
        let a = generate_chunk("SEED-123-2,-1", &catalog, 20, size, offset).unwrap();
        let b = generate_chunk("SEED-123-2,-1", &catalog, 20, size, offset).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn ids_are_batch_indexes() {
        let catalog: Vec<Resource> = default_catalog();
        let entities =
            generate_world_chunk("SEED-1", ChunkCoord::new(0, 0), &catalog, 20, ChunkSize::default())
                .unwrap();
        let ids: Vec<usize> = entities.iter().map(|e| e.id).collect();
        assert_eq!(ids, (0..20).collect::<Vec<usize>>());
    }

    #[test]
    fn neighbor_chunks_stay_in_their_bounds() {
        let catalog: Vec<Resource> = default_catalog();
        let size = ChunkSize::default();
        for coord in [ChunkCoord::new(0, 0), ChunkCoord::new(1, 0), ChunkCoord::new(-1, -1)] {
            let entities = generate_world_chunk("SEED-9", coord, &catalog, 200, size).unwrap();
            let offset: Position = coord.offset(size);
            for e in &entities {
                assert!(e.x >= offset.x && e.x < offset.x + 1100, "{coord}: {e:?}");
                assert!(e.y >= offset.y && e.y < offset.y + 700, "{coord}: {e:?}");
                assert!(coord.contains(e.position(), size));
                let local: Position = e.local_position(coord, size);
                assert!((0..1100).contains(&local.x) && (0..700).contains(&local.y));
            }
            assert_eq!(visible_entities(&entities, coord, size).len(), entities.len());
        }
    }

    #[test]
    fn chunks_are_independent() {
        let catalog: Vec<Resource> = default_catalog();
        let size = ChunkSize::default();
        let a = generate_world_chunk("SEED-9", ChunkCoord::new(0, 0), &catalog, 20, size).unwrap();
        // Generating a neighbor first does not change the chunk
        generate_world_chunk("SEED-9", ChunkCoord::new(1, 0), &catalog, 20, size).unwrap();
        let b = generate_world_chunk("SEED-9", ChunkCoord::new(0, 0), &catalog, 20, size).unwrap();
        assert_eq!(a, b);
        let c = generate_world_chunk("SEED-9", ChunkCoord::new(1, 0), &catalog, 20, size).unwrap();
        assert!(visible_entities(&c, ChunkCoord::new(0, 0), size).is_empty());
    }

    #[test]
    fn traders_are_about_a_quarter() {
        let catalog: Vec<Resource> = default_catalog();
        let entities =
            generate_chunk("traders", &catalog, 10_000, ChunkSize::default(), Position::default())
                .unwrap();
        let traders: usize = entities
            .iter()
            .filter(|e| e.kind == EntityKind::Trader)
            .count();
        assert!((2_300..=2_700).contains(&traders), "{traders}");
    }

    #[test]
    fn legacy_galaxy() {
        let catalog: Vec<Resource> = default_catalog();
        let galaxy = generate_galaxy("SEED-5", &catalog).unwrap();
        assert_eq!(galaxy.len(), 100);
        assert!(
            galaxy
                .iter()
                .all(|e| (0..1000).contains(&e.x) && (0..600).contains(&e.y))
        );
        assert_eq!(galaxy, generate_galaxy("SEED-5", &catalog).unwrap());
    }

    #[test]
    fn invalid_input() {
        let catalog: Vec<Resource> = default_catalog();
        assert_eq!(
            generate_chunk("s", &[], 5, ChunkSize::default(), Position::default()),
            Err(GalaxyError::EmptyCatalog)
        );
        assert_eq!(
            generate_chunk("s", &catalog, 5, ChunkSize::new(0, 10), Position::default()),
            Err(GalaxyError::EmptyChunk)
        );
        assert_eq!(
            generate_chunk("s", &catalog, 0, ChunkSize::default(), Position::default()),
            Ok(Vec::new())
        );
    }

    #[test]
    fn extreme_chunks_stay_in_place() {
        let catalog: Vec<Resource> = default_catalog();
        let size = ChunkSize::default();
        for coord in [
            ChunkCoord::new(i32::MAX, i32::MIN),
            ChunkCoord::new(i32::MIN, i32::MAX),
        ] {
            let entities = generate_world_chunk("SEED-1", coord, &catalog, 20, size).unwrap();
            assert_eq!(entities.len(), 20);
            assert!(entities.iter().all(|e| coord.contains(e.position(), size)));
        }
    }

    #[test]
    fn area_past_the_plane_is_an_error() {
        let catalog: Vec<Resource> = default_catalog();
        let offset = Position::new(i64::MAX - 10, 0);
        assert_eq!(
            generate_chunk("s", &catalog, 20, ChunkSize::default(), offset),
            Err(GalaxyError::OutOfRange(offset))
        );
    }

    #[test]
    fn json_uses_type_field() {
        let catalog: Vec<Resource> = default_catalog();
        let entities =
            generate_chunk("json", &catalog, 1, ChunkSize::default(), Position::default()).unwrap();
        let value: serde_json::Value = serde_json::to_value(&entities[0]).unwrap();
        assert!(value["type"] == "planet" || value["type"] == "trader");
        assert!(value["resource"]["rarity"].is_string());
    }
}
