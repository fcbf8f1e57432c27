/*
picker.rs

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

//! Pick a resource according to its rarity.
//!
//! Each resource counts as many times as the weight of its rarity, see [`Rarity::weight`], and
//! one entry of this virtual pool is drawn uniformly.

use super::resources::{Rarity, Resource};
use super::rng::DeterministicRng;

/// Pick a resource from the catalog.
///
/// Exactly one value is drawn from `rng`, even when the catalog is empty, so that the position
/// in the stream only depends on the number of picks.
///
/// Return None if the catalog is empty.
pub fn pick<'a>(rng: &mut DeterministicRng, catalog: &'a [Resource]) -> Option<&'a Resource> {
    let draw: f64 = rng.next_f64();
    let total: u32 = catalog.iter().map(|r| r.rarity.weight()).sum();
    if total == 0 {
        return None;
    }

    let mut index: u32 = (draw * f64::from(total)).floor() as u32;
    for resource in catalog {
        let weight: u32 = resource.rarity.weight();
        if index < weight {
            return Some(resource);
        }
        index -= weight;
    }
    catalog.last()
}

/// Return the probability to pick each rarity from the catalog.
pub fn rarity_distribution(catalog: &[Resource]) -> Vec<(Rarity, f64)> {
    let total: u32 = catalog.iter().map(|r| r.rarity.weight()).sum();
    Rarity::ALL
        .iter()
        .map(|rarity| {
            let weight: u32 = catalog
                .iter()
                .filter(|r| r.rarity == *rarity)
                .map(|r| r.rarity.weight())
                .sum();
            let p: f64 = if total == 0 {
                0.0
            } else {
                f64::from(weight) / f64::from(total)
            };
            (*rarity, p)
        })
        .collect()
}
