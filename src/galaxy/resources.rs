/*
resources.rs

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

//! Resource catalog.
//!
//! The catalog is provided by the caller (usually loaded from a JSON file, see
//! [`crate::loader::catalog`]). The generators only read it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource category.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Ore,
    Gas,
    Crystal,
    Liquid,
    Alloy,
    Organic,
    Energy,
    Currency,
}

/// Resource rarity, from the most common to the rarest.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// The five rarities, from the most common to the rarest.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Relative weight of the rarity when picking a resource.
    pub fn weight(&self) -> u32 {
        match self {
            Rarity::Common => 50,
            Rarity::Uncommon => 30,
            Rarity::Rare => 12,
            Rarity::Epic => 6,
            Rarity::Legendary => 2,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Catalog entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Resource {
    /// Identifier, stable across catalog loads.
    pub id: u32,

    /// Display name.
    pub name: String,

    pub category: Category,

    pub rarity: Rarity,

    /// Base trading value.
    pub base_value: f64,
}

impl Resource {
    /// Create a [`Resource`] object.
    pub fn new(id: u32, name: &str, category: Category, rarity: Rarity, base_value: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            category,
            rarity,
            base_value,
        }
    }
}

/// Return the built-in catalog, used when no catalog file is provided.
///
/// The catalog has at least one resource per rarity.
pub fn default_catalog() -> Vec<Resource> {
    vec![
        Resource::new(1, "Iron Ore", Category::Ore, Rarity::Common, 5.0),
        Resource::new(2, "Hydrogen", Category::Gas, Rarity::Common, 3.0),
        Resource::new(3, "Water Ice", Category::Liquid, Rarity::Common, 4.0),
        Resource::new(4, "Copper Ore", Category::Ore, Rarity::Uncommon, 12.0),
        Resource::new(5, "Biomass", Category::Organic, Rarity::Uncommon, 10.0),
        Resource::new(6, "Helium-3", Category::Gas, Rarity::Rare, 40.0),
        Resource::new(7, "Titanium Alloy", Category::Alloy, Rarity::Rare, 55.0),
        Resource::new(8, "Quartz Crystal", Category::Crystal, Rarity::Epic, 120.0),
        Resource::new(9, "Plasma Cell", Category::Energy, Rarity::Epic, 150.0),
        Resource::new(10, "Star Credit", Category::Currency, Rarity::Legendary, 500.0),
    ]
}
