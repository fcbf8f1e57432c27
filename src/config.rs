/*
config.rs

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

//! Build constants and generation settings.
//!
//! The [`Settings`] object is loaded from a JSON file, see [`crate::loader::settings`].
//! Missing fields take their default values, so an empty `{}` file is valid.

use serde::{Deserialize, Serialize};

use crate::galaxy::chunk::{CHUNK_HEIGHT, CHUNK_WIDTH, ChunkSize};
use crate::galaxy::entities::ENTITIES_PER_CHUNK;
use crate::tasks::generator::{MAX_ATTEMPTS, TaskGenerator};

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Settings for the task generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TaskSettings {
    /// Number of sequences to try before using the fallback task.
    pub max_attempts: usize,
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl TaskSettings {
    /// Create a [`TaskGenerator`] object with these settings.
    pub fn generator(&self) -> TaskGenerator {
        TaskGenerator::new(self.max_attempts)
    }
}

/// Settings for the galaxy generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GalaxySettings {
    pub chunk_width: u32,
    pub chunk_height: u32,

    /// Number of entities generated per chunk.
    pub entities_per_chunk: usize,
}

impl Default for GalaxySettings {
    fn default() -> Self {
        Self {
            chunk_width: CHUNK_WIDTH,
            chunk_height: CHUNK_HEIGHT,
            entities_per_chunk: ENTITIES_PER_CHUNK,
        }
    }
}

impl GalaxySettings {
    /// Return the chunk size.
    pub fn chunk_size(&self) -> ChunkSize {
        ChunkSize::new(self.chunk_width, self.chunk_height)
    }
}

/// All the settings.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub tasks: TaskSettings,
    pub galaxy: GalaxySettings,
}
