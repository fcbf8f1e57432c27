/*
lib.rs

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

//! Content generation for the Math Game and the Idle Space Game.
//!
//! * [`tasks`] generates and validates the arithmetic tasks of the Math Game.
//! * [`galaxy`] generates the planets and traders of the Idle Space Game map.
//!
//! All the generators are pure functions of their inputs. Random streams are always provided by
//! the caller or created from a seed for the duration of one call.

pub mod config;
pub mod galaxy;
pub mod loader;
pub mod tasks;
