/*
tasks.rs

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

//! Generate and validate arithmetic tasks.
//!
//! A task is a sequence of five numbers, see [`operators::NumberSequence`].
//! The player must place the four operators `+`, `-`, `*`, and `/` between the numbers, each
//! operator exactly once, so that the left-to-right evaluation gives the smallest possible
//! integer.
//!
//! The modules build on each other:
//!
//! * [`solver::evaluate`] computes the value of a sequence for one
//!   [`operators::OperatorAssignment`].
//! * [`enumerator::enumerate_solutions`] tries the 24 possible assignments and keeps the ones
//!   that give an integer.
//! * [`validator::validate`] decides whether a sequence is a fair task for a
//!   [`difficulty::DifficultyTier`]: exactly one assignment must give an accepted integer, and
//!   that integer must be the smallest one.
//! * [`generator::TaskGenerator`] samples random sequences until one of them is valid.
//!   If it takes too many attempts, then a predefined task is returned instead.
//! * [`daily::DailyTasks`] groups one task per difficulty tier for a given day.
//! * [`attempt::check_attempt`] scores a player's assignment against a generated task.

pub mod attempt;
pub mod daily;
pub mod difficulty;
pub mod enumerator;
pub mod generator;
pub mod operators;
pub mod solver;
pub mod validator;
