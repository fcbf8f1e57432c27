/*
attempt.rs

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

//! Check the operators that a player chose for a task.

use serde::{Deserialize, Serialize};

use super::generator::MathTask;
use super::operators::OperatorAssignment;
use super::solver::{self, Evaluation};

/// Outcome of a player's attempt.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Attempt {
    /// Operators chosen by the player.
    pub operators: OperatorAssignment,

    /// Value of the task numbers with these operators.
    pub result: f64,

    /// Whether the value is a whole number.
    pub is_integer: bool,

    /// Whether the value is the task result.
    pub is_correct: bool,
}

/// Evaluate the task numbers with the player's operators and compare the value to the task
/// result.
///
/// Another assignment that happens to give the same integer is also correct.
pub fn check_attempt(task: &MathTask, operators: &OperatorAssignment) -> Attempt {
    let evaluation: Evaluation = solver::evaluate(&task.numbers, operators);
    Attempt {
        operators: *operators,
        result: evaluation.result,
        is_integer: evaluation.is_integer,
        is_correct: evaluation.as_integer() == Some(task.result),
    }
}
