/*
solver.rs

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

//! Evaluate a number sequence for a given operator assignment.
//!
//! The evaluation is strictly left to right, without operator precedence:
//! `((((n0 op0 n1) op1 n2) op2 n3) op3 n4)`.

use serde::{Deserialize, Serialize};

use super::operators::{NumberSequence, OperatorAssignment};

/// Result of an evaluation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Evaluation {
    /// Final value. Infinite or NaN after a division by zero.
    pub result: f64,

    /// Whether the final value is a whole number.
    pub is_integer: bool,
}

impl Evaluation {
    /// Return the result as an integer, or None if it is not a whole number.
    pub fn as_integer(&self) -> Option<i64> {
        if self.is_integer {
            Some(self.result as i64)
        } else {
            None
        }
    }
}

/// Whether the value is finite and has no fractional part.
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Evaluate the numbers with the operators, from left to right.
pub fn evaluate(numbers: &NumberSequence, operators: &OperatorAssignment) -> Evaluation {
    let values = numbers.get();
    let result: f64 = operators
        .get()
        .iter()
        .zip(&values[1..])
        .fold(values[0] as f64, |acc, (op, n)| op.apply(acc, *n as f64));

    Evaluation {
        result,
        is_integer: is_integer(result),
    }
}
