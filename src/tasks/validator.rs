/*
validator.rs

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

//! Decide whether a number sequence is a valid task for a difficulty tier.
//!
//! A sequence is valid when exactly one assignment gives an integer accepted by the tier, and
//! when that integer is the smallest accepted one. For the expert tier, no other assignment may
//! give the same value either.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::difficulty::{DifficultyTier, ResultRule, UniquenessRule};
use super::enumerator::{self, Solution};
use super::operators::{NumberSequence, OperatorAssignment};
use super::solver::Evaluation;

/// Reason why a sequence is rejected.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// No assignment gives an accepted integer.
    NoSolution,

    /// Several assignments give an accepted integer.
    Ambiguous(usize),

    /// The solution is not the smallest accepted result.
    NotMinimal,

    /// Several assignments give the solution value.
    DuplicateAssignment,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::NoSolution => write!(f, "no solution"),
            Rejection::Ambiguous(count) => write!(f, "{count} solutions instead of one"),
            Rejection::NotMinimal => write!(f, "the solution is not the smallest result"),
            Rejection::DuplicateAssignment => {
                write!(f, "several assignments give the same result")
            }
        }
    }
}

/// Outcome of a validation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Validation {
    /// Whether the sequence can be presented as a task.
    pub is_valid: bool,

    /// Why the sequence is not valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,

    /// Accepted solutions, sorted by result.
    pub solutions: Vec<Solution>,
}

impl Validation {
    fn rejected(rejection: Rejection, solutions: Vec<Solution>) -> Self {
        debug!("    rejected: {rejection}");
        Self {
            is_valid: false,
            rejection: Some(rejection),
            solutions,
        }
    }

    /// Return the unique solution of a valid sequence.
    pub fn solution(&self) -> Option<&Solution> {
        if self.is_valid {
            self.solutions.first()
        } else {
            None
        }
    }
}

/// Validate the sequence for the tier.
pub fn validate(numbers: &NumberSequence, tier: DifficultyTier) -> Validation {
    let rule: ResultRule = tier.result_rule();

    debug!("Validating {numbers} for {tier}");
    let solutions: Vec<Solution> = enumerator::enumerate_accepted(numbers, |r| rule.accepts(r));
    match solutions.len() {
        0 => return Validation::rejected(Rejection::NoSolution, solutions),
        1 => (),
        n => return Validation::rejected(Rejection::Ambiguous(n), solutions),
    }
    let best: Solution = solutions[0];
    let evaluations: Vec<(OperatorAssignment, Evaluation)> = enumerator::evaluate_all(numbers);

    // Distinct accepted values over all the assignments
    let results: BTreeSet<i64> = evaluations
        .iter()
        .filter_map(|(_, evaluation)| evaluation.as_integer())
        .filter(|result| rule.accepts(*result))
        .collect();
    if results.first() != Some(&best.result) {
        return Validation::rejected(Rejection::NotMinimal, solutions);
    }

    if tier.uniqueness() == UniquenessRule::Assignment
        && count_result(&evaluations, best.result) > 1
    {
        return Validation::rejected(Rejection::DuplicateAssignment, solutions);
    }

    debug!("    valid: {} = {}", best.operators, best.result);
    Validation {
        is_valid: true,
        rejection: None,
        solutions,
    }
}

/// Return the number of assignments that give exactly `value`.
fn count_result(evaluations: &[(OperatorAssignment, Evaluation)], value: i64) -> usize {
    evaluations
        .iter()
        .filter(|(_, evaluation)| evaluation.as_integer() == Some(value))
        .count()
}
