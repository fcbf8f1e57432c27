/*
enumerator.rs

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

//! Try all the operator assignments for a number sequence.

use log::debug;

use super::operators::{NumberSequence, OperatorAssignment};
use super::solver::{self, Evaluation};
use serde::{Deserialize, Serialize};

/// Operator assignment that gives an integer, and that integer.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Operators, one per slot.
    pub operators: OperatorAssignment,

    /// Integer result.
    pub result: i64,
}

/// Evaluate the sequence for each of the 24 assignments.
pub fn evaluate_all(numbers: &NumberSequence) -> Vec<(OperatorAssignment, Evaluation)> {
    OperatorAssignment::permutations()
        .into_iter()
        .map(|ops| (ops, solver::evaluate(numbers, &ops)))
        .collect()
}

/// Return the assignments that give an integer, sorted by result.
pub fn enumerate_solutions(numbers: &NumberSequence) -> Vec<Solution> {
    enumerate_accepted(numbers, |_| true)
}

/// Return the assignments that give an integer accepted by `accept`, sorted by result.
///
/// Assignments with the same result keep the enumeration order.
pub fn enumerate_accepted<F>(numbers: &NumberSequence, accept: F) -> Vec<Solution>
where
    F: Fn(i64) -> bool,
{
    let mut solutions: Vec<Solution> = evaluate_all(numbers)
        .into_iter()
        .filter_map(|(operators, evaluation)| {
            evaluation
                .as_integer()
                .filter(|result| accept(*result))
                .map(|result| Solution { operators, result })
        })
        .collect();
    solutions.sort_by_key(|s| s.result);
    debug!("{numbers}: {} integer solutions", solutions.len());
    solutions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::solver::evaluate;

    #[test]
    fn all_assignments_are_evaluated() {
        let numbers = NumberSequence::new([4, 5, 6, 7, 8]);
        assert_eq!(evaluate_all(&numbers).len(), 24);
    }

    #[test]
    fn solutions_are_the_integer_assignments() {
        let numbers = NumberSequence::new([6, 3, 2, 4, 1]);
        let solutions: Vec<Solution> = enumerate_solutions(&numbers);
        assert!(solutions.len() <= 24);

        let expected: usize = OperatorAssignment::permutations()
            .iter()
            .filter(|ops| evaluate(&numbers, ops).is_integer)
            .count();
        assert_eq!(solutions.len(), expected);
        for s in &solutions {
            assert_eq!(evaluate(&numbers, &s.operators).as_integer(), Some(s.result));
        }
    }

    #[test]
    fn solutions_are_sorted() {
        let numbers = NumberSequence::new([12, 6, 3, 2, 1]);
        let solutions: Vec<Solution> = enumerate_solutions(&numbers);
        assert!(!solutions.is_empty());
        assert!(solutions.windows(2).all(|w| w[0].result <= w[1].result));
    }

    #[test]
    fn filter_is_applied() {
        let numbers = NumberSequence::new([12, 6, 3, 2, 1]);
        let positive: Vec<Solution> = enumerate_accepted(&numbers, |r| r > 0);
        assert!(positive.iter().all(|s| s.result > 0));
        let all: Vec<Solution> = enumerate_solutions(&numbers);
        assert_eq!(
            positive.len(),
            all.iter().filter(|s| s.result > 0).count()
        );
    }

    #[test]
    fn division_by_zero_never_gives_a_solution() {
        let numbers = NumberSequence::new([0, 0, 0, 0, 0]);
        // Every assignment divides by zero at some point
        assert!(enumerate_solutions(&numbers).is_empty());
    }
}
