/*
operators.rs

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

//! Operators, operator assignments, and number sequences.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Number of values in a task.
pub const NUM_NUMBERS: usize = 5;

/// Number of operator slots between the values.
pub const NUM_OPERATORS: usize = NUM_NUMBERS - 1;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum TaskError {
    /// At least one operator slot is empty.
    IncompleteAssignment,

    /// The same operator is used in two slots.
    DuplicateOperator(Operator),

    /// The number of values or operators is not the expected one.
    WrongLength { expected: usize, found: usize },

    /// The string is not one of `+`, `-`, `*`, or `/`.
    UnknownOperator(String),

    /// The difficulty rank is not between 1 and 4.
    UnknownDifficulty(u8),
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskError::IncompleteAssignment => write!(f, "some operator slots are empty"),
            TaskError::DuplicateOperator(op) => write!(f, "operator {op} is used more than once"),
            TaskError::WrongLength { expected, found } => {
                write!(f, "expected {expected} values, found {found}")
            }
            TaskError::UnknownOperator(s) => write!(f, "unknown operator `{s}`"),
            TaskError::UnknownDifficulty(rank) => {
                write!(f, "unknown difficulty {rank} (must be between 1 and 4)")
            }
        }
    }
}

impl Error for TaskError {}

/// Binary arithmetic operator.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// The four operators, in the order used to enumerate the assignments.
    pub const ALL: [Operator; NUM_OPERATORS] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Return the symbol of the operator.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Combine two values.
    ///
    /// Division is a real division. Dividing by zero returns an infinite or NaN value.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(TaskError::UnknownOperator(other.to_string())),
        }
    }
}

/// Ordered list of the four operators, one per slot between two consecutive numbers.
///
/// Each operator appears exactly once. The constructors reject any other combination, so an
/// [`OperatorAssignment`] object is always complete and valid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "Vec<Operator>", into = "Vec<Operator>")]
pub struct OperatorAssignment([Operator; NUM_OPERATORS]);

impl Default for OperatorAssignment {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl OperatorAssignment {
    /// The `+ - * /` assignment.
    pub const DEFAULT: OperatorAssignment = OperatorAssignment(Operator::ALL);

    /// Create an [`OperatorAssignment`] object.
    ///
    /// # Errors
    ///
    /// Return [`TaskError::DuplicateOperator`] if an operator is used twice.
    pub fn new(operators: [Operator; NUM_OPERATORS]) -> Result<Self, TaskError> {
        for (i, op) in operators.iter().enumerate() {
            if operators[i + 1..].contains(op) {
                return Err(TaskError::DuplicateOperator(*op));
            }
        }
        Ok(Self(operators))
    }

    /// Create an [`OperatorAssignment`] object from the slots that a player fills one by one.
    ///
    /// # Errors
    ///
    /// Return an error if the number of slots is wrong, if a slot is empty, or if an operator is
    /// used twice.
    pub fn from_slots(slots: &[Option<Operator>]) -> Result<Self, TaskError> {
        if slots.len() != NUM_OPERATORS {
            return Err(TaskError::WrongLength {
                expected: NUM_OPERATORS,
                found: slots.len(),
            });
        }
        let mut operators: [Operator; NUM_OPERATORS] = Operator::ALL;
        for (slot, op) in slots.iter().zip(operators.iter_mut()) {
            *op = slot.ok_or(TaskError::IncompleteAssignment)?;
        }
        Self::new(operators)
    }

    /// Return the operators.
    pub fn get(&self) -> &[Operator; NUM_OPERATORS] {
        &self.0
    }

    /// Return the 24 assignments, each one exactly once.
    ///
    /// The assignments are in lexicographic order of [`Operator::ALL`], so the first one is
    /// [`OperatorAssignment::DEFAULT`].
    pub fn permutations() -> Vec<OperatorAssignment> {
        permute(Vec::with_capacity(NUM_OPERATORS), Operator::ALL.to_vec())
            .into_iter()
            .filter_map(|p| <[Operator; NUM_OPERATORS]>::try_from(p).ok())
            .map(OperatorAssignment)
            .collect()
    }
}

/// Recursively build the permutations that start with `prefix` and continue with the operators in
/// `remaining`. Every call works on its own copies.
fn permute(prefix: Vec<Operator>, remaining: Vec<Operator>) -> Vec<Vec<Operator>> {
    if remaining.is_empty() {
        return vec![prefix];
    }
    remaining
        .iter()
        .enumerate()
        .flat_map(|(i, op)| {
            let mut next_prefix: Vec<Operator> = prefix.clone();
            next_prefix.push(*op);
            let mut next_remaining: Vec<Operator> = remaining.clone();
            next_remaining.remove(i);
            permute(next_prefix, next_remaining)
        })
        .collect()
}

impl TryFrom<Vec<Operator>> for OperatorAssignment {
    type Error = TaskError;

    fn try_from(operators: Vec<Operator>) -> Result<Self, Self::Error> {
        let found: usize = operators.len();
        let operators: [Operator; NUM_OPERATORS] =
            operators.try_into().map_err(|_| TaskError::WrongLength {
                expected: NUM_OPERATORS,
                found,
            })?;
        Self::new(operators)
    }
}

impl From<OperatorAssignment> for Vec<Operator> {
    fn from(assignment: OperatorAssignment) -> Self {
        assignment.0.to_vec()
    }
}

impl fmt::Display for OperatorAssignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbols: Vec<String> = self.0.iter().map(|op| op.to_string()).collect();
        write!(f, "{}", symbols.join(" "))
    }
}

/// Ordered list of the five numbers of a task.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct NumberSequence([i64; NUM_NUMBERS]);

impl NumberSequence {
    /// Create a [`NumberSequence`] object.
    pub fn new(numbers: [i64; NUM_NUMBERS]) -> Self {
        Self(numbers)
    }

    /// Return the numbers.
    pub fn get(&self) -> &[i64; NUM_NUMBERS] {
        &self.0
    }

    /// Replace the number at the given position.
    pub fn set(&mut self, position: usize, value: i64) {
        if let Some(n) = self.0.get_mut(position) {
            *n = value;
        }
    }

    /// Whether at least one number is negative.
    pub fn has_negative(&self) -> bool {
        self.0.iter().any(|n| *n < 0)
    }
}

impl TryFrom<&[i64]> for NumberSequence {
    type Error = TaskError;

    fn try_from(numbers: &[i64]) -> Result<Self, Self::Error> {
        let numbers: [i64; NUM_NUMBERS] =
            numbers.try_into().map_err(|_| TaskError::WrongLength {
                expected: NUM_NUMBERS,
                found: numbers.len(),
            })?;
        Ok(Self(numbers))
    }
}

impl fmt::Display for NumberSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let numbers: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", numbers.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn permutations_are_complete_and_distinct() {
        let all: Vec<OperatorAssignment> = OperatorAssignment::permutations();
        assert_eq!(all.len(), 24);
        let unique: HashSet<OperatorAssignment> = all.iter().copied().collect();
        assert_eq!(unique.len(), 24);
        assert_eq!(all[0], OperatorAssignment::DEFAULT);
    }

    #[test]
    fn duplicate_operator_is_rejected() {
        let ret = OperatorAssignment::new([
            Operator::Add,
            Operator::Add,
            Operator::Multiply,
            Operator::Divide,
        ]);
        assert_eq!(ret, Err(TaskError::DuplicateOperator(Operator::Add)));
    }

    #[test]
    fn empty_slot_is_rejected() {
        let slots = [Some(Operator::Add), None, Some(Operator::Multiply), None];
        assert_eq!(
            OperatorAssignment::from_slots(&slots),
            Err(TaskError::IncompleteAssignment)
        );
        let slots = [Some(Operator::Add), Some(Operator::Divide)];
        assert_eq!(
            OperatorAssignment::from_slots(&slots),
            Err(TaskError::WrongLength {
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn operators_parse_and_display() {
        let ops: Vec<Operator> = "+,-,*,/"
            .split(',')
            .map(|s| s.parse::<Operator>())
            .collect::<Result<_, _>>()
            .unwrap();
        let assignment = OperatorAssignment::try_from(ops).unwrap();
        assert_eq!(assignment.to_string(), "+ - * /");
        assert!("%".parse::<Operator>().is_err());
        assert!("x".parse::<Operator>().is_err());
        assert!(":".parse::<Operator>().is_err());
    }

    #[test]
    fn sequence_length_is_checked() {
        let short: &[i64] = &[1, 2, 3];
        assert_eq!(
            NumberSequence::try_from(short),
            Err(TaskError::WrongLength {
                expected: 5,
                found: 3
            })
        );
        let ok: &[i64] = &[1, -2, 3, 4, 5];
        assert!(NumberSequence::try_from(ok).unwrap().has_negative());
    }

    #[test]
    fn assignment_json_is_validated() {
        let json = r#"["+","-","*","/"]"#;
        let a: OperatorAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(a, OperatorAssignment::DEFAULT);
        assert_eq!(serde_json::to_string(&a).unwrap(), json);
        assert!(serde_json::from_str::<OperatorAssignment>(r#"["+","+","*","/"]"#).is_err());
    }
}
