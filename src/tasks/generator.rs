/*
generator.rs

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

//! Generate random tasks.
//!
//! Random sequences are drawn from the tier distribution until one of them is valid. After
//! [`MAX_ATTEMPTS`] unsuccessful attempts, the generator gives up and returns a predefined task,
//! so that a task is always produced.

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::{self, DifficultyTier};
use super::operators::{NUM_NUMBERS, NumberSequence, OperatorAssignment};
use super::solver;
use super::validator::{self, Validation};

/// Default number of sequences to try before using the fallback task.
pub const MAX_ATTEMPTS: usize = 1000;

/// Numbers of the fallback task.
pub const FALLBACK_NUMBERS: [i64; NUM_NUMBERS] = [1, 2, 3, 4, 5];

/// Task presented to the player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MathTask {
    /// Numbers, in order.
    pub numbers: NumberSequence,

    /// Operators of the unique solution.
    pub operators: OperatorAssignment,

    /// Result of the unique solution.
    pub result: i64,

    /// Tier the task was generated for.
    pub difficulty: DifficultyTier,
}

impl MathTask {
    /// Return the fallback task for the tier.
    ///
    /// The result is computed from the fallback numbers and operators: `1 + 2 - 3 * 4 / 5 = 0`.
    pub fn fallback(difficulty: DifficultyTier) -> Self {
        let numbers = NumberSequence::new(FALLBACK_NUMBERS);
        let operators = OperatorAssignment::DEFAULT;
        let result: i64 = solver::evaluate(&numbers, &operators)
            .as_integer()
            .unwrap_or_default();
        Self {
            numbers,
            operators,
            result,
            difficulty,
        }
    }
}

/// Statistics about the last generation.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    /// Number of sequences tried.
    pub attempts: usize,

    /// Whether the fallback task was returned.
    pub fallback: bool,
}

/// [`TaskGenerator`] object.
#[derive(Debug, Clone)]
pub struct TaskGenerator {
    /// Number of sequences to try before using the fallback task.
    max_attempts: usize,
}

impl Default for TaskGenerator {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS)
    }
}

impl TaskGenerator {
    /// Create the object.
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Return the number of sequences tried before using the fallback task.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generate a task for the tier.
    pub fn generate<R: Rng + ?Sized>(&self, tier: DifficultyTier, rng: &mut R) -> MathTask {
        self.generate_with_stats(tier, rng).0
    }

    /// Generate a task for the tier, and return statistics about the generation.
    pub fn generate_with_stats<R: Rng + ?Sized>(
        &self,
        tier: DifficultyTier,
        rng: &mut R,
    ) -> (MathTask, GenerationStats) {
        for attempt in 1..=self.max_attempts {
            let numbers: NumberSequence = Self::sample_numbers(tier, rng);
            let validation: Validation = validator::validate(&numbers, tier);
            if let Some(solution) = validation.solution() {
                debug!(
                    "{tier}: {numbers} -> {} = {} (attempt {attempt})",
                    solution.operators, solution.result
                );
                let task = MathTask {
                    numbers,
                    operators: solution.operators,
                    result: solution.result,
                    difficulty: tier,
                };
                return (
                    task,
                    GenerationStats {
                        attempts: attempt,
                        fallback: false,
                    },
                );
            }
        }

        warn!(
            "{tier}: no valid task after {} attempts, using the fallback task",
            self.max_attempts
        );
        (
            MathTask::fallback(tier),
            GenerationStats {
                attempts: self.max_attempts,
                fallback: true,
            },
        )
    }

    /// Draw a number sequence for the tier.
    ///
    /// For the tiers that require a negative number, if none was drawn, then a random position is
    /// replaced by a negative number.
    pub fn sample_numbers<R: Rng + ?Sized>(tier: DifficultyTier, rng: &mut R) -> NumberSequence {
        let mut numbers: [i64; NUM_NUMBERS] = [0; NUM_NUMBERS];
        for n in numbers.iter_mut() {
            *n = tier.sample_number(rng);
        }
        let mut numbers = NumberSequence::new(numbers);

        if tier.requires_negative() && !numbers.has_negative() {
            let position: usize = rng.random_range(0..NUM_NUMBERS);
            let value: i64 = -difficulty::sample_bands(&difficulty::NEGATIVE_BANDS, rng);
            debug!("    forcing {value} at position {position}");
            numbers.set(position, value);
        }
        numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn generated_tasks_are_valid() {
        let generator = TaskGenerator::default();
        let mut rng = Pcg64::seed_from_u64(2024);
        for tier in DifficultyTier::ALL {
            for _ in 0..5 {
                let (task, stats) = generator.generate_with_stats(tier, &mut rng);
                assert_eq!(task.difficulty, tier);
                assert!(stats.attempts >= 1 && stats.attempts <= MAX_ATTEMPTS);
                if stats.fallback {
                    assert_eq!(task, MathTask::fallback(tier));
                    continue;
                }
                let v: Validation = validator::validate(&task.numbers, tier);
                assert!(v.is_valid);
                assert_eq!(
                    solver::evaluate(&task.numbers, &task.operators).as_integer(),
                    Some(task.result)
                );
                if tier.requires_negative() {
                    assert!(task.numbers.has_negative());
                }
            }
        }
    }

    #[test]
    fn exhausted_generator_returns_fallback() {
        let generator = TaskGenerator::new(0);
        let mut rng = Pcg64::seed_from_u64(7);
        for tier in DifficultyTier::ALL {
            let (task, stats) = generator.generate_with_stats(tier, &mut rng);
            assert!(stats.fallback);
            assert_eq!(task.numbers.get(), &[1, 2, 3, 4, 5]);
            assert_eq!(task.operators, OperatorAssignment::DEFAULT);
            assert_eq!(task.result, 0);
            assert_eq!(task.difficulty, tier);
        }
    }

    #[test]
    fn same_rng_seed_gives_same_task() {
        let generator = TaskGenerator::default();
        let a: MathTask = generator.generate(DifficultyTier::Hard, &mut Pcg64::seed_from_u64(99));
        let b: MathTask = generator.generate(DifficultyTier::Hard, &mut Pcg64::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn negative_number_is_forced() {
        let mut rng = Pcg64::seed_from_u64(5);
        for _ in 0..1000 {
            for tier in [DifficultyTier::Hard, DifficultyTier::Expert] {
                let numbers: NumberSequence = TaskGenerator::sample_numbers(tier, &mut rng);
                assert!(numbers.has_negative());
                assert!(numbers.get().iter().all(|n| (-99..=99).contains(n)));
            }
            let numbers: NumberSequence =
                TaskGenerator::sample_numbers(DifficultyTier::Medium, &mut rng);
            assert!(!numbers.has_negative());
        }
    }
}
