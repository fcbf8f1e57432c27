/*
difficulty.rs

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

//! Difficulty tiers.
//!
//! Each tier defines how the numbers are sampled, which results are accepted, and how strict the
//! uniqueness check is.

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::operators::TaskError;

/// Range of values, selected with a given probability.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Band {
    /// Probability to select the band.
    pub probability: f64,

    /// Smallest value.
    pub low: i64,

    /// Largest value.
    pub high: i64,

    /// Whether the value is negated with a 50% probability.
    pub mirrored: bool,
}

impl Band {
    const fn new(probability: f64, low: i64, high: i64, mirrored: bool) -> Self {
        Self {
            probability,
            low,
            high,
            mirrored,
        }
    }

    /// Draw a value from the band.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let value: i64 = rng.random_range(self.low..=self.high);
        if self.mirrored && rng.random_bool(0.5) {
            -value
        } else {
            value
        }
    }
}

/// Select a band according to the band probabilities, and then draw a value from it.
pub fn sample_bands<R: Rng + ?Sized>(bands: &[Band], rng: &mut R) -> i64 {
    let roll: f64 = rng.random();
    let mut cumulative: f64 = 0.0;
    let band: Option<&Band> = bands
        .iter()
        .find(|b| {
            cumulative += b.probability;
            roll < cumulative
        })
        .or_else(|| bands.last());
    match band {
        Some(b) => b.sample(rng),
        None => 0,
    }
}

const EASY_BANDS: [Band; 2] = [Band::new(0.7, 1, 3, false), Band::new(0.3, 4, 9, false)];

const MEDIUM_BANDS: [Band; 4] = [
    Band::new(0.4, 1, 3, false),
    Band::new(0.4, 4, 9, false),
    Band::new(0.15, 10, 59, false),
    Band::new(0.05, 60, 99, false),
];

// The smallest band spans zero. The other bands are mirrored.
const SIGNED_BANDS: [Band; 4] = [
    Band::new(0.4, -3, 3, false),
    Band::new(0.4, 4, 9, true),
    Band::new(0.15, 10, 59, true),
    Band::new(0.05, 60, 99, true),
];

/// Bands for the negative number forced into tier 3 and 4 sequences.
/// The value drawn from these bands is negated.
pub const NEGATIVE_BANDS: [Band; 4] = [
    Band::new(0.4, 1, 3, false),
    Band::new(0.4, 4, 9, false),
    Band::new(0.15, 10, 59, false),
    Band::new(0.05, 60, 99, false),
];

/// Which integer results are accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResultRule {
    /// Only results greater than zero.
    Positive,

    /// All results.
    Any,
}

impl ResultRule {
    /// Whether the result is accepted.
    pub fn accepts(&self, result: i64) -> bool {
        match self {
            ResultRule::Positive => result > 0,
            ResultRule::Any => true,
        }
    }
}

/// How strict the uniqueness check is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UniquenessRule {
    /// The accepted result must be unique.
    Value,

    /// The accepted result must be unique, and no other assignment may give the same value.
    Assignment,
}

/// Puzzle difficulty tier.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    Ord,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    /// Positive single digits.
    #[default]
    #[value(alias = "1")]
    Easy = 1,

    /// Positive numbers up to 99.
    #[value(alias = "2")]
    Medium = 2,

    /// Positive and negative numbers, positive result.
    #[value(alias = "3")]
    Hard = 3,

    /// Positive and negative numbers, any result.
    #[value(alias = "4")]
    Expert = 4,
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl DifficultyTier {
    /// The four tiers in rank order.
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
        DifficultyTier::Expert,
    ];

    /// Return the tier for a rank between 1 and 4.
    pub fn from_rank(rank: u8) -> Result<Self, TaskError> {
        Self::from_repr(rank).ok_or(TaskError::UnknownDifficulty(rank))
    }

    /// Return the rank of the tier, from 1 to 4.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Return the key used to store the daily task for the tier.
    pub fn key(&self) -> &'static str {
        match self {
            DifficultyTier::Easy => "easy",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Hard => "hard",
            DifficultyTier::Expert => "expert",
        }
    }

    /// Return a short description of the numbers used by the tier.
    pub fn description(&self) -> &'static str {
        match self {
            DifficultyTier::Easy => "Level 1: positive single-digit numbers (1 to 9)",
            DifficultyTier::Medium => "Level 2: positive one and two-digit numbers (1 to 99)",
            DifficultyTier::Hard => {
                "Level 3: positive and negative one and two-digit numbers (-99 to 99)"
            }
            DifficultyTier::Expert => {
                "Level 4: positive and negative one and two-digit numbers (-99 to 99), negative results allowed"
            }
        }
    }

    /// Return the bands the numbers are drawn from.
    pub fn bands(&self) -> &'static [Band] {
        match self {
            DifficultyTier::Easy => &EASY_BANDS,
            DifficultyTier::Medium => &MEDIUM_BANDS,
            DifficultyTier::Hard | DifficultyTier::Expert => &SIGNED_BANDS,
        }
    }

    /// Return the rule for accepting results.
    pub fn result_rule(&self) -> ResultRule {
        match self {
            DifficultyTier::Expert => ResultRule::Any,
            _ => ResultRule::Positive,
        }
    }

    /// Return the uniqueness rule.
    pub fn uniqueness(&self) -> UniquenessRule {
        match self {
            DifficultyTier::Expert => UniquenessRule::Assignment,
            _ => UniquenessRule::Value,
        }
    }

    /// Whether the sequences must contain at least one negative number.
    pub fn requires_negative(&self) -> bool {
        matches!(self, DifficultyTier::Hard | DifficultyTier::Expert)
    }

    /// Draw one number.
    pub fn sample_number<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        sample_bands(self.bands(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn band_probabilities_sum_to_one() {
        for tier in DifficultyTier::ALL {
            let sum: f64 = tier.bands().iter().map(|b| b.probability).sum();
            assert!((sum - 1.0).abs() < 1e-9, "{tier}: {sum}");
        }
        let sum: f64 = NEGATIVE_BANDS.iter().map(|b| b.probability).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ranks_round_trip() {
        for tier in DifficultyTier::ALL {
            assert_eq!(DifficultyTier::from_rank(tier.rank()), Ok(tier));
        }
        assert_eq!(
            DifficultyTier::from_rank(0),
            Err(TaskError::UnknownDifficulty(0))
        );
        assert_eq!(
            DifficultyTier::from_rank(5),
            Err(TaskError::UnknownDifficulty(5))
        );
    }

    #[test]
    fn easy_numbers_are_single_digits() {
        let mut rng = Pcg64::seed_from_u64(1);
        let mut small: usize = 0;
        for _ in 0..10_000 {
            let n: i64 = DifficultyTier::Easy.sample_number(&mut rng);
            assert!((1..=9).contains(&n));
            if n <= 3 {
                small += 1;
            }
        }
        // 70% of the numbers are between 1 and 3
        assert!((6_700..=7_300).contains(&small), "{small}");
    }

    #[test]
    fn medium_numbers_are_positive() {
        let mut rng = Pcg64::seed_from_u64(2);
        for _ in 0..10_000 {
            let n: i64 = DifficultyTier::Medium.sample_number(&mut rng);
            assert!((1..=99).contains(&n));
        }
    }

    #[test]
    fn signed_numbers_cover_both_signs() {
        let mut rng = Pcg64::seed_from_u64(3);
        let numbers: Vec<i64> = (0..10_000)
            .map(|_| DifficultyTier::Hard.sample_number(&mut rng))
            .collect();
        assert!(numbers.iter().all(|n| (-99..=99).contains(n)));
        assert!(numbers.iter().any(|n| *n < -9));
        assert!(numbers.iter().any(|n| *n > 9));
        assert!(numbers.contains(&0));
    }

    #[test]
    fn result_rules() {
        assert!(!DifficultyTier::Hard.result_rule().accepts(0));
        assert!(DifficultyTier::Hard.result_rule().accepts(1));
        assert!(DifficultyTier::Expert.result_rule().accepts(-5));
        assert_eq!(
            DifficultyTier::Expert.uniqueness(),
            UniquenessRule::Assignment
        );
        assert_eq!(DifficultyTier::Hard.uniqueness(), UniquenessRule::Value);
    }
}
