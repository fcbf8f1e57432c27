/*
daily.rs

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

//! Tasks of the day.
//!
//! Every day, one task is generated per difficulty tier.
//! [`DailyTasks::for_date`] seeds the random stream with the date so that all the callers get
//! the same tasks for the same day.

use chrono::{Local, NaiveDate};
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyTier;
use super::generator::{MathTask, TaskGenerator};
use crate::galaxy::rng::DeterministicRng;

/// One task per difficulty tier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyTasks {
    pub easy: MathTask,
    pub medium: MathTask,
    pub hard: MathTask,
    pub expert: MathTask,
}

impl DailyTasks {
    /// Generate the four tasks in rank order from the provided random stream.
    pub fn generate<R: Rng + ?Sized>(generator: &TaskGenerator, rng: &mut R) -> Self {
        Self {
            easy: generator.generate(DifficultyTier::Easy, rng),
            medium: generator.generate(DifficultyTier::Medium, rng),
            hard: generator.generate(DifficultyTier::Hard, rng),
            expert: generator.generate(DifficultyTier::Expert, rng),
        }
    }

    /// Generate the tasks for the given day.
    pub fn for_date(generator: &TaskGenerator, date: NaiveDate) -> Self {
        info!("Generating the tasks for {date}");
        let mut rng = DeterministicRng::new(&Self::seed(date));
        Self::generate(generator, &mut rng)
    }

    /// Generate the tasks for the current local day.
    pub fn today(generator: &TaskGenerator) -> Self {
        Self::for_date(generator, Local::now().date_naive())
    }

    /// Return the seed string for the given day.
    pub fn seed(date: NaiveDate) -> String {
        format!("mathgame-{}", date.format("%Y-%m-%d"))
    }

    /// Return the task for the tier.
    pub fn get(&self, tier: DifficultyTier) -> &MathTask {
        match tier {
            DifficultyTier::Easy => &self.easy,
            DifficultyTier::Medium => &self.medium,
            DifficultyTier::Hard => &self.hard,
            DifficultyTier::Expert => &self.expert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_gives_same_tasks() {
        let generator = TaskGenerator::default();
        let a = DailyTasks::for_date(&generator, date(2025, 3, 14));
        let b = DailyTasks::for_date(&generator, date(2025, 3, 14));
        assert_eq!(a, b);
    }

    #[test]
    fn tasks_match_their_tier() {
        let generator = TaskGenerator::default();
        let daily = DailyTasks::for_date(&generator, date(2025, 1, 1));
        for tier in DifficultyTier::ALL {
            assert_eq!(daily.get(tier).difficulty, tier);
        }
    }

    #[test]
    fn seed_contains_the_date() {
        assert_eq!(DailyTasks::seed(date(2025, 7, 3)), "mathgame-2025-07-03");
    }

    #[test]
    fn json_uses_tier_keys() {
        let generator = TaskGenerator::new(0);
        let daily = DailyTasks::for_date(&generator, date(2025, 1, 2));
        let value: serde_json::Value = serde_json::to_value(&daily).unwrap();
        for tier in DifficultyTier::ALL {
            assert_eq!(value[tier.key()]["difficulty"], tier.key());
            assert_eq!(value[tier.key()]["numbers"], serde_json::json!([1, 2, 3, 4, 5]));
        }
    }
}
