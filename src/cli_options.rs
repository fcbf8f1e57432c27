/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers who tune the generators, and for scripts that
//! prepare the tasks of the day.
//! All the generated objects are printed in JSON format.
//!
//! # Examples
//!
//! List the difficulty tiers:
//!
//! ```
//! $ mathgalaxy --ls
//! easy    Level 1: positive single-digit numbers (1 to 9)
//! medium  Level 2: positive one and two-digit numbers (1 to 99)
//! hard    Level 3: positive and negative one and two-digit numbers (-99 to 99)
//! expert  Level 4: positive and negative one and two-digit numbers (-99 to 99), negative results allowed
//! ```
//!
//! Generate three tasks at the hard difficulty level and print some statistics:
//!
//! ```
//! $ mathgalaxy -t -c 3 -f hard -s
//! ```
//!
//! Evaluate a sequence with the given operators:
//!
//! ```
//! $ mathgalaxy --check 4,5,6,7,8 -o '+,-,*,/'
//! ```
//!
//! Print the entities of the chunk at (1, -2) for a world seed:
//!
//! ```
//! $ mathgalaxy -g SEED-12345 --chunk 1,-2
//! ```

use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use log::{debug, warn};
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use mathgalaxy::config::{COPYRIGHT_NOTICE, Settings};
use mathgalaxy::galaxy::cache::ChunkCache;
use mathgalaxy::galaxy::chunk::ChunkCoord;
use mathgalaxy::galaxy::entities;
use mathgalaxy::galaxy::resources::{self, Resource};
use mathgalaxy::galaxy::rng;
use mathgalaxy::loader::catalog::CatalogFile;
use mathgalaxy::loader::settings::SettingsFile;
use mathgalaxy::tasks::daily::DailyTasks;
use mathgalaxy::tasks::difficulty::DifficultyTier;
use mathgalaxy::tasks::generator::{GenerationStats, MathTask, TaskGenerator};
use mathgalaxy::tasks::operators::{NumberSequence, Operator, OperatorAssignment};
use mathgalaxy::tasks::solver::{self, Evaluation};
use mathgalaxy::tasks::validator::{self, Validation};

/// Generate Math Game tasks and Idle Space Game chunks.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the difficulty tiers
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Generate random tasks
    #[arg(short, long, default_value_t = false)]
    tasks: bool,

    /// Difficulty tier (easy, medium, hard, expert, or 1 to 4)
    #[arg(value_enum, short = 'f', long, default_value_t = DifficultyTier::Easy)]
    difficulty: DifficultyTier,

    /// Number of tasks to generate
    #[arg(short, long, default_value_t = 1, requires = "tasks")]
    count: usize,

    /// Print some statistics after generating the tasks
    #[arg(short, long, default_value_t = false, requires = "tasks")]
    summary: bool,

    /// Print the tasks of the day (YYYY-MM-DD, today by default)
    #[arg(long, num_args = 0..=1, default_missing_value = "today", value_name = "DATE")]
    daily: Option<String>,

    /// Evaluate and validate a sequence of five comma-separated numbers
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, value_name = "NUMBERS")]
    check: Option<Vec<i64>>,

    /// Comma-separated operators for --check, such as "+,-,*,/"
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        requires = "check"
    )]
    operators: Option<Vec<Operator>>,

    /// Print the entities of a chunk for the given world seed
    #[arg(short, long, value_name = "SEED")]
    galaxy: Option<String>,

    /// Chunk coordinates, such as "1,-2" (default "0,0")
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        requires = "galaxy",
        conflicts_with = "legacy"
    )]
    chunk: Option<Vec<i32>>,

    /// Generate the single-shot galaxy instead of a chunk
    #[arg(long, default_value_t = false, requires = "galaxy")]
    legacy: bool,

    /// Print a new random world seed
    #[arg(long, default_value_t = false)]
    new_seed: bool,

    /// Resource catalog file (JSON)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Settings file (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Output of the --check option.
#[derive(Serialize)]
struct CheckReport {
    numbers: NumberSequence,
    difficulty: DifficultyTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation: Option<Evaluation>,
    validation: Validation,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let settings: Settings = match load_settings(args.config.as_ref()) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("Error: {msg}");
            return 1;
        }
    };
    debug!("Settings: {settings:?}");

    //
    // List the difficulty tiers
    //
    if args.ls {
        for tier in DifficultyTier::ALL {
            println!("{:<8}{}", tier.key(), tier.description());
        }
        return 0;
    }

    if args.new_seed {
        println!("{}", rng::new_world_seed(&mut rand::rng()));
        return 0;
    }

    if let Some(numbers) = &args.check {
        return check(numbers, args.operators.as_deref(), args.difficulty);
    }

    if let Some(date) = &args.daily {
        return daily(date, &settings.tasks.generator());
    }

    if args.tasks {
        return tasks(&args, &settings.tasks.generator());
    }

    if let Some(seed) = &args.galaxy {
        return galaxy(seed, &args, &settings);
    }

    let _ = Args::command().print_help();
    1
}

/// Load the settings file, or return the default settings.
fn load_settings(path: Option<&PathBuf>) -> Result<Settings, String> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    match SettingsFile::new(path.clone()).get_settings() {
        Ok(Some(s)) => Ok(s),
        Ok(None) => {
            warn!("Settings file {path:?} not found, using the default settings");
            Ok(Settings::default())
        }
        Err(e) => Err(format!("{path:?}: {e}")),
    }
}

/// Load the catalog file, or return the built-in catalog.
fn load_catalog(path: Option<&PathBuf>) -> Result<Vec<Resource>, String> {
    let Some(path) = path else {
        return Ok(resources::default_catalog());
    };
    match CatalogFile::new(path.clone()).get_catalog() {
        Ok(Some(c)) => Ok(c),
        Ok(None) => Err(format!("{path:?}: file not found")),
        Err(e) => Err(format!("{path:?}: {e}")),
    }
}

/// Print an object in JSON format.
fn print_json<T: Serialize>(value: &T) -> u8 {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{s}");
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Process the --check option.
fn check(numbers: &[i64], operators: Option<&[Operator]>, difficulty: DifficultyTier) -> u8 {
    let numbers: NumberSequence = match NumberSequence::try_from(numbers) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Error: --check: {e}");
            return 1;
        }
    };

    let evaluation: Option<Evaluation> = match operators {
        Some(ops) => match OperatorAssignment::try_from(ops.to_vec()) {
            Ok(assignment) => Some(solver::evaluate(&numbers, &assignment)),
            Err(e) => {
                eprintln!("Error: --operators: {e}");
                return 1;
            }
        },
        None => None,
    };

    print_json(&CheckReport {
        numbers,
        difficulty,
        evaluation,
        validation: validator::validate(&numbers, difficulty),
    })
}

/// Process the --daily option.
fn daily(date: &str, generator: &TaskGenerator) -> u8 {
    let daily_tasks: DailyTasks = if date == "today" {
        DailyTasks::today(generator)
    } else {
        match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(d) => DailyTasks::for_date(generator, d),
            Err(e) => {
                eprintln!("Error: --daily {date}: {e}");
                return 1;
            }
        }
    };
    print_json(&daily_tasks)
}

/// Process the --tasks option.
fn tasks(args: &Args, generator: &TaskGenerator) -> u8 {
    let mut thread_rng = rand::rng();
    let mut task_list: Vec<MathTask> = Vec::with_capacity(args.count);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut attempts: usize = 0;
    let mut fallbacks: usize = 0;

    for i in 0..args.count {
        debug!("Iteration {i}");
        let start: Instant = Instant::now();
        let (task, stats): (MathTask, GenerationStats) =
            generator.generate_with_stats(args.difficulty, &mut thread_rng);
        let duration: f32 = start.elapsed().as_secs_f32();
        total += duration;
        if duration > max {
            max = duration;
        }
        attempts += stats.attempts;
        if stats.fallback {
            fallbacks += 1;
        }
        task_list.push(task);
    }

    let ret: u8 = print_json(&task_list);

    // Print some stats
    if args.summary {
        let count: usize = args.count.max(1);
        eprintln!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
  average attempts = {}
         fallbacks = {}",
            total,
            total / count as f32,
            max,
            attempts / count,
            fallbacks
        );
    }
    ret
}

/// Process the --galaxy option.
fn galaxy(seed: &str, args: &Args, settings: &Settings) -> u8 {
    let catalog: Vec<Resource> = match load_catalog(args.catalog.as_ref()) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("Error: {msg}");
            return 1;
        }
    };

    if args.legacy {
        return match entities::generate_galaxy(seed, &catalog) {
            Ok(galaxy) => print_json(&galaxy),
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        };
    }

    let coord: ChunkCoord = match args.chunk.as_deref() {
        None => ChunkCoord::default(),
        Some([x, y]) => ChunkCoord::new(*x, *y),
        Some(_) => {
            eprintln!("Error: --chunk requires two coordinates, such as 1,-2");
            return 1;
        }
    };

    let mut cache = ChunkCache::new(
        seed,
        catalog,
        settings.galaxy.chunk_size(),
        settings.galaxy.entities_per_chunk,
    );
    match cache.get_or_generate(coord) {
        Ok(chunk) => print_json(&chunk),
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}
