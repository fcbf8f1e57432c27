/*
settings.rs

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

//! Load the generation settings.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::PathBuf;

use crate::config::Settings;

/// Object to load the settings.
pub struct SettingsFile {
    /// Path to the settings file.
    path: PathBuf,
}

impl SettingsFile {
    /// Create a [`SettingsFile`] object.
    pub fn new(path: PathBuf) -> Self {
        debug!("Settings file: {path:?}");
        Self { path }
    }

    /// Retrieve the [`Settings`] object from the file.
    ///
    /// Return None if the file does not exist.
    pub fn get_settings(&self) -> Result<Option<Settings>, Box<dyn Error>> {
        let file: File = match File::open(&self.path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let settings: Settings = serde_json::from_reader(reader)?;
        Ok(Some(settings))
    }
}
