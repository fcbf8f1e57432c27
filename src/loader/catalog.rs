/*
catalog.rs

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

//! Load the resource catalog.
//!
//! The catalog file is a JSON array of [`Resource`] objects.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::PathBuf;

use crate::galaxy::resources::Resource;

/// Object to load a resource catalog.
pub struct CatalogFile {
    /// Path to the catalog file.
    path: PathBuf,
}

impl CatalogFile {
    /// Create a [`CatalogFile`] object.
    pub fn new(path: PathBuf) -> Self {
        debug!("Catalog file: {path:?}");
        Self { path }
    }

    /// Retrieve the catalog from the file.
    ///
    /// Return the list of resources or None if the file does not exist.
    pub fn get_catalog(&self) -> Result<Option<Vec<Resource>>, Box<dyn Error>> {
        let file: File = match File::open(&self.path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let catalog: Vec<Resource> = serde_json::from_reader(reader)?;
        debug!("{} resources loaded", catalog.len());
        Ok(Some(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galaxy::resources::{Category, Rarity};
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        let mut p: PathBuf = std::env::temp_dir();
        p.push(format!("mathgalaxy-{}-{name}", std::process::id()));
        p
    }

    #[test]
    fn missing_file_is_none() {
        let f = CatalogFile::new(temp_path("missing-catalog.json"));
        assert!(f.get_catalog().unwrap().is_none());
    }

    #[test]
    fn catalog_is_loaded() {
        let path: PathBuf = temp_path("catalog.json");
        fs::write(
            &path,
            r#"[
                {"id": 1, "name": "Iron", "category": "Ore", "rarity": "Common", "base_value": 5},
                {"id": 2, "name": "Xenon", "category": "Gas", "rarity": "Legendary", "base_value": 900.5}
            ]"#,
        )
        .unwrap();
        let catalog: Vec<Resource> = CatalogFile::new(path.clone()).get_catalog().unwrap().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog[1],
            Resource::new(2, "Xenon", Category::Gas, Rarity::Legendary, 900.5)
        );
    }

    #[test]
    fn invalid_file_is_an_error() {
        let path: PathBuf = temp_path("bad-catalog.json");
        fs::write(&path, r#"[{"id": 1, "rarity": "Mythic"}]"#).unwrap();
        let ret = CatalogFile::new(path.clone()).get_catalog();
        fs::remove_file(&path).unwrap();
        assert!(ret.is_err());
    }
}
