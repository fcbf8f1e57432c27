/*
rng.rs

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

//! Seeded random stream.
//!
//! The seed string is hashed with SHA-256, and the digest seeds a PCG64 generator. Both
//! algorithms are fixed, so the stream does not depend on the platform or on the process.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64;
use sha2::{Digest, Sha256};

/// Random stream that always produces the same values for the same seed string.
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    inner: Pcg64,
}

impl DeterministicRng {
    /// Create a [`DeterministicRng`] object from a seed string.
    pub fn new(seed: &str) -> Self {
        let digest: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
        Self {
            inner: Pcg64::from_seed(digest),
        }
    }

    /// Return the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

impl RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}

/// Create a world seed for a new player.
///
/// The seed is stored by the caller. The generators only use it as an opaque string.
pub fn new_world_seed<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("SEED-{}", rng.random_range(0..1_000_000_000u64))
}
