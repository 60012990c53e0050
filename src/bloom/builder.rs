// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::bloom::Filter;
use crate::bloom::params::optimal_k;
use crate::bloom::params::optimal_m;
use crate::random::RandomSource;
use crate::random::XorShift64;

/// Builder for creating [`Filter`] instances.
///
/// Provides two construction modes:
/// - [`with_accuracy()`](Self::with_accuracy): Specify expected items and
///   target false positive rate (recommended)
/// - [`with_size()`](Self::with_size): Specify exact bit count and key
///   count (manual)
///
/// Derivation keys are drawn once at [`build()`](Self::build) and never
/// regenerated. Without an explicit [`seed()`](Self::seed) the keys come
/// from a time-seeded generator, so two separately built filters are
/// almost certainly mutually incompatible; that is intentional, and
/// filters meant to be unioned must share a seed.
#[derive(Debug, Clone)]
pub struct FilterBuilder {
    num_bits: u64,
    num_keys: u64,
    seed: Option<u64>,
}

impl FilterBuilder {
    /// Creates a builder with optimal parameters for a target accuracy.
    ///
    /// Sizes the filter via [`optimal_m`] and [`optimal_k`] for `max_n`
    /// expected elements at false-positive probability `fpp`.
    ///
    /// # Panics
    ///
    /// Panics if `max_n` is 0 or `fpp` is not in (0.0, 1.0).
    ///
    /// # Examples
    ///
    /// ```
    /// # use otpbloom::bloom::FilterBuilder;
    /// let filter = FilterBuilder::with_accuracy(10_000, 0.01).build();
    /// assert!(filter.capacity() > 0);
    /// ```
    pub fn with_accuracy(max_n: u64, fpp: f64) -> Self {
        assert!(max_n > 0, "max_n must be greater than 0");
        assert!(
            fpp > 0.0 && fpp < 1.0,
            "fpp must be between 0.0 and 1.0 (exclusive)"
        );

        // A permissive fpp can size the filter below the structural floor.
        let num_bits = optimal_m(max_n, fpp).max(2);
        let num_keys = optimal_k(num_bits, max_n).max(1);

        FilterBuilder {
            num_bits,
            num_keys,
            seed: None,
        }
    }

    /// Creates a builder with manual size specification: `m` bits and `k`
    /// derivation keys.
    ///
    /// # Panics
    ///
    /// Panics if `m <= 1` or `k == 0` — construction preconditions are
    /// programmer errors, not recoverable runtime conditions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use otpbloom::bloom::FilterBuilder;
    /// let filter = FilterBuilder::with_size(1024, 4).build();
    /// assert_eq!(filter.capacity(), 1024);
    /// assert_eq!(filter.num_keys(), 4);
    /// ```
    pub fn with_size(m: u64, k: u64) -> Self {
        assert!(m > 1, "m (number of bits in the filter) must be > 1");
        assert!(k > 0, "k (number of derivation keys) must be > 0");

        FilterBuilder {
            num_bits: m,
            num_keys: k,
            seed: None,
        }
    }

    /// Sets a deterministic seed for derivation-key generation.
    ///
    /// Builders sharing a seed (and size) produce compatible filters;
    /// tests can use this to pin the exact derived bit indices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use otpbloom::bloom::FilterBuilder;
    /// let f1 = FilterBuilder::with_size(1024, 4).seed(42).build();
    /// let f2 = FilterBuilder::with_size(1024, 4).seed(42).build();
    /// assert!(f1.is_compatible(&f2));
    /// ```
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the filter, drawing keys from the configured seed or, when
    /// no seed was set, from a time-seeded generator.
    pub fn build(self) -> Filter {
        let mut rng = match self.seed {
            Some(seed) => XorShift64::seeded(seed),
            None => XorShift64::default(),
        };
        self.build_with_source(&mut rng)
    }

    /// Builds the filter, drawing keys from the provided random source.
    ///
    /// Overrides any configured [`seed()`](Self::seed).
    pub fn build_with_source<R: RandomSource>(self, rng: &mut R) -> Filter {
        let keys = (0..self.num_keys).map(|_| rng.next_u64()).collect();

        Filter {
            keys,
            bits: vec![0u64; self.num_bits.div_ceil(64) as usize],
            m: self.num_bits,
            n: 0,
        }
    }
}
