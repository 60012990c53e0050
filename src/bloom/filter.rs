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

use crate::bloom::FilterBuilder;
use crate::error::Error;
use crate::hash::FilterHash;

/// A keyed Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (inserted items always return `true`)
/// - Tunable false positive rate
/// - Constant space usage
///
/// Use [`FilterBuilder`] (or [`Filter::new`]) to construct instances.
///
/// The filter exclusively owns its bit array and key sequence; [`Clone`]
/// and [`union`](Filter::union) produce deep copies with no aliasing to
/// the originals. The structure is not thread-safe.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Derivation keys, one per simulated hash function (k).
    /// Generated at construction, immutable afterwards.
    pub(super) keys: Vec<u64>,
    /// Bit array packed into u64 words.
    /// Length = ceil(m / 64)
    pub(super) bits: Vec<u64>,
    /// Total number of bits the filter recognizes (m).
    pub(super) m: u64,
    /// Number of insertions performed (n), counting repeats.
    pub(super) n: u64,
}

impl Filter {
    /// Constructs an empty filter with `m` bits and `k` randomly drawn
    /// derivation keys.
    ///
    /// Shorthand for `FilterBuilder::with_size(m, k).build()`; use the
    /// builder directly when a deterministic [`seed`](FilterBuilder::seed)
    /// is needed.
    ///
    /// # Panics
    ///
    /// Panics if `m <= 1` or `k == 0`. These are programmer errors, not
    /// recoverable runtime conditions.
    ///
    /// # Examples
    ///
    /// ```
    /// use otpbloom::bloom::Filter;
    ///
    /// let mut filter = Filter::new(1024, 4);
    /// filter.add(42_u64);
    /// assert!(filter.contains(&42_u64));
    /// ```
    pub fn new(m: u64, k: u64) -> Filter {
        FilterBuilder::with_size(m, k).build()
    }

    // ========================================================================
    // Query Operations
    // ========================================================================

    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Item was **possibly** inserted (or false positive)
    /// - `false`: Item was **definitely not** inserted
    ///
    /// # Examples
    ///
    /// ```
    /// # use otpbloom::bloom::FilterBuilder;
    /// let mut filter = FilterBuilder::with_accuracy(100, 0.01).build();
    /// filter.add("apple");
    ///
    /// assert!(filter.contains(&"apple")); // true - was inserted
    /// assert!(!filter.contains(&"grape")); // false - never inserted (probably)
    /// ```
    pub fn contains<T: FilterHash + ?Sized>(&self, item: &T) -> bool {
        let raw_hash = item.filter_hash();
        for key in &self.keys {
            if !self.get_bit(raw_hash ^ key) {
                return false;
            }
        }
        true // maybe
    }

    // ========================================================================
    // Update Operations
    // ========================================================================

    /// Inserts an item into the filter.
    ///
    /// Sets the `k` derived bits and increments the insertion counter
    /// unconditionally, even if every bit was already set; `n` counts
    /// `add` calls, not distinct elements. After insertion,
    /// `contains(item)` always returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use otpbloom::bloom::FilterBuilder;
    /// let mut filter = FilterBuilder::with_accuracy(100, 0.01).build();
    ///
    /// filter.add("apple");
    /// filter.add("apple");
    ///
    /// assert!(filter.contains(&"apple"));
    /// assert_eq!(filter.num_insertions(), 2);
    /// ```
    pub fn add<T: FilterHash>(&mut self, item: T) {
        let raw_hash = item.filter_hash();
        for i in 0..self.keys.len() {
            let index = raw_hash ^ self.keys[i];
            self.set_bit(index);
        }
        self.n += 1;
    }

    // ========================================================================
    // Set Operations
    // ========================================================================

    /// Checks if two filters are compatible for union.
    ///
    /// Filters are compatible if they have identical capacity and an
    /// identical derivation-key sequence (element-wise, order-sensitive).
    /// Filters built without a shared explicit seed are almost certainly
    /// incompatible.
    pub fn is_compatible(&self, other: &Filter) -> bool {
        self.m == other.m && self.keys == other.keys
    }

    /// Returns a new filter recognizing items from either input (union).
    ///
    /// The result is a deep copy of `self` whose bit array has been
    /// bitwise-ORed, word by word, with `other`'s. Neither input is
    /// mutated. The result's insertion counter is inherited from `self`
    /// unmodified; union does not attempt to estimate the combined count.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IncompatibleFilters`](crate::error::ErrorKind::IncompatibleFilters)
    /// if the filters differ in capacity, key count, or key values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use otpbloom::bloom::FilterBuilder;
    /// let mut f1 = FilterBuilder::with_accuracy(100, 0.01).seed(123).build();
    /// let mut f2 = FilterBuilder::with_accuracy(100, 0.01).seed(123).build();
    ///
    /// f1.add("a");
    /// f2.add("b");
    ///
    /// let merged = f1.union(&f2).unwrap();
    /// assert!(merged.contains(&"a"));
    /// assert!(merged.contains(&"b"));
    /// ```
    pub fn union(&self, other: &Filter) -> Result<Filter, Error> {
        if !self.is_compatible(other) {
            return Err(Error::incompatible("union"));
        }

        let mut out = self.clone();
        for (word, other_word) in out.bits.iter_mut().zip(&other.bits) {
            *word |= *other_word;
        }
        Ok(out)
    }

    // ========================================================================
    // Statistics and Properties
    // ========================================================================

    /// Returns the total number of bits in the filter (m).
    pub fn capacity(&self) -> u64 {
        self.m
    }

    /// Returns the number of derivation keys (k).
    pub fn num_keys(&self) -> u64 {
        self.keys.len() as u64
    }

    /// Returns how many insertions have been performed (n).
    ///
    /// Repeated insertion of the same element counts every time; this is
    /// an `add`-call counter, not a distinct-element cardinality.
    pub fn num_insertions(&self) -> u64 {
        self.n
    }

    /// Returns the derivation-key sequence.
    pub fn derivation_keys(&self) -> &[u64] {
        &self.keys
    }

    /// Returns the exact fraction of bits set to one.
    ///
    /// Exhaustively popcounts the whole bit array; cost is proportional to
    /// `m`. Intended as a diagnostic, not a hot-path operation.
    pub fn precise_filled_ratio(&self) -> f64 {
        let ones: u64 = self.bits.iter().map(|word| word.count_ones() as u64).sum();
        ones as f64 / self.m as f64
    }

    /// Returns an analytic upper bound on the false-positive probability.
    ///
    /// Formula: `(1 - e^(-k*(n+0.5)/(m-1)))^k`, driven by the insertion
    /// counter `n` rather than the measured fill ratio. The `m - 1`
    /// denominator is safe because construction rejects `m <= 1`.
    pub fn false_positive_probability(&self) -> f64 {
        let k = self.num_keys() as f64;
        let n = self.n as f64;
        let m = self.m as f64;
        (1.0 - (-k * (n + 0.5) / (m - 1.0)).exp()).powf(k)
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Reads the bit at logical index `i`.
    ///
    /// Indices at or beyond `m` wrap via `i % m` before addressing. The
    /// wraparound is a documented policy of the bit accessors, not an
    /// error path; derived indices span the full u64 range.
    fn get_bit(&self, i: u64) -> bool {
        let i = if i >= self.m { i % self.m } else { i };
        (self.bits[(i >> 6) as usize] >> (i & 0x3f)) & 1 != 0
    }

    /// Sets the bit at logical index `i`, with the same wraparound policy
    /// as [`get_bit`](Self::get_bit). Setting an already-set bit is a
    /// no-op observably.
    fn set_bit(&mut self, i: u64) {
        let i = if i >= self.m { i % self.m } else { i };
        self.bits[(i >> 6) as usize] |= 1 << (i & 0x3f);
    }
}
