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

//! Keyed Bloom filter for probabilistic set membership testing.
//!
//! The filter owns a word-packed bit array of `m` bits and `k` random
//! 64-bit derivation keys. An element's single 64-bit hash is XORed with
//! each key in turn to derive `k` bit positions, so one hash computation
//! stands in for `k` independent hash functions.
//!
//! # Usage
//!
//! ```rust
//! use otpbloom::bloom::FilterBuilder;
//!
//! let mut filter = FilterBuilder::with_size(1 << 20, 7).seed(42).build();
//!
//! filter.add("apple");
//! assert!(filter.contains("apple"));
//! assert_eq!(filter.num_insertions(), 1);
//! ```
//!
//! # Notes
//!
//! - A `true` from [`Filter::contains`] means *possibly present*; `false`
//!   is definite absence. False negatives cannot occur.
//! - Filters constructed without an explicit seed draw fresh random keys
//!   and are incompatible with every other filter.

mod builder;
mod filter;
mod params;
mod serialization;

pub use self::builder::FilterBuilder;
pub use self::filter::Filter;
pub use self::params::optimal_k;
pub use self::params::optimal_m;
