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

//! A keyed Bloom filter: probabilistic set membership with no false
//! negatives and a bounded false-positive rate.
//!
//! Instead of computing K independent hash functions per element, the filter
//! stores K random 64-bit derivation keys and XORs each of them with a single
//! caller-supplied 64-bit hash, projecting one hash into K pseudo-independent
//! index streams (a one-time-pad-inspired technique).
//!
//! # Usage
//!
//! ```rust
//! use otpbloom::bloom::FilterBuilder;
//!
//! let mut filter = FilterBuilder::with_accuracy(10_000, 0.01).build();
//! filter.add("apple");
//!
//! assert!(filter.contains("apple"));
//! ```
//!
//! Filters built separately draw fresh random derivation keys and are
//! mutually incompatible; pass the same [`seed`](bloom::FilterBuilder::seed)
//! to both builders when filters must later be unioned or compared.
//!
//! The structure is not thread-safe. Callers that share a filter across
//! threads must impose external mutual exclusion.

pub mod bloom;
pub mod error;
pub mod hash;

mod codec;
mod random;

pub use self::random::RandomSource;
pub use self::random::XorShift64;
