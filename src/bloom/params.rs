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

//! Closed-form parameter sizing for keyed Bloom filters.

use std::f64::consts::LN_2;

/// Suggests the number of derivation keys for a filter of `m` bits that
/// will hold at most `max_n` elements.
///
/// Formula: `k = ceil(m * ln(2) / max_n)`.
///
/// `max_n` must be positive; `max_n = 0` divides by zero and yields a
/// meaningless result. [`FilterBuilder`](super::FilterBuilder) validates
/// its inputs before calling this.
///
/// # Examples
///
/// ```
/// use otpbloom::bloom::optimal_k;
///
/// assert_eq!(optimal_k(1000, 100), 7);
/// ```
pub fn optimal_k(m: u64, max_n: u64) -> u64 {
    (m as f64 * LN_2 / max_n as f64).ceil() as u64
}

/// Suggests the number of bits for a filter holding at most `max_n`
/// elements with target false-positive probability `p` in (0, 1).
///
/// Formula: `m = ceil(-max_n * ln(p) * ln(2))`. This deliberately keeps
/// the sizing curve of the original wire-compatible implementation rather
/// than the textbook `-n * ln(p) / ln(2)^2` form; filters sized by either
/// formula work, but this one reproduces existing deployments' sizes.
///
/// # Examples
///
/// ```
/// use otpbloom::bloom::optimal_m;
///
/// assert_eq!(optimal_m(100, 0.01), 320);
/// ```
pub fn optimal_m(max_n: u64, p: f64) -> u64 {
    (-(max_n as f64) * p.ln() * LN_2).ceil() as u64
}
