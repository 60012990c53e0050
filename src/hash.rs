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

//! Element hashing contract.
//!
//! The filter consumes exactly one stable 64-bit hash per element and never
//! hashes beyond the XOR projection against its derivation keys. Types that
//! already are 64-bit values hash to themselves; byte-like types hash
//! through MurmurHash3 x64-128.

const MURMUR_SEED: u32 = 0;

/// A single, stable 64-bit hash value for an element.
///
/// Implementations must return the same value for the same logical element
/// across the lifetime of a filter and across serialize/deserialize, or
/// membership queries lose their no-false-negative guarantee.
pub trait FilterHash {
    /// Returns the element's 64-bit hash value.
    fn filter_hash(&self) -> u64;
}

impl FilterHash for u64 {
    fn filter_hash(&self) -> u64 {
        *self
    }
}

impl FilterHash for [u8] {
    fn filter_hash(&self) -> u64 {
        let (h1, _) = mur3::murmurhash3_x64_128(self, MURMUR_SEED);
        h1
    }
}

impl FilterHash for Vec<u8> {
    fn filter_hash(&self) -> u64 {
        self.as_slice().filter_hash()
    }
}

impl FilterHash for str {
    fn filter_hash(&self) -> u64 {
        self.as_bytes().filter_hash()
    }
}

impl FilterHash for String {
    fn filter_hash(&self) -> u64 {
        self.as_str().filter_hash()
    }
}

impl<T: FilterHash + ?Sized> FilterHash for &T {
    fn filter_hash(&self) -> u64 {
        (**self).filter_hash()
    }
}
