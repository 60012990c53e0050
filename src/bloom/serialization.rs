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

//! Binary codec for [`Filter`].
//!
//! Fixed field order, every field little-endian, no magic number, version
//! tag, or checksum:
//!
//! | field | width          | meaning                 |
//! |-------|----------------|-------------------------|
//! | k     | 8 bytes        | count of derivation keys |
//! | n     | 8 bytes        | insertion counter       |
//! | m     | 8 bytes        | bit capacity            |
//! | keys  | k x 8 bytes    | derivation key values   |
//! | bits  | ceil(m/64) x 8 | bit-array words         |
//!
//! The bit-array length is always derived from `m` at decode; `n` is an
//! unrelated counter and plays no part in the layout's geometry.

use crate::bloom::Filter;
use crate::codec::FilterBytes;
use crate::codec::FilterSlice;
use crate::error::Error;
use crate::error::ErrorKind;

impl Filter {
    /// Serializes the filter to a byte vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use otpbloom::bloom::{Filter, FilterBuilder};
    /// let mut filter = FilterBuilder::with_size(1024, 4).seed(1).build();
    /// filter.add("test");
    ///
    /// let bytes = filter.serialize();
    /// let restored = Filter::deserialize(&bytes).unwrap();
    /// assert_eq!(filter, restored);
    /// assert!(restored.contains(&"test"));
    /// ```
    pub fn serialize(&self) -> Vec<u8> {
        let size = 8 * (3 + self.keys.len() + self.bits.len());
        let mut bytes = FilterBytes::with_capacity(size);

        bytes.write_u64_le(self.num_keys());
        bytes.write_u64_le(self.n);
        bytes.write_u64_le(self.m);
        for &key in &self.keys {
            bytes.write_u64_le(key);
        }
        for &word in &self.bits {
            bytes.write_u64_le(word);
        }

        bytes.into_bytes()
    }

    /// Deserializes a filter from bytes.
    ///
    /// Bytes beyond the announced layout are ignored. No partially
    /// constructed filter is exposed on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MalformedDeserializeData`] if the stream is
    /// truncated, announces a zero key count, or announces a capacity
    /// below 2 bits.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        let mut cursor = FilterSlice::new(bytes);

        let k = cursor
            .read_u64_le()
            .map_err(|_| Error::insufficient_data("key_count"))?;
        let n = cursor
            .read_u64_le()
            .map_err(|_| Error::insufficient_data("insertion_count"))?;
        let m = cursor
            .read_u64_le()
            .map_err(|_| Error::insufficient_data("capacity_bits"))?;

        if k == 0 {
            return Err(Error::new(
                ErrorKind::MalformedDeserializeData,
                "filter must have at least one derivation key",
            ));
        }
        if m <= 1 {
            return Err(Error::new(
                ErrorKind::MalformedDeserializeData,
                "filter capacity must be at least 2 bits",
            )
            .with_context("m", m));
        }

        // Bound the announced payload against the buffer before any
        // allocation happens; a forged header must not trigger one.
        let num_words = m.div_ceil(64);
        let payload_bytes = k
            .checked_add(num_words)
            .and_then(|words| words.checked_mul(8))
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::MalformedDeserializeData,
                    "announced key count and capacity overflow the layout size",
                )
                .with_context("k", k)
                .with_context("m", m)
            })?;
        if cursor.remaining() < payload_bytes {
            return Err(Error::insufficient_data("payload")
                .with_context("expected_bytes", payload_bytes)
                .with_context("remaining_bytes", cursor.remaining()));
        }

        let mut keys = Vec::with_capacity(k as usize);
        for _ in 0..k {
            keys.push(
                cursor
                    .read_u64_le()
                    .map_err(|_| Error::insufficient_data("keys"))?,
            );
        }

        let mut bits = vec![0u64; num_words as usize];
        for word in &mut bits {
            *word = cursor
                .read_u64_le()
                .map_err(|_| Error::insufficient_data("bit_array"))?;
        }

        Ok(Filter { keys, bits, m, n })
    }
}
