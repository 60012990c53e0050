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

use googletest::assert_that;
use googletest::prelude::contains_substring;
use otpbloom::bloom::Filter;
use otpbloom::bloom::FilterBuilder;
use otpbloom::error::ErrorKind;

fn read_u64_le(bytes: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(bytes[offset..offset + 8].try_into().unwrap())
}

#[test]
fn test_round_trip_reproduces_every_field() {
    let mut filter = FilterBuilder::with_size(1000, 6).seed(21).build();
    for i in 0..250_u64 {
        filter.add(i);
    }

    let bytes = filter.serialize();
    let restored = Filter::deserialize(&bytes).unwrap();

    assert_eq!(restored.capacity(), 1000);
    assert_eq!(restored.num_keys(), 6);
    assert_eq!(restored.num_insertions(), 250);
    assert_eq!(restored.derivation_keys(), filter.derivation_keys());
    assert_eq!(restored, filter);

    // byte-for-byte stable across a second round trip
    assert_eq!(restored.serialize(), bytes);
}

#[test]
fn test_round_trip_preserves_membership() {
    let mut filter = FilterBuilder::with_accuracy(5000, 0.001).build();
    for i in 0..5000_u64 {
        filter.add(i);
    }

    let restored = Filter::deserialize(&filter.serialize()).unwrap();
    for i in 0..5000_u64 {
        assert!(restored.contains(&i));
    }
}

#[test]
fn test_empty_filter_round_trip() {
    let filter = FilterBuilder::with_size(2, 1).seed(1).build();
    let restored = Filter::deserialize(&filter.serialize()).unwrap();

    assert_eq!(restored, filter);
    assert_eq!(restored.num_insertions(), 0);
    assert_eq!(restored.precise_filled_ratio(), 0.0);
}

#[test]
fn test_wire_layout_field_order_and_widths() {
    let mut filter = FilterBuilder::with_size(130, 2).seed(17).build();
    filter.add(0xfeed_u64);

    let bytes = filter.serialize();
    // k, n, m headers + 2 keys + ceil(130/64) = 3 words, all 8 bytes LE
    assert_eq!(bytes.len(), 8 * (3 + 2 + 3));

    assert_eq!(read_u64_le(&bytes, 0), 2); // k
    assert_eq!(read_u64_le(&bytes, 8), 1); // n
    assert_eq!(read_u64_le(&bytes, 16), 130); // m
    assert_eq!(read_u64_le(&bytes, 24), filter.derivation_keys()[0]);
    assert_eq!(read_u64_le(&bytes, 32), filter.derivation_keys()[1]);

    // the two derived bits land somewhere in the trailing three words
    let ones: u32 = (0..3)
        .map(|w| read_u64_le(&bytes, 40 + 8 * w).count_ones())
        .sum();
    assert_eq!(ones as f64 / 130.0, filter.precise_filled_ratio());
}

#[test]
fn test_deserialize_truncated_header() {
    let filter = FilterBuilder::with_size(128, 2).seed(5).build();
    let bytes = filter.serialize();

    let err = Filter::deserialize(&bytes[..12]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDeserializeData);
    assert_that!(format!("{err}"), contains_substring("insertion_count"));
}

#[test]
fn test_deserialize_truncated_payload() {
    let mut filter = FilterBuilder::with_size(512, 3).seed(5).build();
    filter.add("x");
    let bytes = filter.serialize();

    let err = Filter::deserialize(&bytes[..bytes.len() - 1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDeserializeData);
    assert_that!(format!("{err}"), contains_substring("payload"));
}

#[test]
fn test_deserialize_empty_input() {
    let err = Filter::deserialize(&[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDeserializeData);
    assert_that!(format!("{err}"), contains_substring("key_count"));
}

#[test]
fn test_serialized_filters_stay_compatible() {
    let mut f1 = FilterBuilder::with_size(4096, 4).seed(33).build();
    let mut f2 = Filter::deserialize(&f1.serialize()).unwrap();

    f1.add("left");
    f2.add("right");

    let merged = f1.union(&f2).unwrap();
    assert!(merged.contains(&"left"));
    assert!(merged.contains(&"right"));
}
