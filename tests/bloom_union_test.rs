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
use otpbloom::bloom::FilterBuilder;
use otpbloom::error::ErrorKind;

#[test]
fn test_union_recognizes_elements_from_both_sides() {
    let mut f1 = FilterBuilder::with_size(4096, 4).seed(7).build();
    let mut f2 = FilterBuilder::with_size(4096, 4).seed(7).build();

    for i in 0..100_u64 {
        f1.add(i);
    }
    for i in 100..200_u64 {
        f2.add(i);
    }

    let merged = f1.union(&f2).unwrap();
    for i in 0..200_u64 {
        assert!(merged.contains(&i), "union lost element {i}");
    }
}

#[test]
fn test_union_never_removes_positives() {
    let mut f1 = FilterBuilder::with_size(2048, 3).seed(9).build();
    let mut f2 = FilterBuilder::with_size(2048, 3).seed(9).build();

    f1.add("only-left");
    f2.add("only-right");
    let merged = f1.union(&f2).unwrap();

    for candidate in ["only-left", "only-right", "neither"] {
        if f1.contains(&candidate) || f2.contains(&candidate) {
            assert!(merged.contains(&candidate));
        }
    }
}

#[test]
fn test_union_leaves_inputs_untouched_and_inherits_n() {
    let mut f1 = FilterBuilder::with_size(1024, 4).seed(1).build();
    let mut f2 = FilterBuilder::with_size(1024, 4).seed(1).build();

    for i in 0..10_u64 {
        f1.add(i);
    }
    for i in 50..80_u64 {
        f2.add(i);
    }
    let f1_before = f1.clone();
    let f2_before = f2.clone();

    let merged = f1.union(&f2).unwrap();

    assert_eq!(f1, f1_before);
    assert_eq!(f2, f2_before);
    // union makes no attempt to estimate combined cardinality
    assert_eq!(merged.num_insertions(), 10);
    assert_eq!(merged.capacity(), 1024);
    assert_eq!(merged.derivation_keys(), f1.derivation_keys());
}

#[test]
fn test_union_result_is_independently_owned() {
    let mut f1 = FilterBuilder::with_size(1024, 2).seed(4).build();
    let f2 = FilterBuilder::with_size(1024, 2).seed(4).build();

    let merged = f1.union(&f2).unwrap();
    f1.add("mutate-after-union");

    assert!(!merged.contains(&"mutate-after-union") || f2.contains(&"mutate-after-union"));
    assert_eq!(merged.num_insertions(), 0);
}

#[test]
fn test_union_rejects_differing_capacity() {
    let f1 = FilterBuilder::with_size(1024, 4).seed(2).build();
    let f2 = FilterBuilder::with_size(2048, 4).seed(2).build();

    let err = f1.union(&f2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleFilters);
    assert_that!(err.message(), contains_substring("union"));
}

#[test]
fn test_union_rejects_differing_key_count() {
    let f1 = FilterBuilder::with_size(1024, 4).seed(2).build();
    let f2 = FilterBuilder::with_size(1024, 5).seed(2).build();

    let err = f1.union(&f2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleFilters);
}

#[test]
fn test_union_rejects_differing_key_values() {
    let f1 = FilterBuilder::with_size(1024, 4).seed(2).build();
    let f2 = FilterBuilder::with_size(1024, 4).seed(3).build();

    assert!(!f1.is_compatible(&f2));
    let err = f1.union(&f2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleFilters);
}

#[test]
fn test_separately_built_filters_are_incompatible() {
    let f1 = FilterBuilder::with_size(1024, 4).build();
    let f2 = FilterBuilder::with_size(1024, 4).build();

    assert!(!f1.is_compatible(&f2));
    assert!(f1.union(&f2).is_err());
}

#[test]
fn test_clone_is_a_deep_copy() {
    let mut original = FilterBuilder::with_size(1024, 4).seed(8).build();
    original.add("shared");

    let mut copy = original.clone();
    assert_eq!(copy, original);
    assert!(copy.is_compatible(&original));

    copy.add("copy-only");
    assert_eq!(original.num_insertions(), 1);
    assert_eq!(copy.num_insertions(), 2);
    assert!(!original.contains(&"copy-only"));
}
