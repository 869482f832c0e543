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
use googletest::prelude::eq;
use googletest::prelude::ge;
use murmurbloom::hash::decode_i32_le;
use murmurbloom::hash::encode_i32_le;
use murmurbloom::hash::murmurhash2;
use murmurbloom::hash::ChainedHashes;

#[test]
fn test_pinned_values() {
    assert_that!(murmurhash2(&[], 0), eq(0));
    assert_that!(murmurhash2(&[], 1), eq(1540447798));
    assert_that!(murmurhash2(b"hello", 0), eq(1855578187));
    assert_that!(murmurhash2(b"hello", 42), eq(585947608));
}

#[test]
fn test_repeatable() {
    let key = b"The quick brown fox jumps over the lazy dog";
    let first = murmurhash2(key, 7);
    for _ in 0..100 {
        assert_that!(murmurhash2(key, 7), eq(first));
    }
}

#[test]
fn test_output_is_non_negative() {
    for len in 0..64usize {
        let key: Vec<u8> = (0..len).map(|i| (i * 37 + 200) as u8).collect();
        for seed in [0, 1, -1, i32::MIN, i32::MAX] {
            assert_that!(murmurhash2(&key, seed), ge(0));
        }
    }
}

#[test]
fn test_hash_of_encoded_int() {
    let bytes = encode_i32_le(0x6c6c_6568);
    assert_eq!(&bytes, b"hell");
    assert_that!(decode_i32_le(&bytes).unwrap(), eq(0x6c6c_6568));
    assert_that!(murmurhash2(&bytes, 0), eq(murmurhash2(b"hell", 0)));
}

#[test]
fn test_chain_matches_manual_reseeding() {
    let key = b"banana";
    let chain: Vec<i32> = ChainedHashes::new(key, 4).collect();

    let mut seed = 0;
    for hash in chain {
        let expected = murmurhash2(key, seed);
        assert_that!(hash, eq(expected));
        seed = expected;
    }
}
