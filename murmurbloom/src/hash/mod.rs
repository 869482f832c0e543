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

//! The 32-bit MurmurHash2 primitive and the chained multi-hash derivation built on it.

mod murmurhash;

use std::iter::FusedIterator;

pub use self::murmurhash::decode_i32_le;
pub use self::murmurhash::encode_i32_le;
pub use self::murmurhash::murmurhash2;
pub use self::murmurhash::M;
pub use self::murmurhash::R;

/// Seed of the first round of a [`ChainedHashes`] sequence.
pub const INITIAL_SEED: i32 = 0;

/// Derives `rounds` hash values for one key by chained reseeding.
///
/// Round 0 hashes the key with [`INITIAL_SEED`]; every later round hashes the same key again,
/// seeded with the previous round's output. The rounds are therefore not independent, and the
/// sequence must be reproduced exactly for bits written by one run to be found by another.
///
/// Exactly `rounds` hashes are computed; nothing is evaluated ahead of demand.
///
/// # Examples
///
/// ```
/// # use murmurbloom::hash::{murmurhash2, ChainedHashes};
/// let hashes: Vec<i32> = ChainedHashes::new(b"hello", 2).collect();
/// assert_eq!(hashes[0], murmurhash2(b"hello", 0));
/// assert_eq!(hashes[1], murmurhash2(b"hello", hashes[0]));
/// ```
#[derive(Debug, Clone)]
pub struct ChainedHashes<'a> {
    bytes: &'a [u8],
    seed: i32,
    remaining: usize,
}

impl<'a> ChainedHashes<'a> {
    /// Creates the chain for `bytes` with `rounds` rounds.
    pub fn new(bytes: &'a [u8], rounds: usize) -> Self {
        ChainedHashes {
            bytes,
            seed: INITIAL_SEED,
            remaining: rounds,
        }
    }
}

impl Iterator for ChainedHashes<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let hash = murmurhash2(self.bytes, self.seed);
        self.seed = hash;
        Some(hash)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ChainedHashes<'_> {}

impl FusedIterator for ChainedHashes<'_> {}
