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

//! Bloom Filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If an item was inserted, `contains()` will always return `true`
//! - **Possible false positives**: `contains()` may return `true` for items never inserted
//! - **Fixed size**: The bit array is allocated once and never resized
//! - **Insert only**: Bits are never cleared, so items cannot be removed
//!
//! # Usage
//!
//! ```rust
//! use murmurbloom::bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(64, 3);
//!
//! filter.insert("hello");
//! assert!(filter.contains("hello"));
//! assert!(!filter.contains("world"));
//!
//! println!("Buckets: {}", filter.num_buckets());
//! println!("Bits used: {}", filter.bits_used());
//! println!("Expected FPP after 10 items: {:.4}", filter.expected_fpp(10));
//! ```
//!
//! # Creating Filters
//!
//! ## By Size
//!
//! ```rust
//! # use murmurbloom::bloom::BloomFilterBuilder;
//! let filter = BloomFilterBuilder::with_size(
//!     95_851, // Requested number of bits
//!     7,      // Number of hash rounds
//! )
//! .build();
//! assert_eq!(filter.num_buckets(), 11_981);
//! ```
//!
//! ## By Accuracy
//!
//! ```rust
//! # use murmurbloom::bloom::BloomFilterBuilder;
//! let filter = BloomFilterBuilder::with_accuracy(
//!     10_000, // Expected max items
//!     0.01,   // Target false positive probability (1%)
//! )
//! .build();
//! ```
//!
//! # Implementation Details
//!
//! - Items are hashed through their [`CanonicalBytes`](crate::CanonicalBytes) encoding
//! - k hash values come from 32-bit MurmurHash2, each round seeded with the previous
//!   round's output (see [`ChainedHashes`](crate::hash::ChainedHashes))
//! - Bits are stored one byte per bucket; a hash `h` selects bucket `h mod buckets` and bit
//!   `h mod 8` within it
//! - The bucket count is always odd
//!
//! Not thread-safe for mutation: concurrent `insert` calls need external synchronization.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with allowable errors"

mod builder;
mod sketch;

pub use self::builder::BloomFilterBuilder;
pub use self::builder::BITS_PER_BUCKET;
pub use self::builder::MAX_NUM_BITS;
pub use self::builder::MAX_NUM_HASHES;
pub use self::builder::MIN_NUM_BITS;
pub use self::builder::MIN_NUM_HASHES;
pub use self::sketch::BloomFilter;
