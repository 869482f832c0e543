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

use tracing::debug;

use super::BloomFilter;
use crate::error::Error;

/// Number of bits in one bucket of the bit array.
pub const BITS_PER_BUCKET: usize = u8::BITS as usize;
/// Requested sizes below this are clamped up to it.
pub const MIN_NUM_BITS: usize = BITS_PER_BUCKET;
/// Largest accepted bit request.
pub const MAX_NUM_BITS: usize = i32::MAX as usize;
/// Fewest hash rounds per item.
pub const MIN_NUM_HASHES: u16 = 1;
/// Most hash rounds per item.
pub const MAX_NUM_HASHES: u16 = i16::MAX as u16;

/// Builder for creating [`BloomFilter`] instances.
///
/// Provides two construction modes:
/// - [`with_size()`](Self::with_size): Specify requested bit count and hash rounds (manual)
/// - [`with_accuracy()`](Self::with_accuracy): Specify target items and false positive rate
///
/// Both end in the same layout rule. The requested bit count is clamped up to
/// [`MIN_NUM_BITS`] and divided into byte buckets. When that bucket count is even, one more
/// bucket is added, so the bucket count is always odd. An odd bucket count is coprime with
/// [`BITS_PER_BUCKET`], which lets `(hash mod buckets, hash mod 8)` reach every bit.
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder {
    num_bits: usize,
    num_hashes: u16,
}

impl BloomFilterBuilder {
    /// Creates a builder with manual size specification.
    ///
    /// # Panics
    ///
    /// Panics if `num_bits` > [`MAX_NUM_BITS`] or `num_hashes` is outside
    /// [`MIN_NUM_HASHES`]..=[`MAX_NUM_HASHES`]. See [`try_with_size()`](Self::try_with_size)
    /// for a non-panicking variant.
    ///
    /// # Examples
    ///
    /// ```
    /// # use murmurbloom::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_size(16, 3).build();
    /// assert_eq!(filter.num_buckets(), 3); // 16 / 8 = 2 is even, so one more bucket
    /// ```
    pub fn with_size(num_bits: usize, num_hashes: u16) -> Self {
        Self::try_with_size(num_bits, num_hashes).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Creates a builder with manual size specification, validating the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) if
    /// `num_bits` > [`MAX_NUM_BITS`] or `num_hashes` is outside
    /// [`MIN_NUM_HASHES`]..=[`MAX_NUM_HASHES`].
    pub fn try_with_size(num_bits: usize, num_hashes: u16) -> Result<Self, Error> {
        if num_bits > MAX_NUM_BITS {
            return Err(Error::out_of_range("num_bits", 0, MAX_NUM_BITS)
                .with_context("num_bits", num_bits));
        }
        if !(MIN_NUM_HASHES..=MAX_NUM_HASHES).contains(&num_hashes) {
            return Err(
                Error::out_of_range("num_hashes", MIN_NUM_HASHES, MAX_NUM_HASHES)
                    .with_context("num_hashes", num_hashes),
            );
        }

        Ok(BloomFilterBuilder {
            num_bits,
            num_hashes,
        })
    }

    /// Creates a builder with optimal parameters for a target accuracy.
    ///
    /// # Arguments
    ///
    /// - `max_items`: Maximum expected number of distinct items
    /// - `fpp`: Target false positive probability (e.g., 0.01 for 1%)
    ///
    /// # Panics
    ///
    /// Panics if `max_items` is 0 or `fpp` is not in (0.0, 1.0].
    ///
    /// # Examples
    ///
    /// ```
    /// # use murmurbloom::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_accuracy(10_000, 0.01).build();
    /// assert_eq!(filter.num_hashes(), 7);
    /// ```
    pub fn with_accuracy(max_items: u64, fpp: f64) -> Self {
        Self::try_with_accuracy(max_items, fpp).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Creates a builder for a target accuracy, validating the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) if
    /// `max_items` is 0 or `fpp` is not in (0.0, 1.0].
    pub fn try_with_accuracy(max_items: u64, fpp: f64) -> Result<Self, Error> {
        if max_items == 0 {
            return Err(Error::invalid_argument("max_items must be greater than 0"));
        }
        if !(fpp > 0.0 && fpp <= 1.0) {
            return Err(Error::invalid_argument(
                "fpp must be between 0.0 and 1.0 (inclusive of 1.0)",
            )
            .with_context("fpp", fpp));
        }

        let num_bits = Self::suggest_num_bits(max_items, fpp);
        let num_hashes = Self::suggest_num_hashes_from_accuracy(max_items, num_bits);
        Self::try_with_size(num_bits, num_hashes)
    }

    /// Builds the Bloom filter with every bit cleared.
    pub fn build(self) -> BloomFilter {
        let num_buckets = Self::num_buckets_for(self.num_bits);
        debug!(
            requested_bits = self.num_bits,
            num_buckets,
            num_hashes = self.num_hashes,
            "building bloom filter"
        );

        BloomFilter {
            num_hashes: self.num_hashes,
            num_bits_set: 0,
            bit_array: vec![0u8; num_buckets].into_boxed_slice(),
        }
    }

    /// Returns the number of byte buckets allocated for a request of `num_bits` bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use murmurbloom::bloom::BloomFilterBuilder;
    /// assert_eq!(BloomFilterBuilder::num_buckets_for(1), 1);
    /// assert_eq!(BloomFilterBuilder::num_buckets_for(8), 1);
    /// assert_eq!(BloomFilterBuilder::num_buckets_for(16), 3);
    /// assert_eq!(BloomFilterBuilder::num_buckets_for(24), 3);
    /// ```
    pub fn num_buckets_for(num_bits: usize) -> usize {
        let buckets = num_bits.max(MIN_NUM_BITS) / BITS_PER_BUCKET;
        if buckets % 2 == 0 {
            buckets + 1
        } else {
            buckets
        }
    }

    /// Suggests optimal number of bits given max items and target FPP.
    ///
    /// Formula: `m = -n * ln(p) / (ln(2)^2)`
    /// where n = max_items, p = fpp
    ///
    /// # Examples
    ///
    /// ```
    /// # use murmurbloom::bloom::BloomFilterBuilder;
    /// let bits = BloomFilterBuilder::suggest_num_bits(1000, 0.01);
    /// assert!(bits > 9000 && bits < 10000); // ~9586 bits
    /// ```
    pub fn suggest_num_bits(max_items: u64, fpp: f64) -> usize {
        let n = max_items as f64;
        let ln2_squared = std::f64::consts::LN_2 * std::f64::consts::LN_2;

        let bits = (-n * fpp.ln() / ln2_squared).ceil();
        bits.clamp(MIN_NUM_BITS as f64, MAX_NUM_BITS as f64) as usize
    }

    /// Suggests optimal number of hash rounds given max items and bit count.
    ///
    /// Formula: `k = (m/n) * ln(2)`
    /// where m = num_bits, n = max_items
    ///
    /// # Examples
    ///
    /// ```
    /// # use murmurbloom::bloom::BloomFilterBuilder;
    /// let hashes = BloomFilterBuilder::suggest_num_hashes_from_accuracy(1000, 10000);
    /// assert_eq!(hashes, 7); // Optimal k ≈ 6.93
    /// ```
    pub fn suggest_num_hashes_from_accuracy(max_items: u64, num_bits: usize) -> u16 {
        let m = num_bits as f64;
        let n = max_items as f64;

        // Ceil to avoid selecting too few hashes.
        let k = (m / n * std::f64::consts::LN_2).ceil();
        k.clamp(f64::from(MIN_NUM_HASHES), f64::from(MAX_NUM_HASHES)) as u16
    }

    /// Suggests optimal number of hash rounds from target FPP.
    ///
    /// Formula: `k = -log2(p)`
    ///
    /// # Examples
    ///
    /// ```
    /// # use murmurbloom::bloom::BloomFilterBuilder;
    /// let hashes = BloomFilterBuilder::suggest_num_hashes_from_fpp(0.01);
    /// assert_eq!(hashes, 7); // -log2(0.01) ≈ 6.64
    /// ```
    pub fn suggest_num_hashes_from_fpp(fpp: f64) -> u16 {
        let k = -fpp.log2();
        k.ceil()
            .clamp(f64::from(MIN_NUM_HASHES), f64::from(MAX_NUM_HASHES)) as u16
    }
}
