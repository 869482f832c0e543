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

use super::builder::BITS_PER_BUCKET;
use super::BloomFilterBuilder;
use crate::hash::ChainedHashes;
use crate::CanonicalBytes;
use crate::Filter;

/// A Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (inserted items always return `true`)
/// - Tunable false positive rate
/// - Constant space usage
///
/// Bits are never cleared: the filter supports no deletion, reset or resizing, so the set of
/// one bits only grows over its lifetime.
///
/// Use [`BloomFilter::new`] or [`BloomFilterBuilder`] to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    /// Number of chained hash rounds per item (k)
    pub(super) num_hashes: u16,
    /// Count of bits set to 1 (for statistics)
    pub(super) num_bits_set: u64,
    /// One byte per bucket; the length is the bucket count and is always odd
    pub(super) bit_array: Box<[u8]>,
}

impl BloomFilter {
    /// Creates a filter for `num_bits` requested bits and `num_hashes` hash rounds.
    ///
    /// Shorthand for `BloomFilterBuilder::with_size(num_bits, num_hashes).build()`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`BloomFilterBuilder::with_size`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use murmurbloom::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(64, 3);
    /// filter.insert("hello");
    /// assert!(filter.contains("hello"));
    /// ```
    pub fn new(num_bits: usize, num_hashes: u16) -> Self {
        BloomFilterBuilder::with_size(num_bits, num_hashes).build()
    }

    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Item was **possibly** inserted (or false positive)
    /// - `false`: Item was **definitely not** inserted
    ///
    /// # Examples
    ///
    /// ```
    /// # use murmurbloom::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(64, 3);
    /// filter.insert("hello");
    ///
    /// assert!(filter.contains("hello"));
    /// assert!(!filter.contains("world"));
    /// ```
    pub fn contains<T: CanonicalBytes + ?Sized>(&self, item: &T) -> bool {
        if self.is_empty() {
            return false;
        }

        let bytes = item.canonical_bytes();
        self.hashes(&bytes).all(|hash| {
            let (bucket, mask) = self.locate(hash);
            self.bit_array[bucket] & mask != 0
        })
    }

    /// Tests and inserts an item in a single operation.
    ///
    /// Returns whether the item was possibly already in the set before insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use murmurbloom::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(1024, 4);
    ///
    /// assert!(!filter.contains_and_insert("apple"));
    /// assert!(filter.contains_and_insert("apple"));
    /// ```
    pub fn contains_and_insert<T: CanonicalBytes + ?Sized>(&mut self, item: &T) -> bool {
        let bytes = item.canonical_bytes();
        let mut was_present = true;
        for hash in self.hashes(&bytes) {
            let (bucket, mask) = self.locate(hash);
            if self.set_bit(bucket, mask) {
                was_present = false;
            }
        }
        was_present
    }

    /// Inserts an item into the filter.
    ///
    /// After insertion, `contains(item)` will always return `true`. Inserting the same item
    /// again leaves the filter unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use murmurbloom::bloom::BloomFilter;
    /// let mut filter = BloomFilter::new(1024, 4);
    ///
    /// filter.insert("apple");
    /// filter.insert(&42_u64);
    /// filter.insert(&[1_u8, 2, 3]);
    ///
    /// assert!(filter.contains("apple"));
    /// assert!(filter.contains(&42_u64));
    /// ```
    pub fn insert<T: CanonicalBytes + ?Sized>(&mut self, item: &T) {
        let bytes = item.canonical_bytes();
        for hash in self.hashes(&bytes) {
            let (bucket, mask) = self.locate(hash);
            self.set_bit(bucket, mask);
        }
    }

    /// Merges another filter into this one via bitwise OR (union).
    ///
    /// After merging, this filter will recognize items from either filter
    /// (plus any false positives from either).
    ///
    /// # Panics
    ///
    /// Panics if the filters are not compatible (different bucket count or hash rounds).
    /// Use [`is_compatible()`](Self::is_compatible) to check first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use murmurbloom::bloom::BloomFilter;
    /// let mut f1 = BloomFilter::new(1024, 3);
    /// let mut f2 = BloomFilter::new(1024, 3);
    ///
    /// f1.insert("a");
    /// f2.insert("b");
    ///
    /// f1.union(&f2);
    /// assert!(f1.contains("a"));
    /// assert!(f1.contains("b"));
    /// ```
    pub fn union(&mut self, other: &BloomFilter) {
        assert!(
            self.is_compatible(other),
            "Cannot union incompatible Bloom filters"
        );

        let mut num_bits_set = 0;
        for (bucket, other_bucket) in self.bit_array.iter_mut().zip(other.bit_array.iter()) {
            *bucket |= *other_bucket;
            num_bits_set += u64::from(bucket.count_ones());
        }
        debug!(
            before = self.num_bits_set,
            after = num_bits_set,
            "merged bloom filter"
        );
        self.num_bits_set = num_bits_set;
    }

    /// Returns whether the filter is empty (no items inserted).
    pub fn is_empty(&self) -> bool {
        self.num_bits_set == 0
    }

    /// Returns the number of bits set to 1.
    pub fn bits_used(&self) -> u64 {
        self.num_bits_set
    }

    /// Returns the number of byte buckets in the bit array.
    pub fn num_buckets(&self) -> usize {
        self.bit_array.len()
    }

    /// Returns the total number of addressable bits (buckets × 8).
    pub fn capacity(&self) -> u64 {
        (self.bit_array.len() * BITS_PER_BUCKET) as u64
    }

    /// Returns the number of hash rounds per item.
    pub fn num_hashes(&self) -> u16 {
        self.num_hashes
    }

    /// Returns the current load factor (fraction of bits set).
    pub fn load_factor(&self) -> f64 {
        self.num_bits_set as f64 / self.capacity() as f64
    }

    /// Estimates the current false positive probability from the observed load.
    ///
    /// Uses the approximation: `load_factor^k`.
    pub fn estimated_fpp(&self) -> f64 {
        self.load_factor().powi(i32::from(self.num_hashes))
    }

    /// Predicts the false positive probability after `num_items` distinct insertions.
    ///
    /// This is [`estimate_false_positive_probability`](Self::estimate_false_positive_probability)
    /// with `m` set to the bucket count rather than the bit count. Each bucket holds eight bits,
    /// so the figure is conservative: it overstates the rate a filter of this size reaches.
    pub fn expected_fpp(&self, num_items: u64) -> f64 {
        Self::estimate_false_positive_probability(
            num_items,
            self.bit_array.len() as u64,
            self.num_hashes,
        )
    }

    /// Classic false positive estimate `(1 - e^(-k·n/m))^k`.
    ///
    /// - `n`: number of inserted elements
    /// - `m`: number of slots; whether these are bits or buckets is up to the caller
    /// - `k`: number of hash rounds
    ///
    /// The result is always within `[0, 1]`. It is 0 for `n = 0` and tends to 1 as `n` grows.
    ///
    /// # Panics
    ///
    /// Panics if `m` or `k` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use murmurbloom::bloom::BloomFilter;
    /// assert_eq!(BloomFilter::estimate_false_positive_probability(0, 100, 3), 0.0);
    /// let p = BloomFilter::estimate_false_positive_probability(10, 100, 3);
    /// assert!(p > 0.01 && p < 0.02);
    /// ```
    pub fn estimate_false_positive_probability(n: u64, m: u64, k: u16) -> f64 {
        assert!(m > 0, "m must be greater than 0");
        assert!(k > 0, "k must be greater than 0");

        let n = n as f64;
        let m = m as f64;
        let k = f64::from(k);
        (1.0 - (-k * n / m).exp()).powf(k).clamp(0.0, 1.0)
    }

    /// Checks if two filters are compatible for merging.
    ///
    /// Filters are compatible if they have the same:
    /// - Bucket count
    /// - Number of hash rounds
    pub fn is_compatible(&self, other: &BloomFilter) -> bool {
        self.bit_array.len() == other.bit_array.len() && self.num_hashes == other.num_hashes
    }

    fn hashes<'a>(&self, bytes: &'a [u8]) -> ChainedHashes<'a> {
        ChainedHashes::new(bytes, usize::from(self.num_hashes))
    }

    /// Maps a hash to its bucket and the single-bit mask within that bucket.
    ///
    /// Both moduli are taken with a non-negative remainder, so any `i32` maps in range.
    fn locate(&self, hash: i32) -> (usize, u8) {
        let num_buckets = self.bit_array.len() as i64;
        let bucket = i64::from(hash).rem_euclid(num_buckets) as usize;
        let bit = hash.rem_euclid(BITS_PER_BUCKET as i32);
        (bucket, 1u8 << bit)
    }

    /// Sets the masked bit, returning whether it was previously clear.
    fn set_bit(&mut self, bucket: usize, mask: u8) -> bool {
        let slot = &mut self.bit_array[bucket];
        if *slot & mask != 0 {
            return false;
        }
        *slot |= mask;
        self.num_bits_set += 1;
        true
    }
}

impl<T: CanonicalBytes + ?Sized> Filter<T> for BloomFilter {
    fn insert(&mut self, item: &T) {
        BloomFilter::insert(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        BloomFilter::contains(self, item)
    }
}

impl<T: CanonicalBytes> Extend<T> for BloomFilter {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(&item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BloomFilter;
    use crate::Filter;

    #[test]
    fn test_size_normalization() {
        assert_eq!(BloomFilter::new(1, 1).num_buckets(), 1);
        assert_eq!(BloomFilter::new(8, 1).num_buckets(), 1);
        assert_eq!(BloomFilter::new(16, 1).num_buckets(), 3);
        assert_eq!(BloomFilter::new(64, 3).num_buckets(), 9);
        assert_eq!(BloomFilter::new(64, 3).capacity(), 72);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut filter = BloomFilter::new(1024, 3);

        assert!(!filter.contains("apple"));
        filter.insert("apple");
        assert!(filter.contains("apple"));
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_bit_layout() {
        let mut filter = BloomFilter::new(64, 3);
        filter.insert("hello");

        // rounds land on (bucket 1, bit 3), (bucket 6, bit 6) and (bucket 0, bit 0)
        assert_eq!(&*filter.bit_array, &[1, 8, 0, 0, 0, 0, 64, 0, 0]);
        assert_eq!(filter.bits_used(), 3);
        assert!(filter.contains("hello"));
        assert!(!filter.contains("world"));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut filter = BloomFilter::new(256, 5);
        filter.insert("x");
        let once = filter.clone();
        filter.insert("x");
        filter.insert(&String::from("x"));
        assert_eq!(filter, once);
    }

    #[test]
    fn test_bits_never_cleared() {
        let mut filter = BloomFilter::new(128, 4);
        for i in 0..200u32 {
            let before = filter.bit_array.clone();
            filter.insert(&i);
            for (old, new) in before.iter().zip(filter.bit_array.iter()) {
                assert_eq!(old & new, *old);
            }
        }
    }

    #[test]
    fn test_contains_and_insert() {
        let mut filter = BloomFilter::new(4096, 4);

        let was_present = filter.contains_and_insert(&42_u64);
        assert!(!was_present);

        let was_present = filter.contains_and_insert(&42_u64);
        assert!(was_present);
    }

    #[test]
    fn test_locate_normalizes_negative_hashes() {
        let filter = BloomFilter::new(64, 1);
        assert_eq!(filter.locate(-1), (8, 0x80));
        assert_eq!(filter.locate(i32::MIN), (7, 0x01));
        assert_eq!(filter.locate(17), (8, 0x02));
    }

    #[test]
    fn test_high_bit_membership() {
        let mut filter = BloomFilter::new(64, 1);
        filter.set_bit(4, 0x80);
        assert_eq!(filter.bit_array[4], 0x80);
        assert!(!filter.set_bit(4, 0x80));
        assert_eq!(filter.bits_used(), 1);
    }

    #[test]
    fn test_union() {
        let mut f1 = BloomFilter::new(1024, 3);
        let mut f2 = BloomFilter::new(1024, 3);

        f1.insert("a");
        f2.insert("b");

        f1.union(&f2);
        assert!(f1.contains("a"));
        assert!(f1.contains("b"));
        let recount: u64 = f1.bit_array.iter().map(|b| u64::from(b.count_ones())).sum();
        assert_eq!(f1.bits_used(), recount);
    }

    #[test]
    #[should_panic(expected = "Cannot union incompatible Bloom filters")]
    fn test_union_incompatible() {
        let mut f1 = BloomFilter::new(1024, 3);
        let f2 = BloomFilter::new(1024, 4);
        f1.union(&f2);
    }

    #[test]
    fn test_is_compatible() {
        let f1 = BloomFilter::new(1024, 3);
        let f2 = BloomFilter::new(1024, 3);
        let f3 = BloomFilter::new(2048, 3);

        assert!(f1.is_compatible(&f2));
        assert!(!f1.is_compatible(&f3));
    }

    #[test]
    fn test_statistics() {
        let mut filter = BloomFilter::new(64, 3);
        assert_eq!(filter.bits_used(), 0);
        assert_eq!(filter.load_factor(), 0.0);
        assert_eq!(filter.estimated_fpp(), 0.0);

        filter.insert("hello");
        assert_eq!(filter.load_factor(), 3.0 / 72.0);
        assert_eq!(filter.estimated_fpp(), (3.0f64 / 72.0).powi(3));
    }

    #[test]
    fn test_expected_fpp_uses_bucket_count() {
        let filter = BloomFilter::new(64, 3);
        assert_eq!(
            filter.expected_fpp(5),
            BloomFilter::estimate_false_positive_probability(5, 9, 3)
        );
    }

    #[test]
    fn test_estimator_bounds() {
        assert_eq!(BloomFilter::estimate_false_positive_probability(0, 9, 3), 0.0);

        let mut last = 0.0;
        for n in [1, 10, 100, 1_000, 10_000] {
            let p = BloomFilter::estimate_false_positive_probability(n, 1000, 5);
            assert!((0.0..=1.0).contains(&p));
            assert!(p > last);
            last = p;
        }

        let saturated = BloomFilter::estimate_false_positive_probability(u64::MAX, 1, 1);
        assert_eq!(saturated, 1.0);
    }

    #[test]
    #[should_panic(expected = "m must be greater than 0")]
    fn test_estimator_zero_m() {
        BloomFilter::estimate_false_positive_probability(1, 0, 1);
    }

    #[test]
    fn test_filter_trait() {
        fn insert_all<F: Filter<str>>(filter: &mut F, items: &[&str]) {
            for item in items {
                filter.insert(item);
            }
        }

        let mut filter = BloomFilter::new(512, 3);
        insert_all(&mut filter, &["a", "b", "c"]);
        assert!(Filter::<str>::contains(&filter, "a"));
        assert!(Filter::<str>::contains(&filter, "c"));
    }

    #[test]
    fn test_extend() {
        let mut filter = BloomFilter::new(512, 3);
        filter.extend(["x", "y"]);
        filter.extend(vec![1u32, 2, 3]);
        assert!(filter.contains("x"));
        assert!(filter.contains("y"));
        assert!(filter.contains(&2u32));
    }
}
