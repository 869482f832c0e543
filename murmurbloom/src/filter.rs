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

use crate::CanonicalBytes;

/// The add/contains capability shared by approximate membership filters.
///
/// Callers that only insert and query can be written against this trait, so another filter
/// (for example a counting variant) can be substituted without changing them.
///
/// # Examples
///
/// ```
/// # use murmurbloom::bloom::BloomFilter;
/// # use murmurbloom::Filter;
/// fn remember_all<F: Filter<str>>(filter: &mut F, words: &[&str]) {
///     for word in words {
///         filter.insert(word);
///     }
/// }
///
/// let mut filter = BloomFilter::new(1024, 3);
/// remember_all(&mut filter, &["alpha", "beta"]);
/// assert!(Filter::<str>::contains(&filter, "alpha"));
/// ```
pub trait Filter<T: CanonicalBytes + ?Sized> {
    /// Adds `item` to the filter. Adding the same item again has no effect.
    fn insert(&mut self, item: &T);

    /// Returns `false` if `item` was definitely never added, `true` if it possibly was.
    fn contains(&self, item: &T) -> bool;
}
