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

//! # murmurbloom
//!
//! A fixed-size Bloom filter over a deterministic 32-bit MurmurHash2.
//!
//! The crate is split into modules that constitute distinct groups of functionality:
//!
//! - [`hash`]: the hash primitive and the chained derivation of k hashes per key
//! - [`bloom`]: the filter and its builder
//! - [`error`]: the error type returned by fallible constructors and helpers
//!
//! Items are hashed through [`CanonicalBytes`]; filter capabilities are abstracted by
//! [`Filter`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bloom;
pub mod error;
pub mod hash;

mod filter;
mod item;

pub use self::filter::Filter;
pub use self::item::CanonicalBytes;
