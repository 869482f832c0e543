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

use byteorder::ByteOrder;
use byteorder::LE;

use crate::error::Error;

/// Multiplicative mixing constant.
pub const M: i32 = 0x5bd1e995_u32 as i32;

/// Right-shift applied to every body word before it is folded into the state.
pub const R: u32 = 24;

/// Computes the 32-bit MurmurHash2 of `bytes` under `seed`.
///
/// The result is fully determined by `(bytes, seed)` and is stable across runs, platforms and
/// process restarts. It is intended for bucketing only and has no cryptographic strength.
///
/// Layout conventions:
///
/// - body words are read **little-endian** from 4-byte chunks taken from the end of the buffer
///   towards the front;
/// - the 0 to 3 bytes left over at the front form the tail and are folded in as unsigned
///   values;
/// - every right shift is arithmetic (sign-extending) on the signed state.
///
/// Multiplications wrap modulo 2^32. With arithmetic shifts the final `h ^ (h >> 15)` always
/// clears the sign bit, so the returned value is never negative.
///
/// # Examples
///
/// ```
/// # use murmurbloom::hash::murmurhash2;
/// assert_eq!(murmurhash2(&[], 0), 0);
/// assert_eq!(murmurhash2(b"hello", 0), murmurhash2(b"hello", 0));
/// assert_ne!(murmurhash2(b"hello", 0), murmurhash2(b"hello", 1));
/// ```
pub fn murmurhash2(bytes: &[u8], seed: i32) -> i32 {
    // lengths beyond i32::MAX wrap, as the state is 32 bits wide
    let mut h = seed ^ (bytes.len() as i32);

    let mut chunks = bytes.rchunks_exact(4);
    for chunk in &mut chunks {
        let mut k = LE::read_i32(chunk);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h = h.wrapping_mul(M);
        h ^= k;
    }

    // fall-through folding: three bytes also fold the second and first
    let tail = chunks.remainder();
    if tail.len() >= 3 {
        h ^= i32::from(tail[2]) << 16;
    }
    if tail.len() >= 2 {
        h ^= i32::from(tail[1]) << 8;
    }
    if let Some(&first) = tail.first() {
        h ^= i32::from(first);
        h = h.wrapping_mul(M);
    }

    fmix32(h)
}

/// Finalization mix: force all bits of the state to avalanche.
#[inline]
fn fmix32(mut h: i32) -> i32 {
    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^ (h >> 15)
}

/// Encodes `value` as four little-endian bytes, the same word order [`murmurhash2`] reads.
///
/// # Examples
///
/// ```
/// # use murmurbloom::hash::encode_i32_le;
/// assert_eq!(encode_i32_le(0x0403_0201), [1, 2, 3, 4]);
/// ```
pub fn encode_i32_le(value: i32) -> [u8; 4] {
    let mut buf = [0u8; 4];
    LE::write_i32(&mut buf, value);
    buf
}

/// Decodes four little-endian bytes produced by [`encode_i32_le`].
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) if `bytes`
/// is not exactly four bytes long.
pub fn decode_i32_le(bytes: &[u8]) -> Result<i32, Error> {
    if bytes.len() != 4 {
        return Err(Error::wrong_length("bytes", 4, bytes.len()));
    }
    Ok(LE::read_i32(bytes))
}
