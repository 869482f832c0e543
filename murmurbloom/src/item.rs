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

use std::borrow::Cow;

/// A stable byte encoding of a value, used as the hash key for filter operations.
///
/// Filters hash these bytes, never the value's identity. Implementations must be
/// deterministic: two values that compare equal must produce identical bytes, in every
/// process and on every platform. A type that breaks this rule silently introduces false
/// negatives; the filter cannot detect it.
///
/// Integers encode as little-endian bytes, strings as their UTF-8 bytes, and `char` as its
/// UTF-8 encoding. Floating-point numbers have no implementation, because `0.0 == -0.0` while
/// their bit patterns differ.
///
/// # Examples
///
/// ```
/// # use std::borrow::Cow;
/// # use murmurbloom::CanonicalBytes;
/// struct UserId(u32);
///
/// impl CanonicalBytes for UserId {
///     fn canonical_bytes(&self) -> Cow<'_, [u8]> {
///         self.0.canonical_bytes()
///     }
/// }
///
/// assert_eq!(UserId(1).canonical_bytes(), 1u32.canonical_bytes());
/// ```
pub trait CanonicalBytes {
    /// Returns the canonical encoding of `self`.
    fn canonical_bytes(&self) -> Cow<'_, [u8]>;
}

impl CanonicalBytes for [u8] {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> CanonicalBytes for [u8; N] {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl CanonicalBytes for Vec<u8> {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl CanonicalBytes for str {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl CanonicalBytes for String {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl CanonicalBytes for char {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        let mut buf = [0u8; 4];
        Cow::Owned(self.encode_utf8(&mut buf).as_bytes().to_vec())
    }
}

impl CanonicalBytes for bool {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned(vec![u8::from(*self)])
    }
}

macro_rules! impl_canonical_bytes_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl CanonicalBytes for $t {
                fn canonical_bytes(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_le_bytes().to_vec())
                }
            }
        )*
    };
}

impl_canonical_bytes_for_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

// usize/isize are encoded at 64 bits so that the bytes do not depend on the target
impl CanonicalBytes for usize {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned((*self as u64).to_le_bytes().to_vec())
    }
}

impl CanonicalBytes for isize {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned((*self as i64).to_le_bytes().to_vec())
    }
}

impl<T: CanonicalBytes + ?Sized> CanonicalBytes for &T {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        (**self).canonical_bytes()
    }
}

impl<T: CanonicalBytes + ?Sized> CanonicalBytes for Box<T> {
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        (**self).canonical_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_share_encoding() {
        let owned = String::from("hello");
        assert_eq!("hello".canonical_bytes(), owned.canonical_bytes());
        assert_eq!(owned.canonical_bytes(), b"hello".canonical_bytes());
        assert_eq!((&&"hello").canonical_bytes().as_ref(), b"hello");
    }

    #[test]
    fn test_integers_are_little_endian() {
        assert_eq!(0x0102_0304u32.canonical_bytes().as_ref(), &[4, 3, 2, 1]);
        assert_eq!((-1i16).canonical_bytes().as_ref(), &[0xff, 0xff]);
        assert_eq!(7usize.canonical_bytes(), 7u64.canonical_bytes());
        assert_eq!((-7isize).canonical_bytes(), (-7i64).canonical_bytes());
    }

    #[test]
    fn test_char_and_bool() {
        assert_eq!('a'.canonical_bytes().as_ref(), b"a");
        assert_eq!('é'.canonical_bytes(), "é".canonical_bytes());
        assert_eq!(true.canonical_bytes().as_ref(), &[1]);
        assert_eq!(false.canonical_bytes().as_ref(), &[0]);
    }

    #[test]
    fn test_boxed() {
        let boxed: Box<str> = "key".into();
        assert_eq!(boxed.canonical_bytes().as_ref(), b"key");
    }
}
