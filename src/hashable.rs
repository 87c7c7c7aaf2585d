//! Hashable: the capability a value needs to be placed in a `HashTable`.
//!
//! A type declares the inclusive range its hash codes live in through two
//! associated constants. The table scales a hash code across that range to
//! pick a bucket, so the range must be non-empty (`MAX_HASH > MIN_HASH`);
//! instantiating a table for a type that breaks this fails at compile time.
//!
//! Hash codes must be deterministic and must not change while a value is
//! stored in a bag.

/// A value that can produce a hash code within a declared range.
///
/// Implementations must uphold `MIN_HASH <= hash_code() <= MAX_HASH` for
/// every value, and `a == b` must imply `a.hash_code() == b.hash_code()`.
///
/// A type whose range is empty cannot be stored; building a bag for it is
/// rejected when the crate using it is compiled:
///
/// ```compile_fail
/// use hash_bag::{Bag, Hashable};
///
/// #[derive(PartialEq)]
/// struct Flat;
///
/// impl Hashable for Flat {
///     const MIN_HASH: i64 = 5;
///     const MAX_HASH: i64 = 5;
///
///     fn hash_code(&self) -> i64 {
///         5
///     }
/// }
///
/// let mut bag = Bag::<Flat>::new();
/// bag.insert(Flat);
/// ```
///
/// A type with a non-empty range builds and works:
///
/// ```
/// use hash_bag::{Bag, Hashable};
///
/// #[derive(PartialEq)]
/// struct Narrow;
///
/// impl Hashable for Narrow {
///     const MIN_HASH: i64 = 5;
///     const MAX_HASH: i64 = 6;
///
///     fn hash_code(&self) -> i64 {
///         5
///     }
/// }
///
/// let mut bag = Bag::<Narrow>::new();
/// bag.insert(Narrow);
/// assert_eq!(bag.count(&Narrow), 1);
/// ```
pub trait Hashable {
    /// Smallest hash code any value of this type can produce.
    const MIN_HASH: i64;
    /// Largest hash code any value of this type can produce.
    const MAX_HASH: i64;

    fn hash_code(&self) -> i64;
}

/// Polynomial string hash: `hash = hash * 31 + code`, wrapping as a signed
/// 32-bit integer.
///
/// `code` is the first UTF-16 code unit of each character, which keeps the
/// result identical to the classic JavaScript/Java string hash for every
/// string, including ones with characters outside the Basic Multilingual
/// Plane.
impl Hashable for str {
    const MIN_HASH: i64 = i32::MIN as i64;
    const MAX_HASH: i64 = i32::MAX as i64;

    fn hash_code(&self) -> i64 {
        let mut units = [0u16; 2];
        let hash = self.chars().fold(0i32, |hash, c| {
            let code = c.encode_utf16(&mut units)[0];
            hash.wrapping_mul(31).wrapping_add(i32::from(code))
        });
        i64::from(hash)
    }
}

impl Hashable for String {
    const MIN_HASH: i64 = <str as Hashable>::MIN_HASH;
    const MAX_HASH: i64 = <str as Hashable>::MAX_HASH;

    #[inline]
    fn hash_code(&self) -> i64 {
        self.as_str().hash_code()
    }
}

impl<T: Hashable + ?Sized> Hashable for &T {
    const MIN_HASH: i64 = T::MIN_HASH;
    const MAX_HASH: i64 = T::MAX_HASH;

    #[inline]
    fn hash_code(&self) -> i64 {
        (**self).hash_code()
    }
}

impl<T: Hashable + ?Sized> Hashable for Box<T> {
    const MIN_HASH: i64 = T::MIN_HASH;
    const MAX_HASH: i64 = T::MAX_HASH;

    #[inline]
    fn hash_code(&self) -> i64 {
        (**self).hash_code()
    }
}

// Integers hash to themselves over their full native range.
macro_rules! impl_hashable_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Hashable for $t {
                const MIN_HASH: i64 = <$t>::MIN as i64;
                const MAX_HASH: i64 = <$t>::MAX as i64;

                #[inline]
                fn hash_code(&self) -> i64 {
                    i64::from(*self)
                }
            }
        )*
    };
}

impl_hashable_for_int!(i8, i16, i32, i64, u8, u16, u32);

impl Hashable for char {
    const MIN_HASH: i64 = 0;
    const MAX_HASH: i64 = char::MAX as i64;

    #[inline]
    fn hash_code(&self) -> i64 {
        i64::from(u32::from(*self))
    }
}

impl Hashable for bool {
    const MIN_HASH: i64 = 0;
    const MAX_HASH: i64 = 1;

    #[inline]
    fn hash_code(&self) -> i64 {
        i64::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::Hashable;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!("".hash_code(), 0);
    }

    #[test]
    fn string_hash_matches_polynomial_fold() {
        assert_eq!("a".hash_code(), 97);
        assert_eq!("ab".hash_code(), 97 * 31 + 98);
        // Same value as the well-known Java `"hello".hashCode()`.
        assert_eq!("hello".hash_code(), 99_162_322);
    }

    #[test]
    fn string_hash_wraps_as_signed_32_bit() {
        // Long enough to overflow i32 several times over.
        let s = "The quick brown fox jumps over the lazy dog";
        let h = s.hash_code();
        assert!(h >= <str as Hashable>::MIN_HASH && h <= <str as Hashable>::MAX_HASH);

        let mut expected: i32 = 0;
        for b in s.bytes() {
            expected = expected.wrapping_mul(31).wrapping_add(i32::from(b));
        }
        assert_eq!(h, i64::from(expected));
    }

    #[test]
    fn astral_characters_contribute_their_high_surrogate() {
        // U+1F600 encodes as D83D DE00 in UTF-16; only the first unit counts.
        assert_eq!("\u{1F600}".hash_code(), 0xD83D);
    }

    #[test]
    fn owned_borrowed_and_boxed_strings_agree() {
        let owned = String::from("Honda Pilot");
        let boxed: Box<str> = owned.clone().into_boxed_str();
        assert_eq!(owned.hash_code(), "Honda Pilot".hash_code());
        assert_eq!((&owned).hash_code(), owned.hash_code());
        assert_eq!(boxed.hash_code(), owned.hash_code());
    }

    #[test]
    fn integers_hash_to_themselves_within_native_bounds() {
        assert_eq!((-5i32).hash_code(), -5);
        assert_eq!(u8::MAX.hash_code(), 255);
        assert_eq!(<u8 as Hashable>::MIN_HASH, 0);
        assert_eq!(<i64 as Hashable>::MAX_HASH, i64::MAX);
        assert_eq!('A'.hash_code(), 65);
        assert_eq!(true.hash_code(), 1);
    }
}
