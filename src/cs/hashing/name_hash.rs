//! # Name Hash Functions
//!
//! Three strategies for mapping a name to a slot index in `[0..capacity)`:
//!
//! - **H1** - additive letter sum. Letters are worth their alphabet position
//!   (A=1 ... Z=26), everything else is ignored, and the sum is taken mod capacity.
//! - **H2** - positional polynomial in base 26. Every character occupies a position,
//!   letter or not, and contributes `value * 26^i`.
//! - **H3** - Rabin-Karp style polynomial in base 31 over the letters only.
//!   Non-letters are skipped and do not advance the power.
//!
//! All three reject a zero capacity and use 64-bit or wider arithmetic internally.

use std::fmt;

use crate::cs::hashing::polynomial_rolling::PolyHashBuilder;
use crate::error::{Error, Result};

/// Base of the positional hash (H2).
const POSITIONAL_BASE: u64 = 26;
/// Base of the Rabin-Karp style hash (H3).
const ROLLING_BASE: u64 = 31;

/// How H2 derives a character's value.
///
/// H1 and H3 always uppercase and drop non-letters, so the policy only affects H2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharPolicy {
    /// Uppercase each character before taking `c - 'A' + 1`. Letters are worth 1..=26
    /// regardless of case; other characters keep their position.
    #[default]
    Normalized,
    /// Take `c - 'A' + 1` on the character exactly as given, so lowercase letters are
    /// worth 33..=58 and punctuation may go negative. Reproduces the numbers of the
    /// historical tool for every input it could hash.
    Raw,
}

/// The three hash strategies under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    H1,
    H2,
    H3,
}

impl HashFunction {
    /// Every strategy, in report order.
    pub const ALL: [HashFunction; 3] = [HashFunction::H1, HashFunction::H2, HashFunction::H3];

    pub fn name(&self) -> &'static str {
        match self {
            HashFunction::H1 => "H1",
            HashFunction::H2 => "H2",
            HashFunction::H3 => "H3",
        }
    }

    /// Hashes `key` into `[0..capacity)` with the default character policy.
    pub fn hash(&self, key: &str, capacity: usize) -> Result<usize> {
        self.hash_with(key, capacity, CharPolicy::default())
    }

    /// Hashes `key` into `[0..capacity)`, using `policy` for H2.
    pub fn hash_with(&self, key: &str, capacity: usize, policy: CharPolicy) -> Result<usize> {
        match self {
            HashFunction::H1 => h1(key, capacity),
            HashFunction::H2 => h2_with_policy(key, capacity, policy),
            HashFunction::H3 => h3(key, capacity),
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn check_capacity(capacity: usize) -> Result<u64> {
    if capacity == 0 {
        return Err(Error::invalid_capacity(
            "capacity must be at least 1, got 0",
        ));
    }
    Ok(capacity as u64)
}

/// Alphabet position of an ASCII letter in either case, `None` for anything else.
#[inline]
fn letter_value(c: char) -> Option<i64> {
    if c.is_ascii_alphabetic() {
        Some(char_offset(c.to_ascii_uppercase()))
    } else {
        None
    }
}

/// `c - 'A' + 1` over the character's code point.
#[inline]
fn char_offset(c: char) -> i64 {
    c as i64 - 'A' as i64 + 1
}

/// Additive hash: sum of letter values mod `capacity`.
///
/// # Examples
/// ```
/// use hashsim::h1;
///
/// assert_eq!(h1("A", 10).unwrap(), 1);
/// assert_eq!(h1("abc", 100).unwrap(), 6);
/// ```
pub fn h1(key: &str, capacity: usize) -> Result<usize> {
    let modulus = check_capacity(capacity)?;
    let sum: u64 = key.chars().filter_map(letter_value).map(|v| v as u64).sum();
    Ok((sum % modulus) as usize)
}

/// Positional base-26 hash with the default [`CharPolicy`].
pub fn h2(key: &str, capacity: usize) -> Result<usize> {
    h2_with_policy(key, capacity, CharPolicy::default())
}

/// Positional base-26 hash: `sum(value(c_i) * 26^i) mod capacity` over every character.
pub fn h2_with_policy(key: &str, capacity: usize, policy: CharPolicy) -> Result<usize> {
    let modulus = check_capacity(capacity)?;
    let mut hasher = PolyHashBuilder::new()
        .with_base(POSITIONAL_BASE)
        .with_modulus(modulus)
        .build()?;
    hasher.hash_values(key.chars().map(|c| match policy {
        CharPolicy::Normalized => char_offset(c.to_ascii_uppercase()),
        CharPolicy::Raw => char_offset(c),
    }));
    Ok(hasher.current_hash() as usize)
}

/// Rabin-Karp style base-31 hash over the letters of `key`.
///
/// # Examples
/// ```
/// use hashsim::h3;
///
/// // 1 + 2*31
/// assert_eq!(h3("AB", 1000).unwrap(), 63);
/// assert_eq!(h3("a-b", 1000).unwrap(), 63);
/// ```
pub fn h3(key: &str, capacity: usize) -> Result<usize> {
    let modulus = check_capacity(capacity)?;
    let mut hasher = PolyHashBuilder::new()
        .with_base(ROLLING_BASE)
        .with_modulus(modulus)
        .build()?;
    hasher.hash_values(key.chars().filter_map(letter_value));
    Ok(hasher.current_hash() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h1_values() {
        assert_eq!(h1("A", 10).unwrap(), 1);
        assert_eq!(h1("Z", 100).unwrap(), 26);
        assert_eq!(h1("abc", 100).unwrap(), 6);
        // O + N + E + I + L = 15 + 14 + 5 + 9 + 12
        assert_eq!(h1("O'Neil", 1000).unwrap(), 55);
        assert_eq!(h1("A B-C", 100).unwrap(), 6);
        assert_eq!(h1("", 7).unwrap(), 0);
        // 1, 2, 3 mod 3
        assert_eq!(h1("A", 3).unwrap(), 1);
        assert_eq!(h1("B", 3).unwrap(), 2);
        assert_eq!(h1("C", 3).unwrap(), 0);
    }

    #[test]
    fn test_h1_is_an_anagram_hash() {
        assert_eq!(h1("MARY", 97).unwrap(), h1("ARMY", 97).unwrap());
    }

    #[test]
    fn test_h2_values() {
        // 1 + 2*26
        assert_eq!(h2("AB", 1000).unwrap(), 53);
        // 2 + 1*26
        assert_eq!(h2("BA", 1000).unwrap(), 28);
        // 1 + 52 + 3*676 = 2081, 2081 mod 7 = 2
        assert_eq!(h2("ABC", 7).unwrap(), 2);
        assert_eq!(h2("", 7).unwrap(), 0);
    }

    #[test]
    fn test_h2_policies() {
        assert_eq!(h2_with_policy("ab", 1000, CharPolicy::Normalized).unwrap(), 53);
        // 'a' = 33, 'b' = 34: 33 + 34*26 = 917
        assert_eq!(h2_with_policy("ab", 1000, CharPolicy::Raw).unwrap(), 917);
        // Uppercase input is identical under both policies.
        assert_eq!(
            h2_with_policy("SMITH", 5746, CharPolicy::Raw).unwrap(),
            h2_with_policy("SMITH", 5746, CharPolicy::Normalized).unwrap()
        );
    }

    #[test]
    fn test_h2_keeps_positions_of_non_letters() {
        // ' ' = -32, then 'A' at position 1: -32 + 26 = -6, which is 4 mod 10
        assert_eq!(h2(" A", 10).unwrap(), 4);
        assert_ne!(h2("A B", 1000).unwrap(), h2("AB", 1000).unwrap());
    }

    #[test]
    fn test_h3_values() {
        assert_eq!(h3("AB", 1000).unwrap(), 63);
        assert_eq!(h3("ab", 1000).unwrap(), 63);
        // Non-letters do not advance the power.
        assert_eq!(h3("A B", 1000).unwrap(), 63);
        // 1 + 62 + 3*961 = 2946
        assert_eq!(h3("ABC", 1000).unwrap(), 946);
        assert_eq!(h3("", 1000).unwrap(), 0);
    }

    #[test]
    fn test_zero_capacity_is_a_domain_error() {
        for f in HashFunction::ALL {
            assert!(matches!(f.hash("A", 0), Err(Error::InvalidCapacity(_))));
        }
    }

    #[test]
    fn test_capacity_one_maps_to_zero() {
        for f in HashFunction::ALL {
            assert_eq!(f.hash("ANYTHING", 1).unwrap(), 0);
            assert_eq!(f.hash_with("lower case!", 1, CharPolicy::Raw).unwrap(), 0);
        }
    }

    #[test]
    fn test_results_in_range() {
        let keys = ["SMITH", "o'brien", "Van der Berg", "ZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZ", "", "#1"];
        for capacity in [1usize, 2, 3, 10, 26, 31, 798, 5746, 574_600] {
            for key in keys {
                for f in HashFunction::ALL {
                    for policy in [CharPolicy::Normalized, CharPolicy::Raw] {
                        let idx = f.hash_with(key, capacity, policy).unwrap();
                        assert!(idx < capacity, "{} {:?} {} -> {}", f, key, capacity, idx);
                    }
                }
            }
        }
    }

    #[test]
    fn test_long_keys_do_not_overflow() {
        let key: String = std::iter::repeat('Z').take(10_000).collect();
        for f in HashFunction::ALL {
            assert!(f.hash(&key, usize::MAX).unwrap() < usize::MAX);
        }
        assert_eq!(h1(&key, usize::MAX).unwrap(), 260_000);
    }

    #[test]
    fn test_display_and_names() {
        let names: Vec<String> = HashFunction::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(names, vec!["H1", "H2", "H3"]);
    }
}
