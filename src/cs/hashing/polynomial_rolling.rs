//! # Polynomial Rolling Hash
//!
//! This module implements the modular polynomial accumulator behind the positional
//! (base 26) and Rabin-Karp style (base 31) name hashes. Values are fed left to right
//! and each one is weighted by the next power of the base:
//!
//! \[ h = \sum_i v_i \cdot b^i \mod m \]
//!
//! ## Key Features
//! - **Configurable base** and **modulus** via a builder. The modulus is normally the
//!   capacity of the table being simulated.
//! - **Per-term reduction**: both the running power and every term are reduced mod `m`,
//!   with 128-bit intermediates, so long keys never overflow.
//! - **Signed input**: values may be negative (non-letter characters fed through the
//!   `c - 'A' + 1` arithmetic). They are reduced with the Euclidean remainder, so the
//!   hash always lands in `[0..m)`.
//!
//! **Note**: This is **not** cryptographically secure.

use crate::error::{Error, Result};

/// Default base: the small prime used by the Rabin-Karp style name hash.
const DEFAULT_BASE: u64 = 31;
/// Default modulus if none specified: the Mersenne prime 2^61 - 1.
const DEFAULT_MODULUS: u64 = 0x1FFFFFFFFFFFFFFF;

/// A builder for the polynomial accumulator, allowing you to set base and modulus.
#[derive(Debug, Clone)]
pub struct PolyHashBuilder {
    base: u64,
    modulus: u64,
}

impl Default for PolyHashBuilder {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl PolyHashBuilder {
    /// Creates a new builder with default base/modulus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base (the multiplier applied per position).
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Sets the modulus. For name hashing this is the table capacity.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Build the accumulator. A zero modulus is a domain error.
    pub fn build(self) -> Result<PolynomialRollingHash> {
        if self.modulus == 0 {
            return Err(Error::invalid_capacity(
                "polynomial hash modulus must be at least 1",
            ));
        }
        Ok(PolynomialRollingHash {
            base: self.base,
            modulus: self.modulus,
            current_hash: 0,
            current_len: 0,
            current_power: 1 % self.modulus,
        })
    }
}

/// A polynomial accumulator that is fed incrementally and yields a hash in `[0..modulus)`.
#[derive(Debug, Clone)]
pub struct PolynomialRollingHash {
    base: u64,
    modulus: u64,
    /// The current polynomial hash value
    current_hash: u64,
    /// The number of values fed so far.
    current_len: usize,
    /// base^(current_len) mod modulus, the weight of the next value.
    current_power: u64,
}

impl PolynomialRollingHash {
    /// Resets the accumulator to empty.
    pub fn clear(&mut self) {
        self.current_hash = 0;
        self.current_len = 0;
        self.current_power = 1 % self.modulus;
    }

    /// Returns the current hash value mod `modulus`.
    pub fn current_hash(&self) -> u64 {
        self.current_hash
    }

    pub fn len(&self) -> usize {
        self.current_len
    }

    pub fn is_empty(&self) -> bool {
        self.current_len == 0
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Feeds every value of `values` in order.
    pub fn hash_values<I: IntoIterator<Item = i64>>(&mut self, values: I) {
        for v in values {
            self.update(v);
        }
    }

    /// Streaming update with a single value.
    /// Adds `x * base^len` to the hash, then advances the power, both mod `modulus`.
    pub fn update(&mut self, x: i64) {
        let reduced = reduce_signed(x, self.modulus);
        let term = mul_mod(reduced, self.current_power, self.modulus);
        self.current_hash = add_mod(self.current_hash, term, self.modulus);

        self.current_len += 1;
        self.current_power = mul_mod(self.current_power, self.base, self.modulus);
    }
}

// internal ops

#[inline]
fn reduce_signed(x: i64, m: u64) -> u64 {
    (x as i128).rem_euclid(m as i128) as u64
}

#[inline]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}
