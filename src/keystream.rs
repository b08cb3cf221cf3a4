//! Keystream: quadratic position-dependent key generator.
//!
//! Implements the key schedule of CipherShift. Each position `i` maps to
//! `key(i) = (a·i² + b·i + c) mod p`, evaluated with Euclidean modulus so
//! the key is always in `[0, p-1]` regardless of coefficient signs.
//!
//! Evaluation widens to `i128` before multiplying, so `a·i²` stays exact
//! for any `i64` coefficients and any position a string index can reach.

use crate::error::CipherShiftError;

/// Immutable keystream parameters `(a, b, c, p)`.
///
/// Construction validates the modulus; after that the keystream is a pure
/// function of position with no interior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Keystream {
    a: i64,
    b: i64,
    c: i64,
    p: i64,
}

impl Keystream {
    /// Creates a keystream from polynomial coefficients and modulus.
    ///
    /// # Parameters
    /// - `a`: quadratic coefficient.
    /// - `b`: linear coefficient.
    /// - `c`: constant term.
    /// - `p`: modulus, must be >= 1 (prime intended, not required).
    ///
    /// # Errors
    /// Returns [`CipherShiftError::InvalidModulus`] if `p <= 0`.
    pub(crate) fn new(a: i64, b: i64, c: i64, p: i64) -> Result<Self, CipherShiftError> {
        if p <= 0 {
            return Err(CipherShiftError::InvalidModulus);
        }
        Ok(Keystream { a, b, c, p })
    }

    /// Evaluates the key for the given position.
    ///
    /// # Returns
    /// `(a·i² + b·i + c) mod p`, always in `[0, p-1]`.
    pub(crate) fn key_at(&self, position: usize) -> i64 {
        let i = position as i128;
        let poly = (self.a as i128) * i * i + (self.b as i128) * i + (self.c as i128);
        // p >= 1 is guaranteed by the constructor, so rem_euclid cannot
        // divide by zero and the result fits back into i64.
        poly.rem_euclid(self.p as i128) as i64
    }

    /// Returns the quadratic coefficient.
    pub(crate) fn a(&self) -> i64 {
        self.a
    }

    /// Returns the linear coefficient.
    pub(crate) fn b(&self) -> i64 {
        self.b
    }

    /// Returns the constant term.
    pub(crate) fn c(&self) -> i64 {
        self.c
    }

    /// Returns the modulus.
    pub(crate) fn p(&self) -> i64 {
        self.p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_modulus() {
        assert_eq!(
            Keystream::new(3, 5, 7, 0),
            Err(CipherShiftError::InvalidModulus)
        );
    }

    #[test]
    fn test_new_rejects_negative_modulus() {
        assert_eq!(
            Keystream::new(3, 5, 7, -97),
            Err(CipherShiftError::InvalidModulus)
        );
    }

    #[test]
    fn test_new_accepts_modulus_one() {
        let ks = Keystream::new(3, 5, 7, 1).unwrap();
        for i in 0..100 {
            assert_eq!(ks.key_at(i), 0);
        }
    }

    #[test]
    fn test_key_at_quadratic_values() {
        // key(i) = (3i² + 5i + 7) % 97
        let ks = Keystream::new(3, 5, 7, 97).unwrap();
        assert_eq!(ks.key_at(0), 7);
        assert_eq!(ks.key_at(1), 15);
        assert_eq!(ks.key_at(2), 29);
        assert_eq!(ks.key_at(3), 49);
        assert_eq!(ks.key_at(4), 75);
        assert_eq!(ks.key_at(5), 10); // 107 % 97
    }

    #[test]
    fn test_key_at_linear_degenerate() {
        // a = 0 reduces to key(i) = (5i + 3) % 97
        let ks = Keystream::new(0, 5, 3, 97).unwrap();
        assert_eq!(ks.key_at(0), 3);
        assert_eq!(ks.key_at(1), 8);
        assert_eq!(ks.key_at(2), 13);
        assert_eq!(ks.key_at(3), 18);
    }

    #[test]
    fn test_key_at_negative_coefficients_stay_non_negative() {
        let ks = Keystream::new(-1, 2, -5, 97).unwrap();
        for i in 0..1000 {
            let key = ks.key_at(i);
            assert!(
                (0..97).contains(&key),
                "key_at({}) = {} outside [0, 96]",
                i,
                key
            );
        }
    }

    #[test]
    fn test_key_at_deterministic() {
        let ks = Keystream::new(7, 3, 17, 103).unwrap();
        for i in [0, 1, 42, 999_999] {
            assert_eq!(ks.key_at(i), ks.key_at(i));
        }
    }

    #[test]
    fn test_key_at_large_position_no_overflow() {
        // a·i² at i = 10^6 with a near i64::MAX overflows i64 by far;
        // the i128 widening must keep the key exact.
        let ks = Keystream::new(i64::MAX, i64::MAX, i64::MAX, 97).unwrap();
        let key = ks.key_at(1_000_000);
        assert!((0..97).contains(&key));
    }

    #[test]
    fn test_key_at_extreme_negative_polynomial() {
        let ks = Keystream::new(i64::MIN, i64::MIN, i64::MIN, 101).unwrap();
        let key = ks.key_at(1_000_000);
        assert!((0..101).contains(&key));
    }
}
