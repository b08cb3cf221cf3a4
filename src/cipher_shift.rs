//! CipherShift: position-keyed printable-ASCII transform engine.
//!
//! Owns the four keystream parameters and applies the per-position shift
//! to whole strings. Encoding shifts each code unit forward by
//! `key(i) + i` through the printable range; decoding shifts backward by
//! the same amount. Both directions consult the identical [`Keystream`],
//! which is what makes the transform exactly invertible.

use crate::error::CipherShiftError;
use crate::keystream::Keystream;

/// Lowest printable ASCII code point (space).
const ASCII_MIN: i128 = 32;

/// Highest printable ASCII code point (tilde).
const ASCII_MAX: i128 = 126;

/// Number of printable ASCII code points.
const ALPHABET_SIZE: i128 = 95;

/// Reversible text transform keyed by a quadratic position polynomial.
///
/// The engine is an immutable value: all state is fixed at construction
/// and every method takes `&self`, so a single engine may be shared
/// freely across threads.
///
/// # Examples
///
/// ```
/// use ciphershift::CipherShift;
///
/// let engine = CipherShift::new(2, 11, 13, 101).unwrap();
/// let ciphertext = engine.encode("CSE361").unwrap();
/// assert_eq!(engine.decode(&ciphertext).unwrap(), "CSE361");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherShift {
    keystream: Keystream,
}

impl CipherShift {
    /// Creates a new engine from keystream parameters.
    ///
    /// # Parameters
    /// - `a`: quadratic coefficient of the keystream polynomial.
    /// - `b`: linear coefficient.
    /// - `c`: constant term.
    /// - `p`: modulus (intended prime, any value >= 1 is accepted).
    ///
    /// # Errors
    /// Returns [`CipherShiftError::InvalidModulus`] if `p <= 0`; no engine
    /// is produced in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ciphershift::CipherShift;
    ///
    /// let engine = CipherShift::new(3, 5, 7, 97);
    /// assert!(engine.is_ok());
    /// ```
    ///
    /// ```
    /// use ciphershift::CipherShift;
    ///
    /// let engine = CipherShift::new(3, 5, 7, 0);
    /// assert!(engine.is_err());
    /// ```
    pub fn new(a: i64, b: i64, c: i64, p: i64) -> Result<Self, CipherShiftError> {
        let keystream = Keystream::new(a, b, c, p)?;
        Ok(CipherShift { keystream })
    }

    /// Encodes a printable-ASCII string.
    ///
    /// Each code unit at position `i` is shifted forward by
    /// `key(i) + i` and wrapped back into `[32, 126]`.
    ///
    /// # Parameters
    /// - `plaintext`: Input string; every character must be in `[32, 126]`.
    ///
    /// # Returns
    /// The ciphertext, same length as the input, all characters in
    /// `[32, 126]`.
    ///
    /// # Errors
    /// Returns [`CipherShiftError::InputOutOfRange`] at the first character
    /// outside the printable range. The engine itself stays valid; a later
    /// call with in-range input succeeds.
    pub fn encode(&self, plaintext: &str) -> Result<String, CipherShiftError> {
        self.transform(plaintext, Direction::Forward)
    }

    /// Decodes a string produced by [`encode`](Self::encode) with the same
    /// parameters.
    ///
    /// Exact left inverse of `encode`: each code unit at position `i` is
    /// shifted backward by `key(i) + i` and wrapped back into `[32, 126]`.
    ///
    /// # Parameters
    /// - `ciphertext`: Input string; every character must be in `[32, 126]`.
    ///   Ciphertext produced by `encode` always satisfies this.
    ///
    /// # Errors
    /// Returns [`CipherShiftError::InputOutOfRange`] at the first character
    /// outside the printable range.
    pub fn decode(&self, ciphertext: &str) -> Result<String, CipherShiftError> {
        self.transform(ciphertext, Direction::Backward)
    }

    /// Evaluates the keystream at the given position.
    ///
    /// Exposed for diagnostics and testing; encode and decode call the
    /// same function internally.
    ///
    /// # Returns
    /// `(a·i² + b·i + c) mod p`, always in `[0, p-1]`.
    pub fn key_at(&self, position: usize) -> i64 {
        self.keystream.key_at(position)
    }

    /// Returns the keys for positions `0..n`.
    ///
    /// Read-only diagnostic mirroring the keystream encode and decode
    /// consume; no state is mutated.
    pub fn key_progression(&self, n: usize) -> Vec<i64> {
        (0..n).map(|i| self.keystream.key_at(i)).collect()
    }

    /// Renders the keystream formula for display.
    ///
    /// # Examples
    ///
    /// ```
    /// use ciphershift::CipherShift;
    ///
    /// let engine = CipherShift::new(3, 5, 7, 97).unwrap();
    /// assert_eq!(engine.formula(), "key(i) = (3*i² + 5*i + 7) % 97");
    /// ```
    pub fn formula(&self) -> String {
        format!(
            "key(i) = ({}*i² + {}*i + {}) % {}",
            self.keystream.a(),
            self.keystream.b(),
            self.keystream.c(),
            self.keystream.p()
        )
    }

    /// Shared per-string transform logic for encoding and decoding.
    ///
    /// For each position `i`:
    /// 1. Validate the code unit lies in `[32, 126]`.
    /// 2. Shift by `key(i) + i`, forward or backward.
    /// 3. Wrap into `[32, 126]` with a single Euclidean modulus.
    fn transform(&self, text: &str, direction: Direction) -> Result<String, CipherShiftError> {
        let mut output = String::with_capacity(text.len());
        for (position, ch) in text.chars().enumerate() {
            let value = ch as u32;
            if !(ASCII_MIN as u32..=ASCII_MAX as u32).contains(&value) {
                return Err(CipherShiftError::InputOutOfRange { position, value });
            }
            let shift = self.keystream.key_at(position) as i128 + position as i128;
            let raw = match direction {
                Direction::Forward => value as i128 + shift,
                Direction::Backward => value as i128 - shift,
            };
            let wrapped = (raw - ASCII_MIN).rem_euclid(ALPHABET_SIZE) + ASCII_MIN;
            // wrapped is in [32, 126] by construction.
            output.push(wrapped as u8 as char);
        }
        Ok(output)
    }
}

/// Transform direction: forward applies the shift, backward removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}
