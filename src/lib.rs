//! CipherShift reversible text transform engine.
//!
//! CipherShift shifts each character of a printable-ASCII string by a
//! position-dependent key drawn from a quadratic keystream polynomial:
//!
//! ```text
//! key(i) = (a·i² + b·i + c) mod p
//! ```
//!
//! Position `i` is then folded into the shift as well, so the code unit at
//! position `i` moves by `key(i) + i` steps through the 95-character
//! printable range `[32, 126]`, wrapping modularly. The transform is an
//! affine bijection on the residues mod 95 at every position, so decoding
//! with the same parameters restores the input exactly.
//!
//! This is a deterministic, reversible transform — **not** a secure cipher.
//! The keystream is a public low-degree polynomial and the parameter space
//! is tiny; use it where reproducible obfuscation is enough.
//!
//! # Architecture
//!
//! ```text
//! Keystream   (pure quadratic polynomial evaluation mod p)
//!     ↑ consulted per position
//! CipherShift (engine — owns the parameters, encodes/decodes strings)
//! ```
//!
//! # Examples
//!
//! Encode and decode a string:
//!
//! ```
//! use ciphershift::CipherShift;
//!
//! let engine = CipherShift::new(3, 5, 7, 97).unwrap();
//!
//! let ciphertext = engine.encode("Hello World").unwrap();
//! assert_ne!(ciphertext, "Hello World");
//!
//! let plaintext = engine.decode(&ciphertext).unwrap();
//! assert_eq!(plaintext, "Hello World");
//! ```
//!
//! Inspect the keystream for diagnostics:
//!
//! ```
//! use ciphershift::CipherShift;
//!
//! let engine = CipherShift::new(0, 5, 3, 97).unwrap();
//! assert_eq!(engine.key_progression(4), vec![3, 8, 13, 18]);
//! ```

#![deny(clippy::all)]

pub mod error;

mod cipher_shift;
mod keystream;

pub use cipher_shift::CipherShift;
