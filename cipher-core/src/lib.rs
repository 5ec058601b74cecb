// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The main library crate for cipher-core, exposing the classical ciphers and their configuration.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Cipher Core Library
//!
//! Classical ciphers over the uppercase Latin alphabet: the fractionating
//! Polybius cipher, the plain Polybius square, Atbash and Scytale.
//!
//! All ciphers are deterministic, immutable once built and safe to share
//! between threads. None of them offers any real security.
//!
//! ```
//! use cipher_core::{Cipher, CipherConfig, CipherKind};
//!
//! let cipher = CipherConfig::default().build(CipherKind::Polybius).unwrap();
//! let ciphertext = cipher.encrypt("some text").unwrap();
//! assert_eq!(ciphertext, "IUPTNQVO");
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "SOMETEXT");
//! ```

/// The Atbash cipher.
pub mod atbash;
/// The interface shared by all ciphers.
pub mod cipher;
/// Loading and saving of cipher settings.
pub mod config;
/// Error types.
pub mod error;
/// Input validation.
pub mod message;
/// The Polybius square and the fractionating cipher built on it.
pub mod polybius;
/// The Scytale cipher.
pub mod scytale;

pub use atbash::Atbash;
pub use cipher::{Cipher, CipherKind};
pub use config::{CipherConfig, load_config, save_config};
pub use error::{CipherError, ConfigError};
pub use message::Message;
pub use polybius::{Grid, PolybiusCipher, PolybiusSquare};
pub use scytale::Scytale;
