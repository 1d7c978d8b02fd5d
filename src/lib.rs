//! Deterministic password derivation from memorable secrets.
//!
//! A password is derived from five secrets (username, platform, and three
//! security answers) by iterating two trajectories of a delayed coupled
//! hyperbolic tangent chaotic map and rejection-sampling bytes extracted
//! from them. The same secrets, length, and alphabet always give the same
//! password; nothing is stored or transmitted.
//!
//! This is a proof of concept of a published chaotic-map scheme and is not
//! a cryptographically secure generator.
//!
//! # Architecture
//!
//! ```text
//! UserSecrets
//!     ↓ derivation (weighted inverse sums, initial conditions)
//! SystemParameters (a1 a2 b1 b2 Z1 Z2 x0 x1 y0 y1)
//!     ↓ two TanhDelayMap trajectories, 100 warm-up steps
//! prbg::combine (unpadded bit-reversed candidates, XOR)
//!     ↓ rejection sampling against the Alphabet
//! Password
//! ```
//!
//! # Compatibility
//!
//! Every floating-point step uses IEEE-754 `f64` with a fixed evaluation
//! order. Reimplementations must do the same to reproduce passwords.
//!
//! # Examples
//!
//! ```
//! use chaotic_passgen::{generate_password, Alphabet, CharacterClass, UserSecrets};
//!
//! let secrets = UserSecrets::new("alice", "github", "otter", "smith", "brown");
//! let alphabet = Alphabet::from_classes([
//!     CharacterClass::Lowercase,
//!     CharacterClass::Uppercase,
//!     CharacterClass::Numbers,
//! ]);
//!
//! let password = generate_password(&secrets, 16, &alphabet).unwrap();
//! assert_eq!(password.len(), 16);
//! assert!(password.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod generator;
pub mod random;
pub mod secrets;
pub(crate) mod utils;

pub use alphabet::{Alphabet, CharacterClass};
pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use generator::{generate_password, Password, PasswordGenerator, MAX_LENGTH, MIN_LENGTH};
pub use random::derivation::SystemParameters;
pub use secrets::UserSecrets;
