//! Password sampling over two chaotic trajectories.
//!
//! Orchestrates the full pipeline: derives [`SystemParameters`] from the
//! secrets, seeds two [`TanhDelayMap`] trajectories, discards the
//! transient, then rejection-samples combined candidate bytes against the
//! alphabet until the password is full.
//!
//! Every step is a pure function of `(secrets, length, alphabet, warm_up)`,
//! so identical requests always make identical accept/reject decisions.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::alphabet::Alphabet;
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::random::derivation::SystemParameters;
use crate::random::prbg;
use crate::random::tanh_map::{ChaoticMap, TanhDelayMap};
use crate::secrets::UserSecrets;

/// Shortest password that can be requested.
pub const MIN_LENGTH: usize = 6;

/// Longest password that can be requested.
pub const MAX_LENGTH: usize = 100;

/// A generated password.
///
/// `Debug` output is redacted; use [`as_str`](Self::as_str) or `Display`
/// to hand the value to the user.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the password.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars redacted>)", self.len())
    }
}

/// Stateless password generator.
///
/// Holds only configuration, so one instance can serve any number of
/// concurrent requests.
///
/// # Examples
///
/// ```
/// use chaotic_passgen::{Alphabet, GeneratorConfig, PasswordGenerator, UserSecrets};
///
/// let generator = PasswordGenerator::new(GeneratorConfig::default());
/// let secrets = UserSecrets::new("alice", "github", "otter", "smith", "brown");
///
/// let first = generator.generate(&secrets, 12, &Alphabet::all()).unwrap();
/// let second = generator.generate(&secrets, 12, &Alphabet::all()).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(first.len(), 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator {
    config: GeneratorConfig,
}

impl PasswordGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        PasswordGenerator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Derives a password of `length` characters drawn from `alphabet`.
    ///
    /// # Parameters
    /// - `secrets`: The five memorable secrets.
    /// - `length`: Number of characters, in `[MIN_LENGTH, MAX_LENGTH]`.
    /// - `alphabet`: Admissible characters.
    ///
    /// # Errors
    /// - [`GenerationError::InvalidLength`] if `length` is out of range.
    /// - [`GenerationError::EmptyAlphabet`] if `alphabet` has no characters.
    /// - [`GenerationError::UnreachableAlphabet`] if no member is in `0..=127`.
    /// - [`GenerationError::InvalidConfig`] if the configuration is invalid.
    /// - [`GenerationError::NonTerminatingSample`] if the iteration cap is hit.
    pub fn generate(
        &self,
        secrets: &UserSecrets,
        length: usize,
        alphabet: &Alphabet,
    ) -> Result<Password, GenerationError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(GenerationError::InvalidLength {
                requested: length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        if alphabet.is_empty() {
            return Err(GenerationError::EmptyAlphabet);
        }
        if !alphabet.is_reachable() {
            return Err(GenerationError::UnreachableAlphabet);
        }
        self.config.validate()?;

        debug!(length, alphabet_size = alphabet.len(), "generating password");

        let params = SystemParameters::derive(secrets);
        let mut first = TanhDelayMap::new(params.first_map(), params.first_origin());
        let mut second = TanhDelayMap::new(params.second_map(), params.second_origin());

        first.skip(self.config.warm_up);
        second.skip(self.config.warm_up);
        trace!(warm_up = self.config.warm_up, "transient discarded");

        let mut password = String::with_capacity(length);
        let mut produced = 0usize;
        let mut steps = 0u64;

        while produced < length {
            if steps == self.config.max_iterations {
                warn!(
                    max_iterations = self.config.max_iterations,
                    produced, length, "sampling iteration cap reached"
                );
                return Err(GenerationError::NonTerminatingSample {
                    max_iterations: self.config.max_iterations,
                    produced,
                    requested: length,
                });
            }
            steps += 1;

            first.next_point();
            second.next_point();

            let candidate = prbg::combine(first.current(), second.current());
            if let Some(c) = alphabet.contains_code(candidate as u32) {
                password.push(c);
                produced += 1;
            }
        }

        debug!(steps, produced, "password generated");
        Ok(Password(password))
    }
}

/// Derives a password with the default configuration.
///
/// # Examples
///
/// ```
/// use chaotic_passgen::{generate_password, Alphabet, GenerationError, UserSecrets};
///
/// let secrets = UserSecrets::new("alice", "github", "otter", "smith", "brown");
/// let password = generate_password(&secrets, 8, &Alphabet::all()).unwrap();
/// assert_eq!(password.len(), 8);
///
/// let empty = Alphabet::from_chars("");
/// assert_eq!(
///     generate_password(&secrets, 8, &empty),
///     Err(GenerationError::EmptyAlphabet)
/// );
/// ```
pub fn generate_password(
    secrets: &UserSecrets,
    length: usize,
    alphabet: &Alphabet,
) -> Result<Password, GenerationError> {
    PasswordGenerator::default().generate(secrets, length, alphabet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::CharacterClass;

    fn sample_secrets() -> UserSecrets {
        UserSecrets::new("alice", "github", "otter", "smith", "brown")
    }

    #[test]
    fn test_generate_length_and_membership() {
        let alphabet = Alphabet::all();
        let password = generate_password(&sample_secrets(), 16, &alphabet).unwrap();
        assert_eq!(password.len(), 16);
        assert!(password.as_str().chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_deterministic_generation() {
        let alphabet = Alphabet::all();
        let first = generate_password(&sample_secrets(), 32, &alphabet).unwrap();
        let second = generate_password(&sample_secrets(), 32, &alphabet).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shorter_request_is_prefix() {
        // The accept/reject sequence does not depend on the requested length.
        let alphabet = Alphabet::all();
        let short = generate_password(&sample_secrets(), 10, &alphabet).unwrap();
        let long = generate_password(&sample_secrets(), 40, &alphabet).unwrap();
        assert!(long.as_str().starts_with(short.as_str()));
    }

    #[test]
    fn test_invalid_lengths() {
        let alphabet = Alphabet::all();
        for length in [0, 5, 101, 1000] {
            assert_eq!(
                generate_password(&sample_secrets(), length, &alphabet),
                Err(GenerationError::InvalidLength {
                    requested: length,
                    min: MIN_LENGTH,
                    max: MAX_LENGTH,
                })
            );
        }
    }

    #[test]
    fn test_length_checked_before_alphabet() {
        let empty = Alphabet::from_chars("");
        assert!(matches!(
            generate_password(&sample_secrets(), 5, &empty),
            Err(GenerationError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_empty_alphabet() {
        let empty = Alphabet::from_chars("");
        assert_eq!(
            generate_password(&sample_secrets(), 8, &empty),
            Err(GenerationError::EmptyAlphabet)
        );
    }

    #[test]
    fn test_unreachable_alphabet() {
        let alphabet = Alphabet::from_chars("äöü");
        assert_eq!(
            generate_password(&sample_secrets(), 8, &alphabet),
            Err(GenerationError::UnreachableAlphabet)
        );
    }

    #[test]
    fn test_iteration_cap_below_length() {
        // Each step accepts at most one character, so 5 steps cannot fill 6.
        let generator =
            PasswordGenerator::new(GeneratorConfig::default().with_max_iterations(5));
        let result = generator.generate(&sample_secrets(), 6, &Alphabet::all());
        match result {
            Err(GenerationError::NonTerminatingSample {
                max_iterations,
                produced,
                requested,
            }) => {
                assert_eq!(max_iterations, 5);
                assert!(produced <= 5);
                assert_eq!(requested, 6);
            }
            other => panic!("expected NonTerminatingSample, got {:?}", other),
        }
    }

    #[test]
    fn test_generator_keeps_config() {
        let config = GeneratorConfig::default()
            .with_warm_up(150)
            .with_max_iterations(1000);
        let generator = PasswordGenerator::new(config);
        assert_eq!(generator.config(), &config);
        assert_eq!(
            PasswordGenerator::default().config(),
            &GeneratorConfig::default()
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let generator =
            PasswordGenerator::new(GeneratorConfig::default().with_max_iterations(0));
        assert!(matches!(
            generator.generate(&sample_secrets(), 8, &Alphabet::all()),
            Err(GenerationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_warm_up_changes_output() {
        let alphabet = Alphabet::all();
        let default = generate_password(&sample_secrets(), 20, &alphabet).unwrap();
        let shifted = PasswordGenerator::new(GeneratorConfig::default().with_warm_up(150))
            .generate(&sample_secrets(), 20, &alphabet)
            .unwrap();
        assert_ne!(default, shifted);
    }

    #[test]
    fn test_digits_only() {
        let alphabet = Alphabet::from_classes([CharacterClass::Numbers]);
        let password = generate_password(&sample_secrets(), 12, &alphabet).unwrap();
        assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_password_debug_redacted() {
        let password = generate_password(&sample_secrets(), 8, &Alphabet::all()).unwrap();
        let rendered = format!("{:?}", password);
        assert_eq!(rendered, "Password(<8 chars redacted>)");
        assert_eq!(format!("{}", password), password.as_str());
    }

    #[test]
    fn test_generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PasswordGenerator>();
    }
}
