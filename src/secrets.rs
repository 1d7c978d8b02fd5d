//! The five memorable secrets a password is derived from.
//!
//! No normalization is applied: each character contributes its Unicode
//! scalar value exactly as typed, so `"Rex"` and `"rex"` are different
//! secrets.

use std::collections::HashMap;
use std::fmt;

use crate::error::GenerationError;

/// Field name of the account username.
pub const USERNAME: &str = "username";
/// Field name of the platform the password is for.
pub const PLATFORM: &str = "platform";
/// Field name of the first security answer.
pub const FAVORITE_ANIMAL: &str = "favorite_animal";
/// Field name of the second security answer.
pub const MOTHER_FAMILY_NAME: &str = "mother_family_name";
/// Field name of the third security answer.
pub const FIRST_TEACHER_NAME: &str = "first_teacher_name";

/// Immutable bundle of the user's secrets for one generation request.
///
/// `Debug` output is redacted so the secrets cannot leak through logs or
/// panic messages.
#[derive(Clone, PartialEq, Eq)]
pub struct UserSecrets {
    username: String,
    platform: String,
    favorite_animal: String,
    mother_family_name: String,
    first_teacher_name: String,
}

impl UserSecrets {
    /// Creates a new secrets bundle.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaotic_passgen::UserSecrets;
    ///
    /// let secrets = UserSecrets::new("alice", "github", "otter", "smith", "brown");
    /// assert_eq!(secrets.platform(), "github");
    /// ```
    pub fn new(
        username: impl Into<String>,
        platform: impl Into<String>,
        favorite_animal: impl Into<String>,
        mother_family_name: impl Into<String>,
        first_teacher_name: impl Into<String>,
    ) -> Self {
        UserSecrets {
            username: username.into(),
            platform: platform.into(),
            favorite_animal: favorite_animal.into(),
            mother_family_name: mother_family_name.into(),
            first_teacher_name: first_teacher_name.into(),
        }
    }

    /// Builds the secrets from a map keyed by the canonical field names.
    ///
    /// Extra keys are ignored.
    ///
    /// # Errors
    /// Returns [`GenerationError::MissingField`] naming the first absent field.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, GenerationError> {
        let lookup = |name: &str| {
            fields
                .get(name)
                .cloned()
                .ok_or_else(|| GenerationError::MissingField(name.to_string()))
        };

        Ok(UserSecrets {
            username: lookup(USERNAME)?,
            platform: lookup(PLATFORM)?,
            favorite_animal: lookup(FAVORITE_ANIMAL)?,
            mother_family_name: lookup(MOTHER_FAMILY_NAME)?,
            first_teacher_name: lookup(FIRST_TEACHER_NAME)?,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn favorite_animal(&self) -> &str {
        &self.favorite_animal
    }

    pub fn mother_family_name(&self) -> &str {
        &self.mother_family_name
    }

    pub fn first_teacher_name(&self) -> &str {
        &self.first_teacher_name
    }
}

impl fmt::Debug for UserSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSecrets")
            .field(USERNAME, &"<redacted>")
            .field(PLATFORM, &"<redacted>")
            .field(FAVORITE_ANIMAL, &"<redacted>")
            .field(MOTHER_FAMILY_NAME, &"<redacted>")
            .field(FIRST_TEACHER_NAME, &"<redacted>")
            .finish()
    }
}
