//! Admissible character sets for generated passwords.
//!
//! An [`Alphabet`] is a plain set of characters. [`CharacterClass`] is the
//! fixed table of named classes a form typically offers as checkboxes;
//! classes only ever contribute characters, so their order is irrelevant.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Highest code point the candidate extractor can emit.
const MAX_CANDIDATE: u32 = 127;

/// Named groups of characters that can be enabled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Exclamation,
    At,
    Hash,
    Dollar,
    Percent,
    Caret,
    Ampersand,
    Numbers,
    Asterisk,
    Parentheses,
    Dash,
    Underscore,
    Plus,
    Equals,
    Semicolon,
    Uppercase,
    Colon,
    Period,
    AngleBrackets,
    Comma,
    ForwardSlash,
    QuestionMark,
    Space,
    Lowercase,
}

impl CharacterClass {
    /// Every class, in form order.
    pub const ALL: [CharacterClass; 24] = [
        CharacterClass::Exclamation,
        CharacterClass::At,
        CharacterClass::Hash,
        CharacterClass::Dollar,
        CharacterClass::Percent,
        CharacterClass::Caret,
        CharacterClass::Ampersand,
        CharacterClass::Numbers,
        CharacterClass::Asterisk,
        CharacterClass::Parentheses,
        CharacterClass::Dash,
        CharacterClass::Underscore,
        CharacterClass::Plus,
        CharacterClass::Equals,
        CharacterClass::Semicolon,
        CharacterClass::Uppercase,
        CharacterClass::Colon,
        CharacterClass::Period,
        CharacterClass::AngleBrackets,
        CharacterClass::Comma,
        CharacterClass::ForwardSlash,
        CharacterClass::QuestionMark,
        CharacterClass::Space,
        CharacterClass::Lowercase,
    ];

    /// Returns the literal characters this class contributes.
    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Exclamation => "!",
            CharacterClass::At => "@",
            CharacterClass::Hash => "#",
            CharacterClass::Dollar => "$",
            CharacterClass::Percent => "%",
            CharacterClass::Caret => "^",
            CharacterClass::Ampersand => "&",
            CharacterClass::Numbers => "0123456789",
            CharacterClass::Asterisk => "*",
            CharacterClass::Parentheses => "()",
            CharacterClass::Dash => "-",
            CharacterClass::Underscore => "_",
            CharacterClass::Plus => "+",
            CharacterClass::Equals => "=",
            CharacterClass::Semicolon => ";",
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Colon => ":",
            CharacterClass::Period => ".",
            CharacterClass::AngleBrackets => "<>",
            CharacterClass::Comma => ",",
            CharacterClass::ForwardSlash => "/",
            CharacterClass::QuestionMark => "?",
            CharacterClass::Space => " ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
        }
    }
}

/// A set of admissible password characters.
///
/// # Examples
///
/// ```
/// use chaotic_passgen::{Alphabet, CharacterClass};
///
/// let alphabet = Alphabet::from_classes([CharacterClass::Numbers, CharacterClass::Dash]);
/// assert_eq!(alphabet.len(), 11);
/// assert_eq!(alphabet.contains_code(b'-' as u32), Some('-'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    chars: BTreeSet<char>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `chars`. Duplicates collapse.
    pub fn from_chars(chars: &str) -> Self {
        chars.chars().collect()
    }

    /// Builds an alphabet from the union of the given classes.
    pub fn from_classes<I>(classes: I) -> Self
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        classes
            .into_iter()
            .flat_map(|class| class.chars().chars())
            .collect()
    }

    /// Every character class enabled.
    pub fn all() -> Self {
        Self::from_classes(CharacterClass::ALL)
    }

    /// Returns the member whose code point is `code`, if any.
    pub fn contains_code(&self, code: u32) -> Option<char> {
        char::from_u32(code).filter(|c| self.chars.contains(c))
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether any member can be produced by the candidate extractor.
    pub fn is_reachable(&self) -> bool {
        self.chars.iter().any(|&c| c as u32 <= MAX_CANDIDATE)
    }

    /// Iterates the members in code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Alphabet {
            chars: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_classes_size() {
        // 62 alphanumerics, 19 single symbols including space, 2 bracket pairs
        assert_eq!(Alphabet::all().len(), 85);
    }

    #[test]
    fn test_duplicates_collapse() {
        let alphabet = Alphabet::from_chars("aabbcc");
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn test_class_order_irrelevant() {
        let forward = Alphabet::from_classes([CharacterClass::Numbers, CharacterClass::Uppercase]);
        let backward = Alphabet::from_classes([CharacterClass::Uppercase, CharacterClass::Numbers]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_iter_in_code_point_order() {
        let alphabet = Alphabet::from_chars("zA9a-");
        let members: String = alphabet.iter().collect();
        assert_eq!(members, "-9Aaz");
    }

    #[test]
    fn test_contains_code() {
        let alphabet = Alphabet::from_classes([CharacterClass::Lowercase]);
        assert_eq!(alphabet.contains_code(97), Some('a'));
        assert_eq!(alphabet.contains_code(65), None);
        assert_eq!(alphabet.contains_code(0xD800), None);
    }

    #[test]
    fn test_empty() {
        let alphabet = Alphabet::from_chars("");
        assert!(alphabet.is_empty());
        assert!(!alphabet.is_reachable());
    }

    #[test]
    fn test_reachability() {
        assert!(Alphabet::from_chars("é!").is_reachable());
        assert!(!Alphabet::from_chars("éü€").is_reachable());
    }

    #[test]
    fn test_class_serde_names() {
        let encoded = serde_json::to_string(&CharacterClass::AngleBrackets).unwrap();
        assert_eq!(encoded, "\"angle_brackets\"");
        let decoded: CharacterClass = serde_json::from_str("\"forward_slash\"").unwrap();
        assert_eq!(decoded, CharacterClass::ForwardSlash);
    }

    #[test]
    fn test_every_class_is_printable_ascii() {
        for class in CharacterClass::ALL {
            for c in class.chars().chars() {
                assert!((' '..='~').contains(&c), "{:?} has {:?}", class, c);
            }
        }
    }
}
