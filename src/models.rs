// src/models.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Selection of character classes a password draws from.
///
/// The four flags are independent; all of them may be false, which the
/// generator rejects but the strength scorer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharacterClasses {
    /// Uppercase letters A-Z
    pub uppercase: bool,
    /// Lowercase letters a-z
    pub lowercase: bool,
    /// Digits 0-9
    pub numbers: bool,
    /// Punctuation/symbol characters
    pub symbols: bool,
}

impl CharacterClasses {
    pub const ALL: CharacterClasses = CharacterClasses {
        uppercase: true,
        lowercase: true,
        numbers: true,
        symbols: true,
    };

    pub const NONE: CharacterClasses = CharacterClasses {
        uppercase: false,
        lowercase: false,
        numbers: false,
        symbols: false,
    };

    /// Number of enabled classes.
    pub fn count(&self) -> usize {
        [self.uppercase, self.lowercase, self.numbers, self.symbols]
            .iter()
            .filter(|&&flag| flag)
            .count()
    }

    pub fn any(&self) -> bool {
        self.uppercase || self.lowercase || self.numbers || self.symbols
    }

    /// Derive which classes actually occur in a password. ASCII-class
    /// membership: anything that is not an ASCII letter or digit counts
    /// as a symbol.
    pub fn present_in(password: &str) -> CharacterClasses {
        CharacterClasses {
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            numbers: password.chars().any(|c| c.is_ascii_digit()),
            symbols: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }
}

/// Options for a single password generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    /// Number of characters to generate
    pub length: usize,
    /// Enabled character classes
    pub classes: CharacterClasses,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_flags() {
        assert_eq!(CharacterClasses::ALL.count(), 4);
        assert_eq!(CharacterClasses::NONE.count(), 0);
        let lower_only = CharacterClasses {
            lowercase: true,
            ..CharacterClasses::NONE
        };
        assert_eq!(lower_only.count(), 1);
        assert!(lower_only.any());
        assert!(!CharacterClasses::NONE.any());
    }

    #[test]
    fn present_in_detects_each_class() {
        assert_eq!(CharacterClasses::present_in("Ab3!"), CharacterClasses::ALL);

        let present = CharacterClasses::present_in("abc");
        assert!(present.lowercase);
        assert!(!present.uppercase);
        assert!(!present.numbers);
        assert!(!present.symbols);
    }

    #[test]
    fn present_in_empty_is_none() {
        assert_eq!(CharacterClasses::present_in(""), CharacterClasses::NONE);
    }
}
