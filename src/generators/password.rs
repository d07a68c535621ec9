// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use thiserror::Error;

use crate::models::{CharacterClasses, PasswordGenerationOptions};

pub const UPPERCASE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const NUMBER_CHARS: &[u8] = b"0123456789";
pub const SYMBOL_CHARS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("at least one character class must be selected")]
    NoCharacterClasses,
}

/// Concatenate the character sets of the enabled classes, in the fixed
/// order uppercase, lowercase, digits, symbols. Empty iff no class is
/// enabled.
pub fn character_pool(classes: &CharacterClasses) -> Vec<u8> {
    let mut pool = Vec::new();
    if classes.uppercase {
        pool.extend_from_slice(UPPERCASE_CHARS);
    }
    if classes.lowercase {
        pool.extend_from_slice(LOWERCASE_CHARS);
    }
    if classes.numbers {
        pool.extend_from_slice(NUMBER_CHARS);
    }
    if classes.symbols {
        pool.extend_from_slice(SYMBOL_CHARS);
    }
    pool
}

/// Generate a random password of exactly `options.length` characters, each
/// drawn independently and uniformly from the pool of enabled classes.
///
/// Returns `GeneratorError::NoCharacterClasses` when all four class flags
/// are false; there is no silent fallback pool.
///
/// Characters come from the operating system CSPRNG (`OsRng`). The
/// `Uniform` distribution rejection-samples, so every pool character has
/// equal probability regardless of pool size.
pub fn generate_password(options: &PasswordGenerationOptions) -> Result<String, GeneratorError> {
    if !options.classes.any() {
        return Err(GeneratorError::NoCharacterClasses);
    }
    if options.length == 0 {
        return Ok(String::new());
    }

    let pool = character_pool(&options.classes);

    let dist = Uniform::from(0..pool.len());
    let mut rng = OsRng;

    Ok((0..options.length)
        .map(|_| pool[dist.sample(&mut rng)] as char)
        .collect())
}
