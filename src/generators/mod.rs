// src/generators/mod.rs
pub mod password;
pub mod strength;

pub use password::{generate_password, GeneratorError};
pub use strength::{calculate_strength, strength_color, strength_description, StrengthBand};
