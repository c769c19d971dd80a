//! Random password generation.
//!
//! The RNG is an explicit argument so the routine itself stays
//! deterministic and testable; callers pick the entropy source.

use crate::error::ToolError;
use rand::Rng;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Which character sets to draw from, and how many characters to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl PasswordOptions {
    fn charset(&self) -> String {
        let mut set = String::new();
        if self.uppercase {
            set.push_str(UPPERCASE);
        }
        if self.lowercase {
            set.push_str(LOWERCASE);
        }
        if self.digits {
            set.push_str(DIGITS);
        }
        if self.symbols {
            set.push_str(SYMBOLS);
        }
        set
    }
}

/// Draw `options.length` characters uniformly from the enabled sets.
pub fn generate(options: &PasswordOptions, rng: &mut impl Rng) -> Result<String, ToolError> {
    if options.length == 0 {
        return Err(ToolError::invalid_input(
            "password length",
            "must be at least one character",
        ));
    }
    let charset = options.charset();
    if charset.is_empty() {
        return Err(ToolError::invalid_input(
            "character sets",
            "select at least one character type",
        ));
    }

    let chars: Vec<char> = charset.chars().collect();
    Ok((0..options.length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect())
}
