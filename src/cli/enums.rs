//! CLI enum types for the character set option.

use clap::ValueEnum;

use crate::ascii;

/// ASCII character set for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Standard,
    Short,
    Blocks,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Short => ascii::CharSet::Short,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_to_ascii_charset() {
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Standard),
            ascii::CharSet::Standard
        );
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Short),
            ascii::CharSet::Short
        );
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Blocks),
            ascii::CharSet::Blocks
        );
    }
}
