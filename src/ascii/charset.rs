//! Character palettes for ASCII rendering.

use crate::render::RenderError;

/// Standard density ramp (70 levels).
/// Characters ordered from densest (`$`) to sparsest (space), so dark pixels
/// map to heavy glyphs.
pub const STANDARD_CHARSET: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Short density ramp (17 levels).
/// Coarser, higher-contrast look for small widths.
pub const SHORT_CHARSET: &str = "MN8@O$Zbe*+!:.,  ";

/// Block character ramp (5 levels), densest first.
pub const BLOCKS_CHARSET: &str = "█▓▒░ ";

/// Built-in palette selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// 70-level ASCII ramp
    #[default]
    Standard,
    /// 17-level ASCII ramp
    Short,
    /// Unicode shade blocks
    Blocks,
}

impl CharSet {
    /// Get the character ramp for this charset.
    pub fn chars(&self) -> &'static str {
        match self {
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Short => SHORT_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Short => "short",
            CharSet::Blocks => "blocks",
        }
    }

    /// Parse a charset name as written in the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "standard" => Some(CharSet::Standard),
            "short" => Some(CharSet::Short),
            "blocks" => Some(CharSet::Blocks),
            _ => None,
        }
    }

    /// Build the palette for this charset.
    pub fn palette(&self) -> Palette {
        Palette {
            chars: self.chars().chars().collect(),
        }
    }
}

/// An ordered, non-empty brightness ramp.
///
/// Index 0 is used for brightness 0. Insertion order is preserved, so a
/// palette meant for non-inverted rendering is authored densest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    /// Build a palette from a string, one entry per `char`.
    ///
    /// Returns [`RenderError::EmptyPalette`] for an empty string.
    pub fn new(chars: &str) -> Result<Self, RenderError> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        Ok(Self { chars })
    }

    /// Number of brightness levels.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Never true for a palette built through [`Palette::new`].
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, clamped to the last entry.
    pub fn get(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }

    /// The same ramp in reverse order.
    pub fn reversed(&self) -> Self {
        Self {
            chars: self.chars.iter().rev().copied().collect(),
        }
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_palettes_not_empty() {
        for set in [CharSet::Standard, CharSet::Short, CharSet::Blocks] {
            assert!(set.palette().len() >= 2, "{} too short", set.name());
        }
    }

    #[test]
    fn test_standard_palette_length() {
        assert_eq!(CharSet::Standard.palette().len(), 70);
        assert_eq!(CharSet::Short.palette().len(), 17);
    }

    #[test]
    fn test_palette_rejects_empty() {
        assert!(matches!(Palette::new(""), Err(RenderError::EmptyPalette)));
    }

    #[test]
    fn test_palette_counts_unicode_chars() {
        let palette = Palette::new("█▓▒░ ").unwrap();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.get(0), '█');
    }

    #[test]
    fn test_palette_get_clamps() {
        let palette = Palette::new("ab").unwrap();
        assert_eq!(palette.get(1), 'b');
        assert_eq!(palette.get(99), 'b');
    }

    #[test]
    fn test_palette_reversed() {
        let palette = Palette::new("abc").unwrap();
        assert_eq!(palette.reversed().as_slice(), &['c', 'b', 'a']);
    }

    #[test]
    fn test_charset_from_name() {
        assert_eq!(CharSet::from_name("Short"), Some(CharSet::Short));
        assert_eq!(CharSet::from_name("blocks"), Some(CharSet::Blocks));
        assert_eq!(CharSet::from_name("braille"), None);
    }
}
