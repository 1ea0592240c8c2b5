//! Brightness to character mapping.

use super::charset::Palette;

/// Palette index for a brightness value.
///
/// `index = brightness * (len - 1) / 255`, clamped to the palette. With
/// `invert` set, brightness is flipped to `255 - brightness` first.
#[inline]
pub fn char_index(brightness: u8, levels: usize, invert: bool) -> usize {
    if levels == 0 {
        return 0;
    }
    let b = if invert { 255 - brightness } else { brightness };
    let idx = (b as usize * (levels - 1)) / 255;
    idx.min(levels - 1)
}

/// Map one brightness value (0-255) to a palette character.
///
/// Lower brightness maps to earlier characters. For a palette authored
/// densest first, dark pixels therefore come out as heavy glyphs.
///
/// # Example
/// ```ignore
/// let palette = Palette::new("X ").unwrap();
/// assert_eq!(map_to_char(0, &palette, false), 'X');
/// assert_eq!(map_to_char(255, &palette, false), ' ');
/// ```
#[inline]
pub fn map_to_char(brightness: u8, palette: &Palette, invert: bool) -> char {
    palette.get(char_index(brightness, palette.len(), invert))
}

/// Map a row of brightness values into `buffer`, reusing its allocation.
///
/// Returns the number of characters written.
pub fn map_row_into(brightness: &[u8], palette: &Palette, invert: bool, buffer: &mut String) -> usize {
    buffer.clear();
    buffer.reserve(brightness.len());
    for &b in brightness {
        buffer.push(map_to_char(b, palette, invert));
    }
    brightness.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_in_bounds_for_all_levels() {
        for levels in 1..=80 {
            for b in 0..=255u8 {
                for invert in [false, true] {
                    let idx = char_index(b, levels, invert);
                    assert!(idx < levels, "b={} levels={} idx={}", b, levels, idx);
                }
            }
        }
    }

    #[test]
    fn test_endpoints() {
        for levels in 2..=70 {
            assert_eq!(char_index(0, levels, false), 0);
            assert_eq!(char_index(255, levels, false), levels - 1);
            assert_eq!(char_index(0, levels, true), levels - 1);
            assert_eq!(char_index(255, levels, true), 0);
        }
    }

    #[test]
    fn test_single_char_palette() {
        let palette = Palette::new("#").unwrap();
        for b in [0u8, 128, 255] {
            assert_eq!(map_to_char(b, &palette, false), '#');
            assert_eq!(map_to_char(b, &palette, true), '#');
        }
    }

    #[test]
    fn test_mid_brightness() {
        let palette = Palette::new("abcde").unwrap();
        // 128 * 4 / 255 = 2
        assert_eq!(map_to_char(128, &palette, false), 'c');
        // (255 - 64) * 4 / 255 = 2
        assert_eq!(map_to_char(64, &palette, true), 'c');
    }

    #[test]
    fn test_map_row_into_reuses_buffer() {
        let palette = Palette::new("X ").unwrap();
        let mut buffer = String::from("stale");
        let n = map_row_into(&[0, 255, 0], &palette, false, &mut buffer);
        assert_eq!(n, 3);
        assert_eq!(buffer, "X X");
    }
}
