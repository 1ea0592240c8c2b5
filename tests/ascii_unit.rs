//! Unit tests for the ASCII rendering primitives.
//!
//! These tests verify:
//! - Brightness to palette index mapping
//! - Inversion symmetry
//! - Resize dimensions and the terminal correction

use asciigen::ascii::*;
use asciigen::render::{render_frame, RenderConfig};
use image::{DynamicImage, Rgba, RgbaImage};

fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([value, value, value, 255]),
    ))
}

// ==================== Mapping Tests ====================

#[test]
fn test_mapping_index_bounds_for_builtin_palettes() {
    for set in [CharSet::Standard, CharSet::Short, CharSet::Blocks] {
        let palette = set.palette();
        for b in 0..=255u8 {
            let idx = char_index(b, palette.len(), false);
            assert!(idx < palette.len());
        }
        assert_eq!(map_to_char(0, &palette, false), palette.get(0));
        assert_eq!(
            map_to_char(255, &palette, false),
            palette.get(palette.len() - 1)
        );
    }
}

#[test]
fn test_mapping_is_monotonic() {
    let palette = CharSet::Standard.palette();
    let mut last = 0;
    for b in 0..=255u8 {
        let idx = char_index(b, palette.len(), false);
        assert!(idx >= last, "index went down at brightness {}", b);
        last = idx;
    }
}

// ==================== Inversion Tests ====================

#[test]
fn test_inverted_render_matches_reversed_palette() {
    // Brightness levels that land exactly on palette steps (255 / 5 = 51)
    let palette = Palette::new("@%*+. ").unwrap();
    for step in 0..=5u8 {
        let bitmap = solid(3, 2, step * 51);
        let inverted = RenderConfig::new(palette.reversed(), true, 0);
        let plain = RenderConfig::new(palette.clone(), false, 0);

        let a = render_frame(&bitmap, &inverted, 0).unwrap();
        let b = render_frame(&bitmap, &plain, 0).unwrap();
        assert_eq!(a.text, b.text, "mismatch at brightness {}", step * 51);
    }
}

/// Deterministic bitmap of uniformly spread gray levels.
fn noise(width: u32, height: u32, seed: u64) -> DynamicImage {
    let mut state = seed;
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |_, _| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let v = (state >> 56) as u8;
        Rgba([v, v, v, 255])
    }))
}

#[test]
fn test_inverted_render_within_one_step_of_reversed_palette() {
    const RAMP: &str = "abcdefghijklmnop";

    for levels in 2..=RAMP.len() {
        let palette = Palette::new(&RAMP[..levels]).unwrap();
        let plain = RenderConfig::new(palette.clone(), false, 0);
        let inverted = RenderConfig::new(palette.reversed(), true, 0);

        for seed in 0..8u64 {
            let bitmap = noise(16, 9, seed);
            let a = render_frame(&bitmap, &plain, 0).unwrap();
            let b = render_frame(&bitmap, &inverted, 0).unwrap();

            for (x, y) in a.text.chars().zip(b.text.chars()) {
                if x == '\n' {
                    assert_eq!(y, '\n');
                    continue;
                }
                let i = palette.as_slice().iter().position(|&c| c == x).unwrap();
                let j = palette.as_slice().iter().position(|&c| c == y).unwrap();
                assert!(
                    i.abs_diff(j) <= 1,
                    "{} levels, seed {}: index {} vs {}",
                    levels,
                    seed,
                    i,
                    j
                );
            }
        }
    }
}

#[test]
fn test_inverted_index_within_one_step_for_every_brightness() {
    for levels in 2..=70usize {
        for b in 0..=255u8 {
            let plain = char_index(b, levels, false);
            let through_reversed = levels - 1 - char_index(b, levels, true);
            assert!(
                plain.abs_diff(through_reversed) <= 1,
                "{} levels at brightness {}",
                levels,
                b
            );
        }
    }
}

#[test]
fn test_double_inversion_through_palette() {
    let palette = Palette::new("X ").unwrap();
    let bitmap = solid(2, 2, 255);
    let frame = render_frame(&bitmap, &RenderConfig::new(palette.reversed(), true, 0), 0).unwrap();
    assert_eq!(frame.text, "  \n  ");
}

// ==================== Dimension Tests ====================

#[test]
fn test_same_width_without_correction_keeps_pixel_count() {
    let bitmap = solid(12, 7, 128);
    let config = RenderConfig::new(Palette::new("ab").unwrap(), false, 12).with_correction_ratio(1.0);
    let frame = render_frame(&bitmap, &config, 0).unwrap();
    assert_eq!(frame.width * frame.height, 12 * 7);
}

#[test]
fn test_corrected_height_formula() {
    for (w, h, target) in [(4u32, 4u32, 4u32), (640, 480, 80), (100, 300, 33), (7, 3, 20)] {
        let (_, height) = target_dimensions(w, h, target, CORRECTION_RATIO);
        let expected = (aspect_height(w, h, target) as f64 * CORRECTION_RATIO).round() as u32;
        assert_eq!(height, expected.max(1), "{}x{} at {}", w, h, target);
    }
}

#[test]
fn test_frame_height_matches_row_count() {
    let bitmap = solid(50, 30, 90);
    let config = RenderConfig::new(CharSet::Short.palette(), false, 25);
    let frame = render_frame(&bitmap, &config, 0).unwrap();
    assert_eq!(frame.rows().count() as u32, frame.height);
    assert!(frame.rows().all(|r| r.chars().count() == 25));
}
