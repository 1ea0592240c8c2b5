//! Dimension calculation for aspect-ratio-correct ASCII rendering.

/// Default terminal correction ratio.
/// Character cells are roughly 22 units tall for every 10 wide, so an
/// aspect-preserved image needs this factor fewer rows to look right.
pub const CORRECTION_RATIO: f64 = 10.0 / 22.0;

/// Height that preserves the source aspect ratio at `width` columns.
///
/// `round(width * img_height / img_width)`.
pub fn aspect_height(img_width: u32, img_height: u32, width: u32) -> u32 {
    if img_width == 0 {
        return 0;
    }
    (width as f64 * img_height as f64 / img_width as f64).round() as u32
}

/// Calculate output dimensions for a target width.
///
/// A `width` of 0 keeps the native resolution and skips the correction.
/// Otherwise the aspect-preserved height is scaled by `correction_ratio`
/// and rounded, never dropping below one row.
///
/// # Example
/// ```ignore
/// // 4x4 source at width 4: round(4 * 10/22) = 2 rows
/// assert_eq!(target_dimensions(4, 4, 4, CORRECTION_RATIO), (4, 2));
/// ```
pub fn target_dimensions(
    img_width: u32,
    img_height: u32,
    width: u32,
    correction_ratio: f64,
) -> (u32, u32) {
    if width == 0 {
        return (img_width, img_height);
    }

    let height = aspect_height(img_width, img_height, width);
    let corrected = (height as f64 * correction_ratio).round() as u32;
    (width, corrected.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_width_keeps_dimensions() {
        assert_eq!(target_dimensions(640, 480, 0, CORRECTION_RATIO), (640, 480));
    }

    #[test]
    fn test_square_source() {
        assert_eq!(target_dimensions(4, 4, 4, CORRECTION_RATIO), (4, 2));
        // round(100 * 10 / 22) = 45
        assert_eq!(target_dimensions(200, 200, 100, CORRECTION_RATIO), (100, 45));
    }

    #[test]
    fn test_landscape_source() {
        // aspect height = 60, corrected = round(27.27) = 27
        assert_eq!(target_dimensions(640, 480, 80, CORRECTION_RATIO), (80, 27));
    }

    #[test]
    fn test_ratio_one_preserves_pixel_count() {
        let (w, h) = target_dimensions(30, 20, 30, 1.0);
        assert_eq!(w * h, 30 * 20);
    }

    #[test]
    fn test_very_wide_source_keeps_one_row() {
        assert_eq!(target_dimensions(1000, 1, 10, CORRECTION_RATIO), (10, 1));
    }

    #[test]
    fn test_aspect_height_rounds() {
        // 3 * 5 / 4 = 3.75
        assert_eq!(aspect_height(4, 5, 3), 4);
        assert_eq!(aspect_height(0, 5, 3), 0);
    }
}
