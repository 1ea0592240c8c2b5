//! Frame rendering: one decoded bitmap in, one text frame out.
//!
//! The bitmap is resized to the target width (with the terminal correction
//! applied to its height), then every pixel is sampled and mapped to a
//! palette character. Rows are rendered in parallel and reassembled in
//! row order.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbaImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ascii::{self, CharSet, Palette, CORRECTION_RATIO};

/// Largest target grid (in pixels, one per output character) a frame may use.
pub const MAX_TARGET_PIXELS: u64 = 1 << 26;

/// Errors raised while rendering a bitmap.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("character palette is empty")]
    EmptyPalette,

    #[error("bitmap has no pixels ({width}x{height})")]
    EmptyBitmap { width: u32, height: u32 },

    #[error("target size {width}x{height} is too large to render")]
    TooLarge { width: u32, height: u32 },

    #[error("correction ratio must be a positive number, got {0}")]
    InvalidRatio(f64),

    #[error("row {row} is outside the {height}-row bitmap")]
    RowOutOfBounds { row: u32, height: u32 },

    #[error("animation has no frames")]
    NoFrames,

    #[error("frame {index}: {source}")]
    Frame {
        index: usize,
        #[source]
        source: Box<RenderError>,
    },
}

/// Immutable settings threaded through every render call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Brightness ramp, index 0 for brightness 0
    pub palette: Palette,
    /// Flip brightness before mapping
    pub invert: bool,
    /// Output width in characters; 0 renders at native resolution
    pub width: u32,
    /// Height scale applied after the aspect-preserving resize
    pub correction_ratio: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: CharSet::Standard.palette(),
            invert: false,
            width: 0,
            correction_ratio: CORRECTION_RATIO,
        }
    }
}

impl RenderConfig {
    pub fn new(palette: Palette, invert: bool, width: u32) -> Self {
        Self {
            palette,
            invert,
            width,
            ..Self::default()
        }
    }

    pub fn with_correction_ratio(mut self, ratio: f64) -> Self {
        self.correction_ratio = ratio;
        self
    }

    fn validate(&self) -> Result<(), RenderError> {
        if self.palette.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        if !self.correction_ratio.is_finite() || self.correction_ratio <= 0.0 {
            return Err(RenderError::InvalidRatio(self.correction_ratio));
        }
        Ok(())
    }
}

/// One rendered text frame.
///
/// `height` is the pixel height actually rendered, which equals the number
/// of text rows and is what playback moves the cursor up by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(rename = "asciiText")]
    pub text: String,
    #[serde(rename = "delayCentiseconds")]
    pub delay: u32,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub fn new(text: String, delay: u32, width: u32, height: u32) -> Self {
        Self {
            text,
            delay,
            width,
            height,
        }
    }

    /// Iterate the text rows of the frame.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// Render one bitmap into a text frame.
///
/// `delay` is carried through unchanged (centiseconds; 0 for still images).
pub fn render_frame(
    bitmap: &DynamicImage,
    config: &RenderConfig,
    delay: u32,
) -> Result<Frame, RenderError> {
    config.validate()?;

    let (src_width, src_height) = bitmap.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(RenderError::EmptyBitmap {
            width: src_width,
            height: src_height,
        });
    }

    let (width, height) = ascii::target_dimensions(
        src_width,
        src_height,
        config.width,
        config.correction_ratio,
    );
    if width as u64 * height as u64 > MAX_TARGET_PIXELS {
        return Err(RenderError::TooLarge { width, height });
    }

    let pixels: RgbaImage = if config.width == 0 {
        bitmap.to_rgba8()
    } else {
        bitmap
            .resize_exact(width, height, FilterType::CatmullRom)
            .to_rgba8()
    };

    log::debug!(
        "Rendering {}x{} bitmap at {}x{} ({} levels, invert={})",
        src_width,
        src_height,
        width,
        height,
        config.palette.len(),
        config.invert
    );

    // collect() keeps row order regardless of which task finishes first
    let rows = (0..height)
        .into_par_iter()
        .map(|y| render_row(&pixels, y, config))
        .collect::<Result<Vec<String>, RenderError>>()?;

    Ok(Frame::new(rows.join("\n"), delay, width, height))
}

fn render_row(pixels: &RgbaImage, y: u32, config: &RenderConfig) -> Result<String, RenderError> {
    if y >= pixels.height() {
        return Err(RenderError::RowOutOfBounds {
            row: y,
            height: pixels.height(),
        });
    }

    let brightness: Vec<u8> = (0..pixels.width())
        .map(|x| ascii::brightness_of(pixels, x, y))
        .collect();

    let mut row = String::new();
    ascii::map_row_into(&brightness, &config.palette, config.invert, &mut row);
    Ok(row)
}
