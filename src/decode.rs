//! Source image decoding.
//!
//! Sniffs the format from the file contents (not the extension) and hands
//! the renderer either a single still bitmap or the composited frames of an
//! animated GIF with their delays and loop count.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, ImageFormat, ImageReader};

use crate::animation::{LOOP_FOREVER, LOOP_ONCE};

/// Errors that can occur while decoding a source file.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unable to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to detect image format")]
    UnknownFormat,

    #[error("not a supported file type: {format:?}")]
    Unsupported { format: ImageFormat },

    #[error("unable to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("unable to decode GIF: {0}")]
    Gif(#[from] gif::DecodingError),

    #[error("animation contains no frames")]
    NoFrames,
}

/// A decoded source ready for rendering.
#[derive(Debug)]
pub enum Source {
    /// JPEG, PNG or WebP still
    Still(DynamicImage),
    /// GIF frames with their delays in centiseconds
    Animated {
        frames: Vec<(DynamicImage, u32)>,
        loop_count: i32,
    },
}

impl Source {
    pub fn frame_count(&self) -> usize {
        match self {
            Source::Still(_) => 1,
            Source::Animated { frames, .. } => frames.len(),
        }
    }
}

/// Read and decode the file at `path`.
pub fn load(path: &Path) -> Result<Source, DecodeError> {
    let bytes = std::fs::read(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source = decode_bytes(&bytes)?;
    log::info!(
        "Decoded {} ({} frame(s))",
        path.display(),
        source.frame_count()
    );
    Ok(source)
}

/// Decode an in-memory file.
pub fn decode_bytes(bytes: &[u8]) -> Result<Source, DecodeError> {
    let format = image::guess_format(bytes).map_err(|_| DecodeError::UnknownFormat)?;
    log::debug!("Detected format {:?}", format);

    match format {
        ImageFormat::Gif => decode_gif(bytes),
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::WebP => {
            let image = ImageReader::with_format(Cursor::new(bytes), format).decode()?;
            Ok(Source::Still(image))
        }
        format => Err(DecodeError::Unsupported { format }),
    }
}

fn decode_gif(bytes: &[u8]) -> Result<Source, DecodeError> {
    let loop_count = gif_loop_count(bytes)?;

    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    let frames = decoder
        .into_frames()
        .collect_frames()?
        .into_iter()
        .map(|frame| {
            let delay = delay_centiseconds(frame.delay());
            (DynamicImage::ImageRgba8(frame.into_buffer()), delay)
        })
        .collect::<Vec<_>>();

    if frames.is_empty() {
        return Err(DecodeError::NoFrames);
    }

    Ok(Source::Animated { frames, loop_count })
}

/// Convert the decoder's millisecond ratio back to GIF centiseconds.
fn delay_centiseconds(delay: image::Delay) -> u32 {
    let (numer, denom) = delay.numer_denom_ms();
    let ms = numer as f64 / denom.max(1) as f64;
    (ms / 10.0).round() as u32
}

/// Read the NETSCAPE loop extension.
///
/// Infinite maps to 0, a missing extension to -1 (play once), and a finite
/// count `n` is kept as `n` extra plays.
fn gif_loop_count(bytes: &[u8]) -> Result<i32, DecodeError> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(bytes)?;
    // The extension precedes the first image descriptor
    decoder.next_frame_info()?;

    Ok(match decoder.repeat() {
        gif::Repeat::Infinite => LOOP_FOREVER,
        gif::Repeat::Finite(0) => LOOP_ONCE,
        gif::Repeat::Finite(n) => n as i32,
    })
}
