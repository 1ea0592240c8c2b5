//! Animation assembly: many decoded frames in, one replayable record out.

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::render::{render_frame, Frame, RenderConfig, RenderError};

/// Loop count for a record that plays exactly once.
pub const LOOP_ONCE: i32 = -1;

/// Loop count for a record that loops until the pass bound is reached.
pub const LOOP_FOREVER: i32 = 0;

/// Rendered frames plus GIF-style loop semantics.
///
/// `loop_count`: `0` loops forever, `-1` plays once, `n > 0` plays `n + 1` times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationRecord {
    pub frames: Vec<Frame>,
    #[serde(rename = "loopCount")]
    pub loop_count: i32,
}

impl AnimationRecord {
    pub fn new(frames: Vec<Frame>, loop_count: i32) -> Self {
        Self { frames, loop_count }
    }

    /// Wrap a single still frame as a play-once record.
    pub fn still(frame: Frame) -> Self {
        Self::new(vec![frame], LOOP_ONCE)
    }

    /// Sum of all frame delays for one pass, in centiseconds.
    pub fn pass_duration(&self) -> u64 {
        self.frames.iter().map(|f| f.delay as u64).sum()
    }
}

/// Render every `(bitmap, delay)` pair and package the results in order.
///
/// The first failing frame aborts the whole animation; no partial record is
/// returned.
pub fn assemble<I>(
    frames: I,
    loop_count: i32,
    config: &RenderConfig,
) -> Result<AnimationRecord, RenderError>
where
    I: IntoIterator<Item = (DynamicImage, u32)>,
{
    let rendered = frames
        .into_iter()
        .enumerate()
        .map(|(index, (bitmap, delay))| {
            render_frame(&bitmap, config, delay).map_err(|e| RenderError::Frame {
                index,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<Frame>, RenderError>>()?;

    if rendered.is_empty() {
        return Err(RenderError::NoFrames);
    }

    log::info!(
        "Assembled {} frames (loop count {})",
        rendered.len(),
        loop_count
    );

    Ok(AnimationRecord::new(rendered, loop_count))
}
