//! Terminal playback of rendered frames.
//!
//! Frames are written to any `Write` sink. Every frame after the very first
//! is preceded by `ESC[<N>F` (cursor up N lines, column 0) so it overwrites
//! the previous one in place, where N is the previous frame's height.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::animation::AnimationRecord;

/// Pass bound used when a record loops forever.
pub const DEFAULT_INFINITE_PASSES: u32 = 900;

/// Hide the terminal cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";

/// Show the terminal cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Errors that can occur during playback.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("nothing to play: animation has no frames")]
    Empty,

    #[error("infinite loop pass bound must be at least 1")]
    ZeroPassBound,

    #[error("playback interrupted")]
    Interrupted,

    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

/// Playback lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    /// Between passes, about to restart from the first frame
    Looping,
    Done,
}

/// Blocking wait between frames.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

impl<S: Sleeper + ?Sized> Sleeper for &mut S {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// Number of full passes for a GIF-style loop count.
///
/// `-1` (and any other negative value) plays once, `0` plays
/// `infinite_passes` times, `n > 0` plays `n + 1` times.
pub fn pass_count(loop_count: i32, infinite_passes: u32) -> u32 {
    match loop_count {
        0 => infinite_passes,
        n if n > 0 => (n as u32).saturating_add(1),
        _ => 1,
    }
}

/// Convert a GIF delay (centiseconds) to a sleep duration.
pub fn frame_duration(delay: u32) -> Duration {
    Duration::from_millis(delay as u64 * 10)
}

/// Replays an [`AnimationRecord`] to a terminal-like sink.
pub struct Player<W: Write, S: Sleeper = ThreadSleeper> {
    out: W,
    sleeper: S,
    infinite_passes: u32,
    interrupt: Option<Arc<AtomicBool>>,
    state: PlaybackState,
    passes_completed: u32,
}

impl<W: Write> Player<W, ThreadSleeper> {
    pub fn new(out: W) -> Self {
        Self::with_sleeper(out, ThreadSleeper)
    }
}

impl<W: Write, S: Sleeper> Player<W, S> {
    pub fn with_sleeper(out: W, sleeper: S) -> Self {
        Self {
            out,
            sleeper,
            infinite_passes: DEFAULT_INFINITE_PASSES,
            interrupt: None,
            state: PlaybackState::Idle,
            passes_completed: 0,
        }
    }

    /// Set the pass bound used for records that loop forever.
    ///
    /// A bound of 0 is rejected by [`Player::play`].
    pub fn infinite_passes(mut self, passes: u32) -> Self {
        self.infinite_passes = passes;
        self
    }

    /// Stop before the next frame once `flag` is set.
    pub fn interrupt_on(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn passes_completed(&self) -> u32 {
        self.passes_completed
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Play the record to completion, blocking for every frame delay.
    pub fn play(&mut self, record: &AnimationRecord) -> Result<(), PlaybackError> {
        if record.frames.is_empty() {
            return Err(PlaybackError::Empty);
        }
        if self.infinite_passes == 0 {
            return Err(PlaybackError::ZeroPassBound);
        }

        let passes = pass_count(record.loop_count, self.infinite_passes);
        log::debug!(
            "Playing {} frames for {} passes (loop count {}, {}cs per pass)",
            record.frames.len(),
            passes,
            record.loop_count,
            record.pass_duration()
        );

        self.passes_completed = 0;
        let mut previous_height: Option<u32> = None;

        for pass in 0..passes {
            self.state = PlaybackState::Playing;

            for frame in &record.frames {
                if self.interrupted() {
                    self.state = PlaybackState::Done;
                    return Err(PlaybackError::Interrupted);
                }
                if let Some(height) = previous_height {
                    write!(self.out, "\x1b[{}F", height)?;
                }
                self.out.write_all(frame.text.as_bytes())?;
                self.out.write_all(b"\n")?;
                self.out.flush()?;

                self.sleeper.sleep(frame_duration(frame.delay));
                previous_height = Some(frame.height);
            }

            self.passes_completed += 1;
            if pass + 1 < passes {
                self.state = PlaybackState::Looping;
            }
        }

        self.state = PlaybackState::Done;
        Ok(())
    }
}
