//! asciigen library crate.
//!
//! Converts raster images and animated GIFs into text art, plays animated
//! renderings back in a terminal, and stores them as JSON for later replay.
//!
//! Decoded bitmap(s) → [`render::render_frame`] or [`animation::assemble`]
//! → [`playback::Player`] or [`storage::save`].

pub mod animation;
pub mod ascii;
pub mod cli;
pub mod config;
pub mod decode;
pub mod playback;
pub mod render;
pub mod storage;
