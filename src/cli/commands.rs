//! Command handlers: render, store, play back, and config actions.

use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::args::{Args, ConfigAction};
use crate::animation::{self, AnimationRecord};
use crate::ascii::{CharSet, Palette};
use crate::config::{self, default_path as get_config_path, Config, ConfigError};
use crate::decode::{self, DecodeError, Source};
use crate::playback::{PlaybackError, Player, HIDE_CURSOR, SHOW_CURSOR};
use crate::render::{self, RenderConfig, RenderError};
use crate::storage::{self, StorageError};

/// Errors surfaced by the CLI entry point.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no input file given (use --path)")]
    MissingPath,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

/// Merge CLI flags over config file values.
///
/// Custom chars beat a named charset; CLI beats config.
pub fn resolve_render_config(args: &Args, config: &Config) -> Result<RenderConfig, RenderError> {
    let palette = match (&args.chars, args.charset) {
        (Some(chars), _) => Palette::new(chars)?,
        (None, Some(set)) => CharSet::from(set).palette(),
        (None, None) => config.palette()?,
    };
    let width = args.width.unwrap_or(config.render.width);
    let invert = args.invert || config.render.invert;

    Ok(RenderConfig::new(palette, invert, width)
        .with_correction_ratio(config.render.correction_ratio))
}

/// Run the main command: render (or load) and then print, play or save.
pub fn run(args: &Args) -> Result<(), CliError> {
    let config = Config::load(args.config.as_deref())?;
    let path = args.path.as_deref().ok_or(CliError::MissingPath)?;
    let passes = args.loop_bound.unwrap_or(config.playback.infinite_passes);

    let record = if args.read {
        storage::load(path)?
    } else {
        let render_config = resolve_render_config(args, &config)?;
        render_source(path, &render_config)?
    };

    match &args.output {
        Some(output) => {
            let written = storage::save(output, &record)?;
            println!("Saved to {}", written.display());
        }
        None => play(&record, passes)?,
    }
    Ok(())
}

fn render_source(path: &Path, config: &RenderConfig) -> Result<AnimationRecord, CliError> {
    let record = match decode::load(path)? {
        Source::Still(image) => AnimationRecord::still(render::render_frame(&image, config, 0)?),
        Source::Animated { frames, loop_count } => {
            animation::assemble(frames, loop_count, config)?
        }
    };
    Ok(record)
}

/// Play a record on stdout, hiding the cursor while an animation runs.
fn play(record: &AnimationRecord, passes: u32) -> Result<(), PlaybackError> {
    let animated = record.frames.len() > 1;
    let mut stdout = BufWriter::new(io::stdout().lock());
    let interrupt = Arc::new(AtomicBool::new(false));

    if animated {
        if let Err(e) = setup_ctrlc_handler(Arc::clone(&interrupt)) {
            log::warn!("Could not set up Ctrl+C handler: {}", e);
        }
        stdout.write_all(HIDE_CURSOR.as_bytes())?;
    }

    let mut player = Player::new(&mut stdout)
        .infinite_passes(passes)
        .interrupt_on(interrupt);
    let result = player.play(record);

    if animated {
        stdout.write_all(SHOW_CURSOR.as_bytes())?;
        stdout.flush()?;
    }
    result
}

/// Set the interrupt flag on Ctrl+C.
///
/// The player stops before its next frame and the cursor is restored on
/// stdout by [`play`].
fn setup_ctrlc_handler(flag: Arc<AtomicBool>) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let config = match Config::load(Some(config_path.as_path())) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            println!("Current configuration:");
            match (&config.render.chars, &config.render.charset) {
                (Some(chars), _) => println!("  Chars: {:?}", chars),
                (None, Some(name)) => println!("  Charset: {}", name),
                (None, None) => println!("  Charset: {}", CharSet::Standard.name()),
            }
            println!("  Invert: {}", if config.render.invert { "yes" } else { "no" });
            if config.render.width == 0 {
                println!("  Width: native");
            } else {
                println!("  Width: {}", config.render.width);
            }
            println!("  Correction ratio: {:.4}", config.render.correction_ratio);
            println!("  Infinite loop passes: {}", config.playback.infinite_passes);
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if let Err(e) = config::init(&config_path) {
                eprintln!("Error: {}", e);
                if matches!(e, ConfigError::AlreadyExists { .. }) {
                    eprintln!("Use 'asciigen config show' to view current settings.");
                }
                std::process::exit(1);
            }
            println!("Created config file: {}", config_path.display());
        }
    }
}
