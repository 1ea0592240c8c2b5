//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;

/// Convert images and GIFs to ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciigen")]
#[command(version, about = "Convert images and GIFs to ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to your file to convert to ASCII (or a stored rendering with --read)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Width of the ASCII output in characters (0 = native resolution)
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Save the rendering to this file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Built-in character set
    #[arg(short, long)]
    pub charset: Option<CharacterSet>,

    /// Custom character ramp, densest first (overrides --charset)
    #[arg(long)]
    pub chars: Option<String>,

    /// Invert brightness (for light terminals)
    #[arg(short, long)]
    pub invert: bool,

    /// Play back a previously saved rendering
    #[arg(short, long)]
    pub read: bool,

    /// Passes to play when a GIF loops forever
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub loop_bound: Option<u32>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
