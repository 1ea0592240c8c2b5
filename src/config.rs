//! Configuration file handling for asciigen.
//!
//! Loads configuration from `~/.config/asciigen/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{CharSet, Palette, CORRECTION_RATIO};
use crate::playback::DEFAULT_INFINITE_PASSES;
use crate::render::RenderError;

/// Configuration file structure for asciigen.
/// Loaded from ~/.config/asciigen/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub playback: PlaybackSection,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RenderSection {
    /// Built-in ramp name: standard, short, blocks
    #[serde(default)]
    pub charset: Option<String>,
    /// Custom ramp; wins over `charset`
    #[serde(default)]
    pub chars: Option<String>,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub width: u32,
    #[serde(default = "default_ratio")]
    pub correction_ratio: f64,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            charset: None,
            chars: None,
            invert: false,
            width: 0,
            correction_ratio: CORRECTION_RATIO,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct PlaybackSection {
    /// Passes played when a GIF loops forever
    #[serde(default = "default_passes")]
    pub infinite_passes: u32,
}

impl Default for PlaybackSection {
    fn default() -> Self {
        Self {
            infinite_passes: DEFAULT_INFINITE_PASSES,
        }
    }
}

fn default_ratio() -> f64 {
    CORRECTION_RATIO
}

fn default_passes() -> u32 {
    DEFAULT_INFINITE_PASSES
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            config.validate().map_err(|reason| ConfigError::Invalid {
                path: path.clone(),
                reason,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.playback.infinite_passes == 0 {
            return Err("playback.infinite_passes must be at least 1".to_string());
        }
        Ok(())
    }

    /// Palette selected by the config: custom chars, then named charset,
    /// then the standard ramp.
    pub fn palette(&self) -> Result<Palette, RenderError> {
        if let Some(chars) = &self.render.chars {
            return Palette::new(chars);
        }
        let set = match &self.render.charset {
            Some(name) => CharSet::from_name(name).unwrap_or_else(|| {
                log::warn!("Unknown charset '{}', using standard", name);
                CharSet::Standard
            }),
            None => CharSet::Standard,
        };
        Ok(set.palette())
    }
}

/// Commented default configuration written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# asciigen configuration

[render]
# Character set: standard, short, blocks
charset = "standard"
# Custom ramp, densest character first (overrides charset)
# chars = "@%#*+=-:. "
# Invert brightness (for light themes)
invert = false
# Output width in characters (0 = native resolution)
width = 0
# Row correction for terminal cells being taller than wide
correction_ratio = 0.45454545

[playback]
# Passes played for GIFs that loop forever
infinite_passes = 900
"#;

/// Write the default config file to `path`, creating parent directories.
/// Refuses to overwrite an existing file.
pub fn init(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid {
        path: PathBuf,
        reason: String,
    },
    AlreadyExists {
        path: PathBuf,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to access config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::Invalid { path, reason } => {
                write!(f, "Invalid config file '{}': {}", path.display(), reason)
            }
            ConfigError::AlreadyExists { path } => {
                write!(f, "Config file already exists: {}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::Invalid { .. } | ConfigError::AlreadyExists { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciigen").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciigen/config.toml")
        })
}
