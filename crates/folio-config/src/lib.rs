//! Configuration for the folio portfolio.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/folio/config.toml` on Linux). Every field is optional; a
//! missing file yields the defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use folio_core::{AnimationSpeed, ColorTheme, Rgb};
use serde::Deserialize;
use thiserror::Error;

/// Upper bound on generated particles; larger fields are clamped.
pub const MAX_PARTICLES: usize = 2000;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accent colour theme.
    pub color_theme: ColorTheme,
    /// Particle speed multiplier.
    pub animation_speed: AnimationSpeed,
    /// Milliseconds between repaints.
    pub frame_interval_ms: u64,
    /// Log filter used when `FOLIO_LOG` is unset.
    pub log_level: String,
    pub particles: ParticleConfig,
    pub typewriter: TypewriterConfig,
    pub contact: ContactConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            animation_speed: AnimationSpeed::default(),
            frame_interval_ms: 33,
            log_level: "info".to_string(),
            particles: ParticleConfig::default(),
            typewriter: TypewriterConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

/// Settings for the hero particle field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub enabled: bool,
    /// Number of particles generated at startup.
    pub count: usize,
    /// Colours particles are drawn from.
    pub palette: Vec<Rgb>,
    /// Opacity of each particle (0.0 - 1.0).
    pub opacity: f32,
    /// Velocity components are drawn from `±max_speed / 2` per frame.
    pub max_speed: f32,
    /// Smallest radius, in cell widths.
    pub min_radius: f32,
    /// Radii are drawn from `min_radius + [0, radius_spread)`.
    pub radius_spread: f32,
    /// Fixed seed for reproducible fields; random when unset.
    pub seed: Option<u64>,
    /// Colour particles are blended over.
    pub background: Rgb,
}

impl ParticleConfig {
    pub const DEFAULT_PALETTE: [Rgb; 3] = [
        Rgb(59, 130, 246), // brand blue
        Rgb(168, 85, 247), // brand purple
        Rgb(34, 197, 94),  // brand green
    ];
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            palette: Self::DEFAULT_PALETTE.to_vec(),
            opacity: 0.8,
            max_speed: 0.0006,
            min_radius: 0.25,
            radius_spread: 0.6,
            seed: None,
            background: Rgb::BLACK,
        }
    }
}

/// Settings for the hero caption.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    /// Delay before each typed character.
    pub typing_ms: u64,
    /// Delay before each erased character.
    pub erasing_ms: u64,
}

impl TypewriterConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_ms)
    }

    pub fn erasing_delay(&self) -> Duration {
        Duration::from_millis(self.erasing_ms)
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "Full Stack Developer".to_string(),
                "AI & Cloud Enthusiast".to_string(),
                "Problem Solver".to_string(),
            ],
            typing_ms: 65,
            erasing_ms: 35,
        }
    }
}

/// Settings for the contact form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Address messages are composed to.
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "swarajwaykar8@gmail.com".to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "folio").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("no config directory available, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse a TOML document and normalize out-of-range values.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(contents)?;
        Ok(config.normalized())
    }

    /// Clamp values into ranges the animations can use.
    pub fn normalized(mut self) -> Self {
        self.frame_interval_ms = self.frame_interval_ms.clamp(10, 1000);

        let particles = &mut self.particles;
        if particles.palette.is_empty() {
            particles.palette = ParticleConfig::DEFAULT_PALETTE.to_vec();
        }
        if particles.count > MAX_PARTICLES {
            tracing::warn!(count = particles.count, max = MAX_PARTICLES, "clamping particle count");
            particles.count = MAX_PARTICLES;
        }
        particles.opacity = particles.opacity.clamp(0.0, 1.0);
        particles.max_speed = particles.max_speed.abs();
        particles.min_radius = particles.min_radius.max(0.05);
        particles.radius_spread = particles.radius_spread.max(0.0);

        // Timers need a non-zero delay
        let typewriter = &mut self.typewriter;
        typewriter.typing_ms = typewriter.typing_ms.max(1);
        typewriter.erasing_ms = typewriter.erasing_ms.max(1);

        self
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
