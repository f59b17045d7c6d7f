//! Effect configuration.
//!
//! The only setting is the base animation duration. It can be given
//! explicitly in milliseconds, or derived from the default by the desktop-wide
//! animation speed factor. A settings file looks like:
//!
//! ```toml
//! [morphing]
//! duration_ms = 200
//! # or, scaling the 150 ms default:
//! animation_speed_factor = 0.5
//! ```

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Settings as read from a configuration source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    /// Explicit animation duration; wins over the speed factor
    pub duration_ms: Option<f64>,
    /// Multiplier applied to the default duration (0 disables animations)
    pub animation_speed_factor: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    morphing: EffectSettings,
}

/// Somewhere the effect can (re)read its settings from.
pub trait ConfigSource {
    fn load(&self) -> Result<EffectSettings, ConfigError>;
}

impl ConfigSource for EffectSettings {
    fn load(&self) -> Result<EffectSettings, ConfigError> {
        Ok(self.clone())
    }
}

impl<C: ConfigSource + ?Sized> ConfigSource for RefCell<C> {
    fn load(&self) -> Result<EffectSettings, ConfigError> {
        self.borrow().load()
    }
}

impl<C: ConfigSource + ?Sized> ConfigSource for Rc<C> {
    fn load(&self) -> Result<EffectSettings, ConfigError> {
        (**self).load()
    }
}

impl<C: ConfigSource + ?Sized> ConfigSource for Box<C> {
    fn load(&self) -> Result<EffectSettings, ConfigError> {
        (**self).load()
    }
}

/// Settings stored in a TOML file, re-read on every load.
#[derive(Debug, Clone)]
pub struct TomlConfig {
    path: PathBuf,
}

impl TomlConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(path: &Path, content: &str) -> Result<EffectSettings, ConfigError> {
        toml::from_str::<SettingsFile>(content)
            .map(|file| file.morphing)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl ConfigSource for TomlConfig {
    fn load(&self) -> Result<EffectSettings, ConfigError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        Self::parse(&self.path, &content)
    }
}

/// Resolve the animation duration from `settings`.
///
/// Negative values clamp to zero, which makes transitions instant. Non-finite
/// values are rejected.
pub fn animation_time(default: Duration, settings: &EffectSettings) -> Result<Duration, ConfigError> {
    let ms = match settings.duration_ms {
        Some(ms) => ms,
        None => {
            let default_ms = default.as_nanos() as f64 / 1_000_000.0;
            default_ms * settings.animation_speed_factor.unwrap_or(1.0)
        }
    };

    if !ms.is_finite() {
        return Err(ConfigError::InvalidDuration(ms));
    }
    if ms < 0.0 {
        log::warn!("Negative animation duration {} ms, using 0", ms);
        return Ok(Duration::ZERO);
    }

    Ok(Duration::from_nanos((ms * 1_000_000.0).round() as u64))
}

/// Read the duration from `source`, falling back to `previous` on any error.
pub fn load_duration<C: ConfigSource + ?Sized>(
    source: &C,
    default: Duration,
    previous: Duration,
) -> Duration {
    match source
        .load()
        .and_then(|settings| animation_time(default, &settings))
    {
        Ok(duration) => duration,
        Err(err) => {
            log::warn!("Keeping animation duration {:?}: {}", previous, err);
            previous
        }
    }
}
