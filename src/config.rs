use crate::hex::{self, Format, Hexes, Location};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the configuration file: `<config dir>/hex-grid/config.toml`.
pub fn path() -> Result<PathBuf, Error> {
    dirs::config_dir()
        .map(|dir| dir.join("hex-grid").join("config.toml"))
        .ok_or(Error::NoConfigDir)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format of range queries made through this config.
    pub format: Format,
}

impl Config {
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(&path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::to_string_pretty(self)?;
        tracing::debug!(path = %path.display(), "saving configuration");
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    pub fn load() -> Result<Self, Error> {
        Self::load_from(&path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, Error> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let data = std::fs::read_to_string(path)?;
        toml::from_str(&data).map_err(Into::into)
    }

    /// Load the configuration if there is one; otherwise use the defaults.
    ///
    /// A file which exists but cannot be read or parsed is still an error.
    pub fn load_or_default() -> Result<Self, Error> {
        Self::or_default(Self::load())
    }

    /// [`Config::load_or_default`] from an explicit path.
    pub fn load_or_default_from(path: &Path) -> Result<Self, Error> {
        Self::or_default(Self::load_from(path))
    }

    fn or_default(loaded: Result<Self, Error>) -> Result<Self, Error> {
        match loaded {
            Err(Error::CouldNotLoad(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no configuration file; using defaults");
                Ok(Self::default())
            }
            Err(Error::NoConfigDir) => {
                tracing::debug!("no configuration directory; using defaults");
                Ok(Self::default())
            }
            otherwise => otherwise,
        }
    }

    /// [`hex::hexes_within_range`] in the configured format.
    pub fn hexes_within_range<'a>(
        &self,
        center: impl Into<Location<'a>>,
        dist: u32,
    ) -> Result<Hexes, hex::Error> {
        hex::hexes_within_range(center, dist, self.format)
    }

    /// [`hex::hexes_at_range`] in the configured format.
    pub fn hexes_at_range<'a>(
        &self,
        center: impl Into<Location<'a>>,
        dist: u32,
    ) -> Result<Hexes, hex::Error> {
        hex::hexes_at_range(center, dist, self.format)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("no configuration directory for this user")]
    NoConfigDir,
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
}
