//! `f1data.toml` configuration.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "f1data.toml";

pub const DEFAULT_ERGAST_BASE_URL: &str = f1_ingest::ergast::DEFAULT_BASE_URL;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct F1Config {
    /// Holds one directory per season with `r<N>.csv`, `paste.tsv` and
    /// `driver-codes.json`.
    pub data_dir: PathBuf,
    /// Holds `<season>-races.json`.
    pub store_dir: PathBuf,
    pub ergast_base_url: String,
    /// Extra driver name to code overrides.
    pub driver_codes: BTreeMap<String, String>,
}

impl Default for F1Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            store_dir: PathBuf::from("exports"),
            ergast_base_url: DEFAULT_ERGAST_BASE_URL.to_string(),
            driver_codes: BTreeMap::new(),
        }
    }
}

impl F1Config {
    /// Parses a config document.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse config")
    }

    /// Loads `explicit`, or `f1data.toml` in the working directory when it
    /// exists, or the defaults.
    ///
    /// An explicitly named file must exist; a malformed file is always an
    /// error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        match fs::read_to_string(&path) {
            Ok(text) => {
                let config = Self::from_toml(&text)
                    .with_context(|| format!("invalid config {}", path.display()))?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e).with_context(|| format!("read config {}", path.display())),
        }
    }

    /// Directory of one season's raw files.
    pub fn season_dir(&self, season: u16) -> PathBuf {
        self.data_dir.join(season.to_string())
    }

    #[must_use]
    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = dir;
        }
        self
    }

    #[must_use]
    pub fn with_store_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.store_dir = dir;
        }
        self
    }

    #[must_use]
    pub fn with_ergast_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.ergast_base_url = url;
        }
        self
    }
}
