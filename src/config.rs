//! # Configuration
//!
//! Defines [`Settings`], the explicit configuration object handed to the
//! driver, and the logic for building it from three layers:
//!
//! 1.  Built-in defaults.
//! 2.  An optional configuration file. Either the file named by `--config`, or
//!     the first of `.gitclone.yaml`, `.gitclone.yml`, `.gitclone.json` and
//!     `.gitclone.toml` found in the home directory. The format follows the
//!     file extension; YAML is assumed when the extension is not recognized.
//! 3.  Environment overrides (`GITCLONE_CLONE_PROGRAM`,
//!     `GITCLONE_SKIP_INSTALL`).
//!
//! A configuration file that cannot be read or parsed is skipped: the failure
//! is logged at debug level and the defaults stay in effect.
//!
//! ## Example
//!
//! ```yaml
//! # ~/.gitclone.yaml
//! clone_program: git
//! skip_install: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Base name of the configuration file searched for in the home directory.
pub const CONFIG_FILE_STEM: &str = ".gitclone";

/// Extensions tried, in order, when searching the home directory.
pub const CONFIG_EXTENSIONS: [&str; 4] = ["yaml", "yml", "json", "toml"];

/// Prefix shared by all environment overrides.
pub const ENV_PREFIX: &str = "GITCLONE_";

/// Runtime settings for a gitclone invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Version-control client used for the clone step.
    pub clone_program: String,
    /// Detect the project type but do not run the install command.
    pub skip_install: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clone_program: crate::defaults::DEFAULT_CLONE_PROGRAM.to_string(),
            skip_install: false,
        }
    }
}

impl Settings {
    /// Applies `GITCLONE_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides using `lookup` to resolve environment variables.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(program) = var("CLONE_PROGRAM").filter(|v| !v.trim().is_empty()) {
            debug!("clone_program overridden from environment: {}", program);
            self.clone_program = program;
        }

        if let Some(raw) = var("SKIP_INSTALL") {
            match parse_bool(&raw) {
                Some(value) => self.skip_install = value,
                None => warn!(
                    "Ignoring {}SKIP_INSTALL={:?}: expected true or false",
                    ENV_PREFIX, raw
                ),
            }
        }
    }
}

/// Settings together with the file they were read from, if any.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub settings: Settings,
    pub source: Option<PathBuf>,
}

/// Build settings from the config file and the process environment.
///
/// `explicit` is the value of `--config`. Without it the home directory is
/// searched, and failing to determine the home directory is an error.
pub fn load(explicit: Option<&Path>) -> Result<Loaded> {
    let mut loaded = load_file(explicit, dirs::home_dir())?;
    loaded.settings.apply_env_overrides();
    Ok(loaded)
}

/// Resolve and read the configuration file without applying environment
/// overrides.
pub fn load_file(explicit: Option<&Path>, home: Option<PathBuf>) -> Result<Loaded> {
    let candidates = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => {
            let home = home.ok_or(Error::HomeDirectory)?;
            home_candidates(&home)
        }
    };

    for path in candidates {
        if !path.is_file() {
            continue;
        }
        match read_settings(&path) {
            Ok(settings) => {
                return Ok(Loaded {
                    settings,
                    source: Some(path),
                })
            }
            Err(e) => {
                debug!("{}", e);
                break;
            }
        }
    }

    Ok(Loaded {
        settings: Settings::default(),
        source: None,
    })
}

/// Candidate config file paths inside `home`, in search order.
pub fn home_candidates(home: &Path) -> Vec<PathBuf> {
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| home.join(format!("{}.{}", CONFIG_FILE_STEM, ext)))
        .collect()
}

/// Read and parse a single configuration file.
pub fn read_settings(path: &Path) -> Result<Settings> {
    let read_error = |message: String| Error::ConfigRead {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?;

    // An empty file is a valid, empty configuration in every format
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| read_error(e.to_string())),
        Some("toml") => toml::from_str(&content).map_err(|e| read_error(e.to_string())),
        _ => serde_yaml::from_str(&content).map_err(|e| read_error(e.to_string())),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
