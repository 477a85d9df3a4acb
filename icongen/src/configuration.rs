use std::convert::TryFrom;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::concept::{self, Concept};
use crate::icons::IconSet;

/// The environment variable naming the configuration file.
pub const CONFIGURATION_FILE: &str = "ICONGEN_CONFIGURATION_FILE";

#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Configuration {
    /// The concept used when the selection is not recognised.
    default_concept: DefaultConcept,

    /// File system locations.
    paths: Paths,

    /// The icons to generate.
    bundle: Bundle,
}

#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
struct Paths {
    /// The directory containing the concept source files.
    source: PathBuf,

    /// The directory receiving generated icons.
    output: PathBuf,
}

#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
struct Bundle {
    /// The icon set to generate.
    set: IconSet,
}

/// A reference to a known concept.
///
/// When represented by a string, this is the concept key.
#[derive(Clone, Copy, Deserialize, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct DefaultConcept(&'static Concept);

impl Configuration {
    /// Loads the application configuration from a TOML file.
    ///
    /// # Arguments
    /// *  `path` - The path to the configuration file.
    pub fn load(path: &str) -> io::Result<Self> {
        toml::from_str(&fs::read_to_string(path)?)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }

    /// Creates a configuration.
    ///
    /// # Arguments
    /// *  `default_concept` - The concept used for unrecognised selections.
    /// *  `source` - The directory containing the concept source files.
    /// *  `output` - The directory receiving generated icons.
    /// *  `set` - The icon set to generate.
    #[cfg(test)]
    pub fn new(
        default_concept: &'static Concept,
        source: &Path,
        output: &Path,
        set: IconSet,
    ) -> Self {
        Self {
            default_concept: DefaultConcept(default_concept),
            paths: Paths {
                source: source.to_path_buf(),
                output: output.to_path_buf(),
            },
            bundle: Bundle { set },
        }
    }

    /// Loads the configuration file named by the environment, or the
    /// defaults if none is named.
    pub fn from_env() -> io::Result<Self> {
        match env::var(CONFIGURATION_FILE) {
            Ok(path) => {
                log::info!("Loading configuration from {}", path);
                Self::load(&path)
            }
            Err(_) => {
                log::debug!("{} not set, using defaults", CONFIGURATION_FILE);
                Ok(Self::default())
            }
        }
    }

    /// The concept used when the selection is not recognised.
    pub fn default_concept(&self) -> &'static Concept {
        self.default_concept.0
    }

    /// The directory containing the concept source files.
    pub fn source_directory(&self) -> &Path {
        &self.paths.source
    }

    /// The directory receiving generated icons.
    pub fn output_directory(&self) -> &Path {
        &self.paths.output
    }

    /// The icon set to generate.
    pub fn icon_set(&self) -> IconSet {
        self.bundle.set
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            source: ".".into(),
            output: ".".into(),
        }
    }
}

impl Default for DefaultConcept {
    fn default() -> Self {
        Self(concept::default_concept())
    }
}

impl TryFrom<String> for DefaultConcept {
    type Error = String;

    /// Attempts to find the concept with a specific key.
    ///
    /// # Arguments
    /// *  `source` - The concept key.
    fn try_from(source: String) -> Result<Self, Self::Error> {
        concept::find(&source)
            .map(Self)
            .ok_or_else(|| format!("unknown concept <{}>", source))
    }
}

impl From<DefaultConcept> for String {
    fn from(source: DefaultConcept) -> Self {
        source.0.key.into()
    }
}
