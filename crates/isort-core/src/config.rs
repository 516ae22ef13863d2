//! Configuration defaults, environment variables and the sort job settings.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default values for a sort run
pub mod defaults {
    /// Data file read (and written with `--create`) when none is given
    pub const FILE_NAME: &str = "isort.dat";
    /// Algorithm used when none is given
    pub const ALGORITHM: &str = "radix";
    /// Exclusive upper bound of generated values
    pub const DATA_MAX: u64 = 1000;
    /// Number of generated values
    pub const NUM_VALUES: usize = 1000;
}

/// Environment variable names
pub mod env_vars {
    use std::path::PathBuf;

    /// Extra directories searched for algorithm modules, in platform `PATH` syntax
    pub const PLUGIN_PATH: &str = "ISORT_PLUGIN_PATH";
    /// Emit logs as JSON when set to `true`
    pub const LOG_JSON: &str = "ISORT_LOG_JSON";

    /// Module search directories from the environment, or none.
    pub fn plugin_path() -> Vec<PathBuf> {
        std::env::var_os(PLUGIN_PATH)
            .map(|paths| {
                std::env::split_paths(&paths)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether JSON logging is requested.
    pub fn log_json() -> bool {
        std::env::var(LOG_JSON)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false)
    }
}

/// Which module loader resolves algorithm names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderKind {
    /// Load `lib<name>.so` (or the platform equivalent) at run time
    #[default]
    Native,
    /// Use the algorithms compiled into the host
    Builtin,
}

impl LoaderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoaderKind::Native => "native",
            LoaderKind::Builtin => "builtin",
        }
    }
}

impl fmt::Display for LoaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoaderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(LoaderKind::Native),
            "builtin" | "built-in" => Ok(LoaderKind::Builtin),
            other => Err(format!(
                "unknown loader '{}', expected 'native' or 'builtin'",
                other
            )),
        }
    }
}

/// Settings for one sort run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SorterConfig {
    /// Algorithm name to resolve
    pub algorithm: String,
    /// Data file to read, and to write when `create_data` is set
    pub data_file: PathBuf,
    /// Where to write the sorted values; `None` lists them on the console
    pub output_file: Option<PathBuf>,
    /// Generate a new dataset before sorting
    pub create_data: bool,
    /// Exclusive upper bound of generated values
    pub data_max: u64,
    /// Number of generated values
    pub num_values: usize,
    /// Seed for reproducible datasets
    pub seed: Option<u64>,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            algorithm: defaults::ALGORITHM.to_string(),
            data_file: PathBuf::from(defaults::FILE_NAME),
            output_file: None,
            create_data: false,
            data_max: defaults::DATA_MAX,
            num_values: defaults::NUM_VALUES,
            seed: None,
        }
    }
}

impl SorterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Generate `num_values` values in `0..data_max` before sorting.
    pub fn with_generated_data(mut self, num_values: usize, data_max: u64) -> Self {
        self.create_data = true;
        self.num_values = num_values;
        self.data_max = data_max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether sorted values are listed on the console.
    pub fn console_output(&self) -> bool {
        self.output_file.is_none()
    }

    /// Check the settings before any work is done.
    pub fn validate(&self) -> Result<()> {
        if self.algorithm.is_empty() {
            return Err(Error::InvalidConfig("algorithm name is empty".to_string()));
        }
        if self.create_data && self.data_max == 0 {
            return Err(Error::InvalidConfig(
                "maximum random value must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
