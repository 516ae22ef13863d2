//! Sort driver.
//!
//! One [`Sorter::run`] generates (optionally), reads, sorts and outputs a
//! dataset. Progress lines and the console listing go to the caller's writer.

use std::io::Write;

use tracing::{debug, info};

use crate::config::SorterConfig;
use crate::dataset;
use crate::error::Result;
use crate::registry::AlgorithmRegistry;

/// Runs sort jobs described by a [`SorterConfig`].
#[derive(Debug, Clone, Default)]
pub struct Sorter {
    config: SorterConfig,
}

impl Sorter {
    pub fn new(config: SorterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SorterConfig {
        &self.config
    }

    /// Run the job, resolving the algorithm through `registry`.
    ///
    /// Returns the sorted values.
    pub fn run(&self, registry: &AlgorithmRegistry, out: &mut impl Write) -> Result<Vec<u64>> {
        let config = &self.config;
        config.validate()?;

        if config.create_data {
            writeln!(
                out,
                "Generating array data of {} values between 0 and {}",
                config.num_values, config.data_max
            )?;
            let values = dataset::generate(config.num_values, config.data_max, config.seed)?;
            dataset::write_file(&config.data_file, &values)?;
            debug!(path = %config.data_file.display(), count = values.len(), "Wrote dataset");
        }

        let mut values = dataset::read_file(&config.data_file)?;
        info!(path = %config.data_file.display(), count = values.len(), "Read dataset");

        writeln!(out, "Using Algorithm '{}'...", config.algorithm)?;

        let mut handle = registry.create(&config.algorithm)?;
        handle.sort(&mut values);
        registry.destroy(handle)?;

        match &config.output_file {
            Some(path) => {
                dataset::write_file(path, &values)?;
                debug!(path = %path.display(), "Wrote sorted data");
            }
            None => dataset::write(&mut *out, &values)?,
        }

        Ok(values)
    }
}
