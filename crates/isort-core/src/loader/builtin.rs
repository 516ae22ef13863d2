//! Loader for algorithms compiled into the host.

use std::collections::BTreeMap;

use isort_algorithms::{bubble, radix, BubbleSort, RadixSort};
use isort_sdk::SortAlgorithm;

use super::{validate_name, AlgorithmModule, EntryPoints, ModuleLoader};
use crate::error::{Error, Result};

/// Resolves names against a fixed table of entry points.
#[derive(Debug, Clone)]
pub struct BuiltinModuleLoader {
    table: BTreeMap<String, EntryPoints>,
}

impl Default for BuiltinModuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinModuleLoader {
    /// A loader offering the bundled `radix` and `bubble` algorithms.
    pub fn new() -> Self {
        Self::empty()
            .with_algorithm::<RadixSort>(radix::NAME)
            .with_algorithm::<BubbleSort>(bubble::NAME)
    }

    /// A loader with nothing registered.
    pub fn empty() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    pub fn with_algorithm<T>(mut self, name: impl Into<String>) -> Self
    where
        T: SortAlgorithm + Default + 'static,
    {
        self.register::<T>(name);
        self
    }

    /// Register `T` under `name`, replacing any previous entry.
    pub fn register<T>(&mut self, name: impl Into<String>)
    where
        T: SortAlgorithm + Default + 'static,
    {
        self.register_entry_points(name, EntryPoints::of::<T>());
    }

    /// Register raw entry points under `name`.
    pub fn register_entry_points(&mut self, name: impl Into<String>, entry_points: EntryPoints) {
        self.table.insert(name.into(), entry_points);
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.table.keys().map(String::as_str).collect()
    }
}

impl ModuleLoader for BuiltinModuleLoader {
    fn load(&self, name: &str) -> Result<AlgorithmModule> {
        validate_name(name)?;

        let entry_points = self
            .table
            .get(name)
            .copied()
            .ok_or_else(|| Error::ModuleNotFound {
                name: name.to_string(),
                reason: format!("no builtin algorithm named '{}'", name),
            })?;

        Ok(AlgorithmModule::builtin(name, entry_points))
    }
}
