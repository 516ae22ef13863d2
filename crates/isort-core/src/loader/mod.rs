//! Module loaders that turn an algorithm name into entry points.
//!
//! ```text
//!                 AlgorithmRegistry
//!                        │ load(name), once per name
//!          ┌─────────────┴─────────────┐
//!          ▼                           ▼
//!  NativeModuleLoader          BuiltinModuleLoader
//!  (lib<name>.so/.dylib,       (compiled-in table)
//!   <name>.dll)
//! ```

pub mod builtin;
pub mod native;

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use isort_sdk::ffi::{create_instance, destroy_instance};
use isort_sdk::{CreateFn, DestroyFn, SortAlgorithm};

use crate::error::{Error, Result};

pub use builtin::BuiltinModuleLoader;
pub use native::NativeModuleLoader;

/// Resolves an algorithm name to a loaded module.
pub trait ModuleLoader: Send + Sync {
    /// Load the module providing `name`.
    ///
    /// Fails with [`Error::ModuleNotFound`] or [`Error::EntryPointMissing`];
    /// a module is only returned with both entry points resolved.
    fn load(&self, name: &str) -> Result<AlgorithmModule>;
}

/// The factory/destructor pair exported by one module.
#[derive(Debug, Clone, Copy)]
pub struct EntryPoints {
    pub create: CreateFn,
    pub destroy: DestroyFn,
}

impl EntryPoints {
    pub fn new(create: CreateFn, destroy: DestroyFn) -> Self {
        Self { create, destroy }
    }

    /// Entry points for a type compiled into this binary.
    pub fn of<T>() -> Self
    where
        T: SortAlgorithm + Default + 'static,
    {
        Self::new(create_instance::<T>, destroy_instance)
    }

    /// Combine individually resolved symbols, failing unless both are present.
    pub fn from_resolved(
        name: &str,
        create: Option<CreateFn>,
        destroy: Option<DestroyFn>,
    ) -> Result<Self> {
        match (create, destroy) {
            (Some(create), Some(destroy)) => Ok(Self::new(create, destroy)),
            (None, _) => Err(missing(name, isort_sdk::CREATE_SYMBOL)),
            (_, None) => Err(missing(name, isort_sdk::DESTROY_SYMBOL)),
        }
    }
}

fn missing(name: &str, symbol: &[u8]) -> Error {
    Error::EntryPointMissing {
        name: name.to_string(),
        symbol: String::from_utf8_lossy(symbol).into_owned(),
    }
}

/// Where a module came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleSource {
    /// A dynamic library opened from this path (or bare file name)
    Native(PathBuf),
    /// Compiled into the host
    Builtin,
}

impl fmt::Display for ModuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleSource::Native(path) => write!(f, "{}", path.display()),
            ModuleSource::Builtin => f.write_str("builtin"),
        }
    }
}

/// A loaded algorithm module.
///
/// Native modules keep their library mapped for as long as the module (and so
/// every handle created from it) is alive.
#[derive(Debug)]
pub struct AlgorithmModule {
    name: String,
    source: ModuleSource,
    entry_points: EntryPoints,
    _library: Option<libloading::Library>,
}

impl AlgorithmModule {
    /// A module whose code is part of this binary.
    pub fn builtin(name: impl Into<String>, entry_points: EntryPoints) -> Self {
        Self {
            name: name.into(),
            source: ModuleSource::Builtin,
            entry_points,
            _library: None,
        }
    }

    pub(crate) fn native(
        name: impl Into<String>,
        path: PathBuf,
        library: libloading::Library,
        entry_points: EntryPoints,
    ) -> Self {
        Self {
            name: name.into(),
            source: ModuleSource::Native(path),
            entry_points,
            _library: Some(library),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &ModuleSource {
        &self.source
    }

    pub fn entry_points(&self) -> EntryPoints {
        self.entry_points
    }
}

/// Check that `name` can be used as part of a module file name.
///
/// Only ASCII letters, digits, `_` and `-` are accepted, so a name can never
/// point outside the search directories.
pub fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidName(name.to_string()))
    }
}

/// Platform module file name for an algorithm: `lib<name>.so`, `lib<name>.dylib`
/// or `<name>.dll`.
pub fn module_file_name(name: &str) -> OsString {
    libloading::library_filename(name)
}
