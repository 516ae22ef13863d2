//! Native module loader using libloading.
//!
//! An algorithm named `radix` lives in `libradix.so` (Linux), `libradix.dylib`
//! (macOS) or `radix.dll` (Windows). The configured search directories are
//! tried in order; if none holds the file, the bare file name is handed to the
//! platform loader, which applies its usual library search rules.

use std::path::{Path, PathBuf};

use libloading::Library;
use tracing::debug;

use super::{module_file_name, validate_name, AlgorithmModule, EntryPoints, ModuleLoader};
use crate::config::env_vars;
use crate::error::{Error, Result};
use isort_sdk::{CreateFn, DestroyFn, CREATE_SYMBOL, DESTROY_SYMBOL};

/// Loads algorithm modules from dynamic libraries.
#[derive(Debug, Clone, Default)]
pub struct NativeModuleLoader {
    /// Directories searched before the platform default
    search_dirs: Vec<PathBuf>,
}

impl NativeModuleLoader {
    /// A loader that relies on the platform search rules only.
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader searching the directories in `ISORT_PLUGIN_PATH` first.
    pub fn from_env() -> Self {
        Self::new().with_search_dirs(env_vars::plugin_path())
    }

    /// Add a search directory.
    pub fn add_search_dir(&mut self, dir: impl AsRef<Path>) {
        self.search_dirs.push(dir.as_ref().to_path_buf());
    }

    pub fn with_search_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for dir in dirs {
            self.add_search_dir(dir);
        }
        self
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Paths tried, in order, when loading `name`.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let file_name = module_file_name(name);

        let mut candidates: Vec<PathBuf> = self
            .search_dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .filter(|path| path.is_file())
            .collect();

        candidates.push(PathBuf::from(file_name));
        candidates
    }

    fn open(&self, name: &str) -> Result<(PathBuf, Library)> {
        let mut last_error = String::from("no candidate paths");

        for path in self.candidates(name) {
            // Loading runs the library's initialisers; modules are trusted code.
            match unsafe { Library::new(&path) } {
                Ok(library) => return Ok((path, library)),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "Failed to open algorithm module");
                    last_error = e.to_string();
                }
            }
        }

        Err(Error::ModuleNotFound {
            name: name.to_string(),
            reason: last_error,
        })
    }
}

impl ModuleLoader for NativeModuleLoader {
    fn load(&self, name: &str) -> Result<AlgorithmModule> {
        validate_name(name)?;

        let (path, library) = self.open(name)?;

        let create = unsafe { library.get::<CreateFn>(CREATE_SYMBOL) }
            .map(|symbol| *symbol)
            .ok();
        let destroy = unsafe { library.get::<DestroyFn>(DESTROY_SYMBOL) }
            .map(|symbol| *symbol)
            .ok();

        let entry_points = EntryPoints::from_resolved(name, create, destroy)?;

        debug!(name, path = %path.display(), "Resolved algorithm module entry points");

        Ok(AlgorithmModule::native(name, path, library, entry_points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_skip_missing_dirs() {
        let temp = tempfile::tempdir().unwrap();
        let loader = NativeModuleLoader::new().with_search_dirs([temp.path()]);

        let candidates = loader.candidates("radix");
        assert_eq!(candidates, vec![PathBuf::from(module_file_name("radix"))]);
    }

    #[test]
    fn test_candidates_prefer_search_dirs() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let file_name = module_file_name("radix");
        std::fs::write(second.path().join(&file_name), b"").unwrap();

        let loader = NativeModuleLoader::new().with_search_dirs([first.path(), second.path()]);
        let candidates = loader.candidates("radix");

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], second.path().join(&file_name));
        assert_eq!(candidates[1], PathBuf::from(&file_name));
    }

    #[test]
    fn test_load_missing_module() {
        let temp = tempfile::tempdir().unwrap();
        let loader = NativeModuleLoader::new().with_search_dirs([temp.path()]);

        match loader.load("isort_no_such_algorithm") {
            Err(Error::ModuleNotFound { name, reason }) => {
                assert_eq!(name, "isort_no_such_algorithm");
                assert!(!reason.is_empty());
            }
            other => panic!("expected ModuleNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(module_file_name("isort_garbage"));
        std::fs::write(&path, b"not a shared object").unwrap();

        let loader = NativeModuleLoader::new().with_search_dirs([temp.path()]);
        let err = loader.load("isort_garbage").unwrap_err();
        assert!(matches!(err, Error::ModuleNotFound { .. }));
    }

    #[test]
    fn test_load_rejects_path_names() {
        let loader = NativeModuleLoader::new();
        let err = loader.load("../radix").unwrap_err();
        assert!(matches!(err, Error::InvalidName(_)));
    }
}
