//! Algorithm registry.
//!
//! Maps algorithm names to loaded modules. A module is loaded on the first
//! `create` for its name and cached for the lifetime of the registry; every
//! instance is released through the module that allocated it.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::handle::AlgorithmHandle;
use crate::loader::{
    validate_name, AlgorithmModule, BuiltinModuleLoader, ModuleLoader, ModuleSource,
    NativeModuleLoader,
};

/// Process-wide registry backed by native modules.
static GLOBAL_REGISTRY: Lazy<AlgorithmRegistry> =
    Lazy::new(|| AlgorithmRegistry::new(NativeModuleLoader::from_env()));

/// Resolves algorithm names to instances and disposes of them.
pub struct AlgorithmRegistry {
    loader: Box<dyn ModuleLoader>,
    /// Loaded modules by name; held locked across lookup, load and insert
    modules: Mutex<HashMap<String, Arc<AlgorithmModule>>>,
}

impl AlgorithmRegistry {
    /// Create a registry using `loader` to resolve names.
    pub fn new(loader: impl ModuleLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            modules: Mutex::new(HashMap::new()),
        }
    }

    /// A registry that loads native modules, searching `ISORT_PLUGIN_PATH` first.
    pub fn native() -> Self {
        Self::new(NativeModuleLoader::from_env())
    }

    /// A registry over the algorithms compiled into this binary.
    pub fn builtin() -> Self {
        Self::new(BuiltinModuleLoader::new())
    }

    /// The process-wide registry.
    pub fn global() -> &'static AlgorithmRegistry {
        &GLOBAL_REGISTRY
    }

    /// Create a new instance of the algorithm `name`.
    ///
    /// The module is loaded on first use; later calls reuse it.
    pub fn create(&self, name: &str) -> Result<AlgorithmHandle> {
        let module = self.resolve(name)?;

        let instance = unsafe { (module.entry_points().create)() };
        if instance.is_null() {
            return Err(Error::FactoryFailed {
                name: name.to_string(),
            });
        }

        debug!(name, "Created algorithm instance");

        // SAFETY: non-null and freshly returned by this module's factory.
        Ok(unsafe { AlgorithmHandle::new(instance, name, module) })
    }

    /// Release `handle` through the module registered for its type name.
    ///
    /// A handle whose type name this registry never resolved is still
    /// released through its own module, but reported as a contract violation.
    pub fn destroy(&self, handle: AlgorithmHandle) -> Result<()> {
        let registered = {
            let modules = self.modules.lock();
            modules
                .get(handle.type_name())
                .map(|module| Arc::ptr_eq(module, handle.module()))
                .unwrap_or(false)
        };

        if !registered {
            let message = format!(
                "destroy called for '{}', which this registry did not create",
                handle.type_name()
            );
            warn!("{}", message);
            handle.release();
            return Err(Error::ContractViolation(message));
        }

        debug!(name = handle.type_name(), "Destroying algorithm instance");
        handle.release();
        Ok(())
    }

    /// Check if the module for `name` has been loaded.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.modules.lock().contains_key(name)
    }

    /// Names of all loaded modules, sorted.
    pub fn loaded_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Where the module for `name` was loaded from, if loaded.
    pub fn module_source(&self, name: &str) -> Option<ModuleSource> {
        self.modules
            .lock()
            .get(name)
            .map(|module| module.source().clone())
    }

    fn resolve(&self, name: &str) -> Result<Arc<AlgorithmModule>> {
        validate_name(name)?;

        let mut modules = self.modules.lock();
        if let Some(module) = modules.get(name) {
            return Ok(Arc::clone(module));
        }

        let module = Arc::new(self.loader.load(name)?);
        info!(name, source = %module.source(), "Loaded algorithm module");

        modules.insert(name.to_string(), Arc::clone(&module));
        Ok(module)
    }
}

impl std::fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("loaded", &self.loaded_names())
            .finish()
    }
}
