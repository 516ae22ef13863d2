//! Owned algorithm instances.

use std::fmt;
use std::sync::Arc;

use isort_sdk::ffi::{instance_mut, instance_ref};
use isort_sdk::IntegerArray;
use tracing::warn;

use crate::loader::{AlgorithmModule, ModuleSource};

/// An algorithm instance created by a module factory.
///
/// The handle keeps its module loaded and releases the instance through that
/// module's `destroy` entry point, either via
/// [`AlgorithmRegistry::destroy`](crate::AlgorithmRegistry::destroy) or when
/// dropped.
pub struct AlgorithmHandle {
    instance: *mut (),
    type_name: String,
    module: Arc<AlgorithmModule>,
}

// The instance is exclusively owned by the handle and `SortAlgorithm: Send`.
unsafe impl Send for AlgorithmHandle {}

impl AlgorithmHandle {
    /// # Safety
    /// `instance` must be a non-null pointer returned by `module`'s factory
    /// and not owned by anything else.
    pub(crate) unsafe fn new(
        instance: *mut (),
        type_name: impl Into<String>,
        module: Arc<AlgorithmModule>,
    ) -> Self {
        Self {
            instance,
            type_name: type_name.into(),
            module,
        }
    }

    /// The name this instance was created under.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The name the algorithm reports for itself.
    pub fn implementation(&self) -> &'static str {
        // SAFETY: the instance is live until release and only read here.
        unsafe { instance_ref(self.instance) }.name()
    }

    /// Where the instance's code came from.
    pub fn source(&self) -> &ModuleSource {
        self.module.source()
    }

    /// Sort `values` into non-decreasing order.
    pub fn sort(&mut self, values: &mut IntegerArray) {
        // SAFETY: the instance is live until release and `&mut self` is unique.
        let algorithm = unsafe { instance_mut(self.instance) };
        algorithm.sort(values);
    }

    pub(crate) fn module(&self) -> &Arc<AlgorithmModule> {
        &self.module
    }

    pub(crate) fn release(mut self) {
        self.release_instance();
    }

    fn release_instance(&mut self) {
        if self.instance.is_null() {
            return;
        }

        let mut slot = self.instance;
        // SAFETY: the instance came from this module's factory and is released once.
        unsafe { (self.module.entry_points().destroy)(&mut slot) };

        if !slot.is_null() {
            warn!(
                name = %self.type_name,
                "Algorithm module did not clear the instance pointer on destroy"
            );
        }
        self.instance = std::ptr::null_mut();
    }
}

impl Drop for AlgorithmHandle {
    fn drop(&mut self) {
        self.release_instance();
    }
}

impl fmt::Debug for AlgorithmHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmHandle")
            .field("type_name", &self.type_name)
            .field("source", self.module.source())
            .field("instance", &self.instance)
            .finish()
    }
}
