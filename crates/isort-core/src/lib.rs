//! isort core
//!
//! Resolves sort algorithms by name at run time and drives a sort job.
//!
//! ## Architecture
//!
//! ```text
//! Sorter ──create(name)──▶ AlgorithmRegistry ──load(name)──▶ ModuleLoader
//!    │                       │  (cached per name)           ├─ NativeModuleLoader
//!    │◀──AlgorithmHandle─────┘                              └─ BuiltinModuleLoader
//!    │
//!    └─sort(values)─▶ handle ──destroy──▶ owning module
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use isort_core::{AlgorithmRegistry, Sorter, SorterConfig};
//!
//! let config = SorterConfig::new().with_algorithm("bubble").with_output_file("sorted.dat");
//! let sorted = Sorter::new(config).run(AlgorithmRegistry::global(), &mut std::io::stdout())?;
//! println!("{} values", sorted.len());
//! # Ok::<(), isort_core::Error>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod handle;
pub mod loader;
pub mod registry;
pub mod sorter;

pub use config::{LoaderKind, SorterConfig};
pub use error::{Error, Result};
pub use handle::AlgorithmHandle;
pub use loader::{
    AlgorithmModule, BuiltinModuleLoader, EntryPoints, ModuleLoader, ModuleSource,
    NativeModuleLoader,
};
pub use registry::AlgorithmRegistry;
pub use sorter::Sorter;

/// Re-exports for algorithm authors and embedders.
pub use isort_sdk::{IntegerArray, SortAlgorithm};

/// Prelude module with common imports
pub mod prelude {
    pub use crate::config::{LoaderKind, SorterConfig};
    pub use crate::error::{Error, Result};
    pub use crate::handle::AlgorithmHandle;
    pub use crate::registry::AlgorithmRegistry;
    pub use crate::sorter::Sorter;
    pub use isort_sdk::{IntegerArray, SortAlgorithm};
}
