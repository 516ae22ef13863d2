//! isort Algorithm SDK
//!
//! This SDK defines the contract every sort algorithm implements and the
//! entry points an algorithm module exports so the host can load it by name.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use isort_sdk::prelude::*;
//!
//! #[derive(Default)]
//! struct MySort;
//!
//! impl SortAlgorithm for MySort {
//!     fn name(&self) -> &'static str {
//!         "mysort"
//!     }
//!
//!     fn sort(&mut self, values: &mut IntegerArray) {
//!         values.sort_unstable();
//!     }
//! }
//!
//! export_algorithm!(MySort);
//! ```
//!
//! Build the crate as a `cdylib` named after the algorithm (`libmysort.so`,
//! `mysort.dll`, `libmysort.dylib`) and `isort -a mysort` will pick it up.

pub mod algorithm;
pub mod ffi;
#[macro_use]
pub mod macros;

pub use algorithm::{IntegerArray, SortAlgorithm};
pub use ffi::{AlgorithmObject, CreateFn, DestroyFn, CREATE_SYMBOL, DESTROY_SYMBOL};

/// Prelude module with common imports
pub mod prelude {
    pub use crate::algorithm::{is_sorted, IntegerArray, SortAlgorithm};
    pub use crate::ffi::{CreateFn, DestroyFn};

    // Macros are automatically available due to #[macro_use]
}
