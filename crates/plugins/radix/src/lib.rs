//! Radix sort algorithm module.
//!
//! Loaded by the host as `libradix.so` / `libradix.dylib` / `radix.dll` when
//! the `radix` algorithm is requested.

use isort_algorithms::RadixSort;

isort_sdk::export_algorithm!(RadixSort);
