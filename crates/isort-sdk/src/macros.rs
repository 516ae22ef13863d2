//! Declarative macros for algorithm module development.

/// Macro to export the module entry points for an algorithm
///
/// This macro generates the `create` and `destroy` FFI exports. The type must
/// implement [`SortAlgorithm`](crate::SortAlgorithm) and `Default`.
///
/// # Example
///
/// ```rust,ignore
/// use isort_sdk::prelude::*;
///
/// #[derive(Default)]
/// struct MySort;
///
/// impl SortAlgorithm for MySort {
///     fn name(&self) -> &'static str {
///         "mysort"
///     }
///
///     fn sort(&mut self, values: &mut IntegerArray) {
///         values.sort_unstable();
///     }
/// }
///
/// export_algorithm!(MySort);
/// ```
#[macro_export]
macro_rules! export_algorithm {
    ($ty:ty) => {
        /// Create a new algorithm instance owned by this module.
        #[no_mangle]
        pub extern "C" fn create() -> *mut () {
            $crate::ffi::create_instance::<$ty>()
        }

        /// Release an instance created by this module and clear the caller's pointer.
        ///
        /// # Safety
        /// `instance` must be null or hold a pointer returned by this module's `create`.
        #[no_mangle]
        pub unsafe extern "C" fn destroy(instance: *mut *mut ()) {
            $crate::ffi::destroy_instance(instance)
        }
    };
}
