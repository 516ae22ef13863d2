//! Module entry points.
//!
//! An algorithm module exports exactly two unmangled `extern "C"` symbols:
//!
//! - `create` -> `*mut ()`: a new instance, or null on failure
//! - `destroy(*mut *mut ())`: releases the instance and nulls the caller's pointer
//!
//! The instance pointer is an opaque thin pointer to an [`AlgorithmObject`]
//! allocated by the module. It must only ever be released through the `destroy`
//! symbol of the module that created it.

use crate::algorithm::SortAlgorithm;

/// Name of the factory symbol.
pub const CREATE_SYMBOL: &[u8] = b"create";

/// Name of the destructor symbol.
pub const DESTROY_SYMBOL: &[u8] = b"destroy";

/// The heap object behind an instance pointer.
pub type AlgorithmObject = Box<dyn SortAlgorithm>;

/// Type for the module factory function.
pub type CreateFn = unsafe extern "C" fn() -> *mut ();

/// Type for the module destructor function.
pub type DestroyFn = unsafe extern "C" fn(*mut *mut ());

/// Allocate a new `T` behind an opaque instance pointer.
pub extern "C" fn create_instance<T>() -> *mut ()
where
    T: SortAlgorithm + Default + 'static,
{
    let object: AlgorithmObject = Box::new(T::default());
    Box::into_raw(Box::new(object)) as *mut ()
}

/// Release the instance held in `slot` and clear it.
///
/// Null slots and null instances are ignored.
///
/// # Safety
/// `slot` must be null or point to a pointer that is either null or was
/// returned by [`create_instance`] in this same module and not yet released.
pub unsafe extern "C" fn destroy_instance(slot: *mut *mut ()) {
    if slot.is_null() {
        return;
    }

    let instance = *slot;
    if !instance.is_null() {
        drop(Box::from_raw(instance as *mut AlgorithmObject));
    }
    *slot = std::ptr::null_mut();
}

/// Borrow the algorithm behind an instance pointer.
///
/// # Safety
/// `instance` must be a live, non-null pointer produced by a module factory,
/// and no other reference to it may exist for `'a`.
pub unsafe fn instance_mut<'a>(instance: *mut ()) -> &'a mut dyn SortAlgorithm {
    &mut **(instance as *mut AlgorithmObject)
}

/// Shared borrow of the algorithm behind an instance pointer, for read-only calls.
///
/// # Safety
/// `instance` must be a live, non-null pointer produced by a module factory,
/// and no mutable reference to it may exist for `'a`.
pub unsafe fn instance_ref<'a>(instance: *const ()) -> &'a dyn SortAlgorithm {
    &**(instance as *const AlgorithmObject)
}
