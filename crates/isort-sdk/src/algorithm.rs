//! The sort algorithm contract.

/// An ordered, mutable sequence of unsigned 64-bit integers.
pub type IntegerArray = Vec<u64>;

/// A sort strategy selectable by name at run time.
///
/// Implementations reorder `values` into non-decreasing order without changing
/// the multiset of elements. Empty and single-element arrays are valid input and
/// must be left untouched.
pub trait SortAlgorithm: Send {
    /// Short identifier of the implementation, for diagnostics.
    fn name(&self) -> &'static str;

    /// Sort `values` in place.
    ///
    /// The implementation may replace the vector's buffer with one of its own
    /// (for example the last output buffer of a multi-pass sort), as long as the
    /// caller ends up holding the sorted elements.
    fn sort(&mut self, values: &mut IntegerArray);
}

/// Check if a slice is sorted in non-decreasing order.
#[inline]
pub fn is_sorted(values: &[u64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
