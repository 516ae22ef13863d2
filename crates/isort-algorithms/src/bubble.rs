//! Bubble sort.

use isort_sdk::{IntegerArray, SortAlgorithm};

/// Well-known algorithm name.
pub const NAME: &str = "bubble";

/// Exchange sort: adjacent compare-and-swap passes until a pass swaps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSort;

impl BubbleSort {
    /// Create a new bubble sorter.
    pub fn new() -> Self {
        Self
    }
}

impl SortAlgorithm for BubbleSort {
    fn name(&self) -> &'static str {
        NAME
    }

    fn sort(&mut self, values: &mut IntegerArray) {
        if values.len() < 2 {
            return;
        }

        let mut swapped = true;
        while swapped {
            swapped = false;
            for i in 0..values.len() - 1 {
                if values[i] > values[i + 1] {
                    values.swap(i, i + 1);
                    swapped = true;
                }
            }
        }
    }
}
