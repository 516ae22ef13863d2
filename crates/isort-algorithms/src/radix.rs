//! Base-10 LSD radix sort.
//!
//! Each digit pass is a stable counting sort: a histogram of the current digit,
//! turned into ending positions by a running sum, then a reverse scatter of the
//! input into the output buffer. Walking the input backwards while decrementing
//! the ending positions keeps equal digits in the order the previous pass left
//! them, which is what makes least-significant-digit-first correct.
//!
//! The number of passes is the decimal digit count of the largest element. It
//! is found during the first pass, so the data is never pre-scanned.

use isort_sdk::{IntegerArray, SortAlgorithm};

/// Well-known algorithm name.
pub const NAME: &str = "radix";

/// Number base of one digit pass.
const BASE: u64 = 10;

/// Number of buckets per digit pass.
const BUCKETS: usize = BASE as usize;

/// LSD radix sort using counting-sort passes.
#[derive(Debug, Default)]
pub struct RadixSort {
    /// Per-digit counters, reset at the start of every pass
    counts: [usize; BUCKETS],
    /// Second buffer for the scatter step; only its capacity is kept between sorts
    scratch: Vec<u64>,
}

impl RadixSort {
    /// Create a new radix sorter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one counting-sort pass over `input` into `output` on the digit
    /// selected by `div`.
    ///
    /// When `max` is given, the largest value seen is recorded into it.
    fn pass(&mut self, input: &[u64], output: &mut [u64], div: u64, mut max: Option<&mut u64>) {
        self.counts = [0; BUCKETS];

        for &value in input {
            if let Some(max) = max.as_deref_mut() {
                if value > *max {
                    *max = value;
                }
            }
            self.counts[digit(value, div)] += 1;
        }

        // Ending index (exclusive) of each digit's run in the output
        let mut running = 0;
        for count in self.counts.iter_mut() {
            running += *count;
            *count = running;
        }

        for &value in input.iter().rev() {
            let bucket = digit(value, div);
            output[self.counts[bucket] - 1] = value;
            self.counts[bucket] -= 1;
        }
    }
}

impl SortAlgorithm for RadixSort {
    fn name(&self) -> &'static str {
        NAME
    }

    fn sort(&mut self, values: &mut IntegerArray) {
        if values.is_empty() {
            return;
        }

        let mut input = std::mem::take(values);
        let mut output = std::mem::take(&mut self.scratch);
        output.clear();
        output.resize(input.len(), 0);

        let mut num_digits = 1;
        let mut position = 0;
        let mut div = 1u64;

        while position < num_digits {
            if position == 0 {
                let mut max = 0;
                self.pass(&input, &mut output, div, Some(&mut max));
                num_digits = digit_count(max);
                tracing::trace!(max, num_digits, "radix digit count");
            } else {
                self.pass(&input, &mut output, div, None);
            }

            std::mem::swap(&mut input, &mut output);
            position += 1;
            // 10^19 is the last divisor a u64 needs
            div = div.saturating_mul(BASE);
        }

        // The last pass wrote into what is now `input`
        *values = input;
        self.scratch = output;
    }
}

/// Decimal digit of `value` selected by `div` (a power of ten).
#[inline]
fn digit(value: u64, div: u64) -> usize {
    ((value / div) % BASE) as usize
}

/// Number of decimal digits in `value`: `floor(log10(value)) + 1`, and 1 for zero.
pub fn digit_count(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}
