//! Bubble sort algorithm module (`libbubble.so` / `libbubble.dylib` / `bubble.dll`).

use isort_algorithms::BubbleSort;

isort_sdk::export_algorithm!(BubbleSort);
