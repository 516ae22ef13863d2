//! Sort algorithms shipped with isort.
//!
//! Each algorithm is also packaged as its own loadable module under
//! `crates/plugins/`; this crate holds the implementations so they can be
//! compiled into the host as well.

pub mod bubble;
pub mod radix;

pub use bubble::BubbleSort;
pub use radix::RadixSort;
