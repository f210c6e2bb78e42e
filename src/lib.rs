/*! A fixed-capacity, heap-backed ring buffer that overwrites its oldest
element when pushed to while full.

The container itself performs no I/O. The two advisory diagnostics it can
emit (clamped zero capacity, ignored empty pop) go through the `dev_warn!`
macro, which compiles to nothing unless the `dev-log` feature is enabled.
*/

#![no_std]

extern crate alloc;

mod devlog;
mod ring;

pub use ring::{CapacityError, Iter, RingBuffer};

pub use log as __log;
