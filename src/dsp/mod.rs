//! Synthesis — closed-form evaluation of every bank sample.
//!
//! Each value depends only on its `(frame, sample)` coordinates and the
//! bank shape, so frames can be rendered in any order (or in parallel)
//! without changing a single bit of the result.

pub mod morph;
pub mod synth;
