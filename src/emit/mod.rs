//! Artifact emission — turns an in-memory bank into files.
//!
//! Every artifact is rendered to bytes first and only then persisted, so
//! a failed run never leaves a truncated table behind.

pub mod artifact;
pub mod header;
pub mod manifest;
#[cfg(feature = "wav")]
pub mod wav;
