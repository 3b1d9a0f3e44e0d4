//! Storage layer - snapshot persistence.
//!
//! The tree engine itself does no I/O; this module dumps a whole tree to a
//! flat file and restores it. See [`snapshot`] for the file format.

pub mod snapshot;

pub use snapshot::{load_tree, save_tree, SnapshotHeader};
