//! B+ tree index.
//!
//! # Components
//! - [`node`] - The data-only node model ([`Node`], [`LeafNode`],
//!   [`InternalNode`])
//! - [`tree`] - The engine: insert/split, search, range scan, delete
//! - `print` - Diagnostic rendering of the tree shape
//!
//! # Invariants
//! After every operation returns:
//! - Node keys are strictly ascending; leaf keys and values stay parallel.
//! - No leaf holds more than `order - 1` entries; no internal node holds
//!   more than `order - 1` keys / `order` children.
//! - All leaves sit at the same depth, linked left-to-right in key order.

pub mod node;
mod print;
pub mod tree;

pub use node::{InternalNode, Key, LeafNode, Node};
pub use tree::BPlusTree;
