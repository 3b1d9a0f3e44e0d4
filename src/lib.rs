//! leafdb - A database indexing engine built around an in-memory B+ tree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                       leafdb                        │
//! ├─────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────────────────────────┐  │
//! │  │          Driver (src/bin/leafdb.rs)           │  │
//! │  │     load-or-seed → lookup → print → save      │  │
//! │  └───────────────────────────────────────────────┘  │
//! │                         ↓                           │
//! │  ┌───────────────────────────────────────────────┐  │
//! │  │             Index Layer (index/)              │  │
//! │  │   BPlusTree: insert / search / range / delete │  │
//! │  │   Node pool: LeafNode ⇄ InternalNode          │  │
//! │  └───────────────────────────────────────────────┘  │
//! │                         ↓                           │
//! │  ┌───────────────────────────────────────────────┐  │
//! │  │            Storage Layer (storage/)           │  │
//! │  │    snapshot: whole-tree dump / restore        │  │
//! │  └───────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Error, config defaults)
//! - [`index`] - The B+ tree engine
//! - [`storage`] - Whole-tree snapshot persistence
//!
//! # Quick Start
//! ```
//! use leafdb::BPlusTree;
//!
//! let mut tree = BPlusTree::new(4);
//! tree.insert(10, "A");
//! tree.insert(20, "B");
//! tree.insert(30, "C");
//!
//! assert_eq!(tree.search(20), Some(&"B"));
//! assert_eq!(tree.search(15), None);
//! assert_eq!(tree.range_search(10, 20), vec![&"A", &"B"]);
//! ```

pub mod common;
pub mod index;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::{Config, DEFAULT_STORAGE_PATH, DEFAULT_TREE_ORDER};
pub use common::{Error, NodeId, Result};
pub use index::btree::{BPlusTree, InternalNode, Key, LeafNode, Node};
pub use storage::{load_tree, save_tree};
