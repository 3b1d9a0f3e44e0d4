//! Configuration defaults for leafdb.

use std::path::PathBuf;

/// Default order (maximum fan-out) of the B+ tree.
///
/// Order `m` bounds node sizes:
/// - An internal node holds at most `m` children and `m - 1` separator keys.
/// - A leaf holds at most `m - 1` entries.
///
/// 4 is deliberately tiny: it forces splits after a handful of inserts, which
/// makes the tree structure visible in the pretty-printed output. A real
/// deployment would size the order so one node fills a disk page.
///
/// The minimum usable order is 3: an order-2 node cannot hold a promotable
/// key after a split.
pub const DEFAULT_TREE_ORDER: usize = 4;

/// Default path of the tree snapshot file.
pub const DEFAULT_STORAGE_PATH: &str = "data/tree.db";

/// Runtime settings consumed by the driver.
///
/// Both settings ship with fixed defaults; there is no environment or CLI
/// override in the engine's contract.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tree order (maximum fan-out), `>= 3`.
    pub tree_order: usize,
    /// Where the tree snapshot is saved and loaded.
    pub storage_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tree_order: DEFAULT_TREE_ORDER,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}
