//! Demo driver.
//!
//! Loads the tree snapshot from the configured path (or, when that fails,
//! rebuilds the tree from a fixed seed dataset), then runs a point lookup,
//! prints the tree shape, and saves the snapshot back to disk.

use std::fs;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leafdb::{load_tree, save_tree, BPlusTree, Config, Key};

/// Seed dataset inserted when no usable snapshot exists: user ids mapped to
/// email addresses.
fn seed_entries() -> Vec<(Key, String)> {
    [
        (1001, "alice@example.com"),
        (1002, "bob@example.com"),
        (1003, "carol@example.com"),
        (1004, "dave@example.com"),
        (1005, "erin@example.com"),
        (1006, "frank@example.com"),
        (1007, "grace@example.com"),
        (1008, "heidi@example.com"),
        (1009, "ivan@example.com"),
        (1010, "judy@example.com"),
    ]
    .into_iter()
    .map(|(key, email)| (key, email.to_string()))
    .collect()
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leafdb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::default();

    let tree = match load_tree::<String, _>(&config.storage_path) {
        Ok(tree) => {
            info!(
                path = %config.storage_path.display(),
                entries = tree.len(),
                "loaded B+ tree from disk"
            );
            tree
        }
        Err(e) => {
            warn!(
                path = %config.storage_path.display(),
                error = %e,
                "failed to load tree from disk; creating new tree and inserting seed data"
            );
            let mut tree = BPlusTree::new(config.tree_order);
            for (key, value) in seed_entries() {
                tree.insert(key, value);
            }
            info!(entries = tree.len(), "inserted seed data into B+ tree");
            tree
        }
    };

    match tree.search(1003) {
        Some(value) => info!(key = 1003, value = %value, "found key"),
        None => info!(key = 1003, "key not found"),
    }

    println!("B+ Tree Structure:");
    tree.pretty_print();

    if let Some(parent) = config.storage_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            error!(error = %e, "failed to create storage directory");
            return;
        }
    }

    match save_tree(&config.storage_path, &tree) {
        Ok(()) => info!(path = %config.storage_path.display(), "saved B+ tree to disk"),
        Err(e) => error!(error = %e, "failed to save tree"),
    }
}
