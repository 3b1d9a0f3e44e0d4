//! Diagnostic rendering of the tree shape.
//!
//! Produces the indented diagram the driver prints after a run, e.g.:
//!
//! ```text
//! └─ Internal: [25]
//!    ├─ Leaf: [10:A, 20:B]
//!    └─ Leaf: [25:Z, 30:C]
//! ```

use std::fmt::Display;

use crate::common::NodeId;
use crate::index::btree::node::Node;
use crate::index::btree::tree::BPlusTree;

impl<V: Display> BPlusTree<V> {
    /// Render the tree as an indented diagram, one node per line.
    ///
    /// Internal nodes show their separator keys, leaves their `key:value`
    /// pairs. The last child at each level gets a `└─` glyph, earlier
    /// siblings `├─`. Read-only.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_node(self.root_id(), "", true, &mut out);
        out
    }

    /// Print [`render`](Self::render) output to stdout.
    pub fn pretty_print(&self) {
        print!("{}", self.render());
    }

    fn render_node(&self, id: NodeId, prefix: &str, is_last: bool, out: &mut String) {
        let branch = if is_last { "└─ " } else { "├─ " };
        out.push_str(prefix);
        out.push_str(branch);

        match self.node(id) {
            Node::Leaf(leaf) => {
                let entries: Vec<String> = leaf
                    .keys
                    .iter()
                    .zip(&leaf.values)
                    .map(|(key, value)| format!("{}:{}", key, value))
                    .collect();
                out.push_str(&format!("Leaf: [{}]\n", entries.join(", ")));
            }
            Node::Internal(internal) => {
                out.push_str(&format!("Internal: {:?}\n", internal.keys));

                let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
                for (i, &child) in internal.children.iter().enumerate() {
                    let last_child = i == internal.children.len() - 1;
                    self.render_node(child, &child_prefix, last_child, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_leaf() {
        let mut tree = BPlusTree::new(4);
        tree.insert(10, "A");
        tree.insert(20, "B");

        assert_eq!(tree.render(), "└─ Leaf: [10:A, 20:B]\n");
    }

    #[test]
    fn test_render_after_root_split() {
        let mut tree = BPlusTree::new(4);
        tree.insert(10, "A");
        tree.insert(20, "B");
        tree.insert(30, "C");
        tree.insert(25, "Z");

        let expected = "\
└─ Internal: [25]
   ├─ Leaf: [10:A, 20:B]
   └─ Leaf: [25:Z, 30:C]
";
        assert_eq!(tree.render(), expected);
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut tree = BPlusTree::new(4);
        for key in 1..=10 {
            tree.insert(key, key);
        }

        let first = tree.render();
        let second = tree.render();
        assert_eq!(first, second);
        assert_eq!(tree.len(), 10);
    }
}
