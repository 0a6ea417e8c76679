//! Symbol-ordered record index.
//!
//! `RecordIndex` is an unbalanced binary search tree keyed by `Record::symbol`
//! using plain `str` ordering (byte-wise lexicographic, case-sensitive). It
//! serves two purposes: de-duplicating symbols (the first insert wins, later
//! inserts with the same symbol are dropped) and producing a sorted listing.
//!
//! There is no rebalancing, so the tree is exactly as tall as the insertion order
//! makes it; inserting already-sorted symbols yields a chain. Every walk is
//! therefore iterative (link cursors for descent, an explicit stack for
//! traversal and teardown) so a degenerate chain costs time but never call
//! stack.
//!
//! Deletion follows the textbook scheme:
//! - a node with at most one child is replaced by that child;
//! - a node with two children takes over the record of its in-order successor
//!   (the leftmost node of its right subtree), and the successor's node is then
//!   unlinked from the right subtree.
use std::cmp::Ordering;

use log::debug;

use crate::record::Record;

type Link = Option<Box<TreeNode>>;

struct TreeNode {
    record: Record,
    left: Link,
    right: Link,
}

impl TreeNode {
    fn leaf(record: Record) -> Box<Self> {
        Box::new(TreeNode {
            record,
            left: None,
            right: None,
        })
    }
}

/// Binary search tree of records keyed by symbol.
#[derive(Default)]
pub struct RecordIndex {
    root: Link,
    len: usize,
}

impl RecordIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of records (distinct symbols) in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert `record` as a new leaf.
    ///
    /// If a record with the same symbol is already present nothing changes and
    /// `false` is returned; the stored record keeps its original price and volume.
    pub fn insert(&mut self, record: Record) -> bool {
        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    debug!("index: insert {}", record.symbol);
                    *link = Some(TreeNode::leaf(record));
                    self.len += 1;
                    return true;
                }
                Some(node) => match record.symbol().cmp(node.record.symbol()) {
                    Ordering::Less => link = &mut node.left,
                    Ordering::Greater => link = &mut node.right,
                    Ordering::Equal => {
                        debug!("index: duplicate {} ignored", record.symbol);
                        return false;
                    }
                },
            }
        }
    }

    /// Record stored under `symbol`, if any.
    pub fn get(&self, symbol: &str) -> Option<&Record> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match symbol.cmp(node.record.symbol()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.record),
            };
        }
        None
    }

    /// Whether a record with `symbol` is present.
    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// Delete the record stored under `symbol` and return it.
    ///
    /// An absent symbol returns `None` and leaves the tree untouched.
    pub fn delete(&mut self, symbol: &str) -> Option<Record> {
        let link = Self::link_for(&mut self.root, symbol);
        let node = link.as_mut()?;

        let removed = if node.left.is_some() && node.right.is_some() {
            let successor = Self::take_min(&mut node.right)?;
            debug!("index: {} replaced by successor {}", symbol, successor.symbol);
            std::mem::replace(&mut node.record, successor)
        } else {
            let mut unlinked = link.take()?;
            *link = unlinked.left.take().or_else(|| unlinked.right.take());
            unlinked.record
        };

        self.len -= 1;
        debug!("index: deleted {}", removed.symbol);
        Some(removed)
    }

    /// Records in ascending symbol order.
    pub fn traverse_in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Symbols in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.traverse_in_order().map(Record::symbol)
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&TreeNode, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        max
    }

    /// Link that holds `symbol`, or the empty link where it would be inserted.
    fn link_for<'a>(mut link: &'a mut Link, symbol: &str) -> &'a mut Link {
        loop {
            let ord = match link.as_deref() {
                Some(node) => symbol.cmp(node.record.symbol()),
                None => return link,
            };
            if ord == Ordering::Equal {
                return link;
            }
            let Some(node) = link else {
                return link;
            };
            link = if ord == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }
    }

    /// Unlink the leftmost node under `link` and return its record.
    fn take_min(mut link: &mut Link) -> Option<Record> {
        while link.as_ref()?.left.is_some() {
            let Some(node) = link else {
                return None;
            };
            link = &mut node.left;
        }
        let mut min = link.take()?;
        *link = min.right.take();
        Some(min.record)
    }
}

impl Drop for RecordIndex {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// In-order iterator over a `RecordIndex`.
///
/// Holds the chain of nodes whose left subtrees are being visited; each call to
/// `next` pops one node and pushes the left spine of its right subtree.
pub struct InOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a TreeNode>) -> Self {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(names: &[&str]) -> RecordIndex {
        let mut index = RecordIndex::new();
        for name in names {
            index.insert(Record::new(name, 1.0, 1));
        }
        index
    }

    fn sorted(index: &RecordIndex) -> Vec<&str> {
        index.symbols().collect()
    }

    #[test]
    fn in_order_yields_sorted_symbols() {
        let index = index_of(&["M", "B", "T", "A", "C"]);
        assert_eq!(sorted(&index), ["A", "B", "C", "M", "T"]);
        assert_eq!(index.len(), 5);
        assert_eq!(index.height(), 3);
    }

    #[test]
    fn ordering_is_case_sensitive_bytewise() {
        let index = index_of(&["b", "B", "a", "A"]);
        assert_eq!(sorted(&index), ["A", "B", "a", "b"]);
    }

    #[test]
    fn duplicate_insert_keeps_first_record() {
        let mut index = RecordIndex::new();
        assert!(index.insert(Record::new("AAPL", 150.0, 1000)));
        assert!(!index.insert(Record::new("AAPL", 999.0, 1)));
        assert_eq!(index.get("AAPL"), Some(&Record::new("AAPL", 150.0, 1000)));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut index = index_of(&["M", "B", "T", "A", "C"]);
        let before: Vec<Record> = index.traverse_in_order().cloned().collect();
        assert_eq!(index.delete("Q"), None);
        let after: Vec<Record> = index.traverse_in_order().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(index.len(), 5);
        assert_eq!(RecordIndex::new().delete("A"), None);
    }

    #[test]
    fn delete_leaf() {
        let mut index = index_of(&["M", "B", "T", "A", "C"]);
        assert_eq!(index.delete("A").map(|r| r.symbol), Some("A".to_string()));
        assert_eq!(sorted(&index), ["B", "C", "M", "T"]);
    }

    #[test]
    fn delete_node_with_one_child() {
        let mut index = index_of(&["M", "B", "T", "A"]);
        index.delete("B");
        assert_eq!(sorted(&index), ["A", "M", "T"]);
        index.delete("M");
        assert_eq!(sorted(&index), ["A", "T"]);
    }

    #[test]
    fn delete_node_with_two_children_promotes_successor() {
        let mut index = RecordIndex::new();
        let entries = [
            ("M", 1),
            ("B", 2),
            ("T", 3),
            ("A", 4),
            ("C", 5),
            ("P", 6),
            ("Z", 7),
            ("N", 8),
        ];
        for (name, volume) in entries {
            index.insert(Record::new(name, 0.0, volume));
        }

        let removed = index.delete("M").unwrap();
        assert_eq!(removed.volume, 1);
        assert_eq!(sorted(&index), ["A", "B", "C", "N", "P", "T", "Z"]);
        assert!(!index.contains("M"));
        // successor keeps its own data after promotion
        assert_eq!(index.get("N").map(|r| r.volume), Some(8));
        assert_eq!(index.len(), 7);

        index.delete("B");
        assert_eq!(sorted(&index), ["A", "C", "N", "P", "T", "Z"]);
    }

    #[test]
    fn delete_root_until_empty() {
        let mut index = index_of(&["M", "B", "T", "A", "C"]);
        for name in ["M", "C", "B", "T", "A"] {
            assert!(index.delete(name).is_some());
            let left: Vec<&str> = sorted(&index);
            assert!(left.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(index.is_empty());
        assert_eq!(index.height(), 0);
    }

    #[test]
    fn deleted_symbol_can_be_reinserted() {
        let mut index = index_of(&["B", "A", "C"]);
        index.delete("B");
        assert!(index.insert(Record::new("B", 2.0, 2)));
        assert_eq!(index.get("B").map(|r| r.price), Some(2.0));
    }

    #[test]
    fn sorted_insertion_degenerates_into_chain() {
        let mut index = RecordIndex::new();
        for i in 0..10_000 {
            index.insert(Record::new(&format!("S{:05}", i), 0.0, i));
        }
        assert_eq!(index.height(), 10_000);
        assert_eq!(index.symbols().next(), Some("S00000"));
        assert!(index.delete("S05000").is_some());
        assert_eq!(index.len(), 9_999);
        drop(index);
    }
}
