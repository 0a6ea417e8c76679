//! Insertion-ordered record list.
//!
//! `RecordList` is a singly-linked list of owned nodes where every `add` becomes
//! the new head, so iteration always runs from the most recently added record to
//! the oldest one. Duplicate symbols are allowed; `find` and `remove` act on the
//! first (newest) match.
//!
//! Design notes:
//! - Links are `Option<Box<ListNode>>`: each node has exactly one owner, and a
//!   removed node is dropped as soon as it is spliced out.
//! - Iterators borrow the list, so they are lazy, finite and restartable, and the
//!   borrow checker rules out mutation during a walk.
//! - `Drop` unlinks nodes in a loop; the default recursive drop of a long chain
//!   would overflow the stack.
use log::debug;

use crate::record::Record;

type Link = Option<Box<ListNode>>;

struct ListNode {
    record: Record,
    next: Link,
}

/// Singly-linked list of records, newest first.
#[derive(Default)]
pub struct RecordList {
    head: Link,
    len: usize,
}

impl RecordList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of records in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Prepend `record`; it becomes the head. O(1).
    pub fn add(&mut self, record: Record) {
        debug!("list: add {}", record.symbol);
        let node = Box::new(ListNode {
            record,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// First record (from head) whose symbol equals `symbol` exactly.
    pub fn find(&self, symbol: &str) -> Option<&Record> {
        self.traverse_all().find(|record| record.symbol == symbol)
    }

    /// Unlink and drop the first record matching `symbol`.
    ///
    /// Returns `false` and leaves the list untouched when nothing matches.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let mut link = &mut self.head;
        loop {
            let found = match link.as_deref() {
                Some(node) => node.record.symbol == symbol,
                None => {
                    debug!("list: remove {} (not found)", symbol);
                    return false;
                }
            };
            if found {
                break;
            }
            let Some(node) = link else {
                return false;
            };
            link = &mut node.next;
        }

        if let Some(mut removed) = link.take() {
            *link = removed.next.take();
            self.len -= 1;
            debug!("list: removed {}", removed.record.symbol);
        }
        true
    }

    /// Up to `limit` records starting at the head, in list order.
    ///
    /// A `limit` past the end stops at the list length; zero yields nothing.
    pub fn for_each_from_head(&self, limit: usize) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: limit,
        }
    }

    /// All records, head to tail.
    pub fn traverse_all(&self) -> Iter<'_> {
        self.for_each_from_head(self.len)
    }
}

impl Drop for RecordList {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

/// Borrowing iterator over a `RecordList`.
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.record)
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse_all()
    }
}
