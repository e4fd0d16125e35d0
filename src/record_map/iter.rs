//! Lazy traversals over a [`RecordMap`].
//!
//! All iterators keep an explicit stack of node ids instead of recursing,
//! so their auxiliary space is bounded by the tree height.

use std::iter::FusedIterator;

use super::arena::{Arena, NodeId, SENTINEL};
use super::{NodeStack, RecordMap};
use crate::record::{Record, RecordId};

impl RecordMap {
    /// Returns an iterator over all records in ascending id order.
    ///
    /// Each call starts a fresh traversal.
    ///
    /// # Complexity
    ///
    /// O(N) for the whole traversal, O(log N) extra space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordmap::RecordMap;
    ///
    /// let mut map = RecordMap::new();
    /// for id in [3, 1, 2] {
    ///     map.insert(id, "name", "dept", 3.0).unwrap();
    /// }
    ///
    /// let ids: Vec<i32> = map.in_order().map(|record| record.id()).collect();
    /// assert_eq!(ids, vec![1, 2, 3]);
    /// assert_eq!(map.in_order().len(), 3);
    /// ```
    pub fn in_order(&self) -> InOrder<'_> {
        let mut iter = InOrder {
            arena: &self.arena,
            stack: NodeStack::new(),
            remaining: self.length,
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Returns an iterator visiting each node before its left and then its
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordmap::RecordMap;
    ///
    /// let mut map = RecordMap::new();
    /// for id in [1, 2, 3] {
    ///     map.insert(id, "name", "dept", 3.0).unwrap();
    /// }
    ///
    /// let ids: Vec<i32> = map.pre_order().map(|record| record.id()).collect();
    /// assert_eq!(ids, vec![2, 1, 3]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_> {
        let mut stack = NodeStack::new();
        if self.root != SENTINEL {
            stack.push(self.root);
        }
        PreOrder {
            arena: &self.arena,
            stack,
        }
    }

    /// Returns an iterator over the records with `min_id <= id <= max_id`
    /// in ascending id order.
    ///
    /// Subtrees that cannot hold ids in the range are never visited. An
    /// inverted range (`min_id > max_id`) yields nothing.
    ///
    /// # Complexity
    ///
    /// O(log N + k) where k is the number of results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordmap::RecordMap;
    ///
    /// let mut map = RecordMap::new();
    /// map.insert(10, "Alice", "CS", 3.8).unwrap();
    /// map.insert(5, "Bob", "EE", 3.2).unwrap();
    /// map.insert(20, "Carl", "ME", 2.9).unwrap();
    /// map.insert(15, "Dana", "CS", 3.95).unwrap();
    ///
    /// let ids: Vec<i32> = map.range_query(6, 16).map(|record| record.id()).collect();
    /// assert_eq!(ids, vec![10, 15]);
    /// assert_eq!(map.range_query(5, 2).count(), 0);
    /// ```
    pub fn range_query(&self, min_id: RecordId, max_id: RecordId) -> Range<'_> {
        let mut iter = Range {
            arena: &self.arena,
            stack: NodeStack::new(),
            min_id,
            max_id,
        };
        if min_id <= max_id {
            iter.push_lower_bound(self.root);
        }
        iter
    }
}

// =============================================================================
// InOrder
// =============================================================================

/// Iterator returned by [`RecordMap::in_order`].
#[derive(Clone, Debug)]
pub struct InOrder<'a> {
    arena: &'a Arena,
    stack: NodeStack,
    remaining: usize,
}

impl InOrder<'_> {
    fn push_left_spine(&mut self, mut node: NodeId) {
        while node != SENTINEL {
            self.stack.push(node);
            node = self.arena.left(node);
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(self.arena.right(node));
        self.remaining = self.remaining.saturating_sub(1);
        self.arena.record(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for InOrder<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for InOrder<'_> {}

// =============================================================================
// PreOrder
// =============================================================================

/// Iterator returned by [`RecordMap::pre_order`].
#[derive(Clone, Debug)]
pub struct PreOrder<'a> {
    arena: &'a Arena,
    stack: NodeStack,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in [self.arena.right(node), self.arena.left(node)] {
            if child != SENTINEL {
                self.stack.push(child);
            }
        }
        self.arena.record(node)
    }
}

impl FusedIterator for PreOrder<'_> {}

// =============================================================================
// Range
// =============================================================================

/// Iterator returned by [`RecordMap::range_query`].
#[derive(Clone, Debug)]
pub struct Range<'a> {
    arena: &'a Arena,
    stack: NodeStack,
    min_id: RecordId,
    max_id: RecordId,
}

impl Range<'_> {
    /// Stacks the path to the smallest id `>= min_id` below `node`.
    ///
    /// Left subtrees of nodes with id `<= min_id` are skipped since every id
    /// in them is below the range.
    fn push_lower_bound(&mut self, mut node: NodeId) {
        while node != SENTINEL {
            let key = self.arena.key(node);
            if key < self.min_id {
                node = self.arena.right(node);
            } else {
                self.stack.push(node);
                if key == self.min_id {
                    break;
                }
                node = self.arena.left(node);
            }
        }
    }
}

impl<'a> Iterator for Range<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let key = self.arena.key(node);
        if key > self.max_id {
            self.stack.clear();
            return None;
        }
        if key < self.max_id {
            self.push_lower_bound(self.arena.right(node));
        }
        self.arena.record(node)
    }
}

impl FusedIterator for Range<'_> {}
