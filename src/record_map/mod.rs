//! Ordered map of student records based on a Red-Black Tree.
//!
//! This module provides [`RecordMap`], a mutable ordered map from
//! [`RecordId`] to [`Record`].
//!
//! # Overview
//!
//! - O(log N) search
//! - O(log N) insert
//! - O(log N) delete
//! - O(log N + k) range queries where k is the number of results
//! - O(1) len and `is_empty`
//!
//! # Examples
//!
//! ```rust
//! use recordmap::RecordMap;
//!
//! let mut map = RecordMap::new();
//! map.insert(10, "Alice", "CS", 3.8).unwrap();
//! map.insert(5, "Bob", "EE", 3.2).unwrap();
//! map.insert(20, "Carl", "ME", 2.9).unwrap();
//!
//! let ids: Vec<i32> = map.in_order().map(|record| record.id()).collect();
//! assert_eq!(ids, vec![5, 10, 20]);
//!
//! assert!(map.insert(5, "Bobby", "EE", 3.0).is_err());
//! assert_eq!(map.delete(10).map(|record| record.id()), Ok(10));
//! assert!(map.search(10).is_none());
//! ```
//!
//! # Internal Structure
//!
//! Nodes are kept in an arena and linked by index. A single reserved slot,
//! the sentinel, stands for every missing child and for the root's parent.
//!
//! The Red-Black Tree maintains the following invariants:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. The sentinel is black
//! 4. Red nodes have only black children
//! 5. Every path from a node to a descendant sentinel has the same number
//!    of black nodes
//!
//! These invariants ensure the tree height is at most `2 * log2(N + 1)`.

mod arena;
mod delete;
mod insert;
mod iter;
mod rotation;
mod structure;
mod validate;

pub use arena::Color;
pub use iter::{InOrder, PreOrder, Range};
pub use structure::StructureEntry;
pub use validate::InvariantViolation;

use arena::{Arena, NodeId, SENTINEL};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

use crate::record::{Record, RecordId};

/// Inline capacity of traversal stacks. The height bound keeps a tree of
/// 65535 records within 32 levels.
pub(crate) const STACK_INLINE: usize = 32;

pub(crate) type NodeStack = SmallVec<[NodeId; STACK_INLINE]>;

// =============================================================================
// RecordMap Definition
// =============================================================================

/// An ordered map of [`Record`]s keyed by their unique id.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `search`       | O(log N)          |
/// | `insert`       | O(log N)          |
/// | `delete`       | O(log N)          |
/// | `first`/`last` | O(log N)          |
/// | `range_query`  | O(log N + k)      |
/// | `in_order`     | O(N)              |
/// | `len`          | O(1)              |
///
/// # Concurrency
///
/// Mutation takes `&mut self`, so writers are serialized against readers
/// by the borrow checker. The map is `Send + Sync`; a multi-threaded host
/// wraps it in its own lock.
#[derive(Clone)]
pub struct RecordMap {
    arena: Arena,
    root: NodeId,
    length: usize,
}

static_assertions::assert_impl_all!(RecordMap: Send, Sync);

impl RecordMap {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordmap::RecordMap;
    ///
    /// let map = RecordMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: SENTINEL,
            length: 0,
        }
    }

    /// Returns the number of records in the map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map holds no records.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        tracing::debug!(discarded = self.length, "cleared record map");
        self.arena.clear();
        self.root = SENTINEL;
        self.length = 0;
    }

    /// Returns the record with the given id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordmap::RecordMap;
    ///
    /// let mut map = RecordMap::new();
    /// map.insert(15, "Dana", "CS", 3.95).unwrap();
    ///
    /// assert_eq!(map.search(15).map(|record| record.name()), Some("Dana"));
    /// assert!(map.search(16).is_none());
    /// ```
    #[must_use]
    pub fn search(&self, id: RecordId) -> Option<&Record> {
        self.arena.record(self.find(id))
    }

    /// Returns `true` if a record with the given id is stored.
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.find(id) != SENTINEL
    }

    /// Returns the record with the smallest id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordmap::RecordMap;
    ///
    /// let mut map = RecordMap::new();
    /// assert!(map.first().is_none());
    ///
    /// map.insert(3, "C", "X", 1.0).unwrap();
    /// map.insert(1, "A", "X", 1.0).unwrap();
    /// map.insert(2, "B", "X", 1.0).unwrap();
    /// assert_eq!(map.first().map(|record| record.id()), Some(1));
    /// assert_eq!(map.last().map(|record| record.id()), Some(3));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&Record> {
        if self.root == SENTINEL {
            return None;
        }
        self.arena.record(self.minimum(self.root))
    }

    /// Returns the record with the largest id.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        if self.root == SENTINEL {
            return None;
        }
        self.arena.record(self.maximum(self.root))
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf, or 0 for an empty map.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut stack: SmallVec<[(NodeId, usize); STACK_INLINE]> = SmallVec::new();
        let mut height = 0;
        if self.root != SENTINEL {
            stack.push((self.root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [self.arena.left(node), self.arena.right(node)] {
                if child != SENTINEL {
                    stack.push((child, depth + 1));
                }
            }
        }
        height
    }

    /// Descends from the root to the node holding `id`, or the sentinel.
    fn find(&self, id: RecordId) -> NodeId {
        let mut node = self.root;
        while node != SENTINEL {
            match id.cmp(&self.arena.key(node)) {
                Ordering::Less => node = self.arena.left(node),
                Ordering::Greater => node = self.arena.right(node),
                Ordering::Equal => return node,
            }
        }
        SENTINEL
    }

    /// Leftmost node of the subtree rooted at `node`.
    ///
    /// `node` must not be the sentinel.
    fn minimum(&self, mut node: NodeId) -> NodeId {
        while self.arena.left(node) != SENTINEL {
            node = self.arena.left(node);
        }
        node
    }

    /// Rightmost node of the subtree rooted at `node`.
    ///
    /// `node` must not be the sentinel.
    fn maximum(&self, mut node: NodeId) -> NodeId {
        while self.arena.right(node) != SENTINEL {
            node = self.arena.right(node);
        }
        node
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl Default for RecordMap {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a RecordMap {
    type Item = &'a Record;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl PartialEq for RecordMap {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.in_order().eq(other.in_order())
    }
}

impl fmt::Debug for RecordMap {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.in_order().map(|record| (record.id(), record)))
            .finish()
    }
}

/// One line per record in ascending id order.
impl fmt::Display for RecordMap {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self {
            writeln!(formatter, "{record}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for RecordMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.in_order())
    }
}

#[cfg(feature = "serde")]
struct RecordMapVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for RecordMapVisitor {
    type Value = RecordMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of records with unique ids")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut map = RecordMap::new();
        while let Some(record) = access.next_element::<Record>()? {
            map.insert_record(record).map_err(serde::de::Error::custom)?;
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RecordMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RecordMapVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
