//! Red-black invariant checking.

use super::RecordMap;
use super::arena::{NodeId, SENTINEL};
use crate::record::{Record, RecordId};

/// The first broken invariant found by [`RecordMap::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A node's id is not between the ids of its ancestors.
    UnorderedKeys {
        /// Id of the misplaced node.
        id: RecordId,
    },
    /// The root is red.
    RedRoot {
        /// Id of the root.
        id: RecordId,
    },
    /// The sentinel is red.
    RedSentinel,
    /// A red node has a red child.
    RedRedViolation {
        /// Id of the red parent.
        parent: RecordId,
        /// Id of the red child.
        child: RecordId,
    },
    /// The two subtrees of a node have different black-heights.
    BlackHeightMismatch {
        /// Id of the node whose subtrees disagree.
        id: RecordId,
        /// Black-height through the left child.
        left: usize,
        /// Black-height through the right child.
        right: usize,
    },
    /// A node's parent link does not point at the node linking to it.
    BrokenParentLink {
        /// Id of the node with the wrong parent link.
        id: RecordId,
    },
    /// The number of reachable nodes differs from the stored length.
    LengthMismatch {
        /// The stored length.
        expected: usize,
        /// The number of nodes reachable from the root.
        actual: usize,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnorderedKeys { id } => write!(formatter, "node {id} is out of key order"),
            Self::RedRoot { id } => write!(formatter, "root {id} is red"),
            Self::RedSentinel => write!(formatter, "sentinel is red"),
            Self::RedRedViolation { parent, child } => {
                write!(formatter, "red node {parent} has red child {child}")
            }
            Self::BlackHeightMismatch { id, left, right } => write!(
                formatter,
                "node {id} has black-height {left} on the left and {right} on the right"
            ),
            Self::BrokenParentLink { id } => {
                write!(formatter, "node {id} has a broken parent link")
            }
            Self::LengthMismatch { expected, actual } => write!(
                formatter,
                "map records {expected} entries but {actual} nodes are reachable"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl RecordMap {
    /// Checks every red-black invariant and returns the black-height of
    /// the root.
    ///
    /// The black-height counts the black nodes, including the sentinel, on
    /// any path from the root down to a sentinel, excluding the root itself.
    /// An empty map has black-height 0.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordmap::RecordMap;
    ///
    /// let mut map = RecordMap::new();
    /// for id in 0..7 {
    ///     map.insert(id, "name", "dept", 3.0).unwrap();
    /// }
    /// assert!(map.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        if self.arena.is_red(SENTINEL) {
            return Err(InvariantViolation::RedSentinel);
        }
        if self.root == SENTINEL {
            return if self.length == 0 {
                Ok(0)
            } else {
                Err(InvariantViolation::LengthMismatch {
                    expected: self.length,
                    actual: 0,
                })
            };
        }
        if self.arena.is_red(self.root) {
            return Err(InvariantViolation::RedRoot {
                id: self.arena.key(self.root),
            });
        }
        if self.arena.parent(self.root) != SENTINEL {
            return Err(InvariantViolation::BrokenParentLink {
                id: self.arena.key(self.root),
            });
        }

        let mut count = 0;
        let black_height = self.check_subtree(self.root, None, None, &mut count)?;
        if count != self.length {
            return Err(InvariantViolation::LengthMismatch {
                expected: self.length,
                actual: count,
            });
        }
        Ok(black_height)
    }

    /// Checks the subtree under `node`, whose ids must lie strictly between
    /// `lower` and `upper`, and returns its black-height.
    fn check_subtree(
        &self,
        node: NodeId,
        lower: Option<RecordId>,
        upper: Option<RecordId>,
        count: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        if node == SENTINEL {
            return Ok(0);
        }
        *count += 1;

        let id = self.arena.key(node);
        if lower.is_some_and(|bound| id <= bound) || upper.is_some_and(|bound| id >= bound) {
            return Err(InvariantViolation::UnorderedKeys { id });
        }
        if self.arena.record(node).map(Record::id) != Some(id) {
            return Err(InvariantViolation::UnorderedKeys { id });
        }

        let left = self.arena.left(node);
        let right = self.arena.right(node);
        for child in [left, right] {
            if child == SENTINEL {
                continue;
            }
            if self.arena.parent(child) != node {
                return Err(InvariantViolation::BrokenParentLink {
                    id: self.arena.key(child),
                });
            }
            if self.arena.is_red(node) && self.arena.is_red(child) {
                return Err(InvariantViolation::RedRedViolation {
                    parent: id,
                    child: self.arena.key(child),
                });
            }
        }

        let left_height = self.check_subtree(left, lower, Some(id), count)?
            + usize::from(self.arena.is_black(left));
        let right_height = self.check_subtree(right, Some(id), upper, count)?
            + usize::from(self.arena.is_black(right));
        if left_height != right_height {
            return Err(InvariantViolation::BlackHeightMismatch {
                id,
                left: left_height,
                right: right_height,
            });
        }
        Ok(left_height)
    }
}
