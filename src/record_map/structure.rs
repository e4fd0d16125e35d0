//! Structural dump of the tree for display by a front end.

use smallvec::SmallVec;

use super::arena::{Color, NodeId, SENTINEL};
use super::{RecordMap, STACK_INLINE};
use crate::record::RecordId;

/// One node of the tree as reported by [`RecordMap::dump_structure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StructureEntry {
    /// Id of the record held by the node.
    pub id: RecordId,
    /// Color of the node.
    pub color: Color,
    /// Distance from the root, which has depth 0.
    pub depth: usize,
}

impl RecordMap {
    /// Lists every node with its color and depth, each node before its
    /// left and then its right subtree.
    ///
    /// Nothing inside the map relies on this; it exists so that a caller
    /// can draw the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordmap::{Color, RecordMap, StructureEntry};
    ///
    /// let mut map = RecordMap::new();
    /// for id in [1, 2, 3] {
    ///     map.insert(id, "name", "dept", 3.0).unwrap();
    /// }
    ///
    /// assert_eq!(
    ///     map.dump_structure(),
    ///     vec![
    ///         StructureEntry { id: 2, color: Color::Black, depth: 0 },
    ///         StructureEntry { id: 1, color: Color::Red, depth: 1 },
    ///         StructureEntry { id: 3, color: Color::Red, depth: 1 },
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn dump_structure(&self) -> Vec<StructureEntry> {
        let mut entries = Vec::with_capacity(self.length);
        let mut stack: SmallVec<[(NodeId, usize); STACK_INLINE]> = SmallVec::new();
        if self.root != SENTINEL {
            stack.push((self.root, 0));
        }
        while let Some((node, depth)) = stack.pop() {
            entries.push(StructureEntry {
                id: self.arena.key(node),
                color: self.arena.color(node),
                depth,
            });
            for child in [self.arena.right(node), self.arena.left(node)] {
                if child != SENTINEL {
                    stack.push((child, depth + 1));
                }
            }
        }
        entries
    }
}
