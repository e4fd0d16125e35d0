//! Rotations and subtree transplanting.
//!
//! These are the only places where the shape of the tree is rewired; both
//! fixup passes and deletion are built on them.

use super::RecordMap;
use super::arena::{NodeId, SENTINEL, Side};

impl RecordMap {
    /// Rotates the subtree rooted at `node` towards `side`.
    ///
    /// A left rotation lifts the right child into `node`'s place and makes
    /// `node` its left child; a right rotation is the mirror image. The
    /// in-order sequence of keys is unchanged.
    ///
    /// The child on the opposite side of `side` must not be the sentinel.
    pub(super) fn rotate(&mut self, node: NodeId, side: Side) {
        let other = side.opposite();
        let pivot = self.arena.child(node, other);
        debug_assert_ne!(pivot, SENTINEL, "rotation pivot must be a real node");

        let inner = self.arena.child(pivot, side);
        self.arena.set_child(node, other, inner);
        self.arena.set_parent(inner, node);

        let parent = self.arena.parent(node);
        self.arena.set_parent(pivot, parent);
        self.replace_child(parent, node, pivot);

        self.arena.set_child(pivot, side, node);
        self.arena.set_parent(node, pivot);

        tracing::trace!(node, pivot, ?side, "rotated");
    }

    /// Puts the subtree rooted at `replacement` where `target` hangs.
    ///
    /// Only the link from `target`'s parent and `replacement`'s parent link
    /// are updated; `target` keeps its own links.
    pub(super) fn transplant(&mut self, target: NodeId, replacement: NodeId) {
        let parent = self.arena.parent(target);
        self.replace_child(parent, target, replacement);
        self.arena.set_parent(replacement, parent);
    }

    /// Points whichever link of `parent` referred to `old` at `new`, or the
    /// root when `parent` is the sentinel.
    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == SENTINEL {
            self.root = new;
        } else {
            let side = self.arena.side_of(old, parent);
            self.arena.set_child(parent, side, new);
        }
    }
}
