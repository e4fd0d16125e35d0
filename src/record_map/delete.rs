//! Deletion and the delete fixup pass.

use super::RecordMap;
use super::arena::{Color, NodeId, SENTINEL, Side};
use crate::error::NotFoundError;
use crate::record::{Record, RecordId};

impl RecordMap {
    /// Removes the record with the given id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no record has `id`. The map is left
    /// unchanged, so deleting an absent id any number of times is harmless.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordmap::{NotFoundError, RecordMap};
    ///
    /// let mut map = RecordMap::new();
    /// map.insert(5, "Bob", "EE", 3.2).unwrap();
    ///
    /// let removed = map.delete(5).unwrap();
    /// assert_eq!(removed.name(), "Bob");
    /// assert_eq!(map.delete(5).unwrap_err(), NotFoundError { id: 5 });
    /// ```
    pub fn delete(&mut self, id: RecordId) -> Result<Record, NotFoundError> {
        let target = self.find(id);
        if target == SENTINEL {
            tracing::debug!(id, "delete of absent record");
            return Err(NotFoundError { id });
        }

        let mut removed_color = self.arena.color(target);
        // `replacement` takes the structural slot that lost a node; it may
        // be the sentinel, so its parent is tracked separately.
        let replacement;
        let replacement_parent;

        if self.arena.left(target) == SENTINEL {
            replacement = self.arena.right(target);
            replacement_parent = self.arena.parent(target);
            self.transplant(target, replacement);
        } else if self.arena.right(target) == SENTINEL {
            replacement = self.arena.left(target);
            replacement_parent = self.arena.parent(target);
            self.transplant(target, replacement);
        } else {
            let successor = self.minimum(self.arena.right(target));
            removed_color = self.arena.color(successor);
            replacement = self.arena.right(successor);

            if self.arena.parent(successor) == target {
                replacement_parent = successor;
            } else {
                replacement_parent = self.arena.parent(successor);
                self.transplant(successor, replacement);
                let right = self.arena.right(target);
                self.arena.set_child(successor, Side::Right, right);
                self.arena.set_parent(right, successor);
            }

            self.transplant(target, successor);
            let left = self.arena.left(target);
            self.arena.set_child(successor, Side::Left, left);
            self.arena.set_parent(left, successor);
            self.arena.set_color(successor, self.arena.color(target));
        }

        let record = self.arena.release(target).ok_or(NotFoundError { id })?;
        self.length -= 1;

        if removed_color == Color::Black {
            self.delete_fixup(replacement, replacement_parent);
        }

        tracing::debug!(id, len = self.length, "deleted record");
        Ok(record)
    }

    /// Restores black-height after a black node left the path through
    /// `node`, walking towards the root.
    fn delete_fixup(&mut self, mut node: NodeId, mut parent: NodeId) {
        while node != self.root && self.arena.is_black(node) {
            let side = self.arena.side_of(node, parent);
            let other = side.opposite();
            // The deficient side is one black short, so the sibling is real.
            let mut sibling = self.arena.child(parent, other);

            if self.arena.is_red(sibling) {
                tracing::trace!(node, sibling, "delete fixup: red sibling");
                self.arena.set_color(sibling, Color::Black);
                self.arena.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.arena.child(parent, other);
            }

            if self.arena.is_black(self.arena.left(sibling))
                && self.arena.is_black(self.arena.right(sibling))
            {
                tracing::trace!(node, sibling, "delete fixup: recolor");
                self.arena.set_color(sibling, Color::Red);
                node = parent;
                parent = self.arena.parent(node);
            } else {
                if self.arena.is_black(self.arena.child(sibling, other)) {
                    tracing::trace!(node, sibling, "delete fixup: rotate sibling");
                    let near = self.arena.child(sibling, side);
                    self.arena.set_color(near, Color::Black);
                    self.arena.set_color(sibling, Color::Red);
                    self.rotate(sibling, other);
                    sibling = self.arena.child(parent, other);
                }

                tracing::trace!(node, sibling, "delete fixup: rotate parent");
                self.arena.set_color(sibling, self.arena.color(parent));
                self.arena.set_color(parent, Color::Black);
                let far = self.arena.child(sibling, other);
                self.arena.set_color(far, Color::Black);
                self.rotate(parent, side);
                node = self.root;
            }
        }
        self.arena.set_color(node, Color::Black);
    }
}
