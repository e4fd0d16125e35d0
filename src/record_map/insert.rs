//! Insertion and the insert fixup pass.

use std::cmp::Ordering;

use super::RecordMap;
use super::arena::{Color, NodeId, SENTINEL, Side};
use crate::error::AlreadyExistsError;
use crate::record::{Record, RecordId};

impl RecordMap {
    /// Inserts a new record built from its fields.
    ///
    /// The GPA is not range-checked; only the uniqueness of `id` is
    /// enforced.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyExistsError`] if a record with `id` is already
    /// stored. The map is left unchanged.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordmap::{AlreadyExistsError, RecordMap};
    ///
    /// let mut map = RecordMap::new();
    /// assert_eq!(map.insert(10, "Alice", "CS", 3.8), Ok(()));
    /// assert_eq!(
    ///     map.insert(10, "Alicia", "CS", 3.9),
    ///     Err(AlreadyExistsError { id: 10 })
    /// );
    /// assert_eq!(map.search(10).map(|record| record.name()), Some("Alice"));
    /// ```
    pub fn insert(
        &mut self,
        id: RecordId,
        name: impl Into<String>,
        department: impl Into<String>,
        gpa: f64,
    ) -> Result<(), AlreadyExistsError> {
        self.insert_record(Record::new(id, name, department, gpa))
    }

    /// Inserts an already built record.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyExistsError`] if a record with the same id is
    /// already stored. The map is left unchanged.
    pub fn insert_record(&mut self, record: Record) -> Result<(), AlreadyExistsError> {
        let id = record.id();

        let mut parent = SENTINEL;
        let mut cursor = self.root;
        let mut ordering = Ordering::Equal;
        while cursor != SENTINEL {
            parent = cursor;
            ordering = id.cmp(&self.arena.key(cursor));
            cursor = match ordering {
                Ordering::Less => self.arena.left(cursor),
                Ordering::Greater => self.arena.right(cursor),
                Ordering::Equal => {
                    tracing::debug!(id, "rejected duplicate record");
                    return Err(AlreadyExistsError { id });
                }
            };
        }

        let node = self.arena.allocate(record, parent);
        if parent == SENTINEL {
            self.root = node;
        } else if ordering == Ordering::Less {
            self.arena.set_child(parent, Side::Left, node);
        } else {
            self.arena.set_child(parent, Side::Right, node);
        }
        self.length += 1;

        if parent == SENTINEL {
            self.arena.set_color(node, Color::Black);
        } else if self.arena.is_red(parent) {
            self.insert_fixup(node);
        }

        tracing::debug!(id, len = self.length, "inserted record");
        Ok(())
    }

    /// Repairs a red node with a red parent by walking towards the root.
    fn insert_fixup(&mut self, mut node: NodeId) {
        while self.arena.is_red(self.arena.parent(node)) {
            let parent = self.arena.parent(node);
            // A red parent is never the root, so the grandparent is real.
            let grandparent = self.arena.parent(parent);
            let side = self.arena.side_of(parent, grandparent);
            let uncle = self.arena.child(grandparent, side.opposite());

            if self.arena.is_red(uncle) {
                tracing::trace!(node, grandparent, "insert fixup: recolor");
                self.arena.set_color(parent, Color::Black);
                self.arena.set_color(uncle, Color::Black);
                self.arena.set_color(grandparent, Color::Red);
                node = grandparent;
            } else {
                if self.arena.child(parent, side.opposite()) == node {
                    node = parent;
                    self.rotate(node, side);
                }
                let parent = self.arena.parent(node);
                let grandparent = self.arena.parent(parent);
                tracing::trace!(node, grandparent, "insert fixup: rotate");
                self.arena.set_color(parent, Color::Black);
                self.arena.set_color(grandparent, Color::Red);
                self.rotate(grandparent, side.opposite());
            }
        }
        self.arena.set_color(self.root, Color::Black);
    }
}
