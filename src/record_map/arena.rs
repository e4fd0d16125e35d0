//! Slot storage for tree nodes.
//!
//! Nodes live in a growable table and refer to each other by index. Slot 0
//! is the sentinel: it stands for every absent child and for the root's
//! parent, it is always black and its links are never written. Released
//! slots are kept on a free list and handed out again by the next
//! allocation.

use crate::record::{Record, RecordId};

/// Index of a node slot.
pub(crate) type NodeId = usize;

/// The reserved slot standing in for "no node".
pub(crate) const SENTINEL: NodeId = 0;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a red-black tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Color {
    /// A red node. Never the root and never the parent of another red node.
    Red,
    /// A black node. The root and the sentinel are always black.
    Black,
}

impl std::fmt::Display for Color {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => formatter.write_str("RED"),
            Self::Black => formatter.write_str("BLACK"),
        }
    }
}

// =============================================================================
// Side Definition
// =============================================================================

/// Which child link of a node is meant.
///
/// Rotations and both fixup passes are written once in terms of a side and
/// its opposite instead of as mirrored left/right copies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

#[derive(Clone, Debug)]
struct Node {
    /// Copy of `record.id()` so descents never touch the record itself.
    key: RecordId,
    /// `None` for the sentinel and for released slots.
    record: Option<Record>,
    color: Color,
    left: NodeId,
    right: NodeId,
    parent: NodeId,
}

impl Node {
    const fn sentinel() -> Self {
        Self {
            key: 0,
            record: None,
            color: Color::Black,
            left: SENTINEL,
            right: SENTINEL,
            parent: SENTINEL,
        }
    }
}

// =============================================================================
// Arena Definition
// =============================================================================

#[derive(Clone, Debug)]
pub(crate) struct Arena {
    slots: Vec<Node>,
    free: Vec<NodeId>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self {
            slots: vec![Node::sentinel()],
            free: Vec::new(),
        }
    }

    /// Stores `record` in a new red node with sentinel children.
    pub(crate) fn allocate(&mut self, record: Record, parent: NodeId) -> NodeId {
        let node = Node {
            key: record.id(),
            record: Some(record),
            color: Color::Red,
            left: SENTINEL,
            right: SENTINEL,
            parent,
        };
        if let Some(id) = self.free.pop() {
            self.slots[id] = node;
            id
        } else {
            self.slots.push(node);
            self.slots.len() - 1
        }
    }

    /// Releases a slot and returns the record it held.
    ///
    /// The caller must already have unlinked the node from the tree.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Record> {
        if id == SENTINEL {
            return None;
        }
        let node = std::mem::replace(&mut self.slots[id], Node::sentinel());
        self.free.push(id);
        node.record
    }

    /// Drops every node, keeping only the sentinel.
    pub(crate) fn clear(&mut self) {
        self.slots.truncate(1);
        self.free.clear();
    }

    #[inline]
    pub(crate) fn key(&self, id: NodeId) -> RecordId {
        self.slots[id].key
    }

    #[inline]
    pub(crate) fn record(&self, id: NodeId) -> Option<&Record> {
        self.slots[id].record.as_ref()
    }

    #[inline]
    pub(crate) fn color(&self, id: NodeId) -> Color {
        self.slots[id].color
    }

    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.color(id) == Color::Red
    }

    #[inline]
    pub(crate) fn is_black(&self, id: NodeId) -> bool {
        self.color(id) == Color::Black
    }

    #[inline]
    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.slots[id].left
    }

    #[inline]
    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.slots[id].right
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.slots[id].parent
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
        match side {
            Side::Left => self.left(id),
            Side::Right => self.right(id),
        }
    }

    /// Which child of `parent` the node `id` is.
    ///
    /// `id` may be the sentinel, which is why the parent is passed in
    /// rather than read from the node.
    #[inline]
    pub(crate) fn side_of(&self, id: NodeId, parent: NodeId) -> Side {
        if self.left(parent) == id {
            Side::Left
        } else {
            Side::Right
        }
    }

    // Every setter below is a no-op on the sentinel.

    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if id != SENTINEL {
            self.slots[id].color = color;
        }
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        if id != SENTINEL {
            self.slots[id].parent = parent;
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        if id == SENTINEL {
            return;
        }
        match side {
            Side::Left => self.slots[id].left = child,
            Side::Right => self.slots[id].right = child,
        }
    }
}
