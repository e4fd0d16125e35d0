//! # recordmap
//!
//! An in-memory ordered map of student records keyed by a unique integer
//! id, kept balanced as a Red-Black Tree.
//!
//! ## Overview
//!
//! - **Records**: [`Record`] holds an id, a name, a department and a GPA
//! - **Ordered map**: [`RecordMap`] supports insert, search, delete and
//!   ordered traversal in O(log N) per operation
//! - **Range queries**: [`RecordMap::range_query`] visits only the subtrees
//!   that can hold ids in the requested interval
//! - **Inspection**: [`RecordMap::dump_structure`] and
//!   [`RecordMap::validate`] expose the tree shape and its invariants
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Record`] and [`RecordMap`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use recordmap::prelude::*;
//!
//! let mut map = RecordMap::new();
//! map.insert(10, "Alice", "CS", 3.8)?;
//! map.insert(5, "Bob", "EE", 3.2)?;
//! map.insert(20, "Carl", "ME", 2.9)?;
//! map.insert(15, "Dana", "CS", 3.95)?;
//!
//! let in_range: Vec<i32> = map.range_query(6, 16).map(Record::id).collect();
//! assert_eq!(in_range, vec![10, 15]);
//!
//! map.delete(10)?;
//! assert!(map.search(10).is_none());
//! assert!(map.validate().is_ok());
//! # Ok::<(), RecordMapError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use recordmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AlreadyExistsError, NotFoundError, RecordMapError};
    pub use crate::record::{Record, RecordId};
    pub use crate::record_map::RecordMap;
}

pub mod error;
pub mod record;
pub mod record_map;

pub use error::{AlreadyExistsError, NotFoundError, RecordMapError};
pub use record::{Record, RecordId};
pub use record_map::{
    Color, InOrder, InvariantViolation, PreOrder, Range, RecordMap, StructureEntry,
};
