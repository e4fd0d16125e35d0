//! Error types for record map operations.
//!
//! Both errors are recoverable: the map is left exactly as it was before
//! the failed call.

use crate::record::RecordId;

/// Returned by [`RecordMap::insert`](crate::RecordMap::insert) when a record
/// with the same id is already stored.
///
/// # Examples
///
/// ```rust
/// use recordmap::AlreadyExistsError;
///
/// let error = AlreadyExistsError { id: 42 };
/// assert_eq!(format!("{error}"), "record with id 42 already exists");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyExistsError {
    /// The id that was rejected.
    pub id: RecordId,
}

impl std::fmt::Display for AlreadyExistsError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "record with id {} already exists", self.id)
    }
}

impl std::error::Error for AlreadyExistsError {}

/// Returned by [`RecordMap::delete`](crate::RecordMap::delete) when no
/// record has the requested id.
///
/// # Examples
///
/// ```rust
/// use recordmap::NotFoundError;
///
/// let error = NotFoundError { id: 7 };
/// assert_eq!(format!("{error}"), "record with id 7 not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFoundError {
    /// The id that was looked up.
    pub id: RecordId,
}

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "record with id {} not found", self.id)
    }
}

impl std::error::Error for NotFoundError {}

/// Any error a [`RecordMap`](crate::RecordMap) operation can report.
///
/// Hosts that mix inserts and deletes in one fallible function can use `?`
/// on either call and return this type.
///
/// # Examples
///
/// ```rust
/// use recordmap::{RecordMap, RecordMapError};
///
/// fn replace(map: &mut RecordMap, id: i32, name: &str) -> Result<(), RecordMapError> {
///     let old = map.delete(id)?;
///     map.insert(id, name, old.department(), old.gpa())?;
///     Ok(())
/// }
///
/// let mut map = RecordMap::new();
/// assert!(replace(&mut map, 1, "Zed").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMapError {
    /// Insertion of a duplicate id.
    AlreadyExists(AlreadyExistsError),
    /// Deletion of an absent id.
    NotFound(NotFoundError),
}

impl std::fmt::Display for RecordMapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists(error) => write!(formatter, "{error}"),
            Self::NotFound(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for RecordMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AlreadyExists(error) => Some(error),
            Self::NotFound(error) => Some(error),
        }
    }
}

impl From<AlreadyExistsError> for RecordMapError {
    fn from(error: AlreadyExistsError) -> Self {
        Self::AlreadyExists(error)
    }
}

impl From<NotFoundError> for RecordMapError {
    fn from(error: NotFoundError) -> Self {
        Self::NotFound(error)
    }
}
