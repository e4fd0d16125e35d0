//! Student records stored in a [`RecordMap`](crate::RecordMap).
//!
//! A [`Record`] is a small fixed-shape value: an integer id, which is the
//! sort and search key, plus a name, a department and a grade-point average.
//!
//! The map enforces only one business rule, the uniqueness of the id.
//! Checks such as non-empty names or a GPA within `0.0..=4.0` belong to the
//! caller that collects the data.
//!
//! # Examples
//!
//! ```rust
//! use recordmap::Record;
//!
//! let record = Record::new(10, "Alice", "CS", 3.8);
//! assert_eq!(record.id(), 10);
//! assert_eq!(record.to_string(), "ID: 10 | Name: Alice | Dept: CS | GPA: 3.80");
//! ```

use std::fmt;

/// The key type of a [`Record`].
pub type RecordId = i32;

/// A student record.
///
/// Fields are read-only once constructed, so a record held by the map can
/// never have its key changed from outside.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    id: RecordId,
    name: String,
    department: String,
    gpa: f64,
}

impl Record {
    /// Creates a new record.
    ///
    /// The GPA is stored as given; no range check is performed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordmap::Record;
    ///
    /// let record = Record::new(5, "Bob", "EE", 3.2);
    /// assert_eq!(record.name(), "Bob");
    /// assert_eq!(record.department(), "EE");
    /// ```
    #[must_use]
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        department: impl Into<String>,
        gpa: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            gpa,
        }
    }

    /// Returns the id, the key this record is ordered by.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the student's name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the student's department.
    #[inline]
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the grade-point average.
    #[inline]
    #[must_use]
    pub const fn gpa(&self) -> f64 {
        self.gpa
    }
}

impl fmt::Display for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "ID: {} | Name: {} | Dept: {} | GPA: {:.2}",
            self.id, self.name, self.department, self.gpa
        )
    }
}
