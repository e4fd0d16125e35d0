//! Integration tests for RecordMap.
//!
//! Exercises the public API the way a host application would: building a
//! roster, querying it, and removing entries.

use recordmap::{
    AlreadyExistsError, Color, InvariantViolation, NotFoundError, Record, RecordId,
    RecordMap, RecordMapError, StructureEntry,
};
use rstest::{fixture, rstest};

#[fixture]
fn roster() -> RecordMap {
    let mut map = RecordMap::new();
    map.insert(10, "Alice", "CS", 3.8).unwrap();
    map.insert(5, "Bob", "EE", 3.2).unwrap();
    map.insert(20, "Carl", "ME", 2.9).unwrap();
    map.insert(15, "Dana", "CS", 3.95).unwrap();
    map
}

fn ids<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<RecordId> {
    records.map(Record::id).collect()
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[rstest]
fn test_roster_in_order(roster: RecordMap) {
    assert_eq!(ids(roster.in_order()), vec![5, 10, 15, 20]);
    assert_eq!(roster.len(), 4);
}

#[rstest]
fn test_roster_range_query(roster: RecordMap) {
    assert_eq!(ids(roster.range_query(6, 16)), vec![10, 15]);
}

#[rstest]
fn test_roster_delete_then_search(mut roster: RecordMap) {
    let removed = roster.delete(10).unwrap();
    assert_eq!(removed.name(), "Alice");
    assert!(roster.search(10).is_none());
    assert_eq!(ids(roster.in_order()), vec![5, 15, 20]);
    assert!(roster.validate().is_ok());
    assert_eq!(roster.dump_structure()[0].color, Color::Black);
}

#[rstest]
fn test_roster_structure(roster: RecordMap) {
    assert_eq!(
        roster.dump_structure(),
        vec![
            StructureEntry { id: 10, color: Color::Black, depth: 0 },
            StructureEntry { id: 5, color: Color::Black, depth: 1 },
            StructureEntry { id: 20, color: Color::Black, depth: 1 },
            StructureEntry { id: 15, color: Color::Red, depth: 2 },
        ]
    );
    assert_eq!(roster.validate(), Ok(2));
}

#[rstest]
fn test_roster_pre_order(roster: RecordMap) {
    assert_eq!(ids(roster.pre_order()), vec![10, 5, 20, 15]);
}

// =============================================================================
// Error Tests
// =============================================================================

#[rstest]
fn test_duplicate_insert_keeps_original(mut roster: RecordMap) {
    assert_eq!(
        roster.insert(15, "Other", "Math", 1.0),
        Err(AlreadyExistsError { id: 15 })
    );
    let dana = roster.search(15).unwrap();
    assert_eq!(dana.name(), "Dana");
    assert_eq!(dana.department(), "CS");
    assert!((dana.gpa() - 3.95).abs() < f64::EPSILON);
    assert_eq!(roster.len(), 4);
}

#[rstest]
fn test_delete_absent_is_idempotent(mut roster: RecordMap) {
    let before = roster.dump_structure();
    for _ in 0..3 {
        assert_eq!(roster.delete(99), Err(NotFoundError { id: 99 }));
    }
    assert_eq!(roster.dump_structure(), before);
}

#[rstest]
fn test_errors_convert_into_record_map_error(mut roster: RecordMap) {
    fn move_record(map: &mut RecordMap, from: RecordId, to: RecordId) -> Result<(), RecordMapError> {
        let record = map.delete(from)?;
        map.insert(to, record.name(), record.department(), record.gpa())?;
        Ok(())
    }

    assert_eq!(move_record(&mut roster, 5, 6), Ok(()));
    assert!(roster.contains(6));
    assert_eq!(
        move_record(&mut roster, 6, 20),
        Err(RecordMapError::AlreadyExists(AlreadyExistsError { id: 20 }))
    );
    assert_eq!(
        move_record(&mut roster, 7, 8),
        Err(RecordMapError::NotFound(NotFoundError { id: 7 }))
    );
}

#[rstest]
fn test_error_messages() {
    assert_eq!(
        RecordMapError::from(AlreadyExistsError { id: 1 }).to_string(),
        "record with id 1 already exists"
    );
    assert_eq!(
        RecordMapError::from(NotFoundError { id: 2 }).to_string(),
        "record with id 2 not found"
    );
    assert_eq!(
        InvariantViolation::RedRoot { id: 3 }.to_string(),
        "root 3 is red"
    );
}

// =============================================================================
// Edge Case Tests
// =============================================================================

#[rstest]
fn test_empty_map_queries() {
    let map = RecordMap::new();
    assert!(map.search(1).is_none());
    assert_eq!(map.in_order().count(), 0);
    assert_eq!(map.pre_order().count(), 0);
    assert_eq!(map.range_query(i32::MIN, i32::MAX).count(), 0);
    assert!(map.dump_structure().is_empty());
    assert_eq!(map.validate(), Ok(0));
    assert_eq!(map.height(), 0);
}

#[rstest]
#[case::inverted(16, 6, vec![])]
#[case::single_hit(15, 15, vec![15])]
#[case::between_keys(11, 14, vec![])]
#[case::whole_span(i32::MIN, i32::MAX, vec![5, 10, 15, 20])]
fn test_range_query_bounds(
    roster: RecordMap,
    #[case] min_id: RecordId,
    #[case] max_id: RecordId,
    #[case] expected: Vec<RecordId>,
) {
    assert_eq!(ids(roster.range_query(min_id, max_id)), expected);
}

#[rstest]
fn test_clear_then_reuse(mut roster: RecordMap) {
    roster.clear();
    assert!(roster.is_empty());
    assert!(roster.first().is_none());
    roster.insert(1, "Eve", "Bio", 3.0).unwrap();
    assert_eq!(ids(roster.in_order()), vec![1]);
    assert_eq!(roster.validate(), Ok(1));
}

#[rstest]
fn test_descending_inserts_then_alternate_deletes() {
    let mut map = RecordMap::new();
    for id in (0..500).rev() {
        map.insert(id, format!("student {id}"), "CS", 3.0).unwrap();
    }
    for id in (0..500).filter(|id| id % 2 == 1) {
        map.delete(id).unwrap();
    }
    assert_eq!(map.len(), 250);
    assert!(map.validate().is_ok());
    assert_eq!(ids(map.in_order()), (0..500).step_by(2).collect::<Vec<_>>());
    assert_eq!(map.first().map(Record::id), Some(0));
    assert_eq!(map.last().map(Record::id), Some(498));
}

#[rstest]
fn test_display_rows(roster: RecordMap) {
    let rendered = roster.to_string();
    let first_line = rendered.lines().next().unwrap();
    assert_eq!(first_line, "ID: 5 | Name: Bob | Dept: EE | GPA: 3.20");
    assert_eq!(rendered.lines().count(), 4);
}

#[rstest]
fn test_record_map_can_move_between_threads(roster: RecordMap) {
    let handle = std::thread::spawn(move || roster.len());
    assert_eq!(handle.join().unwrap(), 4);
}
