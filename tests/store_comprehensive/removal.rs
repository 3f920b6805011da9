//! Removal Pass Tests
//!
//! - Cursor traversal order and shifting
//! - Protocol misuse (IllegalState / NoMoreElements)
//! - Remover failure keeps completed removals

use crate::*;

struct RemoveEven;

impl NotificationRemover for RemoveEven {
    fn remove(&mut self, cursor: &mut RemovalCursor<'_>) -> StoreResult<()> {
        while let Some(n) = cursor.advance()? {
            if n.id().as_u64() % 2 == 0 {
                cursor.remove_current()?;
            }
        }
        Ok(())
    }
}

#[test]
fn test_remove_even_identifiers() {
    let store = seeded_store(5);
    let report = store.remove_where(&mut RemoveEven).unwrap();
    assert_eq!(report, RemovalReport { visited: 5, removed: 2 });
    assert_eq!(live_ids(&store), vec![1, 3, 5]);
}

#[test]
fn test_remove_consecutive_elements() {
    let store = seeded_store(6);
    store.retain(|n| !(2..=5).contains(&n.id().as_u64())).unwrap();
    assert_eq!(live_ids(&store), vec![1, 6]);
}

#[test]
fn test_remove_everything() {
    let store = seeded_store(4);
    let report = store.retain(|_| false).unwrap();
    assert_eq!(report.removed, 4);
    assert!(store.is_empty().unwrap());
    assert_eq!(store.last_id().unwrap(), None);
}

#[test]
fn test_visit_order_is_ascending_and_complete() {
    let store = seeded_store(7);
    let mut visited = Vec::new();
    store
        .remove_with(|cursor| {
            while let Some(n) = cursor.advance()? {
                let id = n.id().as_u64();
                visited.push(id);
                if id % 3 != 0 {
                    cursor.remove_current()?;
                }
            }
            Ok(())
        })
        .unwrap();
    assert_eq!(visited, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(live_ids(&store), vec![3, 6]);
}

#[test]
fn test_remove_before_advance_fails() {
    let store = seeded_store(2);
    let result = store.remove_with(|cursor| {
        cursor.remove_current()?;
        Ok(())
    });
    assert!(matches!(result, Err(StoreError::IllegalState(_))));
    assert_eq!(live_ids(&store), vec![1, 2]);
}

#[test]
fn test_double_remove_fails() {
    let store = seeded_store(3);
    let result = store.remove_with(|cursor| {
        cursor.advance()?;
        cursor.remove_current()?;
        cursor.remove_current()?;
        Ok(())
    });
    assert!(matches!(result, Err(StoreError::IllegalState(_))));
    // The first removal completed before the misuse and is kept.
    assert_eq!(live_ids(&store), vec![2, 3]);
}

#[test]
fn test_advance_past_end_twice_fails() {
    let store = seeded_store(2);
    let result = store.remove_with(|cursor| {
        while cursor.advance()?.is_some() {}
        cursor.advance()?;
        Ok(())
    });
    assert_eq!(result, Err(StoreError::NoMoreElements));
    assert_eq!(live_ids(&store), vec![1, 2]);
}

#[test]
fn test_end_of_sequence_is_a_normal_signal() {
    let store = seeded_store(2);
    let report = store
        .remove_with(|cursor| {
            assert!(cursor.advance()?.is_some());
            assert!(cursor.advance()?.is_some());
            assert!(cursor.advance()?.is_none());
            assert!(!cursor.has_next());
            Ok(())
        })
        .unwrap();
    assert_eq!(report, RemovalReport { visited: 2, removed: 0 });
}

#[test]
fn test_remover_error_keeps_earlier_removals_and_releases_lock() {
    let store = seeded_store(5);
    let result = store.remove_with(|cursor| {
        while let Some(n) = cursor.advance()? {
            if n.id() == nid(4) {
                return Err(StoreError::InvalidArgument("policy lookup failed".into()));
            }
            cursor.remove_current()?;
        }
        Ok(())
    });
    assert!(result.is_err());
    assert_eq!(live_ids(&store), vec![4, 5]);

    // Store is fully usable afterwards
    let n = store.create_and_append("after.wav", None).unwrap();
    assert_eq!(n.id(), nid(6));
    assert_eq!(
        store.metrics().unwrap(),
        StoreMetrics { live: 3, created: 6, removed: 3, next_id: Some(7) }
    );
}

#[test]
fn test_removal_on_empty_store() {
    let store = quick_setup();
    let report = store.remove_where(&mut RemoveEven).unwrap();
    assert_eq!(report, RemovalReport::default());
}

#[test]
fn test_cursor_len_reflects_removals() {
    let store = seeded_store(3);
    store
        .remove_with(|cursor| {
            assert_eq!(cursor.len(), 3);
            cursor.advance()?;
            cursor.remove_current()?;
            assert_eq!(cursor.len(), 2);
            assert_eq!(cursor.removed(), 1);
            assert_eq!(cursor.visited(), 1);
            Ok(())
        })
        .unwrap();
}
