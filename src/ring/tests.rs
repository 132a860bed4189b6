use super::*;

fn ring_of(items: &[&str]) -> RingList<String> {
    let mut ring = RingList::new();
    for item in items {
        ring.append(item.to_string());
    }
    ring
}

fn values(ring: &RingList<String>) -> Vec<String> {
    ring.iter().map(|(_, v)| v.clone()).collect()
}

#[test]
fn append_keeps_insertion_order() {
    let ring = ring_of(&["a", "b", "c"]);
    assert_eq!(values(&ring), vec!["a", "b", "c"]);
    assert_eq!(ring.len(), 3);
}

#[test]
fn prepend_becomes_new_head() {
    let mut ring = ring_of(&["b", "c"]);
    ring.prepend("a".to_string());
    assert_eq!(values(&ring), vec!["a", "b", "c"]);
}

#[test]
fn singleton_links_to_itself() {
    let mut ring = RingList::new();
    let id = ring.append(1);
    assert_eq!(ring.next_of(id), Some(id));
    assert_eq!(ring.prev_of(id), Some(id));
    assert_eq!(ring.head(), Some(id));
    assert_eq!(ring.tail(), Some(id));
}

#[test]
fn following_next_len_times_returns_to_head() {
    let ring = ring_of(&["a", "b", "c", "d"]);
    let head = ring.head().unwrap();
    let mut cur = head;
    for _ in 0..ring.len() {
        cur = ring.next_of(cur).unwrap();
    }
    assert_eq!(cur, head);
}

#[test]
fn prev_is_the_exact_inverse_of_next() {
    let ring = ring_of(&["a", "b", "c"]);
    let mut cur = ring.head().unwrap();
    for _ in 0..ring.len() {
        let next = ring.next_of(cur).unwrap();
        assert_eq!(ring.prev_of(next), Some(cur));
        cur = next;
    }
}

#[test]
fn tail_is_head_prev() {
    let ring = ring_of(&["a", "b", "c"]);
    let head = ring.head().unwrap();
    assert_eq!(ring.tail(), ring.prev_of(head));
    assert_eq!(ring.get(ring.tail().unwrap()), Some(&"c".to_string()));
}

#[test]
fn remove_first_match_in_ring_order() {
    let mut ring = ring_of(&["a", "b", "a", "c"]);
    let removed = ring.remove("a").unwrap();
    assert_eq!(removed, "a");
    // The second "a" survives.
    assert_eq!(values(&ring), vec!["b", "a", "c"]);
}

#[test]
fn remove_head_moves_head_to_next() {
    let mut ring = ring_of(&["a", "b", "c"]);
    ring.remove("a").unwrap();
    assert_eq!(values(&ring), vec!["b", "c"]);
    assert_eq!(ring.get(ring.head().unwrap()), Some(&"b".to_string()));
}

#[test]
fn remove_only_node_empties_the_ring() {
    let mut ring = ring_of(&["a"]);
    ring.remove("a").unwrap();
    assert!(ring.is_empty());
    assert_eq!(ring.len(), 0);
    assert_eq!(ring.head(), None);
}

#[test]
fn remove_relinks_neighbors() {
    let mut ring = ring_of(&["a", "b", "c"]);
    ring.remove("b").unwrap();
    let head = ring.head().unwrap();
    let tail = ring.tail().unwrap();
    assert_eq!(ring.next_of(head), Some(tail));
    assert_eq!(ring.prev_of(head), Some(tail));
}

#[test]
fn remove_on_empty_signals_empty() {
    let mut ring: RingList<String> = RingList::new();
    assert_eq!(ring.remove("a"), Err(RingError::Empty));
}

#[test]
fn remove_missing_signals_not_found_after_one_revolution() {
    let mut ring = ring_of(&["a", "b", "c"]);
    assert_eq!(ring.remove("zzz"), Err(RingError::NotFound));
    assert_eq!(ring.len(), 3);
}

#[test]
fn insert_after_places_between_anchor_and_its_next() {
    let mut ring = ring_of(&["a", "c"]);
    ring.insert_after("a", "b".to_string()).unwrap();
    assert_eq!(values(&ring), vec!["a", "b", "c"]);
}

#[test]
fn insert_after_tail_lands_before_head() {
    let mut ring = ring_of(&["a", "b"]);
    ring.insert_after("b", "c".to_string()).unwrap();
    assert_eq!(values(&ring), vec!["a", "b", "c"]);
    assert_eq!(ring.get(ring.tail().unwrap()), Some(&"c".to_string()));
}

#[test]
fn insert_after_errors() {
    let mut empty: RingList<String> = RingList::new();
    assert_eq!(
        empty.insert_after("a", "b".to_string()),
        Err(RingError::Empty)
    );

    let mut ring = ring_of(&["a"]);
    assert_eq!(
        ring.insert_after("x", "b".to_string()),
        Err(RingError::NotFound)
    );
}

#[test]
fn at_supports_negative_indices() {
    let ring = ring_of(&["a", "b", "c"]);
    assert_eq!(ring.at(0).unwrap(), "a");
    assert_eq!(ring.at(2).unwrap(), "c");
    assert_eq!(ring.at(-1).unwrap(), "c");
    assert_eq!(ring.at(-3).unwrap(), "a");
}

#[test]
fn at_out_of_range() {
    let ring = ring_of(&["a", "b"]);
    assert_eq!(ring.at(2), Err(RingError::OutOfRange { index: 2, len: 2 }));
    assert_eq!(
        ring.at(-3),
        Err(RingError::OutOfRange { index: -3, len: 2 })
    );

    let empty: RingList<String> = RingList::new();
    assert_eq!(
        empty.at(0),
        Err(RingError::OutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn contains_checks_by_equality() {
    let ring = ring_of(&["a", "b"]);
    assert!(ring.contains("a"));
    assert!(!ring.contains("z"));
    let empty: RingList<String> = RingList::new();
    assert!(!empty.contains("a"));
}

#[test]
fn iter_visits_each_node_exactly_once_and_restarts() {
    let ring = ring_of(&["a", "b", "c"]);
    assert_eq!(ring.iter().count(), 3);
    // A fresh traversal starts over at head.
    assert_eq!(values(&ring), vec!["a", "b", "c"]);
    assert_eq!(values(&ring), vec!["a", "b", "c"]);
}

#[test]
fn iter_rev_walks_tail_to_head() {
    let ring = ring_of(&["a", "b", "c"]);
    let rev: Vec<&String> = ring.iter_rev().collect();
    assert_eq!(rev, vec!["c", "b", "a"]);
    // Restartable as well.
    assert_eq!(ring.iter_rev().count(), 3);
}

#[test]
fn iterators_on_empty_ring_are_empty() {
    let ring: RingList<String> = RingList::new();
    assert_eq!(ring.iter().count(), 0);
    assert_eq!(ring.iter_rev().count(), 0);
}

#[test]
fn find_terminates_after_one_revolution_on_absent_value() {
    let ring = ring_of(&["a", "b", "c"]);
    // Would loop forever if the head-revisit check were missing.
    assert_eq!(ring.find("sentinel"), None);
}

#[test]
fn swap_values_leaves_topology_untouched() {
    let mut ring = ring_of(&["a", "b", "c"]);
    let a = ring.find("a").unwrap();
    let b = ring.find("b").unwrap();
    ring.swap_values(a, b);

    assert_eq!(values(&ring), vec!["b", "a", "c"]);
    // Same node identities, same links.
    assert_eq!(ring.head(), Some(a));
    assert_eq!(ring.next_of(a), Some(b));
    assert_eq!(ring.prev_of(b), Some(a));
}

#[test]
fn swap_values_with_self_is_a_noop() {
    let mut ring = ring_of(&["a", "b"]);
    let a = ring.find("a").unwrap();
    ring.swap_values(a, a);
    assert_eq!(values(&ring), vec!["a", "b"]);
}

#[test]
fn remove_node_returns_none_for_stale_id() {
    let mut ring = ring_of(&["a", "b"]);
    let a = ring.find("a").unwrap();
    assert_eq!(ring.remove_node(a), Some("a".to_string()));
    assert_eq!(ring.remove_node(a), None);
    assert_eq!(values(&ring), vec!["b"]);
}

#[test]
fn freed_slots_are_reused_without_corrupting_the_ring() {
    let mut ring = ring_of(&["a", "b", "c"]);
    ring.remove("b").unwrap();
    ring.append("d".to_string());
    ring.append("e".to_string());

    assert_eq!(values(&ring), vec!["a", "c", "d", "e"]);
    let head = ring.head().unwrap();
    let mut cur = head;
    for _ in 0..ring.len() {
        cur = ring.next_of(cur).unwrap();
    }
    assert_eq!(cur, head);
}

#[test]
fn len_is_recomputed_under_mutation() {
    let mut ring = RingList::new();
    assert_eq!(ring.len(), 0);
    ring.append("a".to_string());
    ring.prepend("b".to_string());
    assert_eq!(ring.len(), 2);
    ring.remove("a").unwrap();
    assert_eq!(ring.len(), 1);
    ring.remove("b").unwrap();
    assert_eq!(ring.len(), 0);
}
