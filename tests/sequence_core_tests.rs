//! Sequence core: construction, replay, indexed access, drain limits.

use std::cell::Cell;
use std::rc::Rc;

use fluentq::prelude::*;
use serde_json::json;

#[test]
fn test_repeated_traversals_agree() {
    let seq = Enumerable::new(vec![3, 1, 2]).filter(|x| *x > 1);
    assert_eq!(seq.to_list(), vec![3, 2]);
    assert_eq!(seq.to_list(), vec![3, 2]);
    assert_eq!(seq.iter().count(), 2);
    assert_eq!(seq.length(), 2);
}

#[test]
fn test_one_shot_source_is_drained_exactly_once() {
    let pulls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulls);
    let seq: Enumerable<i32> = (0..4)
        .map(move |x| {
            counter.set(counter.get() + 1);
            x * 10
        })
        .collect();
    assert_eq!(pulls.get(), 4);

    assert_eq!(seq.to_list(), vec![0, 10, 20, 30]);
    assert_eq!(seq.reverse().to_list(), vec![30, 20, 10, 0]);
    assert_eq!(pulls.get(), 4);
}

#[test]
fn test_interleaved_traversals_of_a_derived_node() {
    let seq = Enumerable::new(vec![1, 2, 3, 4, 5, 6]).filter(|x| x % 2 == 0);
    let mut a = seq.iter();
    let mut b = seq.iter();
    assert_eq!(a.next(), Some(2));
    assert_eq!(b.next(), Some(2));
    assert_eq!(a.next(), Some(4));
    assert_eq!(a.next(), Some(6));
    assert_eq!(b.next(), Some(4));
    assert_eq!(a.next(), None);
}

#[test]
fn test_at_on_base_and_derived_nodes() {
    let base = Enumerable::new(vec!['a', 'b', 'c']);
    assert_eq!(base.at(0), Ok('a'));
    assert_eq!(base.at(2), Ok('c'));
    assert_eq!(
        base.at(3),
        Err(Error::IndexOutOfRange {
            index: 3,
            length: 3
        })
    );

    let evens = Enumerable::new(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0);
    assert_eq!(evens.at(1), Ok(4));
    assert_eq!(evens.at(1), Ok(4));
    assert_eq!(
        evens.at(2),
        Err(Error::IndexOutOfRange {
            index: 2,
            length: 2
        })
    );
}

#[test]
fn test_at_does_not_disturb_traversal() {
    let seq = Enumerable::new(vec![10, 20, 30]).select(|x| x + 1);
    let mut it = seq.iter();
    assert_eq!(it.next(), Some(11));
    assert_eq!(seq.at(2), Ok(31));
    assert_eq!(it.next(), Some(21));
}

#[test]
fn test_empty_and_default() {
    let empty: Enumerable<u8> = Enumerable::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.length(), 0);
    assert_eq!(Enumerable::<u8>::default().to_list(), Vec::<u8>::new());
}

#[test]
fn test_range_and_repeat() {
    assert_eq!(Enumerable::range(5, 3).to_list(), vec![5, 6, 7]);
    assert_eq!(Enumerable::range(-2, 0).length(), 0);
    assert_eq!(Enumerable::range(100, 10).at(9), Ok(109));

    assert_eq!(Enumerable::repeat("x", 3).to_list(), vec!["x", "x", "x"]);
    assert!(Enumerable::repeat("x", 0).is_empty());
}

#[test]
fn test_range_stops_at_i64_max() {
    assert_eq!(Enumerable::range(i64::MAX, 2).to_list(), vec![i64::MAX]);

    let tail = Enumerable::range(i64::MAX - 1, 5);
    assert_eq!(tail.length(), 2);
    assert_eq!(tail.at(1), Ok(i64::MAX));
    assert!(tail.at(2).is_err());
    assert_eq!(tail.reverse().first(), Ok(i64::MAX));

    assert_eq!(
        Enumerable::range(i64::MIN, 3).to_list(),
        vec![i64::MIN, i64::MIN + 1, i64::MIN + 2]
    );
}

#[test]
fn test_owned_and_borrowed_iteration() {
    let seq = Enumerable::from(vec![1, 2, 3]);
    let mut total = 0;
    for x in &seq {
        total += x;
    }
    assert_eq!(total, 6);
    let collected: Vec<i32> = seq.into_iter().collect();
    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn test_drain_with_config() {
    let cfg = EngineConfig::default().with_materialize_cap(100);
    let seq = Enumerable::from_iter_with((0..100i64).map(|x| x % 50), &cfg).unwrap();
    assert_eq!(seq.length(), 100);

    let err = Enumerable::from_iter_with(0u64.., &cfg).unwrap_err();
    assert!(matches!(err, Error::InvalidSource(_)));
}

#[test]
fn test_drain_capacity_hint_does_not_change_contents() {
    let cfg = EngineConfig {
        materialize_cap: None,
        drain_capacity_hint: Some(2),
    };
    let seq = Enumerable::from_iter_with((0..10).filter(|x| x % 3 == 0), &cfg).unwrap();
    assert_eq!(seq.to_list(), vec![0, 3, 6, 9]);
}

#[test]
fn test_config_from_env() {
    std::env::set_var("FLUENTQ_MATERIALIZE_CAP", "12");
    std::env::set_var("FLUENTQ_DRAIN_CAPACITY_HINT", "not-a-number");
    let cfg = EngineConfig::from_env();
    std::env::remove_var("FLUENTQ_MATERIALIZE_CAP");
    std::env::remove_var("FLUENTQ_DRAIN_CAPACITY_HINT");

    assert_eq!(cfg.materialize_cap, Some(12));
    assert_eq!(cfg.drain_capacity_hint, None);
}

#[test]
fn test_json_sources() {
    let seq = Enumerable::from_json(json!([{"id": 1}, {"id": 2}, {"id": 3}])).unwrap();
    let ids: Vec<i64> = seq.select(|v| v["id"].as_i64().unwrap_or(-1)).to_list();
    assert_eq!(ids, vec![1, 2, 3]);

    assert!(Enumerable::from_json(json!(null)).unwrap().is_empty());
    assert!(matches!(
        Enumerable::from_json(json!({"id": 1})),
        Err(Error::InvalidSource(_))
    ));
    assert!(matches!(
        Enumerable::from_json(json!(42)),
        Err(Error::InvalidSource(_))
    ));
}

#[test]
fn test_debug_output() {
    let seq = Enumerable::new(vec![1, 2, 3]).take(2);
    assert_eq!(format!("{seq:?}"), "[1, 2]");
    assert_eq!(seq.name(), "take");
}
