//! Terminal operations: reducers, element access, quantifiers.


use fluentq::prelude::*;
use test_data_gen::employees;

fn empty() -> Enumerable<i32> {
    Enumerable::empty()
}

#[test]
fn test_count() {
    let seq = Enumerable::new(vec![1, 2, 3, 4]);
    assert_eq!(seq.count(), 4);
    assert_eq!(seq.count_where(|x| x % 2 == 0), 2);
    assert_eq!(empty().count(), 0);
}

#[test]
fn test_sum() {
    let staff = Enumerable::new(employees());
    assert_eq!(staff.sum(|e| e.salary), 580.0);
    assert_eq!(staff.sum(|e| e.age), 223);
    assert_eq!(empty().sum(|x| *x), 0);
}

#[test]
fn test_min_max() {
    let staff = Enumerable::new(employees());
    assert_eq!(staff.min(|e| e.age), Ok(29));
    assert_eq!(staff.max(|e| e.salary), Ok(120.0));
    assert_eq!(staff.min(|e| e.name.clone()), Ok("ada".to_string()));
    assert_eq!(empty().min(|x| *x), Err(Error::EmptySequence));
    assert_eq!(empty().max(|x| *x), Err(Error::EmptySequence));
}

#[test]
fn test_min_max_place_nan_last() {
    let seq = Enumerable::new(vec![f64::NAN, 1.0, 0.5]);
    assert_eq!(seq.min(|x| *x), Ok(0.5));
    assert!(seq.max(|x| *x).unwrap().is_nan());

    let ordered = seq.order_by(|x| *x).to_list();
    assert_eq!(&ordered[..2], &[0.5, 1.0]);
    assert!(ordered[2].is_nan());

    assert_eq!(Enumerable::new(vec![2.0, 1.0]).max(|x| *x), Ok(2.0));
    assert!(Enumerable::new(vec![f64::NAN]).min(|x| *x).unwrap().is_nan());
}

#[test]
fn test_avg() {
    let seq = Enumerable::new(vec![1, 2, 3, 4]);
    assert_eq!(seq.avg(|x| *x), Ok(2.5));
    assert_eq!(empty().avg(|x| *x), Err(Error::EmptySequence));
}

#[test]
fn test_median_odd_is_native_middle() {
    let seq = Enumerable::new(vec![5, 3, 1, 4, 1]);
    assert_eq!(seq.median(|x| *x), Ok(Median::Middle(3)));
}

#[test]
fn test_median_even_is_float_mean() {
    let seq = Enumerable::new(vec![5, 3, 1, 4]);
    let median = seq.median(|x| *x).unwrap();
    assert_eq!(median, Median::Mean(3.5));
    assert_eq!(median.to_f64(), Ok(3.5));
    assert_eq!(empty().median(|x| *x), Err(Error::EmptySequence));
}

#[test]
fn test_aggregate() {
    let seq = Enumerable::new(vec![1, 2, 3, 4]);
    assert_eq!(seq.aggregate(|acc, x| acc * x), Ok(24));
    assert_eq!(empty().aggregate(|acc, x| acc + x), Err(Error::EmptySequence));

    let joined = seq.aggregate_seeded(String::new(), |mut acc, x| {
        acc.push_str(&x.to_string());
        acc
    });
    assert_eq!(joined, "1234");
    assert_eq!(empty().aggregate_seeded(10, |acc, x| acc + x), 10);
}

#[test]
fn test_first_and_last() {
    let seq = Enumerable::new(vec![1, 2, 3, 4]);
    assert_eq!(seq.first(), Ok(1));
    assert_eq!(seq.last(), Ok(4));
    assert_eq!(seq.first_where(|x| *x > 1), Ok(2));
    assert_eq!(seq.last_where(|x| *x < 4), Ok(3));
    assert_eq!(seq.first_where(|x| *x > 9), Err(Error::EmptySequence));

    assert_eq!(empty().first(), Err(Error::EmptySequence));
    assert_eq!(empty().last(), Err(Error::EmptySequence));
    assert_eq!(empty().first_or_default(), None);
    assert_eq!(empty().last_or_default(), None);
    assert_eq!(seq.first_or_default_where(|x| *x > 2), Some(3));
    assert_eq!(seq.last_or_default_where(|x| *x > 9), None);
}

#[test]
fn test_single() {
    let seq = Enumerable::new(vec![1, 2, 2, 3]);
    assert_eq!(seq.single_where(|x| *x == 2), Err(Error::MultipleMatches));
    assert_eq!(seq.single_where(|x| *x == 9), Err(Error::NoMatch));
    assert_eq!(seq.single_where(|x| *x == 3), Ok(3));

    assert_eq!(Enumerable::new(vec![7]).single(), Ok(7));
    assert_eq!(seq.single(), Err(Error::MultipleMatches));
    assert_eq!(empty().single(), Err(Error::NoMatch));
}

#[test]
fn test_single_or_default() {
    let seq = Enumerable::new(vec![1, 2, 2, 3]);
    assert_eq!(seq.single_or_default_where(|x| *x == 9), Ok(None));
    assert_eq!(seq.single_or_default_where(|x| *x == 1), Ok(Some(1)));
    assert_eq!(
        seq.single_or_default_where(|x| *x == 2),
        Err(Error::MultipleMatches)
    );
    assert_eq!(empty().single_or_default(), Ok(None));
}

#[test]
fn test_element_at() {
    let seq = Enumerable::new(vec!['x', 'y']);
    assert_eq!(seq.element_at(1), Ok('y'));
    assert_eq!(
        seq.element_at(2),
        Err(Error::IndexOutOfRange {
            index: 2,
            length: 2
        })
    );
    assert_eq!(seq.element_at_or_default(2), None);
    assert_eq!(seq.element_at_or_default(0), Some('x'));
}

#[test]
fn test_quantifiers() {
    let seq = Enumerable::new(vec![2, 4, 6]);
    assert!(seq.any());
    assert!(!empty().any());
    assert!(seq.any_where(|x| *x > 5));
    assert!(seq.all(|x| x % 2 == 0));
    assert!(!seq.all(|x| *x > 2));
    assert!(empty().all(|_| false));
}

#[test]
fn test_contains() {
    let seq = Enumerable::new(vec![(1, "a"), (2, "b")]);
    assert!(seq.contains(&(2, "b")));
    assert!(!seq.contains(&(2, "z")));
    assert!(seq.contains_by(&(2, "z"), |p| p.0));
    assert!(!seq.contains_by(&(3, "b"), |p| p.0));
}

#[test]
fn test_terminals_on_grouping() {
    let groups = Enumerable::new(employees()).group_by(|e| e.dept.clone(), &["dept"]);
    let eng = groups.first().unwrap();
    assert_eq!(eng.max(|e| e.age), Ok(36));
    assert_eq!(eng.avg(|e| e.salary), Ok(310.0 / 3.0));
}
