mod common;

use std::cell::RefCell;

use common::{deque, strings, to_vec};
use xfold::{compose, dedupe, drop, filter, map, partition, take, transduce_array, transduce_list};

#[test]
fn test_filter_map_take_pipeline() {
    let pipeline = compose(
        filter(|x: &i32| *x >= 3),
        compose(map(|x: i32| x.to_string()), take(2)),
    );
    let out = transduce_list(&pipeline, deque([1, 2, 3, 4, 5]));
    assert_eq!(out, strings(["3", "4"]));
}

#[test]
fn test_left_stage_processes_before_right() {
    let events = RefCell::new(Vec::new());
    let left = map(|x: i32| {
        events.borrow_mut().push(format!("left:{x}"));
        x * 10
    });
    let right = map(|x: i32| {
        events.borrow_mut().push(format!("right:{x}"));
        x
    });
    let out = transduce_array(&compose(left, right), vec![1, 2, 3]);

    assert_eq!(out, vec![10, 20, 30]);
    assert_eq!(
        *events.borrow(),
        vec!["left:1", "right:10", "left:2", "right:20", "left:3", "right:30"]
    );
}

#[test]
fn test_filter_drops_skip_right_stage() {
    let events = RefCell::new(Vec::new());
    let right = map(|x: i32| {
        events.borrow_mut().push(x);
        x
    });
    let out = transduce_array(&compose(filter(common::is_even), right), vec![1, 2, 3, 4]);

    assert_eq!(out, vec![2, 4]);
    assert_eq!(*events.borrow(), vec![2, 4]);
}

#[test]
fn test_partial_partition_flushes_through_downstream_stage() {
    // The left stage's completion flush must pass through the right
    // stage's step before the right stage completes.
    let pipeline = compose(partition(2), map(|batch: Vec<i32>| batch.iter().sum::<i32>()));
    let out = transduce_list(&pipeline, deque([1, 2, 3]));
    assert_eq!(out, deque([3, 3]));
}

#[test]
fn test_both_stages_flush_on_complete() {
    let pipeline = compose(partition(2), partition(2));
    let out = transduce_list(&pipeline, deque([1, 2, 3]));
    assert_eq!(out, deque([vec![vec![1, 2], vec![3]]]));
}

#[test]
fn test_take_composed_after_expansion() {
    // take counts the expanded outputs, not the source elements.
    let pipeline = compose(xfold::concat_map(|x: i32| vec![x, x]), take(3));
    let out = transduce_list(&pipeline, deque([1, 2, 3]));
    assert_eq!(out, deque([1, 1, 2]));
}

#[test]
fn test_drop_then_dedupe() {
    let pipeline = compose(drop(1), dedupe());
    let out = transduce_list(&pipeline, deque([9, 5, 5, 6, 6, 5]));
    assert_eq!(out, deque([5, 6, 5]));
}

#[test]
fn test_associativity_same_output_for_both_nestings() {
    let xs = vec![1, 2, 3, 4, 5, 6, 7, 8];

    let left_nested = compose(
        compose(map(|x: i32| x + 1), filter(common::is_even)),
        partition(2),
    );
    let right_nested = compose(
        map(|x: i32| x + 1),
        compose(filter(common::is_even), partition(2)),
    );

    assert_eq!(
        transduce_array(&left_nested, xs.clone()),
        transduce_array(&right_nested, xs)
    );
}

#[test]
fn test_associativity_with_stateful_tail() {
    let xs = deque([4, 4, 1, 1, 2, 9, 9, 9, 3]);

    let left_nested = compose(compose(dedupe(), drop(1)), take(3));
    let right_nested = compose(dedupe(), compose(drop(1), take(3)));

    let a = to_vec(transduce_list(&left_nested, xs.clone()));
    let b = to_vec(transduce_list(&right_nested, xs));
    assert_eq!(a, vec![1, 2, 9]);
    assert_eq!(a, b);
}
