mod common;

use common::{deque, strings};
use xfold::{concat_map, dedupe, drop, filter, map, partition, take, transduce_list};

#[test]
fn test_map_to_string() {
    let out = transduce_list(&map(|x: i32| x.to_string()), deque([1, 2, 3, 4]));
    assert_eq!(out, strings(["1", "2", "3", "4"]));
}

#[test]
fn test_map_identity_preserves_order() {
    let out = transduce_list(&map(|x: i32| x), deque([3, 1, 2]));
    assert_eq!(out, deque([3, 1, 2]));
}

#[test]
fn test_map_empty_source() {
    let out = transduce_list(&map(|x: i32| x * 2), deque([]));
    assert_eq!(out, deque([]));
}

#[test]
fn test_filter_keeps_matching() {
    let out = transduce_list(&filter(|x: &i32| *x >= 3), deque([1, 5, 2, 3, 4]));
    assert_eq!(out, deque([5, 3, 4]));
}

#[test]
fn test_filter_drops_everything() {
    let out = transduce_list(&filter(|_: &i32| false), deque([1, 2, 3]));
    assert_eq!(out, deque([]));
}

#[test]
fn test_concat_map_expands_each_element() {
    let out = transduce_list(&concat_map(|x: i32| vec![x, -x]), deque([1, 2]));
    assert_eq!(out, deque([1, -1, 2, -2]));
}

#[test]
fn test_concat_map_empty_expansion_forwards_nothing() {
    let out = transduce_list(&concat_map(|_: i32| Vec::<i32>::new()), deque([1, 2, 3]));
    assert_eq!(out, deque([]));
}

#[test]
fn test_concat_map_preserves_producer_order() {
    let out = transduce_list(&concat_map(|x: u32| 0..x), deque([3, 2]));
    assert_eq!(out, deque([0, 1, 2, 0, 1]));
}

#[test]
fn test_take_two() {
    let out = transduce_list(&take(2), deque(["A", "B", "C", "D"]));
    assert_eq!(out, deque(["A", "B"]));
}

#[test]
fn test_take_zero_forwards_nothing() {
    let out = transduce_list(&take(0), deque([1, 2, 3]));
    assert_eq!(out, deque([]));
}

#[test]
fn test_take_beyond_length() {
    let out = transduce_list(&take(10), deque([1, 2]));
    assert_eq!(out, deque([1, 2]));
}

#[test]
fn test_drop_two() {
    let out = transduce_list(&drop(2), deque(["A", "B", "C", "D"]));
    assert_eq!(out, deque(["C", "D"]));
}

#[test]
fn test_drop_zero_forwards_everything() {
    let out = transduce_list(&drop(0), deque([1, 2, 3]));
    assert_eq!(out, deque([1, 2, 3]));
}

#[test]
fn test_drop_beyond_length() {
    let out = transduce_list(&drop(10), deque([1, 2]));
    assert_eq!(out, deque([]));
}

#[test]
fn test_dedupe_collapses_adjacent_runs() {
    let out = transduce_list(&dedupe(), deque([1, 1, 2, 2, 2, 3]));
    assert_eq!(out, deque([1, 2, 3]));
}

#[test]
fn test_dedupe_preserves_non_adjacent_duplicates() {
    let out = transduce_list(&dedupe(), deque([1, 2, 1, 2]));
    assert_eq!(out, deque([1, 2, 1, 2]));
}

#[test]
fn test_dedupe_forwards_first_element() {
    let out = transduce_list(&dedupe(), deque([7]));
    assert_eq!(out, deque([7]));
}

#[test]
fn test_dedupe_empty_source() {
    let out = transduce_list(&dedupe(), deque::<i32, 0>([]));
    assert_eq!(out, deque([]));
}

#[test]
fn test_partition_with_remainder() {
    let out = transduce_list(&partition(2), deque([1, 2, 3, 4, 5]));
    assert_eq!(out, deque([vec![1, 2], vec![3, 4], vec![5]]));
}

#[test]
fn test_partition_evenly_divisible() {
    let out = transduce_list(&partition(3), deque([1, 2, 3, 4, 5, 6]));
    assert_eq!(out, deque([vec![1, 2, 3], vec![4, 5, 6]]));
}

#[test]
fn test_partition_empty_source_flushes_nothing() {
    let out = transduce_list(&partition(3), deque::<i32, 0>([]));
    assert_eq!(out, deque::<Vec<i32>, 0>([]));
}

#[test]
fn test_partition_larger_than_source() {
    let out = transduce_list(&partition(10), deque([1, 2]));
    assert_eq!(out, deque([vec![1, 2]]));
}
