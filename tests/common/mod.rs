#![allow(dead_code)]

use std::collections::VecDeque;

pub fn deque<T, const N: usize>(items: [T; N]) -> VecDeque<T> {
    VecDeque::from(items)
}

pub fn to_vec<T>(items: VecDeque<T>) -> Vec<T> {
    items.into_iter().collect()
}

pub fn strings<const N: usize>(items: [&str; N]) -> VecDeque<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn is_even(x: &i32) -> bool {
    x % 2 == 0
}
