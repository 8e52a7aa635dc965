//! Trace a composed pipeline stage by stage with the observation
//! wrapper. The callback sees each input and the state the step left
//! behind without perturbing the pipeline's output.
//!
//! Run with: cargo run --example pipeline_trace

use std::collections::VecDeque;

use xfold::{compose, dedupe, map, observe_with, partition, transduce_list};

fn main() {
    let dedupe_stage = observe_with(
        "dedupe",
        dedupe(),
        |label: &str, input: &i32, last: &Option<i32>| {
            println!("[{label}] saw {input}, last forwarded = {last:?}");
        },
    );
    let batch_stage = observe_with(
        "partition",
        partition(2),
        |label: &str, input: &i32, buffer: &Vec<i32>| {
            println!("[{label}] saw {input}, pending = {buffer:?}");
        },
    );

    let pipeline = compose(dedupe_stage, compose(map(|x: i32| x * 10), batch_stage));
    let out = transduce_list(&pipeline, VecDeque::from([1, 1, 2, 3, 3, 3, 4]));

    println!("batches: {out:?}");
}
