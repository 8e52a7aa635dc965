//! The built-in transducer library.
//!
//! Each transducer here is a small immutable description implementing
//! [`Transducer`] once; the lowercase constructor fns are the public
//! entry points. Stateless transformations (`map`, `filter`,
//! `concat_map`) use `()` state; the rest carry exactly what they need
//! to remember between steps.

use std::mem;

use crate::reducer::Reducer;
use crate::transducer::Transducer;

/// Transform every element with `f`. See [`map`].
#[derive(Clone, Copy, Debug)]
pub struct Map<F> {
    f: F,
}

/// Transform every element with `f`, forwarding each result once.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use xfold::{map, transduce_list};
///
/// let out = transduce_list(&map(|x: i32| x.to_string()), VecDeque::from([1, 2, 3, 4]));
/// assert_eq!(out, VecDeque::from(["1", "2", "3", "4"].map(String::from)));
/// ```
pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

impl<A, B, F> Transducer<A> for Map<F>
where
    F: Fn(A) -> B,
{
    type Output = B;
    type State = ();

    fn init<R, D>(&self, _down: &D, seed: R) -> ((), R)
    where
        D: Reducer<B, R>,
    {
        ((), seed)
    }

    fn step<R, D>(&self, down: &D, input: A, (state, result): ((), R)) -> ((), R)
    where
        D: Reducer<B, R>,
    {
        (state, down.apply((self.f)(input), result))
    }

    fn complete<R, D>(&self, _down: &D, (_, result): ((), R)) -> R
    where
        D: Reducer<B, R>,
    {
        result
    }
}

/// Keep only elements satisfying a predicate. See [`filter`].
#[derive(Clone, Copy, Debug)]
pub struct Filter<P> {
    pred: P,
}

/// Forward an element unchanged iff `pred` holds for it.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use xfold::{filter, transduce_list};
///
/// let out = transduce_list(&filter(|x: &i32| *x >= 3), VecDeque::from([1, 5, 2, 3, 4]));
/// assert_eq!(out, VecDeque::from([5, 3, 4]));
/// ```
pub fn filter<P>(pred: P) -> Filter<P> {
    Filter { pred }
}

impl<A, P> Transducer<A> for Filter<P>
where
    P: Fn(&A) -> bool,
{
    type Output = A;
    type State = ();

    fn init<R, D>(&self, _down: &D, seed: R) -> ((), R)
    where
        D: Reducer<A, R>,
    {
        ((), seed)
    }

    fn step<R, D>(&self, down: &D, input: A, (state, result): ((), R)) -> ((), R)
    where
        D: Reducer<A, R>,
    {
        if (self.pred)(&input) {
            (state, down.apply(input, result))
        } else {
            (state, result)
        }
    }

    fn complete<R, D>(&self, _down: &D, (_, result): ((), R)) -> R
    where
        D: Reducer<A, R>,
    {
        result
    }
}

/// Expand every element into a sequence of outputs. See [`concat_map`].
#[derive(Clone, Copy, Debug)]
pub struct ConcatMap<F> {
    f: F,
}

/// Apply `f` to each element, forwarding every produced output in order —
/// one downstream call per output, which may be zero, one, or many per
/// input element.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use xfold::{concat_map, transduce_list};
///
/// let out = transduce_list(&concat_map(|x: u32| vec![x; x as usize]), VecDeque::from([0, 1, 2]));
/// assert_eq!(out, VecDeque::from([1, 2, 2]));
/// ```
pub fn concat_map<F>(f: F) -> ConcatMap<F> {
    ConcatMap { f }
}

impl<A, F, I> Transducer<A> for ConcatMap<F>
where
    F: Fn(A) -> I,
    I: IntoIterator,
{
    type Output = I::Item;
    type State = ();

    fn init<R, D>(&self, _down: &D, seed: R) -> ((), R)
    where
        D: Reducer<I::Item, R>,
    {
        ((), seed)
    }

    fn step<R, D>(&self, down: &D, input: A, (state, mut result): ((), R)) -> ((), R)
    where
        D: Reducer<I::Item, R>,
    {
        for output in (self.f)(input) {
            result = down.apply(output, result);
        }
        (state, result)
    }

    fn complete<R, D>(&self, _down: &D, (_, result): ((), R)) -> R
    where
        D: Reducer<I::Item, R>,
    {
        result
    }
}

/// Forward the first `count` elements, then drop the rest. See [`take`].
#[derive(Clone, Copy, Debug)]
pub struct Take {
    count: usize,
}

/// Forward the first `count` elements and drop everything after.
///
/// `take(0)` forwards nothing. The remaining source is still traversed;
/// there is no early termination.
pub fn take(count: usize) -> Take {
    Take { count }
}

impl<A> Transducer<A> for Take {
    type Output = A;
    type State = usize;

    fn init<R, D>(&self, _down: &D, seed: R) -> (usize, R)
    where
        D: Reducer<A, R>,
    {
        (self.count, seed)
    }

    fn step<R, D>(&self, down: &D, input: A, (remaining, result): (usize, R)) -> (usize, R)
    where
        D: Reducer<A, R>,
    {
        if remaining > 0 {
            (remaining - 1, down.apply(input, result))
        } else {
            (0, result)
        }
    }

    fn complete<R, D>(&self, _down: &D, (_, result): (usize, R)) -> R
    where
        D: Reducer<A, R>,
    {
        result
    }
}

/// Drop the first `count` elements, then forward the rest. See [`drop`].
#[derive(Clone, Copy, Debug)]
pub struct Drop {
    count: usize,
}

/// Drop the first `count` elements and forward everything after.
///
/// `drop(0)` forwards every element immediately.
pub fn drop(count: usize) -> Drop {
    Drop { count }
}

impl<A> Transducer<A> for Drop {
    type Output = A;
    type State = usize;

    fn init<R, D>(&self, _down: &D, seed: R) -> (usize, R)
    where
        D: Reducer<A, R>,
    {
        (self.count, seed)
    }

    fn step<R, D>(&self, down: &D, input: A, (remaining, result): (usize, R)) -> (usize, R)
    where
        D: Reducer<A, R>,
    {
        if remaining > 0 {
            (remaining - 1, result)
        } else {
            (0, down.apply(input, result))
        }
    }

    fn complete<R, D>(&self, _down: &D, (_, result): (usize, R)) -> R
    where
        D: Reducer<A, R>,
    {
        result
    }
}

/// Collapse runs of adjacent equal elements. See [`dedupe`].
#[derive(Clone, Copy, Debug)]
pub struct Dedupe;

/// Forward an element iff it differs from the previous one. The first
/// element is always forwarded; non-adjacent duplicates are preserved.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use xfold::{dedupe, transduce_list};
///
/// let out = transduce_list(&dedupe(), VecDeque::from([1, 1, 2, 2, 2, 1]));
/// assert_eq!(out, VecDeque::from([1, 2, 1]));
/// ```
pub fn dedupe() -> Dedupe {
    Dedupe
}

impl<A> Transducer<A> for Dedupe
where
    A: Clone + PartialEq,
{
    type Output = A;
    type State = Option<A>;

    fn init<R, D>(&self, _down: &D, seed: R) -> (Option<A>, R)
    where
        D: Reducer<A, R>,
    {
        (None, seed)
    }

    fn step<R, D>(&self, down: &D, input: A, (last, result): (Option<A>, R)) -> (Option<A>, R)
    where
        D: Reducer<A, R>,
    {
        if last.as_ref() == Some(&input) {
            (last, result)
        } else {
            (Some(input.clone()), down.apply(input, result))
        }
    }

    fn complete<R, D>(&self, _down: &D, (_, result): (Option<A>, R)) -> R
    where
        D: Reducer<A, R>,
    {
        result
    }
}

/// Group elements into fixed-size batches. See [`partition`].
#[derive(Clone, Copy, Debug)]
pub struct Partition {
    size: usize,
}

/// Buffer elements and forward them as `Vec` batches of `size`. A
/// non-empty partial batch is flushed on completion; zero input elements
/// produce zero batches.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use xfold::{partition, transduce_list};
///
/// let out = transduce_list(&partition(2), VecDeque::from([1, 2, 3, 4, 5]));
/// assert_eq!(out, VecDeque::from([vec![1, 2], vec![3, 4], vec![5]]));
/// ```
pub fn partition(size: usize) -> Partition {
    Partition { size }
}

impl<A> Transducer<A> for Partition {
    type Output = Vec<A>;
    type State = Vec<A>;

    fn init<R, D>(&self, _down: &D, seed: R) -> (Vec<A>, R)
    where
        D: Reducer<Vec<A>, R>,
    {
        (Vec::new(), seed)
    }

    fn step<R, D>(&self, down: &D, input: A, (mut buffer, mut result): (Vec<A>, R)) -> (Vec<A>, R)
    where
        D: Reducer<Vec<A>, R>,
    {
        buffer.push(input);
        if buffer.len() >= self.size {
            let batch = mem::take(&mut buffer);
            result = down.apply(batch, result);
        }
        (buffer, result)
    }

    fn complete<R, D>(&self, down: &D, (buffer, result): (Vec<A>, R)) -> R
    where
        D: Reducer<Vec<A>, R>,
    {
        if buffer.is_empty() {
            result
        } else {
            down.apply(buffer, result)
        }
    }
}
