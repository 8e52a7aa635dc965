//! Apply drivers: run a transducer to completion over a foldable source.

use std::collections::{BTreeSet, VecDeque};

use crate::fold::{ArrayFold, Fold, ListFold, SetFold};
use crate::reducer::{append, insert, prepend, Reducer};
use crate::transducer::Transducer;

/// Drive `xf` to completion over `source` using `strategy`'s traversal.
///
/// Calls `init` once, folds every element through `step`, then calls
/// `complete` once — even for an empty source — and returns the final
/// result. The concrete drivers below bind `strategy`, `down`, and
/// `seed` for the common container shapes; reach for this function
/// directly to accumulate into anything else.
///
/// # Examples
///
/// Summing the kept elements with a plain closure reducer:
///
/// ```
/// use xfold::{filter, transduce, IterFold};
///
/// let evens = filter(|x: &i64| x % 2 == 0);
/// let sum = transduce(&IterFold::new(), |x: i64, acc: i64| acc + x, 0, &evens, 1..=10);
/// assert_eq!(sum, 30);
/// ```
pub fn transduce<S, T, D, R>(strategy: &S, down: D, seed: R, xf: &T, source: S::Source) -> R
where
    S: Fold,
    T: Transducer<S::Item>,
    D: Reducer<T::Output, R>,
{
    let acc = xf.init(&down, seed);
    let acc = strategy.fold(source, acc, |item, acc| xf.step(&down, item, acc));
    xf.complete(&down, acc)
}

/// Run `xf` over a list, producing a list.
///
/// Folds from the right with a [`prepend`] reducer; the pairing keeps
/// output in source order and is fixed, not configurable.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use xfold::{take, transduce_list};
///
/// let out = transduce_list(&take(2), VecDeque::from(["A", "B", "C", "D"]));
/// assert_eq!(out, VecDeque::from(["A", "B"]));
/// ```
pub fn transduce_list<A, T>(xf: &T, items: VecDeque<A>) -> VecDeque<T::Output>
where
    T: Transducer<A>,
{
    transduce(&ListFold::new(), prepend, VecDeque::new(), xf, items)
}

/// Run `xf` over an array, producing an array.
///
/// Folds from the left with an [`append`] reducer.
pub fn transduce_array<A, T>(xf: &T, items: Vec<A>) -> Vec<T::Output>
where
    T: Transducer<A>,
{
    transduce(&ArrayFold::new(), append, Vec::new(), xf, items)
}

/// Run `xf` over an ordered set, producing an ordered set.
///
/// Folds in ascending order with an [`insert`] reducer. Outputs that
/// compare equal collapse, as sets do.
pub fn transduce_set<A, T>(xf: &T, items: BTreeSet<A>) -> BTreeSet<T::Output>
where
    T: Transducer<A>,
    T::Output: Ord,
{
    transduce(&SetFold::new(), insert, BTreeSet::new(), xf, items)
}
