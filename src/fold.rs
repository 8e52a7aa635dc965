//! Fold strategies: the traversal contract a source type provides.
//!
//! A strategy visits every element of its source exactly once, in a
//! fixed strategy-defined order, threading an accumulator through a
//! reducer. Fold direction is part of each strategy's contract, not a
//! free choice — the drivers in [`crate::apply`] pair each strategy with
//! the one reducer whose accumulation order matches it.

use std::collections::{BTreeSet, VecDeque};
use std::marker::PhantomData;

use crate::reducer::Reducer;

/// Traversal contract for a foldable source.
pub trait Fold {
    /// Element type the source yields.
    type Item;

    /// The container being traversed. Consumed by the fold.
    type Source;

    /// Visit every element exactly once, threading `seed` through `step`.
    fn fold<Acc, F>(&self, source: Self::Source, seed: Acc, step: F) -> Acc
    where
        F: Reducer<Self::Item, Acc>;
}

/// Right fold over a [`VecDeque`], back to front.
///
/// Pairs with [`prepend`](crate::prepend): folding from the right while
/// pushing to the front keeps output in source order. Swapping either
/// half of that pairing silently reverses the output.
pub struct ListFold<T> {
    _marker: PhantomData<T>,
}

impl<T> ListFold<T> {
    pub fn new() -> Self {
        ListFold {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for ListFold<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Fold for ListFold<T> {
    type Item = T;
    type Source = VecDeque<T>;

    fn fold<Acc, F>(&self, source: VecDeque<T>, seed: Acc, step: F) -> Acc
    where
        F: Reducer<T, Acc>,
    {
        source
            .into_iter()
            .rev()
            .fold(seed, |acc, item| step.apply(item, acc))
    }
}

/// Left fold over a [`Vec`], front to back. Pairs with
/// [`append`](crate::append).
pub struct ArrayFold<T> {
    _marker: PhantomData<T>,
}

impl<T> ArrayFold<T> {
    pub fn new() -> Self {
        ArrayFold {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for ArrayFold<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Fold for ArrayFold<T> {
    type Item = T;
    type Source = Vec<T>;

    fn fold<Acc, F>(&self, source: Vec<T>, seed: Acc, step: F) -> Acc
    where
        F: Reducer<T, Acc>,
    {
        source.into_iter().fold(seed, |acc, item| step.apply(item, acc))
    }
}

/// Ascending fold over a [`BTreeSet`]. Pairs with
/// [`insert`](crate::insert).
///
/// The set container is ordered so that traversal is deterministic, which
/// the fold contract requires.
pub struct SetFold<T> {
    _marker: PhantomData<T>,
}

impl<T> SetFold<T> {
    pub fn new() -> Self {
        SetFold {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SetFold<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Fold for SetFold<T> {
    type Item = T;
    type Source = BTreeSet<T>;

    fn fold<Acc, F>(&self, source: BTreeSet<T>, seed: Acc, step: F) -> Acc
    where
        F: Reducer<T, Acc>,
    {
        source.into_iter().fold(seed, |acc, item| step.apply(item, acc))
    }
}

/// Left fold over any [`IntoIterator`] in iteration order.
///
/// Adapts arbitrary iterables — ranges, iterators, slices by value — as
/// sources for the generic [`transduce`](crate::transduce) driver.
pub struct IterFold<I> {
    _marker: PhantomData<I>,
}

impl<I> IterFold<I> {
    pub fn new() -> Self {
        IterFold {
            _marker: PhantomData,
        }
    }
}

impl<I> Default for IterFold<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Fold for IterFold<I>
where
    I: IntoIterator,
{
    type Item = I::Item;
    type Source = I;

    fn fold<Acc, F>(&self, source: I, seed: Acc, step: F) -> Acc
    where
        F: Reducer<I::Item, Acc>,
    {
        source.into_iter().fold(seed, |acc, item| step.apply(item, acc))
    }
}
