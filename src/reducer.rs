use std::collections::{BTreeSet, VecDeque};

/// A left-fold step: combine one input element with an accumulated result.
///
/// Reducers receive the accumulator by value and return it by value. They
/// carry no state of their own and may be called any number of times.
/// Every closure or fn item of shape `Fn(T, R) -> R` is a reducer via the
/// blanket implementation, so callers almost never implement this trait
/// directly.
///
/// # Examples
///
/// ```
/// use xfold::Reducer;
///
/// let sum = |item: u32, acc: u32| acc + item;
/// assert_eq!(sum.apply(3, 4), 7);
/// ```
pub trait Reducer<T, R> {
    /// Combine `item` into `acc`, returning the new accumulated result.
    fn apply(&self, item: T, acc: R) -> R;
}

impl<T, R, F> Reducer<T, R> for F
where
    F: Fn(T, R) -> R,
{
    fn apply(&self, item: T, acc: R) -> R {
        self(item, acc)
    }
}

/// Push an element onto the front of a deque.
///
/// The list driver pairs this with a right fold; the pairing keeps output
/// in source order. See [`transduce_list`](crate::transduce_list).
pub fn prepend<T>(item: T, mut acc: VecDeque<T>) -> VecDeque<T> {
    acc.push_front(item);
    acc
}

/// Push an element onto the back of a vector.
///
/// The array driver pairs this with a left fold.
pub fn append<T>(item: T, mut acc: Vec<T>) -> Vec<T> {
    acc.push(item);
    acc
}

/// Insert an element into an ordered set. Duplicates collapse.
pub fn insert<T: Ord>(item: T, mut acc: BTreeSet<T>) -> BTreeSet<T> {
    acc.insert(item);
    acc
}
