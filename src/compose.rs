use crate::reducer::Reducer;
use crate::transducer::Transducer;

/// Two transducers fused into one. See [`compose`].
///
/// The internal state is the pair of both component states; composing
/// three or more nests pairs recursively. The `T2: Transducer<T1::Output>`
/// bound rejects mismatched stage types at the use site, so a pipeline
/// that type-checks cannot mis-wire its stages at runtime.
#[derive(Clone, Copy, Debug)]
pub struct Compose<T1, T2> {
    left: T1,
    right: T2,
}

/// Fuse `left` and `right` into a single transducer from `left`'s input
/// type to `right`'s output type.
///
/// Processing order is left stage first: every input element is fully
/// processed by `left`, and each output `left` emits is immediately
/// processed by `right` before `left` sees the next element. On
/// completion `left`'s buffered state flushes through `right` before
/// `right` itself completes.
///
/// Composition is associative in behavior — either nesting of three
/// stages produces the same output sequence — though the two nestings
/// carry differently-shaped state and are distinct types.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use xfold::{compose, filter, map, take, transduce_list};
///
/// let pipeline = compose(
///     filter(|x: &i32| *x >= 3),
///     compose(map(|x: i32| x.to_string()), take(2)),
/// );
/// let out = transduce_list(&pipeline, VecDeque::from([1, 2, 3, 4, 5]));
/// assert_eq!(out, VecDeque::from(["3".to_string(), "4".to_string()]));
/// ```
pub fn compose<T1, T2>(left: T1, right: T2) -> Compose<T1, T2> {
    Compose { left, right }
}

impl<A, T1, T2> Transducer<A> for Compose<T1, T2>
where
    T1: Transducer<A>,
    T2: Transducer<T1::Output>,
{
    type Output = T2::Output;
    type State = (T1::State, T2::State);

    // The left stage is driven with the right stage's state threaded
    // through its result slot: left runs at result type (T2::State, R),
    // and the reducer it sees is the right stage's step.

    fn init<R, D>(&self, down: &D, seed: R) -> (Self::State, R)
    where
        D: Reducer<T2::Output, R>,
    {
        let (right_state, result) = self.right.init(down, seed);
        let inner = |item: T1::Output, acc: (T2::State, R)| self.right.step(down, item, acc);
        let (left_state, (right_state, result)) = self.left.init(&inner, (right_state, result));
        ((left_state, right_state), result)
    }

    fn step<R, D>(&self, down: &D, input: A, acc: (Self::State, R)) -> (Self::State, R)
    where
        D: Reducer<T2::Output, R>,
    {
        let ((left_state, right_state), result) = acc;
        let inner = |item: T1::Output, acc: (T2::State, R)| self.right.step(down, item, acc);
        let (left_state, (right_state, result)) =
            self.left.step(&inner, input, (left_state, (right_state, result)));
        ((left_state, right_state), result)
    }

    fn complete<R, D>(&self, down: &D, acc: (Self::State, R)) -> R
    where
        D: Reducer<T2::Output, R>,
    {
        let ((left_state, right_state), result) = acc;
        let inner = |item: T1::Output, acc: (T2::State, R)| self.right.step(down, item, acc);
        let (right_state, result) =
            self.left.complete(&inner, (left_state, (right_state, result)));
        self.right.complete(down, (right_state, result))
    }
}
