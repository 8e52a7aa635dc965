use std::fmt::Debug;

use log::debug;

use crate::reducer::Reducer;
use crate::transducer::Transducer;

/// A transducer wrapped with a per-step observation callback. See
/// [`observe`] and [`observe_with`].
///
/// Behavior and state shape are identical to the wrapped transducer;
/// `init` and `complete` delegate untouched, and `step` delegates before
/// handing the callback the label, the input element, and the state the
/// step produced.
#[derive(Clone, Debug)]
pub struct Observe<T, F> {
    label: String,
    inner: T,
    callback: F,
}

/// Wrap `inner` so every `step` reports `(label, input, new_state)` to
/// `callback` before returning.
///
/// The callback is observation only: it cannot alter the result or the
/// state, and it fires once per source element — `init` and `complete`
/// never trigger it.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::collections::VecDeque;
/// use xfold::{observe_with, take, transduce_list};
///
/// let seen = RefCell::new(Vec::new());
/// let xf = observe_with("take", take(2), |label: &str, input: &i32, remaining: &usize| {
///     seen.borrow_mut().push(format!("{label}: {input} ({remaining} left)"));
/// });
/// let out = transduce_list(&xf, VecDeque::from([7, 8, 9]));
/// assert_eq!(out, VecDeque::from([7, 8]));
/// assert_eq!(seen.borrow().len(), 3);
/// ```
pub fn observe_with<T, F>(label: impl Into<String>, inner: T, callback: F) -> Observe<T, F> {
    Observe {
        label: label.into(),
        inner,
        callback,
    }
}

/// Wrap `inner` so every `step` emits a `log::debug!` line with the
/// label, the input element, and the post-step state.
///
/// Logging goes through the `log` facade; without an installed logger
/// the wrapper costs a clone per element and nothing else.
pub fn observe<A, T>(label: impl Into<String>, inner: T) -> Observe<T, impl Fn(&str, &A, &T::State)>
where
    T: Transducer<A>,
    A: Debug,
    T::State: Debug,
{
    observe_with(label, inner, |label: &str, input: &A, state: &T::State| {
        debug!(target: "xfold::observe", "{label}: step {input:?} -> {state:?}");
    })
}

impl<A, T, F> Transducer<A> for Observe<T, F>
where
    T: Transducer<A>,
    A: Clone,
    F: Fn(&str, &A, &T::State),
{
    type Output = T::Output;
    type State = T::State;

    fn init<R, D>(&self, down: &D, seed: R) -> (T::State, R)
    where
        D: Reducer<T::Output, R>,
    {
        self.inner.init(down, seed)
    }

    fn step<R, D>(&self, down: &D, input: A, acc: (T::State, R)) -> (T::State, R)
    where
        D: Reducer<T::Output, R>,
    {
        let observed = input.clone();
        let acc = self.inner.step(down, input, acc);
        (self.callback)(&self.label, &observed, &acc.0);
        acc
    }

    fn complete<R, D>(&self, down: &D, acc: (T::State, R)) -> R
    where
        D: Reducer<T::Output, R>,
    {
        self.inner.complete(down, acc)
    }
}
