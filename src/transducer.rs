use crate::reducer::Reducer;

/// A reusable, composable description of a sequence transformation,
/// independent of the container that supplies the input and the reducer
/// that consumes the output.
///
/// A transducer transforms a reducer over its [`Output`](Self::Output)
/// type into a reducer over `A`, carrying private per-run state of type
/// [`State`](Self::State). The value itself is an immutable description;
/// all mutable context lives in the state created by [`init`](Self::init)
/// and threaded by value through every call.
///
/// # Lifecycle
///
/// For one transduction run over one source:
///
/// 1. `init` is called exactly once, before any `step`, and produces the
///    fresh internal state.
/// 2. `step` is called once per source element, in traversal order. Each
///    call may invoke the downstream reducer zero or more times.
/// 3. `complete` is called exactly once after the source is exhausted —
///    even when no element was stepped — to flush buffered state (a
///    partial partition, for example) and unwrap the final result.
///
/// No call re-enters an earlier phase, and state from one run must never
/// be fed to another: each run allocates its own via `init` and discards
/// it when `complete` returns. The drivers in this crate uphold all of
/// this; code invoking the trait by hand must do the same.
///
/// State is opaque to everything but the transducer's own three
/// operations. Callers hold it only to pass it back in.
pub trait Transducer<A> {
    /// Element type handed to the downstream reducer.
    type Output;

    /// Private per-run state: a counter, a buffer, a last-seen value, or
    /// `()` for stateless transformations.
    type State;

    /// Produce this transducer's initial state, paired with the (possibly
    /// unmodified) seed result.
    fn init<R, D>(&self, down: &D, seed: R) -> (Self::State, R)
    where
        D: Reducer<Self::Output, R>;

    /// Consume one input element, updating state and invoking `down` zero
    /// or more times to advance the result.
    fn step<R, D>(&self, down: &D, input: A, acc: (Self::State, R)) -> (Self::State, R)
    where
        D: Reducer<Self::Output, R>;

    /// Flush any buffered state into the result via `down` and unwrap it.
    fn complete<R, D>(&self, down: &D, acc: (Self::State, R)) -> R
    where
        D: Reducer<Self::Output, R>;
}
