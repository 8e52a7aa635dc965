mod apply;
mod compose;
mod fold;
mod observe;
mod ops;
mod reducer;
mod transducer;

pub use apply::{transduce, transduce_array, transduce_list, transduce_set};
pub use compose::{compose, Compose};
pub use fold::{ArrayFold, Fold, IterFold, ListFold, SetFold};
pub use observe::{observe, observe_with, Observe};
pub use ops::{
    concat_map, dedupe, drop, filter, map, partition, take, ConcatMap, Dedupe, Drop, Filter, Map,
    Partition, Take,
};
pub use reducer::{append, insert, prepend, Reducer};
pub use transducer::Transducer;
