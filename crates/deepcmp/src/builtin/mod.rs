//! Built-in strategies for JSON values.
//!
//! These satisfy the core's [`Unpacker`](deepcmp_core::Unpacker) and
//! [`Comparator`](deepcmp_core::Comparator) interfaces; the engine has no
//! knowledge of them beyond the lists it is given.

pub mod containers;
pub mod fallback;
pub mod numeric;

pub use containers::{ArrayUnpacker, ObjectUnpacker};
pub use fallback::AnyValueComparator;
pub use numeric::NumberComparator;
