//! Go list method templates, one per supported operation.
//!
//! Each submodule holds the `MethodTemplate` constants for a family of
//! operations plus a free function per operation that renders it.

pub mod each;
pub mod filter;
pub mod reduce;
pub mod slice;

pub use each::{each, each_i};
pub use filter::{filter, pfilter};
pub use reduce::{reduce, reduce_right};
pub use slice::{drop, drop_while, take, take_while};
