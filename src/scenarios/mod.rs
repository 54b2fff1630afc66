//! Small self-contained modeling domains.
//!
//! These modules are independent of the [`cow`](crate::cow) core and of one
//! another; no data flows between them. Each one takes a miniature domain
//! and expresses it with closed enums, extension traits, and typed errors:
//!
//! - [`farm`]: heterogeneous sortable entries with a rank-then-label order
//! - [`company`]: a capacity-bounded task allocation counter
//! - [`dice`]: an extension trait over a built-in numeric type

pub mod company;
pub mod dice;
pub mod farm;
