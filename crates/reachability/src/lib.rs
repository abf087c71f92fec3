//! State-space reachability engine.
//!
//! A [`StateSpace`] describes an implicit graph through an initial state,
//! a transition generator and an optional invariant. [`StateSpace::check`]
//! explores it breadth-first, depth-first or least-cost-first and returns
//! the traces leading to goal states. The `puzzle` module holds two small
//! models built on that contract.

pub mod error;
pub mod frontier;
pub mod puzzle;
pub mod solver;
pub mod space;
pub mod trace;

// Re-export main types
pub use error::{PuzzleError, SearchError};
pub use solver::{Collect, SearchOrder, SearchOutcome, SearchStats, Trace};
pub use space::{transition, StateSpace, Transition, Transitions};
