//! Error types for the engine and the bundled puzzle models.

use thiserror::Error;

/// Errors raised while configuring a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A textual search order that names neither breadth-first nor depth-first.
    #[error("unsupported search order `{0}` (expected breadth-first or depth-first)")]
    UnsupportedOrder(String),
}

/// Errors raised while building puzzle states from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("invalid stone `{found}` at position {index} (expected G, B or _)")]
    InvalidStone { found: char, index: usize },
}
