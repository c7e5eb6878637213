//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-type movement rules
//! - `check.rs` - Check and checkmate detection
//! - `make_unmake.rs` - Probe restoration and committed moves
//! - `edge_cases.rs` - Degenerate and unusual positions
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::Square;

/// Shorthand for algebraic squares in test positions.
pub(crate) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}
