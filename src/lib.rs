//! Solver library for the fox-goose-grain river crossing puzzle.
//!
//! This crate models the puzzle as a 16-state graph, finds a shortest
//! sequence of crossings by breadth-first search, and renders the result
//! as a step-by-step console animation.

pub mod render;
pub mod solver;
pub mod state;

// Re-export main types
pub use render::{animate, describe_move, format_bank, format_state};
pub use solver::{shortest_path, SearchResult};
pub use state::{Entity, Side, State, UNSAFE_PAIRS};
