//! # 8-Puzzle Solver Library
//!
//! This library provides the board model for the classic 3x3 sliding-tile
//! puzzle and a family of search strategies for solving it: the uninformed
//! bfs, dfs, dls and ids, and the informed greedy, a* and ida*, the last
//! three driven by a selectable heuristic.
//!
//! It is used by two binaries:
//! - `puzzle_search`: solves an instance with a chosen strategy (or
//!   benchmarks all of them) and prints the run statistics.
//! - `scramble`: generates solvable instances by random-walking the blank
//!   from the canonical configuration.
//!
//! ## Modules
//! - `engine`: the board representation (`Board`), the move encoding
//!   (`MoveCode`), and the parent-chain arena (`SearchTree`) used for path
//!   reconstruction.
//! - `heuristics`: the `Heuristic` selector and the goal-side reverse index
//!   (`GoalIndex`) behind the misplaced-tile and Manhattan estimates.
//! - `solver`: the `SearchEngine` with the seven strategies, their shared
//!   expansion protocol and the per-run statistics (`SearchResult`).
//! - `utils`: parsing and validation of caller-supplied board layouts.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
