//! Heuristic estimates used by the informed search strategies.
//!
//! Both heuristics are pure functions of a candidate board and the goal.
//! The goal side is captured once in a [`GoalIndex`], so Manhattan lookups
//! never rescan the goal board while a search is running.

use crate::engine::{Board, BOARD_SIZE, CELLS};
use std::fmt;

/// Selector for the two available estimates.
///
/// Surfaced on the command line as `h1` (misplaced tiles) and `h2`
/// (Manhattan distance).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Number of cells that differ from the goal configuration.
    MisplacedTiles,
    /// Sum of the tiles' city-block distances to their goal cells.
    ManhattanDistance,
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Heuristic::MisplacedTiles => "misplaced tiles",
            Heuristic::ManhattanDistance => "Manhattan distance",
        };
        write!(f, "{}", s)
    }
}

/// A goal board plus its reverse index: for each tile value, the cell where
/// the goal wants it. Built once per search instance.
pub struct GoalIndex {
    goal: Board,
    positions: [u8; CELLS],
}

impl GoalIndex {
    pub fn new(goal: &Board) -> Self {
        let mut positions = [0u8; CELLS];
        for (cell, &tile) in goal.tiles().iter().enumerate() {
            positions[tile as usize] = cell as u8;
        }
        GoalIndex {
            goal: *goal,
            positions,
        }
    }

    /// The goal board this index was built for.
    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Number of cells whose value differs from the goal's.
    ///
    /// The blank counts as a regular value here, so a board one move away
    /// from the goal scores 2 (the moved tile and the blank), not 1.
    pub fn misplaced(&self, candidate: &Board) -> u32 {
        candidate
            .tiles()
            .iter()
            .zip(self.goal.tiles().iter())
            .filter(|(a, b)| a != b)
            .count() as u32
    }

    /// Sum over all tiles of |row - goal row| + |col - goal col|.
    ///
    /// The blank is skipped, so the estimate never exceeds the true number
    /// of remaining moves.
    pub fn manhattan(&self, candidate: &Board) -> u32 {
        let mut distance = 0;
        for (cell, &tile) in candidate.tiles().iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let goal_cell = self.positions[tile as usize] as usize;
            let rows = (cell / BOARD_SIZE).abs_diff(goal_cell / BOARD_SIZE);
            let cols = (cell % BOARD_SIZE).abs_diff(goal_cell % BOARD_SIZE);
            distance += (rows + cols) as u32;
        }
        distance
    }

    /// The selected estimate for `candidate`. Greedy best-first orders its
    /// frontier by this value alone.
    pub fn estimate(&self, heuristic: Heuristic, candidate: &Board) -> u32 {
        match heuristic {
            Heuristic::MisplacedTiles => self.misplaced(candidate),
            Heuristic::ManhattanDistance => self.manhattan(candidate),
        }
    }

    /// f-cost of a candidate that sits `depth` moves below the root: path
    /// cost so far plus the selected estimate. A* and the ida* contours
    /// order by this value.
    pub fn f_cost(&self, heuristic: Heuristic, depth: u32, candidate: &Board) -> u32 {
        depth + self.estimate(heuristic, candidate)
    }
}
