//! Search strategies over the 8-puzzle state space.
//!
//! Seven strategies share one expansion protocol: pop a candidate, mark it
//! visited, test it against the goal, then generate its children in UP,
//! RIGHT, DOWN, LEFT order, discarding any child whose signature has
//! already been expanded. The strategies differ only in how the frontier is
//! ordered and in which children they admit.
//!
//! Duplicate detection is mark-on-expand: a board enters the visited set
//! when it is popped for expansion, not when it is generated. A child whose
//! signature is already in the set is counted in `duplicates_eliminated`
//! and dropped before it touches the frontier.
//!
//! Every run gets a fresh arena, frontier, visited set and counter record,
//! and resets the engine clock, so results from consecutive runs on one
//! engine are independent.

use crate::engine::{Board, MoveCode, NodeId, SearchTree, Signature};
use crate::heuristics::{GoalIndex, Heuristic};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};

/// The available search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dls,
    Ids,
    Greedy,
    AStar,
    IdaStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dls => "dls",
            Algorithm::Ids => "ids",
            Algorithm::Greedy => "greedy",
            Algorithm::AStar => "a*",
            Algorithm::IdaStar => "ida*",
        };
        write!(f, "{}", s)
    }
}

/// Time source polled at the engine's cooperative checkpoints: the top of
/// every pop iteration, and the top of every ida* contour call.
///
/// Injectable so tests can drive timeouts deterministically instead of
/// waiting on the wall.
pub trait SearchClock {
    /// Time elapsed since the last reset.
    fn elapsed(&self) -> Duration;
    /// Restarts the measurement. Called at the start of every strategy run.
    fn reset(&mut self);
}

/// [`SearchClock`] backed by `std::time::Instant`.
pub struct WallClock(Instant);

impl WallClock {
    pub fn new() -> Self {
        WallClock(Instant::now())
    }
}

impl Default for WallClock {
    fn default() -> Self {
        WallClock::new()
    }
}

impl SearchClock for WallClock {
    fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }

    fn reset(&mut self) {
        self.0 = Instant::now();
    }
}

/// Tunable limits for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Wall-clock budget for the frontier strategies, checked at the top of
    /// every pop iteration.
    pub time_budget: Duration,
    /// Tighter budget checked at the top of every ida* contour call.
    pub contour_time_budget: Duration,
    /// Depth ceiling applied when dfs, ids, greedy and a* admit children.
    pub hard_depth_limit: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(300),
            contour_time_budget: Duration::from_secs(10),
            hard_depth_limit: 50,
        }
    }
}

/// Outcome and statistics of one strategy run.
///
/// Exhausting the frontier (or the depth ceiling) and running out of time
/// both come back as `found = false`; `timed_out` tells the two negative
/// results apart.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// The heuristic the run was ordered by; `None` for the uninformed
    /// strategies.
    pub heuristic: Option<Heuristic>,
    pub found: bool,
    /// Depth at which the goal was found, -1 when it was not.
    pub goal_depth: i32,
    /// Root-to-goal boards, each tagged with the move that produced it
    /// (`None` for the root). Empty when the goal was not found.
    pub path: Vec<(Board, Option<MoveCode>)>,
    /// Candidates popped and tested against the goal.
    pub nodes_expanded: u64,
    /// Largest frontier observed at the top of a pop iteration.
    pub max_frontier_size: usize,
    /// Children discarded because their signature was already expanded.
    pub duplicates_eliminated: u64,
    /// Depth of the deepest candidate expanded.
    pub max_depth_seen: u32,
    /// Deepest contour recursion reached; stays 0 outside ida*.
    pub max_recursion_depth: u32,
    pub elapsed: Duration,
    pub timed_out: bool,
}

impl SearchResult {
    fn new(algorithm: Algorithm, heuristic: Option<Heuristic>) -> Self {
        SearchResult {
            algorithm,
            heuristic,
            found: false,
            goal_depth: -1,
            path: Vec::new(),
            nodes_expanded: 0,
            max_frontier_size: 0,
            duplicates_eliminated: 0,
            max_depth_seen: 0,
            max_recursion_depth: 0,
            elapsed: Duration::ZERO,
            timed_out: false,
        }
    }

    /// Number of moves on the reconstructed path (one less than the number
    /// of boards on it). 0 when the goal was not found.
    pub fn path_len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// How a frontier strategy orders and pops candidates.
enum PopDiscipline {
    /// FIFO queue, oldest first (bfs).
    Fifo,
    /// LIFO stack, newest first (dfs, dls, ids).
    Lifo,
    /// The whole frontier is re-sorted ascending by the heuristic estimate
    /// before each pop (greedy). The sort is stable, so equal estimates
    /// keep their insertion order.
    SortedByEstimate(Heuristic),
    /// As above, ordered by depth plus estimate (a*).
    SortedByFCost(Heuristic),
}

/// How one frontier pass ended.
enum PassStatus {
    Found,
    Exhausted,
    TimedOut,
}

/// Sentinel contour cost meaning "no candidate below this bound"; a bound
/// that reaches it means the search space is exhausted.
const COST_SENTINEL: u32 = 2_000_000;

/// Run state threaded through the ida* contour recursion. The visited set
/// spans the whole run: it is not reset between contours, so a later
/// contour sees every signature an earlier contour generated.
struct ContourRun {
    tree: SearchTree,
    visited: HashSet<Signature>,
    heuristic: Heuristic,
    solution: Option<NodeId>,
}

/// Orchestrates the seven strategies over one (root, goal) instance.
///
/// A strategy invocation is synchronous and blocking: it runs to success,
/// exhaustion or timeout before returning. All run state is private to the
/// invocation, so separate engine instances may run concurrently.
pub struct SearchEngine<C: SearchClock> {
    root: Board,
    goal_index: GoalIndex,
    config: EngineConfig,
    clock: C,
}

impl SearchEngine<WallClock> {
    /// Engine with the default wall-clock time source.
    pub fn new(root: Board, goal: Board, config: EngineConfig) -> Self {
        SearchEngine::with_clock(root, goal, config, WallClock::new())
    }
}

impl<C: SearchClock> SearchEngine<C> {
    pub fn with_clock(root: Board, goal: Board, config: EngineConfig, clock: C) -> Self {
        SearchEngine {
            root,
            goal_index: GoalIndex::new(&goal),
            config,
            clock,
        }
    }

    /// The root board the engine searches from.
    pub fn root(&self) -> &Board {
        &self.root
    }

    /// The goal board the engine searches for.
    pub fn goal(&self) -> &Board {
        self.goal_index.goal()
    }

    /// Dispatches by algorithm, validating the parameters each strategy
    /// requires: dls needs a depth limit, the informed strategies a
    /// heuristic.
    pub fn run(
        &mut self,
        algorithm: Algorithm,
        heuristic: Option<Heuristic>,
        depth_limit: Option<u32>,
    ) -> Result<SearchResult, String> {
        match algorithm {
            Algorithm::Bfs => Ok(self.bfs()),
            Algorithm::Dfs => Ok(self.dfs()),
            Algorithm::Ids => Ok(self.ids()),
            Algorithm::Dls => {
                let limit = depth_limit.ok_or("a depth limit is required for dls".to_string())?;
                Ok(self.dls(limit))
            }
            Algorithm::Greedy => {
                let h = heuristic.ok_or("a heuristic is required for greedy".to_string())?;
                Ok(self.greedy(h))
            }
            Algorithm::AStar => {
                let h = heuristic.ok_or("a heuristic is required for a*".to_string())?;
                Ok(self.astar(h))
            }
            Algorithm::IdaStar => {
                let h = heuristic.ok_or("a heuristic is required for ida*".to_string())?;
                Ok(self.idastar(h))
            }
        }
    }

    /// Breadth-first search. Admits every child, so on unit-cost moves the
    /// first path found is a shortest one.
    pub fn bfs(&mut self) -> SearchResult {
        self.frontier_search(Algorithm::Bfs, None, PopDiscipline::Fifo, None)
    }

    /// Depth-first search, capped at the hard depth ceiling so one branch
    /// cannot swallow the run.
    pub fn dfs(&mut self) -> SearchResult {
        let limit = self.config.hard_depth_limit;
        self.frontier_search(Algorithm::Dfs, None, PopDiscipline::Lifo, Some(limit))
    }

    /// Depth-limited search: dfs with a caller-supplied admission ceiling.
    pub fn dls(&mut self, depth_limit: u32) -> SearchResult {
        self.frontier_search(Algorithm::Dls, None, PopDiscipline::Lifo, Some(depth_limit))
    }

    /// Iterative deepening: depth-limited passes with the ceiling raised
    /// from 1 to the hard depth limit. Frontier and visited set start fresh
    /// every iteration; the counters and the time budget span the whole
    /// run.
    pub fn ids(&mut self) -> SearchResult {
        let mut result = SearchResult::new(Algorithm::Ids, None);
        self.clock.reset();
        for limit in 1..=self.config.hard_depth_limit {
            match self.frontier_pass(&PopDiscipline::Lifo, Some(limit), &mut result) {
                PassStatus::Exhausted => continue,
                PassStatus::Found | PassStatus::TimedOut => break,
            }
        }
        result.elapsed = self.clock.elapsed();
        result
    }

    /// Greedy best-first: the frontier is re-sorted by the heuristic
    /// estimate alone before each pop.
    pub fn greedy(&mut self, heuristic: Heuristic) -> SearchResult {
        let limit = self.config.hard_depth_limit;
        self.frontier_search(
            Algorithm::Greedy,
            Some(heuristic),
            PopDiscipline::SortedByEstimate(heuristic),
            Some(limit),
        )
    }

    /// A*: the frontier is re-sorted by f-cost (depth plus estimate) before
    /// each pop.
    pub fn astar(&mut self, heuristic: Heuristic) -> SearchResult {
        let limit = self.config.hard_depth_limit;
        self.frontier_search(
            Algorithm::AStar,
            Some(heuristic),
            PopDiscipline::SortedByFCost(heuristic),
            Some(limit),
        )
    }

    /// Iterative-deepening A*: repeated depth-first contours bounded by an
    /// f-cost ceiling, raised each round to the smallest cost that exceeded
    /// it, until the goal is found or the bound passes the exhaustion
    /// sentinel.
    pub fn idastar(&mut self, heuristic: Heuristic) -> SearchResult {
        let mut result = SearchResult::new(Algorithm::IdaStar, Some(heuristic));
        self.clock.reset();

        let mut run = ContourRun {
            tree: SearchTree::new(self.root),
            visited: HashSet::new(),
            heuristic,
            solution: None,
        };
        let root = run.tree.root();
        let mut bound = self.goal_index.f_cost(heuristic, 0, &self.root);

        loop {
            bound = self.contour(&mut run, root, bound, 0, &mut result);
            if let Some(goal) = run.solution {
                result.found = true;
                result.goal_depth = run.tree.depth(goal) as i32;
                result.path = run.tree.path_to(goal);
                break;
            }
            if bound >= COST_SENTINEL {
                break;
            }
        }
        result.elapsed = self.clock.elapsed();
        result
    }

    fn frontier_search(
        &mut self,
        algorithm: Algorithm,
        heuristic: Option<Heuristic>,
        discipline: PopDiscipline,
        admit_limit: Option<u32>,
    ) -> SearchResult {
        let mut result = SearchResult::new(algorithm, heuristic);
        self.clock.reset();
        self.frontier_pass(&discipline, admit_limit, &mut result);
        result.elapsed = self.clock.elapsed();
        result
    }

    /// One full frontier loop from a fresh arena and visited set,
    /// accumulating into `result` (ids calls this once per iteration).
    fn frontier_pass(
        &self,
        discipline: &PopDiscipline,
        admit_limit: Option<u32>,
        result: &mut SearchResult,
    ) -> PassStatus {
        let mut tree = SearchTree::new(self.root);
        let mut visited: HashSet<Signature> = HashSet::new();
        let mut frontier: VecDeque<NodeId> = VecDeque::new();
        frontier.push_back(tree.root());

        while !frontier.is_empty() {
            if self.clock.elapsed() > self.config.time_budget {
                result.timed_out = true;
                return PassStatus::TimedOut;
            }
            if frontier.len() > result.max_frontier_size {
                result.max_frontier_size = frontier.len();
            }

            let candidate = match discipline {
                PopDiscipline::Fifo => frontier.pop_front(),
                PopDiscipline::Lifo => frontier.pop_back(),
                PopDiscipline::SortedByEstimate(h) => {
                    frontier
                        .make_contiguous()
                        .sort_by_key(|&id| self.goal_index.estimate(*h, tree.board(id)));
                    frontier.pop_front()
                }
                PopDiscipline::SortedByFCost(h) => {
                    frontier.make_contiguous().sort_by_key(|&id| {
                        self.goal_index.f_cost(*h, tree.depth(id), tree.board(id))
                    });
                    frontier.pop_front()
                }
            }
            .expect("the frontier was checked non-empty");

            result.nodes_expanded += 1;
            visited.insert(tree.board(candidate).signature());
            if tree.depth(candidate) > result.max_depth_seen {
                result.max_depth_seen = tree.depth(candidate);
            }

            if tree.board(candidate) == self.goal_index.goal() {
                result.found = true;
                result.goal_depth = tree.depth(candidate) as i32;
                result.path = tree.path_to(candidate);
                return PassStatus::Found;
            }

            for mv in MoveCode::ALL {
                if !tree.board(candidate).is_legal(mv) {
                    continue;
                }
                let child = tree.board(candidate).with_move(mv);
                if visited.contains(&child.signature()) {
                    result.duplicates_eliminated += 1;
                    continue;
                }
                if let Some(limit) = admit_limit {
                    // The ceiling gates admission only: a candidate admitted
                    // exactly at the limit is still expanded when popped.
                    if tree.depth(candidate) + 1 > limit {
                        continue;
                    }
                }
                let id = tree.spawn_child(candidate, mv);
                frontier.push_back(id);
            }
        }
        PassStatus::Exhausted
    }

    /// One bounded depth-first contour pass. Returns the smallest f-cost
    /// among descendants that exceeded `bound`, the node's own f-cost when
    /// it is the goal, or the sentinel when the subtree ran out of
    /// candidates or out of time.
    fn contour(
        &self,
        run: &mut ContourRun,
        node: NodeId,
        bound: u32,
        recursion_depth: u32,
        result: &mut SearchResult,
    ) -> u32 {
        let recursion_depth = recursion_depth + 1;
        result.nodes_expanded += 1;
        run.visited.insert(run.tree.board(node).signature());
        if run.tree.depth(node) > result.max_depth_seen {
            result.max_depth_seen = run.tree.depth(node);
        }
        if recursion_depth > result.max_recursion_depth {
            result.max_recursion_depth = recursion_depth;
        }

        if self.clock.elapsed() > self.config.contour_time_budget {
            result.timed_out = true;
            return COST_SENTINEL;
        }

        let f = self
            .goal_index
            .f_cost(run.heuristic, run.tree.depth(node), run.tree.board(node));
        if f > bound {
            return f;
        }
        if run.tree.board(node) == self.goal_index.goal() {
            run.solution = Some(node);
            return f;
        }

        let mut minimum = COST_SENTINEL;
        for mv in MoveCode::ALL {
            if !run.tree.board(node).is_legal(mv) {
                continue;
            }
            let child = run.tree.board(node).with_move(mv);
            if run.visited.contains(&child.signature()) {
                result.duplicates_eliminated += 1;
                continue;
            }
            let child_id = run.tree.spawn_child(node, mv);
            let new_f = self.contour(run, child_id, bound, recursion_depth, result);
            if run.solution.is_some() {
                // Propagate success immediately, skipping the remaining
                // siblings.
                return bound;
            }
            if new_f < minimum {
                minimum = new_f;
            }
        }
        minimum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str;
    use std::cell::Cell;

    // Classic instance, five moves from its goal.
    const ROOT: &str = "1 3 4 8 6 2 7 0 5";
    const GOAL: &str = "1 2 3 8 0 4 7 6 5";

    fn engine(root: &str, goal: &str) -> SearchEngine<WallClock> {
        SearchEngine::new(
            board_from_str(root).unwrap(),
            board_from_str(goal).unwrap(),
            EngineConfig::default(),
        )
    }

    /// Plain queue-based shortest-path oracle, independent of the engine.
    fn oracle_depth(root: &Board, goal: &Board) -> Option<u32> {
        let mut visited: HashSet<Signature> = HashSet::new();
        let mut queue: VecDeque<(Board, u32)> = VecDeque::new();
        visited.insert(root.signature());
        queue.push_back((*root, 0));
        while let Some((board, depth)) = queue.pop_front() {
            if board == *goal {
                return Some(depth);
            }
            for mv in MoveCode::ALL {
                if !board.is_legal(mv) {
                    continue;
                }
                let child = board.with_move(mv);
                if visited.insert(child.signature()) {
                    queue.push_back((child, depth + 1));
                }
            }
        }
        None
    }

    /// Clock that advances a fixed amount every time it is polled, so
    /// timeout paths run deterministically.
    struct TickingClock {
        per_poll: Duration,
        polls: Cell<u32>,
    }

    impl TickingClock {
        fn new(per_poll: Duration) -> Self {
            TickingClock {
                per_poll,
                polls: Cell::new(0),
            }
        }
    }

    impl SearchClock for TickingClock {
        fn elapsed(&self) -> Duration {
            let polls = self.polls.get() + 1;
            self.polls.set(polls);
            self.per_poll * polls
        }

        fn reset(&mut self) {
            self.polls.set(0);
        }
    }

    #[test]
    fn bfs_matches_the_oracle_on_the_classic_instance() {
        let mut engine = engine(ROOT, GOAL);
        let oracle = oracle_depth(engine.root(), engine.goal()).unwrap();
        let result = engine.bfs();

        assert!(result.found);
        assert!(!result.timed_out);
        assert_eq!(result.goal_depth, oracle as i32);
        assert_eq!(result.path_len(), oracle as usize);
        assert_eq!(result.path.first().unwrap().0, *engine.root());
        assert_eq!(result.path.last().unwrap().0, *engine.goal());
        assert!(result.max_depth_seen >= oracle);
        assert!(result.max_frontier_size > 0);
    }

    #[test]
    fn bfs_path_moves_replay_to_the_goal() {
        let mut engine = engine(ROOT, GOAL);
        let result = engine.bfs();

        let mut board = *engine.root();
        for (expected, mv) in result.path.iter().skip(1) {
            board.apply_move(mv.expect("every non-root path entry carries a move"));
            assert_eq!(board, *expected);
        }
        assert_eq!(board, *engine.goal());
    }

    #[test]
    fn bfs_counts_duplicates_on_a_diamond_revisit() {
        // The empty move sequence and RIGHT, LEFT both reach the root
        // configuration, so bfs regenerates an expanded state and must
        // eliminate at least one duplicate before reaching the goal.
        let mut engine = engine("0 1 2 3 4 5 6 7 8", "1 4 2 3 7 5 6 0 8");
        let result = engine.bfs();
        assert!(result.found);
        assert!(result.duplicates_eliminated > 0);
    }

    #[test]
    fn bfs_on_a_root_that_is_already_the_goal() {
        let mut engine = engine(GOAL, GOAL);
        let result = engine.bfs();
        assert!(result.found);
        assert_eq!(result.goal_depth, 0);
        assert_eq!(result.path_len(), 0);
        assert_eq!(result.nodes_expanded, 1);
        assert_eq!(result.max_frontier_size, 1);
    }

    #[test]
    fn ids_agrees_with_bfs_on_goal_depth() {
        let mut engine = engine(ROOT, GOAL);
        let bfs = engine.bfs();
        let ids = engine.ids();

        assert!(ids.found);
        assert_eq!(ids.goal_depth, bfs.goal_depth);
        assert_eq!(ids.path_len(), bfs.path_len());
    }

    #[test]
    fn astar_is_optimal_and_expands_no_more_than_bfs() {
        let mut engine = engine(ROOT, GOAL);
        let oracle = oracle_depth(engine.root(), engine.goal()).unwrap();
        let bfs = engine.bfs();

        for heuristic in [Heuristic::MisplacedTiles, Heuristic::ManhattanDistance] {
            let result = engine.astar(heuristic);
            assert!(result.found, "a* with {} failed", heuristic);
            assert_eq!(result.goal_depth, oracle as i32);
            assert!(
                result.nodes_expanded <= bfs.nodes_expanded,
                "a* with {} expanded {} nodes, bfs only {}",
                heuristic,
                result.nodes_expanded,
                bfs.nodes_expanded
            );
        }
    }

    #[test]
    fn astar_matches_the_oracle_on_scrambled_instances() {
        for seed in [3, 17, 51] {
            let root = Board::scrambled_with_seed(14, seed);
            let goal = Board::canonical();
            let mut engine =
                SearchEngine::new(root, goal, EngineConfig::default());
            let oracle = oracle_depth(&root, &goal).unwrap();
            let result = engine.astar(Heuristic::ManhattanDistance);
            assert!(result.found, "seed {} not solved", seed);
            assert_eq!(result.goal_depth, oracle as i32, "seed {} suboptimal", seed);
        }
    }

    #[test]
    fn greedy_finds_a_goal_but_not_necessarily_the_shortest_path() {
        let mut engine = engine(ROOT, GOAL);
        let oracle = oracle_depth(engine.root(), engine.goal()).unwrap();
        let result = engine.greedy(Heuristic::ManhattanDistance);

        assert!(result.found);
        assert_eq!(result.heuristic, Some(Heuristic::ManhattanDistance));
        assert!(result.goal_depth >= oracle as i32);
        assert_eq!(result.path.last().unwrap().0, *engine.goal());
    }

    #[test]
    fn dfs_reaches_the_goal_within_the_hard_ceiling() {
        let mut engine = engine(ROOT, GOAL);
        let oracle = oracle_depth(engine.root(), engine.goal()).unwrap();
        let result = engine.dfs();

        assert!(result.found);
        assert!(result.goal_depth >= oracle as i32);
        assert!(result.goal_depth <= EngineConfig::default().hard_depth_limit as i32);
    }

    #[test]
    fn dls_with_zero_limit_fails_on_a_non_goal_root() {
        let mut engine = engine(ROOT, GOAL);
        let result = engine.dls(0);

        assert!(!result.found);
        assert!(!result.timed_out);
        assert_eq!(result.goal_depth, -1);
        assert_eq!(result.nodes_expanded, 1);
        assert!(result.path.is_empty());
    }

    #[test]
    fn dls_with_a_limit_below_the_goal_depth_exhausts() {
        // The goal sits five moves down; within one move the whole space is
        // the root and its four children, none of which is the goal.
        let mut engine = engine(ROOT, GOAL);
        let result = engine.dls(1);
        assert!(!result.found);
        assert!(!result.timed_out);
    }

    #[test]
    fn dls_with_a_sufficient_limit_finds_the_goal() {
        let goal = Board::canonical();
        let root = goal.with_move(MoveCode::Down).with_move(MoveCode::Right);
        let mut engine = SearchEngine::new(root, goal, EngineConfig::default());
        let result = engine.dls(2);
        assert!(result.found);
        assert_eq!(result.goal_depth, 2);
    }

    #[test]
    fn idastar_on_a_root_that_is_already_the_goal() {
        let mut engine = engine(GOAL, GOAL);
        let result = engine.idastar(Heuristic::MisplacedTiles);
        assert!(result.found);
        assert_eq!(result.goal_depth, 0);
        assert_eq!(result.path_len(), 0);
        assert_eq!(result.max_recursion_depth, 1);
    }

    #[test]
    fn idastar_solves_shallow_instances_with_both_heuristics() {
        let goal = Board::canonical();
        let root = goal
            .with_move(MoveCode::Right)
            .with_move(MoveCode::Down);

        for heuristic in [Heuristic::MisplacedTiles, Heuristic::ManhattanDistance] {
            let mut engine = SearchEngine::new(root, goal, EngineConfig::default());
            let result = engine.idastar(heuristic);
            assert!(result.found, "ida* with {} failed", heuristic);
            assert_eq!(result.goal_depth, 2);
            assert_eq!(result.path_len(), 2);
            assert!(result.max_recursion_depth >= 3);
        }
    }

    #[test]
    fn idastar_reports_exhaustion_on_an_unsolvable_instance() {
        // Swapping two tiles flips the permutation parity, which no blank
        // walk can undo.
        let mut engine = engine("0 2 1 3 4 5 6 7 8", "0 1 2 3 4 5 6 7 8");
        let result = engine.idastar(Heuristic::ManhattanDistance);
        assert!(!result.found);
        assert!(!result.timed_out);
        assert_eq!(result.goal_depth, -1);
    }

    #[test]
    fn scrambled_instances_stay_solvable() {
        for seed in [1, 2, 42] {
            let root = Board::scrambled_with_seed(30, seed);
            let mut engine =
                SearchEngine::new(root, Board::canonical(), EngineConfig::default());
            let result = engine.bfs();
            assert!(result.found, "seed {} produced an unsolvable board", seed);
            assert!(result.goal_depth <= 30);
        }
    }

    #[test]
    fn frontier_search_times_out_against_the_budget() {
        let config = EngineConfig::default();
        let clock = TickingClock::new(config.time_budget + Duration::from_secs(1));
        let mut engine = SearchEngine::with_clock(
            board_from_str(ROOT).unwrap(),
            board_from_str(GOAL).unwrap(),
            config,
            clock,
        );
        let result = engine.bfs();

        assert!(!result.found);
        assert!(result.timed_out);
        assert_eq!(result.nodes_expanded, 0);
    }

    #[test]
    fn idastar_times_out_against_the_contour_budget() {
        let config = EngineConfig::default();
        let clock = TickingClock::new(config.contour_time_budget + Duration::from_secs(1));
        let mut engine = SearchEngine::with_clock(
            board_from_str(ROOT).unwrap(),
            board_from_str(GOAL).unwrap(),
            config,
            clock,
        );
        let result = engine.idastar(Heuristic::MisplacedTiles);

        assert!(!result.found);
        assert!(result.timed_out);
        assert_eq!(result.nodes_expanded, 1);
    }

    #[test]
    fn counters_reset_between_runs_on_one_engine() {
        let mut engine = engine(ROOT, GOAL);
        let first = engine.bfs();
        engine.dfs();
        let again = engine.bfs();

        assert_eq!(first.nodes_expanded, again.nodes_expanded);
        assert_eq!(first.max_frontier_size, again.max_frontier_size);
        assert_eq!(first.duplicates_eliminated, again.duplicates_eliminated);
        assert_eq!(first.goal_depth, again.goal_depth);
    }

    #[test]
    fn run_validates_required_parameters() {
        let mut engine = engine(ROOT, GOAL);
        assert!(engine.run(Algorithm::Dls, None, None).is_err());
        assert!(engine.run(Algorithm::Greedy, None, Some(25)).is_err());
        assert!(engine.run(Algorithm::AStar, None, Some(25)).is_err());
        assert!(engine.run(Algorithm::IdaStar, None, Some(25)).is_err());

        let ok = engine.run(Algorithm::Bfs, None, None).unwrap();
        assert!(ok.found);
        let ok = engine
            .run(Algorithm::AStar, Some(Heuristic::ManhattanDistance), None)
            .unwrap();
        assert!(ok.found);
    }
}
