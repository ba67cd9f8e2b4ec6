use clap::{Parser, ValueEnum};
use eightpuzzle_solver::engine::Board;
use eightpuzzle_solver::heuristics::Heuristic;
use eightpuzzle_solver::solver::{
    Algorithm, EngineConfig, SearchEngine, SearchResult, WallClock,
};
use eightpuzzle_solver::utils::board_from_tokens;
use std::process;

/// Goal used when `-g` is not given, the standard 8-puzzle target:
/// 1 2 3 / 8 0 4 / 7 6 5.
const DEFAULT_GOAL: [&str; 9] = ["1", "2", "3", "8", "0", "4", "7", "6", "5"];

#[derive(Parser, Debug)]
#[clap(author, version, about = "8-puzzle state-space search", long_about = None)]
struct Args {
    /// Search algorithm to run
    #[clap(short, long, value_enum)]
    algorithm: AlgorithmArg,

    /// Root board: nine tile values 0-8, e.g. -r 1 3 4 8 6 2 7 0 5
    #[clap(short, long, num_args = 9, required = true)]
    root: Vec<String>,

    /// Goal board: nine tile values 0-8
    #[clap(short, long, num_args = 9)]
    goal: Option<Vec<String>>,

    /// Depth limit for dls (ignored by the other algorithms)
    #[clap(short, long, default_value_t = 25)]
    depth_limit: u32,

    /// Heuristic for greedy, a* and ida*
    #[clap(short = 'f', long, value_enum)]
    heuristic: Option<HeuristicArg>,

    /// Print the boards along the solution path instead of the move labels
    #[clap(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlgorithmArg {
    Bfs,
    Dfs,
    Dls,
    Ids,
    Greedy,
    #[value(name = "a*", alias = "astar")]
    AStar,
    #[value(name = "ida*", alias = "idastar")]
    IdaStar,
    /// Run every algorithm (both heuristics for the informed ones)
    All,
}

impl AlgorithmArg {
    fn to_algorithm(self) -> Option<Algorithm> {
        match self {
            AlgorithmArg::Bfs => Some(Algorithm::Bfs),
            AlgorithmArg::Dfs => Some(Algorithm::Dfs),
            AlgorithmArg::Dls => Some(Algorithm::Dls),
            AlgorithmArg::Ids => Some(Algorithm::Ids),
            AlgorithmArg::Greedy => Some(Algorithm::Greedy),
            AlgorithmArg::AStar => Some(Algorithm::AStar),
            AlgorithmArg::IdaStar => Some(Algorithm::IdaStar),
            AlgorithmArg::All => None,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HeuristicArg {
    /// Number of misplaced tiles
    H1,
    /// Manhattan distance
    H2,
}

impl HeuristicArg {
    fn to_heuristic(self) -> Heuristic {
        match self {
            HeuristicArg::H1 => Heuristic::MisplacedTiles,
            HeuristicArg::H2 => Heuristic::ManhattanDistance,
        }
    }
}

fn main() {
    let args = Args::parse();

    let root = parse_board(&args.root, "root");
    let goal = match &args.goal {
        Some(tokens) => parse_board(tokens, "goal"),
        None => parse_board(&DEFAULT_GOAL, "goal"),
    };

    if args.verbose {
        println!("Root");
        print!("{}", root);
        println!("Goal");
        print!("{}", goal);
        println!("------------------------------");
    }

    let mut engine = SearchEngine::new(root, goal, EngineConfig::default());
    match args.algorithm.to_algorithm() {
        Some(algorithm) => {
            let heuristic = args.heuristic.map(HeuristicArg::to_heuristic);
            report(&mut engine, algorithm, heuristic, args.depth_limit, args.verbose);
        }
        None => run_all(&mut engine, args.depth_limit, args.verbose),
    }
}

fn parse_board<S: AsRef<str>>(tokens: &[S], which: &str) -> Board {
    match board_from_tokens(tokens) {
        Ok(board) => board,
        Err(message) => {
            eprintln!("invalid {} board: {}", which, message);
            process::exit(1);
        }
    }
}

/// Benchmark mode: every algorithm against the same instance, the informed
/// ones once per heuristic.
fn run_all(engine: &mut SearchEngine<WallClock>, depth_limit: u32, verbose: bool) {
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dls, Algorithm::Ids] {
        report(engine, algorithm, None, depth_limit, verbose);
    }
    for algorithm in [Algorithm::Greedy, Algorithm::AStar, Algorithm::IdaStar] {
        for heuristic in [Heuristic::MisplacedTiles, Heuristic::ManhattanDistance] {
            report(engine, algorithm, Some(heuristic), depth_limit, verbose);
        }
    }
}

fn report(
    engine: &mut SearchEngine<WallClock>,
    algorithm: Algorithm,
    heuristic: Option<Heuristic>,
    depth_limit: u32,
    verbose: bool,
) {
    match engine.run(algorithm, heuristic, Some(depth_limit)) {
        Ok(result) => {
            print_path(&result, verbose);
            print_stats(&result);
        }
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    }
}

fn print_path(result: &SearchResult, verbose: bool) {
    if !result.found {
        return;
    }
    println!("==============================");
    println!("Path is given below:");
    if verbose {
        for (board, mv) in &result.path {
            if let Some(mv) = mv {
                println!("{}", mv);
            }
            print!("{}", board);
            println!();
        }
    } else {
        let moves: Vec<String> = result
            .path
            .iter()
            .filter_map(|(_, mv)| mv.map(|m| m.to_string()))
            .collect();
        println!("{}", moves.join(" "));
    }
    println!("------------------------------");
}

fn print_stats(result: &SearchResult) {
    println!("Algorithm               = {}", result.algorithm);
    match result.heuristic {
        Some(heuristic) => println!("Heuristic               = {}", heuristic),
        None => println!("Heuristic               = None"),
    }
    println!(
        "Time taken              = {:.6}",
        result.elapsed.as_secs_f64()
    );
    println!("Nodes expanded          = {}", result.nodes_expanded);
    println!("Max. frontier size      = {}", result.max_frontier_size);
    println!("Duplicates eliminated   = {}", result.duplicates_eliminated);
    println!("Max. depth searched     = {}", result.max_depth_seen);
    println!("Goal found              = {}", result.found);
    println!("Goal depth/Path length  = {}", result.goal_depth);
    if result.algorithm == Algorithm::IdaStar {
        println!("Max. recursion depth    = {}", result.max_recursion_depth);
    }
    if result.timed_out {
        println!("Time expired");
    }
    println!("==============================");
}
