use clap::Parser;
use eightpuzzle_solver::engine::Board;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Generates a solvable 8-puzzle instance by random-walking the blank away
/// from the canonical configuration. Every move is reversible, so the
/// printed layout can always be solved back to 0 1 2 / 3 4 5 / 6 7 8.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of random legal moves to apply
    #[clap(short, long, default_value_t = 30)]
    moves: u32,

    /// Seed for the walk; omit for a fresh instance every run
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut board = Board::canonical();
    board.random_walk(args.moves, &mut rng);

    print!("{}", board);
    let layout: Vec<String> = board.tiles().iter().map(u8::to_string).collect();
    println!("{}", layout.join(" "));
}
