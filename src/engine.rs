//! Core board model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `MoveCode`: the four blank-tile moves, encoded as bits of a 4-bit mask.
//! - `Board`: one 3x3 tile configuration with a cached blank position,
//!   legal-move mask and canonical signature.
//! - `SearchTree`: an arena of boards, each linked to the board it was
//!   derived from by a single move, used for path reconstruction.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Width and height of the puzzle grid.
///
/// The board logic is written against this constant, but the supported
/// behavior is fixed at 3 (the 8-puzzle).
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// A single move of the blank tile.
///
/// The discriminants are single bits, so one `u8` can describe every move
/// currently legal on a board (see [`Board::legal_moves`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveCode {
    /// Move the blank up one row.
    Up = 1,
    /// Move the blank right one column.
    Right = 2,
    /// Move the blank down one row.
    Down = 4,
    /// Move the blank left one column.
    Left = 8,
}

impl MoveCode {
    /// Every move, in increasing bit order. Node expansion iterates in this
    /// order, so sibling children are always generated UP, RIGHT, DOWN, LEFT.
    pub const ALL: [MoveCode; 4] = [
        MoveCode::Up,
        MoveCode::Right,
        MoveCode::Down,
        MoveCode::Left,
    ];

    /// The mask bit for this move.
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// The move that undoes this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use eightpuzzle_solver::engine::MoveCode;
    /// assert_eq!(MoveCode::Up.opposite(), MoveCode::Down);
    /// assert_eq!(MoveCode::Left.opposite(), MoveCode::Right);
    /// ```
    pub fn opposite(self) -> MoveCode {
        match self {
            MoveCode::Up => MoveCode::Down,
            MoveCode::Right => MoveCode::Left,
            MoveCode::Down => MoveCode::Up,
            MoveCode::Left => MoveCode::Right,
        }
    }
}

impl fmt::Display for MoveCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            MoveCode::Up => "UP",
            MoveCode::Right => "RIGHT",
            MoveCode::Down => "DOWN",
            MoveCode::Left => "LEFT",
        };
        write!(f, "{}", s)
    }
}

/// Canonical key for a tile arrangement: the nine cell values packed
/// row-major, 4 bits per cell. Every value fits in its nibble, so distinct
/// arrangements always produce distinct signatures.
pub type Signature = u64;

fn signature_of(tiles: &[u8; CELLS]) -> Signature {
    tiles.iter().fold(0u64, |sig, &t| (sig << 4) | t as u64)
}

/// Mask of the moves legal for a given blank position: UP unless the blank
/// is in the top row, RIGHT unless in the rightmost column, and so on.
fn legal_moves_for(blank: u8) -> u8 {
    let row = blank as usize / BOARD_SIZE;
    let col = blank as usize % BOARD_SIZE;
    let mut mask = 0;
    if row != 0 {
        mask |= MoveCode::Up.bit();
    }
    if col != BOARD_SIZE - 1 {
        mask |= MoveCode::Right.bit();
    }
    if row != BOARD_SIZE - 1 {
        mask |= MoveCode::Down.bit();
    }
    if col != 0 {
        mask |= MoveCode::Left.bit();
    }
    mask
}

/// One configuration of the 3x3 sliding-tile grid.
///
/// `tiles` holds the integers 0..=8 exactly once each in row-major order,
/// with 0 denoting the blank. The blank position, the legal-move mask and
/// the signature are caches derived from `tiles`; every mutation refreshes
/// them before returning, so they are never stale.
///
/// Two boards are equal iff their tile arrangements match cell-for-cell,
/// and equal boards always share a signature (and therefore a hash).
#[derive(Clone, Copy, Debug)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: u8,
    legal_moves: u8,
    signature: Signature,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.signature.hash(state);
    }
}

impl Board {
    /// The canonical configuration:
    ///
    /// ```text
    /// 0 1 2
    /// 3 4 5
    /// 6 7 8
    /// ```
    ///
    /// Random walks start here, so every scrambled instance stays solvable
    /// with respect to this configuration.
    pub fn canonical() -> Self {
        let mut tiles = [0u8; CELLS];
        for (k, tile) in tiles.iter_mut().enumerate() {
            *tile = k as u8;
        }
        Board::from_parts(tiles, 0)
    }

    /// Builds a board from a caller-supplied layout.
    ///
    /// The layout must contain the integers 0..=8 exactly once each, in
    /// row-major order, with 0 marking the blank. Anything else is rejected
    /// here, before any search can start.
    ///
    /// # Examples
    ///
    /// ```
    /// use eightpuzzle_solver::engine::Board;
    /// let board = Board::from_layout(&[1, 2, 3, 8, 0, 4, 7, 6, 5]).unwrap();
    /// assert_eq!(board.blank(), 4);
    ///
    /// assert!(Board::from_layout(&[1, 1, 3, 8, 0, 4, 7, 6, 5]).is_err());
    /// ```
    pub fn from_layout(layout: &[u8]) -> Result<Self, String> {
        if layout.len() != CELLS {
            return Err(format!(
                "expected {} tile values, found {}",
                CELLS,
                layout.len()
            ));
        }
        let mut seen = [false; CELLS];
        for &tile in layout {
            if tile as usize >= CELLS {
                return Err(format!(
                    "tile value {} out of range 0..={}",
                    tile,
                    CELLS - 1
                ));
            }
            if seen[tile as usize] {
                return Err(format!("tile value {} appears more than once", tile));
            }
            seen[tile as usize] = true;
        }
        let mut tiles = [0u8; CELLS];
        tiles.copy_from_slice(layout);
        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .expect("a full permutation of 0..=8 contains the blank") as u8;
        Ok(Board::from_parts(tiles, blank))
    }

    fn from_parts(tiles: [u8; CELLS], blank: u8) -> Self {
        Board {
            tiles,
            blank,
            legal_moves: legal_moves_for(blank),
            signature: signature_of(&tiles),
        }
    }

    /// The tile values in row-major order.
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Linear position (0..=8) of the blank.
    pub fn blank(&self) -> usize {
        self.blank as usize
    }

    /// Mask of the moves currently legal, one [`MoveCode`] bit each.
    pub fn legal_moves(&self) -> u8 {
        self.legal_moves
    }

    /// Whether `mv` is legal from the current blank position.
    ///
    /// # Examples
    ///
    /// ```
    /// use eightpuzzle_solver::engine::{Board, MoveCode};
    /// let board = Board::canonical();
    /// assert!(board.is_legal(MoveCode::Right));
    /// assert!(!board.is_legal(MoveCode::Up));
    /// ```
    pub fn is_legal(&self, mv: MoveCode) -> bool {
        self.legal_moves & mv.bit() != 0
    }

    /// Canonical key identifying this tile arrangement.
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Moves the blank in the indicated direction, swapping it with the
    /// adjacent tile. Exactly those two cells change; the blank position,
    /// legal-move mask and signature are refreshed before returning.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is not in the legal-move mask. Applying an illegal
    /// move is a programming error in the caller, not a recoverable
    /// condition.
    pub fn apply_move(&mut self, mv: MoveCode) {
        assert!(
            self.is_legal(mv),
            "move {} is not legal with the blank at {}",
            mv,
            self.blank
        );
        let from = self.blank as usize;
        let to = match mv {
            MoveCode::Up => from - BOARD_SIZE,
            MoveCode::Right => from + 1,
            MoveCode::Down => from + BOARD_SIZE,
            MoveCode::Left => from - 1,
        };
        self.tiles[from] = self.tiles[to];
        self.tiles[to] = 0;
        self.blank = to as u8;
        self.legal_moves = legal_moves_for(self.blank);
        self.signature = signature_of(&self.tiles);
    }

    /// Returns a copy of this board with `mv` applied; `self` is untouched.
    pub fn with_move(&self, mv: MoveCode) -> Board {
        let mut child = *self;
        child.apply_move(mv);
        child
    }

    /// Applies `count` random legal moves, each chosen uniformly among the
    /// moves legal at that point. Every move is reversible, so a walk from a
    /// solvable configuration stays solvable.
    pub fn random_walk(&mut self, count: u32, rng: &mut impl Rng) {
        for _ in 0..count {
            let legal: Vec<MoveCode> = MoveCode::ALL
                .into_iter()
                .filter(|&mv| self.is_legal(mv))
                .collect();
            self.apply_move(legal[rng.gen_range(0..legal.len())]);
        }
    }

    /// The canonical board scrambled by `count` random moves.
    ///
    /// Uses a fixed internal seed so repeated calls produce the same
    /// instance, which keeps tests and benchmark runs reproducible.
    pub fn scrambled(count: u32) -> Board {
        Board::scrambled_with_seed(count, 271_828)
    }

    /// The canonical board scrambled by `count` random moves drawn from a
    /// generator seeded with `seed`. The same seed always produces the same
    /// instance; different seeds generally differ.
    pub fn scrambled_with_seed(count: u32, seed: u64) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::canonical();
        board.random_walk(count, &mut rng);
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                write!(f, "{} ", self.tiles[row * BOARD_SIZE + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Identifier of a node in a [`SearchTree`].
pub type NodeId = usize;

struct Node {
    board: Board,
    parent: Option<NodeId>,
    depth: u32,
    via: Option<MoveCode>,
}

/// Arena of boards, each linked to the board it was derived from by one
/// move.
///
/// The links form a strictly acyclic chain: children reference parents by
/// id, parents never reference children. The tree exists so a finished
/// search can walk back from the goal node to the root; search bookkeeping
/// (frontier, visited set) lives elsewhere. Ids increase monotonically and
/// are never reused within one tree.
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    /// Creates a tree holding only `root`, at depth 0.
    pub fn new(root: Board) -> Self {
        SearchTree {
            nodes: vec![Node {
                board: root,
                parent: None,
                depth: 0,
                via: None,
            }],
        }
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        0
    }

    /// The board stored at `id`.
    pub fn board(&self, id: NodeId) -> &Board {
        &self.nodes[id].board
    }

    /// Path length from the root to `id` (the root has depth 0).
    pub fn depth(&self, id: NodeId) -> u32 {
        self.nodes[id].depth
    }

    /// Number of nodes spawned so far, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Spawns a child of `parent` by applying one legal move to a copy of
    /// its board. The parent is never mutated.
    pub fn spawn_child(&mut self, parent: NodeId, mv: MoveCode) -> NodeId {
        let board = self.nodes[parent].board.with_move(mv);
        let depth = self.nodes[parent].depth + 1;
        self.nodes.push(Node {
            board,
            parent: Some(parent),
            depth,
            via: Some(mv),
        });
        self.nodes.len() - 1
    }

    /// Walks parent links from `id` back to the root and returns the
    /// root-to-`id` sequence, each board tagged with the move that produced
    /// it (`None` for the root). The move count along the path is
    /// `path.len() - 1`.
    pub fn path_to(&self, id: NodeId) -> Vec<(Board, Option<MoveCode>)> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(node_id) = cursor {
            let node = &self.nodes[node_id];
            path.push((node.board, node.via));
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}
