use crate::engine::{Board, CELLS};

/// Parses a whitespace-separated layout string into a [`Board`].
///
/// # Examples
///
/// ```
/// use eightpuzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("1 2 3 8 0 4 7 6 5").unwrap();
/// assert_eq!(board.blank(), 4);
///
/// assert!(board_from_str("1 2 3").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, String> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    board_from_tokens(&tokens)
}

/// Parses a slice of tile tokens into a [`Board`].
///
/// Exactly nine tokens are required, each an integer with every value of
/// 0..=8 appearing once; 0 marks the blank. The error names the first
/// offending token, so a command line like `-r 1 2 x ...` is rejected with
/// its position.
pub fn board_from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Board, String> {
    if tokens.len() != CELLS {
        return Err(format!(
            "expected {} tile values, found {}",
            CELLS,
            tokens.len()
        ));
    }
    let mut layout = [0u8; CELLS];
    for (position, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        layout[position] = token.parse::<u8>().map_err(|_| {
            format!(
                "tile value {:?} at position {} is not an integer",
                token, position
            )
        })?;
    }
    Board::from_layout(&layout)
}
