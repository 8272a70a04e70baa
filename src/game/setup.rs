use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SetupError;

use super::{Board, CandySet};

/// Number of randomized moves used to scramble a freshly filled board.
pub const SHUFFLE_MOVES: usize = 1000;

/// Each column starts filled to a percentage of its height drawn from this
/// range, so a column is never completely full before scrambling.
const FILL_PERCENT: std::ops::Range<u32> = 75..100;

/// Build the board for a game of `(columns, rows, seed)`. The same inputs
/// always produce the same board, so a seed is enough to replay a game.
///
/// Every column is first filled with a single random candy type to a random
/// fraction of its height, then [`SHUFFLE_MOVES`] legal moves mix the
/// candies across columns. Starting from single-typed columns keeps the win
/// state reachable.
pub fn generate(
    columns: usize,
    rows: usize,
    candies: &CandySet,
    seed: u64,
) -> Result<Board, SetupError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(columns, rows)?;

    let placed = fill(&mut board, candies, &mut rng);

    // Fill leaves every column strictly below its height, so the board
    // always keeps free capacity. The scramble rejection loops rely on it.
    assert!(
        placed < columns * rows,
        "fill left no free capacity on the board"
    );

    // A legal scramble move needs a non-empty source and a distinct
    // destination. With one column, or with nothing placed (possible when
    // rows == 1, where every fill count truncates to zero), no such move
    // exists.
    if columns >= 2 && placed > 0 {
        scramble(&mut board, &mut rng, SHUFFLE_MOVES);
    }

    Ok(board)
}

/// Fill each column with a single candy type to a random fraction of its
/// height. Returns the number of candies placed.
fn fill(board: &mut Board, candies: &CandySet, rng: &mut StdRng) -> usize {
    let mut placed = 0;
    for index in 0..board.column_count() {
        let percent = rng.random_range(FILL_PERCENT);
        let count = (percent as f64 / 100.0 * board.height() as f64) as usize;
        let candy = match candies.candy(rng.random_range(0..candies.len())) {
            Some(candy) => candy,
            None => unreachable!("candy index drawn outside the alphabet"),
        };

        let Some(column) = board.column_mut(index) else {
            unreachable!("column index {index} outside the board");
        };
        for _ in 0..count {
            if !column.try_push(candy) {
                unreachable!("fill pushed past the column height");
            }
        }
        placed += count;
    }
    placed
}

/// Perform `moves` randomized legal moves: pop the top candy of a random
/// non-empty column and push it onto a different, non-full column.
fn scramble(board: &mut Board, rng: &mut StdRng, moves: usize) {
    let count = board.column_count();
    for _ in 0..moves {
        let source = loop {
            let candidate = rng.random_range(0..count);
            if board.column(candidate).is_some_and(|c| !c.is_empty()) {
                break candidate;
            }
        };
        let destination = loop {
            let candidate = rng.random_range(0..count);
            if candidate == source {
                continue;
            }
            if board.column(candidate).is_some_and(|c| !c.is_full()) {
                break candidate;
            }
        };

        let Some(candy) = board.column_mut(source).and_then(|c| c.pop()) else {
            unreachable!("scramble source column was checked non-empty");
        };
        let pushed = board
            .column_mut(destination)
            .is_some_and(|c| c.try_push(candy));
        if !pushed {
            unreachable!("scramble destination column was checked for room");
        }
    }
}
