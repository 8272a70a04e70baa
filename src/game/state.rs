use crate::error::SetupError;

use super::{setup, Board, CandySet};

/// What a call to [`GameState::select_column`] accomplished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The column was recorded as the move's source; pick a destination next.
    SourceSelected,
    /// A candy moved from the pending source onto the selected column.
    Moved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    InvalidColumn,
    SourceEmpty,
    ColumnFull,
}

/// A game in progress: the board plus the two-step selection state, the
/// move counter, and the win flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    pending_source: Option<usize>,
    moves: u32,
    won: bool,
}

impl GameState {
    /// Wrap an existing board. The win flag reflects the board as given.
    pub fn new(board: Board) -> Self {
        let won = board.all_uniform();
        GameState {
            board,
            pending_source: None,
            moves: 0,
            won,
        }
    }

    /// Generate, scramble, and wrap a fresh board for the given seed.
    pub fn from_seed(
        columns: usize,
        rows: usize,
        candies: &CandySet,
        seed: u64,
    ) -> Result<Self, SetupError> {
        Ok(Self::new(setup::generate(columns, rows, candies, seed)?))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The column waiting to be used as a move's source, if one is pending.
    pub fn pending_source(&self) -> Option<usize> {
        self.pending_source
    }

    /// Number of completed moves so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// True when every column is uniform.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Feed one column selection into the two-step move protocol.
    ///
    /// The first selection records the move's source and mutates nothing.
    /// The second selection moves the source's top candy onto the selected
    /// column, counts the move, and re-evaluates the win flag. Any error
    /// leaves every column untouched and resets the protocol so the next
    /// selection picks a source again.
    pub fn select_column(&mut self, index: usize) -> Result<SelectOutcome, MoveError> {
        let Some(source) = self.pending_source.take() else {
            if index >= self.board.column_count() {
                return Err(MoveError::InvalidColumn);
            }
            self.pending_source = Some(index);
            return Ok(SelectOutcome::SourceSelected);
        };

        if index >= self.board.column_count() {
            return Err(MoveError::InvalidColumn);
        }
        if self.board.column(source).is_some_and(|c| c.is_empty()) {
            return Err(MoveError::SourceEmpty);
        }
        // Check the destination before touching the source so a rejected
        // move cannot lose a candy. Source and destination may be the same
        // column: popping frees the slot the push lands in.
        if index != source && self.board.column(index).is_some_and(|c| c.is_full()) {
            return Err(MoveError::ColumnFull);
        }

        let candy = match self.board.column_mut(source).and_then(|c| c.pop()) {
            Some(candy) => candy,
            None => unreachable!("move source was checked non-empty"),
        };
        let pushed = self
            .board
            .column_mut(index)
            .is_some_and(|c| c.try_push(candy));
        if !pushed {
            unreachable!("move destination was checked for room");
        }

        self.moves += 1;
        self.won = self.board.all_uniform();
        Ok(SelectOutcome::Moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Candy;

    fn candy(index: usize) -> Candy {
        CandySet::default().candy(index).unwrap()
    }

    /// Build a board from bottom-to-top candy indices per column.
    fn board_from(columns: &[&[usize]], height: usize) -> Board {
        let mut board = Board::new(columns.len(), height).unwrap();
        for (index, contents) in columns.iter().enumerate() {
            for &c in contents.iter() {
                assert!(board.column_mut(index).unwrap().try_push(candy(c)));
            }
        }
        board
    }

    #[test]
    fn test_source_selection_mutates_nothing() {
        let mut game = GameState::new(board_from(&[&[0, 1], &[]], 3));
        let before = game.board().clone();

        assert_eq!(game.select_column(0), Ok(SelectOutcome::SourceSelected));
        assert_eq!(game.pending_source(), Some(0));
        assert_eq!(game.board(), &before);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_move_transfers_top_candy() {
        let mut game = GameState::new(board_from(&[&[0, 1], &[]], 3));

        assert_eq!(game.select_column(0), Ok(SelectOutcome::SourceSelected));
        assert_eq!(game.select_column(1), Ok(SelectOutcome::Moved));

        assert_eq!(game.board().column(0).unwrap().peek(0), Some(candy(0)));
        assert_eq!(game.board().column(1).unwrap().peek(0), Some(candy(1)));
        assert_eq!(game.moves(), 1);
        assert_eq!(game.pending_source(), None);
    }

    #[test]
    fn test_same_column_move_is_a_board_noop_but_counts() {
        let mut game = GameState::new(board_from(&[&[0, 1], &[2]], 3));
        let before = game.board().clone();
        let won_before = game.is_won();

        assert_eq!(game.select_column(0), Ok(SelectOutcome::SourceSelected));
        assert_eq!(game.select_column(0), Ok(SelectOutcome::Moved));

        assert_eq!(game.board(), &before);
        assert_eq!(game.moves(), 1);
        assert_eq!(game.is_won(), won_before);
        assert_eq!(game.pending_source(), None);
    }

    #[test]
    fn test_empty_source_is_recoverable() {
        let mut game = GameState::new(board_from(&[&[0], &[]], 3));
        let before = game.board().clone();

        assert_eq!(game.select_column(1), Ok(SelectOutcome::SourceSelected));
        assert_eq!(game.select_column(0), Err(MoveError::SourceEmpty));

        assert_eq!(game.board(), &before);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.pending_source(), None);
    }

    #[test]
    fn test_full_destination_is_recoverable() {
        let mut game = GameState::new(board_from(&[&[0], &[1, 1, 1]], 3));
        let before = game.board().clone();

        assert_eq!(game.select_column(0), Ok(SelectOutcome::SourceSelected));
        assert_eq!(game.select_column(1), Err(MoveError::ColumnFull));

        assert_eq!(game.board(), &before);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.pending_source(), None);
    }

    #[test]
    fn test_full_column_accepts_its_own_top_back() {
        // Source == destination on a full column: the pop frees the slot.
        let mut game = GameState::new(board_from(&[&[0, 1, 1], &[0]], 3));
        let before = game.board().clone();

        assert_eq!(game.select_column(0), Ok(SelectOutcome::SourceSelected));
        assert_eq!(game.select_column(0), Ok(SelectOutcome::Moved));

        assert_eq!(game.board(), &before);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_invalid_source_rejected() {
        let mut game = GameState::new(board_from(&[&[0], &[]], 3));

        assert_eq!(game.select_column(2), Err(MoveError::InvalidColumn));
        assert_eq!(game.pending_source(), None);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_invalid_destination_resets_protocol() {
        let mut game = GameState::new(board_from(&[&[0], &[]], 3));
        let before = game.board().clone();

        assert_eq!(game.select_column(0), Ok(SelectOutcome::SourceSelected));
        assert_eq!(game.select_column(9), Err(MoveError::InvalidColumn));

        assert_eq!(game.board(), &before);
        assert_eq!(game.pending_source(), None);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_sorting_move_sets_win_flag() {
        // Column 1 holds [B, A]; moving the A onto column 0 sorts the board.
        let mut game = GameState::new(board_from(&[&[0], &[1, 0]], 2));
        assert!(!game.is_won());

        assert_eq!(game.select_column(1), Ok(SelectOutcome::SourceSelected));
        assert_eq!(game.select_column(0), Ok(SelectOutcome::Moved));

        assert!(game.is_won());
        assert!(game.board().all_uniform());
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_win_flag_tracks_board_after_further_moves() {
        // The engine keeps accepting moves after a win; the flag always
        // mirrors the board.
        let mut game = GameState::new(board_from(&[&[0, 0], &[1]], 2));
        assert!(game.is_won());

        assert_eq!(game.select_column(0), Ok(SelectOutcome::SourceSelected));
        assert_eq!(game.select_column(1), Ok(SelectOutcome::Moved));

        assert!(!game.is_won());
        assert!(!game.board().all_uniform());
    }

    #[test]
    fn test_from_seed_matches_generate() {
        let candies = CandySet::default();
        let game = GameState::from_seed(8, 5, &candies, 42).unwrap();
        let board = setup::generate(8, 5, &candies, 42).unwrap();
        assert_eq!(game.board(), &board);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.pending_source(), None);
    }
}
