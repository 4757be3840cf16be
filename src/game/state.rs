use super::board::{BitBoard, Coord, WIDTH};
use super::drop::{is_column_full, open_row};
use super::win::{find_four, WinCheck, RUN};
use super::Player;
use crate::error::{MoveError, ReplayError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Tied,
}

impl Outcome {
    /// `Won` and `Tied` accept no further moves
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// What a successful drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Cell the piece landed in
    pub coord: Coord,
    /// Who moved
    pub player: Player,
    /// Outcome after the move
    pub outcome: Outcome,
}

/// Turn order, board, and outcome of one game.
///
/// A new game is a new value; nothing is reset in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: BitBoard,
    active: Player,
    outcome: Outcome,
    last_move: Option<Coord>,
    win_check: WinCheck,
}

impl GameState {
    /// Create a new game: empty board, Player 1 to move
    pub fn new() -> Self {
        Self::with_win_check(WinCheck::default())
    }

    pub fn with_win_check(win_check: WinCheck) -> Self {
        GameState {
            board: BitBoard::new(),
            active: Player::One,
            outcome: Outcome::InProgress,
            last_move: None,
            win_check,
        }
    }

    /// New game with `moves` already played; see [`GameState::play_moves`].
    pub fn from_moves(moves: &str) -> Result<Self, ReplayError> {
        let mut state = GameState::new();
        state.play_moves(moves)?;
        Ok(state)
    }

    /// Play a list of 1-based column digits, e.g. `"4455"`. Whitespace is
    /// skipped; error positions index into `moves` by character. Moves before
    /// the failing one stay applied.
    pub fn play_moves(&mut self, moves: &str) -> Result<(), ReplayError> {
        for (index, ch) in moves.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let column = match ch.to_digit(10).map(|d| d as usize) {
                Some(column @ 1..=WIDTH) => column,
                _ => return Err(ReplayError::BadDigit { index, ch }),
            };
            self.drop_piece(column as isize - 1)
                .map_err(|source| ReplayError::Move {
                    index,
                    column,
                    source,
                })?;
        }
        Ok(())
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn board(&self) -> &BitBoard {
        &self.board
    }

    pub fn win_check(&self) -> WinCheck {
        self.win_check
    }

    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    pub fn move_count(&self) -> u32 {
        self.board.count()
    }

    /// Owner of a cell. Coordinates off the board are never owned.
    pub fn cell_owner(&self, row: usize, col: usize) -> Option<Player> {
        Coord::new(row, col).and_then(|coord| self.board.owner(coord))
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..WIDTH)
            .filter(|&col| !is_column_full(self.board.occupied(), col))
            .collect()
    }

    /// The four cells of the winning run, once the game is won
    pub fn winning_line(&self) -> Option<[Coord; RUN]> {
        match self.outcome {
            Outcome::Won(player) => find_four(self.board.player_mask(player)),
            _ => None,
        }
    }

    /// Drop the active player's piece into `column`.
    ///
    /// A win on the move that fills the board counts as a win, not a tie. The
    /// active player only changes when the game continues. Rejected moves
    /// leave the state untouched.
    pub fn drop_piece(&mut self, column: isize) -> Result<MoveResult, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = open_row(self.board.occupied(), column)?
            .ok_or(MoveError::ColumnFull(column as usize))?;
        let coord = Coord {
            row,
            col: column as usize,
        };
        let player = self.active;

        debug_assert!(!self.board.is_occupied(coord));
        self.board.set(player, coord)?;
        self.last_move = Some(coord);
        log::debug!("{} dropped into column {} (row {})", player.name(), coord.col, row);

        self.outcome = if self.win_check.check(self.board.player_mask(player), coord) {
            Outcome::Won(player)
        } else if self.board.is_full() {
            Outcome::Tied
        } else {
            Outcome::InProgress
        };

        match self.outcome {
            Outcome::InProgress => self.active = player.other(),
            Outcome::Won(winner) => log::info!("{} wins after {} moves", winner.name(), self.move_count()),
            Outcome::Tied => log::info!("board full, game tied"),
        }

        Ok(MoveResult {
            coord,
            player,
            outcome: self.outcome,
        })
    }

    /// Apply a move and return the new state, leaving `self` unchanged
    pub fn apply_move(&self, column: isize) -> Result<(GameState, MoveResult), MoveError> {
        let mut next = *self;
        let result = next.drop_piece(column)?;
        Ok((next, result))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
