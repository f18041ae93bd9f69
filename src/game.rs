use crate::board::Board;
use crate::types::{CODE_NONE, Color, GameResult, GameStatus, GameView, MoveOutcome, Position};

/// Rules engine state: board contents, current turn and the
/// pass/game-over status. Mutated in place by each accepted move.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    status: GameStatus,
    flipped: Vec<Position>,
}

impl Game {
    /// Canonical opening position, black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::Black,
            status: GameStatus::AwaitingMove,
            flipped: Vec::new(),
        }
    }

    /// Full reset back to the opening position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The single mutating entry point: validates, places, flips and
    /// advances the turn for one input event. Anything that is not a
    /// legal move for the current turn color leaves the game untouched
    /// and reports `Rejected`.
    pub fn apply_move_if_valid(&mut self, row: u8, col: u8) -> MoveOutcome {
        if matches!(self.status, GameStatus::GameOver(_)) {
            return MoveOutcome::Rejected;
        }

        let flips = self.board.place(row, col, self.turn);
        if flips.is_empty() {
            return MoveOutcome::Rejected;
        }
        self.flipped = flips;

        self.advance_turn()
    }

    /// Turn machine, run once per accepted placement: hand the turn to
    /// the opponent if they can move; otherwise the mover keeps the
    /// turn and the opponent passes; if the mover cannot move either,
    /// the game is over.
    fn advance_turn(&mut self) -> MoveOutcome {
        let mover = self.turn;
        let next = mover.opponent();

        if self.board.has_valid_move(next) {
            self.turn = next;
            self.status = GameStatus::AwaitingMove;
            MoveOutcome::Applied
        } else if self.board.has_valid_move(mover) {
            self.status = GameStatus::Passed(next);
            MoveOutcome::AppliedThenPass {
                skipped: next.code(),
            }
        } else {
            let result = self.final_result();
            self.status = GameStatus::GameOver(result);
            MoveOutcome::AppliedThenGameOver { result }
        }
    }

    pub fn cell(&self, row: u8, col: u8) -> Option<Color> {
        self.board.cell(row, col)
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_valid_move(&self, row: u8, col: u8, color: Color) -> bool {
        self.board.is_valid_move(row, col, color)
    }

    pub fn has_valid_move(&self, color: Color) -> bool {
        self.board.has_valid_move(color)
    }

    /// Legal target squares for the color to move.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.turn)
    }

    /// Returns `(black_count, white_count)`.
    pub fn count_pieces(&self) -> (u8, u8) {
        self.board.count()
    }

    /// Final result, present only after game over.
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::GameOver(result) => Some(result),
            _ => None,
        }
    }

    pub fn to_game_view(&self) -> GameView {
        let (black_count, white_count) = self.board.count();
        GameView {
            board: self.board.to_array().to_vec(),
            current_player: self.turn.code(),
            black_count,
            white_count,
            is_game_over: matches!(self.status, GameStatus::GameOver(_)),
            is_pass: matches!(self.status, GameStatus::Passed(_)),
            flipped: self.flipped.iter().map(|pos| pos.index()).collect(),
        }
    }

    fn final_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            winner: if black_count > white_count {
                Color::Black.code()
            } else if white_count > black_count {
                Color::White.code()
            } else {
                CODE_NONE
            },
            black_count,
            white_count,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Color) {
        self.board = board;
        self.turn = turn;
        self.status = GameStatus::AwaitingMove;
        self.flipped.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
