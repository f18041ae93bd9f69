use serde::Serialize;

/// Cell/player code for empty squares and drawn games.
pub const CODE_NONE: u8 = 0;
pub const CODE_BLACK: u8 = 1;
pub const CODE_WHITE: u8 = 2;

/// Disc color, also used for "whose turn".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Numeric code used on the wasm boundary.
    pub fn code(self) -> u8 {
        match self {
            Color::Black => CODE_BLACK,
            Color::White => CODE_WHITE,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Square index in 0..64, row-major.
    pub fn index(self) -> u8 {
        self.row * 8 + self.col
    }
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `CODE_BLACK`/`CODE_WHITE`, or `CODE_NONE` on a draw.
    pub winner: u8,
    pub black_count: u8,
    pub white_count: u8,
}

/// Where the game stands after the last accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The current turn color has at least one legal move.
    AwaitingMove,
    /// The named color had no legal move and was skipped; the other
    /// color moves again.
    Passed(Color),
    /// Neither color has a legal move.
    GameOver(GameResult),
}

/// Outcome of one input event fed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum MoveOutcome {
    /// Target occupied, out of range, no bracket closed, or game already
    /// over. The board is untouched.
    Rejected,
    Applied,
    AppliedThenPass { skipped: u8 },
    AppliedThenGameOver { result: GameResult },
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the last accepted move forced the opponent to pass.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Square indices (0..=63) flipped by the last accepted move.
    pub flipped: Vec<u8>,
}
