use crate::types::{CODE_NONE, Color, Position};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reversi board: an 8x8 grid of cells indexed `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Color>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board:
    /// (3,3)=white, (4,4)=white, (3,4)=black, (4,3)=black.
    pub fn new() -> Self {
        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = Some(Color::White);
        cells[4][4] = Some(Color::White);
        cells[3][4] = Some(Color::Black);
        cells[4][3] = Some(Color::Black);
        Self { cells }
    }

    /// Occupant of `(row, col)`, or `None` for an empty or
    /// out-of-range square.
    pub fn cell(&self, row: u8, col: u8) -> Option<Color> {
        if in_bounds(row as i32, col as i32) {
            self.cells[row as usize][col as usize]
        } else {
            None
        }
    }

    /// True iff placing `color` at `(row, col)` closes at least one
    /// bracketed run of opponent stones. Pure query.
    pub fn is_valid_move(&self, row: u8, col: u8, color: Color) -> bool {
        if !in_bounds(row as i32, col as i32) || self.cell(row, col).is_some() {
            return false;
        }

        let opponent = color.opponent();
        for (dr, dc) in DIRECTIONS {
            let mut r = row as i32 + dr;
            let mut c = col as i32 + dc;
            let mut found_opponent = false;

            while in_bounds(r, c) {
                match self.cells[r as usize][c as usize] {
                    Some(occupant) if occupant == opponent => found_opponent = true,
                    Some(_) => {
                        if found_opponent {
                            return true;
                        }
                        break;
                    }
                    None => break,
                }
                r += dr;
                c += dc;
            }
        }

        false
    }

    /// Places one stone and flips captured stones, each of the eight
    /// directions judged independently. Returns the flipped positions;
    /// an empty list means the move was illegal and the board is
    /// unchanged.
    pub fn place(&mut self, row: u8, col: u8, color: Color) -> Vec<Position> {
        let flips = self.collect_flips(row, col, color);
        if flips.is_empty() {
            return flips;
        }

        self.cells[row as usize][col as usize] = Some(color);
        for pos in &flips {
            self.cells[pos.row as usize][pos.col as usize] = Some(color);
        }

        flips
    }

    /// True iff any of the 64 squares is a legal move for `color`.
    pub fn has_valid_move(&self, color: Color) -> bool {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                if self.is_valid_move(row, col, color) {
                    return true;
                }
            }
        }
        false
    }

    /// All legal target squares for `color`, row-major order.
    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                if self.is_valid_move(row, col, color) {
                    moves.push(Position { row, col });
                }
            }
        }
        moves
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        let mut black = 0;
        let mut white = 0;
        for row in self.cells.iter() {
            for cell in row.iter() {
                match cell {
                    Some(Color::Black) => black += 1,
                    Some(Color::White) => white += 1,
                    None => {}
                }
            }
        }
        (black, white)
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [CODE_NONE; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            if let Some(color) = self.cells[pos / BOARD_SIZE][pos % BOARD_SIZE] {
                *cell = color.code();
            }
        }
        board
    }

    /// Builds a board from an eight-row picture, one char per cell:
    /// '.'=empty, 'B'=black, 'W'=white.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; 8]) -> Self {
        let mut cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), BOARD_SIZE);
            for (c, ch) in line.chars().enumerate() {
                cells[r][c] = match ch {
                    'B' => Some(Color::Black),
                    'W' => Some(Color::White),
                    '.' => None,
                    _ => panic!("bad cell char: {ch}"),
                };
            }
        }
        Self { cells }
    }

    fn collect_flips(&self, row: u8, col: u8, color: Color) -> Vec<Position> {
        if !in_bounds(row as i32, col as i32) || self.cell(row, col).is_some() {
            return Vec::new();
        }

        let opponent = color.opponent();
        let mut flips = Vec::new();

        for (dr, dc) in DIRECTIONS {
            let mut r = row as i32 + dr;
            let mut c = col as i32 + dc;
            let mut line = Vec::new();

            while in_bounds(r, c) {
                match self.cells[r as usize][c as usize] {
                    Some(occupant) if occupant == opponent => line.push(Position {
                        row: r as u8,
                        col: c as u8,
                    }),
                    Some(_) => {
                        // Closed bracket: the run flips. An empty square
                        // or the edge discards it instead.
                        if !line.is_empty() {
                            flips.append(&mut line);
                        }
                        break;
                    }
                    None => break,
                }
                r += dr;
                c += dc;
            }
        }

        flips
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position { row, col }
    }

    #[test]
    fn t01_initial_board_has_canonical_opening() {
        let board = Board::new();

        assert_eq!(board.cell(3, 3), Some(Color::White));
        assert_eq!(board.cell(4, 4), Some(Color::White));
        assert_eq!(board.cell(3, 4), Some(Color::Black));
        assert_eq!(board.cell(4, 3), Some(Color::Black));
        assert_eq!(board.count(), (2, 2));
    }

    #[test]
    fn t02_initial_black_legal_moves_are_four_expected_squares() {
        let board = Board::new();

        let moves = board.legal_moves(Color::Black);

        assert_eq!(moves, vec![pos(2, 3), pos(3, 2), pos(4, 5), pos(5, 4)]);
    }

    #[test]
    fn occupied_square_is_never_valid() {
        let board = Board::new();

        assert!(!board.is_valid_move(3, 3, Color::Black));
        assert!(!board.is_valid_move(4, 3, Color::Black));
    }

    #[test]
    fn out_of_range_square_is_never_valid() {
        let board = Board::new();

        assert!(!board.is_valid_move(8, 0, Color::Black));
        assert!(!board.is_valid_move(0, 8, Color::White));
        assert_eq!(board.cell(8, 8), None);
    }

    #[test]
    fn adjacent_opponent_without_closing_stone_is_invalid() {
        // Black next to a white run that ends at the edge: open bracket.
        let board = Board::from_rows([
            "WW......", "........", "........", "........", "........", "........", "........",
            "........",
        ]);

        assert!(!board.is_valid_move(0, 2, Color::Black));
    }

    #[test]
    fn place_flips_opponent_stones_and_updates_counts() {
        let mut board = Board::new();

        let flips = board.place(2, 3, Color::Black);

        assert_eq!(flips, vec![pos(3, 3)]);
        assert_eq!(board.cell(2, 3), Some(Color::Black));
        assert_eq!(board.cell(3, 3), Some(Color::Black));
        assert_eq!(board.count(), (4, 1));
    }

    #[test]
    fn illegal_place_returns_empty_and_keeps_board_unchanged() {
        let mut board = Board::new();
        let before = board;

        let flips = board.place(0, 0, Color::Black);

        assert!(flips.is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn place_flips_runs_in_multiple_directions_at_once() {
        let mut board = Board::from_rows([
            "........", "...B....", "..BWB...", ".BW.WB..", "..BWB...", "...B....", "........",
            "........",
        ]);

        // Center of the cross: closes brackets up, down, left and right,
        // but not on the diagonals (those start on black).
        let flips = board.place(3, 3, Color::Black);

        let mut sorted = flips.clone();
        sorted.sort_by_key(|p| p.index());
        assert_eq!(sorted, vec![pos(2, 3), pos(3, 2), pos(3, 4), pos(4, 3)]);
        assert_eq!(board.cell(3, 3), Some(Color::Black));
    }

    #[test]
    fn open_run_in_one_direction_does_not_flip_when_another_closes() {
        // Left run is closed by black; the right run reaches the edge
        // open and must be discarded.
        let mut board = Board::from_rows([
            "BWW.WWWW", "........", "........", "........", "........", "........", "........",
            "........",
        ]);

        let flips = board.place(0, 3, Color::Black);

        let mut sorted = flips.clone();
        sorted.sort_by_key(|p| p.index());
        assert_eq!(sorted, vec![pos(0, 1), pos(0, 2)]);
        assert_eq!(board.cell(0, 4), Some(Color::White));
        assert_eq!(board.cell(0, 7), Some(Color::White));
    }

    #[test]
    fn piece_total_grows_by_exactly_one_per_placement() {
        let mut board = Board::new();
        let (b0, w0) = board.count();

        board.place(2, 3, Color::Black);
        let (b1, w1) = board.count();

        assert_eq!(b1 + w1, b0 + w0 + 1);
    }

    #[test]
    fn has_valid_move_matches_legal_moves() {
        let board = Board::new();

        assert!(board.has_valid_move(Color::Black));
        assert!(board.has_valid_move(Color::White));

        let full = Board::from_rows([
            "BBBBBBBB", "BBBBBBBB", "BBBBBBBB", "BBBBBBBB", "BBBBBBBB", "BBBBBBBB", "BBBBBBBB",
            "BBBBBBBB",
        ]);
        assert!(!full.has_valid_move(Color::White));
        assert!(full.legal_moves(Color::White).is_empty());
    }

    #[test]
    fn to_array_uses_cell_codes() {
        let board = Board::new();
        let cells = board.to_array();

        assert_eq!(cells[3 * 8 + 3], 2);
        assert_eq!(cells[3 * 8 + 4], 1);
        assert_eq!(cells[0], 0);
        assert_eq!(cells.iter().filter(|&&c| c != 0).count(), 4);
    }
}
