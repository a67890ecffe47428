use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::OutOfBounds;

/// The board has `BOARD_SIZE` rows and `BOARD_SIZE` columns.
pub const BOARD_SIZE: i8 = 5;

/// A (row, column) pair.
///
/// This is used both for absolute coordinates on the board and for the
/// relative offsets printed on a [card](crate::Card). Positions are not
/// necessarily on the board, see [`Square`] for that.
///
/// In JSON, a position is written as a two-element array `[row, col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(i8, i8)", into = "(i8, i8)")]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, offset: Position) -> Position {
        Position {
            row: self.row.saturating_add(offset.row),
            col: self.col.saturating_add(offset.col),
        }
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (i8, i8) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A position that is known to lie on the board.
///
/// The board is only ever indexed with squares, so once a [`Position`] has
/// been converted, no further bounds checks are necessary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(Position);

impl Square {
    /// All 25 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Square(Position { row, col })))
    }

    pub fn position(self) -> Position {
        self.0
    }

    pub fn row(self) -> usize {
        self.0.row as usize
    }

    pub fn col(self) -> usize {
        self.0.col as usize
    }

    /// The square reached by moving by `offset`, if that is still on the board.
    pub fn offset_by(self, offset: Position) -> Option<Square> {
        Square::try_from(self.0 + offset).ok()
    }
}

impl TryFrom<Position> for Square {
    type Error = OutOfBounds;

    fn try_from(position: Position) -> Result<Self, Self::Error> {
        if position.is_on_board() {
            Ok(Square(position))
        } else {
            Err(OutOfBounds { position })
        }
    }
}

impl From<Square> for Position {
    fn from(square: Square) -> Self {
        square.0
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn square_conversion_matches_bounds(row: i8, col: i8) -> bool {
            let pos = Position::new(row, col);
            let in_bounds = (0..5).contains(&row) && (0..5).contains(&col);
            match Square::try_from(pos) {
                Ok(sq) => in_bounds && sq.position() == pos,
                Err(OutOfBounds { position }) => !in_bounds && position == pos,
            }
        }

        fn offsets_never_overflow(row: i8, col: i8, d_row: i8, d_col: i8) -> bool {
            // Saturating addition keeps extreme inputs off the board instead of wrapping onto it
            let dest = Position::new(row, col) + Position::new(d_row, d_col);
            let wide = (row as i16 + d_row as i16, col as i16 + d_col as i16);
            let wide_on_board = (0..5).contains(&wide.0) && (0..5).contains(&wide.1);
            dest.is_on_board() == wide_on_board
        }
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 25);
        assert_eq!(squares[0].position(), Position::new(0, 0));
        assert_eq!(squares[1].position(), Position::new(0, 1));
        assert_eq!(squares[5].position(), Position::new(1, 0));
        assert_eq!(squares[24].position(), Position::new(4, 4));
    }

    #[test]
    fn serializes_as_pair() {
        let json = serde_json::to_string(&Position::new(-1, 2)).unwrap();
        assert_eq!(json, "[-1,2]");
        let pos: Position = serde_json::from_str("[3,-2]").unwrap();
        assert_eq!(pos, Position::new(3, -2));
    }
}
