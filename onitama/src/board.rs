use crate::{visualize_board, Color, OutOfBounds, Piece, Position, Square, BOARD_SIZE};

/// A single cell of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spot {
    square: Square,
    shrine: Option<Color>,
    occupant: Option<Piece>,
}

impl Spot {
    pub fn square(&self) -> Square {
        self.square
    }

    /// The color of the shrine on this spot, if it is one.
    pub fn shrine(&self) -> Option<Color> {
        self.shrine
    }

    pub fn occupant(&self) -> Option<Piece> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// The 5x5 board.
///
/// Row 0 is blue's home row, row 4 is red's. The board owns all pieces
/// that are still in play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    // Indexed by [row][col]
    spots: [[Spot; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Creates the starting layout: a full row of pieces for each player,
    /// with the leader in the middle, sitting on its own shrine.
    pub fn new() -> Self {
        let last_row = BOARD_SIZE - 1;
        let middle_col = BOARD_SIZE / 2;
        let spots = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let position = Position::new(row as i8, col as i8);
                let home_color = match position.row {
                    0 => Some(Color::Blue),
                    r if r == last_row => Some(Color::Red),
                    _ => None,
                };
                let is_middle = position.col == middle_col;
                let occupant = home_color.map(|color| {
                    if is_middle {
                        Piece::leader(color)
                    } else {
                        Piece::ordinary(color)
                    }
                });
                Spot {
                    square: Square::try_from(position).expect("Index is on the board"),
                    shrine: home_color.filter(|_| is_middle),
                    occupant,
                }
            })
        });
        Self { spots }
    }

    /// Creates a board without any pieces on it, but with both shrines.
    pub fn empty() -> Self {
        let mut board = Self::new();
        for square in Square::all() {
            board.clear(square);
        }
        board
    }

    /// The square of the shrine of the given color.
    pub fn shrine_of(color: Color) -> Square {
        let row = match color {
            Color::Blue => 0,
            Color::Red => BOARD_SIZE - 1,
        };
        Square::try_from(Position::new(row, BOARD_SIZE / 2)).expect("Shrine is on the board")
    }

    pub fn spot(&self, square: Square) -> &Spot {
        &self.spots[square.row()][square.col()]
    }

    /// Looks up the spot at any position, failing if it's off the board.
    pub fn cell_at(&self, position: Position) -> Result<&Spot, OutOfBounds> {
        Ok(self.spot(Square::try_from(position)?))
    }

    /// Which color's shrine is at this position, if any.
    pub fn shrine(&self, position: Position) -> Result<Option<Color>, OutOfBounds> {
        Ok(self.cell_at(position)?.shrine)
    }

    pub fn piece(&self, square: Square) -> Option<Piece> {
        self.spot(square).occupant
    }

    /// Puts a piece on a square, replacing whatever was there.
    ///
    /// This does not capture anything, the caller needs to do that first.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.spots[square.row()][square.col()].occupant = Some(piece);
    }

    /// Empties a square, returning the piece that was on it.
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.spots[square.row()][square.col()].occupant.take()
    }

    /// All pieces on the board, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.spots
            .iter()
            .flatten()
            .filter_map(|spot| spot.occupant.map(|piece| (spot.square, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Where the leader of the given color is, if it has not been captured.
    ///
    /// This scans the whole board.
    pub fn leader_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.color == color && piece.is_leader())
            .map(|(square, _)| square)
    }

    /// Iterates over the rows, each being the five spots from column 0 to 4.
    pub fn rows(&self) -> impl Iterator<Item = &[Spot; BOARD_SIZE as usize]> + '_ {
        self.spots.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}
