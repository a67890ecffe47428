use crate::Board;

/// Renders the board as text, one line per row, with row and column indices.
///
/// Pieces are shown by their [symbol](crate::Piece::symbol), empty spots as
/// `·` and empty shrines as `◇`.
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::from("     0 1 2 3 4\n   ╭───────────╮\n");
    for (row_idx, row) in board.rows().enumerate() {
        result += &format!("{:>2} │", row_idx);
        for spot in row {
            let symbol = match (spot.occupant(), spot.shrine()) {
                (Some(piece), _) => piece.symbol(),
                (None, Some(_)) => '◇',
                (None, None) => '·',
            };
            result.push(' ');
            result.push(symbol);
        }
        result += " │\n";
    }
    result += "   ╰───────────╯";
    result
}
