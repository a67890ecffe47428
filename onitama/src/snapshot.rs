use serde::Serialize;

use crate::{Card, Color, Game, GameStatus, PieceKind, Player, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// A machine-readable export of a game, e.g. for printing as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Row-major, `None` for empty spots.
    pub cells: [[Option<Cell>; SIZE]; SIZE],
    pub table_card: Card,
    pub current: Color,
    pub red: Player,
    pub blue: Player,
    pub status: GameStatus,
    pub turn: u32,
}

/// An occupied spot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub color: Color,
    pub kind: PieceKind,
}

impl GameSnapshot {
    pub fn of(game: &Game) -> Self {
        let mut cells = [[None; SIZE]; SIZE];
        for (square, piece) in game.board().pieces() {
            cells[square.row()][square.col()] = Some(Cell {
                color: piece.color,
                kind: piece.kind,
            });
        }
        Self {
            cells,
            table_card: game.table_card().clone(),
            current: game.current_player().color(),
            red: game.red_player().clone(),
            blue: game.blue_player().clone(),
            status: game.status(),
            turn: game.turn(),
        }
    }
}
