use serde::{Deserialize, Serialize};

/// The two sides of the game.
///
/// Cards carry a color as well, which decides who moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// The master. Losing it loses the game.
    Leader,
    /// A student.
    Ordinary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceStatus {
    Alive,
    Captured,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    status: PieceStatus,
}

impl Piece {
    pub fn leader(color: Color) -> Self {
        Self {
            color,
            kind: PieceKind::Leader,
            status: PieceStatus::Alive,
        }
    }

    pub fn ordinary(color: Color) -> Self {
        Self {
            color,
            kind: PieceKind::Ordinary,
            status: PieceStatus::Alive,
        }
    }

    pub fn is_leader(&self) -> bool {
        self.kind == PieceKind::Leader
    }

    pub fn is_alive(&self) -> bool {
        self.status == PieceStatus::Alive
    }

    pub fn status(&self) -> PieceStatus {
        self.status
    }

    /// Marks the piece as captured. There is no way back.
    pub(crate) fn capture(&mut self) {
        self.status = PieceStatus::Captured;
    }

    /// One-letter code used when rendering the board: `M` for the master
    /// (leader), `A` for a student, upper case for red and lower case for blue.
    pub fn symbol(&self) -> char {
        let symbol = match self.kind {
            PieceKind::Leader => 'M',
            PieceKind::Ordinary => 'A',
        };
        match self.color {
            Color::Red => symbol,
            Color::Blue => symbol.to_ascii_lowercase(),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
