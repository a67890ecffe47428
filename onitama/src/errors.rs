use crate::{Card, Color, Position};

/// A position outside of the 5x5 board was given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    pub position: Position,
}

impl std::error::Error for OutOfBounds {}

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position {} is not on the board", self.position)
    }
}

/// Why a piece cannot move to where it was asked to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMovement {
    OffsetNotOnCard { card: Card, offset: Position },
    OffBoard { destination: Position },
    OccupiedByOwnPiece { destination: Position },
}

impl std::error::Error for IllegalMovement {}

impl std::fmt::Display for IllegalMovement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMovement::OffsetNotOnCard { card, offset } => write!(
                f,
                "The card {} does not allow moving by {}, only by {}",
                card,
                offset,
                card.offsets_string()
            ),
            IllegalMovement::OffBoard { destination } => {
                write!(f, "The destination {} is off the board", destination)
            }
            IllegalMovement::OccupiedByOwnPiece { destination } => write!(
                f,
                "The destination {} is occupied by one of your own pieces",
                destination
            ),
        }
    }
}

/// The card to give up was not in the player's hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardNotHeld {
    pub card: Card,
}

impl std::error::Error for CardNotHeld {}

impl std::fmt::Display for CardNotHeld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The card {} is not in the player's hand", self.card)
    }
}

/// The error type for [`Game::make_move()`](crate::Game::make_move).
///
/// A rejected move never changes the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    GameOver { winner: Color },
    OutOfBounds(OutOfBounds),
    InvalidPiece { origin: Position },
    IncorrectTurnOrder { origin: Position, current: Color },
    InvalidCard { card: Card },
    IllegalMovement(IllegalMovement),
    /// Should be unreachable, since the hand is checked before the swap.
    CardNotHeld(CardNotHeld),
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::OutOfBounds(err) => Some(err),
            IllegalMove::IllegalMovement(err) => Some(err),
            IllegalMove::CardNotHeld(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::GameOver { winner } => {
                write!(f, "The game is already over, {} has won", winner)
            }
            IllegalMove::OutOfBounds(_) => write!(f, "Tried to move from outside the board"),
            IllegalMove::InvalidPiece { origin } => {
                write!(f, "There is no piece at {}", origin)
            }
            IllegalMove::IncorrectTurnOrder { origin, current } => write!(
                f,
                "The piece at {} does not belong to {}, whose turn it is",
                origin, current
            ),
            IllegalMove::InvalidCard { card } => {
                write!(f, "Tried to play {}, which is not in the player's hand", card)
            }
            IllegalMove::IllegalMovement(_) => write!(f, "Illegal movement"),
            IllegalMove::CardNotHeld(_) => write!(f, "Could not swap cards"),
        }
    }
}

impl From<OutOfBounds> for IllegalMove {
    fn from(err: OutOfBounds) -> Self {
        IllegalMove::OutOfBounds(err)
    }
}

impl From<IllegalMovement> for IllegalMove {
    fn from(err: IllegalMovement) -> Self {
        IllegalMove::IllegalMovement(err)
    }
}

impl From<CardNotHeld> for IllegalMove {
    fn from(err: CardNotHeld) -> Self {
        IllegalMove::CardNotHeld(err)
    }
}

/// The error type for setting up a game from a deal or an arbitrary position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidSetup {
    /// The five cards in play are not pairwise distinct, or the deck is unusable.
    InvalidCards(InvalidDeck),
    PlayerColor { slot: Color, found: Color },
    TooManyLeaders { color: Color, count: usize },
    BothSidesWon,
}

impl std::error::Error for InvalidSetup {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidSetup::InvalidCards(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvalidSetup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidSetup::InvalidCards(_) => write!(f, "Invalid cards"),
            InvalidSetup::PlayerColor { slot, found } => write!(
                f,
                "The {} player was given a player with color {}",
                slot, found
            ),
            InvalidSetup::TooManyLeaders { color, count } => {
                write!(f, "The board has {} leaders of color {}", count, color)
            }
            InvalidSetup::BothSidesWon => {
                write!(f, "Both players have already won in this position")
            }
        }
    }
}

impl From<InvalidDeck> for InvalidSetup {
    fn from(err: InvalidDeck) -> Self {
        InvalidSetup::InvalidCards(err)
    }
}

/// The error type for setting up a game with a custom deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidDeck {
    TooFewCards { len: usize },
    DuplicateCard { card: String },
    NoOffsets { card: String },
    DuplicateOffset { card: String, offset: Position },
}

impl std::error::Error for InvalidDeck {}

impl std::fmt::Display for InvalidDeck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidDeck::TooFewCards { len } => {
                write!(f, "A deck needs at least 5 cards, but this one has {}", len)
            }
            InvalidDeck::DuplicateCard { card } => {
                write!(f, "The card {} appears more than once in the deck", card)
            }
            InvalidDeck::NoOffsets { card } => write!(f, "The card {} has no moves", card),
            InvalidDeck::DuplicateOffset { card, offset } => {
                write!(f, "The card {} lists the move {} more than once", card, offset)
            }
        }
    }
}
