use std::str::FromStr;

use onitama::{Card, Player, Position};

/// Which card the user wants to play, before resolving it against the hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardChoice {
    /// 1-based index into the current hand.
    Index(usize),
    Name(String),
}

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move {
        card: CardChoice,
        origin: Position,
        offset: Position,
    },
    ListMoves,
    Help,
    Quit,
}

pub const HELP: &str = "Enter a move as: <card> <row> <col> <row offset> <col offset>
  <card> is the card's name or its number in your hand, e.g. `Crab 4 2 -1 0`
Other commands: `moves` lists all legal moves, `help` shows this text, `quit` ends the game";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    Empty,
    /// `numbers` counts the tokens after the card.
    WrongNumberOfArguments { numbers: usize },
    InvalidNumber { token: String },
    UnknownCard { name: String },
    CardIndexOutOfRange { index: usize },
}

impl std::error::Error for ParseCommandError {}

impl std::fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseCommandError::Empty => write!(f, "No command given"),
            ParseCommandError::WrongNumberOfArguments { numbers } => write!(
                f,
                "A move needs a card and four numbers, but {} numbers were given",
                numbers
            ),
            ParseCommandError::InvalidNumber { token } => {
                write!(f, "'{}' is not a valid coordinate", token)
            }
            ParseCommandError::UnknownCard { name } => {
                write!(f, "There is no card named '{}' in this game", name)
            }
            ParseCommandError::CardIndexOutOfRange { index } => {
                write!(f, "There is no card number {} in your hand, pick 1 or 2", index)
            }
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err(ParseCommandError::Empty),
            [word] if word.eq_ignore_ascii_case("quit") || word.eq_ignore_ascii_case("exit") => {
                Ok(Command::Quit)
            }
            [word] if word.eq_ignore_ascii_case("moves") => Ok(Command::ListMoves),
            [word] if word.eq_ignore_ascii_case("help") => Ok(Command::Help),
            [card, row, col, d_row, d_col] => {
                let card = match card.parse::<usize>() {
                    Ok(index) => CardChoice::Index(index),
                    Err(_) => CardChoice::Name(String::from(*card)),
                };
                Ok(Command::Move {
                    card,
                    origin: Position::new(parse_coordinate(row)?, parse_coordinate(col)?),
                    offset: Position::new(parse_coordinate(d_row)?, parse_coordinate(d_col)?),
                })
            }
            [_card, numbers @ ..] => Err(ParseCommandError::WrongNumberOfArguments {
                numbers: numbers.len(),
            }),
        }
    }
}

fn parse_coordinate(token: &str) -> Result<i8, ParseCommandError> {
    token.parse().map_err(|_| ParseCommandError::InvalidNumber {
        token: String::from(token),
    })
}

impl CardChoice {
    /// Finds the card that was meant.
    ///
    /// Names are looked up in the player's hand first, then among the
    /// `other_cards` (e.g. the table card) and finally in the standard deck.
    /// A card that is found but not in the hand is still returned, so that
    /// the engine can reject the move with a proper error.
    pub fn resolve(&self, player: &Player, other_cards: &[&Card]) -> Result<Card, ParseCommandError> {
        match self {
            CardChoice::Index(index) => index
                .checked_sub(1)
                .and_then(|idx| player.hand().get(idx))
                .cloned()
                .ok_or(ParseCommandError::CardIndexOutOfRange { index: *index }),
            CardChoice::Name(name) => player
                .hand()
                .iter()
                .chain(other_cards.iter().copied())
                .find(|card| card.name().eq_ignore_ascii_case(name))
                .cloned()
                .or_else(|| Card::from_str(name).ok())
                .ok_or_else(|| ParseCommandError::UnknownCard { name: name.clone() }),
        }
    }
}
