use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Color, InvalidDeck, Position};

/// A movement card.
///
/// The offsets are relative to the current square of the piece being moved,
/// which is the origin `(0, 0)`. Cards compare equal when name, color and
/// offsets all match.
///
/// When deserialized, the card is validated just like with [`Card::new()`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    name: String,
    color: Color,
    offsets: Vec<Position>,
}

#[derive(Deserialize)]
struct RawCard {
    name: String,
    color: Color,
    offsets: Vec<Position>,
}

impl TryFrom<RawCard> for Card {
    type Error = InvalidDeck;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.name, raw.color, raw.offsets)
    }
}

impl Card {
    /// Creates a custom card.
    ///
    /// Fails if there are no offsets or if an offset is listed twice.
    pub fn new(
        name: impl Into<String>,
        color: Color,
        offsets: Vec<Position>,
    ) -> Result<Self, InvalidDeck> {
        let name = name.into();
        if offsets.is_empty() {
            return Err(InvalidDeck::NoOffsets { card: name });
        }
        for (idx, &offset) in offsets.iter().enumerate() {
            if offsets[..idx].contains(&offset) {
                return Err(InvalidDeck::DuplicateOffset { card: name, offset });
            }
        }
        Ok(Self {
            name,
            color,
            offsets,
        })
    }

    fn canonical(name: &str, color: Color, offsets: &[(i8, i8)]) -> Self {
        Self {
            name: String::from(name),
            color,
            offsets: offsets.iter().copied().map(Position::from).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color of the card. At the start of a game, the color of the table
    /// card determines who moves first.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The possible moves relative to the origin `(0, 0)`.
    pub fn offsets(&self) -> &[Position] {
        &self.offsets
    }

    pub fn allows(&self, offset: Position) -> bool {
        self.offsets.contains(&offset)
    }

    /// Renders the offsets like `(-2, 0), (1, 0)`.
    pub fn offsets_string(&self) -> String {
        let offsets: Vec<String> = self.offsets.iter().map(|o| o.to_string()).collect();
        offsets.join(", ")
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The eight cards the game ships with.
pub fn canonical_deck() -> Vec<Card> {
    vec![
        Card::canonical("Tiger", Color::Blue, &[(-2, 0), (1, 0)]),
        Card::canonical("Dragon", Color::Red, &[(1, 1), (-1, 2), (1, -1), (-1, -2)]),
        Card::canonical("Frog", Color::Red, &[(0, -2), (-1, -1), (1, 1)]),
        Card::canonical("Rabbit", Color::Blue, &[(1, -1), (-1, 1), (0, 2)]),
        Card::canonical("Crab", Color::Blue, &[(0, -2), (0, 2), (-1, 0)]),
        Card::canonical("Elephant", Color::Red, &[(0, -1), (0, 1), (-1, -1), (-1, 1)]),
        Card::canonical("Goose", Color::Blue, &[(-1, -1), (0, -1), (0, 1), (1, 1)]),
        Card::canonical("Rooster", Color::Red, &[(0, -1), (1, -1), (0, 1), (-1, 1)]),
    ]
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCardName(pub String);

impl std::error::Error for UnknownCardName {}

impl std::fmt::Display for UnknownCardName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There is no card named '{}' in the standard deck", self.0)
    }
}

/// Looks up a card of the [canonical deck](canonical_deck) by name, ignoring case.
impl FromStr for Card {
    type Err = UnknownCardName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonical_deck()
            .into_iter()
            .find(|card| card.name.eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCardName(String::from(s)))
    }
}

/// Shorthand for looking up a card of the standard deck by name.
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use onitama::{card, Color, Position};
/// let tiger = card!("Tiger");
/// assert_eq!(tiger.color(), Color::Blue);
/// assert_eq!(tiger.offsets(), &[Position::new(-2, 0), Position::new(1, 0)]);
/// ```
#[macro_export]
macro_rules! card {
    ($name:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($name)
            .expect("Unknown card name given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn canonical_deck_is_well_formed() {
        let deck = canonical_deck();
        assert_eq!(deck.len(), 8);
        let names: BTreeSet<&str> = deck.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), 8);
        for card in &deck {
            assert!((2..=4).contains(&card.offsets().len()), "{}", card);
            // Re-validating must succeed
            Card::new(card.name(), card.color(), card.offsets().to_vec()).unwrap();
        }
        assert_eq!(deck.iter().filter(|c| c.color() == Color::Red).count(), 4);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(card!("Dragon").color(), Color::Red);
        assert_eq!(Card::from_str(" rooster ").unwrap().name(), "Rooster");
        assert_eq!(
            Card::from_str("Monkey"),
            Err(UnknownCardName(String::from("Monkey")))
        );
    }

    #[test]
    fn equality_is_by_value() {
        let custom = Card::new("Tiger", Color::Blue, vec![Position::new(-2, 0), Position::new(1, 0)]);
        assert_eq!(custom.unwrap(), card!("Tiger"));
        let recolored = Card::new("Tiger", Color::Red, vec![Position::new(-2, 0), Position::new(1, 0)]);
        assert_ne!(recolored.unwrap(), card!("Tiger"));
    }

    #[test]
    fn rejects_malformed_cards() {
        assert_eq!(
            Card::new("Empty", Color::Red, vec![]),
            Err(InvalidDeck::NoOffsets {
                card: String::from("Empty")
            })
        );
        assert_eq!(
            Card::new("Twice", Color::Red, vec![Position::new(1, 0), Position::new(1, 0)]),
            Err(InvalidDeck::DuplicateOffset {
                card: String::from("Twice"),
                offset: Position::new(1, 0)
            })
        );
    }

    #[test]
    fn deserialize_validates() {
        let card: Card =
            serde_json::from_str(r#"{"name": "Ox", "color": "blue", "offsets": [[-1, 0], [0, 1], [1, 0]]}"#)
                .unwrap();
        assert_eq!(card.offsets_string(), "(-1, 0), (0, 1), (1, 0)");
        let err = serde_json::from_str::<Card>(r#"{"name": "Ox", "color": "blue", "offsets": []}"#);
        assert!(err.is_err());
    }
}
