use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{Card, InvalidDeck};

/// Number of cards in circulation during a game: two per player and the table card.
pub const CARDS_IN_PLAY: usize = 5;

/// The five cards drawn at the start of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub table_card: Card,
    pub red_hand: [Card; 2],
    pub blue_hand: [Card; 2],
}

impl Deal {
    /// Assigns the first five cards of `cards` in deal order: the table card,
    /// then two for red, then two for blue. The remaining cards are unused.
    ///
    /// The cards are validated with [`validate_deck()`].
    pub fn from_ordered(cards: Vec<Card>) -> Result<Self, InvalidDeck> {
        validate_deck(&cards)?;
        let mut cards = cards.into_iter();
        // The length was checked by validate_deck()
        let mut next = || cards.next().ok_or(InvalidDeck::TooFewCards { len: 0 });
        Ok(Self {
            table_card: next()?,
            red_hand: [next()?, next()?],
            blue_hand: [next()?, next()?],
        })
    }
}

/// Checks that a deck can be used for a game.
///
/// Individual cards are already validated on construction, so this only
/// checks the deck as a whole.
pub fn validate_deck(cards: &[Card]) -> Result<(), InvalidDeck> {
    if cards.len() < CARDS_IN_PLAY {
        return Err(InvalidDeck::TooFewCards { len: cards.len() });
    }
    for (idx, card) in cards.iter().enumerate() {
        if cards[..idx].contains(card) {
            return Err(InvalidDeck::DuplicateCard {
                card: String::from(card.name()),
            });
        }
    }
    Ok(())
}

/// Shuffles the deck and deals five cards from it.
pub fn deal(mut cards: Vec<Card>, rng: &mut StdRng) -> Result<Deal, InvalidDeck> {
    validate_deck(&cards)?;
    cards.shuffle(rng);
    cards.truncate(CARDS_IN_PLAY);
    Deal::from_ordered(cards)
}
