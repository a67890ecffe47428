use quickcheck::Arbitrary;

use crate::{canonical_deck, Card, Position};

/// A move request that is usually, but not always, nonsense.
#[derive(Clone, Debug)]
pub struct MoveAttempt {
    pub card: Card,
    pub origin: Position,
    pub offset: Position,
}

/// A seed for the deal plus a list of choices among the legal moves.
#[derive(Clone, Debug)]
pub struct Playout {
    pub seed: u64,
    pub choices: Vec<u16>,
}

impl quickcheck::Arbitrary for Position {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Mostly near the board, so that a good share of positions is valid
        let row = (u8::arbitrary(g) % 9) as i8 - 2;
        let col = (u8::arbitrary(g) % 9) as i8 - 2;
        Position { row, col }
    }
}

impl quickcheck::Arbitrary for Card {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        g.choose(&canonical_deck()).unwrap().clone()
    }
}

impl quickcheck::Arbitrary for MoveAttempt {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let card = Card::arbitrary(g);
        let origin = Position::arbitrary(g);
        // Prefer offsets the card actually has
        let offset = if bool::arbitrary(g) {
            *g.choose(card.offsets()).unwrap()
        } else {
            Position {
                row: (u8::arbitrary(g) % 5) as i8 - 2,
                col: (u8::arbitrary(g) % 5) as i8 - 2,
            }
        };
        MoveAttempt {
            card,
            origin,
            offset,
        }
    }
}

impl quickcheck::Arbitrary for Playout {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Playout {
            seed: u64::arbitrary(g),
            choices: Vec::<u16>::arbitrary(g),
        }
    }
}
