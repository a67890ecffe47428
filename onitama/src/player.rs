use serde::Serialize;

use crate::{Card, CardNotHeld, Color};

/// One of the two players, with the two cards currently in their hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    color: Color,
    hand: [Card; 2],
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color, hand: [Card; 2]) -> Self {
        Self {
            name: name.into(),
            color,
            hand,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The hand, in a stable order.
    pub fn hand(&self) -> &[Card; 2] {
        &self.hand
    }

    pub fn has_card(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Replaces `old_card` with `new_card`, keeping its place in the hand.
    pub fn swap_card(&mut self, old_card: &Card, new_card: Card) -> Result<(), CardNotHeld> {
        let slot = self
            .hand
            .iter_mut()
            .find(|card| *card == old_card)
            .ok_or_else(|| CardNotHeld {
                card: old_card.clone(),
            })?;
        *slot = new_card;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    fn player() -> Player {
        Player::new("Ana", Color::Red, [card!("Tiger"), card!("Frog")])
    }

    #[test]
    fn possession_is_by_value() {
        let player = player();
        assert!(player.has_card(&card!("Frog")));
        assert!(!player.has_card(&card!("Crab")));
    }

    #[test]
    fn swap_keeps_position() {
        let mut player = player();
        player.swap_card(&card!("Tiger"), card!("Crab")).unwrap();
        assert_eq!(player.hand(), &[card!("Crab"), card!("Frog")]);
        player.swap_card(&card!("Frog"), card!("Tiger")).unwrap();
        assert_eq!(player.hand(), &[card!("Crab"), card!("Tiger")]);
    }

    #[test]
    fn swap_requires_card_in_hand() {
        let mut player = player();
        assert_eq!(
            player.swap_card(&card!("Goose"), card!("Crab")),
            Err(CardNotHeld {
                card: card!("Goose")
            })
        );
        assert_eq!(player.hand(), &[card!("Tiger"), card!("Frog")]);
    }
}
