use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use crate::{
    canonical_deck, deal, validate_deck, Board, Card, Color, Deal, IllegalMove, IllegalMovement,
    InvalidSetup, OutOfBounds, Piece, Player, Position, Spot, Square,
};

/// Whether moves are still accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    /// Waiting for the current player to move.
    InProgress,
    /// Terminal, no more moves are accepted.
    Over { winner: Color },
}

/// Summarizes the outcome of a successful move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub destination: Square,
    /// The opposing piece that was on the destination, now captured.
    pub captured: Option<Piece>,
    /// Set if this move won the game.
    pub winner: Option<Color>,
}

/// A move that [`Game::make_move()`] would accept right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegalMove {
    pub card: Card,
    pub origin: Position,
    pub offset: Position,
}

/// A single game session.
///
/// The game is a state machine that is either waiting for the current player
/// to move or over. Every successful move hands the played card to the table
/// and the previous table card to the mover, then passes the turn, unless the
/// move won the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    red: Player,
    blue: Player,
    current: Color,
    table_card: Card,
    status: GameStatus,
    /// In order of capture.
    captured: Vec<Piece>,
    /// Number of moves made so far.
    turn: u32,
}

impl Game {
    /// Starts a game with the standard deck.
    pub fn new(red_name: &str, blue_name: &str, rng: &mut StdRng) -> Self {
        Self::new_session(red_name, blue_name, None, rng).expect("The standard deck is valid")
    }

    /// Starts a game, optionally with a custom deck instead of the standard one.
    ///
    /// The deck is shuffled with `rng` and five cards are dealt from it.
    pub fn new_session(
        red_name: &str,
        blue_name: &str,
        custom_deck: Option<Vec<Card>>,
        rng: &mut StdRng,
    ) -> Result<Self, InvalidSetup> {
        let deck = custom_deck.unwrap_or_else(canonical_deck);
        let deal = deal(deck, rng)?;
        Self::from_deal(red_name, blue_name, deal)
    }

    /// Starts a game on the standard starting board with the given cards.
    ///
    /// The player whose color matches the table card moves first.
    pub fn from_deal(red_name: &str, blue_name: &str, deal: Deal) -> Result<Self, InvalidSetup> {
        let Deal {
            table_card,
            red_hand,
            blue_hand,
        } = deal;
        let current = table_card.color();
        Self::with_board(
            Board::new(),
            Player::new(red_name, Color::Red, red_hand),
            Player::new(blue_name, Color::Blue, blue_hand),
            table_card,
            current,
        )
    }

    /// Sets up an arbitrary position, e.g. for puzzles or replays.
    ///
    /// The five cards in play must be distinct and each color may have at
    /// most one leader. If the position is already won by one side, the game
    /// starts out over.
    pub fn with_board(
        board: Board,
        red: Player,
        blue: Player,
        table_card: Card,
        current: Color,
    ) -> Result<Self, InvalidSetup> {
        for (slot, player) in [(Color::Red, &red), (Color::Blue, &blue)] {
            if player.color() != slot {
                return Err(InvalidSetup::PlayerColor {
                    slot,
                    found: player.color(),
                });
            }
        }
        for color in [Color::Red, Color::Blue] {
            let count = board
                .pieces()
                .filter(|(_, piece)| piece.color == color && piece.is_leader())
                .count();
            if count > 1 {
                return Err(InvalidSetup::TooManyLeaders { color, count });
            }
        }
        let mut in_play = vec![table_card.clone()];
        in_play.extend(red.hand().iter().cloned());
        in_play.extend(blue.hand().iter().cloned());
        validate_deck(&in_play)?;

        let mut game = Self {
            board,
            red,
            blue,
            current,
            table_card,
            status: GameStatus::InProgress,
            captured: Vec::new(),
            turn: 0,
        };
        match (game.check_victory(Color::Red), game.check_victory(Color::Blue)) {
            (true, true) => return Err(InvalidSetup::BothSidesWon),
            (true, false) => game.status = GameStatus::Over { winner: Color::Red },
            (false, true) => game.status = GameStatus::Over { winner: Color::Blue },
            (false, false) => {}
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, position: Position) -> Result<Option<Piece>, OutOfBounds> {
        Ok(self.board.cell_at(position)?.occupant())
    }

    /// The shrine color of a position, `None` for an ordinary spot.
    pub fn spot_color(&self, position: Position) -> Result<Option<Color>, OutOfBounds> {
        self.board.shrine(position)
    }

    pub fn spot(&self, position: Position) -> Result<&Spot, OutOfBounds> {
        self.board.cell_at(position)
    }

    pub fn table_card(&self) -> &Card {
        &self.table_card
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn red_player(&self) -> &Player {
        &self.red
    }

    pub fn blue_player(&self) -> &Player {
        &self.blue
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Red => &self.red,
            Color::Blue => &self.blue,
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::Red => &mut self.red,
            Color::Blue => &mut self.blue,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over { .. })
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Over { winner } => Some(self.player(winner)),
        }
    }

    /// Pieces that have been captured so far, in order.
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Moves the piece at `origin` by `offset`, using `card` from the current
    /// player's hand.
    ///
    /// The checks run in a fixed order, and the first failing one determines
    /// the error. A rejected move leaves the game unchanged.
    pub fn make_move(
        &mut self,
        card: &Card,
        origin: Position,
        offset: Position,
    ) -> Result<MoveOutcome, IllegalMove> {
        let (origin_square, piece, destination) = self.validate(card, origin, offset)?;
        let mover = self.current;

        // Swapping the cards is the only step that can fail, so it goes first
        let previous_table_card = self.table_card.clone();
        self.player_mut(mover).swap_card(card, previous_table_card)?;
        self.table_card = card.clone();

        let captured = self.board.clear(destination).map(|mut captured| {
            captured.capture();
            captured
        });
        if let Some(captured) = captured {
            debug!(piece = %captured, square = %destination, "Captured");
            self.captured.push(captured);
        }
        self.board.clear(origin_square);
        self.board.place(destination, piece);
        self.turn += 1;
        debug!(
            turn = self.turn,
            player = %mover,
            %card,
            from = %origin_square,
            to = %destination,
            "Moved"
        );

        let winner = if self.check_victory(mover) {
            debug!(winner = %mover, "Game over");
            self.status = GameStatus::Over { winner: mover };
            Some(mover)
        } else {
            self.current = mover.opponent();
            None
        };

        Ok(MoveOutcome {
            destination,
            captured,
            winner,
        })
    }

    /// Runs all the checks of [`Self::make_move()`] without changing anything.
    fn validate(
        &self,
        card: &Card,
        origin: Position,
        offset: Position,
    ) -> Result<(Square, Piece, Square), IllegalMove> {
        if let GameStatus::Over { winner } = self.status {
            return Err(IllegalMove::GameOver { winner });
        }
        let origin_square = Square::try_from(origin)?;
        let piece = self
            .board
            .piece(origin_square)
            .ok_or(IllegalMove::InvalidPiece { origin })?;
        if piece.color != self.current {
            return Err(IllegalMove::IncorrectTurnOrder {
                origin,
                current: self.current,
            });
        }
        if !self.current_player().has_card(card) {
            return Err(IllegalMove::InvalidCard { card: card.clone() });
        }
        if !card.allows(offset) {
            return Err(IllegalMovement::OffsetNotOnCard {
                card: card.clone(),
                offset,
            }
            .into());
        }
        let destination = origin + offset;
        let destination_square = Square::try_from(destination)
            .map_err(|_| IllegalMovement::OffBoard { destination })?;
        if self
            .board
            .piece(destination_square)
            .is_some_and(|occupant| occupant.color == self.current)
        {
            return Err(IllegalMovement::OccupiedByOwnPiece { destination }.into());
        }
        Ok((origin_square, piece, destination_square))
    }

    /// Is the game won for `color`?
    ///
    /// This is the case when the opposing leader is no longer on the board,
    /// or when the leader of `color` stands on the opposing shrine.
    pub fn check_victory(&self, color: Color) -> bool {
        let opponent = color.opponent();
        let opposing_leader_captured = self.board.leader_square(opponent).is_none();
        let leader_on_opposing_shrine = self
            .board
            .piece(Board::shrine_of(opponent))
            .is_some_and(|piece| piece.color == color && piece.is_leader());
        opposing_leader_captured || leader_on_opposing_shrine
    }

    /// All moves the current player could make, grouped by card.
    ///
    /// Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        let mut moves = Vec::new();
        for card in self.current_player().hand() {
            for (square, _) in self.board.pieces() {
                for &offset in card.offsets() {
                    let origin = square.position();
                    if self.validate(card, origin, offset).is_ok() {
                        moves.push(LegalMove {
                            card: card.clone(),
                            origin,
                            offset,
                        });
                    }
                }
            }
        }
        moves
    }
}
