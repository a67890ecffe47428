mod command;
mod deck_file;
mod session;
pub use command::*;
pub use deck_file::*;
pub use session::*;

use onitama::{Card, Game, InvalidSetup};

pub struct Config {
    pub red_name: String,
    pub blue_name: String,
    pub rng: rand::rngs::StdRng,
    /// Replaces the standard deck if set.
    pub deck: Option<Vec<Card>>,
    /// Print the game state as JSON instead of as a drawn board.
    pub json: bool,
}

impl Config {
    pub fn new_game(&mut self) -> Result<Game, InvalidSetup> {
        Game::new_session(
            &self.red_name,
            &self.blue_name,
            self.deck.clone(),
            &mut self.rng,
        )
    }
}
