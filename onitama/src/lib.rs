pub use board::*;
pub use cards::*;
pub use deck::*;
pub use errors::*;
pub use game::*;
pub use piece::*;
pub use player::*;
pub use position::*;
pub use snapshot::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cards;
mod deck;
mod errors;
mod game;
mod piece;
mod player;
mod position;
mod snapshot;
mod visualization;
