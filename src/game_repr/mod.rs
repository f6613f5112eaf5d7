mod castling;
mod config;
mod error;
mod moves;
mod piece;
mod piece_moves;
mod position;
mod setup;
mod square;
mod status;

#[cfg(test)]
mod tests;

pub use castling::*;
pub use config::*;
pub use error::*;
pub use moves::*;
pub use piece::*;
pub use piece_moves::GenMode;
pub use position::*;
pub use setup::*;
pub use square::*;
pub use status::*;
