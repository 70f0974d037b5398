mod bet;
mod constants;
mod game;
mod units;

pub use bet::*;
pub use constants::*;
pub use game::*;
pub use units::*;

#[cfg(test)]
mod tests;
