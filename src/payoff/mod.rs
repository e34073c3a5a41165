//! Payoff resolution.
//!
//! - [`Dice`] — source of the two random draws, any [`rand::Rng`] or a [`Replay`]
//! - [`Outcome`] — one participant's resolved scenario, lottery, and payoff
//! - [`Resolver`] — resolves a whole group once per part and writes the ledger
//! - [`Round`] — the group's results for one part
pub mod dice;
pub use dice::*;

pub mod outcome;
pub use outcome::*;

pub mod resolver;
pub use resolver::*;

pub mod round;
pub use round::*;
