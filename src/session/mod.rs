//! Everything around the resolver that a live session needs.
//!
//! - [`Member`] / [`Group`] — validated groups of three, one per role
//! - [`Treatment`] / [`Character`] / [`Assignment`] — part-two narrative conditions
//! - [`Config`] — payoff table and payment parameters
//! - [`Statement`] — final earnings per participant
//! - [`Session`] — groups participants, assigns treatments, runs both parts
pub mod config;
pub use config::*;

pub mod group;
pub use group::*;

pub mod member;
pub use member::*;

pub mod session;
pub use session::*;

pub mod statement;
pub use statement::*;

pub mod treatment;
pub use treatment::*;
