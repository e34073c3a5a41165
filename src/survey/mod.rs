//! Closed vocabulary of the survey.
//!
//! - [`Role`] — the three role clusters a group is made of
//! - [`Scenario`] — one of four decision contexts, numbered from 1
//! - [`Choices`] — a participant's four risky-or-safe answers
//! - [`Lottery`] — the 50/50 loss gamble shared by every scenario
//! - [`Table`] — endowment, safe losses, and lottery, validated together
//! - [`Part`] — which half of the session is being resolved
pub mod choices;
pub use choices::*;

pub mod lottery;
pub use lottery::*;

pub mod part;
pub use part::*;

pub mod role;
pub use role::*;

pub mod scenario;
pub use scenario::*;

pub mod table;
pub use table::*;
