//! Participant-keyed store that outlives a single part.
//!
//! Part one enrols every participant with their role and group and files
//! their first [`Entry`]. Part two reads the role back, files the second
//! entry, and the final statement reads both.
pub mod entry;
pub use entry::*;

pub mod ledger;
pub use ledger::*;

pub mod participant;
pub use participant::*;

pub mod repository;
pub use repository::*;
