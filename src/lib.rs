//! Payoff resolution for a two-part loss-domain risk survey.
//!
//! Participants are seated in groups of three, one per role cluster, and
//! state a preference between a safe loss and a 50/50 lottery in each of
//! four scenarios. Once a whole group has answered, one scenario per
//! participant is drawn and resolved into a payoff. Part two repeats the
//! procedure after a narrative treatment, reading roles back from the
//! participant ledger written during part one.
//!
//! ## Modules
//!
//! - [`survey`] — closed vocabulary: roles, scenarios, choice sets, the constant table
//! - [`payoff`] — randomness seam, per-participant outcomes, and the group resolver
//! - [`ledger`] — participant-keyed store that outlives a single part
//! - [`session`] — grouping, treatment assignment, session driver, final statements
#![allow(dead_code)]

pub mod ledger;
pub mod payoff;
pub mod session;
pub mod survey;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Experimental points. Endowments, losses, and payoffs.
pub type Tokens = i16;
/// Real-world currency paid out at the end of the session.
pub type Money = f32;
/// Lottery branch weights.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self::from(uuid::Uuid::now_v7())
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

/// Serialized as the bare UUID so IDs can key JSON maps.
impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.inner, serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <uuid::Uuid as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// GROUP STRUCTURE
// ============================================================================
/// Participants per group, one for each role cluster.
pub const N: usize = 3;
/// Independent decision contexts per part.
pub const SCENARIOS: usize = 4;
/// Participants in a demo session (six groups).
pub const DEMO_PARTICIPANTS: usize = 18;

// ============================================================================
// PAYOFF TABLE
// All scenarios live in the loss domain: payoff = ENDOWMENT - loss.
// ============================================================================
/// Starting balance before any loss is applied.
pub const ENDOWMENT: Tokens = 800;
/// Lottery branch with the full loss.
pub const RISK_LOW: Tokens = 800;
/// Lottery branch with no loss.
pub const RISK_HIGH: Tokens = 0;
/// Guaranteed loss of the safe alternative, one per scenario.
pub const SAFE_OPTIONS: [Tokens; SCENARIOS] = [775, 600, 500, 400];
/// Probability of each lottery branch.
pub const LOTTERY_ODDS: Probability = 0.5;

// ============================================================================
// PAYMENT
// ============================================================================
/// Conversion rate from points to currency.
pub const REAL_WORLD_CURRENCY_PER_POINT: Money = 0.0125;
/// Flat fee paid regardless of outcomes.
pub const PARTICIPATION_FEE: Money = 4.00;
/// ISO 4217 code of the payout currency.
pub const REAL_WORLD_CURRENCY_CODE: &str = "EUR";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
