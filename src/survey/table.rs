use super::Lottery;
use super::Scenario;
use crate::SCENARIOS;
use crate::Tokens;

/// Constant payoff table shared by every participant in a part.
///
/// Holds the endowment, one safe loss per scenario, and the lottery. Only
/// [`Table::new`] builds one, so a table always has exactly [`SCENARIOS`]
/// non-negative safe losses, a non-negative lottery, and a non-negative
/// endowment. Serialized with the safe losses as a plain list, which is
/// validated again on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Layout", into = "Layout")]
pub struct Table {
    endowment: Tokens,
    safe: [Tokens; SCENARIOS],
    lottery: Lottery,
}

impl Table {
    pub fn new(endowment: Tokens, safe: &[Tokens], lottery: Lottery) -> anyhow::Result<Self> {
        let safe = <[Tokens; SCENARIOS]>::try_from(safe).map_err(|_| {
            anyhow::anyhow!(
                "table has {} safe options, expected {}",
                safe.len(),
                SCENARIOS
            )
        })?;
        anyhow::ensure!(endowment >= 0, "negative endowment {}", endowment);
        anyhow::ensure!(
            safe.iter().chain(lottery.outcomes().iter()).all(|l| *l >= 0),
            "losses must be non-negative"
        );
        Ok(Self {
            endowment,
            safe,
            lottery,
        })
    }
    pub fn endowment(&self) -> Tokens {
        self.endowment
    }
    pub fn lottery(&self) -> &Lottery {
        &self.lottery
    }
    /// Guaranteed loss of the safe alternative in a scenario.
    pub fn safe(&self, scenario: Scenario) -> Tokens {
        self.safe[scenario.index()]
    }
    pub fn safes(&self) -> &[Tokens; SCENARIOS] {
        &self.safe
    }
    /// Every loss a participant can end up with.
    pub fn losses(&self) -> impl Iterator<Item = Tokens> + '_ {
        self.safe.iter().copied().chain(self.lottery.outcomes())
    }
    /// Smallest and largest reachable payoff.
    pub fn bounds(&self) -> (Tokens, Tokens) {
        let most = self.losses().max().unwrap_or_default();
        let least = self.losses().min().unwrap_or_default();
        (self.endowment - most, self.endowment - least)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self {
            endowment: crate::ENDOWMENT,
            safe: crate::SAFE_OPTIONS,
            lottery: Lottery::default(),
        }
    }
}

/// Wire shape of a [`Table`].
#[derive(serde::Serialize, serde::Deserialize)]
struct Layout {
    endowment: Tokens,
    safe: Vec<Tokens>,
    lottery: Lottery,
}

impl TryFrom<Layout> for Table {
    type Error = anyhow::Error;
    fn try_from(layout: Layout) -> Result<Self, Self::Error> {
        Self::new(layout.endowment, &layout.safe, layout.lottery)
    }
}

impl From<Table> for Layout {
    fn from(table: Table) -> Self {
        Self {
            endowment: table.endowment,
            safe: table.safe.to_vec(),
            lottery: table.lottery,
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "endowment {}", self.endowment)?;
        for scenario in Scenario::all() {
            writeln!(
                f,
                "{}: A: {} | B: -{} tokens with 100% probability",
                scenario,
                self.lottery,
                self.safe(scenario)
            )?;
        }
        Ok(())
    }
}
