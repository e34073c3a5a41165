use crate::Money;
use crate::N;
use crate::Tokens;
use crate::survey::Lottery;
use crate::survey::Table;
use std::path::Path;
use std::str::FromStr;

/// Session parameters: the payoff table and how points turn into money.
///
/// Defaults reproduce the standard session. [`Config::from_env`] overrides
/// single fields from the environment and [`Config::from_file`] reads a
/// whole config from JSON; both validate before returning.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Config {
    table: Table,
    currency_per_point: Money,
    participation_fee: Money,
    participants: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: Table::default(),
            currency_per_point: crate::REAL_WORLD_CURRENCY_PER_POINT,
            participation_fee: crate::PARTICIPATION_FEE,
            participants: crate::DEMO_PARTICIPANTS,
        }
    }
}

impl Config {
    pub fn new(
        table: Table,
        currency_per_point: Money,
        participation_fee: Money,
        participants: usize,
    ) -> anyhow::Result<Self> {
        let config = Self {
            table,
            currency_per_point,
            participation_fee,
            participants,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads `ENDOWMENT`, `SAFE_OPTIONS` (comma separated), `RISK_LOW`,
    /// `RISK_HIGH`, `CURRENCY_PER_POINT`, `PARTICIPATION_FEE`, and
    /// `PARTICIPANTS`, falling back to the defaults for anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let table = Table::new(
            var("ENDOWMENT", defaults.table.endowment())?,
            &list("SAFE_OPTIONS", defaults.table.safes())?,
            Lottery::new(
                var("RISK_LOW", defaults.table.lottery().low())?,
                var("RISK_HIGH", defaults.table.lottery().high())?,
            ),
        )?;
        Self::new(
            table,
            var("CURRENCY_PER_POINT", defaults.currency_per_point)?,
            var("PARTICIPATION_FEE", defaults.participation_fee)?,
            var("PARTICIPANTS", defaults.participants)?,
        )
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read config {}: {}", path.display(), e))?;
        let config = serde_json::from_str::<Self>(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.participants > 0 && self.participants % N == 0,
            "{} participants cannot be split into groups of {}",
            self.participants,
            N
        );
        anyhow::ensure!(
            self.currency_per_point >= 0.,
            "negative currency per point {}",
            self.currency_per_point
        );
        anyhow::ensure!(
            self.participation_fee >= 0.,
            "negative participation fee {}",
            self.participation_fee
        );
        Ok(())
    }

    pub fn with_participants(self, participants: usize) -> anyhow::Result<Self> {
        Self::new(
            self.table,
            self.currency_per_point,
            self.participation_fee,
            participants,
        )
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn currency_per_point(&self) -> Money {
        self.currency_per_point
    }
    pub fn participation_fee(&self) -> Money {
        self.participation_fee
    }
    pub fn participants(&self) -> usize {
        self.participants
    }
    /// Number of groups the participants fill.
    pub fn groups(&self) -> usize {
        self.participants / N
    }
}

fn var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(s) => s
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("invalid {}={}: {}", key, s, e)),
    }
}

fn list(key: &str, default: &[Tokens]) -> anyhow::Result<Vec<Tokens>> {
    match std::env::var(key) {
        Err(_) => Ok(default.to_vec()),
        Ok(s) => s
            .split(',')
            .map(|x| x.trim().parse::<Tokens>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("invalid {}={}: {}", key, s, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.groups(), 6);
        assert_eq!(config.table(), &Table::default());
    }

    #[test]
    fn participants_fill_whole_groups() {
        assert!(Config::default().with_participants(0).is_err());
        assert!(Config::default().with_participants(7).is_err());
        assert_eq!(Config::default().with_participants(9).unwrap().groups(), 3);
    }

    #[test]
    fn rejects_negative_money() {
        assert!(Config::new(Table::default(), -0.01, 4.0, 3).is_err());
        assert!(Config::new(Table::default(), 0.0125, -4.0, 3).is_err());
    }

    #[test]
    fn json_file() {
        let path = std::env::temp_dir().join(format!("config-{}.json", uuid::Uuid::now_v7()));
        let config = Config::default().with_participants(12).unwrap();
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        std::fs::write(&path, r#"{"table":{"endowment":800,"safe":[1,2,3],"lottery":{"low":800,"high":0}},"currency_per_point":0.0125,"participation_fee":4.0,"participants":3}"#).unwrap();
        let broken = Config::from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(broken.is_err());
    }
}
