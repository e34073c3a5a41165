use crate::SCENARIOS;

/// One of the four decision contexts, numbered `1..=4`.
///
/// Every scenario offers the same lottery; only the safe loss differs.
/// [`Scenario::index`] maps into zero-based tables such as
/// [`Choices`](super::Choices) and the safe-option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Scenario(u8);

impl Scenario {
    /// Scenario number as shown to participants.
    pub fn number(&self) -> u8 {
        self.0
    }
    /// Zero-based position in per-scenario tables.
    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=SCENARIOS as u8).map(Self)
    }
    /// Uniform draw over all scenarios.
    pub fn sample<R>(rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        Self(rng.random_range(1..=SCENARIOS as u8))
    }
}

impl TryFrom<u8> for Scenario {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        anyhow::ensure!(
            (1..=SCENARIOS as u8).contains(&n),
            "scenario {} outside 1..={}",
            n,
            SCENARIOS
        );
        Ok(Self(n))
    }
}

impl From<Scenario> for u8 {
    fn from(s: Scenario) -> u8 {
        s.0
    }
}

impl crate::Arbitrary for Scenario {
    fn random() -> Self {
        Self::sample(&mut rand::rng())
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Scenario {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bounds() {
        assert!(Scenario::try_from(0).is_err());
        assert!(Scenario::try_from(5).is_err());
        assert_eq!(Scenario::try_from(4).unwrap().index(), 3);
    }

    #[test]
    fn random_in_range() {
        for _ in 0..1000 {
            let s = Scenario::random();
            assert!(s.index() < SCENARIOS);
        }
    }

    #[test]
    fn enumerates_all() {
        let numbers = Scenario::all().map(|s| s.number()).collect::<Vec<_>>();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}
