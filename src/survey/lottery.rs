use crate::LOTTERY_ODDS;
use crate::Tokens;
use rand::Rng;

/// The risky alternative: lose `low` or `high` with equal probability.
///
/// Naming follows the payoff, not the loss: `low` is the branch that leaves
/// the participant with the low payoff (the full loss), `high` the branch
/// that leaves the endowment untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Lottery {
    low: Tokens,
    high: Tokens,
}

impl Lottery {
    pub fn new(low: Tokens, high: Tokens) -> Self {
        Self { low, high }
    }
    /// Loss on the unlucky branch.
    pub fn low(&self) -> Tokens {
        self.low
    }
    /// Loss on the lucky branch.
    pub fn high(&self) -> Tokens {
        self.high
    }
    pub fn outcomes(&self) -> [Tokens; 2] {
        [self.low, self.high]
    }
    /// Loss on a given branch.
    pub fn pick(&self, branch: Branch) -> Tokens {
        match branch {
            Branch::Low => self.low,
            Branch::High => self.high,
        }
    }
    /// Realize one branch.
    pub fn draw<R>(&self, rng: &mut R) -> Tokens
    where
        R: Rng + ?Sized,
    {
        self.pick(Branch::sample(rng))
    }
}

/// Which side of the lottery was realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Branch {
    Low,
    High,
}

impl Branch {
    pub fn sample<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        if rng.random_bool(LOTTERY_ODDS as f64) {
            Self::Low
        } else {
            Self::High
        }
    }
}

impl Default for Lottery {
    fn default() -> Self {
        Self::new(crate::RISK_LOW, crate::RISK_HIGH)
    }
}

impl std::fmt::Display for Lottery {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "-{} tokens with {:.0}% probability, or -{} tokens with {:.0}% probability",
            self.low,
            LOTTERY_ODDS * 100.,
            self.high,
            (1. - LOTTERY_ODDS) * 100.
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draws_only_outcomes() {
        let lottery = Lottery::default();
        let ref mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(lottery.outcomes().contains(&lottery.draw(rng)));
        }
    }

    #[test]
    fn draws_both_branches() {
        let lottery = Lottery::default();
        let ref mut rng = SmallRng::seed_from_u64(11);
        let lows = (0..10_000)
            .filter(|_| lottery.draw(rng) == lottery.low())
            .count();
        assert!(lows > 4_700 && lows < 5_300, "lows = {}", lows);
    }

    #[test]
    fn display_matches_form_label() {
        assert_eq!(
            Lottery::default().to_string(),
            "-800 tokens with 50% probability, or -0 tokens with 50% probability"
        );
    }
}
