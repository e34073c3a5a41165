use crate::survey::Branch;
use crate::survey::Scenario;
use rand::Rng;

/// Source of the random draws behind a resolution.
///
/// Every random number generator is a [`Dice`]. [`Replay`] feeds back a
/// fixed script instead, which pins down a resolution exactly.
pub trait Dice {
    /// Scenario selected for payment.
    fn scenario(&mut self) -> Scenario;
    /// Lottery branch realized.
    fn branch(&mut self) -> Branch;
}

impl<R> Dice for R
where
    R: Rng + ?Sized,
{
    fn scenario(&mut self) -> Scenario {
        Scenario::sample(self)
    }
    fn branch(&mut self) -> Branch {
        Branch::sample(self)
    }
}

/// Scripted draws, consumed in order and repeated once exhausted.
#[derive(Debug, Clone)]
pub struct Replay {
    scenarios: Vec<Scenario>,
    branches: Vec<Branch>,
    s: usize,
    b: usize,
}

impl Replay {
    pub fn new(scenarios: Vec<Scenario>, branches: Vec<Branch>) -> anyhow::Result<Self> {
        anyhow::ensure!(!scenarios.is_empty(), "replay needs at least one scenario");
        anyhow::ensure!(!branches.is_empty(), "replay needs at least one branch");
        Ok(Self {
            scenarios,
            branches,
            s: 0,
            b: 0,
        })
    }
}

impl Dice for Replay {
    fn scenario(&mut self) -> Scenario {
        let scenario = self.scenarios[self.s % self.scenarios.len()];
        self.s += 1;
        scenario
    }
    fn branch(&mut self) -> Branch {
        let branch = self.branches[self.b % self.branches.len()];
        self.b += 1;
        branch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_cycles() {
        let one = Scenario::try_from(1).unwrap();
        let two = Scenario::try_from(2).unwrap();
        let ref mut dice = Replay::new(vec![one, two], vec![Branch::High]).unwrap();
        assert_eq!(dice.scenario(), one);
        assert_eq!(dice.scenario(), two);
        assert_eq!(dice.scenario(), one);
        assert_eq!(dice.branch(), Branch::High);
        assert_eq!(dice.branch(), Branch::High);
    }

    #[test]
    fn replay_rejects_empty_script() {
        assert!(Replay::new(vec![], vec![Branch::Low]).is_err());
        assert!(Replay::new(Scenario::all().collect(), vec![]).is_err());
    }
}
