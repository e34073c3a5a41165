use super::Assignment;
use super::Config;
use crate::Money;
use crate::ledger::Participant;
use crate::payoff::Outcome;
use crate::survey::Part;
use crate::survey::Role;

/// Final results page for one participant.
///
/// Both parts are paid. Earnings are the summed points converted at the
/// session rate, plus the participation fee.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Statement {
    role: Role,
    one: Outcome,
    two: Outcome,
    assignment: Option<Assignment>,
    currency_per_point: Money,
    participation_fee: Money,
}

impl Statement {
    pub fn new(participant: &Participant, config: &Config) -> anyhow::Result<Self> {
        let outcome = |part: Part| {
            participant
                .entry(part)
                .map(|entry| *entry.outcome())
                .ok_or_else(|| anyhow::anyhow!("{} not resolved yet", part))
        };
        Ok(Self {
            role: participant.role(),
            one: outcome(Part::One)?,
            two: outcome(Part::Two)?,
            assignment: participant.assignment().copied(),
            currency_per_point: config.currency_per_point(),
            participation_fee: config.participation_fee(),
        })
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn outcome(&self, part: Part) -> &Outcome {
        match part {
            Part::One => &self.one,
            Part::Two => &self.two,
        }
    }
    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }
    /// Points earned over both parts.
    pub fn points(&self) -> i32 {
        self.one.payoff() as i32 + self.two.payoff() as i32
    }
    /// Real-world payout including the participation fee.
    pub fn money(&self) -> Money {
        self.points() as Money * self.currency_per_point + self.participation_fee
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for part in Part::all() {
            writeln!(f, "{:<8} {}", part.to_string(), self.outcome(part))?;
        }
        write!(
            f,
            "{:<8} {} tokens = {:.2} {}",
            "Total",
            self.points(),
            self.money(),
            crate::REAL_WORLD_CURRENCY_CODE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ID;
    use crate::ledger::Entry;
    use crate::payoff::Replay;
    use crate::survey::*;

    fn settled(role: Role, scenarios: [u8; 2], branch: Branch) -> Participant {
        let table = Table::default();
        let choices = Choices::from([true, false, false, true]);
        let mut participant = Participant::new(role, ID::default());
        for (part, n) in Part::all().into_iter().zip(scenarios) {
            let scenario = Scenario::try_from(n).unwrap();
            let ref mut dice = Replay::new(vec![scenario], vec![branch]).unwrap();
            let outcome = Outcome::resolve(role, &choices, &table, dice);
            participant.settle(part, Entry::new(choices, outcome)).unwrap();
        }
        participant
    }

    #[test]
    fn pays_both_parts() {
        // scenario 2 safe (800 - 600) and scenario 3 safe (800 - 500)
        let participant = settled(Role::Elite, [2, 3], Branch::Low);
        let statement = Statement::new(&participant, &Config::default()).unwrap();
        assert_eq!(statement.points(), 500);
        assert!((statement.money() - 10.25).abs() < 1e-4);
    }

    #[test]
    fn non_elite_paid_by_lottery() {
        let participant = settled(Role::NonElite, [2, 3], Branch::High);
        let statement = Statement::new(&participant, &Config::default()).unwrap();
        assert_eq!(statement.points(), 1600);
        assert!((statement.money() - 24.0).abs() < 1e-4);
    }

    #[test]
    fn requires_both_parts() {
        let participant = Participant::new(Role::JustWorld, ID::default());
        assert!(Statement::new(&participant, &Config::default()).is_err());
    }
}
