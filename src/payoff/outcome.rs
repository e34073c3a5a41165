use super::Dice;
use crate::Tokens;
use crate::survey::*;

/// Resolution label for a realized lottery choice.
pub const RISKY: &str = "Risky Lottery";
/// Resolution label for a realized safe choice.
pub const SAFE: &str = "Safe Option";
/// What the results page shows in place of an absent value.
pub const BLANK: &str = " ";

/// One participant's resolution for one part.
///
/// # Fields
///
/// - `role` — role cluster the resolution was conditioned on
/// - `scenario` — scenario drawn for payment
/// - `choice` — answer given in that scenario, `true` for the lottery
/// - `lottery` — realized lottery loss, absent when the safe loss applied
/// - `loss` — loss actually subtracted from the endowment
/// - `payoff` — endowment minus loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Outcome {
    role: Role,
    scenario: Scenario,
    choice: bool,
    lottery: Option<Tokens>,
    loss: Tokens,
    payoff: Tokens,
}

impl Outcome {
    /// Draw a scenario, look up the answer, and settle it against the table.
    ///
    /// Just World and Elite get what they chose. Non Elite always plays the
    /// lottery; their answer is kept but never moves the payoff.
    pub fn resolve<D>(role: Role, choices: &Choices, table: &Table, dice: &mut D) -> Self
    where
        D: Dice + ?Sized,
    {
        let scenario = dice.scenario();
        let choice = choices.at(scenario);
        let lottery = match role {
            Role::JustWorld | Role::Elite => match choice {
                true => Some(table.lottery().pick(dice.branch())),
                false => None,
            },
            Role::NonElite => Some(table.lottery().pick(dice.branch())),
        };
        let loss = lottery.unwrap_or_else(|| table.safe(scenario));
        Self {
            role,
            scenario,
            choice,
            lottery,
            loss,
            payoff: table.endowment() - loss,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }
    /// Answer given in the paid scenario.
    pub fn choice(&self) -> bool {
        self.choice
    }
    /// Realized lottery loss, if the lottery was played.
    pub fn lottery(&self) -> Option<Tokens> {
        self.lottery
    }
    pub fn loss(&self) -> Tokens {
        self.loss
    }
    pub fn payoff(&self) -> Tokens {
        self.payoff
    }
    /// Safe loss worth showing: only when it was chosen and actually applied.
    pub fn safe(&self) -> Option<Tokens> {
        match (self.choice, self.role.is_forced()) {
            (false, false) => Some(self.loss),
            _ => None,
        }
    }

    pub fn risk_str(&self) -> &'static str {
        if self.choice { RISKY } else { SAFE }
    }
    pub fn safe_str(&self) -> String {
        self.safe()
            .map(|s| s.to_string())
            .unwrap_or_else(|| BLANK.to_string())
    }
    pub fn lottery_str(&self) -> String {
        self.lottery
            .map(|l| l.to_string())
            .unwrap_or_else(|| BLANK.to_string())
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<11} {:<14}{:>4} {:>4} {:>+5}",
            self.scenario.to_string(),
            self.risk_str(),
            self.safe_str(),
            self.lottery_str(),
            self.payoff
        )
    }
}
