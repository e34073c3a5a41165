use crate::payoff::Outcome;
use crate::survey::Choices;

/// What a participant submitted in one part and what it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Entry {
    choices: Choices,
    outcome: Outcome,
}

impl Entry {
    pub fn new(choices: Choices, outcome: Outcome) -> Self {
        Self { choices, outcome }
    }
    pub fn choices(&self) -> &Choices {
        &self.choices
    }
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}] {}", self.choices, self.outcome)
    }
}
