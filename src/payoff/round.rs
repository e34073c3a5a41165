use super::Outcome;
use crate::ID;
use crate::ledger::Participant;
use crate::session::Group;
use crate::survey::Part;

/// A group's results for one part, in role order.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Round {
    part: Part,
    group: ID<Group>,
    results: Vec<(ID<Participant>, Outcome)>,
}

impl Round {
    pub fn new(part: Part, group: ID<Group>, results: Vec<(ID<Participant>, Outcome)>) -> Self {
        Self {
            part,
            group,
            results,
        }
    }
    pub fn part(&self) -> Part {
        self.part
    }
    pub fn group(&self) -> ID<Group> {
        self.group
    }
    pub fn results(&self) -> &[(ID<Participant>, Outcome)] {
        &self.results
    }
    pub fn outcome(&self, id: ID<Participant>) -> Option<&Outcome> {
        self.results
            .iter()
            .find(|(p, _)| *p == id)
            .map(|(_, outcome)| outcome)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} group {}", self.part, self.group)?;
        for (_, outcome) in self.results.iter() {
            writeln!(f, "  {:<10} {}", outcome.role().name(), outcome)?;
        }
        Ok(())
    }
}
