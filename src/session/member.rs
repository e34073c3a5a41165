use crate::ID;
use crate::ledger::Participant;
use crate::survey::Role;

/// A participant seated in a group under a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Member {
    id: ID<Participant>,
    role: Role,
}

impl Member {
    pub fn new(id: ID<Participant>, role: Role) -> Self {
        Self { id, role }
    }
    pub fn role(&self) -> Role {
        self.role
    }
}

impl crate::Unique<Participant> for Member {
    fn id(&self) -> ID<Participant> {
        self.id
    }
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<10} {}", self.role.name(), self.id)
    }
}
