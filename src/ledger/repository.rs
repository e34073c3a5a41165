use super::Entry;
use super::Participant;
use crate::ID;
use crate::session::Assignment;
use crate::session::Group;
use crate::survey::Part;
use crate::survey::Role;

/// Repository trait for participant records.
/// Abstracts storage from the resolver and the session driver.
pub trait Repository {
    fn lookup(&self, id: ID<Participant>) -> Option<&Participant>;
    /// Creates the record, or confirms an identical one already exists.
    fn enroll(&mut self, id: ID<Participant>, role: Role, group: ID<Group>) -> anyhow::Result<()>;
    fn settle(&mut self, id: ID<Participant>, part: Part, entry: Entry) -> anyhow::Result<()>;
    fn assign(&mut self, id: ID<Participant>, assignment: Assignment) -> anyhow::Result<()>;
}
