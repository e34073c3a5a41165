use super::Entry;
use crate::ID;
use crate::session::Assignment;
use crate::session::Group;
use crate::survey::Part;
use crate::survey::Role;

/// Durable record of one participant across both parts.
///
/// # Fields
///
/// - `role` — set at part-one entry, never changed
/// - `group` — group the participant was seated in
/// - `one` / `two` — per-part submission and resolution, filed exactly once
/// - `assignment` — part-two treatment and narrative character
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Participant {
    role: Role,
    group: ID<Group>,
    one: Option<Entry>,
    two: Option<Entry>,
    assignment: Option<Assignment>,
}

impl Participant {
    pub fn new(role: Role, group: ID<Group>) -> Self {
        Self {
            role,
            group,
            one: None,
            two: None,
            assignment: None,
        }
    }
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn group(&self) -> ID<Group> {
        self.group
    }
    pub fn entry(&self, part: Part) -> Option<&Entry> {
        match part {
            Part::One => self.one.as_ref(),
            Part::Two => self.two.as_ref(),
        }
    }
    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }
    pub fn is_settled(&self, part: Part) -> bool {
        self.entry(part).is_some()
    }

    /// Files the entry for a part. A part is only ever filed once.
    pub fn settle(&mut self, part: Part, entry: Entry) -> anyhow::Result<()> {
        let slot = match part {
            Part::One => &mut self.one,
            Part::Two => &mut self.two,
        };
        anyhow::ensure!(slot.is_none(), "{} already settled", part);
        anyhow::ensure!(
            entry.outcome().role() == self.role,
            "{} resolved as {}, recorded as {}",
            part,
            entry.outcome().role(),
            self.role
        );
        *slot = Some(entry);
        Ok(())
    }
    /// Every filed outcome was resolved under the recorded role.
    pub fn validate(&self) -> anyhow::Result<()> {
        for part in Part::all() {
            if let Some(entry) = self.entry(part) {
                anyhow::ensure!(
                    entry.outcome().role() == self.role,
                    "{} resolved as {}, recorded as {}",
                    part,
                    entry.outcome().role(),
                    self.role
                );
            }
        }
        Ok(())
    }
    /// Records the part-two treatment. Re-assigning the same treatment is a no-op.
    pub fn assign(&mut self, assignment: Assignment) -> anyhow::Result<()> {
        match self.assignment {
            Some(existing) if existing != assignment => Err(anyhow::anyhow!(
                "treatment already assigned as {}",
                existing
            )),
            _ => {
                self.assignment = Some(assignment);
                Ok(())
            }
        }
    }
}
