use super::*;
use crate::ID;
use crate::session::Assignment;
use crate::session::Group;
use crate::survey::Part;
use crate::survey::Role;
use std::collections::BTreeMap;
use std::path::Path;

/// In-memory participant store with JSON snapshots.
///
/// Snapshots let part two, or a later reporting step, run in another
/// process and still see everything part one filed.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Ledger(BTreeMap<ID<Participant>, Participant>);

impl Ledger {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&ID<Participant>, &Participant)> {
        self.0.iter()
    }
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .map_err(|e| anyhow::anyhow!("write ledger {}: {}", path.display(), e))?;
        log::info!("saved {} participants to {}", self.len(), path.display());
        Ok(())
    }
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read ledger {}: {}", path.display(), e))?;
        let ledger = serde_json::from_str::<Self>(&json)?;
        for (id, participant) in ledger.iter() {
            participant
                .validate()
                .map_err(|e| anyhow::anyhow!("participant {}: {}", id, e))?;
        }
        log::info!("loaded {} participants from {}", ledger.len(), path.display());
        Ok(ledger)
    }
    fn record(&mut self, id: ID<Participant>) -> anyhow::Result<&mut Participant> {
        self.0
            .get_mut(&id)
            .ok_or_else(|| anyhow::anyhow!("participant {} never enrolled", id))
    }
}

impl Repository for Ledger {
    fn lookup(&self, id: ID<Participant>) -> Option<&Participant> {
        self.0.get(&id)
    }
    fn enroll(&mut self, id: ID<Participant>, role: Role, group: ID<Group>) -> anyhow::Result<()> {
        match self.0.get(&id) {
            None => {
                self.0.insert(id, Participant::new(role, group));
                Ok(())
            }
            Some(p) if p.role() != role => Err(anyhow::anyhow!(
                "participant {} is fixed as {}, not {}",
                id,
                p.role(),
                role
            )),
            Some(p) if p.group() != group => Err(anyhow::anyhow!(
                "participant {} already seated in group {}",
                id,
                p.group()
            )),
            Some(_) => Ok(()),
        }
    }
    fn settle(&mut self, id: ID<Participant>, part: Part, entry: Entry) -> anyhow::Result<()> {
        self.record(id)?
            .settle(part, entry)
            .map_err(|e| anyhow::anyhow!("participant {}: {}", id, e))
    }
    fn assign(&mut self, id: ID<Participant>, assignment: Assignment) -> anyhow::Result<()> {
        self.record(id)?
            .assign(assignment)
            .map_err(|e| anyhow::anyhow!("participant {}: {}", id, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::Outcome;
    use crate::payoff::Replay;
    use crate::session::Character;
    use crate::survey::*;

    fn entry(role: Role) -> Entry {
        let choices = Choices::from([false, true, false, true]);
        let ref mut dice = Replay::new(Scenario::all().collect(), vec![Branch::Low]).unwrap();
        Entry::new(choices, Outcome::resolve(role, &choices, &Table::default(), dice))
    }

    #[test]
    fn role_is_fixed() {
        let mut ledger = Ledger::default();
        let id = ID::default();
        let group = ID::default();
        ledger.enroll(id, Role::Elite, group).unwrap();
        ledger.enroll(id, Role::Elite, group).unwrap();
        assert!(ledger.enroll(id, Role::NonElite, group).is_err());
        assert!(ledger.enroll(id, Role::Elite, ID::default()).is_err());
        assert_eq!(ledger.lookup(id).unwrap().role(), Role::Elite);
    }

    #[test]
    fn settles_once_per_part() {
        let mut ledger = Ledger::default();
        let id = ID::default();
        ledger.enroll(id, Role::JustWorld, ID::default()).unwrap();
        ledger.settle(id, Part::One, entry(Role::JustWorld)).unwrap();
        assert!(ledger.settle(id, Part::One, entry(Role::JustWorld)).is_err());
        ledger.settle(id, Part::Two, entry(Role::JustWorld)).unwrap();
        let record = ledger.lookup(id).unwrap();
        assert!(record.is_settled(Part::One) && record.is_settled(Part::Two));
    }

    #[test]
    fn unknown_participant() {
        let mut ledger = Ledger::default();
        assert!(ledger.settle(ID::default(), Part::One, entry(Role::Elite)).is_err());
        assert!(ledger.lookup(ID::default()).is_none());
    }

    #[test]
    fn assignment_is_stable() {
        let mut ledger = Ledger::default();
        let id = ID::default();
        ledger.enroll(id, Role::NonElite, ID::default()).unwrap();
        let t1 = Assignment::Personal(Character::Samantha);
        ledger.assign(id, t1).unwrap();
        ledger.assign(id, t1).unwrap();
        assert!(ledger.assign(id, Assignment::Personal(Character::Daniel)).is_err());
        assert!(ledger.assign(id, Assignment::Impersonal).is_err());
    }

    #[test]
    fn snapshot_survives_disk() {
        let mut ledger = Ledger::default();
        let id = ID::default();
        ledger.enroll(id, Role::NonElite, ID::default()).unwrap();
        ledger.settle(id, Part::One, entry(Role::NonElite)).unwrap();
        let path = std::env::temp_dir().join(format!("ledger-{}.json", id));
        ledger.save(&path).unwrap();
        let loaded = Ledger::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn load_rejects_role_mismatch() {
        let mut ledger = Ledger::default();
        let id = ID::default();
        ledger.enroll(id, Role::Elite, ID::default()).unwrap();
        assert!(ledger.settle(id, Part::One, entry(Role::NonElite)).is_err());
        ledger.settle(id, Part::One, entry(Role::Elite)).unwrap();
        let mut value = serde_json::to_value(&ledger).unwrap();
        value[id.to_string()]["role"] = serde_json::json!("JustWorld");
        let path = std::env::temp_dir().join(format!("ledger-{}.json", id));
        std::fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();
        let loaded = Ledger::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(loaded.is_err());
    }
}
