use super::Assignment;
use super::Member;
use crate::ID;
use crate::N;
use crate::Unique;
use crate::ledger::Participant;
use crate::survey::Role;

/// Three participants, one per role, fixed for the whole session.
///
/// Members are kept in role order, so `members()[0]` is always the Just
/// World participant. The part-two assignment is attached once treatments
/// are handed out. Deserialization goes through [`Group::new`].
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Layout", into = "Layout")]
pub struct Group {
    id: ID<Group>,
    members: [Member; N],
    assignment: Option<Assignment>,
}

impl Group {
    /// Validates membership: exactly three members, distinct roles, distinct participants.
    pub fn new(mut members: Vec<Member>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            members.len() == N,
            "group has {} members, expected {}",
            members.len(),
            N
        );
        members.sort_by_key(|m| m.role().position());
        for (member, role) in members.iter().zip(Role::all()) {
            anyhow::ensure!(
                member.role() == role,
                "group needs one member per role, missing {}",
                role
            );
        }
        for (i, a) in members.iter().enumerate() {
            for b in members.iter().skip(i + 1) {
                anyhow::ensure!(a.id() != b.id(), "participant {} seated twice", a.id());
            }
        }
        let members = <[Member; N]>::try_from(members)
            .map_err(|_| anyhow::anyhow!("group must have {} members", N))?;
        Ok(Self {
            id: ID::default(),
            members,
            assignment: None,
        })
    }
    /// Seats participants in arrival order; position decides the role.
    pub fn seat(ids: &[ID<Participant>]) -> anyhow::Result<Self> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| Role::try_from(i).map(|role| Member::new(*id, role)))
            .collect::<anyhow::Result<Vec<Member>>>()
            .and_then(Self::new)
    }

    /// Same seating under an identity issued earlier, for resuming a session.
    pub fn with_id(self, id: ID<Group>) -> Self {
        Self { id, ..self }
    }

    pub fn members(&self) -> &[Member; N] {
        &self.members
    }
    pub fn member(&self, role: Role) -> &Member {
        &self.members[role.position()]
    }
    pub fn contains(&self, id: ID<Participant>) -> bool {
        self.members.iter().any(|m| m.id() == id)
    }
    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }
    pub fn assign(&mut self, assignment: Assignment) {
        self.assignment = Some(assignment);
    }
}

impl Unique for Group {
    fn id(&self) -> ID<Group> {
        self.id
    }
}

/// Wire shape of a [`Group`].
#[derive(serde::Serialize, serde::Deserialize)]
struct Layout {
    id: ID<Group>,
    members: Vec<Member>,
    assignment: Option<Assignment>,
}

impl TryFrom<Layout> for Group {
    type Error = anyhow::Error;
    fn try_from(layout: Layout) -> Result<Self, Self::Error> {
        let mut group = Self::new(layout.members)?.with_id(layout.id);
        group.assignment = layout.assignment;
        Ok(group)
    }
}

impl From<Group> for Layout {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            members: group.members.to_vec(),
            assignment: group.assignment,
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.assignment {
            Some(assignment) => writeln!(f, "group {} {}", self.id, assignment)?,
            None => writeln!(f, "group {}", self.id)?,
        }
        for member in self.members.iter() {
            writeln!(f, "  {}", member)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<ID<Participant>> {
        (0..n).map(|_| ID::default()).collect()
    }

    #[test]
    fn seats_by_position() {
        let ids = ids(N);
        let group = Group::seat(&ids).unwrap();
        assert_eq!(group.member(Role::JustWorld).id(), ids[0]);
        assert_eq!(group.member(Role::Elite).id(), ids[1]);
        assert_eq!(group.member(Role::NonElite).id(), ids[2]);
        assert!(group.contains(ids[1]));
        assert!(!group.contains(ID::default()));
    }

    #[test]
    fn orders_members_by_role() {
        let ids = ids(N);
        let group = Group::new(vec![
            Member::new(ids[0], Role::NonElite),
            Member::new(ids[1], Role::JustWorld),
            Member::new(ids[2], Role::Elite),
        ])
        .unwrap();
        let roles = group.members().iter().map(|m| m.role()).collect::<Vec<_>>();
        assert_eq!(roles, Role::all().to_vec());
        assert_eq!(group.member(Role::NonElite).id(), ids[0]);
    }

    #[test]
    fn rejects_wrong_size() {
        assert!(Group::seat(&ids(2)).is_err());
        assert!(Group::seat(&ids(4)).is_err());
    }

    #[test]
    fn rejects_duplicate_roles() {
        let ids = ids(N);
        let members = vec![
            Member::new(ids[0], Role::Elite),
            Member::new(ids[1], Role::Elite),
            Member::new(ids[2], Role::NonElite),
        ];
        assert!(Group::new(members).is_err());
    }

    #[test]
    fn rejects_duplicate_participants() {
        let id = ID::default();
        assert!(Group::seat(&[id, id, ID::default()]).is_err());
    }

    #[test]
    fn json_goes_through_validation() {
        let mut group = Group::seat(&ids(N)).unwrap();
        group.assign(Assignment::Personal(crate::session::Character::Daniel));
        let json = serde_json::to_string(&group).unwrap();
        assert_eq!(serde_json::from_str::<Group>(&json).unwrap(), group);
        let mut value = serde_json::to_value(&group).unwrap();
        value["members"][1]["role"] = serde_json::json!("JustWorld");
        assert!(serde_json::from_value::<Group>(value).is_err());
    }
}
