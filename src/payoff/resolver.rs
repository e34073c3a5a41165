use super::*;
use crate::ID;
use crate::Unique;
use crate::ledger::Entry;
use crate::ledger::Participant;
use crate::ledger::Repository;
use crate::session::Group;
use crate::session::Member;
use crate::survey::*;
use std::collections::BTreeMap;

/// Submitted choice sets for one part, keyed by participant.
pub type Submissions = BTreeMap<ID<Participant>, Choices>;

/// Resolves groups against a payoff table.
///
/// Call [`Resolver::resolve`] once per group per part, after every member
/// has submitted. The whole group is checked against the ledger before any
/// draw is made, so a refused resolution leaves the ledger untouched and
/// consumes no randomness.
pub struct Resolver<'a, D>
where
    D: Dice + ?Sized,
{
    table: &'a Table,
    dice: &'a mut D,
}

impl<'a, D> Resolver<'a, D>
where
    D: Dice + ?Sized,
{
    pub fn new(table: &'a Table, dice: &'a mut D) -> Self {
        Self { table, dice }
    }

    pub fn resolve<L>(
        &mut self,
        part: Part,
        group: &Group,
        submissions: &Submissions,
        ledger: &mut L,
    ) -> anyhow::Result<Round>
    where
        L: Repository,
    {
        let admitted = self.admit(part, group, submissions, &*ledger)?;
        let mut results = Vec::with_capacity(admitted.len());
        for (member, role, choices) in admitted {
            let outcome = Outcome::resolve(role, &choices, self.table, &mut *self.dice);
            if part == Part::One {
                ledger.enroll(member.id(), role, group.id())?;
            }
            ledger.settle(member.id(), part, Entry::new(choices, outcome))?;
            log::debug!("{} {} {}", part, member, outcome);
            results.push((member.id(), outcome));
        }
        log::info!(
            "{} resolved group {} payoffs {:?}",
            part,
            group.id(),
            results.iter().map(|(_, o)| o.payoff()).collect::<Vec<_>>()
        );
        Ok(Round::new(part, group.id(), results))
    }

    /// Checks a whole group may be resolved without drawing or writing anything.
    ///
    /// Yields each member with the role to resolve under and their choices.
    pub fn admit<L>(
        &self,
        part: Part,
        group: &Group,
        submissions: &Submissions,
        ledger: &L,
    ) -> anyhow::Result<Vec<(Member, Role, Choices)>>
    where
        L: Repository,
    {
        group
            .members()
            .iter()
            .map(|member| self.admission(part, group, member, submissions, ledger))
            .collect()
    }

    /// Part one takes the role from the group and only requires it to agree
    /// with any earlier enrolment. Part two takes the role from the ledger,
    /// which must already hold the participant's part-one record.
    fn admission<L>(
        &self,
        part: Part,
        group: &Group,
        member: &Member,
        submissions: &Submissions,
        ledger: &L,
    ) -> anyhow::Result<(Member, Role, Choices)>
    where
        L: Repository,
    {
        let id = member.id();
        let choices = submissions
            .get(&id)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("{} submitted no choices for {}", member, part))?;
        let record = ledger.lookup(id);
        let role = match (part, record) {
            (Part::One, None) => member.role(),
            (Part::Two, None) => {
                return Err(anyhow::anyhow!("{} never entered {}", member, Part::One));
            }
            (_, Some(record)) => record.role(),
        };
        anyhow::ensure!(
            role == member.role(),
            "{} is recorded as {}, role cannot change",
            member,
            role
        );
        anyhow::ensure!(
            record.is_none_or(|r| r.group() == group.id()),
            "{} is seated in another group",
            member
        );
        anyhow::ensure!(
            !record.is_some_and(|r| r.is_settled(part)),
            "{} already resolved for {}",
            member,
            part
        );
        Ok((*member, role, choices))
    }
}
