use super::*;
use crate::ID;
use crate::N;
use crate::Unique;
use crate::ledger::Ledger;
use crate::ledger::Participant;
use crate::ledger::Repository;
use crate::payoff::Dice;
use crate::payoff::Resolver;
use crate::payoff::Round;
use crate::payoff::Submissions;
use crate::survey::Part;

/// A full session: groups, treatments, both parts, and final statements.
///
/// Participants are seated in arrival order, three to a group. Part one
/// is played first, then treatments are handed out, then part two.
/// Seating is checked against the ledger, and treating or playing checks
/// every group before any of them touches it.
pub struct Session<L = Ledger>
where
    L: Repository,
{
    config: Config,
    groups: Vec<Group>,
    ledger: L,
}

impl Session<Ledger> {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Self::with(config, Ledger::default())
    }
}

impl<L> Session<L>
where
    L: Repository,
{
    /// Seats freshly identified participants over an existing repository.
    pub fn with(config: Config, ledger: L) -> anyhow::Result<Self> {
        let ids = (0..config.participants())
            .map(|_| ID::default())
            .collect::<Vec<ID<Participant>>>();
        Self::seat(config, &ids, ledger)
    }

    /// Seats the given participants in arrival order.
    pub fn seat(config: Config, arrivals: &[ID<Participant>], ledger: L) -> anyhow::Result<Self> {
        config.validate()?;
        anyhow::ensure!(
            arrivals.len() == config.participants(),
            "{} arrivals for a session of {}",
            arrivals.len(),
            config.participants()
        );
        let groups = arrivals
            .chunks(N)
            .map(|ids| Group::seat(ids).and_then(|group| Self::resume(group, &ledger)))
            .collect::<anyhow::Result<Vec<Group>>>()?;
        for (i, a) in arrivals.iter().enumerate() {
            anyhow::ensure!(
                !arrivals[i + 1..].contains(a),
                "participant {} arrived twice",
                a
            );
        }
        log::info!(
            "seated {} participants in {} groups",
            arrivals.len(),
            groups.len()
        );
        Ok(Self {
            config,
            groups,
            ledger,
        })
    }

    /// Carries over the group identity and treatment of returning participants.
    ///
    /// A group is either entirely new or entirely returning, and returning
    /// members must sit in the group and role the ledger recorded for them.
    fn resume(group: Group, ledger: &L) -> anyhow::Result<Group> {
        let head = group.members()[0];
        let Some(first) = ledger.lookup(head.id()) else {
            for member in group.members() {
                anyhow::ensure!(
                    ledger.lookup(member.id()).is_none(),
                    "{} returns alongside new participants",
                    member
                );
            }
            return Ok(group);
        };
        for member in group.members() {
            let record = ledger
                .lookup(member.id())
                .ok_or_else(|| anyhow::anyhow!("{} is new in a returning group", member))?;
            anyhow::ensure!(
                record.role() == member.role(),
                "{} is recorded as {}, role cannot change",
                member,
                record.role()
            );
            anyhow::ensure!(
                record.group() == first.group(),
                "{} was seated in group {}",
                member,
                record.group()
            );
        }
        let mut group = group.with_id(first.group());
        if let Some(assignment) = first.assignment() {
            group.assign(*assignment);
        }
        Ok(group)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
    pub fn ledger(&self) -> &L {
        &self.ledger
    }
    pub fn into_ledger(self) -> L {
        self.ledger
    }
    pub fn participants(&self) -> impl Iterator<Item = ID<Participant>> + '_ {
        self.groups
            .iter()
            .flat_map(|g| g.members().iter().map(|m| m.id()))
    }
    pub fn is_settled(&self, part: Part) -> bool {
        self.participants().all(|id| {
            self.ledger
                .lookup(id)
                .is_some_and(|p| p.is_settled(part))
        })
    }
    pub fn is_treated(&self) -> bool {
        self.groups.iter().all(|g| g.assignment().is_some())
    }

    /// Hands out part-two treatments in group order.
    pub fn treat(&mut self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.is_settled(Part::One),
            "treatments follow {}",
            Part::One
        );
        let assignments = Assignment::cycle(self.groups.len());
        for (group, assignment) in self.groups.iter().zip(assignments.iter()) {
            for member in group.members() {
                let record = self.ledger.lookup(member.id());
                anyhow::ensure!(
                    record.is_some_and(|p| p.assignment().is_none_or(|a| a == assignment)),
                    "{} cannot take {}",
                    member,
                    assignment
                );
            }
        }
        for (group, assignment) in self.groups.iter_mut().zip(assignments) {
            for member in group.members() {
                self.ledger.assign(member.id(), assignment)?;
            }
            group.assign(assignment);
            log::info!("group {} assigned {}", group.id(), assignment);
        }
        Ok(())
    }

    /// Resolves every group for one part.
    pub fn play<D>(
        &mut self,
        part: Part,
        submissions: &Submissions,
        dice: &mut D,
    ) -> anyhow::Result<Vec<Round>>
    where
        D: Dice + ?Sized,
    {
        if let Some(missing) = self.participants().find(|id| !submissions.contains_key(id)) {
            return Err(anyhow::anyhow!(
                "participant {} submitted no choices for {}",
                missing,
                part
            ));
        }
        if let Some(settled) = self.participants().find(|id| {
            self.ledger
                .lookup(*id)
                .is_some_and(|p| p.is_settled(part))
        }) {
            return Err(anyhow::anyhow!(
                "participant {} already resolved for {}",
                settled,
                part
            ));
        }
        if part == Part::Two {
            anyhow::ensure!(self.is_settled(Part::One), "{} is not finished", Part::One);
            anyhow::ensure!(self.is_treated(), "treatments not assigned");
        }
        let mut resolver = Resolver::new(self.config.table(), dice);
        for group in self.groups.iter() {
            resolver.admit(part, group, submissions, &self.ledger)?;
        }
        let rounds = self
            .groups
            .iter()
            .map(|group| resolver.resolve(part, group, submissions, &mut self.ledger))
            .collect::<anyhow::Result<Vec<Round>>>()?;
        log::info!("{} resolved for {} groups", part, rounds.len());
        Ok(rounds)
    }

    /// Final earnings, in seating order. Fails until both parts are settled.
    pub fn statements(&self) -> anyhow::Result<Vec<(ID<Participant>, Statement)>> {
        self.participants()
            .map(|id| {
                self.ledger
                    .lookup(id)
                    .ok_or_else(|| anyhow::anyhow!("participant {} never played", id))
                    .and_then(|p| Statement::new(p, &self.config))
                    .map(|s| (id, s))
            })
            .collect()
    }
}
