use crate::N;

/// Role cluster of a participant, fixed at part-one entry.
///
/// - `JustWorld` — never told about the unequal world; choice is realized
/// - `Elite` — unequal world, advantaged side; choice is realized
/// - `NonElite` — unequal world, disadvantaged side; always gets the lottery
///
/// Roles are handed out by position within a group, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Role {
    JustWorld,
    Elite,
    NonElite,
}

impl Role {
    pub const fn all() -> [Self; N] {
        [Self::JustWorld, Self::Elite, Self::NonElite]
    }
    /// True if the payoff ignores the stated choice and always comes from the lottery.
    pub fn is_forced(&self) -> bool {
        match self {
            Self::JustWorld => false,
            Self::Elite => false,
            Self::NonElite => true,
        }
    }
    /// Position within the group that carries this role.
    pub fn position(&self) -> usize {
        match self {
            Self::JustWorld => 0,
            Self::Elite => 1,
            Self::NonElite => 2,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::JustWorld => "Just World",
            Self::Elite => "Elite",
            Self::NonElite => "Non Elite",
        }
    }
}

impl TryFrom<usize> for Role {
    type Error = anyhow::Error;
    fn try_from(position: usize) -> Result<Self, Self::Error> {
        Self::all()
            .get(position)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no role for group position {}", position))
    }
}

impl TryFrom<&str> for Role {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "JW" | "JUST WORLD" => Ok(Self::JustWorld),
            "E" | "ELITE" => Ok(Self::Elite),
            "NE" | "NON ELITE" => Ok(Self::NonElite),
            _ => Err(anyhow::anyhow!("invalid role string: {}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_non_elite_is_forced() {
        assert!(!Role::JustWorld.is_forced());
        assert!(!Role::Elite.is_forced());
        assert!(Role::NonElite.is_forced());
    }

    #[test]
    fn position_roundtrip() {
        for role in Role::all() {
            assert_eq!(role, Role::try_from(role.position()).unwrap());
        }
        assert!(Role::try_from(N).is_err());
    }

    #[test]
    fn parse_names_and_codes() {
        for role in Role::all() {
            assert_eq!(role, Role::try_from(role.name()).unwrap());
        }
        assert_eq!(Role::try_from("ne").unwrap(), Role::NonElite);
        assert!(Role::try_from("Observer").is_err());
    }
}
