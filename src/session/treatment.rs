/// Part-two narrative condition of a group.
///
/// - `T0` — control: a narrative with information irrelevant to the decision
/// - `T1` — personal narrative told through a fictional character
/// - `T2` — impersonal narrative with the same information as `T1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Treatment {
    T0,
    T1,
    T2,
}

impl Treatment {
    pub const fn all() -> [Self; 3] {
        [Self::T0, Self::T1, Self::T2]
    }
}

impl TryFrom<&str> for Treatment {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "T0" => Ok(Self::T0),
            "T1" => Ok(Self::T1),
            "T2" => Ok(Self::T2),
            _ => Err(anyhow::anyhow!("invalid treatment string: {}", s)),
        }
    }
}

impl std::fmt::Display for Treatment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::T0 => write!(f, "T0"),
            Self::T1 => write!(f, "T1"),
            Self::T2 => write!(f, "T2"),
        }
    }
}

/// Fictional character of the personal narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Character {
    Samantha,
    Daniel,
}

impl Character {
    pub const fn all() -> [Self; 2] {
        [Self::Samantha, Self::Daniel]
    }
    /// Subject pronoun used by the narrative template.
    pub fn pronoun(&self) -> &'static str {
        match self {
            Self::Samantha => "she",
            Self::Daniel => "he",
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Samantha => write!(f, "Samantha"),
            Self::Daniel => write!(f, "Daniel"),
        }
    }
}

/// What a group is shown before part two.
///
/// Only the personal narrative carries a character, so a character can
/// never be attached to `T0` or `T2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Assignment {
    Control,
    Personal(Character),
    Impersonal,
}

impl Assignment {
    pub fn treatment(&self) -> Treatment {
        match self {
            Self::Control => Treatment::T0,
            Self::Personal(_) => Treatment::T1,
            Self::Impersonal => Treatment::T2,
        }
    }
    pub fn character(&self) -> Option<Character> {
        match self {
            Self::Personal(character) => Some(*character),
            Self::Control | Self::Impersonal => None,
        }
    }

    /// Balanced assignment for groups in session order.
    ///
    /// Treatments cycle `T0, T1, T2` over all groups. Characters cycle
    /// `Samantha, Daniel` over the `T1` groups only, so both characters
    /// are as evenly represented as the treatment itself.
    pub fn cycle(groups: usize) -> Vec<Self> {
        let mut characters = Character::all().into_iter().cycle();
        Treatment::all()
            .into_iter()
            .cycle()
            .take(groups)
            .map(|treatment| match treatment {
                Treatment::T0 => Self::Control,
                Treatment::T1 => Self::Personal(characters.next().unwrap_or(Character::Samantha)),
                Treatment::T2 => Self::Impersonal,
            })
            .collect()
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.character() {
            Some(character) => write!(f, "{} ({})", self.treatment(), character),
            None => write!(f, "{}", self.treatment()),
        }
    }
}
