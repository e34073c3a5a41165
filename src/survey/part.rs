/// The two halves of a session. Part two follows the narrative treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const fn all() -> [Self; 2] {
        [Self::One, Self::Two]
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part I"),
            Self::Two => write!(f, "Part II"),
        }
    }
}
