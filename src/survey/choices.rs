use super::Scenario;
use crate::SCENARIOS;

/// A participant's four submitted answers.
///
/// `true` prefers the risky lottery (option A on the form), `false` prefers
/// the safe loss (option B). Built once from a complete submission and
/// never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Choices([bool; SCENARIOS]);

impl Choices {
    /// Answer given for a scenario.
    pub fn at(&self, scenario: Scenario) -> bool {
        self.0[scenario.index()]
    }
    /// Number of scenarios where the lottery was preferred.
    pub fn risky(&self) -> usize {
        self.0.iter().filter(|c| **c).count()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Scenario, bool)> + '_ {
        Scenario::all().zip(self.0.iter().copied())
    }
    /// Independent fair coin per scenario.
    pub fn sample<R>(rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        Self(std::array::from_fn(|_| rng.random_bool(0.5)))
    }
}

impl From<[bool; SCENARIOS]> for Choices {
    fn from(answers: [bool; SCENARIOS]) -> Self {
        Self(answers)
    }
}

impl TryFrom<&[bool]> for Choices {
    type Error = anyhow::Error;
    fn try_from(answers: &[bool]) -> Result<Self, Self::Error> {
        <[bool; SCENARIOS]>::try_from(answers).map(Self).map_err(|_| {
            anyhow::anyhow!(
                "choice set has {} answers, expected {}",
                answers.len(),
                SCENARIOS
            )
        })
    }
}

/// Form submissions where an unanswered field is `None`.
impl TryFrom<&[Option<bool>]> for Choices {
    type Error = anyhow::Error;
    fn try_from(answers: &[Option<bool>]) -> Result<Self, Self::Error> {
        let answered = answers
            .iter()
            .enumerate()
            .map(|(i, a)| a.ok_or_else(|| anyhow::anyhow!("scenario {} left unanswered", i + 1)))
            .collect::<Result<Vec<bool>, _>>()?;
        Self::try_from(answered.as_slice())
    }
}

impl crate::Arbitrary for Choices {
    fn random() -> Self {
        Self::sample(&mut rand::rng())
    }
}

impl std::fmt::Display for Choices {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let letters = self
            .0
            .iter()
            .map(|c| if *c { "A" } else { "B" })
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_scenario() {
        let choices = Choices::from([true, false, false, true]);
        let s3 = Scenario::try_from(3).unwrap();
        let s4 = Scenario::try_from(4).unwrap();
        assert!(!choices.at(s3));
        assert!(choices.at(s4));
        assert_eq!(choices.risky(), 2);
    }

    #[test]
    fn rejects_short_submission() {
        let short: &[bool] = &[true, false, true];
        assert!(Choices::try_from(short).is_err());
        let long: &[bool] = &[true, false, true, false, true];
        assert!(Choices::try_from(long).is_err());
    }

    #[test]
    fn rejects_unanswered_field() {
        let partial: &[Option<bool>] = &[Some(true), None, Some(false), Some(true)];
        assert!(Choices::try_from(partial).is_err());
        let full: &[Option<bool>] = &[Some(true), Some(true), Some(false), Some(true)];
        assert_eq!(
            Choices::try_from(full).unwrap(),
            Choices::from([true, true, false, true])
        );
    }

    #[test]
    fn display_form_letters() {
        let choices = Choices::from([true, false, false, true]);
        assert_eq!(choices.to_string(), "A B B A");
    }
}
