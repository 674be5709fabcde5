//! Julia and Kate's dog study

use std::fmt;

/// A dog is an adult from this age onwards
pub const ADULT_AGE: u32 = 3;

/// Whether a dog has grown up yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// At least [`ADULT_AGE`] years old
    Adult,

    /// Younger than [`ADULT_AGE`]
    Puppy,
}

impl Stage {
    /// Classify a dog by age
    #[must_use]
    pub fn of(age: u32) -> Self {
        if age >= ADULT_AGE {
            Self::Adult
        } else {
            Self::Puppy
        }
    }
}

/// One line of the study
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DogReport {
    /// One-based position in the combined list
    pub number: usize,

    /// Age in dog years
    pub age: u32,

    /// Adult or puppy
    pub stage: Stage,
}

impl fmt::Display for DogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            Stage::Adult => write!(
                f,
                "Dog number {} is an adult, and is {} years old",
                self.number, self.age
            ),
            Stage::Puppy => write!(f, "Dog number {} is still a puppy 🐶", self.number),
        }
    }
}

/// Classify every dog in the study.
///
/// The first and the last two entries of Julia's list are cats, so they are
/// dropped before her list is joined with Kate's.
#[must_use]
pub fn check_dogs(julia: &[u32], kate: &[u32]) -> Vec<DogReport> {
    let only_dogs = julia.get(1..julia.len().saturating_sub(2)).unwrap_or_default();

    only_dogs
        .iter()
        .chain(kate)
        .enumerate()
        .map(|(i, &age)| DogReport {
            number: i + 1,
            age,
            stage: Stage::of(age),
        })
        .collect()
}

/// Convert a dog's age to human years
#[must_use]
pub fn human_age(age: u32) -> u64 {
    let age = u64::from(age);
    if age <= 2 {
        2 * age
    } else {
        16 + age * 4
    }
}

/// The mean human age of the dogs that are at least 18 in human years.
///
/// Returns 0 when no dog qualifies.
#[must_use]
pub fn calc_average_human_age(ages: &[u32]) -> f64 {
    let adults: Vec<u64> = ages
        .iter()
        .map(|&age| human_age(age))
        .filter(|&age| age >= 18)
        .collect();

    if adults.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let total: f64 = adults.iter().map(|&age| age as f64).sum();
    #[allow(clippy::cast_precision_loss)]
    let count = adults.len() as f64;
    total / count
}
