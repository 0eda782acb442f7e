use derive_more::Display;
use serde::{Serialize, Serializer};

use crate::{Category, ExerciseRecord, ExperienceLevel, FitnessGoal, Origin};

pub const CORE_BACKFILL_REST_SECONDS: u32 = 45;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Reps {
    #[display("{_0}-{_1}")]
    Range(u32, u32),
    #[display("{_0}-{_1} min")]
    Minutes(u32, u32),
}

impl Serialize for Reps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub sets: u32,
    pub reps: Reps,
}

/// Sets and reps for an exercise of the given category.
///
/// Cardio and core work ignore goal and level. Strength and unknown categories
/// follow the goal and level table.
#[must_use]
pub fn prescribe(
    fitness_goal: FitnessGoal,
    experience_level: ExperienceLevel,
    category: &Category,
) -> Prescription {
    match category {
        Category::Cardio => Prescription {
            sets: 1,
            reps: Reps::Minutes(10, 15),
        },
        Category::Core => Prescription {
            sets: 3,
            reps: Reps::Range(15, 20),
        },
        Category::Strength | Category::Other(_) => base(fitness_goal, experience_level),
    }
}

fn base(fitness_goal: FitnessGoal, experience_level: ExperienceLevel) -> Prescription {
    #[allow(clippy::match_same_arms)]
    let (sets, reps) = match (fitness_goal, experience_level) {
        (FitnessGoal::MuscleGain, ExperienceLevel::Beginner) => (3, Reps::Range(8, 12)),
        (FitnessGoal::MuscleGain, ExperienceLevel::Intermediate) => (4, Reps::Range(8, 12)),
        (FitnessGoal::FatLoss, ExperienceLevel::Beginner) => (3, Reps::Range(12, 15)),
        (FitnessGoal::FatLoss, ExperienceLevel::Intermediate) => (3, Reps::Range(12, 15)),
        (FitnessGoal::Endurance, ExperienceLevel::Beginner) => (2, Reps::Range(15, 20)),
        (FitnessGoal::Endurance, ExperienceLevel::Intermediate) => (3, Reps::Range(15, 20)),
    };
    Prescription { sets, reps }
}

#[must_use]
pub fn rest_seconds(exercise: &ExerciseRecord, origin: Origin) -> u32 {
    match origin {
        Origin::Focus => exercise.rest_seconds(),
        Origin::CoreBackfill => CORE_BACKFILL_REST_SECONDS,
    }
}
