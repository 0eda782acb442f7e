use std::fmt;

use serde::{Serialize, Serializer};

use crate::{ExperienceLevel, FocusArea, ReadError};

pub const DEFAULT_REST_SECONDS: u32 = 60;
pub const INSTRUCTIONS_LIMIT: usize = 100;

/// Name fragments that mark a multi-joint movement.
pub const COMPOUND_KEYWORDS: [&str; 6] = ["squat", "deadlift", "press", "pull", "row", "lunge"];

pub trait CatalogRepository {
    fn read_exercises(&self) -> Result<Vec<ExerciseRecord>, ReadError>;
}

/// One row of the exercise catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseRecord {
    pub name: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub is_beginner_safe: bool,
    pub muscle_groups: String,
    pub body_part: String,
    pub equipment: String,
    /// Catalog hint, not used for prescriptions.
    pub target_sets: Option<u32>,
    /// Catalog hint, not used for prescriptions.
    pub target_reps: Option<String>,
    pub rest_time_seconds: Option<u32>,
    pub instructions: Option<String>,
}

impl ExerciseRecord {
    #[must_use]
    pub fn is_eligible_for(&self, level: ExperienceLevel) -> bool {
        match level {
            ExperienceLevel::Beginner => {
                self.is_beginner_safe || self.difficulty == Difficulty::Beginner
            }
            ExperienceLevel::Intermediate => matches!(
                self.difficulty,
                Difficulty::Beginner | Difficulty::Intermediate
            ),
        }
    }

    /// Whether the muscle groups or the body part mention any of the focus areas.
    #[must_use]
    pub fn targets_any(&self, focus_areas: &[FocusArea]) -> bool {
        let muscle_groups = self.muscle_groups.to_lowercase();
        let body_part = self.body_part.to_lowercase();
        focus_areas.iter().any(|area| {
            let keyword = area.as_ref();
            muscle_groups.contains(keyword) || body_part.contains(keyword)
        })
    }

    #[must_use]
    pub fn is_compound(&self) -> bool {
        let name = self.name.to_lowercase();
        COMPOUND_KEYWORDS
            .iter()
            .any(|keyword| name.contains(keyword))
    }

    #[must_use]
    pub fn rest_seconds(&self) -> u32 {
        self.rest_time_seconds.unwrap_or(DEFAULT_REST_SECONDS)
    }

    #[must_use]
    pub fn short_instructions(&self) -> Option<String> {
        self.instructions.as_deref().map(|instructions| {
            if instructions.chars().count() > INSTRUCTIONS_LIMIT {
                let truncated = instructions
                    .chars()
                    .take(INSTRUCTIONS_LIMIT)
                    .collect::<String>();
                format!("{truncated}...")
            } else {
                instructions.to_string()
            }
        })
    }
}

/// Narrows the catalog to the rows permitted for the experience level.
#[must_use]
pub fn eligible_exercises(
    catalog: &[ExerciseRecord],
    level: ExperienceLevel,
) -> Vec<&ExerciseRecord> {
    catalog
        .iter()
        .filter(|exercise| exercise.is_eligible_for(level))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Strength,
    Cardio,
    Core,
    Other(String),
}

impl Category {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::Strength => "strength",
            Category::Cardio => "cardio",
            Category::Core => "core",
            Category::Other(other) => other,
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "strength" => Category::Strength,
            "cardio" => Category::Cardio,
            "core" => Category::Core,
            other => Category::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Other(String),
}

impl Difficulty {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Other(other) => other,
        }
    }
}

impl From<&str> for Difficulty {
    fn from(value: &str) -> Self {
        match value {
            "beginner" => Difficulty::Beginner,
            "intermediate" => Difficulty::Intermediate,
            other => Difficulty::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
