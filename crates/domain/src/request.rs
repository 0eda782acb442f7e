use std::ops::RangeInclusive;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::InvalidParameter;

pub const DAYS_PER_WEEK: RangeInclusive<u32> = 3..=6;
pub const SESSION_MINUTES: RangeInclusive<u32> = 20..=120;

#[derive(
    AsRefStr, Display, EnumIter, EnumString, Serialize, Debug, Clone, Copy, Hash, PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FitnessGoal {
    FatLoss,
    MuscleGain,
    Endurance,
}

impl FitnessGoal {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            FitnessGoal::FatLoss => "Fat Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::Endurance => "Endurance",
        }
    }
}

#[derive(
    AsRefStr, Display, EnumIter, EnumString, Serialize, Debug, Clone, Copy, Hash, PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
}

impl ExperienceLevel {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanRequest {
    pub fitness_goal: FitnessGoal,
    pub experience_level: ExperienceLevel,
    pub days_per_week: u32,
    pub session_minutes: u32,
}

impl PlanRequest {
    /// Builds a request from raw caller input.
    ///
    /// Fields are checked in declaration order and the first violation is reported.
    pub fn parse(
        fitness_goal: &str,
        experience_level: &str,
        days_per_week: u32,
        session_minutes: u32,
    ) -> Result<Self, InvalidParameter> {
        let fitness_goal = fitness_goal
            .parse::<FitnessGoal>()
            .map_err(|_| InvalidParameter::FitnessGoal(fitness_goal.to_string()))?;
        let experience_level = experience_level
            .parse::<ExperienceLevel>()
            .map_err(|_| InvalidParameter::ExperienceLevel(experience_level.to_string()))?;

        PlanRequest {
            fitness_goal,
            experience_level,
            days_per_week,
            session_minutes,
        }
        .validate()
    }

    /// Returns the request unchanged if the schedule lies in its accepted domain.
    pub fn validate(self) -> Result<Self, InvalidParameter> {
        if !DAYS_PER_WEEK.contains(&self.days_per_week) {
            return Err(InvalidParameter::DaysPerWeek(self.days_per_week));
        }

        if !SESSION_MINUTES.contains(&self.session_minutes) {
            return Err(InvalidParameter::SessionMinutes(self.session_minutes));
        }

        Ok(self)
    }
}
