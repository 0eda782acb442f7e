use std::fmt;

use log::debug;
use serde::{Serialize, Serializer};
use strum::{AsRefStr, EnumIter};

use crate::FitnessGoal;

/// Keyword matched against the muscle groups and body part of an exercise.
#[derive(AsRefStr, EnumIter, Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum FocusArea {
    Upper,
    Lower,
    Core,
    Chest,
    Shoulders,
    Triceps,
    Back,
    Biceps,
    Legs,
}

const FULL_BODY: &[FocusArea] = &[FocusArea::Upper, FocusArea::Lower, FocusArea::Core];
const UPPER: &[FocusArea] = &[FocusArea::Upper, FocusArea::Core];
const LOWER: &[FocusArea] = &[FocusArea::Lower, FocusArea::Core];
const PUSH: &[FocusArea] = &[FocusArea::Chest, FocusArea::Shoulders, FocusArea::Triceps];
const PULL: &[FocusArea] = &[FocusArea::Back, FocusArea::Biceps];
// TODO: decide whether the closing pull day of the five day split should keep core work
const PULL_WITH_CORE: &[FocusArea] = &[FocusArea::Back, FocusArea::Biceps, FocusArea::Core];
const LEGS: &[FocusArea] = &[FocusArea::Legs, FocusArea::Core];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTemplate {
    pub name: String,
    pub focus_areas: Vec<FocusArea>,
}

impl DayTemplate {
    fn new(number: usize, title: &str, focus_areas: &[FocusArea]) -> Self {
        Self {
            name: format!("Day {number} - {title}"),
            focus_areas: focus_areas.to_vec(),
        }
    }

    #[must_use]
    pub fn includes(&self, area: FocusArea) -> bool {
        self.focus_areas.contains(&area)
    }
}

#[derive(EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    FullBody,
    UpperLower,
    PushPullLegs,
    PushPullLegsTwice,
}

impl Split {
    /// Days outside the accepted range fall back to the six day split.
    #[must_use]
    pub fn for_days(days_per_week: u32) -> Self {
        match days_per_week {
            3 => Split::FullBody,
            4 => Split::UpperLower,
            5 => Split::PushPullLegs,
            _ => Split::PushPullLegsTwice,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Split::FullBody => "Full Body (3x/week)",
            Split::UpperLower => "Upper/Lower Split",
            Split::PushPullLegs => "Push/Pull/Legs",
            Split::PushPullLegsTwice => "Push/Pull/Legs (2x/week)",
        }
    }

    #[must_use]
    pub fn days(self) -> Vec<DayTemplate> {
        let days: &[(&str, &[FocusArea])] = match self {
            Split::FullBody => &[
                ("Full Body", FULL_BODY),
                ("Full Body", FULL_BODY),
                ("Full Body", FULL_BODY),
            ],
            Split::UpperLower => &[
                ("Upper Body", UPPER),
                ("Lower Body", LOWER),
                ("Upper Body", UPPER),
                ("Lower Body", LOWER),
            ],
            Split::PushPullLegs => &[
                ("Push", PUSH),
                ("Pull", PULL),
                ("Legs", LEGS),
                ("Push", PUSH),
                ("Pull", PULL_WITH_CORE),
            ],
            Split::PushPullLegsTwice => &[
                ("Push", PUSH),
                ("Pull", PULL),
                ("Legs", LEGS),
                ("Push", PUSH),
                ("Pull", PULL),
                ("Legs", LEGS),
            ],
        };
        days.iter()
            .enumerate()
            .map(|(i, (title, focus_areas))| DayTemplate::new(i + 1, title, focus_areas))
            .collect()
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Split {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Picks the split for the schedule. The goal does not change the structure.
#[must_use]
pub fn plan_split(days_per_week: u32, fitness_goal: FitnessGoal) -> (Split, Vec<DayTemplate>) {
    let split = Split::for_days(days_per_week);
    debug!("using {split} for {days_per_week} days per week and goal {fitness_goal}");
    (split, split.days())
}
