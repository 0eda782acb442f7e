use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::{
    Category, DayTemplate, ExerciseRecord, ExperienceLevel, FitnessGoal, InvalidParameter,
    PlanRequest, Reps, Selection, Split, eligible_exercises, plan_split, prescribe, rest_seconds,
    select_exercises,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedExercise {
    pub name: String,
    pub category: Category,
    pub muscle_groups: String,
    pub equipment: String,
    pub sets: u32,
    pub reps: Reps,
    pub rest_seconds: u32,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyWorkout {
    pub day_name: String,
    pub exercises: Vec<SelectedExercise>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyPlan {
    pub goal: FitnessGoal,
    pub level: ExperienceLevel,
    pub days_per_week: u32,
    pub split_type: Split,
    #[serde(rename = "weekly_plan")]
    pub days: Vec<DailyWorkout>,
}

impl WeeklyPlan {
    /// Validates the request and builds a plan from the catalog.
    ///
    /// Days without any matching exercise stay empty.
    pub fn generate<R>(
        request: PlanRequest,
        catalog: &[ExerciseRecord],
        rng: &mut R,
    ) -> Result<Self, InvalidParameter>
    where
        R: Rng + ?Sized,
    {
        let request = request.validate()?;
        let eligible = eligible_exercises(catalog, request.experience_level);
        debug!(
            "{} of {} exercises eligible for {} level",
            eligible.len(),
            catalog.len(),
            request.experience_level
        );

        let (split, days) = plan_split(request.days_per_week, request.fitness_goal);
        let exercises = days
            .iter()
            .map(|day| {
                select_exercises(&eligible, day, request.session_minutes, rng)
                    .into_iter()
                    .map(|selection| prescribe_selection(&request, selection))
                    .collect()
            })
            .collect();

        Ok(Self::assemble(&request, split, &days, exercises))
    }

    /// Pairs the day templates with their exercises in split order.
    #[must_use]
    pub fn assemble(
        request: &PlanRequest,
        split: Split,
        days: &[DayTemplate],
        exercises: Vec<Vec<SelectedExercise>>,
    ) -> Self {
        Self {
            goal: request.fitness_goal,
            level: request.experience_level,
            days_per_week: request.days_per_week,
            split_type: split,
            days: days
                .iter()
                .zip(exercises)
                .map(|(day, exercises)| DailyWorkout {
                    day_name: day.name.clone(),
                    exercises,
                })
                .collect(),
        }
    }
}

fn prescribe_selection(request: &PlanRequest, selection: Selection) -> SelectedExercise {
    let exercise = selection.exercise;
    let prescription = prescribe(
        request.fitness_goal,
        request.experience_level,
        &exercise.category,
    );
    SelectedExercise {
        name: exercise.name.clone(),
        category: exercise.category.clone(),
        muscle_groups: exercise.muscle_groups.clone(),
        equipment: exercise.equipment.clone(),
        sets: prescription.sets,
        reps: prescription.reps,
        rest_seconds: rest_seconds(exercise, selection.origin),
        instructions: exercise.short_instructions(),
    }
}
