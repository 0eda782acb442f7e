use std::fmt;

use crate::WeeklyPlan;

const RULE_WIDTH: usize = 80;

impl fmt::Display for WeeklyPlan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let heavy_rule = "=".repeat(RULE_WIDTH);
        let light_rule = "-".repeat(RULE_WIDTH);

        writeln!(f)?;
        writeln!(f, "{heavy_rule}")?;
        writeln!(f, "WEEKLY WORKOUT PLAN")?;
        writeln!(f, "{heavy_rule}")?;
        writeln!(f)?;
        writeln!(f, "Goal: {}", self.goal.title())?;
        writeln!(f, "Experience Level: {}", self.level.title())?;
        writeln!(f, "Workout Days: {} days/week", self.days_per_week)?;
        writeln!(f, "Split Type: {}", self.split_type)?;
        writeln!(f, "{heavy_rule}")?;

        for day in &self.days {
            writeln!(f)?;
            writeln!(f, "{}", day.day_name.to_uppercase())?;
            writeln!(f, "{light_rule}")?;

            for (i, exercise) in day.exercises.iter().enumerate() {
                writeln!(f)?;
                writeln!(f, "{}. {}", i + 1, exercise.name)?;
                writeln!(f, "   Muscle Groups: {}", exercise.muscle_groups)?;
                writeln!(f, "   Equipment: {}", exercise.equipment)?;
                writeln!(f, "   Sets x Reps: {} x {}", exercise.sets, exercise.reps)?;
                writeln!(f, "   Rest: {}s", exercise.rest_seconds)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{heavy_rule}")?;
        writeln!(f, "WORKOUT PLAN COMPLETE")?;
        writeln!(f, "{heavy_rule}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        Category, DailyWorkout, ExperienceLevel, FitnessGoal, Reps, SelectedExercise, Split,
        WeeklyPlan,
    };

    #[test]
    fn test_weekly_plan_display() {
        let plan = WeeklyPlan {
            goal: FitnessGoal::MuscleGain,
            level: ExperienceLevel::Beginner,
            days_per_week: 3,
            split_type: Split::FullBody,
            days: vec![
                DailyWorkout {
                    day_name: "Day 1 - Full Body".to_string(),
                    exercises: vec![
                        SelectedExercise {
                            name: "Back Squat".to_string(),
                            category: Category::Strength,
                            muscle_groups: "quadriceps, glutes".to_string(),
                            equipment: "Barbell".to_string(),
                            sets: 3,
                            reps: Reps::Range(8, 12),
                            rest_seconds: 90,
                            instructions: None,
                        },
                        SelectedExercise {
                            name: "Plank".to_string(),
                            category: Category::Core,
                            muscle_groups: "abs".to_string(),
                            equipment: "None".to_string(),
                            sets: 3,
                            reps: Reps::Range(15, 20),
                            rest_seconds: 45,
                            instructions: Some("Hold a straight line.".to_string()),
                        },
                    ],
                },
                DailyWorkout {
                    day_name: "Day 2 - Full Body".to_string(),
                    exercises: vec![],
                },
            ],
        };
        let heavy = "=".repeat(80);
        let light = "-".repeat(80);

        assert_eq!(
            plan.to_string(),
            format!(
                "
{heavy}
WEEKLY WORKOUT PLAN
{heavy}

Goal: Muscle Gain
Experience Level: Beginner
Workout Days: 3 days/week
Split Type: Full Body (3x/week)
{heavy}

DAY 1 - FULL BODY
{light}

1. Back Squat
   Muscle Groups: quadriceps, glutes
   Equipment: Barbell
   Sets x Reps: 3 x 8-12
   Rest: 90s

2. Plank
   Muscle Groups: abs
   Equipment: None
   Sets x Reps: 3 x 15-20
   Rest: 45s

DAY 2 - FULL BODY
{light}

{heavy}
WORKOUT PLAN COMPLETE
{heavy}
"
            )
        );
    }
}
