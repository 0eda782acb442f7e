use crate::{Category, Difficulty, ExerciseRecord};

pub fn exercise(
    name: &str,
    category: Category,
    muscle_groups: &str,
    body_part: &str,
) -> ExerciseRecord {
    ExerciseRecord {
        name: name.to_string(),
        category,
        difficulty: Difficulty::Beginner,
        is_beginner_safe: true,
        muscle_groups: muscle_groups.to_string(),
        body_part: body_part.to_string(),
        equipment: "None".to_string(),
        target_sets: None,
        target_reps: None,
        rest_time_seconds: None,
        instructions: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    name: &str,
    category: Category,
    difficulty: &str,
    is_beginner_safe: bool,
    muscle_groups: &str,
    body_part: &str,
    equipment: &str,
    rest_time_seconds: u32,
) -> ExerciseRecord {
    ExerciseRecord {
        difficulty: Difficulty::from(difficulty),
        is_beginner_safe,
        equipment: equipment.to_string(),
        target_sets: Some(3),
        target_reps: Some("10-12".to_string()),
        rest_time_seconds: Some(rest_time_seconds),
        instructions: Some(format!("Perform the {name} with control.")),
        ..exercise(name, category, muscle_groups, body_part)
    }
}

#[rustfmt::skip]
pub static CATALOG: std::sync::LazyLock<Vec<ExerciseRecord>> = std::sync::LazyLock::new(|| {
    use crate::Category::{Cardio, Core, Strength};

    vec![
        entry("Barbell Bench Press", Strength, "beginner", false, "chest, triceps", "upper body", "Barbell", 90),
        entry("Overhead Press", Strength, "beginner", false, "shoulders, triceps", "upper body", "Barbell", 90),
        entry("Bent Over Row", Strength, "beginner", false, "back, biceps", "upper body", "Barbell", 90),
        entry("Lat Pulldown", Strength, "beginner", false, "back, biceps", "upper body", "Cable", 75),
        entry("Dumbbell Bicep Curl", Strength, "beginner", false, "biceps", "upper body", "Dumbbell", 60),
        entry("Tricep Pushdown", Strength, "beginner", false, "triceps", "upper body", "Cable", 60),
        entry("Lateral Raise", Strength, "beginner", false, "shoulders", "upper body", "Dumbbell", 60),
        entry("Pull Up", Strength, "intermediate", true, "back, biceps", "upper body", "Pull Up Bar", 120),
        entry("Muscle Up", Strength, "intermediate", false, "back, chest, triceps", "upper body", "Pull Up Bar", 120),
        entry("Barbell Back Squat", Strength, "beginner", false, "legs, glutes", "lower body", "Barbell", 120),
        entry("Romanian Deadlift", Strength, "intermediate", false, "legs, hamstrings, glutes", "lower body", "Barbell", 120),
        entry("Walking Lunge", Strength, "beginner", false, "legs, glutes", "lower body", "Dumbbell", 60),
        entry("Leg Press", Strength, "beginner", false, "legs", "lower body", "Machine", 90),
        entry("Standing Calf Raise", Strength, "beginner", false, "legs, calves", "lower body", "Machine", 45),
        entry("Glute Bridge", Strength, "beginner", true, "glutes, legs", "lower body", "None", 45),
        entry("Goblet Squat", Strength, "beginner", false, "legs", "lower body", "Kettlebell", 60),
        entry("Leg Curl", Strength, "beginner", false, "legs, hamstrings", "lower body", "Machine", 60),
        entry("Power Snatch", Strength, "advanced", false, "legs, shoulders, back", "full body", "Barbell", 180),
        entry("Jump Rope", Cardio, "beginner", true, "calves, shoulders", "full body", "Jump Rope", 30),
        entry("Stationary Bike", Cardio, "beginner", true, "legs, quadriceps", "lower body", "Machine", 30),
        entry("Plank", Core, "beginner", true, "abs, obliques", "core", "None", 30),
        entry("Dead Bug", Core, "beginner", true, "abs", "core", "None", 30),
        entry("Russian Twist", Core, "intermediate", false, "abs, obliques", "core", "None", 30),
    ]
});
