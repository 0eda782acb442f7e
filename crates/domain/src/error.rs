use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),
    #[error(transparent)]
    Read(#[from] ReadError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidParameter {
    #[error("fitness_goal must be 'fat_loss', 'muscle_gain', or 'endurance' (got '{0}')")]
    FitnessGoal(String),
    #[error("experience_level must be 'beginner' or 'intermediate' (got '{0}')")]
    ExperienceLevel(String),
    #[error("days_per_week must be between 3 and 6 (got {0})")]
    DaysPerWeek(u32),
    #[error("session_minutes must be between 20 and 120 (got {0})")]
    SessionMinutes(u32),
}

impl InvalidParameter {
    /// Name of the request field that was rejected.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            InvalidParameter::FitnessGoal(_) => "fitness_goal",
            InvalidParameter::ExperienceLevel(_) => "experience_level",
            InvalidParameter::DaysPerWeek(_) => "days_per_week",
            InvalidParameter::SessionMinutes(_) => "session_minutes",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("catalog not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed catalog: {0}")]
    Malformed(String),
}
