use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use wellfit_domain::{
    CatalogRepository, Category, Difficulty, ExerciseRecord, ReadError, StorageError,
};

/// Exercise catalog stored as a JSON array of rows.
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogRepository for JsonCatalog {
    fn read_exercises(&self) -> Result<Vec<ExerciseRecord>, ReadError> {
        let content = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(self.path.clone()),
            _ => StorageError::Io(err),
        })?;
        let exercises = parse_catalog(&content)?;
        debug!(
            "read {} exercises from {}",
            exercises.len(),
            self.path.display()
        );
        Ok(exercises)
    }
}

pub fn parse_catalog(content: &str) -> Result<Vec<ExerciseRecord>, StorageError> {
    serde_json::from_str::<Vec<ExerciseRow>>(content)
        .map(|rows| rows.into_iter().map(ExerciseRecord::from).collect())
        .map_err(|err| StorageError::Malformed(err.to_string()))
}

#[derive(Deserialize)]
struct ExerciseRow {
    name: String,
    category: String,
    difficulty: String,
    #[serde(default, deserialize_with = "flag")]
    is_beginner_safe: bool,
    #[serde(default)]
    muscle_groups: Option<String>,
    #[serde(default)]
    body_part: Option<String>,
    #[serde(default)]
    equipment: Option<String>,
    #[serde(default, deserialize_with = "count")]
    target_sets: Option<u32>,
    #[serde(default, deserialize_with = "text")]
    target_reps: Option<String>,
    #[serde(default, deserialize_with = "count")]
    rest_time_seconds: Option<u32>,
    #[serde(default)]
    instructions: Option<String>,
}

impl From<ExerciseRow> for ExerciseRecord {
    fn from(value: ExerciseRow) -> Self {
        ExerciseRecord {
            category: Category::from(value.category.as_str()),
            difficulty: Difficulty::from(value.difficulty.as_str()),
            name: value.name,
            is_beginner_safe: value.is_beginner_safe,
            muscle_groups: value.muscle_groups.unwrap_or_default(),
            body_part: value.body_part.unwrap_or_default(),
            equipment: value.equipment.unwrap_or_default(),
            target_sets: value.target_sets,
            target_reps: value.target_reps,
            rest_time_seconds: value.rest_time_seconds,
            instructions: value.instructions,
        }
    }
}

// SQLite exports store booleans as 0/1.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(value) => value,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => matches!(text.trim().to_lowercase().as_str(), "true" | "1"),
        _ => false,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value
        .filter(|n| n.is_finite() && *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32))
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}
