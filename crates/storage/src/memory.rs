use wellfit_domain::{CatalogRepository, ExerciseRecord, ReadError};

/// Catalog kept in memory, e.g. when the caller already loaded the rows.
pub struct MemoryCatalog {
    exercises: Vec<ExerciseRecord>,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new(exercises: Vec<ExerciseRecord>) -> Self {
        Self { exercises }
    }
}

impl CatalogRepository for MemoryCatalog {
    fn read_exercises(&self) -> Result<Vec<ExerciseRecord>, ReadError> {
        Ok(self.exercises.clone())
    }
}
