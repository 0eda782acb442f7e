use log::{error, warn};
use rand::Rng;

use crate::{CatalogRepository, PlanError, PlanRequest, WeeklyPlan};

pub struct Planner<R> {
    repository: R,
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                PlanError::InvalidParameter(_) => {
                    warn!("failed to {} {}: {err}", $action, $entity);
                }
                PlanError::Read(_) => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogRepository> Planner<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validates the request, reads the catalog and generates a plan.
    ///
    /// The catalog is not read for a rejected request.
    pub fn create_plan<G>(&self, request: PlanRequest, rng: &mut G) -> Result<WeeklyPlan, PlanError>
    where
        G: Rng + ?Sized,
    {
        log_on_error!(
            request
                .validate()
                .map_err(PlanError::from)
                .and_then(|request| {
                    let catalog = self.repository.read_exercises()?;
                    Ok(WeeklyPlan::generate(request, &catalog, rng)?)
                }),
            "create",
            "plan"
        )
    }
}
