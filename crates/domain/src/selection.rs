use std::collections::HashSet;

use log::{debug, warn};
use rand::{Rng, seq::SliceRandom};

use crate::{Category, DayTemplate, ExerciseRecord, FocusArea};

/// How an exercise ended up in a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Focus,
    CoreBackfill,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    pub exercise: &'a ExerciseRecord,
    pub origin: Origin,
}

/// Number of exercises that fit into a session.
#[must_use]
pub fn target_exercise_count(session_minutes: u32) -> usize {
    match session_minutes {
        ..=30 => 4,
        31..=45 => 5,
        46..=60 => 6,
        _ => 7,
    }
}

/// Picks the exercises for one day from the eligible catalog.
///
/// Compound and strength movements matching the day's focus are preferred. If the session
/// still has room and the day does not train core, one core exercise is appended.
pub fn select_exercises<'a, R>(
    eligible: &[&'a ExerciseRecord],
    day: &DayTemplate,
    session_minutes: u32,
    rng: &mut R,
) -> Vec<Selection<'a>>
where
    R: Rng + ?Sized,
{
    let target = target_exercise_count(session_minutes);
    let focused = focused_exercises(eligible, &day.focus_areas);

    let mut pool = candidate_pool(&focused);
    if pool.len() < target {
        pool = focused;
    }

    let mut selections = pool
        .choose_multiple(rng, target)
        .copied()
        .map(|exercise| Selection {
            exercise,
            origin: Origin::Focus,
        })
        .collect::<Vec<_>>();

    if !day.includes(FocusArea::Core) && selections.len() < target {
        let core = eligible
            .iter()
            .copied()
            .filter(|e| e.category == Category::Core)
            .collect::<Vec<_>>();
        if let Some(&exercise) = core.choose(rng) {
            selections.push(Selection {
                exercise,
                origin: Origin::CoreBackfill,
            });
        }
    }

    if selections.is_empty() {
        warn!("no exercises available for {}", day.name);
    } else {
        debug!(
            "selected {} of {target} exercises for {}",
            selections.len(),
            day.name
        );
    }

    selections
}

/// Exercises whose muscle groups or body part match the focus, or all strength exercises if
/// nothing matches.
pub(crate) fn focused_exercises<'a>(
    eligible: &[&'a ExerciseRecord],
    focus_areas: &[FocusArea],
) -> Vec<&'a ExerciseRecord> {
    let focused = eligible
        .iter()
        .copied()
        .filter(|e| e.targets_any(focus_areas))
        .collect::<Vec<_>>();

    if !focused.is_empty() {
        return focused;
    }

    warn!("no exercises match {focus_areas:?}, falling back to strength exercises");

    eligible
        .iter()
        .copied()
        .filter(|e| e.category == Category::Strength)
        .collect()
}

/// Compound movements followed by the remaining strength exercises.
///
/// Rows are deduplicated by position, so distinct rows sharing a name both remain.
pub(crate) fn candidate_pool<'a>(focused: &[&'a ExerciseRecord]) -> Vec<&'a ExerciseRecord> {
    let compound = focused.iter().enumerate().filter(|(_, e)| e.is_compound());
    let strength = focused
        .iter()
        .enumerate()
        .filter(|(_, e)| e.category == Category::Strength);

    let mut seen = HashSet::new();
    compound
        .chain(strength)
        .filter(|(i, _)| seen.insert(*i))
        .map(|(_, e)| *e)
        .collect()
}
