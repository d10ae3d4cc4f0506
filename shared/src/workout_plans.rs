//! Workout plan derivation
//!
//! Exercises are sliced from the strength and cardio lists of the chosen
//! workout type according to the goal, then every numeric field is scaled by
//! the activity level's intensity factor.

use crate::catalog::{exercise_library, ExerciseTemplate, ModalityCatalog};
use crate::meal_plans::scale;
use crate::models::{ActivityLevel, Exercise, Goal, UserProfile, WorkoutPlan, WorkoutType};

impl ActivityLevel {
    /// Intensity factor for sets, reps, duration and calories
    pub fn intensity_factor(&self) -> f64 {
        match self {
            ActivityLevel::Beginner => 0.8,
            ActivityLevel::Intermediate => 1.0,
            ActivityLevel::Advanced => 1.3,
            ActivityLevel::Unrecognized(_) => 1.0,
        }
    }
}

/// Which list a selection slice reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseCategory {
    Strength,
    Cardio,
}

/// Ordered `(category, count)` slices taken from the front of each list.
///
/// Unrecognized goals fall into the maintenance rule on purpose.
pub fn selection_rule(goal: &Goal) -> [(ExerciseCategory, usize); 2] {
    use ExerciseCategory::{Cardio, Strength};

    match goal {
        Goal::WeightLoss => [(Cardio, 2), (Strength, 2)],
        Goal::MuscleGain => [(Strength, 3), (Cardio, 1)],
        Goal::Endurance => [(Cardio, 3), (Strength, 1)],
        Goal::Maintenance | Goal::Unrecognized(_) => [(Strength, 2), (Cardio, 1)],
    }
}

fn select(
    library: &'static ModalityCatalog,
    goal: &Goal,
) -> impl Iterator<Item = &'static ExerciseTemplate> {
    selection_rule(goal)
        .into_iter()
        .flat_map(move |(category, count)| {
            let list = match category {
                ExerciseCategory::Strength => library.strength,
                ExerciseCategory::Cardio => library.cardio,
            };
            list.iter().take(count)
        })
}

/// Apply an intensity factor. Zero or missing sets/reps/duration stay absent;
/// calories are always rescaled.
pub fn adjust_intensity(template: &ExerciseTemplate, factor: f64) -> Exercise {
    let scale_present = |value: Option<u32>| value.filter(|v| *v > 0).map(|v| scale(v, factor));

    Exercise {
        sets: scale_present(template.sets),
        reps: scale_present(template.reps),
        duration: scale_present(template.duration),
        calories: scale(template.calories, factor),
        ..template.to_exercise()
    }
}

/// Derive the workout plan for a goal, activity level and workout type.
///
/// `workout_type` is a closed enum, so every call resolves to one of the
/// three libraries; callers parse untrusted strings with
/// [`WorkoutType::from_str`](std::str::FromStr) first.
pub fn derive_workout_plan(
    goal: &Goal,
    activity_level: &ActivityLevel,
    workout_type: WorkoutType,
) -> WorkoutPlan {
    let factor = activity_level.intensity_factor();
    let exercises: Vec<Exercise> = select(exercise_library(workout_type), goal)
        .map(|template| adjust_intensity(template, factor))
        .collect();

    let total_duration: u32 = exercises.iter().filter_map(|e| e.duration).sum();
    let total_calories: u32 = exercises.iter().map(|e| e.calories).sum();

    WorkoutPlan {
        id: format!("{}-{}-{}", goal, activity_level, workout_type),
        goal: goal.clone(),
        activity_level: activity_level.clone(),
        exercises,
        total_duration,
        total_calories,
    }
}

pub fn derive_workout_plan_for(profile: &UserProfile) -> WorkoutPlan {
    derive_workout_plan(&profile.goal, &profile.activity_level, profile.workout_type)
}
