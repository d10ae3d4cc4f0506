//! Daily progress bookkeeping
//!
//! A [`ProgressEntry`] tracks one calendar day. Completing a meal or an
//! exercise adds its calories and records its id; un-completing reverses
//! both. Completion is keyed on id membership, so repeating a toggle never
//! double counts.
//!
//! Each mutation returns the [`ProgressEvent`]s it caused, achievements
//! included. Callers decide how to surface them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Goal, MealPlan, UserProfile, WorkoutPlan};

/// Glasses of water pre-filled on a new day
pub const INITIAL_WATER_GLASSES: u32 = 6;

/// Daily water target in glasses
pub const WATER_GOAL_GLASSES: u32 = 8;

/// Completed meals that unlock "Meal Master!"
pub const MEAL_MASTER_THRESHOLD: usize = 3;

/// Completed workouts that unlock "Workout Warrior!"
pub const WORKOUT_WARRIOR_THRESHOLD: usize = 3;

/// One day of tracked progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub calories_consumed: u32,
    #[serde(default)]
    pub calories_burned: u32,
    #[serde(default)]
    pub water_glasses: u32,
    #[serde(default)]
    pub completed_meals: Vec<String>,
    #[serde(default)]
    pub completed_workouts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Beginner,
    Perfect,
    Champion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: AchievementKind,
    pub points: u32,
}

impl Achievement {
    fn new(id: &str, title: &str, description: &str, kind: AchievementKind, points: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            kind,
            points,
        }
    }

    pub fn meal_master() -> Self {
        Self::new(
            "meal_complete",
            "Meal Master!",
            "You've completed all your meals for today!",
            AchievementKind::Perfect,
            50,
        )
    }

    pub fn first_workout() -> Self {
        Self::new(
            "first_workout",
            "First Step!",
            "You've completed your first workout today!",
            AchievementKind::Beginner,
            25,
        )
    }

    pub fn workout_warrior() -> Self {
        Self::new(
            "workout_warrior",
            "Workout Warrior!",
            "You've completed all your workouts for today!",
            AchievementKind::Champion,
            100,
        )
    }
}

/// Domain event emitted by a progress mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ProgressEvent {
    MealLogged { item_id: String, calories: u32 },
    MealRemoved { item_id: String, calories: u32 },
    WorkoutLogged { exercise_id: String, calories: u32 },
    WorkoutRemoved { exercise_id: String, calories: u32 },
    AchievementUnlocked { achievement: Achievement },
}

impl ProgressEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            ProgressEvent::MealLogged { .. } => "meal_logged",
            ProgressEvent::MealRemoved { .. } => "meal_removed",
            ProgressEvent::WorkoutLogged { .. } => "workout_logged",
            ProgressEvent::WorkoutRemoved { .. } => "workout_removed",
            ProgressEvent::AchievementUnlocked { .. } => "achievement_unlocked",
        }
    }
}

/// Insert or remove `id`, returning whether membership changed
fn set_membership(ids: &mut Vec<String>, id: &str, present: bool) -> bool {
    let position = ids.iter().position(|existing| existing == id);
    match (position, present) {
        (None, true) => {
            ids.push(id.to_string());
            true
        }
        (Some(index), false) => {
            ids.remove(index);
            true
        }
        _ => false,
    }
}

impl ProgressEntry {
    /// Fresh entry for `date`, seeded with the profile's weight
    pub fn new(user_id: Uuid, date: NaiveDate, weight: Option<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            weight,
            calories_consumed: 0,
            calories_burned: 0,
            water_glasses: INITIAL_WATER_GLASSES,
            completed_meals: Vec::new(),
            completed_workouts: Vec::new(),
        }
    }

    pub fn for_profile(profile: &UserProfile, date: NaiveDate) -> Self {
        Self::new(profile.id, date, Some(profile.weight))
    }

    pub fn is_for(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    pub fn is_meal_completed(&self, meal_id: &str) -> bool {
        self.completed_meals.iter().any(|id| id == meal_id)
    }

    pub fn is_workout_completed(&self, exercise_id: &str) -> bool {
        self.completed_workouts.iter().any(|id| id == exercise_id)
    }

    /// Mark a meal complete or incomplete.
    ///
    /// A no-op toggle (already in the requested state) changes nothing and
    /// returns no events.
    pub fn set_meal_completed(
        &mut self,
        meal_id: &str,
        calories: u32,
        completed: bool,
    ) -> Vec<ProgressEvent> {
        if !set_membership(&mut self.completed_meals, meal_id, completed) {
            return Vec::new();
        }

        let item_id = meal_id.to_string();
        if !completed {
            self.calories_consumed = self.calories_consumed.saturating_sub(calories);
            return vec![ProgressEvent::MealRemoved { item_id, calories }];
        }

        self.calories_consumed += calories;
        let mut events = vec![ProgressEvent::MealLogged { item_id, calories }];
        if self.completed_meals.len() == MEAL_MASTER_THRESHOLD {
            events.push(ProgressEvent::AchievementUnlocked {
                achievement: Achievement::meal_master(),
            });
        }
        events
    }

    /// Mark an exercise complete or incomplete. Same rules as meals.
    pub fn set_workout_completed(
        &mut self,
        exercise_id: &str,
        calories: u32,
        completed: bool,
    ) -> Vec<ProgressEvent> {
        if !set_membership(&mut self.completed_workouts, exercise_id, completed) {
            return Vec::new();
        }

        let exercise_id = exercise_id.to_string();
        if !completed {
            self.calories_burned = self.calories_burned.saturating_sub(calories);
            return vec![ProgressEvent::WorkoutRemoved { exercise_id, calories }];
        }

        self.calories_burned += calories;
        let mut events = vec![ProgressEvent::WorkoutLogged { exercise_id, calories }];
        let count = self.completed_workouts.len();
        let achievement = if count == 1 {
            Some(Achievement::first_workout())
        } else if count >= WORKOUT_WARRIOR_THRESHOLD {
            Some(Achievement::workout_warrior())
        } else {
            None
        };
        if let Some(achievement) = achievement {
            events.push(ProgressEvent::AchievementUnlocked { achievement });
        }
        events
    }
}

// ============================================================================
// Daily targets
// ============================================================================

impl Goal {
    /// Daily calorie intake target shown on the dashboard
    pub fn daily_calorie_target(&self) -> u32 {
        match self {
            Goal::WeightLoss => 1800,
            Goal::MuscleGain => 2500,
            _ => 2200,
        }
    }
}

/// Percentage toward a target, capped at 100
pub fn capped_percent(value: u32, target: u32) -> f64 {
    if target == 0 {
        return 0.0;
    }
    (f64::from(value) / f64::from(target) * 100.0).min(100.0)
}

/// Dashboard counters for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub calorie_goal: u32,
    pub calorie_progress_percent: f64,
    pub water_goal: u32,
    pub water_progress_percent: f64,
    pub meals_completed: usize,
    pub meals_total: usize,
    pub workouts_completed: usize,
    pub workouts_total: usize,
}

pub fn summarize(
    entry: &ProgressEntry,
    goal: &Goal,
    meal_plan: &MealPlan,
    workout_plan: &WorkoutPlan,
) -> ProgressSummary {
    let calorie_goal = goal.daily_calorie_target();
    ProgressSummary {
        calorie_goal,
        calorie_progress_percent: capped_percent(entry.calories_consumed, calorie_goal),
        water_goal: WATER_GOAL_GLASSES,
        water_progress_percent: capped_percent(entry.water_glasses, WATER_GOAL_GLASSES),
        meals_completed: entry.completed_meals.len(),
        meals_total: meal_plan.items().count(),
        workouts_completed: entry.completed_workouts.len(),
        workouts_total: workout_plan.exercises.len(),
    }
}
