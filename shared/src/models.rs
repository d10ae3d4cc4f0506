//! Data models for the FitSync application
//!
//! Every model here is a plain value record. Plans are derived from a
//! [`UserProfile`] on demand and never stored; only profiles and progress
//! entries are persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::CatalogError;

// ============================================================================
// Profile enums
// ============================================================================

/// Fitness goal driving calorie and exercise selection.
///
/// Values outside the known set are kept verbatim in `Unrecognized` so the
/// plan engine can apply its neutral fallback and still echo the caller's
/// string back in plan ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    Endurance,
    Unrecognized(String),
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::Maintenance,
        Goal::Endurance,
    ];

    pub fn parse(value: &str) -> Self {
        match value {
            "weight-loss" => Goal::WeightLoss,
            "muscle-gain" => Goal::MuscleGain,
            "maintenance" => Goal::Maintenance,
            "endurance" => Goal::Endurance,
            other => Goal::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Goal::WeightLoss => "weight-loss",
            Goal::MuscleGain => "muscle-gain",
            Goal::Maintenance => "maintenance",
            Goal::Endurance => "endurance",
            Goal::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Goal::Unrecognized(_))
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Goal::parse(&value)
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.as_str().to_string()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported training experience
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    Beginner,
    Intermediate,
    Advanced,
    Unrecognized(String),
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [
        ActivityLevel::Beginner,
        ActivityLevel::Intermediate,
        ActivityLevel::Advanced,
    ];

    pub fn parse(value: &str) -> Self {
        match value {
            "beginner" => ActivityLevel::Beginner,
            "intermediate" => ActivityLevel::Intermediate,
            "advanced" => ActivityLevel::Advanced,
            other => ActivityLevel::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActivityLevel::Beginner => "beginner",
            ActivityLevel::Intermediate => "intermediate",
            ActivityLevel::Advanced => "advanced",
            ActivityLevel::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ActivityLevel::Unrecognized(_))
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        ActivityLevel::parse(&value)
    }
}

impl From<ActivityLevel> for String {
    fn from(level: ActivityLevel) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exercise modality. Closed set: each value selects one exercise catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Home,
    Gym,
    Yoga,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [WorkoutType::Home, WorkoutType::Gym, WorkoutType::Yoga];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Home => "home",
            WorkoutType::Gym => "gym",
            WorkoutType::Yoga => "yoga",
        }
    }
}

impl FromStr for WorkoutType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(WorkoutType::Home),
            "gym" => Ok(WorkoutType::Gym),
            "yoga" => Ok(WorkoutType::Yoga),
            other => Err(CatalogError::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(format!("Unknown gender: {}", other)),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// User profile captured at signup. Replaced wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    pub goal: Goal,
    pub activity_level: ActivityLevel,
    pub workout_type: WorkoutType,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Plans
// ============================================================================

/// Single food entry within a meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    pub id: String,
    pub name: String,
    pub calories: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub goal: Goal,
    pub activity_level: ActivityLevel,
    pub breakfast: Vec<MealItem>,
    pub lunch: Vec<MealItem>,
    pub dinner: Vec<MealItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snacks: Option<Vec<MealItem>>,
}

impl MealPlan {
    /// All items in serving order: breakfast, lunch, dinner, then snacks
    pub fn items(&self) -> impl Iterator<Item = &MealItem> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
            .chain(self.snacks.iter().flatten())
    }

    pub fn find_item(&self, id: &str) -> Option<&MealItem> {
        self.items().find(|item| item.id == id)
    }

    pub fn total_calories(&self) -> u32 {
        self.items().map(|item| item.calories).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub calories: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: String,
    pub goal: Goal,
    pub activity_level: ActivityLevel,
    pub exercises: Vec<Exercise>,
    pub total_duration: u32,
    pub total_calories: u32,
}

impl WorkoutPlan {
    pub fn find_exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }
}

// ============================================================================
// Content
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub read_time: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_round_trips_known_values() {
        for goal in Goal::ALL {
            assert_eq!(Goal::parse(goal.as_str()), goal);
            assert!(goal.is_recognized());
        }
    }

    #[test]
    fn test_goal_keeps_unrecognized_string() {
        let goal = Goal::parse("bulking");
        assert_eq!(goal, Goal::Unrecognized("bulking".to_string()));
        assert_eq!(goal.as_str(), "bulking");
        assert!(!goal.is_recognized());
    }

    #[test]
    fn test_goal_serializes_as_plain_string() {
        let json = serde_json::to_string(&Goal::MuscleGain).unwrap();
        assert_eq!(json, "\"muscle-gain\"");
        let back: Goal = serde_json::from_str("\"unknown-goal\"").unwrap();
        assert_eq!(back.as_str(), "unknown-goal");
    }

    #[test]
    fn test_workout_type_rejects_unknown() {
        assert_eq!("gym".parse::<WorkoutType>().unwrap(), WorkoutType::Gym);
        assert!("pool".parse::<WorkoutType>().is_err());
        assert_eq!(WorkoutType::default(), WorkoutType::Home);
    }

    #[test]
    fn test_meal_item_omits_missing_macros() {
        let item = MealItem {
            id: "x".to_string(),
            name: "Water".to_string(),
            calories: 0,
            protein: None,
            carbs: None,
            fat: None,
            quantity: "1 glass".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("protein").is_none());
        assert_eq!(json["quantity"], "1 glass");
    }
}
