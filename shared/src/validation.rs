//! Input validation functions
//!
//! Signup form validation. Numeric bounds and required text use the
//! `validator` derive on [`CreateProfileRequest`]; closed-set fields are
//! checked here. All failures are collected so the form can show each one
//! inline next to its field.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::{ActivityLevel, Gender, Goal, UserProfile, WorkoutType};
use crate::types::CreateProfileRequest;

/// Valid gender values
pub const VALID_GENDERS: &[&str] = &["male", "female", "other"];

/// Valid goal values
pub const VALID_GOALS: &[&str] = &["weight-loss", "muscle-gain", "maintenance", "endurance"];

/// Valid activity levels
pub const VALID_ACTIVITY_LEVELS: &[&str] = &["beginner", "intermediate", "advanced"];

/// Valid workout types
pub const VALID_WORKOUT_TYPES: &[&str] = &["home", "gym", "yoga"];

fn one_of(label: &str, allowed: &[&str]) -> String {
    format!("Invalid {}. Must be one of: {}", label, allowed.join(", "))
}

/// Validate a measurement is a real number
pub fn validate_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::new(field, "must be a valid number"));
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map wire field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Name",
        "age" => "Age",
        "gender" => "Gender",
        "height" => "Height",
        "weight" => "Current Weight",
        "goal" => "Fitness Goal",
        "activityLevel" | "activity_level" => "Activity Level",
        "workoutType" | "workout_type" => "Workout Preference",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Rust field name to wire field name
fn wire_name(field: &str) -> &str {
    match field {
        "activity_level" => "activityLevel",
        "workout_type" => "workoutType",
        other => other,
    }
}

/// Validate a signup request and build the profile it describes.
///
/// Returns every failing field at once, ordered by field name.
pub fn validate_profile(
    request: &CreateProfileRequest,
    id: Uuid,
    created_at: DateTime<Utc>,
) -> Result<UserProfile, AppError> {
    let mut errors = Vec::new();

    if let Err(report) = request.validate() {
        for (field, field_errors) in report.field_errors() {
            let field: &str = field.as_ref();
            for err in field_errors.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                errors.push(ValidationError::new(wire_name(field), &message));
            }
        }
    }

    for (field, value) in [
        ("age", request.age),
        ("height", request.height),
        ("weight", request.weight),
    ] {
        if let Err(err) = validate_finite(field, value) {
            errors.push(err);
        }
    }

    if request.age.is_finite() && request.age.fract() != 0.0 {
        errors.push(ValidationError::new("age", "Age must be a whole number"));
    }

    let gender = request.gender.parse::<Gender>().ok();
    if gender.is_none() {
        errors.push(ValidationError::new("gender", &one_of("gender", VALID_GENDERS)));
    }

    let goal = Goal::parse(&request.goal);
    if !goal.is_recognized() {
        errors.push(ValidationError::new("goal", &one_of("goal", VALID_GOALS)));
    }

    let activity_level = ActivityLevel::parse(&request.activity_level);
    if !activity_level.is_recognized() {
        errors.push(ValidationError::new(
            "activityLevel",
            &one_of("activity level", VALID_ACTIVITY_LEVELS),
        ));
    }

    let workout_type = request.workout_type.parse::<WorkoutType>().ok();
    if workout_type.is_none() {
        errors.push(ValidationError::new(
            "workoutType",
            &one_of("workout type", VALID_WORKOUT_TYPES),
        ));
    }

    match (gender, workout_type) {
        (Some(gender), Some(workout_type)) if errors.is_empty() => Ok(UserProfile {
            id,
            name: request.name.clone(),
            // In 13..=100 and integral once validation passed
            age: request.age as u32,
            gender,
            height: request.height,
            weight: request.weight,
            goal,
            activity_level,
            workout_type,
            created_at,
        }),
        _ => {
            errors.sort_by(|a, b| a.field.cmp(&b.field));
            Err(AppError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use proptest::prelude::*;
    use rstest::rstest;

    fn valid_request() -> CreateProfileRequest {
        CreateProfileRequest {
            name: Name().fake(),
            age: 29.0,
            gender: "female".to_string(),
            height: 165.0,
            weight: 62.5,
            goal: "weight-loss".to_string(),
            activity_level: "beginner".to_string(),
            workout_type: "yoga".to_string(),
        }
    }

    fn failing_fields(request: &CreateProfileRequest) -> Vec<String> {
        match validate_profile(request, Uuid::new_v4(), Utc::now()) {
            Err(AppError::Validation(errors)) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request_builds_profile() {
        let request = valid_request();
        let id = Uuid::new_v4();
        let profile = validate_profile(&request, id, Utc::now()).unwrap();

        assert_eq!(profile.id, id);
        assert_eq!(profile.name, request.name);
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.goal, Goal::WeightLoss);
        assert_eq!(profile.activity_level, ActivityLevel::Beginner);
        assert_eq!(profile.workout_type, WorkoutType::Yoga);
    }

    #[rstest]
    #[case::empty_name(CreateProfileRequest { name: String::new(), ..valid_request() }, "name")]
    #[case::too_young(CreateProfileRequest { age: 12.0, ..valid_request() }, "age")]
    #[case::too_old(CreateProfileRequest { age: 101.0, ..valid_request() }, "age")]
    #[case::negative_age(CreateProfileRequest { age: -5.0, ..valid_request() }, "age")]
    #[case::fractional_age(CreateProfileRequest { age: 25.5, ..valid_request() }, "age")]
    #[case::too_short(CreateProfileRequest { height: 99.9, ..valid_request() }, "height")]
    #[case::too_tall(CreateProfileRequest { height: 250.5, ..valid_request() }, "height")]
    #[case::too_light(CreateProfileRequest { weight: 29.0, ..valid_request() }, "weight")]
    #[case::too_heavy(CreateProfileRequest { weight: 301.0, ..valid_request() }, "weight")]
    #[case::gender(CreateProfileRequest { gender: "robot".to_string(), ..valid_request() }, "gender")]
    #[case::goal(CreateProfileRequest { goal: "bulking".to_string(), ..valid_request() }, "goal")]
    #[case::level(CreateProfileRequest { activity_level: "elite".to_string(), ..valid_request() }, "activityLevel")]
    #[case::workout(CreateProfileRequest { workout_type: "pool".to_string(), ..valid_request() }, "workoutType")]
    fn test_single_field_failure(#[case] request: CreateProfileRequest, #[case] field: &str) {
        assert_eq!(failing_fields(&request), vec![field.to_string()]);
    }

    #[test]
    fn test_all_failures_reported_together() {
        let request = CreateProfileRequest {
            name: String::new(),
            age: 5.0,
            gender: "x".to_string(),
            height: 10.0,
            weight: 1000.0,
            goal: "x".to_string(),
            activity_level: "x".to_string(),
            workout_type: "x".to_string(),
        };
        let fields = failing_fields(&request);
        assert_eq!(
            fields,
            vec![
                "activityLevel",
                "age",
                "gender",
                "goal",
                "height",
                "name",
                "weight",
                "workoutType"
            ]
        );
    }

    #[test]
    fn test_whole_age_converts() {
        let request = CreateProfileRequest { age: 42.0, ..valid_request() };
        let profile = validate_profile(&request, Uuid::new_v4(), Utc::now()).unwrap();
        assert_eq!(profile.age, 42);
    }

    #[test]
    fn test_nan_height_rejected() {
        let request = CreateProfileRequest { height: f64::NAN, ..valid_request() };
        assert!(failing_fields(&request).contains(&"height".to_string()));
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("activityLevel"), "Activity Level");
        assert_eq!(get_field_display_label("weight"), "Current Weight");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    #[test]
    fn test_validation_error() {
        let err = ValidationError::new("height", "must be a valid number");
        assert_eq!(err.display_label, "Height");
        assert_eq!(err.user_message(), "Height: must be a valid number");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_bounds_inclusive(
            age in 13u32..=100,
            height in 100.0f64..=250.0,
            weight in 30.0f64..=300.0,
        ) {
            let request = CreateProfileRequest { age: f64::from(age), height, weight, ..valid_request() };
            prop_assert!(validate_profile(&request, Uuid::new_v4(), Utc::now()).is_ok());
        }

        #[test]
        fn prop_age_below_minimum(age in 0u32..13) {
            let request = CreateProfileRequest { age: f64::from(age), ..valid_request() };
            prop_assert!(validate_profile(&request, Uuid::new_v4(), Utc::now()).is_err());
        }
    }
}
