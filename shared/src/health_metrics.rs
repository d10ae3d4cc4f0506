//! Health metrics calculations module
//!
//! BMI and its dashboard classification, computed from the height and
//! weight captured at signup. All functions are pure.

use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get the BMI range for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::NormalWeight => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// BMI calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub value: f64,
    pub category: BmiCategory,
    pub label: String,
    /// Healthy weight range in kg for this height
    pub healthy_weight_range_kg: (f64, f64),
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate healthy weight range for a given height
///
/// Based on BMI 18.5-25 (normal range)
pub fn healthy_weight_range_kg(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    (18.5 * height_m_sq, 25.0 * height_m_sq)
}

/// Calculate complete BMI result. The category uses the unrounded value.
pub fn calculate_bmi_result(weight_kg: f64, height_cm: f64) -> BmiResult {
    let bmi = calculate_bmi(weight_kg, height_cm);
    let category = classify_bmi(bmi);

    BmiResult {
        value: (bmi * 10.0).round() / 10.0,
        category,
        label: category.description().to_string(),
        healthy_weight_range_kg: healthy_weight_range_kg(height_cm),
    }
}

pub fn bmi_for_profile(profile: &UserProfile) -> BmiResult {
    calculate_bmi_result(profile.weight, profile.height)
}
