//! Static reference data
//!
//! Base meals, the per-modality exercise library, the server's seeded plan
//! lookup table, blog posts and motivational quotes. Everything is compiled
//! in as `&'static` templates and converted into owned models on demand.

use chrono::{DateTime, Utc};

use crate::models::{
    ActivityLevel, BlogPost, Exercise, Goal, MealItem, MealPlan, Quote, WorkoutType,
};

/// Compile-time meal entry
#[derive(Debug, Clone, Copy)]
pub struct MealTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub quantity: &'static str,
}

impl MealTemplate {
    pub fn to_item(&self) -> MealItem {
        MealItem {
            id: self.id.to_string(),
            name: self.name.to_string(),
            calories: self.calories,
            protein: Some(self.protein),
            carbs: Some(self.carbs),
            fat: Some(self.fat),
            quantity: self.quantity.to_string(),
        }
    }
}

/// Compile-time exercise entry
#[derive(Debug, Clone, Copy)]
pub struct ExerciseTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub duration: Option<u32>,
    pub calories: u32,
    pub instructions: &'static str,
}

impl ExerciseTemplate {
    pub fn to_exercise(&self) -> Exercise {
        Exercise {
            id: self.id.to_string(),
            name: self.name.to_string(),
            sets: self.sets,
            reps: self.reps,
            duration: self.duration,
            calories: self.calories,
            instructions: Some(self.instructions.to_string()),
        }
    }
}

/// Breakfast, lunch and dinner templates
#[derive(Debug, Clone, Copy)]
pub struct MealCatalog {
    pub breakfast: &'static [MealTemplate],
    pub lunch: &'static [MealTemplate],
    pub dinner: &'static [MealTemplate],
}

/// Strength and cardio lists for one workout type
#[derive(Debug, Clone, Copy)]
pub struct ModalityCatalog {
    pub strength: &'static [ExerciseTemplate],
    pub cardio: &'static [ExerciseTemplate],
}

const fn meal(
    id: &'static str,
    name: &'static str,
    calories: u32,
    macros: (u32, u32, u32),
    quantity: &'static str,
) -> MealTemplate {
    MealTemplate {
        id,
        name,
        calories,
        protein: macros.0,
        carbs: macros.1,
        fat: macros.2,
        quantity,
    }
}

const fn reps(
    id: &'static str,
    name: &'static str,
    sets: u32,
    reps: u32,
    calories: u32,
    instructions: &'static str,
) -> ExerciseTemplate {
    ExerciseTemplate {
        id,
        name,
        sets: Some(sets),
        reps: Some(reps),
        duration: None,
        calories,
        instructions,
    }
}

const fn timed(
    id: &'static str,
    name: &'static str,
    minutes: u32,
    calories: u32,
    instructions: &'static str,
) -> ExerciseTemplate {
    ExerciseTemplate {
        id,
        name,
        sets: None,
        reps: None,
        duration: Some(minutes),
        calories,
        instructions,
    }
}

// ============================================================================
// Meals
// ============================================================================

/// Base meals every derived plan scales from
pub const BASE_MEALS: MealCatalog = MealCatalog {
    breakfast: &[
        meal("b1", "Oats with banana and almonds", 180, (6, 30, 4), "100g"),
        meal("b2", "Green tea with honey", 25, (0, 6, 0), "1 cup"),
        meal("b3", "Mixed nuts", 80, (3, 3, 7), "20g"),
    ],
    lunch: &[
        meal("l1", "Brown rice with dal", 220, (8, 45, 2), "150g"),
        meal("l2", "Palak paneer", 150, (12, 8, 10), "100g"),
        meal("l3", "Mixed vegetable salad", 50, (2, 10, 1), "80g"),
    ],
    dinner: &[
        meal("d1", "Roti with sabzi", 120, (4, 24, 2), "2 pieces"),
        meal("d2", "Grilled chicken", 117, (22, 0, 3), "75g"),
        meal("d3", "Cucumber raita", 45, (3, 6, 1), "100g"),
    ],
};

/// Precomputed plan served by the lookup endpoint. It predates the derivation
/// engine: numeric ids, no mixed nuts, calories unscaled.
const SEEDED_MEALS: MealCatalog = MealCatalog {
    breakfast: &[
        meal("1", "Oats with banana and almonds", 180, (6, 30, 4), "100g"),
        meal("2", "Green tea with honey", 25, (0, 6, 0), "1 cup"),
    ],
    lunch: &[
        meal("3", "Brown rice with dal", 220, (8, 45, 2), "150g"),
        meal("4", "Palak paneer", 150, (12, 8, 10), "100g"),
        meal("5", "Mixed vegetable salad", 50, (2, 10, 1), "80g"),
    ],
    dinner: &[
        meal("6", "Roti with sabzi", 120, (4, 24, 2), "2 pieces"),
        meal("7", "Grilled chicken", 117, (22, 0, 3), "75g"),
        meal("8", "Cucumber raita", 45, (3, 6, 1), "100g"),
    ],
};

/// Meal plans available to the server-side lookup, keyed by
/// `{goal}-{activityLevel}`
pub fn seeded_meal_plans() -> Vec<MealPlan> {
    let to_items = |templates: &[MealTemplate]| -> Vec<MealItem> {
        templates.iter().map(MealTemplate::to_item).collect()
    };

    vec![MealPlan {
        id: "weight-loss-beginner".to_string(),
        goal: Goal::WeightLoss,
        activity_level: ActivityLevel::Beginner,
        breakfast: to_items(SEEDED_MEALS.breakfast),
        lunch: to_items(SEEDED_MEALS.lunch),
        dinner: to_items(SEEDED_MEALS.dinner),
        snacks: None,
    }]
}

// ============================================================================
// Exercises
// ============================================================================

static HOME: ModalityCatalog = ModalityCatalog {
    strength: &[
        reps("h_s1", "Push-ups", 3, 12, 80, "Keep your body straight, lower chest to floor"),
        reps("h_s2", "Bodyweight Squats", 3, 15, 120, "Feet shoulder-width apart, lower until thighs parallel"),
        timed("h_s3", "Plank", 1, 60, "Hold for 30-60 seconds, keep body straight"),
        reps("h_s4", "Lunges", 3, 10, 100, "Step forward, lower back knee to ground"),
        reps("h_s5", "Mountain Climbers", 3, 20, 140, "Alternate bringing knees to chest rapidly"),
        reps("h_s6", "Burpees", 3, 8, 160, "Squat, jump back to plank, push-up, jump up"),
    ],
    cardio: &[
        reps("h_c1", "Jumping Jacks", 3, 30, 90, "Jump feet apart while raising arms overhead"),
        timed("h_c2", "High Knees", 2, 100, "Run in place, bring knees to chest height"),
        timed("h_c3", "Dance Workout", 15, 150, "Follow online dance routine for 15 minutes"),
        timed("h_c4", "Stair Climbing", 10, 120, "Walk/run up and down stairs for 10 minutes"),
    ],
};

static GYM: ModalityCatalog = ModalityCatalog {
    strength: &[
        reps("g_s1", "Bench Press", 3, 10, 120, "Lower bar to chest, press up explosively"),
        reps("g_s2", "Deadlifts", 3, 8, 150, "Keep back straight, lift with legs and hips"),
        reps("g_s3", "Barbell Squats", 3, 12, 140, "Bar on upper back, squat to parallel"),
        reps("g_s4", "Pull-ups/Lat Pulldown", 3, 8, 100, "Pull body/weight to chest level"),
        reps("g_s5", "Dumbbell Rows", 3, 12, 110, "Pull weight to hip, squeeze shoulder blades"),
        reps("g_s6", "Shoulder Press", 3, 10, 90, "Press weights overhead, control the descent"),
    ],
    cardio: &[
        timed("g_c1", "Treadmill Running", 20, 200, "Maintain steady pace, 6-8 mph"),
        timed("g_c2", "Rowing Machine", 15, 180, "Use legs primarily, lean back slightly"),
        timed("g_c3", "Stationary Bike", 25, 160, "Moderate intensity, adjust resistance"),
        timed("g_c4", "Elliptical", 20, 170, "Use arms and legs, maintain upright posture"),
    ],
};

static YOGA: ModalityCatalog = ModalityCatalog {
    strength: &[
        timed("y_s1", "Warrior II", 2, 40, "Hold for 30 seconds each side, strong leg foundation"),
        reps("y_s2", "Plank to Chaturanga", 5, 1, 60, "Lower from plank to low push-up position"),
        timed("y_s3", "Chair Pose", 1, 50, "Sit back as if in chair, arms up, hold 30-60 seconds"),
        timed("y_s4", "Tree Pose", 2, 30, "Balance on one foot, other foot on inner thigh"),
        reps("y_s5", "Bridge Pose", 3, 8, 70, "Lift hips up, squeeze glutes, hold briefly"),
    ],
    cardio: &[
        reps("y_c1", "Sun Salutation A", 5, 1, 80, "Flow through 8 poses smoothly"),
        reps("y_c2", "Sun Salutation B", 3, 1, 90, "More challenging flow with Warrior I"),
        timed("y_c3", "Vinyasa Flow", 20, 140, "Continuous movement linking breath and poses"),
        timed("y_c4", "Power Yoga", 15, 120, "Dynamic poses held for strength building"),
    ],
};

/// Exercise library for a workout type
pub fn exercise_library(workout_type: WorkoutType) -> &'static ModalityCatalog {
    match workout_type {
        WorkoutType::Home => &HOME,
        WorkoutType::Gym => &GYM,
        WorkoutType::Yoga => &YOGA,
    }
}

// ============================================================================
// Content
// ============================================================================

/// Blog posts published with the app. `published_at` stamps every post.
pub fn blog_posts(published_at: DateTime<Utc>) -> Vec<BlogPost> {
    vec![BlogPost {
        id: "1".to_string(),
        title: "5 Indian Superfoods for Weight Loss".to_string(),
        excerpt: "Discover traditional Indian ingredients that can accelerate your weight loss journey naturally.".to_string(),
        category: "Nutrition".to_string(),
        author: "Dr. Priya Sharma".to_string(),
        read_time: "5 min read".to_string(),
        image_url: "https://images.unsplash.com/photo-1547592180-85f173990554?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=250".to_string(),
        created_at: published_at,
    }]
}

pub const QUOTES: [Quote; 7] = [
    Quote {
        text: "Success is the sum of small efforts repeated day in and day out.",
        author: "Robert Collier",
    },
    Quote {
        text: "Your body can do it. It's your mind you have to convince.",
        author: "Unknown",
    },
    Quote {
        text: "The only bad workout is the one that didn't happen.",
        author: "Unknown",
    },
    Quote {
        text: "Take care of your body. It's the only place you have to live.",
        author: "Jim Rohn",
    },
    Quote {
        text: "Physical fitness is not only one of the most important keys to a healthy body, but it is the basis of dynamic and creative intellectual activity.",
        author: "John F. Kennedy",
    },
    Quote {
        text: "The groundwork for all happiness is good health.",
        author: "Leigh Hunt",
    },
    Quote {
        text: "To enjoy the glow of good health, you must exercise.",
        author: "Gene Tunney",
    },
];
