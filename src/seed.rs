//! Sample entities loaded at startup so the API is non-empty out of the box.

use crate::models::{ProgressRecord, UserProfile, WorkoutPlan};

fn workout(id: &str, name: &str, description: &str, difficulty: &str, exercises: &[&str], minutes: i64) -> WorkoutPlan {
    WorkoutPlan {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        difficulty: difficulty.into(),
        exercises: exercises.iter().map(|e| e.to_string()).collect(),
        duration_minutes: minutes,
    }
}

pub fn workouts() -> Vec<WorkoutPlan> {
    vec![
        workout(
            "1",
            "Beginner Full Body",
            "A complete full-body workout for beginners",
            "beginner",
            &["Push-ups", "Squats", "Planks", "Lunges"],
            30,
        ),
        workout(
            "2",
            "Intermediate Strength",
            "Strength-focused workout for intermediate users",
            "intermediate",
            &["Deadlifts", "Bench Press", "Pull-ups", "Overhead Press"],
            45,
        ),
        workout(
            "3",
            "Advanced HIIT",
            "High-intensity interval training for advanced users",
            "advanced",
            &["Burpees", "Mountain Climbers", "Jump Squats", "Push-up Burpees"],
            60,
        ),
    ]
}

pub fn users() -> Vec<UserProfile> {
    vec![UserProfile {
        id: "1".into(),
        username: "john_doe".into(),
        email: "john@example.com".into(),
        level: "intermediate".into(),
    }]
}

pub fn progress() -> Vec<ProgressRecord> {
    vec![ProgressRecord {
        id: "1".into(),
        user_id: "1".into(),
        workout_id: "1".into(),
        date: "2024-01-15".into(),
        duration_minutes: 30,
        completed: true,
    }]
}
