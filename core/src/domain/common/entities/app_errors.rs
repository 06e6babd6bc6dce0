use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Day {0} not found")]
    DayNotFound(i64),

    #[error("Meal {meal} for day {day} not found")]
    MealNotFound { day: i64, meal: String },

    #[error("diet plan document error: {0}")]
    Document(String),

    #[error("processing failed: {0}")]
    Processing(String),
}
