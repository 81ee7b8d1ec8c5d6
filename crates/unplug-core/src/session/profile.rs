//! Startup profile: who the user is and how often to nudge them.

use crate::error::ValidationError;

pub const MAX_GOAL_HOURS: f64 = 24.0;
pub const MIN_INTERVAL_MINUTES: u32 = 1;
pub const MAX_INTERVAL_MINUTES: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_name: String,
    /// Daily screen-time goal in hours, in (0, 24].
    pub screen_time_goal: f64,
    /// Minutes between reminders, in [1, 60].
    pub reminder_interval: u32,
}

impl Profile {
    /// Build a profile, validating goal and interval.
    pub fn new(
        user_name: impl Into<String>,
        screen_time_goal: f64,
        reminder_interval: u32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            user_name: user_name.into().trim().to_string(),
            screen_time_goal: validate_goal(screen_time_goal)?,
            reminder_interval: validate_interval(i64::from(reminder_interval))?,
        })
    }
}

pub fn validate_goal(hours: f64) -> Result<f64, ValidationError> {
    // Written so NaN falls through to the error.
    if hours > 0.0 && hours <= MAX_GOAL_HOURS {
        Ok(hours)
    } else {
        Err(ValidationError::OutOfRange {
            field: "screen_time_goal",
            message: format!("{hours} is not in (0, {MAX_GOAL_HOURS}]"),
        })
    }
}

pub fn validate_interval(minutes: i64) -> Result<u32, ValidationError> {
    let range = i64::from(MIN_INTERVAL_MINUTES)..=i64::from(MAX_INTERVAL_MINUTES);
    if range.contains(&minutes) {
        Ok(minutes as u32)
    } else {
        Err(ValidationError::OutOfRange {
            field: "reminder_interval",
            message: format!("{minutes} is not in [{MIN_INTERVAL_MINUTES}, {MAX_INTERVAL_MINUTES}]"),
        })
    }
}

/// Parse a screen-time goal typed by the user.
pub fn parse_goal(input: &str) -> Result<f64, ValidationError> {
    let input = input.trim();
    let hours = input
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field: "screen_time_goal",
            input: input.to_string(),
        })?;
    validate_goal(hours)
}

/// Parse a reminder interval typed by the user. Only whole minutes are accepted.
pub fn parse_interval(input: &str) -> Result<u32, ValidationError> {
    let input = input.trim();
    let minutes = input
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber {
            field: "reminder_interval",
            input: input.to_string(),
        })?;
    validate_interval(minutes)
}
