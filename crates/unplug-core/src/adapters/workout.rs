//! Workout suggestions keyed on a Fitbit credential.

use super::traits::SuggestionAdapter;

pub const CONFIGURED: &str = "💪 Suggested Activity: 10-minute cardio";
pub const UNCONFIGURED: &str = "💪 Default Exercise: Basic stretching routine";

pub struct WorkoutAdapter {
    token: String,
}

impl WorkoutAdapter {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.trim().to_string(),
        }
    }
}

impl SuggestionAdapter for WorkoutAdapter {
    fn name(&self) -> &str {
        "workout"
    }

    fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }

    // No Fitbit endpoint is called yet, so there is no failure path.
    fn suggest(&self) -> String {
        if self.is_configured() {
            CONFIGURED.to_string()
        } else {
            UNCONFIGURED.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_selects_suggestion() {
        assert_eq!(WorkoutAdapter::new("").suggest(), UNCONFIGURED);
        assert_eq!(WorkoutAdapter::new("   ").suggest(), UNCONFIGURED);
        assert_eq!(WorkoutAdapter::new("token").suggest(), CONFIGURED);
    }
}
