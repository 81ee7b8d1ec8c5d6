//! External suggestion adapters.
//!
//! Each adapter tries at most one outbound call when its credential is
//! present and otherwise answers with a fixed string. No retries, no backoff.

pub mod creative;
pub mod music;
pub mod traits;
pub mod workout;

pub use creative::CreativePromptAdapter;
pub use music::MusicAdapter;
pub use traits::SuggestionAdapter;
pub use workout::WorkoutAdapter;

use crate::config::Credentials;

/// The three adapters the activities menu draws on.
pub struct SuggestionAdapters {
    pub music: Box<dyn SuggestionAdapter>,
    pub workout: Box<dyn SuggestionAdapter>,
    pub creative: Box<dyn SuggestionAdapter>,
}

impl SuggestionAdapters {
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            music: Box::new(MusicAdapter::new(&credentials.spotify)),
            workout: Box::new(WorkoutAdapter::new(&credentials.fitbit)),
            creative: Box::new(CreativePromptAdapter::new(&credentials.openai)),
        }
    }
}

impl std::fmt::Debug for SuggestionAdapters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionAdapters")
            .field("music", &self.music.is_configured())
            .field("workout", &self.workout.is_configured())
            .field("creative", &self.creative.is_configured())
            .finish()
    }
}
