//! Music suggestions backed by the Spotify Web API.

use reqwest::blocking::Client;

use super::traits::SuggestionAdapter;
use crate::error::Result;

const SPOTIFY_API: &str = "https://api.spotify.com";

pub const CONFIGURED: &str = "🎵 Recommended Playlist: Lo-fi Focus Beats";
pub const UNCONFIGURED: &str = "🎵 Default Recommendation: Try ambient music or nature sounds";
pub const FALLBACK: &str = "🎵 Explore calming instrumental music";

pub struct MusicAdapter {
    token: String,
    base_url: String,
}

impl MusicAdapter {
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, SPOTIFY_API)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            token: token.trim().to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Confirms the token can list Spotify's editorial playlists.
    fn fetch(&self) -> Result<String> {
        Client::new()
            .get(format!("{}/v1/users/spotify/playlists", self.base_url))
            .bearer_auth(&self.token)
            .send()?
            .error_for_status()?;
        Ok(CONFIGURED.to_string())
    }
}

impl SuggestionAdapter for MusicAdapter {
    fn name(&self) -> &str {
        "music"
    }

    fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }

    fn suggest(&self) -> String {
        if !self.is_configured() {
            return UNCONFIGURED.to_string();
        }
        self.fetch().unwrap_or_else(|e| {
            tracing::debug!(adapter = self.name(), "suggestion request failed: {e}");
            FALLBACK.to_string()
        })
    }
}
