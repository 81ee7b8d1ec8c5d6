//! Minimal web surface: a static home page and a status endpoint.
//!
//! The profile shown by `/start` lives in an explicit [`AppState`] that the
//! interactive session writes to; there is no process-wide singleton.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::session::Profile;

const INDEX_HTML: &str = include_str!("index.html");
pub const STATUS_MESSAGE: &str = "Digital Detox Assistant started!";

/// Name and goal as seen by the web surface. Both unset until the
/// interactive prompts finish.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub name: Option<String>,
    pub goal: Option<f64>,
}

impl From<&Profile> for ProfileSnapshot {
    fn from(profile: &Profile) -> Self {
        Self {
            name: Some(profile.user_name.clone()),
            goal: Some(profile.screen_time_goal),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
    pub data: ProfileSnapshot,
}

/// Shared state handed to every handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    profile: Arc<RwLock<ProfileSnapshot>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_profile(&self, profile: &Profile) {
        self.set_snapshot(ProfileSnapshot::from(profile));
    }

    pub fn set_snapshot(&self, snapshot: ProfileSnapshot) {
        *self.profile.write() = snapshot;
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        self.profile.read().clone()
    }
}

async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn start(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: STATUS_MESSAGE.to_string(),
        data: state.snapshot(),
    })
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/start", get(start))
        .with_state(state)
}

/// Bind according to `config` and serve until the task is dropped.
pub async fn serve(config: &Config, state: AppState) -> Result<()> {
    let mut router = create_router(state);
    if config.server.dev_mode {
        router = router.layer(TraceLayer::new_for_http());
    }

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "web surface listening on {addr}{}",
        if config.server.dev_mode { " (development)" } else { "" }
    );
    axum::serve(listener, router).await?;
    Ok(())
}
