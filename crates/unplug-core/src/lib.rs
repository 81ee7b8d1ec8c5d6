//! # Unplug Core Library
//!
//! Core logic for the Unplug digital wellness companion. The `unplug` CLI is
//! a thin shell over this crate.
//!
//! ## Architecture
//!
//! - **Session**: menu state machine plus a console driver generic over any
//!   reader/writer pair
//! - **Reminders**: a cancellable periodic thread with a stop channel
//! - **Content**: static tips, activities, techniques and challenges
//! - **Adapters**: music/workout/creative suggestion sources that never fail
//! - **Analysis**: image brightness and resolution report
//! - **Web**: axum router exposing a home page and a status endpoint
//!
//! ## Key Components
//!
//! - [`Session`]: menu state machine
//! - [`Console`]: interactive driver
//! - [`ReminderTimer`]: periodic reminder thread
//! - [`Config`]: application configuration management

pub mod adapters;
pub mod analysis;
pub mod config;
pub mod content;
pub mod error;
pub mod reminder;
pub mod session;
pub mod web;

pub use adapters::{SuggestionAdapter, SuggestionAdapters};
pub use analysis::{analyze_image, FocusReport};
pub use config::Config;
pub use error::{ConfigError, CoreError, ValidationError};
pub use reminder::{Reminder, ReminderHandle, ReminderTimer};
pub use session::{Console, MenuContext, Profile, Reply, ReplyKind, Session};
pub use web::AppState;
