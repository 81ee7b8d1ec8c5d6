//! Periodic mindful-break reminders.
//!
//! A [`ReminderTimer`] runs on its own thread and fires once per interval
//! until its [`ReminderHandle`] is stopped or dropped.

mod message;
mod timer;

pub use message::{is_night_hour, Reminder};
pub use timer::{local_hour, ReminderHandle, ReminderSink, ReminderTimer, StdoutSink};
