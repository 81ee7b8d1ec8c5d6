//! Session and menu state machine.
//!
//! A [`Session`] owns everything one interactive run mutates: the running
//! flag, the interaction counter, the activity history and the menu cursor.
//! Each line of user input goes through [`Session::handle_input`], which
//! returns a [`Reply`] for the driver to print.
//!
//! ## Transitions
//!
//! ```text
//! main --"2"--> activities --"r"--> main
//! main --"4"--> productivity --"r"--> main
//! main --"8"--> (terminated)
//! ```

pub mod console;
pub mod menu;
pub mod profile;

pub use console::Console;
pub use menu::MenuContext;
pub use profile::{parse_goal, parse_interval, Profile};

use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

use crate::adapters::SuggestionAdapters;
use crate::analysis;
use crate::config::Config;
use crate::content::{self, activities, challenges, ActivityCategory, Technique};

/// Every farewell starts with this.
pub const FAREWELL_MARKER: &str = "✨ Farewell";

/// Hours of "usage" attributed to each interaction by the progress report.
/// A placeholder proxy, not a measurement.
pub const HOURS_PER_INTERACTION: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// Canned content; the driver follows it with the current menu.
    Content,
    /// A menu, shown after a navigation.
    Menu,
    /// Unrecognized input; the text already re-displays the menu.
    Invalid,
    /// The session has ended.
    Farewell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
}

impl Reply {
    fn content(text: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::Content,
            text: text.into(),
        }
    }

    fn menu(menu: MenuContext) -> Self {
        Self {
            kind: ReplyKind::Menu,
            text: menu.render().to_string(),
        }
    }

    fn invalid(text: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::Invalid,
            text: text.into(),
        }
    }
}

pub struct Session {
    profile: Profile,
    running: bool,
    interaction_count: u64,
    last_mood: String,
    activity_history: Vec<String>,
    menu: MenuContext,
    adapters: SuggestionAdapters,
    image_path: PathBuf,
    rng: Mcg128Xsl64,
}

impl Session {
    pub fn new(profile: Profile, adapters: SuggestionAdapters) -> Self {
        Self {
            profile,
            running: true,
            interaction_count: 0,
            last_mood: "neutral".into(),
            activity_history: Vec::new(),
            menu: MenuContext::Main,
            adapters,
            image_path: PathBuf::from("user_image.jpg"),
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Session wired to the configured credentials and image path.
    pub fn from_config(profile: Profile, config: &Config) -> Self {
        Self::new(profile, SuggestionAdapters::from_credentials(&config.credentials))
            .with_image_path(&config.session.image_path)
    }

    pub fn with_image_path(mut self, path: impl AsRef<Path>) -> Self {
        self.image_path = path.as_ref().to_path_buf();
        self
    }

    /// Make tip and challenge sampling reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mcg128Xsl64::seed_from_u64(seed);
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interaction_count(&self) -> u64 {
        self.interaction_count
    }

    pub fn last_mood(&self) -> &str {
        &self.last_mood
    }

    pub fn activity_history(&self) -> &[String] {
        &self.activity_history
    }

    pub fn menu(&self) -> MenuContext {
        self.menu
    }

    pub fn estimated_usage(&self) -> f64 {
        self.interaction_count as f64 * HOURS_PER_INTERACTION
    }

    /// Goal minus estimated usage, never negative.
    pub fn remaining_screen_time(&self) -> f64 {
        (self.profile.screen_time_goal - self.estimated_usage()).max(0.0)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Dispatch one line of input against the current menu.
    pub fn handle_input(&mut self, input: &str) -> Reply {
        if !self.running {
            return self.farewell();
        }
        match self.menu {
            MenuContext::Main => self.handle_main(input),
            MenuContext::Activities | MenuContext::Productivity => self.handle_submenu(input),
        }
    }

    fn handle_main(&mut self, input: &str) -> Reply {
        match parse_choice(input) {
            Some(2) => self.enter(MenuContext::Activities),
            Some(4) => self.enter(MenuContext::Productivity),
            Some(choice) => {
                self.interaction_count += 1;
                self.dispatch(choice)
            }
            None => {
                self.interaction_count += 1;
                Reply::invalid(format!(
                    "\n❓ Please enter a number to select an option\n{}",
                    MenuContext::Main.render()
                ))
            }
        }
    }

    fn dispatch(&mut self, choice: i64) -> Reply {
        match choice {
            1 => {
                let tip = content::random_tip(&mut self.rng);
                Reply::content(format!(
                    "\n🎯 Focus Wisdom:\n{tip}\n\n{}",
                    content::tip_explanation(tip)
                ))
            }
            3 => Reply::content(format!(
                "\n🎯 Screen Time Progress:\n• Daily Goal: {} hours\n• Estimated Usage: {:.1} hours\n• Remaining: {:.1} hours\n\n→ Remember: Quality over quantity!",
                format_hours(self.profile.screen_time_goal),
                self.estimated_usage(),
                self.remaining_screen_time(),
            )),
            5 => Reply::content(format!(
                "\n📱 Social Media Reality Check Challenge:\n{}\n\n→ Ready to level up your digital wellness?",
                challenges::random_challenge(&mut self.rng)
            )),
            6 => Reply::content(format!(
                "\n📊 Digital Wellness Summary:\n• Interactions Today: {}\n• Mindful Moments: {}\n• Current Mood: {}\n\n→ Keep going, {}! Every mindful choice counts.",
                self.interaction_count,
                self.activity_history.len(),
                self.last_mood,
                self.profile.user_name,
            )),
            7 => Reply::content(analysis::analyze_image(&self.image_path)),
            8 => {
                self.running = false;
                tracing::info!(
                    interactions = self.interaction_count,
                    activities = self.activity_history.len(),
                    "session ended"
                );
                self.farewell()
            }
            _ => Reply::invalid(format!(
                "\n❓ Please choose a number between 1-8\n{}",
                MenuContext::Main.render()
            )),
        }
    }

    fn handle_submenu(&mut self, input: &str) -> Reply {
        let key = input.trim().to_ascii_lowercase();
        if key == "r" {
            return self.enter(MenuContext::Main);
        }

        let picked = match self.menu {
            MenuContext::Activities => ActivityCategory::from_key(&key).map(|category| {
                let activity = activities::activity_for(category, &self.adapters);
                (activity.title, activity.render())
            }),
            MenuContext::Productivity => Technique::from_key(&key)
                .map(|technique| (technique.title(), format!("\n{}", technique.guide()))),
            MenuContext::Main => None,
        };

        match picked {
            Some((title, text)) => {
                self.activity_history.push(title.to_string());
                Reply::content(text)
            }
            None => Reply::invalid(format!(
                "\n❓ Option not found. Choose a-e, or r to return\n{}",
                self.menu.render()
            )),
        }
    }

    fn enter(&mut self, menu: MenuContext) -> Reply {
        tracing::debug!(from = ?self.menu, to = ?menu, "menu transition");
        self.menu = menu;
        Reply::menu(menu)
    }

    fn farewell(&self) -> Reply {
        Reply {
            kind: ReplyKind::Farewell,
            text: format!(
                "{FAREWELL_MARKER}, {}! Your journey to digital wellness continues offline.",
                self.profile.user_name
            ),
        }
    }
}

/// A main-menu number. Integers beyond `i64` still count as numbers and
/// saturate, so they land on the out-of-range reply.
fn parse_choice(input: &str) -> Option<i64> {
    match input.trim().parse::<i64>() {
        Ok(choice) => Some(choice),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Whole hours keep one decimal ("2.0"), fractional ones print as-is ("2.25").
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.1}")
    } else {
        format!("{hours}")
    }
}
