//! Line-oriented console driver for a [`Session`].
//!
//! Generic over the reader and writer so whole sessions can be scripted in
//! tests. End of input at any prompt ends the run quietly.

use std::io::{BufRead, Write};

use super::profile::{self, Profile};
use super::{MenuContext, ReplyKind, Session};
use crate::error::{Result, ValidationError};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write `text` without a newline and read one line. `None` on EOF.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn greet(&mut self) -> Result<()> {
        writeln!(self.output, "✨ Welcome to Digital Minimalism Assistant ✨")?;
        writeln!(
            self.output,
            "🌟 Let's make technology work for you, not the other way around! 🌟"
        )?;
        Ok(())
    }

    /// Ask for name, goal and interval, re-prompting until each is valid.
    pub fn prompt_profile(&mut self) -> Result<Option<Profile>> {
        let Some(user_name) = self.prompt("👋 What shall I call you? ")? else {
            return Ok(None);
        };
        writeln!(
            self.output,
            "\n🎉 Welcome aboard the digital wellness journey, {user_name}! 🎯"
        )?;

        let screen_time_goal = loop {
            let Some(line) =
                self.prompt("⏰ What's your ideal daily screen time target (in hours)? ")?
            else {
                return Ok(None);
            };
            match profile::parse_goal(&line) {
                Ok(hours) => {
                    writeln!(
                        self.output,
                        "📱 Excellent choice! {hours} hours of intentional screen time it is!"
                    )?;
                    break hours;
                }
                Err(ValidationError::NotANumber { .. }) => {
                    writeln!(self.output, "❌ Numbers only, friend! Let's try again.")?
                }
                Err(ValidationError::OutOfRange { .. }) => writeln!(
                    self.output,
                    "❌ Let's keep it real - between 0 and 24 hours, please!"
                )?,
            }
        };

        let reminder_interval = loop {
            let Some(line) = self
                .prompt("⏱️ How often should I remind you to take mindful breaks (in minutes)? ")?
            else {
                return Ok(None);
            };
            match profile::parse_interval(&line) {
                Ok(minutes) => {
                    writeln!(
                        self.output,
                        "✅ Roger that! A mindful nudge every {minutes} minutes coming right up!"
                    )?;
                    break minutes;
                }
                Err(ValidationError::NotANumber { .. }) => writeln!(
                    self.output,
                    "❌ Numbers only - we're digital minimalists, not magicians!"
                )?,
                Err(ValidationError::OutOfRange { .. }) => writeln!(
                    self.output,
                    "⚠️ Let's keep it between 1 and 60 minutes - we want balance, not burnout!"
                )?,
            }
        };

        Ok(Some(Profile {
            user_name,
            screen_time_goal,
            reminder_interval,
        }))
    }

    /// Run the read-print loop until the session ends or input runs out.
    pub fn run(&mut self, session: &mut Session) -> Result<()> {
        let name = session.profile().user_name.clone();
        tracing::info!(user = %name, "session started");

        writeln!(self.output, "\n🙏 Welcome to your digital wellness journey, {name}!")?;
        writeln!(
            self.output,
            "Let's make technology work for you, not the other way around."
        )?;
        writeln!(self.output, "{}", MenuContext::Main.render())?;

        while session.is_running() {
            let prompt = if session.menu().is_submenu() {
                "Choose your option: ".to_string()
            } else {
                format!("💭 Enter your choice (1-8), {name}: ")
            };
            let Some(line) = self.prompt(&prompt)? else {
                tracing::info!("input closed, leaving session");
                break;
            };

            let reply = session.handle_input(&line);
            writeln!(self.output, "{}", reply.text)?;
            match reply.kind {
                ReplyKind::Content => {
                    writeln!(self.output, "\nWhat's next on your digital wellness journey?")?;
                    writeln!(self.output, "{}", session.menu().render())?;
                }
                ReplyKind::Menu | ReplyKind::Invalid => {}
                ReplyKind::Farewell => break,
            }
        }
        self.output.flush()?;
        Ok(())
    }
}
