//! Activities matched to the time of day.

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Daypart {
    Morning,
    Afternoon,
    Evening,
}

impl Daypart {
    /// Morning is [5, 12), afternoon [12, 17), everything else is evening.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Daypart::Morning,
            12..=16 => Daypart::Afternoon,
            _ => Daypart::Evening,
        }
    }

    pub fn activities(self) -> &'static [&'static str] {
        match self {
            Daypart::Morning => &[
                "Start your day with focused work (before the world wakes up)",
                "Morning meditation (because your mind needs breakfast too)",
                "Plan your deep work sessions (while your caffeine kicks in)",
                "Review goals (no screens needed, just clarity)",
            ],
            Daypart::Afternoon => &[
                "Take a mindful walk (yes, leave the phone behind)",
                "Deep work power hour (your afternoon coffee's best friend)",
                "Strategic screen break (your eyes will write you a thank-you note)",
                "Real human interaction time (remember those?)",
            ],
            Daypart::Evening => &[
                "Journal your wins (old school paper style)",
                "Read a real book (swipe-free entertainment)",
                "Non-digital hobby time (unleash your inner artist)",
                "Plan tomorrow's success (while today's still fresh)",
            ],
        }
    }
}

/// An activity suited to the given local hour.
pub fn activity_for_hour<R: Rng + ?Sized>(hour: u32, rng: &mut R) -> &'static str {
    let options = Daypart::from_hour(hour).activities();
    options.choose(rng).copied().unwrap_or(options[0])
}
