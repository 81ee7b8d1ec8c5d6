//! Screen-free activity catalog for the `activities` sub-menu.

use indoc::{formatdoc, indoc};

use crate::adapters::SuggestionAdapters;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    Music,
    Physical,
    Creative,
    Reading,
    Social,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 5] = [
        ActivityCategory::Music,
        ActivityCategory::Physical,
        ActivityCategory::Creative,
        ActivityCategory::Reading,
        ActivityCategory::Social,
    ];

    /// Menu letter `a`-`e` (case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "a" => Some(ActivityCategory::Music),
            "b" => Some(ActivityCategory::Physical),
            "c" => Some(ActivityCategory::Creative),
            "d" => Some(ActivityCategory::Reading),
            "e" => Some(ActivityCategory::Social),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ActivityCategory::Music => "API-Powered Music Meditation",
            ActivityCategory::Physical => "Smart Movement Break",
            ActivityCategory::Creative => "AI-Inspired Creative Session",
            ActivityCategory::Reading => "Digital Minimalism by Cal Newport",
            ActivityCategory::Social => "The Letter Writing Revival",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub description: String,
}

impl Activity {
    /// Text shown to the user for this activity.
    pub fn render(&self) -> String {
        format!("\n🌟 {}\n\n{}", self.title, self.description)
    }
}

/// Build the activity for a category. Only the adapter the category
/// needs is consulted.
pub fn activity_for(category: ActivityCategory, adapters: &SuggestionAdapters) -> Activity {
    let description = match category {
        ActivityCategory::Music => formatdoc! {"
            {suggestion}

            Transform your mood with focused music listening! Find a comfortable spot, and just listen. No multitasking, no scrolling - just you and the music.

            Benefits: Reduces stress, improves focus, resets your mental state
            Getting Started: Pick ONE album (recommended: Lo-fi beats or Mozart)
            Tip: Use physical media like vinyl or CD to avoid digital distractions
            Time Needed: 30 minutes

            Remember: Music isn't background noise - it's a journey for your mind! Ready to press play?",
            suggestion = adapters.music.suggest(),
        },
        ActivityCategory::Physical => formatdoc! {"
            {suggestion}

            Time for a body and brain refresh! Let's do a simple but effective movement sequence that requires zero equipment and zero screentime.

            The Flow:
            1. 10 slow, mindful stretches
            2. 20 jumping jacks
            3. 1-minute quiet standing meditation

            Benefits: Boosts energy, improves focus, reduces screen fatigue
            Getting Started: Just stand up - that's step one!
            Obstacle Buster: \"No time?\" These 5 minutes will make the next hour more productive!

            Your body was designed to move, not scroll. Shall we begin?",
            suggestion = adapters.workout.suggest(),
        },
        ActivityCategory::Creative => formatdoc! {"
            {suggestion}

            Grab a paper and pencil - we're going analog! No judgment, no perfection needed - just pure creative flow.

            Why This Works:
            - Exercises different brain regions than digital work
            - Improves hand-eye coordination
            - Creates a mindful break from screens

            Pro Tip: Don't erase! Embrace the beautiful imperfections.
            Time Investment: Just 5 minutes

            Remember: This isn't about art - it's about being present and playful!",
            suggestion = adapters.creative.suggest(),
        },
        ActivityCategory::Reading => indoc! {"
            📚 Today's Reading Adventure: \"Digital Minimalism\" by Cal Newport - a perfect guide for your journey towards intentional technology use.

            Key Themes:
            - Choosing attention over distraction
            - Building meaningful offline activities
            - Creating rules for digital engagement

            Start With: Chapter 1, just 20 minutes
            Reading Spot: Find a cozy, screen-free corner
            Mindset: This isn't just reading - it's investing in your digital wellness!

            Ready to dive into some life-changing wisdom?"}
        .to_string(),
        ActivityCategory::Social => indoc! {"
            ✉️ Let's bring back the lost art of letter writing! Choose one person you usually text with and write them a physical letter instead.

            Materials Needed:
            - Paper (any kind!)
            - Pen
            - Envelope (optional - even folded paper works!)

            Why It's Special:
            - Creates a unique, tangible connection
            - Forces slow, thoughtful communication
            - Gives both writer and recipient a screen-free moment

            Challenge: Write about something you'd never text about.
            Time Needed: 15-20 minutes

            Ready to make someone's day in an unexpectedly analog way?"}
        .to_string(),
    };

    Activity {
        title: category.title(),
        description,
    }
}
