//! Productivity techniques for the `productivity` sub-menu.

use indoc::indoc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    Pomodoro,
    DeepWork,
    TaskBatching,
    CalendarBlocking,
    DistractionAudit,
}

impl Technique {
    pub const ALL: [Technique; 5] = [
        Technique::Pomodoro,
        Technique::DeepWork,
        Technique::TaskBatching,
        Technique::CalendarBlocking,
        Technique::DistractionAudit,
    ];

    /// Menu letter `a`-`e` (case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "a" => Some(Technique::Pomodoro),
            "b" => Some(Technique::DeepWork),
            "c" => Some(Technique::TaskBatching),
            "d" => Some(Technique::CalendarBlocking),
            "e" => Some(Technique::DistractionAudit),
            _ => None,
        }
    }

    /// Title recorded in the activity history.
    pub fn title(self) -> &'static str {
        match self {
            Technique::Pomodoro => "Pomodoro Technique",
            Technique::DeepWork => "Deep Work Rituals",
            Technique::TaskBatching => "Task Batching",
            Technique::CalendarBlocking => "Calendar Blocking",
            Technique::DistractionAudit => "Distraction Audit",
        }
    }

    pub fn guide(self) -> &'static str {
        match self {
            Technique::Pomodoro => indoc! {"
                ⏲️ Pomodoro Technique - Your Focus Sprint Guide:
                Step 1: Set a timer for 25 minutes
                Step 2: Focus on one task until the timer rings
                Step 3: Take a 5-minute break
                Step 4: After 4 sessions, take a longer 15-30 minute break

                Pro Tip: It's like giving your brain a workout with built-in rest periods!
                Challenge: Complete 4 Pomodoros today without checking social media."},
            Technique::DeepWork => indoc! {"
                🧠 Deep Work Rituals - Build Your Focus Fortress:
                1. Choose your quiet space (a room, corner, or desk)
                2. Set a 90-minute deep work window
                3. Shut off ALL notifications
                4. Put up a \"Do Not Disturb\" sign
                5. Keep only essential tools visible

                Key Point: Deep work is like weightlifting for your concentration muscles!
                Start Small: Begin with 45 minutes and work your way up."},
            Technique::TaskBatching => indoc! {"
                📦 Task Batching - Group Similar Tasks:
                • Email Time: Check all emails in one 30-minute block
                • Call Time: Schedule all calls back-to-back
                • Creative Time: Group all writing/design tasks
                • Admin Time: Handle paperwork in one session

                Why It Works: Your brain stays in one mode, saving mental energy!
                Try This: Batch all your meetings into \"Meeting Mondays\" or \"Talk Tuesdays\"."},
            Technique::CalendarBlocking => indoc! {"
                📅 Calendar Blocking - Time Architecture:
                Morning Block (8-10 AM): Deep Focus Work
                Mid-Morning (10-11 AM): Email & Communication
                Afternoon (2-4 PM): Creative Tasks
                Late Day (4-5 PM): Planning Tomorrow

                Color Code Your Calendar:
                🔵 Deep Work
                🟢 Meetings
                🟡 Admin Tasks
                🔴 Breaks"},
            Technique::DistractionAudit => indoc! {"
                🎯 Distraction Audit - Track Your Focus Destroyers:
                Step 1: Log every interruption for one day
                Step 2: Categorize them (notifications, people, noise)
                Step 3: Create solutions for top 3 distractions

                Common Solutions:
                • Put phone in another room
                • Use website blockers
                • Wear noise-canceling headphones"},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_starts_with_title() {
        for technique in Technique::ALL {
            let first_line = technique.guide().lines().next().unwrap();
            assert!(first_line.contains(technique.title()), "{first_line}");
        }
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(Technique::from_key("B"), Some(Technique::DeepWork));
        assert_eq!(Technique::from_key("z"), None);
        assert_eq!(Technique::from_key("r"), None);
    }
}
