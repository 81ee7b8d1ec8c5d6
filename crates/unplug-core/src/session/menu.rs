use indoc::indoc;

/// Which menu the next input is addressed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuContext {
    #[default]
    Main,
    Activities,
    Productivity,
}

const MAIN_MENU: &str = indoc! {"

    📋 Digital Wellness Menu:
    1️⃣ Focus Tips & Techniques
    2️⃣ Screen-Free Activity Suggestions
    3️⃣ Check Screen Time Goal
    4️⃣ Productivity Enhancement
    5️⃣ Social Media Reality Check
    6️⃣ Digital Wellness Report
    7️⃣ Image Focus Analysis
    8️⃣ Exit Program

    Enter a number (1-8) to choose your path to digital wellness! 🌟"};

const ACTIVITIES_MENU: &str = indoc! {"

    🎯 Screen-Free Activities:
    a) 🎵 Music & Rhythm - Connect with melodies and rhythms
    b) 💪 Physical Activity - Get moving and energized
    c) 🎨 Creative Expression - Unleash your artistic side
    d) 📚 Reading Adventure - Dive into a good book
    e) 🤝 Social Connection - Connect offline
    r) Return to main menu

    Choose your adventure (a-e, or r)"};

const PRODUCTIVITY_MENU: &str = indoc! {"

    ⚡ Productivity Enhancement:
    a) ⏲️ Pomodoro Technique - Work in focused sprints
    b) 🧠 Deep Work Rituals - Design your focus fortress
    c) 📦 Task Batching - Group similar tasks
    d) 📅 Calendar Blocking - Time architecture
    e) 🎯 Distraction Audit - Track focus destroyers
    r) Return to main menu

    Choose your technique (a-e, or r)"};

impl MenuContext {
    pub fn render(self) -> &'static str {
        match self {
            MenuContext::Main => MAIN_MENU,
            MenuContext::Activities => ACTIVITIES_MENU,
            MenuContext::Productivity => PRODUCTIVITY_MENU,
        }
    }

    pub fn is_submenu(self) -> bool {
        !matches!(self, MenuContext::Main)
    }
}
