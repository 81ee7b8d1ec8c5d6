/// What a single reminder firing says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reminder {
    /// Between 22:00 and 06:00 local time.
    NightMode,
    MindfulMoment { tip: String },
}

/// Night window is [22, 24) ∪ [0, 6).
pub fn is_night_hour(hour: u32) -> bool {
    hour >= 22 || hour < 6
}

impl Reminder {
    pub fn for_hour(hour: u32, tip: &str) -> Self {
        if is_night_hour(hour) {
            Reminder::NightMode
        } else {
            Reminder::MindfulMoment {
                tip: tip.to_string(),
            }
        }
    }

    pub fn render(&self, user_name: &str) -> String {
        match self {
            Reminder::NightMode => format!(
                "\n🌙 {user_name}, time for digital sunset. Your brain's night mode thanks you!"
            ),
            Reminder::MindfulMoment { tip } => {
                format!("\n⏰ {user_name}, mindful moment alert!\n💭 Wisdom drop: {tip}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_window_boundaries() {
        for hour in [22, 23, 0, 3, 5] {
            assert!(is_night_hour(hour), "{hour}");
        }
        for hour in [6, 12, 21] {
            assert!(!is_night_hour(hour), "{hour}");
        }
    }

    #[test]
    fn night_reminder_ignores_tip() {
        assert_eq!(Reminder::for_hour(23, "tip"), Reminder::NightMode);
        let text = Reminder::NightMode.render("Ada");
        assert!(text.contains("🌙 Ada, time for digital sunset"));
    }

    #[test]
    fn daytime_reminder_carries_tip() {
        let reminder = Reminder::for_hour(10, "Drink water");
        assert_eq!(
            reminder.render("Ada"),
            "\n⏰ Ada, mindful moment alert!\n💭 Wisdom drop: Drink water"
        );
    }
}
