//! Social media reality-check challenges (menu option 5).

use indoc::indoc;
use rand::seq::SliceRandom;
use rand::Rng;

pub const CHALLENGES: [&str; 5] = [
    indoc! {"
        24-Hour Digital Detox Challenge:
        → No social media for 24 hours
        → Use this time for analog activities
        → Notice how your mind feels clearer
        → Track what you accomplished instead"},
    indoc! {"
        Compare Time vs. Value Test:
        → Check your screen time stats
        → List what you gained from each hour
        → Rate each platform's value (1-10)
        → Delete apps scoring below 5"},
    indoc! {"
        Mindful Scroll Test:
        → Before opening any social app, ask:
           \"What am I looking for?\"
        → Set a 5-minute timer
        → Close the app when it rings
        → Write down if you found what you needed"},
    indoc! {"
        Notification Fasting:
        → Mute all non-essential apps for 48 hours
        → Keep only calls & messages
        → Experience the mental clarity
        → Notice improved focus"},
    indoc! {"
        1 App, 1 Hour Rule:
        → Choose ONE social platform per day
        → Limit usage to 1 hour
        → Use a timer to stay honest
        → Log what you miss (probably nothing!)"},
];

pub fn random_challenge<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CHALLENGES.choose(rng).copied().unwrap_or(CHALLENGES[0])
}
