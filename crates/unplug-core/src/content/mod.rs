//! Static content library: tips, activities, techniques and challenges.
//!
//! Pure data plus lookup helpers. Sampling takes the caller's RNG so the
//! session and the reminder thread stay reproducible under a fixed seed.

pub mod activities;
pub mod challenges;
pub mod daypart;
pub mod techniques;

use rand::seq::SliceRandom;
use rand::Rng;

pub use activities::{Activity, ActivityCategory};
pub use techniques::Technique;

/// Deep work tips, sampled by menu option 1 and the reminder timer.
pub const TIPS: [&str; 8] = [
    "Schedule specific times for deep work - your brain will thank you later!",
    "Create a dedicated workspace free from digital distractions (yes, that means hiding your phone)",
    "Practice 'analog leisure' - remember those things called books?",
    "Use technology with intention, not like a squirrel chasing notifications",
    "Implement a daily digital sunset - let your brain know it's bedtime",
    "Focus on one task at a time - your brain isn't a browser with multiple tabs",
    "Schedule email checks - inbox zero isn't a life goal",
    "Keep your phone in another room during deep work (it'll survive without you)",
];

/// Leading characters of a tip used as the explanation key.
const EXPLANATION_KEY_CHARS: usize = 25;

/// Explanation key -> implementation guidance.
const TIP_EXPLANATIONS: [(&str, &str); 5] = [
    (
        "Schedule specific times",
        "→ Implementation: Block your calendar for 2-3 deep work sessions (90 mins each)\n→ Pro tip: Start with your most challenging task during peak energy hours",
    ),
    (
        "Create a dedicated workspace",
        "→ Implementation: Choose a quiet corner, remove visible devices\n→ Pro tip: Use a simple timer instead of your phone's timer",
    ),
    (
        "Practice 'analog leisure'",
        "→ Implementation: Set aside 30 minutes for reading or journaling\n→ Pro tip: Keep a book and notebook within arm's reach",
    ),
    (
        "Use technology with intention",
        "→ Implementation: Write down your purpose before opening any app\n→ Pro tip: Use app timers to enforce boundaries",
    ),
    (
        "Implement a daily digital sunset",
        "→ Implementation: Stop screen use 1 hour before bed\n→ Pro tip: Switch to reading or light stretching",
    ),
];

const GENERIC_EXPLANATION: &str =
    "→ Implementation: Start with 25 minutes of focused work\n→ Pro tip: Take a 5-minute break between sessions";

/// Pick one tip at random.
pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TIPS.choose(rng).copied().unwrap_or(TIPS[0])
}

/// First [`EXPLANATION_KEY_CHARS`] characters of `tip`.
fn explanation_key(tip: &str) -> &str {
    match tip.char_indices().nth(EXPLANATION_KEY_CHARS) {
        Some((end, _)) => &tip[..end],
        None => tip,
    }
}

/// Guidance for a tip. The tip's leading characters must equal a key
/// exactly; anything else gets the generic explanation.
pub fn tip_explanation(tip: &str) -> &'static str {
    let key = explanation_key(tip);
    TIP_EXPLANATIONS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, explanation)| *explanation)
        .unwrap_or(GENERIC_EXPLANATION)
}
