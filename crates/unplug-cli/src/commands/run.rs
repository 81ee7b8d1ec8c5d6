use std::io;

use unplug_core::{AppState, Config, Console, ReminderTimer, Session};

/// Prompt for a profile, then run the menu loop with reminders in the
/// background until the user exits or stdin closes.
pub fn run(serve: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load().apply_env();
    let state = AppState::new();
    if serve {
        super::serve::spawn_background(config.clone(), state.clone())?;
    }

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    console.greet()?;
    let Some(profile) = console.prompt_profile()? else {
        return Ok(());
    };
    state.set_profile(&profile);

    let reminders =
        ReminderTimer::new(profile.user_name.clone(), profile.reminder_interval).spawn()?;
    let mut session = Session::from_config(profile, &config);
    let outcome = console.run(&mut session);

    let fired = reminders.stop();
    tracing::info!(fired, "reminder timer joined");
    outcome?;
    Ok(())
}

