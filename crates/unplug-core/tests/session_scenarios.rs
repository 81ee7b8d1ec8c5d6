//! Scripted end-to-end sessions through the console driver.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use unplug_core::config::Credentials;
use unplug_core::session::FAREWELL_MARKER;
use unplug_core::{Console, MenuContext, ReminderTimer, Session, SuggestionAdapters};

fn run_script(script: &str) -> (Session, String) {
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    console.greet().unwrap();
    let profile = console.prompt_profile().unwrap().expect("profile");
    let mut session = Session::new(
        profile,
        SuggestionAdapters::from_credentials(&Credentials::default()),
    )
    .with_seed(7);
    console.run(&mut session).unwrap();
    let (_, out) = console.into_inner();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn immediate_exit_says_goodbye_without_reminders() {
    let mut console = Console::new(Cursor::new(b"Ada\n2.0\n5\n8\n".to_vec()), Vec::new());
    let profile = console.prompt_profile().unwrap().unwrap();
    assert_eq!(profile.reminder_interval, 5);

    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink_seen = Arc::clone(&seen);
    let reminders = ReminderTimer::new(profile.user_name.clone(), profile.reminder_interval)
        .with_sink(move |text: &str| sink_seen.lock().push(text.to_string()))
        .spawn()
        .unwrap();

    let mut session = Session::new(
        profile,
        SuggestionAdapters::from_credentials(&Credentials::default()),
    );
    console.run(&mut session).unwrap();
    let fired = reminders.stop();

    assert!(!session.is_running());
    assert_eq!(fired, 0);
    assert!(seen.lock().is_empty());

    let out = String::from_utf8(console.into_inner().1).unwrap();
    let last = out.trim_end().lines().last().unwrap();
    assert!(last.contains(FAREWELL_MARKER), "{last}");
    assert!(last.contains("Ada"));
}

#[test]
fn activity_then_return_restores_main_menu() {
    let (session, out) = run_script("Ada\n2\n5\n2\na\nr\n");
    assert_eq!(session.menu(), MenuContext::Main);
    assert_eq!(session.activity_history().len(), 1);
    assert!(out.trim_end().ends_with(&format!(
        "{}\n💭 Enter your choice (1-8), Ada:",
        MenuContext::Main.render()
    )));
}

#[test]
fn invalid_entries_are_counted() {
    let (session, out) = run_script("Ada\n2\n5\nabc\n0\n9\n6\n");
    assert!(session.is_running());
    assert_eq!(session.interaction_count(), 4);
    assert!(out.contains("• Interactions Today: 4"));
    assert_eq!(out.matches("Please enter a number").count(), 1);
    assert_eq!(out.matches("Please choose a number between 1-8").count(), 2);
}

#[test]
fn rejected_setup_values_are_reprompted() {
    let (session, _) = run_script("Ada\n0\n25\nabc\n3\n0\n61\n2.5\n10\n8\n");
    assert_eq!(session.profile().screen_time_goal, 3.0);
    assert_eq!(session.profile().reminder_interval, 10);
    assert!(!session.is_running());
}

#[test]
fn reminders_fire_while_session_waits() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink_seen = Arc::clone(&seen);
    let reminders = ReminderTimer::new("Ada", 1)
        .with_period(Duration::from_millis(15))
        .with_clock(|| 9)
        .with_sink(move |text: &str| sink_seen.lock().push(text.to_string()))
        .spawn()
        .unwrap();

    std::thread::sleep(Duration::from_millis(100));
    let fired = reminders.stop();
    assert!(fired >= 1);
    assert!(seen
        .lock()
        .iter()
        .all(|m| m.contains("💭 Wisdom drop: ")));
}
