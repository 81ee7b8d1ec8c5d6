use rand::thread_rng;
use unplug_core::content::daypart::{activity_for_hour, Daypart};
use unplug_core::reminder::local_hour;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let hour = local_hour();
    let activity = activity_for_hour(hour, &mut thread_rng());
    tracing::debug!(hour, daypart = ?Daypart::from_hour(hour), "picked activity");
    println!("💡 Suggested activity: {activity}");
    Ok(())
}
