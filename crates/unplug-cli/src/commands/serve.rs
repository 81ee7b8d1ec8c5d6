use unplug_core::session::profile;
use unplug_core::web::{self, AppState, ProfileSnapshot};
use unplug_core::Config;

/// Serve the web surface in the foreground until interrupted.
pub fn run(name: Option<String>, goal: Option<f64>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load().apply_env();
    let goal = goal.map(profile::validate_goal).transpose()?;
    let name = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let state = AppState::new();
    state.set_snapshot(ProfileSnapshot { name, goal });

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(web::serve(&config, state))?;
    Ok(())
}

/// Serve on a dedicated thread with its own runtime, leaving the calling
/// thread free for the blocking console loop. The thread ends with the process.
pub fn spawn_background(config: Config, state: AppState) -> std::io::Result<()> {
    std::thread::Builder::new()
        .name("web".into())
        .spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::error!("failed to start web runtime: {e}");
                    return;
                }
            };
            if let Err(e) = runtime.block_on(web::serve(&config, state)) {
                tracing::error!("web surface stopped: {e}");
            }
        })?;
    Ok(())
}
