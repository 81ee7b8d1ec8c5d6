use clap::Subcommand;
use unplug_core::config::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting, e.g. `server.port` or `session.image_path`
    Get { key: String },
    /// Change one setting and write the file
    Set {
        key: String,
        /// Parsed as the setting's existing type
        value: String,
    },
    /// Print every setting as JSON, credentials masked
    List,
    /// Overwrite the file with defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let path = Config::path()?;
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load().get(&key).ok_or(format!("unknown key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load();
            config.set(&key, &value)?;
            config.save_to(&path)?;
            tracing::info!(%key, path = %path.display(), "setting saved");
            println!("ok");
        }
        ConfigAction::List => {
            println!("{}", serde_json::to_string_pretty(&Config::load().redacted())?);
        }
        ConfigAction::Reset => {
            Config::default().save_to(&path)?;
            println!("config reset to defaults ({})", path.display());
        }
    }
    Ok(())
}
