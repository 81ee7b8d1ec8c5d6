use std::path::Path;

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", unplug_core::analyze_image(path));
    Ok(())
}
