use colored::Colorize;

use safetasks_budget::renderer;
use safetasks_budget::settings::{load_settings, settings_path};

pub fn run() -> anyhow::Result<()> {
    let settings = load_settings();
    let path = settings_path();

    println!("Settings:   {}", path.display());
    if !path.exists() {
        println!("            (not found, using defaults)");
    }
    println!("Brand:      {}", settings.brand_name);
    println!("Validity:   {} days", settings.validity_days);
    println!("Output dir: {}", settings.output_dir);
    let renderer = if renderer::available() {
        "available".green()
    } else {
        "missing (built without the `pdf` feature)".red()
    };
    println!("Renderer:   {renderer}");
    Ok(())
}
