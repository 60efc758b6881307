use colored::Colorize;

use safetasks_budget::executive;
use safetasks_budget::settings::{load_settings, shellexpand_path};
use safetasks_budget::ExecutiveSpec;

use super::{output_dir, read_json};

pub fn run(
    input: &str,
    output: Option<String>,
    output_dir_flag: Option<String>,
) -> anyhow::Result<()> {
    let settings = load_settings();
    let spec: ExecutiveSpec = read_json(&shellexpand_path(input))?;

    let path = match output {
        Some(path) => shellexpand_path(&path),
        None => {
            let dir = output_dir(output_dir_flag.as_deref(), &settings);
            executive::default_path(&dir, &spec)
        }
    };

    executive::write_report(&spec, &settings, &path)?;
    println!("Wrote {}", path.display().to_string().green());
    Ok(())
}
