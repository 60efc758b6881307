mod cli;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if !safetasks_budget::renderer::available() {
        eprintln!(
            "{} built without the `pdf` feature; PDF output is unavailable",
            "Warning:".yellow()
        );
    }

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            output_dir,
        } => cli::generate::run(&input, output, output_dir),
        Commands::Check { input } => cli::check::run(&input),
        Commands::Executive {
            input,
            output,
            output_dir,
        } => cli::executive::run(&input, output, output_dir),
        Commands::Sample { executive } => cli::sample::run(executive),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
