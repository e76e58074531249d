use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;
use tracing::error;

use design_patterns::{demo, logging, DemoConfig};

fn main() -> ExitCode {
    logging::init();

    let path = env::args().nth(1).map(PathBuf::from);
    let config = match DemoConfig::load_or_default(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "could not load demo config");
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    if let Some(color) = config.color_override() {
        colored::control::set_override(color);
    }

    for section in &config.sections {
        println!("{}", format!("=== {section} ===").bold().cyan());
        for line in demo::run(*section) {
            println!("{line}");
        }
        println!();
    }

    ExitCode::SUCCESS
}
