use grid_mower::{RunConfig, Script};
use log::info;
use std::process::ExitCode;

const USAGE: &str = "usage: grid-mower <script-file> [--stop-on-error]";

fn main() -> ExitCode {
    env_logger::init();

    let mut path = None;
    let mut config = RunConfig::default();
    for arg in std::env::args().skip(1) {
        if arg == "--stop-on-error" {
            config.stop_on_error = true;
        } else if path.is_none() && !arg.starts_with("--") {
            path = Some(arg);
        } else {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    }
    let Some(path) = path else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("cannot read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let script = match Script::parse(&text) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("loaded {} mower(s) from {path}", script.mowers.len());

    match script.run(&config) {
        Ok(reports) => {
            for report in reports {
                println!("{report}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
