use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use showersim::{Cascade, Settings, ShowerTable};

const USAGE: &str = "usage: showersim [SETTINGS.json] [--json]";

fn run() -> showersim::Result<()> {
    let mut settings_path = None;
    let mut json = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ => settings_path = Some(arg),
        }
    }

    let settings = match settings_path {
        Some(path) => {
            log::info!("Loading settings from {}", path);
            Settings::from_json_file(path)?
        }
        None => Settings::default(),
    };
    log::debug!("{:?}", settings);

    let (grid, stats) = Cascade::run(&settings)?;
    log::info!("{}", stats);

    let table = ShowerTable::new(&grid);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &table)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", table)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("showersim: {}", e);
            ExitCode::FAILURE
        }
    }
}
