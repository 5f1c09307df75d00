//! `tem` — command-line driver for the emulator (§6, §10.4).

use clap::{App, Arg};
use std::process;
use trisk::CpuError;
use trisk_util::{read_image, write_image};

const DEFAULT_OUTPUT: &str = "program.bin";

fn main() {
    trisk_util::init_logging();

    let matches = App::new("tem")
        .about("Runs a 256-byte toy RISC image to completion")
        .arg(Arg::with_name("INPUT").required(true).index(1))
        .arg(Arg::with_name("OUTPUT").index(2))
        .arg(
            Arg::with_name("max-steps")
                .long("max-steps")
                .takes_value(true)
                .help("Stop after this many instructions even if HALT is never reached"),
        )
        .get_matches();

    let input_path = matches.value_of("INPUT").expect("INPUT is required");
    let output_path = matches.value_of("OUTPUT").unwrap_or(DEFAULT_OUTPUT);
    let max_steps = matches.value_of("max-steps").map(|v| {
        v.parse::<u64>().unwrap_or_else(|_| {
            eprintln!("tem: --max-steps must be a non-negative integer");
            process::exit(1);
        })
    });

    match run(input_path, output_path, max_steps) {
        Ok(()) => {}
        Err(RunError::EmptyProgram) => {
            eprintln!("tem: {}", CpuError::EmptyProgram);
            process::exit(0);
        }
        Err(RunError::Other(message)) => {
            eprintln!("tem: {}", message);
            process::exit(1);
        }
    }
}

enum RunError {
    EmptyProgram,
    Other(String),
}

fn run(input_path: &str, output_path: &str, max_steps: Option<u64>) -> Result<(), RunError> {
    let image = read_image(input_path).map_err(|e| RunError::Other(e.to_string()))?;
    let outcome = trisk_emu::run_image(image, max_steps).map_err(|e| match e {
        CpuError::EmptyProgram => RunError::EmptyProgram,
    })?;
    write_image(output_path, &outcome.image).map_err(|e| RunError::Other(e.to_string()))
}
