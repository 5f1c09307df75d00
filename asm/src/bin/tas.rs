//! `tas` — command-line driver for the assembler (§6, §10.4).

use clap::{App, Arg};
use std::fs;
use std::process;
use trisk_util::write_image;

const DEFAULT_OUTPUT: &str = "program.bin";

fn main() {
    trisk_util::init_logging();

    let matches = App::new("tas")
        .about("Assembles toy RISC source into a 256-byte image")
        .arg(Arg::with_name("INPUT").required(true).index(1))
        .arg(Arg::with_name("OUTPUT").index(2))
        .get_matches();

    let input_path = matches.value_of("INPUT").expect("INPUT is required");
    let output_path = matches.value_of("OUTPUT").unwrap_or(DEFAULT_OUTPUT);

    if let Err(err) = run(input_path, output_path) {
        eprintln!("tas: {}", err);
        process::exit(1);
    }
}

fn run(input_path: &str, output_path: &str) -> Result<(), String> {
    let source = fs::read_to_string(input_path)
        .map_err(|e| format!("failed to read {}: {}", input_path, e))?;

    let image = trisk_asm::assemble(&source).map_err(|e| e.to_string())?;

    write_image(output_path, &image).map_err(|e| e.to_string())
}
