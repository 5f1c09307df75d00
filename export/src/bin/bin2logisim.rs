//! `bin2logisim` — command-line driver for the Logisim exporter (§6, §10.4).
//!
//! Named after the original C++ tool this crate replaces.

use clap::{App, Arg};
use std::fs;
use std::process;
use trisk_export::format_logisim;
use trisk_util::read_image;

const DEFAULT_OUTPUT: &str = "processor.ram";

fn main() {
    trisk_util::init_logging();

    let matches = App::new("bin2logisim")
        .about("Converts a 256-byte image to Logisim's v2.0 raw text format")
        .arg(Arg::with_name("INPUT").required(true).index(1))
        .arg(Arg::with_name("OUTPUT").index(2))
        .get_matches();

    let input_path = matches.value_of("INPUT").expect("INPUT is required");
    let output_path = matches.value_of("OUTPUT").unwrap_or(DEFAULT_OUTPUT);

    if let Err(err) = run(input_path, output_path) {
        eprintln!("bin2logisim: {}", err);
        process::exit(1);
    }
}

fn run(input_path: &str, output_path: &str) -> Result<(), String> {
    let image = read_image(input_path).map_err(|e| e.to_string())?;
    let text = format_logisim(&image);
    log::info!("exported {} to {}", input_path, output_path);
    fs::write(output_path, text).map_err(|e| format!("failed to write {}: {}", output_path, e))
}
