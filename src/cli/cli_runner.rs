use std::path::PathBuf;

use clap::Parser;

use crate::cli::{CliArgs, OutputFormatter};
use crate::probe::{ensure_output_dir, write_marker, RunParams};

/// Main entry point for CLI execution.
///
/// Argument errors terminate the process with a usage message and non-zero
/// status (clap's standard behavior) before any side effect. Filesystem
/// failures are reported but leave the exit status at zero.
pub fn run_cli() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let params = args.to_params();

    println!("{}", OutputFormatter::format_banner(&params));

    run_probe(&params);

    println!("{}", OutputFormatter::format_completion(params.rank));
    Ok(())
}

/// Perform the run's side effects: ensure the output directory, then write
/// the marker file into it.
///
/// A directory failure skips the marker write entirely; a marker failure is
/// reported and execution continues. Neither propagates.
fn run_probe(params: &RunParams) {
    let dir = PathBuf::from(params.dir_name());
    if let Err(error) = ensure_output_dir(&dir) {
        eprintln!("{}", OutputFormatter::format_error(&error));
        return;
    }

    let path = params.file_path();
    match write_marker(&path, params) {
        Ok(()) => println!("{}", OutputFormatter::format_file_written(&path)),
        Err(error) => eprintln!("{}", OutputFormatter::format_error(&error)),
    }
}
