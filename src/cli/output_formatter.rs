use std::path::Path;

use colored::*;

use crate::probe::RunParams;
use crate::utils::error::ProbeError;

/// Formats console output for the probe run
pub struct OutputFormatter;

impl OutputFormatter {
    /// Format the execution banner: a fixed header followed by the three
    /// parameter values, one per line.
    pub fn format_banner(params: &RunParams) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "rank-probe executing:".bold()));
        output.push_str(&format!("  Global Rank: {}\n", params.rank.to_string().cyan()));
        output.push_str(&format!("  Target GPU:  {}\n", params.gpu.to_string().cyan()));
        output.push_str(&format!("  Target Tile: {}", params.tile.to_string().cyan()));
        output
    }

    /// Format the confirmation printed after a successful marker write.
    pub fn format_file_written(path: &Path) -> String {
        format!("  File written: {}", path.display().to_string().green())
    }

    /// Format the completion line printed regardless of side-effect outcome.
    pub fn format_completion(rank: i64) -> String {
        format!("rank-probe rank {} finished.", rank)
    }

    /// Format error message for CLI display
    pub fn format_error(error: &ProbeError) -> String {
        format!("{} {}", "Error:".red().bold(), error.to_string().red())
    }
}
