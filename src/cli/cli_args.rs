use clap::Parser;

use crate::probe::RunParams;

/// rank-probe CLI - per-rank GPU/tile placement diagnostic
#[derive(Parser, Debug)]
#[command(name = "rank-probe")]
#[command(about = "Process rank, GPU, and Tile info")]
#[command(version = "0.1.0")]
pub struct CliArgs {
    /// Global MPI rank of the process
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub rank: i64,

    /// Target GPU ID for this rank
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub gpu: i64,

    /// Target Tile ID on the target GPU
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub tile: i64,
}

impl CliArgs {
    /// Freeze the parsed triple into immutable run parameters.
    pub fn to_params(&self) -> RunParams {
        RunParams::new(self.rank, self.gpu, self.tile)
    }
}
