use std::path::PathBuf;

/// The three identifiers a probe run is invoked with.
///
/// No range validation is applied; any value the integer parser accepts is
/// carried through verbatim, including negative ones. Immutable for the
/// lifetime of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParams {
    /// Global rank of the process in the surrounding distributed run.
    pub rank: i64,
    /// Target GPU ID for this rank.
    pub gpu: i64,
    /// Target tile ID on the target GPU.
    pub tile: i64,
}

impl RunParams {
    pub fn new(rank: i64, gpu: i64, tile: i64) -> Self {
        Self { rank, gpu, tile }
    }

    /// Output directory name. Pure function of the full triple, so distinct
    /// rank/GPU/tile placements never collide.
    pub fn dir_name(&self) -> String {
        format!(
            "output_rank_{}_gpu_{}_tile_{}",
            self.rank, self.gpu, self.tile
        )
    }

    /// Marker file name. Derived from the rank alone.
    pub fn file_name(&self) -> String {
        format!("hello_rank_{}.txt", self.rank)
    }

    /// Marker file path: the file name joined under the output directory.
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(self.dir_name()).join(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_name_encodes_full_triple() {
        let params = RunParams::new(2, 1, 0);
        assert_eq!(params.dir_name(), "output_rank_2_gpu_1_tile_0");
    }

    #[test]
    fn test_file_name_uses_rank_only() {
        let params = RunParams::new(7, 3, 1);
        assert_eq!(params.file_name(), "hello_rank_7.txt");
    }

    #[test]
    fn test_file_path_joins_under_dir() {
        let params = RunParams::new(0, 0, 0);
        assert_eq!(
            params.file_path(),
            PathBuf::from("output_rank_0_gpu_0_tile_0").join("hello_rank_0.txt")
        );
    }

    #[test]
    fn test_names_are_deterministic() {
        let a = RunParams::new(4, 2, 1);
        let b = RunParams::new(4, 2, 1);
        assert_eq!(a.dir_name(), b.dir_name());
        assert_eq!(a.file_path(), b.file_path());
    }

    #[test]
    fn test_negative_identifiers_accepted() {
        let params = RunParams::new(-1, -2, -3);
        assert_eq!(params.dir_name(), "output_rank_-1_gpu_-2_tile_-3");
        assert_eq!(params.file_name(), "hello_rank_-1.txt");
    }
}
