pub mod cli;
pub mod probe;
pub mod utils;

pub use cli::*;
pub use probe::*;
pub use utils::*;
