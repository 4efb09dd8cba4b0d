// Probe domain: run parameters and the marker artifact they produce
pub mod marker;
pub mod params;

pub use marker::*;
pub use params::*;
