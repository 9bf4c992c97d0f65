pub mod station_operations;

pub use station_operations::*;
