pub mod proximity;
pub mod validation;

pub use validation::StationValidator;
