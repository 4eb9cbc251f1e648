//! Investment parameters: the immutable input record and its batch loader

mod data;
pub mod loader;

pub use data::{InvestmentParameters, ParameterError};
pub use loader::{load_parameters, load_parameters_from_reader};
