use thiserror::Error;

use crate::card::brand::Brand;

#[derive(Error, Debug)]
/// Batch error
pub enum BatchError {
    #[error("ItemWriter from: {0}")]
    ItemWriter(String),

    #[error("ItemReader from: {0}")]
    ItemReader(String),

    #[error("ItemProcessor from: {0}")]
    ItemProcessor(String),

    #[error("Step {0} failed")]
    Step(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The brand name is not one of the supported card networks.
    #[error("Unknown card brand: {0}")]
    UnknownBrand(String),

    /// A selector value that cannot be used for generation.
    #[error("Invalid {field} selection: {value}")]
    InvalidSelection { field: &'static str, value: String },

    /// No checksum-valid number was found within the attempt bound.
    #[error("No checksum-valid {brand} number after {attempts} attempts")]
    Generation { brand: Brand, attempts: usize },
}
