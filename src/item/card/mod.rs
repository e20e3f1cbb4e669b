/// Reader generating card records for a request.
pub mod card_reader;

/// Processor turning records into display rows.
pub mod row_processor;

pub use card_reader::{CardItemReader, CardItemReaderBuilder};
pub use row_processor::{CardRow, CardRowProcessor};
