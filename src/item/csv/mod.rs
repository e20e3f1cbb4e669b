/// CSV output of tabular data.
///
/// [`CsvItemWriter`] serializes items with serde into CSV rows, with a
/// configurable delimiter and optional header row taken from the field names.
/// Items must serialize to a flat record: use
/// [`CardRow`](crate::item::card::CardRow) rather than nested structures.
///
/// The writer owns its destination; call
/// [`into_inner`](CsvItemWriter::into_inner) to get an in-memory buffer back.
pub mod csv_writer;

pub use csv_writer::{CsvItemWriter, CsvItemWriterBuilder};
