//! JSON output.
//!
//! [`JsonItemWriter`] serializes items with `serde_json` and writes them as the
//! elements of one JSON array: `open` writes the opening bracket, `write` adds
//! each item with a separator, and `close` writes the closing bracket and
//! flushes. Output can be compact or pretty-printed.
//!
//! # Examples
//!
//! ```
//! use testcard_batch::card::{brand::Brand, record::CardRecord};
//! use testcard_batch::core::item::ItemWriter;
//! use testcard_batch::item::json::JsonItemWriterBuilder;
//!
//! let card = CardRecord {
//!     brand: Brand::Visa,
//!     number: "4532015112830366".to_string(),
//!     cvv: "123".to_string(),
//!     exp_month: "05".to_string(),
//!     exp_year: "2027".to_string(),
//!     holder_name: "Jane Doe".to_string(),
//! };
//!
//! let writer = JsonItemWriterBuilder::new().from_writer(Vec::new());
//! let writer_ref = &writer as &dyn ItemWriter<CardRecord>;
//! writer_ref.open().unwrap();
//! writer_ref.write(&[card]).unwrap();
//! writer_ref.close().unwrap();
//!
//! let json = String::from_utf8(writer.into_inner()).unwrap();
//! assert!(json.starts_with("[{\"brand\":\"Visa\""));
//! ```

/// The `json_writer` module contains the `JsonItemWriter` struct, which writes items to any `io::Write`.
pub mod json_writer;

pub use json_writer::{JsonItemWriter, JsonItemWriterBuilder};
