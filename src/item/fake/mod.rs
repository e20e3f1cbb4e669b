/// Holder names generated with the `fake` crate.
pub mod name_source;

pub use name_source::{FakeNameSource, NameLocale};
