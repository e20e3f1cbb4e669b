/// This module provides the card reader and the row processor.
pub mod card;

#[cfg(feature = "logger")]
/// This module provides a logger item writer implementation.
pub mod logger;

#[cfg(feature = "csv")]
/// This module provides a CSV item writer implementation.
pub mod csv;

#[cfg(feature = "fake")]
/// This module provides a holder name source backed by the `fake` crate.
pub mod fake;

#[cfg(feature = "json")]
/// This module provides a JSON item writer implementation.
pub mod json;
