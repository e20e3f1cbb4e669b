//! Card generation engine.
//!
//! The engine turns a [`request::GenerationRequest`] into [`record::CardRecord`]s:
//!
//! - [`brand`]: the fixed table of supported networks and their number formats
//! - [`luhn`]: checksum validation
//! - [`number`], [`cvv`], [`expiry`]: field synthesizers
//! - [`generator`]: assembles complete records, one request at a time
//!
//! Randomness and holder names are injected through [`random::RandomSource`] and
//! [`name::NameSource`], so every component can run against a seeded or scripted
//! source.
//!
//! # Examples
//!
//! ```
//! use testcard_batch::card::{
//!     generator::CardGenerator, luhn, random::SeededRandom, request::GenerationRequest,
//! };
//!
//! let request = GenerationRequest::parse("Visa", "random", "random", "random", "3").unwrap();
//! let mut names = || "Jane Doe".to_string();
//!
//! let cards = CardGenerator::default()
//!     .generate_batch(&request, &mut SeededRandom::new(1), &mut names)
//!     .unwrap();
//!
//! assert_eq!(cards.len(), 3);
//! assert!(cards.iter().all(|card| luhn::is_valid(&card.number)));
//! ```

pub mod brand;

pub mod cvv;

pub mod expiry;

pub mod generator;

pub mod luhn;

pub mod name;

pub mod number;

pub mod random;

pub mod record;

pub mod request;

pub mod selection;
