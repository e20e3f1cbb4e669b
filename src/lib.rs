#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Test cards in batch

 Generates synthetic payment card records (brand, primary account number, CVV,
 expiry, holder name) for software testing and demonstration. Every number starts
 with its brand's leading digit, has the brand's length and passes the Luhn
 checksum. The cards are not tied to any issuer and must never be used for real
 transactions.

 ## Core Concepts

- **Brand:** one of Visa, Mastercard, American Express, Discover, JCB, Diners Club
  and UnionPay, each with a fixed leading digit, number length and CVV length.
- **GenerationRequest:** the user's selections for one batch: brand, CVV, expiry
  month and year (each a literal or random) and the number of cards.
- **CardGenerator:** turns a request into card records, drawing randomness and
  holder names from injected sources.
- **Step:** chunk-oriented pipeline wiring an `ItemReader`, an `ItemProcessor` and
  an `ItemWriter`, with a skip limit for records that fail to generate.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| fake          | Enables a holder name source backed by the `fake` crate (default) |
| json          | Enables a JSON `ItemWriter` (default)                         |
| csv           | Enables a CSV `ItemWriter`                                    |
| logger        | Enables a logger `ItemWriter`, useful for debugging purposes  |
| full          | Enables all available features                                |

 ## Getting Started

```rust
# use testcard_batch::{
#     card::{random::SeededRandom, request::GenerationRequest},
#     core::step::{StepBuilder, StepInstance, StepStatus},
#     error::BatchError,
#     item::card::{CardItemReaderBuilder, CardRow, CardRowProcessor},
#     item::json::JsonItemWriterBuilder,
#     card::record::CardRecord,
# };
fn main() -> Result<(), BatchError> {
    let request = GenerationRequest::parse("Visa", "random", "random", "random", "3")?;

    let reader = CardItemReaderBuilder::new()
        .request(request)
        .build(SeededRandom::new(42), || "Jane Doe".to_string())?;

    let processor = CardRowProcessor;

    let writer = JsonItemWriterBuilder::new()
        .pretty_formatter(true)
        .from_writer(Vec::new());

    let step: StepInstance<CardRecord, CardRow> = StepBuilder::new()
        .reader(&reader)
        .processor(&processor)
        .writer(&writer)
        .chunk(2)
        .build()?;

    let execution = step.execute()?;

    assert_eq!(execution.write_count, 3);
    assert!(step.get_status() == StepStatus::Success);

    Ok(())
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Card generation engine
pub mod card;

/// Core module for batch operations
pub mod core;

/// Error types for batch operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Set of item readers / processors / writers
pub mod item;
