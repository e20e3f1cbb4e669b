//! Prints a batch of test cards as pretty JSON.
//!
//! ```text
//! cargo run --example generate_cards -- [brand] [cvv] [month] [year] [quantity]
//! cargo run --example generate_cards -- "American Express" random 05 random 3
//! ```
//!
//! Every selector defaults to `random`, the quantity to 1. Set `RUST_LOG=debug`
//! to follow the generation.

use std::{env, io};

use anyhow::Result;
use log::info;
use testcard_batch::{
    card::{random::ThreadRandom, record::CardRecord, request::GenerationRequest},
    core::step::{StepBuilder, StepInstance},
    item::{
        card::{CardItemReaderBuilder, CardRow, CardRowProcessor},
        fake::{FakeNameSource, NameLocale},
        json::JsonItemWriterBuilder,
    },
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let selector = |index: usize, default: &'static str| {
        args.get(index).map(String::as_str).unwrap_or(default)
    };

    let request = GenerationRequest::parse(
        selector(0, "random"),
        selector(1, "random"),
        selector(2, "random"),
        selector(3, "random"),
        selector(4, "1"),
    )?;
    info!("Generating {} cards", request.quantity());

    let reader = CardItemReaderBuilder::new()
        .request(request)
        .build(ThreadRandom::new(), FakeNameSource::new(NameLocale::En))?;

    let processor = CardRowProcessor;

    let writer = JsonItemWriterBuilder::new()
        .pretty_formatter(true)
        .from_writer(io::stdout());

    let step: StepInstance<CardRecord, CardRow> = StepBuilder::new()
        .name("generate-cards".to_string())
        .reader(&reader)
        .processor(&processor)
        .writer(&writer)
        .chunk(6)
        .build()?;

    let execution = step.execute()?;
    info!(
        "Generated {} cards in {:?}",
        execution.write_count, execution.duration
    );

    Ok(())
}
