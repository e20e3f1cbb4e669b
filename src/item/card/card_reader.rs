use std::cell::{Cell, RefCell};

use log::debug;

use crate::{
    BatchError,
    card::{
        generator::CardGenerator, name::NameSource, random::RandomSource, record::CardRecord,
        request::GenerationRequest,
    },
    core::item::{ItemReader, ItemReaderResult},
};

/// Reader producing the cards of a [`GenerationRequest`], one per `read`.
///
/// A record that cannot be generated is returned as an error and counted as
/// consumed, so a step with a skip limit moves on to the next record.
pub struct CardItemReader<R, N> {
    generator: CardGenerator,
    request: GenerationRequest,
    rng: RefCell<R>,
    names: RefCell<N>,
    remaining: Cell<usize>,
}

impl<R, N> CardItemReader<R, N> {
    /// Number of records left to read.
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }
}

impl<R: RandomSource, N: NameSource> ItemReader<CardRecord> for CardItemReader<R, N> {
    fn read(&self) -> ItemReaderResult<CardRecord> {
        if self.remaining.get() == 0 {
            return Ok(None);
        }
        self.remaining.set(self.remaining.get() - 1);

        let record = self.generator.generate_record(
            &self.request,
            &mut *self.rng.borrow_mut(),
            &mut *self.names.borrow_mut(),
        )?;
        debug!("{} cards left to generate", self.remaining.get());
        Ok(Some(record))
    }
}

#[derive(Default)]
pub struct CardItemReaderBuilder {
    generator: CardGenerator,
    request: Option<GenerationRequest>,
}

impl CardItemReaderBuilder {
    pub fn new() -> CardItemReaderBuilder {
        CardItemReaderBuilder {
            generator: CardGenerator::default(),
            request: None,
        }
    }

    pub fn generator(mut self, generator: CardGenerator) -> CardItemReaderBuilder {
        self.generator = generator;
        self
    }

    pub fn request(mut self, request: GenerationRequest) -> CardItemReaderBuilder {
        self.request = Some(request);
        self
    }

    pub fn build<R, N>(self, rng: R, names: N) -> Result<CardItemReader<R, N>, BatchError>
    where
        R: RandomSource,
        N: NameSource,
    {
        let request = self.request.ok_or_else(|| {
            BatchError::Configuration("card reader has no generation request".to_string())
        })?;

        Ok(CardItemReader {
            generator: self.generator,
            remaining: Cell::new(request.quantity()),
            request,
            rng: RefCell::new(rng),
            names: RefCell::new(names),
        })
    }
}
