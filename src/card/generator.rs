use log::{debug, warn};

use crate::BatchError;

use super::{
    brand::Brand,
    cvv::generate_cvv,
    expiry::{DEFAULT_BASE_YEAR, DEFAULT_YEAR_WINDOW, ExpirySynthesizer},
    name::NameSource,
    number::{NumberStrategy, NumberSynthesizer},
    random::RandomSource,
    record::CardRecord,
    request::GenerationRequest,
    selection::Selection,
};

/// What to do with a literal CVV whose length differs from the brand's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CvvPolicy {
    /// Keep the literal as selected and log a warning.
    #[default]
    PassThrough,
    /// Reject the record with [`BatchError::InvalidSelection`].
    EnforceBrandLength,
}

/// Assembles complete card records from a [`GenerationRequest`].
///
/// Records are independent of each other: every record resolves its own brand,
/// CVV, expiry, holder name and number. Duplicate numbers within a batch are
/// possible.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardGenerator {
    numbers: NumberSynthesizer,
    expiry: ExpirySynthesizer,
    cvv_policy: CvvPolicy,
}

impl CardGenerator {
    /// Generates a single record.
    pub fn generate_record<R, N>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
        names: &mut N,
    ) -> Result<CardRecord, BatchError>
    where
        R: RandomSource + ?Sized,
        N: NameSource + ?Sized,
    {
        let brand = match request.brand() {
            Selection::Fixed(brand) => *brand,
            Selection::Random => Brand::ALL[rng.next_below(Brand::ALL.len() as u32) as usize],
        };

        let cvv = match request.cvv() {
            Selection::Random => generate_cvv(brand, rng),
            Selection::Fixed(code) => self.literal_cvv(brand, code.as_str())?,
        };

        let exp_month = self.expiry.generate_month(request.month(), rng);
        let exp_year = self.expiry.generate_year(request.year(), rng);
        let holder_name = names.next_name();
        let number = self.numbers.generate(brand, rng)?;

        let record = CardRecord {
            brand,
            number,
            cvv,
            exp_month,
            exp_year,
            holder_name,
        };
        debug!("Card: {}", record);
        Ok(record)
    }

    /// Generates exactly `request.quantity()` records.
    ///
    /// # Errors
    ///
    /// The batch is aborted on the first record that fails; no partial batch is
    /// returned. Use [`CardItemReader`](crate::item::card::CardItemReader) in a
    /// step with a skip limit to skip failed records instead.
    pub fn generate_batch<R, N>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
        names: &mut N,
    ) -> Result<Vec<CardRecord>, BatchError>
    where
        R: RandomSource + ?Sized,
        N: NameSource + ?Sized,
    {
        (0..request.quantity())
            .map(|_| self.generate_record(request, rng, names))
            .collect()
    }

    fn literal_cvv(&self, brand: Brand, code: &str) -> Result<String, BatchError> {
        let expected = brand.spec().cvv_digits;
        if code.len() != expected {
            match self.cvv_policy {
                CvvPolicy::PassThrough => warn!(
                    "CVV {} has {} digits, {} uses {}",
                    code,
                    code.len(),
                    brand,
                    expected
                ),
                CvvPolicy::EnforceBrandLength => {
                    return Err(BatchError::InvalidSelection {
                        field: "cvv",
                        value: code.to_string(),
                    });
                }
            }
        }
        Ok(code.to_string())
    }
}

/// Builder for [`CardGenerator`].
#[derive(Debug, Clone)]
pub struct CardGeneratorBuilder {
    number_strategy: NumberStrategy,
    base_year: u16,
    year_window: u16,
    cvv_policy: CvvPolicy,
}

impl Default for CardGeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CardGeneratorBuilder {
    pub fn new() -> CardGeneratorBuilder {
        CardGeneratorBuilder {
            number_strategy: NumberStrategy::default(),
            base_year: DEFAULT_BASE_YEAR,
            year_window: DEFAULT_YEAR_WINDOW,
            cvv_policy: CvvPolicy::default(),
        }
    }

    pub fn number_strategy(mut self, strategy: NumberStrategy) -> CardGeneratorBuilder {
        self.number_strategy = strategy;
        self
    }

    /// Random expiry years are drawn from `base_year..base_year + window`.
    pub fn year_window(mut self, base_year: u16, window: u16) -> CardGeneratorBuilder {
        self.base_year = base_year;
        self.year_window = window;
        self
    }

    pub fn cvv_policy(mut self, policy: CvvPolicy) -> CardGeneratorBuilder {
        self.cvv_policy = policy;
        self
    }

    pub fn build(self) -> Result<CardGenerator, BatchError> {
        Ok(CardGenerator {
            numbers: NumberSynthesizer::new(self.number_strategy),
            expiry: ExpirySynthesizer::new(self.base_year, self.year_window)?,
            cvv_policy: self.cvv_policy,
        })
    }
}
