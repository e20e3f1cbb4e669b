use log::{debug, error};

use crate::BatchError;

use super::{brand::Brand, luhn, random::RandomSource};

/// Attempt bound of the default rejection sampling strategy.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// How a checksum-valid number is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStrategy {
    /// Draw every digit after the leading one and retry the whole candidate
    /// until it passes the Luhn check. Roughly one candidate in ten is accepted.
    RejectionSampling { max_attempts: usize },
    /// Draw all digits but the last and compute the check digit.
    CheckDigit,
}

impl Default for NumberStrategy {
    fn default() -> Self {
        NumberStrategy::RejectionSampling {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Produces primary account numbers that start with the brand's leading digit,
/// have the brand's length and pass the Luhn check.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberSynthesizer {
    strategy: NumberStrategy,
}

impl NumberSynthesizer {
    pub fn new(strategy: NumberStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> NumberStrategy {
        self.strategy
    }

    /// Generates a number for `brand`.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Generation`] when rejection sampling exhausts its
    /// attempt bound without finding a valid candidate.
    pub fn generate<R>(&self, brand: Brand, rng: &mut R) -> Result<String, BatchError>
    where
        R: RandomSource + ?Sized,
    {
        match self.strategy {
            NumberStrategy::RejectionSampling { max_attempts } => {
                for attempt in 1..=max_attempts {
                    let candidate = candidate(brand, brand.spec().total_digits - 1, rng);
                    if luhn::is_valid(&candidate) {
                        debug!("{} number found after {} attempts", brand, attempt);
                        return Ok(candidate);
                    }
                }
                error!(
                    "No valid {} number after {} attempts, giving up",
                    brand, max_attempts
                );
                Err(BatchError::Generation {
                    brand,
                    attempts: max_attempts,
                })
            }
            NumberStrategy::CheckDigit => {
                let mut number = candidate(brand, brand.spec().total_digits - 2, rng);
                let digit = luhn::check_digit(&number).ok_or_else(|| BatchError::Generation {
                    brand,
                    attempts: 1,
                })?;
                number.push(char::from(b'0' + digit));
                Ok(number)
            }
        }
    }
}

/// Leading digit followed by `random_digits` uniform digits.
fn candidate<R>(brand: Brand, random_digits: usize, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let mut number = String::with_capacity(random_digits + 1);
    number.push(char::from(b'0' + brand.spec().leading_digit));
    for _ in 0..random_digits {
        number.push(char::from(b'0' + rng.next_digit()));
    }
    number
}
