use std::{fmt, str::FromStr};

use crate::BatchError;

use super::{random::RandomSource, selection::Selection};

/// First year of the random expiry window.
pub const DEFAULT_BASE_YEAR: u16 = 2024;

/// Number of consecutive years the random expiry window spans.
pub const DEFAULT_YEAR_WINDOW: u16 = 11;

/// Calendar month, always in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpMonth(u8);

impl ExpMonth {
    pub fn new(month: u8) -> Result<Self, BatchError> {
        if (1..=12).contains(&month) {
            Ok(ExpMonth(month))
        } else {
            Err(BatchError::InvalidSelection {
                field: "month",
                value: month.to_string(),
            })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl FromStr for ExpMonth {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let month = s.parse::<u8>().map_err(|_| BatchError::InvalidSelection {
            field: "month",
            value: s.to_string(),
        })?;
        ExpMonth::new(month)
    }
}

/// Two-digit, zero-padded.
impl fmt::Display for ExpMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Four-digit expiry year. Past years are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpYear(u16);

impl ExpYear {
    pub fn new(year: u16) -> Result<Self, BatchError> {
        if (1000..=9999).contains(&year) {
            Ok(ExpYear(year))
        } else {
            Err(BatchError::InvalidSelection {
                field: "year",
                value: year.to_string(),
            })
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl FromStr for ExpYear {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BatchError::InvalidSelection {
            field: "year",
            value: s.to_string(),
        };
        if s.len() != 4 {
            return Err(invalid());
        }
        let year = s.parse::<u16>().map_err(|_| invalid())?;
        ExpYear::new(year)
    }
}

impl fmt::Display for ExpYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolves expiry month and year selections to their display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirySynthesizer {
    base_year: u16,
    window: u16,
}

impl Default for ExpirySynthesizer {
    fn default() -> Self {
        Self {
            base_year: DEFAULT_BASE_YEAR,
            window: DEFAULT_YEAR_WINDOW,
        }
    }
}

impl ExpirySynthesizer {
    /// Random years are drawn from `base_year..base_year + window`.
    ///
    /// # Errors
    ///
    /// Fails with [`BatchError::Configuration`] for an empty window or one that
    /// reaches past year 9999.
    pub fn new(base_year: u16, window: u16) -> Result<Self, BatchError> {
        let last_year = u32::from(base_year) + u32::from(window);
        if window == 0 || base_year < 1000 || last_year > 10_000 {
            return Err(BatchError::Configuration(format!(
                "invalid expiry year window: {window} years from {base_year}"
            )));
        }
        Ok(Self { base_year, window })
    }

    pub fn base_year(&self) -> u16 {
        self.base_year
    }

    pub fn window(&self) -> u16 {
        self.window
    }

    pub fn generate_month<R>(&self, selection: &Selection<ExpMonth>, rng: &mut R) -> String
    where
        R: RandomSource + ?Sized,
    {
        let month = match selection {
            Selection::Fixed(month) => *month,
            Selection::Random => ExpMonth(rng.next_below(12) as u8 + 1),
        };
        month.to_string()
    }

    pub fn generate_year<R>(&self, selection: &Selection<ExpYear>, rng: &mut R) -> String
    where
        R: RandomSource + ?Sized,
    {
        let year = match selection {
            Selection::Fixed(year) => *year,
            Selection::Random => {
                ExpYear(self.base_year + rng.next_below(u32::from(self.window)) as u16)
            }
        };
        year.to_string()
    }
}
