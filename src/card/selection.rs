use std::{fmt, str::FromStr};

use crate::BatchError;

/// A user choice: either a literal value or a request to draw one at random.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    Random,
    Fixed(T),
}

impl<T> Selection<T> {
    pub fn is_random(&self) -> bool {
        matches!(self, Selection::Random)
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Selection::Fixed(value)
    }
}

/// `"random"` and `"any"` select a random value, anything else is parsed as `T`.
impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = BatchError>,
{
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("random") || s.eq_ignore_ascii_case("any") {
            Ok(Selection::Random)
        } else {
            s.parse().map(Selection::Fixed)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Random => f.write_str("random"),
            Selection::Fixed(value) => value.fmt(f),
        }
    }
}

/// Literal security code chosen by the caller.
///
/// Only digits are accepted; the length is not checked against any brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvvCode(String);

impl CvvCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CvvCode {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BatchError::InvalidSelection {
                field: "cvv",
                value: s.to_string(),
            });
        }
        Ok(CvvCode(s.to_string()))
    }
}

impl fmt::Display for CvvCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::brand::Brand;

    #[test]
    fn sentinels_should_parse_as_random() {
        for input in ["random", "Random", "any", " ANY "] {
            let selection: Selection<Brand> = input.parse().unwrap();
            assert!(selection.is_random());
        }
    }

    #[test]
    fn literal_should_parse_as_fixed() {
        let brand: Selection<Brand> = "Discover".parse().unwrap();
        assert_eq!(brand, Selection::Fixed(Brand::Discover));

        let cvv: Selection<CvvCode> = "123".parse().unwrap();
        assert_eq!(cvv.to_string(), "123");
    }

    #[test]
    fn unknown_literal_should_propagate_parse_error() {
        let brand = "Bitcoin".parse::<Selection<Brand>>();
        assert!(matches!(brand, Err(BatchError::UnknownBrand(_))));

        let cvv = "12a".parse::<Selection<CvvCode>>();
        assert!(matches!(
            cvv,
            Err(BatchError::InvalidSelection { field: "cvv", .. })
        ));
    }
}
