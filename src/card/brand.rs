use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::BatchError;

/// Number format rules of a card brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandSpec {
    /// Digit every number of the brand starts with.
    pub leading_digit: u8,
    /// Length of the primary account number.
    pub total_digits: usize,
    /// Length of the security code.
    pub cvv_digits: usize,
}

/// Supported card networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Visa,
    Mastercard,
    #[serde(rename = "American Express")]
    AmericanExpress,
    Discover,
    #[serde(rename = "JCB")]
    Jcb,
    #[serde(rename = "Diners Club")]
    DinersClub,
    UnionPay,
}

impl Brand {
    /// Every supported brand, in menu order.
    pub const ALL: [Brand; 7] = [
        Brand::Visa,
        Brand::Mastercard,
        Brand::AmericanExpress,
        Brand::Discover,
        Brand::Jcb,
        Brand::DinersClub,
        Brand::UnionPay,
    ];

    pub const fn spec(self) -> BrandSpec {
        let (leading_digit, total_digits, cvv_digits) = match self {
            Brand::Visa => (4, 16, 3),
            Brand::Mastercard => (5, 16, 3),
            Brand::AmericanExpress => (3, 15, 4),
            Brand::Discover => (6, 16, 3),
            Brand::Jcb => (3, 16, 3),
            Brand::DinersClub => (3, 16, 3),
            Brand::UnionPay => (6, 16, 3),
        };
        BrandSpec {
            leading_digit,
            total_digits,
            cvv_digits,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Brand::Visa => "Visa",
            Brand::Mastercard => "Mastercard",
            Brand::AmericanExpress => "American Express",
            Brand::Discover => "Discover",
            Brand::Jcb => "JCB",
            Brand::DinersClub => "Diners Club",
            Brand::UnionPay => "UnionPay",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Brand {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
    }
}

/// Finds a brand by its display name, ignoring ASCII case and surrounding spaces.
///
/// # Errors
///
/// Returns [`BatchError::UnknownBrand`] for names outside the supported set.
///
/// # Examples
///
/// ```
/// use testcard_batch::card::brand::{lookup, Brand};
///
/// assert_eq!(lookup("American Express").unwrap(), Brand::AmericanExpress);
/// assert!(lookup("Bitcoin").is_err());
/// ```
pub fn lookup(name: &str) -> Result<Brand, BatchError> {
    let name = name.trim();
    Brand::ALL
        .into_iter()
        .find(|brand| brand.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| BatchError::UnknownBrand(name.to_string()))
}
