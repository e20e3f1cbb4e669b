use std::fmt;

use serde::{Deserialize, Serialize};

use super::brand::Brand;

/// One generated card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub brand: Brand,
    pub number: String,
    pub cvv: String,
    pub exp_month: String,
    pub exp_year: String,
    pub holder_name: String,
}

impl CardRecord {
    /// Expiry as printed on the card: `MM/YYYY`.
    pub fn expiry(&self) -> String {
        format!("{}/{}", self.exp_month, self.exp_year)
    }
}

impl fmt::Display for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "brand:{}, number:{}, cvv:{}, expiry:{}, holder_name:{}",
            self.brand,
            self.number,
            self.cvv,
            self.expiry(),
            self.holder_name
        )
    }
}
