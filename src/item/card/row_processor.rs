use serde::{Deserialize, Serialize};

use crate::{
    card::{brand::Brand, record::CardRecord},
    core::item::{ItemProcessor, ItemProcessorResult},
};

/// Card as displayed to the user: each field can be copied as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRow {
    pub brand: Brand,
    pub number: String,
    pub cvv: String,
    /// `MM/YYYY`
    pub expiry: String,
    pub holder_name: String,
}

impl From<&CardRecord> for CardRow {
    fn from(record: &CardRecord) -> Self {
        CardRow {
            brand: record.brand,
            number: record.number.clone(),
            cvv: record.cvv.clone(),
            expiry: record.expiry(),
            holder_name: record.holder_name.clone(),
        }
    }
}

/// Flattens a [`CardRecord`] into a [`CardRow`].
#[derive(Default)]
pub struct CardRowProcessor;

impl ItemProcessor<CardRecord, CardRow> for CardRowProcessor {
    fn process(&self, item: &CardRecord) -> ItemProcessorResult<CardRow> {
        Ok(CardRow::from(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processor_should_format_expiry() {
        let record = CardRecord {
            brand: Brand::Discover,
            number: "6011111111111117".to_string(),
            cvv: "456".to_string(),
            exp_month: "11".to_string(),
            exp_year: "2031".to_string(),
            holder_name: "Maria Silva".to_string(),
        };

        let row = CardRowProcessor.process(&record).unwrap();

        assert_eq!(row.brand, Brand::Discover);
        assert_eq!(row.number, record.number);
        assert_eq!(row.cvv, "456");
        assert_eq!(row.expiry, "11/2031");
        assert_eq!(row.holder_name, "Maria Silva");
    }
}
