use crate::BatchError;

use super::{
    brand::Brand,
    expiry::{ExpMonth, ExpYear},
    selection::{CvvCode, Selection},
};

/// Parameters of one batch of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    brand: Selection<Brand>,
    cvv: Selection<CvvCode>,
    month: Selection<ExpMonth>,
    year: Selection<ExpYear>,
    quantity: usize,
}

impl GenerationRequest {
    /// Builds a request from the five raw selector values of an input form.
    ///
    /// Each selector accepts a literal or `"random"` (`"any"` is accepted as a
    /// synonym).
    ///
    /// # Examples
    ///
    /// ```
    /// use testcard_batch::card::request::GenerationRequest;
    ///
    /// let request = GenerationRequest::parse("Visa", "random", "random", "2027", "3").unwrap();
    /// assert_eq!(request.quantity(), 3);
    /// ```
    pub fn parse(
        brand: &str,
        cvv: &str,
        month: &str,
        year: &str,
        quantity: &str,
    ) -> Result<Self, BatchError> {
        let quantity = quantity
            .trim()
            .parse::<usize>()
            .map_err(|_| BatchError::InvalidSelection {
                field: "quantity",
                value: quantity.to_string(),
            })?;

        GenerationRequestBuilder::new()
            .brand(brand.parse()?)
            .cvv(cvv.parse()?)
            .month(month.parse()?)
            .year(year.parse()?)
            .quantity(quantity)
            .build()
    }

    pub fn brand(&self) -> &Selection<Brand> {
        &self.brand
    }

    pub fn cvv(&self) -> &Selection<CvvCode> {
        &self.cvv
    }

    pub fn month(&self) -> &Selection<ExpMonth> {
        &self.month
    }

    pub fn year(&self) -> &Selection<ExpYear> {
        &self.year
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }
}

/// Builder for [`GenerationRequest`]. Every selector defaults to random and the
/// quantity to one card.
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    brand: Selection<Brand>,
    cvv: Selection<CvvCode>,
    month: Selection<ExpMonth>,
    year: Selection<ExpYear>,
    quantity: usize,
}

impl Default for GenerationRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationRequestBuilder {
    pub fn new() -> GenerationRequestBuilder {
        GenerationRequestBuilder {
            brand: Selection::Random,
            cvv: Selection::Random,
            month: Selection::Random,
            year: Selection::Random,
            quantity: 1,
        }
    }

    pub fn brand(mut self, brand: Selection<Brand>) -> GenerationRequestBuilder {
        self.brand = brand;
        self
    }

    pub fn cvv(mut self, cvv: Selection<CvvCode>) -> GenerationRequestBuilder {
        self.cvv = cvv;
        self
    }

    pub fn month(mut self, month: Selection<ExpMonth>) -> GenerationRequestBuilder {
        self.month = month;
        self
    }

    pub fn year(mut self, year: Selection<ExpYear>) -> GenerationRequestBuilder {
        self.year = year;
        self
    }

    pub fn quantity(mut self, quantity: usize) -> GenerationRequestBuilder {
        self.quantity = quantity;
        self
    }

    /// # Errors
    ///
    /// A quantity of zero is rejected with [`BatchError::InvalidSelection`].
    pub fn build(self) -> Result<GenerationRequest, BatchError> {
        if self.quantity == 0 {
            return Err(BatchError::InvalidSelection {
                field: "quantity",
                value: self.quantity.to_string(),
            });
        }

        Ok(GenerationRequest {
            brand: self.brand,
            cvv: self.cvv,
            month: self.month,
            year: self.year,
            quantity: self.quantity,
        })
    }
}
