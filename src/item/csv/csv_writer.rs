use std::{
    cell::RefCell,
    fs::File,
    io::{self, Write},
    path::Path,
};

use csv::{Writer, WriterBuilder};
use serde::Serialize;

use crate::{
    BatchError,
    core::item::{ItemWriter, ItemWriterResult},
};

pub struct CsvItemWriter<T: Write> {
    wrapper: RefCell<Writer<T>>,
}

impl<T: Write, O: Serialize> ItemWriter<O> for CsvItemWriter<T> {
    fn write(&self, items: &[O]) -> ItemWriterResult {
        let mut wrapper = self.wrapper.borrow_mut();
        for item in items {
            wrapper
                .serialize(item)
                .map_err(|error| BatchError::ItemWriter(error.to_string()))?;
        }
        Ok(())
    }

    /// Flush the contents of the internal buffer to the underlying writer.
    ///
    /// Note that this also flushes the underlying writer.
    fn flush(&self) -> ItemWriterResult {
        self.wrapper
            .borrow_mut()
            .flush()
            .map_err(|error| BatchError::ItemWriter(error.to_string()))
    }
}

impl<T: Write> CsvItemWriter<T> {
    pub fn into_inner(self) -> Result<T, BatchError> {
        self.wrapper
            .into_inner()
            .into_inner()
            .map_err(|error| BatchError::ItemWriter(error.to_string()))
    }
}

pub struct CsvItemWriterBuilder {
    delimiter: u8,
    has_headers: bool,
}

impl Default for CsvItemWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvItemWriterBuilder {
    pub fn new() -> CsvItemWriterBuilder {
        CsvItemWriterBuilder {
            delimiter: b',',
            has_headers: false,
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> CsvItemWriterBuilder {
        self.delimiter = delimiter;
        self
    }

    pub fn has_headers(mut self, yes: bool) -> CsvItemWriterBuilder {
        self.has_headers = yes;
        self
    }

    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<CsvItemWriter<File>, BatchError> {
        let wtr = WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .from_path(path)
            .map_err(|error| BatchError::ItemWriter(error.to_string()))?;

        Ok(CsvItemWriter {
            wrapper: RefCell::new(wtr),
        })
    }

    /// Writes rows to any `io::Write`. When headers are enabled, the field names
    /// of the first serialized item become the header row.
    ///
    /// ```
    /// # use std::error::Error;
    /// # use testcard_batch::{item::csv::CsvItemWriterBuilder, core::item::ItemWriter};
    /// #[derive(serde::Serialize)]
    /// struct Row<'a> {
    ///     brand: &'a str,
    ///     number: &'a str,
    /// }
    ///
    /// # fn main() { example().unwrap(); }
    /// fn example() -> Result<(), Box<dyn Error>> {
    ///     let wtr = CsvItemWriterBuilder::new()
    ///         .has_headers(true)
    ///         .from_writer(vec![]);
    ///
    ///     wtr.write(&[
    ///         Row { brand: "Visa", number: "4532015112830366" },
    ///         Row { brand: "JCB", number: "3530111333300000" },
    ///     ])?;
    ///
    ///     let data = String::from_utf8(wtr.into_inner()?)?;
    ///     assert_eq!(data, "\
    /// brand,number
    /// Visa,4532015112830366
    /// JCB,3530111333300000
    /// ");
    ///     Ok(())
    /// }
    /// ```
    pub fn from_writer<W: io::Write>(self, wtr: W) -> CsvItemWriter<W> {
        let wtr = WriterBuilder::new()
            .flexible(false)
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .from_writer(wtr);

        CsvItemWriter {
            wrapper: RefCell::new(wtr),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env::temp_dir, error::Error, fs::read_to_string};

    use crate::{
        card::brand::Brand,
        core::item::ItemWriter,
        item::{card::CardRow, csv::csv_writer::CsvItemWriterBuilder},
    };

    fn row() -> CardRow {
        CardRow {
            brand: Brand::AmericanExpress,
            number: "378282246310005".to_string(),
            cvv: "1234".to_string(),
            expiry: "09/2028".to_string(),
            holder_name: "John Smith".to_string(),
        }
    }

    #[test]
    fn rows_should_be_written_with_headers() -> Result<(), Box<dyn Error>> {
        let wtr = CsvItemWriterBuilder::new()
            .has_headers(true)
            .from_writer(vec![]);

        wtr.write(&[row()])?;

        let data = String::from_utf8(wtr.into_inner()?)?;
        assert_eq!(
            data,
            "brand,number,cvv,expiry,holder_name
American Express,378282246310005,1234,09/2028,John Smith
"
        );
        Ok(())
    }

    #[test]
    fn custom_delimiter_should_be_used() -> Result<(), Box<dyn Error>> {
        let wtr = CsvItemWriterBuilder::new().delimiter(b';').from_writer(vec![]);

        wtr.write(&[row()])?;

        let data = String::from_utf8(wtr.into_inner()?)?;
        assert_eq!(
            data,
            "American Express;378282246310005;1234;09/2028;John Smith\n"
        );
        Ok(())
    }

    #[test]
    fn rows_should_be_written_to_file() -> Result<(), Box<dyn Error>> {
        let path = temp_dir().join("testcard_batch_rows.csv");
        let wtr = CsvItemWriterBuilder::new().from_path(&path)?;

        wtr.write(&[row(), row()])?;
        ItemWriter::<CardRow>::flush(&wtr)?;

        let content = read_to_string(&path)?;
        assert_eq!(content.lines().count(), 2);
        Ok(())
    }
}
