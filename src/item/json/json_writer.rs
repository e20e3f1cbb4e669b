use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    BatchError,
    core::item::{ItemWriter, ItemWriterResult},
};

/// Writes items as the elements of a single JSON array.
pub struct JsonItemWriter<W: Write> {
    stream: RefCell<W>,
    use_pretty_formatter: bool,
    is_first_item: Cell<bool>,
}

impl<W: Write> JsonItemWriter<W> {
    fn write_bytes(&self, bytes: &[u8]) -> ItemWriterResult {
        self.stream
            .borrow_mut()
            .write_all(bytes)
            .map_err(|error| BatchError::ItemWriter(error.to_string()))
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.stream.into_inner()
    }
}

impl<W: Write, O: Serialize> ItemWriter<O> for JsonItemWriter<W> {
    fn write(&self, items: &[O]) -> ItemWriterResult {
        for item in items {
            if !self.is_first_item.get() {
                let separator: &[u8] = if self.use_pretty_formatter { b",\n" } else { b"," };
                self.write_bytes(separator)?;
            }
            self.is_first_item.set(false);

            let json = if self.use_pretty_formatter {
                serde_json::to_string_pretty(item)
            } else {
                serde_json::to_string(item)
            }
            .map_err(|error| BatchError::ItemWriter(error.to_string()))?;

            self.write_bytes(json.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&self) -> ItemWriterResult {
        self.stream
            .borrow_mut()
            .flush()
            .map_err(|error| BatchError::ItemWriter(error.to_string()))
    }

    fn open(&self) -> ItemWriterResult {
        self.is_first_item.set(true);
        if self.use_pretty_formatter {
            self.write_bytes(b"[\n")
        } else {
            self.write_bytes(b"[")
        }
    }

    fn close(&self) -> ItemWriterResult {
        if self.use_pretty_formatter {
            self.write_bytes(b"\n]\n")?;
        } else {
            self.write_bytes(b"]")?;
        }
        ItemWriter::<O>::flush(self)
    }
}

#[derive(Default)]
pub struct JsonItemWriterBuilder {
    pretty_formatter: bool,
}

impl JsonItemWriterBuilder {
    pub fn new() -> JsonItemWriterBuilder {
        JsonItemWriterBuilder {
            pretty_formatter: false,
        }
    }

    pub fn pretty_formatter(mut self, yes: bool) -> JsonItemWriterBuilder {
        self.pretty_formatter = yes;
        self
    }

    pub fn from_writer<W: Write>(self, wtr: W) -> JsonItemWriter<W> {
        JsonItemWriter {
            stream: RefCell::new(wtr),
            use_pretty_formatter: self.pretty_formatter,
            is_first_item: Cell::new(true),
        }
    }

    /// Creates (or truncates) the file at `path`.
    pub fn from_path<P: AsRef<Path>>(
        self,
        path: P,
    ) -> Result<JsonItemWriter<BufWriter<File>>, BatchError> {
        let file =
            File::create(path).map_err(|error| BatchError::ItemWriter(error.to_string()))?;
        Ok(self.from_writer(BufWriter::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use std::{env::temp_dir, fs::read_to_string};

    use super::JsonItemWriterBuilder;
    use crate::{
        BatchError,
        card::{brand::Brand, record::CardRecord},
        core::item::ItemWriter,
    };

    fn card(number: &str) -> CardRecord {
        CardRecord {
            brand: Brand::Jcb,
            number: number.to_string(),
            cvv: "321".to_string(),
            exp_month: "02".to_string(),
            exp_year: "2026".to_string(),
            holder_name: "Taro Yamada".to_string(),
        }
    }

    #[test]
    fn writer_should_produce_json_array() -> Result<(), BatchError> {
        let writer = JsonItemWriterBuilder::new().from_writer(Vec::new());

        ItemWriter::<CardRecord>::open(&writer)?;
        writer.write(&[card("3000000000000004")])?;
        writer.write(&[card("3530111333300000")])?;
        ItemWriter::<CardRecord>::close(&writer)?;

        let cards: Vec<CardRecord> = serde_json::from_slice(&writer.into_inner()).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].number, "3530111333300000");
        assert_eq!(cards[0].brand, Brand::Jcb);
        Ok(())
    }

    #[test]
    fn empty_batch_should_produce_empty_array() -> Result<(), BatchError> {
        let writer = JsonItemWriterBuilder::new().from_writer(Vec::new());

        ItemWriter::<CardRecord>::open(&writer)?;
        ItemWriter::<CardRecord>::close(&writer)?;

        assert_eq!(writer.into_inner(), b"[]");
        Ok(())
    }

    #[test]
    fn pretty_file_should_be_readable() -> Result<(), BatchError> {
        let path = temp_dir().join("testcard_batch_pretty_cards.json");
        let writer = JsonItemWriterBuilder::new()
            .pretty_formatter(true)
            .from_path(&path)?;

        ItemWriter::<CardRecord>::open(&writer)?;
        writer.write(&[card("3000000000000004"), card("3530111333300000")])?;
        ItemWriter::<CardRecord>::close(&writer)?;
        drop(writer);

        let content = read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n"));
        assert!(content.contains("\"holder_name\": \"Taro Yamada\""));

        let cards: Vec<CardRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(cards.len(), 2);
        Ok(())
    }
}
