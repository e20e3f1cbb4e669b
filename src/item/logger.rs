use std::fmt::Debug;

use log::info;

use crate::core::item::{ItemWriter, ItemWriterResult};

/// Logs every item at info level.
#[derive(Default)]
pub struct LoggerWriter {}

impl<T> ItemWriter<T> for LoggerWriter
where
    T: Debug,
{
    fn write(&self, items: &[T]) -> ItemWriterResult {
        items.iter().for_each(|item| info!("Record:{:?}", item));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerWriter;
    use crate::{card::brand::Brand, core::item::ItemWriter};

    #[test]
    fn logger_should_accept_any_debug_item() {
        let writer = LoggerWriter::default();
        assert!(writer.write(&[Brand::Visa, Brand::UnionPay]).is_ok());
    }
}
