use crate::error::BatchError;

/// Result of a read: `Ok(None)` once the reader is exhausted.
pub type ItemReaderResult<I> = Result<Option<I>, BatchError>;

pub type ItemProcessorResult<O> = Result<O, BatchError>;

pub type ItemWriterResult = Result<(), BatchError>;

/// Produces the items of a step, one at a time.
///
/// An `Err` means the current item failed; the reader must still advance so
/// that the step can skip it and keep reading.
pub trait ItemReader<I> {
    fn read(&self) -> ItemReaderResult<I>;
}

/// Transforms a read item into the item handed to the writer.
pub trait ItemProcessor<I, O> {
    fn process(&self, item: &I) -> ItemProcessorResult<O>;
}

/// Receives the processed items of a step, one chunk at a time.
pub trait ItemWriter<O> {
    fn write(&self, items: &[O]) -> ItemWriterResult;

    fn flush(&self) -> ItemWriterResult {
        Ok(())
    }

    fn open(&self) -> ItemWriterResult {
        Ok(())
    }

    fn close(&self) -> ItemWriterResult {
        Ok(())
    }
}

/// Hands every item to the writer unchanged.
#[derive(Default)]
pub struct PassThroughProcessor;

impl<T: Clone> ItemProcessor<T, T> for PassThroughProcessor {
    fn process(&self, item: &T) -> ItemProcessorResult<T> {
        Ok(item.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemProcessor, PassThroughProcessor};
    use crate::card::brand::Brand;

    #[test]
    fn pass_through_should_return_same_item() {
        let processor = PassThroughProcessor;
        let result = processor.process(&Brand::Discover).unwrap();
        assert_eq!(result, Brand::Discover);
    }
}
