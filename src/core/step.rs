use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use log::{debug, error, info};

use crate::BatchError;

use super::{
    build_name,
    item::{ItemProcessor, ItemReader, ItemWriter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Starting,
    Started,
    Success,
    Error,
}

#[derive(Debug, PartialEq)]
enum ChunkStatus {
    Full,
    Finished,
}

/// Outcome of a step run.
#[derive(Debug)]
pub struct StepExecution {
    pub name: String,
    pub status: StepStatus,
    pub start: Instant,
    pub end: Instant,
    pub duration: Duration,
    pub read_count: usize,
    pub write_count: usize,
    pub read_error_count: usize,
    pub process_error_count: usize,
    pub write_error_count: usize,
}

/// Chunk-oriented step: read up to `chunk_size` items, process them, write them.
///
/// Read and process failures skip the offending item until the number of
/// failures exceeds `skip_limit`, then the step fails. Writer failures always
/// fail the step.
pub struct StepInstance<'a, I, O> {
    name: String,
    reader: &'a dyn ItemReader<I>,
    processor: &'a dyn ItemProcessor<I, O>,
    writer: &'a dyn ItemWriter<O>,
    chunk_size: usize,
    skip_limit: usize,
    status: Cell<StepStatus>,
    read_count: Cell<usize>,
    write_count: Cell<usize>,
    read_error_count: Cell<usize>,
    process_error_count: Cell<usize>,
    write_error_count: Cell<usize>,
}

impl<I, O> StepInstance<'_, I, O> {
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_status(&self) -> StepStatus {
        self.status.get()
    }

    /// Runs the step to completion.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Step`] when the skip limit is exceeded or the
    /// writer fails.
    pub fn execute(&self) -> Result<StepExecution, BatchError> {
        let start = Instant::now();
        info!("Start of step: {}", self.name);
        self.status.set(StepStatus::Started);

        match self.run() {
            Ok(()) => self.status.set(StepStatus::Success),
            Err(err) => {
                self.status.set(StepStatus::Error);
                error!("Step {} failed: {}", self.name, err);
                return Err(BatchError::Step(self.name.clone()));
            }
        }

        info!(
            "End of step: {}, read: {}, written: {}, skipped: {}",
            self.name,
            self.read_count.get(),
            self.write_count.get(),
            self.read_error_count.get() + self.process_error_count.get()
        );

        Ok(StepExecution {
            name: self.name.clone(),
            status: self.status.get(),
            start,
            end: Instant::now(),
            duration: start.elapsed(),
            read_count: self.read_count.get(),
            write_count: self.write_count.get(),
            read_error_count: self.read_error_count.get(),
            process_error_count: self.process_error_count.get(),
            write_error_count: self.write_error_count.get(),
        })
    }

    fn run(&self) -> Result<(), BatchError> {
        self.writer.open()?;

        let mut read_items: Vec<I> = Vec::with_capacity(self.chunk_size);
        loop {
            let chunk_status = self.read_chunk(&mut read_items)?;
            let processed_items = self.process_chunk(&read_items)?;

            if !processed_items.is_empty() {
                self.write_chunk(&processed_items)?;
            }

            if chunk_status == ChunkStatus::Finished {
                break;
            }
        }

        self.writer.close()
    }

    fn read_chunk(&self, read_items: &mut Vec<I>) -> Result<ChunkStatus, BatchError> {
        debug!("Start reading chunk");
        read_items.clear();

        while read_items.len() < self.chunk_size {
            match self.reader.read() {
                Ok(Some(item)) => {
                    read_items.push(item);
                    inc(&self.read_count, 1);
                }
                Ok(None) => {
                    debug!("End reading chunk: FINISHED");
                    return Ok(ChunkStatus::Finished);
                }
                Err(err) => {
                    inc(&self.read_error_count, 1);
                    error!("Error occurred during read item: {}", err);
                    if self.is_skip_limit_reached() {
                        return Err(err);
                    }
                }
            }
        }

        debug!("End reading chunk: FULL");
        Ok(ChunkStatus::Full)
    }

    fn process_chunk(&self, read_items: &[I]) -> Result<Vec<O>, BatchError> {
        debug!("Start processing chunk");
        let mut processed_items = Vec::with_capacity(read_items.len());

        for item in read_items {
            match self.processor.process(item) {
                Ok(processed) => processed_items.push(processed),
                Err(err) => {
                    inc(&self.process_error_count, 1);
                    error!("Error occurred during process item: {}", err);
                    if self.is_skip_limit_reached() {
                        return Err(err);
                    }
                }
            }
        }

        debug!("End processing chunk");
        Ok(processed_items)
    }

    fn write_chunk(&self, processed_items: &[O]) -> Result<(), BatchError> {
        debug!("Start writing chunk");

        let result = self
            .writer
            .write(processed_items)
            .and_then(|()| self.writer.flush());

        match result {
            Ok(()) => {
                inc(&self.write_count, processed_items.len());
                debug!("End writing chunk");
                Ok(())
            }
            Err(err) => {
                inc(&self.write_error_count, processed_items.len());
                error!("ItemWriter error: {}", err);
                Err(err)
            }
        }
    }

    fn is_skip_limit_reached(&self) -> bool {
        self.read_error_count.get() + self.process_error_count.get() > self.skip_limit
    }
}

fn inc(counter: &Cell<usize>, by: usize) {
    counter.set(counter.get() + by);
}

/// Builder for [`StepInstance`].
///
/// Reader, processor and writer are required; pass
/// [`PassThroughProcessor`](super::item::PassThroughProcessor) when items need
/// no transformation.
pub struct StepBuilder<'a, I, O> {
    name: Option<String>,
    reader: Option<&'a dyn ItemReader<I>>,
    processor: Option<&'a dyn ItemProcessor<I, O>>,
    writer: Option<&'a dyn ItemWriter<O>>,
    chunk_size: usize,
    skip_limit: usize,
}

impl<I, O> Default for StepBuilder<'_, I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I, O> StepBuilder<'a, I, O> {
    pub fn new() -> StepBuilder<'a, I, O> {
        Self {
            name: None,
            reader: None,
            processor: None,
            writer: None,
            chunk_size: 1,
            skip_limit: 0,
        }
    }

    pub fn name(mut self, name: String) -> StepBuilder<'a, I, O> {
        self.name = Some(name);
        self
    }

    pub fn reader(mut self, reader: &'a impl ItemReader<I>) -> StepBuilder<'a, I, O> {
        self.reader = Some(reader);
        self
    }

    pub fn processor(mut self, processor: &'a impl ItemProcessor<I, O>) -> StepBuilder<'a, I, O> {
        self.processor = Some(processor);
        self
    }

    pub fn writer(mut self, writer: &'a impl ItemWriter<O>) -> StepBuilder<'a, I, O> {
        self.writer = Some(writer);
        self
    }

    pub fn chunk(mut self, chunk_size: usize) -> StepBuilder<'a, I, O> {
        self.chunk_size = chunk_size;
        self
    }

    pub fn skip_limit(mut self, skip_limit: usize) -> StepBuilder<'a, I, O> {
        self.skip_limit = skip_limit;
        self
    }

    pub fn build(self) -> Result<StepInstance<'a, I, O>, BatchError> {
        if self.chunk_size == 0 {
            return Err(BatchError::Configuration(
                "chunk size must be at least 1".to_string(),
            ));
        }

        let missing = |part: &str| BatchError::Configuration(format!("step has no {part}"));

        Ok(StepInstance {
            name: self.name.unwrap_or_else(build_name),
            reader: self.reader.ok_or_else(|| missing("reader"))?,
            processor: self.processor.ok_or_else(|| missing("processor"))?,
            writer: self.writer.ok_or_else(|| missing("writer"))?,
            chunk_size: self.chunk_size,
            skip_limit: self.skip_limit,
            status: Cell::new(StepStatus::Starting),
            read_count: Cell::new(0),
            write_count: Cell::new(0),
            read_error_count: Cell::new(0),
            process_error_count: Cell::new(0),
            write_error_count: Cell::new(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::{StepBuilder, StepInstance, StepStatus};
    use crate::{
        BatchError,
        core::item::{
            ItemProcessor, ItemProcessorResult, ItemReader, ItemReaderResult, ItemWriter,
            ItemWriterResult, PassThroughProcessor,
        },
    };

    /// Yields `0..count`, failing on the listed positions.
    struct CountingReader {
        next: Cell<u8>,
        count: u8,
        failures: Vec<u8>,
    }

    impl CountingReader {
        fn new(count: u8, failures: Vec<u8>) -> Self {
            Self {
                next: Cell::new(0),
                count,
                failures,
            }
        }
    }

    impl ItemReader<u8> for CountingReader {
        fn read(&self) -> ItemReaderResult<u8> {
            let current = self.next.get();
            if current == self.count {
                return Ok(None);
            }
            self.next.set(current + 1);
            if self.failures.contains(&current) {
                return Err(BatchError::ItemReader(format!("item {current}")));
            }
            Ok(Some(current))
        }
    }

    #[derive(Default)]
    struct VecWriter {
        chunks: RefCell<Vec<Vec<u8>>>,
        opened: Cell<bool>,
        closed: Cell<bool>,
    }

    impl ItemWriter<u8> for VecWriter {
        fn write(&self, items: &[u8]) -> ItemWriterResult {
            self.chunks.borrow_mut().push(items.to_vec());
            Ok(())
        }

        fn open(&self) -> ItemWriterResult {
            self.opened.set(true);
            Ok(())
        }

        fn close(&self) -> ItemWriterResult {
            self.closed.set(true);
            Ok(())
        }
    }

    struct OddRejector;

    impl ItemProcessor<u8, u8> for OddRejector {
        fn process(&self, item: &u8) -> ItemProcessorResult<u8> {
            if item % 2 == 1 {
                Err(BatchError::ItemProcessor(format!("odd item {item}")))
            } else {
                Ok(*item)
            }
        }
    }

    #[test]
    fn step_should_write_items_in_chunks() -> Result<(), BatchError> {
        let reader = CountingReader::new(5, vec![]);
        let writer = VecWriter::default();

        let step: StepInstance<u8, u8> = StepBuilder::new()
            .name("chunks".to_string())
            .reader(&reader)
            .processor(&PassThroughProcessor)
            .writer(&writer)
            .chunk(2)
            .build()?;

        let execution = step.execute()?;

        assert_eq!(execution.status, StepStatus::Success);
        assert_eq!(execution.read_count, 5);
        assert_eq!(execution.write_count, 5);
        assert_eq!(step.get_name(), "chunks");
        assert_eq!(
            *writer.chunks.borrow(),
            vec![vec![0, 1], vec![2, 3], vec![4]]
        );
        assert!(writer.opened.get());
        assert!(writer.closed.get());
        Ok(())
    }

    #[test]
    fn step_should_skip_failed_reads_within_limit() -> Result<(), BatchError> {
        let reader = CountingReader::new(4, vec![1, 2]);
        let writer = VecWriter::default();

        let step: StepInstance<u8, u8> = StepBuilder::new()
            .reader(&reader)
            .processor(&PassThroughProcessor)
            .writer(&writer)
            .chunk(10)
            .skip_limit(2)
            .build()?;

        let execution = step.execute()?;

        assert_eq!(execution.read_count, 2);
        assert_eq!(execution.read_error_count, 2);
        assert_eq!(*writer.chunks.borrow(), vec![vec![0, 3]]);
        Ok(())
    }

    #[test]
    fn step_should_fail_beyond_skip_limit() -> Result<(), BatchError> {
        let reader = CountingReader::new(4, vec![1, 2]);
        let writer = VecWriter::default();

        let step: StepInstance<u8, u8> = StepBuilder::new()
            .name("strict".to_string())
            .reader(&reader)
            .processor(&PassThroughProcessor)
            .writer(&writer)
            .skip_limit(1)
            .build()?;

        let result = step.execute();

        assert!(matches!(result, Err(BatchError::Step(name)) if name == "strict"));
        assert_eq!(step.get_status(), StepStatus::Error);
        assert!(!writer.closed.get());
        Ok(())
    }

    #[test]
    fn processor_errors_should_count_against_skip_limit() -> Result<(), BatchError> {
        let reader = CountingReader::new(6, vec![]);
        let writer = VecWriter::default();

        let step: StepInstance<u8, u8> = StepBuilder::new()
            .reader(&reader)
            .processor(&OddRejector)
            .writer(&writer)
            .chunk(3)
            .skip_limit(3)
            .build()?;

        let execution = step.execute()?;

        assert_eq!(execution.process_error_count, 3);
        assert_eq!(execution.write_count, 3);
        assert_eq!(*writer.chunks.borrow(), vec![vec![0, 2], vec![4]]);
        Ok(())
    }

    #[test]
    fn builder_should_reject_incomplete_step() {
        let reader = CountingReader::new(1, vec![]);

        let result: Result<StepInstance<u8, u8>, BatchError> = StepBuilder::new()
            .reader(&reader)
            .processor(&PassThroughProcessor)
            .build();
        assert!(matches!(result, Err(BatchError::Configuration(_))));

        let writer = VecWriter::default();
        let result: Result<StepInstance<u8, u8>, BatchError> = StepBuilder::new()
            .reader(&reader)
            .processor(&PassThroughProcessor)
            .writer(&writer)
            .chunk(0)
            .build();
        assert!(matches!(result, Err(BatchError::Configuration(_))));
    }

    #[test]
    fn unnamed_step_should_get_random_name() -> Result<(), BatchError> {
        let reader = CountingReader::new(0, vec![]);
        let writer = VecWriter::default();

        let step: StepInstance<u8, u8> = StepBuilder::new()
            .reader(&reader)
            .processor(&PassThroughProcessor)
            .writer(&writer)
            .build()?;

        assert_eq!(step.get_name().len(), 8);
        assert_eq!(step.get_status(), StepStatus::Starting);
        Ok(())
    }
}
