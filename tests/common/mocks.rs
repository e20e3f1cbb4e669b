//! Mock versions of std::fs::File and of the holder name source.
use mockall::mock;

use std::io::{self, Write};

use testcard_batch::card::name::NameSource;

mock! {
    pub File {}
    impl Write for File {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
}

mock! {
    pub Names {}
    impl NameSource for Names {
        fn next_name(&mut self) -> String;
    }
}
