/// Provider of card holder names.
///
/// The only contract is a non-empty string per call. The `fake` feature ships
/// [`FakeNameSource`](crate::item::fake::FakeNameSource); closures returning a
/// `String` work as well, which keeps tests deterministic.
pub trait NameSource {
    fn next_name(&mut self) -> String;
}

impl<F> NameSource for F
where
    F: FnMut() -> String,
{
    fn next_name(&mut self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::NameSource;

    #[test]
    fn closure_should_act_as_name_source() {
        let mut counter = 0;
        let mut source = || {
            counter += 1;
            format!("Holder {counter}")
        };

        assert_eq!(source.next_name(), "Holder 1");
        assert_eq!(source.next_name(), "Holder 2");
    }
}
