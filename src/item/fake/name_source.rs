use fake::locales::{EN, FR_FR, PT_BR};
use fake::{Fake, faker::name::raw::Name};
use log::debug;

use crate::card::name::NameSource;

/// Locale of the generated holder names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameLocale {
    #[default]
    En,
    FrFr,
    PtBr,
}

/// Random full names ("first last") in the chosen locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeNameSource {
    locale: NameLocale,
}

impl FakeNameSource {
    pub fn new(locale: NameLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> NameLocale {
        self.locale
    }
}

impl NameSource for FakeNameSource {
    fn next_name(&mut self) -> String {
        let name: String = match self.locale {
            NameLocale::En => Name(EN).fake(),
            NameLocale::FrFr => Name(FR_FR).fake(),
            NameLocale::PtBr => Name(PT_BR).fake(),
        };
        debug!("Holder name: {}", name);
        name
    }
}
