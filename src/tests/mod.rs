mod phonenumber_tests;

use std::sync::{Arc, Once};

use crate::{
    PhoneNumber,
    library::{StaticAreaLookup, StaticCountryLookup},
};

static ONCE: Once = Once::new();

pub(crate) fn init_logging() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}

/// A number with the English country table, Swedish area codes and
/// Sweden as default country.
pub(crate) fn get_phone_number() -> PhoneNumber {
    init_logging();
    let mut number = PhoneNumber::new(StaticCountryLookup::english(), "46");
    number.register_area_lookup(Arc::new(StaticAreaLookup::swedish()));
    number
}
