use std::sync::{Arc, Mutex};

use super::{get_phone_number, init_logging};
use crate::{
    AreaLookup, CarrierLookup, CarrierLookupError, CountryLookup, PhoneNumber, PhoneNumberFormat,
    i18n::Language,
    library::{EmptyLookup, NoDataOnFailure, StaticAreaLookup, StaticCountryLookup},
};

/// Records every key it is asked for and answers from a fixed pair.
struct RecordingLookup {
    country_code: u32,
    known: (&'static str, &'static str),
    calls: Mutex<Vec<String>>,
}

impl RecordingLookup {
    fn new(country_code: u32, key: &'static str, value: &'static str) -> Self {
        Self {
            country_code,
            known: (key, value),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn answer(&self, key: String) -> String {
        let value = if key == self.known.0 { self.known.1 } else { "" };
        self.calls.lock().unwrap().push(key);
        value.to_owned()
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CountryLookup for RecordingLookup {
    fn lookup(&self, code: &str) -> String {
        self.answer(code.to_owned())
    }
}

impl AreaLookup for RecordingLookup {
    fn country_code(&self) -> u32 {
        self.country_code
    }

    fn lookup(&self, ndc: &str) -> String {
        self.answer(ndc.to_owned())
    }
}

impl CarrierLookup for RecordingLookup {
    fn country_code(&self) -> u32 {
        self.country_code
    }

    fn lookup(&self, ndc: &str, sn: &str) -> Result<String, CarrierLookupError> {
        Ok(self.answer(format!("{}/{}", ndc, sn)))
    }
}

struct FailingCarrier;

impl CarrierLookup for FailingCarrier {
    fn country_code(&self) -> u32 {
        46
    }

    fn lookup(&self, _ndc: &str, _sn: &str) -> Result<String, CarrierLookupError> {
        Err(CarrierLookupError::MissingOperator {
            url: "http://localhost".to_owned(),
        })
    }
}

fn empty_number(default_country_code: &str) -> PhoneNumber {
    init_logging();
    PhoneNumber::new(EmptyLookup, default_country_code)
}

fn stockholm(number: &mut PhoneNumber) {
    number.set_country_code("46");
    number.set_national_destination_code("8");
    number.set_subscriber_number("7740212");
}

#[test]
fn area_code() {
    let mut number = empty_number("");
    assert_eq!(number.area_code(), "");
    number.set_national_destination_code("8");
    assert_eq!(number.area_code(), "08");
}

#[test]
fn e164() {
    let mut number = empty_number("");
    assert_eq!(number.e164(), "");
    stockholm(&mut number);
    assert_eq!(number.e164(), "+4687740212");
}

#[test]
fn reset_restores_default_country_code() {
    let mut number = empty_number("46");
    number.set_raw("+4512345678");
    number.set_national_destination_code("8");
    number.reset();

    assert_eq!(number.e164(), "+46");
    assert_eq!(number.country_code(), "46");
    assert_eq!(number.national_destination_code(), "");
    assert_eq!(number.subscriber_number(), "");
    assert_eq!(number.raw(), "");
}

#[test]
fn international_format() {
    let mut number = empty_number("");
    assert_eq!(number.international_format(), "");

    number.set_country_code("46");
    number.set_subscriber_number("7740212");
    assert_eq!(number.international_format(), "+46 774 02 12");

    number.set_national_destination_code("8");
    assert_eq!(number.international_format(), "+46 8 774 02 12");
}

#[test]
fn national_format() {
    let mut number = empty_number("");
    assert_eq!(number.national_format(), "");

    number.set_subscriber_number("7740212");
    assert_eq!(number.national_format(), "774 02 12");

    number.set_national_destination_code("8");
    assert_eq!(number.national_format(), "08-774 02 12");
}

#[test]
fn format_depends_on_default_country() {
    let mut number = empty_number("46");
    stockholm(&mut number);
    assert_eq!(number.format(), "08-774 02 12");
    assert_eq!(number.to_string(), "08-774 02 12");

    number.set_country_code("45");
    assert_eq!(number.format(), "+45 8 774 02 12");
    assert_eq!(number.format_as(PhoneNumberFormat::E164), "+4587740212");
}

#[test]
fn is_valid() {
    let mut number = empty_number("");
    assert!(!number.is_valid());

    stockholm(&mut number);
    assert!(number.is_valid());

    number.set_subscriber_number("7740212123456");
    assert!(!number.is_valid());
}

#[test]
fn setters_keep_digits_only() {
    let mut number = empty_number("");
    number.set_country_code("+46");
    number.set_national_destination_code("(0)8");
    number.set_subscriber_number("774 02 12");
    assert_eq!(number.country_code(), "46");
    assert_eq!(number.national_destination_code(), "08");
    assert_eq!(number.subscriber_number(), "7740212");
}

#[test]
fn country() {
    init_logging();
    let countries = Arc::new(RecordingLookup::new(0, "46", "Sweden"));
    let mut number = PhoneNumber::with_shared_countries(countries.clone(), "");

    assert_eq!(number.country(), "");
    assert!(countries.calls().is_empty());

    number.set_country_code("46");
    assert_eq!(number.country(), "Sweden");
    assert_eq!(countries.calls(), vec!["46"]);
}

#[test]
fn country_in_language() {
    let mut number = get_phone_number();
    number.set_raw("+4687740212");
    assert_eq!(number.country(), "Sweden");
    assert_eq!(number.country_in(Language::Sv), "Sverige");
    assert_eq!(number.country_in(Language::normalize("se")), "Sverige");
}

#[test]
fn carrier() {
    let mut number = empty_number("");
    let carriers = Arc::new(RecordingLookup::new(46, "8/7740212", "Telia"));
    number.register_carrier_lookup(carriers.clone());

    stockholm(&mut number);
    assert_eq!(number.carrier().unwrap(), "Telia");
    assert_eq!(carriers.calls(), vec!["8/7740212"]);

    number.set_country_code("45");
    assert_eq!(number.carrier().unwrap(), "");
    assert_eq!(carriers.calls().len(), 1);
}

#[test]
fn carrier_failures_surface() {
    let mut number = empty_number("");
    number.register_carrier_lookup(Arc::new(FailingCarrier));
    stockholm(&mut number);

    let err = number.carrier().unwrap_err();
    assert!(matches!(err, CarrierLookupError::MissingOperator { .. }));

    number.register_carrier_lookup(Arc::new(NoDataOnFailure(FailingCarrier)));
    assert_eq!(number.carrier().unwrap(), "");
}

#[test]
fn area() {
    let mut number = empty_number("");
    let areas = Arc::new(RecordingLookup::new(46, "8", "Stockholm"));
    number.register_area_lookup(areas.clone());

    stockholm(&mut number);
    assert_eq!(number.area(), "Stockholm");
    assert_eq!(areas.calls(), vec!["8"]);

    number.set_country_code("45");
    assert_eq!(number.area(), "");
    assert_eq!(areas.calls().len(), 1);
}

#[test]
fn registries_resolve_null_objects() {
    let number = get_phone_number();
    assert_eq!(number.resolve_area_lookup("46").lookup("8"), "Stockholm");
    assert_eq!(number.resolve_area_lookup("45").lookup("8"), "");
    assert_eq!(number.resolve_area_lookup("45").country_code(), 0);
    assert_eq!(number.resolve_carrier_lookup("46").lookup("8", "7740212").unwrap(), "");
    assert_eq!(number.resolve_carrier_lookup("46").country_code(), 0);
}

#[test]
fn later_area_registration_wins() {
    let mut number = get_phone_number();
    number.register_area_lookup(Arc::new(StaticAreaLookup::new(46, &[("77", "Somewhere")])));

    number.set_raw("07740212");
    assert_eq!(number.national_destination_code(), "77");
    assert_eq!(number.subscriber_number(), "40212");
    assert_eq!(number.area(), "Somewhere");

    // Stockholm is gone with the replaced table
    number.set_raw("087740212");
    assert_eq!(number.national_destination_code(), "");
    assert_eq!(number.subscriber_number(), "87740212");
}

#[test]
fn set_raw() {
    let mut number = get_phone_number();

    number.set_raw("+9987740212");
    assert_eq!(number.format(), "+998 774 02 12");

    number.set_raw("+4687740212");
    assert_eq!(number.format(), "08-774 02 12");

    number.set_raw("087740212");
    assert_eq!(number.format(), "08-774 02 12");

    number.set_raw("87740212");
    assert_eq!(number.format(), "877 402 12");

    number.set_raw("+187740212");
    assert_eq!(number.format(), "+1 877 402 12");

    number.set_raw("invalid");
    assert_eq!(number.format(), "");

    number.set_raw("");
    assert_eq!(number.format(), "");
}

#[test]
fn set_raw_components() {
    let mut number = get_phone_number();
    number.set_raw("+4687740212");
    assert_eq!(number.raw(), "+4687740212");
    assert_eq!(number.country_code(), "46");
    assert_eq!(number.national_destination_code(), "8");
    assert_eq!(number.subscriber_number(), "7740212");
    assert_eq!(number.area(), "Stockholm");

    let snapshot = number.components();
    number.set_raw("087740212");
    assert_eq!(
        (
            number.country_code(),
            number.national_destination_code(),
            number.subscriber_number()
        ),
        (
            snapshot.country_code.as_str(),
            snapshot.national_destination_code.as_str(),
            snapshot.subscriber_number.as_str()
        )
    );
    assert_eq!(number.raw(), "087740212");
}

#[test]
fn set_raw_resets_previous_state() {
    let mut number = get_phone_number();
    number.set_raw("+4531337000");
    assert_eq!(number.country_code(), "45");

    number.set_raw("7740212");
    assert_eq!(number.country_code(), "46");
    assert_eq!(number.national_destination_code(), "");
    assert_eq!(number.subscriber_number(), "7740212");
}

/// Input names no known country, so the first five digits are tried as a
/// country code and then carried on into the destination code scan.
#[test]
fn set_raw_without_country_match() {
    init_logging();
    let mut number = PhoneNumber::new(EmptyLookup, "46");
    number.register_area_lookup(Arc::new(StaticAreaLookup::swedish()));

    let fixtures = [
        ("+9987740212", "46", "", "9987740212", "99 87 74 02 12"),
        ("+99877", "46", "", "99877", "998 77"),
        ("+998", "46", "", "998", "998"),
        ("+4687740212", "46", "", "4687740212", "46 87 74 02 12"),
    ];
    for (raw, cc, ndc, sn, formatted) in fixtures {
        number.set_raw(raw);
        assert_eq!(number.country_code(), cc, "{}", raw);
        assert_eq!(number.national_destination_code(), ndc, "{}", raw);
        assert_eq!(number.subscriber_number(), sn, "{}", raw);
        assert_eq!(number.format(), formatted, "{}", raw);
    }
}

#[test]
fn set_raw_with_swedish_country_names() {
    init_logging();
    let mut number = PhoneNumber::new(StaticCountryLookup::swedish(), "46");
    number.register_area_lookup(Arc::new(StaticAreaLookup::swedish()));

    number.set_raw("+46 (0)31-123 45 67");
    // the bracketed trunk zero is read as part of the destination code scan
    assert_eq!(number.national_destination_code(), "");
    assert_eq!(number.subscriber_number(), "0311234567");

    number.set_raw("+46 31-123 45 67");
    assert_eq!(number.country(), "Sverige");
    assert_eq!(number.area(), "Göteborg");
    assert_eq!(number.format(), "031-123 45 67");
    assert_eq!(number.international_format(), "+46 31 123 45 67");
    assert!(number.is_valid());
}
