// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{borrow::Cow, fmt, sync::Arc};

use log::warn;

use super::{
    PhoneNumberFormat, errors::CarrierLookupError, formatter, helper_types::PhoneNumberRecord,
    parser::NumberParser,
};
use crate::{
    i18n::Language,
    interfaces::{AreaLookup, CarrierLookup, CountryLookup},
    registry::{AreaRegistry, CarrierRegistry},
    string_util::retain_ascii_digits,
};

/// A phone number together with the lookups used to parse and describe it.
///
/// The instance is meant to be reused: every call to
/// [`PhoneNumber::set_raw`] starts from a clean state. Formatting is done on
/// demand from the current components, nothing is cached.
///
/// ```ignore
/// let mut number = PhoneNumber::new(StaticCountryLookup::english(), "46");
/// number.register_area_lookup(Arc::new(StaticAreaLookup::swedish()));
/// number.set_raw("+46 8 774 02 12");
/// assert_eq!(number.format(), "08-774 02 12");
/// ```
pub struct PhoneNumber {
    countries: Arc<dyn CountryLookup>,
    areas: AreaRegistry,
    carriers: CarrierRegistry,
    default_country_code: String,
    record: PhoneNumberRecord,
}

impl PhoneNumber {
    /// Creates an empty number. `default_country_code` is assumed for input
    /// without an explicit country code and decides between national and
    /// international display.
    pub fn new(countries: impl CountryLookup + 'static, default_country_code: &str) -> Self {
        Self::with_shared_countries(Arc::new(countries), default_country_code)
    }

    pub fn with_shared_countries(
        countries: Arc<dyn CountryLookup>,
        default_country_code: &str,
    ) -> Self {
        let default_country_code = retain_ascii_digits(default_country_code).into_owned();
        Self {
            countries,
            areas: AreaRegistry::default(),
            carriers: CarrierRegistry::default(),
            record: PhoneNumberRecord::with_country_code(&default_country_code),
            default_country_code,
        }
    }

    /// Registers an area lookup under the country code it reports. A later
    /// registration for the same country replaces the earlier one.
    pub fn register_area_lookup(&mut self, areas: Arc<dyn AreaLookup>) {
        let country_code = areas.country_code();
        self.areas.insert(country_code, areas);
    }

    pub fn register_carrier_lookup(&mut self, carriers: Arc<dyn CarrierLookup>) {
        let country_code = carriers.country_code();
        self.carriers.insert(country_code, carriers);
    }

    /// The area lookup for `country_code`, or a null object answering `""`.
    pub fn resolve_area_lookup(&self, country_code: &str) -> &dyn AreaLookup {
        self.areas.resolve(country_code)
    }

    /// The carrier lookup for `country_code`, or a null object answering `""`.
    pub fn resolve_carrier_lookup(&self, country_code: &str) -> &dyn CarrierLookup {
        self.carriers.resolve(country_code)
    }

    /// Clears the number, restoring the default country code.
    pub fn reset(&mut self) {
        self.record = PhoneNumberRecord::with_country_code(&self.default_country_code);
    }

    /// Parses `raw` into its components, replacing whatever was set before.
    /// Characters other than digits are ignored, except a leading `+`
    /// (country code follows) or `0` (trunk prefix, area code follows).
    pub fn set_raw(&mut self, raw: &str) {
        self.reset();
        let parser = NumberParser::new(self.countries.as_ref(), &self.areas);
        self.record = parser.parse(raw, &self.default_country_code);
    }

    /// The input of the last [`PhoneNumber::set_raw`], empty otherwise.
    pub fn raw(&self) -> &str {
        &self.record.raw
    }

    pub fn default_country_code(&self) -> &str {
        &self.default_country_code
    }

    pub fn country_code(&self) -> &str {
        &self.record.country_code
    }

    pub fn national_destination_code(&self) -> &str {
        &self.record.national_destination_code
    }

    pub fn subscriber_number(&self) -> &str {
        &self.record.subscriber_number
    }

    /// Setters take the value as is; nothing is checked against the lookup
    /// tables. Characters other than ASCII digits are dropped.
    pub fn set_country_code(&mut self, country_code: &str) {
        self.record.country_code = digits_only("country code", country_code);
    }

    pub fn set_national_destination_code(&mut self, national_destination_code: &str) {
        self.record.national_destination_code =
            digits_only("national destination code", national_destination_code);
    }

    pub fn set_subscriber_number(&mut self, subscriber_number: &str) {
        self.record.subscriber_number = digits_only("subscriber number", subscriber_number);
    }

    /// Snapshot of the current components.
    pub fn components(&self) -> PhoneNumberRecord {
        self.record.clone()
    }

    pub fn area_code(&self) -> String {
        formatter::area_code(&self.record.national_destination_code)
    }

    pub fn e164(&self) -> String {
        self.format_as(PhoneNumberFormat::E164)
    }

    pub fn international_format(&self) -> String {
        self.format_as(PhoneNumberFormat::International)
    }

    pub fn national_format(&self) -> String {
        self.format_as(PhoneNumberFormat::National)
    }

    pub fn format_as(&self, number_format: PhoneNumberFormat) -> String {
        formatter::format_record(&self.record, number_format)
    }

    /// National format for numbers in the default country, international
    /// format for everything else.
    pub fn format(&self) -> String {
        formatter::format_for(&self.record, &self.default_country_code)
    }

    pub fn is_valid(&self) -> bool {
        formatter::is_valid(
            &self.record.country_code,
            &self.record.national_destination_code,
            &self.record.subscriber_number,
        )
    }

    /// Name of the country, empty if unknown.
    pub fn country(&self) -> String {
        if self.record.country_code.is_empty() {
            return String::new();
        }
        self.countries.lookup(&self.record.country_code)
    }

    pub fn country_in(&self, language: Language) -> String {
        if self.record.country_code.is_empty() {
            return String::new();
        }
        self.countries.lookup_in(&self.record.country_code, language)
    }

    /// Name of the area the destination code belongs to, empty if unknown.
    pub fn area(&self) -> String {
        if self.record.national_destination_code.is_empty() {
            return String::new();
        }
        self.areas
            .resolve(&self.record.country_code)
            .lookup(&self.record.national_destination_code)
    }

    /// Name of the network operator, empty if unknown.
    ///
    /// Failures of the carrier provider are passed on. Wrap the provider in
    /// [`crate::library::NoDataOnFailure`] to read them as "unknown" instead.
    pub fn carrier(&self) -> Result<String, CarrierLookupError> {
        let record = &self.record;
        if record.national_destination_code.is_empty() || record.subscriber_number.is_empty() {
            return Ok(String::new());
        }
        self.carriers
            .resolve(&record.country_code)
            .lookup(&record.national_destination_code, &record.subscriber_number)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneNumber")
            .field("default_country_code", &self.default_country_code)
            .field("record", &self.record)
            .field("area_lookups", &self.areas.len())
            .field("carrier_lookups", &self.carriers.len())
            .finish()
    }
}

fn digits_only(component: &str, value: &str) -> String {
    let digits = retain_ascii_digits(value);
    if let Cow::Owned(_) = digits {
        warn!("Dropped non-digit characters from {} {:?}", component, value);
    }
    digits.into_owned()
}
