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

use std::mem;

use log::trace;

use super::{
    enums::ParsingState,
    helper_constants::{MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_NDC, PLUS_SIGN, TRUNK_PREFIX},
    helper_types::PhoneNumberRecord,
};
use crate::{interfaces::CountryLookup, registry::AreaRegistry};

/// Splits free-form input into country code, destination code and
/// subscriber number in a single left to right pass.
///
/// Codes are recognised by asking the lookup providers whether the digits
/// collected so far name a country or an area, so codes of any length are
/// found without knowing the numbering plan. Scanning for a country code
/// stops after five digits and scanning for a destination code after three,
/// which keeps unknown input parseable: it ends up in the subscriber number.
pub struct NumberParser<'a> {
    countries: &'a dyn CountryLookup,
    areas: &'a AreaRegistry,
}

impl<'a> NumberParser<'a> {
    pub fn new(countries: &'a dyn CountryLookup, areas: &'a AreaRegistry) -> Self {
        Self { countries, areas }
    }

    /// Parses `raw`, assuming `default_country_code` unless the input
    /// names another country. Never fails; input without digits produces
    /// empty codes.
    pub fn parse(&self, raw: &str, default_country_code: &str) -> PhoneNumberRecord {
        let mut record = PhoneNumberRecord::with_country_code(default_country_code);
        record.raw = raw.to_owned();

        // empty input behaves like a lone trunk prefix
        let input = if raw.is_empty() { TRUNK_PREFIX } else { raw };
        let (mut state, rest) = if let Some(rest) = input.strip_prefix(PLUS_SIGN) {
            (ParsingState::CountryCode, rest)
        } else if let Some(rest) = input.strip_prefix(TRUNK_PREFIX) {
            (ParsingState::AreaCode, rest)
        } else {
            (ParsingState::Subscriber, input)
        };
        trace!("Parsing {:?} starting in state {:?}", raw, state);

        let mut part = String::with_capacity(rest.len());
        for digit in rest.chars().filter(char::is_ascii_digit) {
            part.push(digit);

            if state == ParsingState::CountryCode {
                if !self.countries.lookup(&part).is_empty() {
                    trace!("Found country code {}", part);
                    record.country_code = mem::take(&mut part);
                    state = ParsingState::AreaCode;
                } else if part.len() >= MAX_LENGTH_COUNTRY_CODE {
                    trace!("No country code within {:?}, keeping {:?}", part, record.country_code);
                    state = ParsingState::AreaCode;
                }
            }

            // the same digit may end the country code and start the area code
            if state == ParsingState::AreaCode {
                let areas = self.areas.resolve(&record.country_code);
                if !areas.lookup(&part).is_empty() {
                    trace!("Found destination code {} for country {}", part, record.country_code);
                    record.national_destination_code = mem::take(&mut part);
                    state = ParsingState::Subscriber;
                } else if part.len() >= MAX_LENGTH_NDC {
                    trace!("No destination code within {:?}", part);
                    state = ParsingState::Subscriber;
                }
            }
        }

        record.subscriber_number = part;
        record
    }
}
