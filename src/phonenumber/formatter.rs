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

//! Rendering of number components. Every function here is pure and total:
//! missing components produce empty output, never an error.

use std::iter;

use super::{
    PhoneNumberFormat,
    helper_constants::{MAX_LENGTH_E164, MIN_LENGTH_E164, PLUS_SIGN, TRUNK_PREFIX},
    helper_types::PhoneNumberRecord,
};
use crate::string_util::strip_layout_whitespace;

/// Splits a run of digits into space separated groups for display.
///
/// Spaces, tabs and newlines in the input are dropped first. Up to three
/// digits are returned as they are, lengths four to nine use a fixed
/// layout (`774 02 12`, `877 402 12`, ...). Longer numbers are split into
/// pairs, led by a triple when the length is odd. There is no upper bound
/// on the length.
pub fn group(number: &str) -> String {
    let digits = strip_layout_whitespace(number);
    let chars = digits.chars().collect::<Vec<_>>();

    let layout: &[usize] = match chars.len() {
        0..=3 => return digits.into_owned(),
        4 => &[2, 2],
        5 => &[3, 2],
        6 => &[2, 2, 2],
        7 => &[3, 2, 2],
        8 => &[3, 3, 2],
        9 => &[3, 3, 3],
        len => {
            let lead = if len % 2 == 1 { 3 } else { 2 };
            return join_groups(&chars, iter::once(lead).chain(iter::repeat(2)));
        }
    };
    join_groups(&chars, layout.iter().copied())
}

fn join_groups(chars: &[char], sizes: impl Iterator<Item = usize>) -> String {
    let mut grouped = String::with_capacity(chars.len() * 2);
    let mut rest = chars;
    for size in sizes {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(size.min(rest.len()));
        if !grouped.is_empty() {
            grouped.push(' ');
        }
        grouped.extend(head);
        rest = tail;
    }
    grouped
}

/// Trunk prefix followed by the destination code, empty without one.
pub fn area_code(national_destination_code: &str) -> String {
    if national_destination_code.is_empty() {
        return String::new();
    }
    fast_cat::concat_str!(TRUNK_PREFIX, national_destination_code)
}

pub fn e164(country_code: &str, national_destination_code: &str, subscriber_number: &str) -> String {
    if country_code.is_empty() && national_destination_code.is_empty() && subscriber_number.is_empty() {
        return String::new();
    }
    fast_cat::concat_str!(PLUS_SIGN, country_code, national_destination_code, subscriber_number)
}

pub fn international(
    country_code: &str,
    national_destination_code: &str,
    subscriber_number: &str,
) -> String {
    if country_code.is_empty() {
        return String::new();
    }
    let grouped = group(subscriber_number);
    // an empty destination code leaves two spaces in a row
    fast_cat::concat_str!(
        PLUS_SIGN,
        country_code,
        " ",
        national_destination_code,
        " ",
        &grouped
    )
    .replace("  ", " ")
}

pub fn national(national_destination_code: &str, subscriber_number: &str) -> String {
    let area_code = area_code(national_destination_code);
    let grouped = group(subscriber_number);
    if area_code.is_empty() {
        return grouped;
    }
    fast_cat::concat_str!(&area_code, "-", &grouped)
}

/// A number is valid when its E.164 form, plus sign included, is between
/// six and sixteen characters long.
pub fn is_valid(country_code: &str, national_destination_code: &str, subscriber_number: &str) -> bool {
    let len = e164(country_code, national_destination_code, subscriber_number).len();
    (MIN_LENGTH_E164..=MAX_LENGTH_E164).contains(&len)
}

/// Renders `record` in the requested format.
pub fn format_record(record: &PhoneNumberRecord, number_format: PhoneNumberFormat) -> String {
    let cc = record.country_code.as_str();
    let ndc = record.national_destination_code.as_str();
    let sn = record.subscriber_number.as_str();
    match number_format {
        PhoneNumberFormat::E164 => e164(cc, ndc, sn),
        PhoneNumberFormat::International => international(cc, ndc, sn),
        PhoneNumberFormat::National => national(ndc, sn),
    }
}

/// National format when the number belongs to `home_country_code`,
/// international otherwise.
pub fn format_for(record: &PhoneNumberRecord, home_country_code: &str) -> String {
    if record.country_code == home_country_code {
        format_record(record, PhoneNumberFormat::National)
    } else {
        format_record(record, PhoneNumberFormat::International)
    }
}
