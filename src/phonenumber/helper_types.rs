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

/// The components a phone number is split into.
///
/// Every code field holds ASCII digits only, or is empty when unknown.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumberRecord {
    /// Input as given to the parser, empty if the number was built by hand.
    pub raw: String,
    pub country_code: String,
    pub national_destination_code: String,
    pub subscriber_number: String,
}

impl PhoneNumberRecord {
    /// An empty record assuming `default_country_code`.
    pub fn with_country_code(default_country_code: &str) -> Self {
        Self {
            country_code: default_country_code.to_owned(),
            ..Default::default()
        }
    }
}
