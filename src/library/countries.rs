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

use std::{collections::HashMap, sync::LazyLock};

use super::country_tables::{CALLING_CODES_ALPHA2, CALLING_CODES_EN, CALLING_CODES_SV};
use crate::{i18n::Language, interfaces::CountryLookup};

pub type CallingCodeTable = HashMap<&'static str, &'static str>;

/// Calling code to English country name, e.g. `"46"` to `"Sweden"`.
pub static COUNTRIES_EN: LazyLock<CallingCodeTable> =
    LazyLock::new(|| CALLING_CODES_EN.iter().copied().collect());

/// Calling code to Swedish country name, e.g. `"46"` to `"Sverige"`.
pub static COUNTRIES_SV: LazyLock<CallingCodeTable> =
    LazyLock::new(|| CALLING_CODES_SV.iter().copied().collect());

/// Calling code to ISO 3166-1 alpha-2 code, e.g. `"46"` to `"SE"`.
pub static COUNTRY_ALPHA2: LazyLock<CallingCodeTable> =
    LazyLock::new(|| CALLING_CODES_ALPHA2.iter().copied().collect());

fn table_for(language: Language) -> &'static CallingCodeTable {
    match language {
        Language::En => &*COUNTRIES_EN,
        Language::Sv => &*COUNTRIES_SV,
    }
}

/// Country names from the compiled-in calling code tables.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StaticCountryLookup {
    language: Language,
}

impl StaticCountryLookup {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn english() -> Self {
        Self::new(Language::En)
    }

    pub fn swedish() -> Self {
        Self::new(Language::Sv)
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl CountryLookup for StaticCountryLookup {
    fn lookup(&self, code: &str) -> String {
        self.lookup_in(code, self.language)
    }

    fn lookup_in(&self, code: &str, language: Language) -> String {
        table_for(language)
            .get(code)
            .map(|name| name.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{COUNTRIES_EN, COUNTRIES_SV, COUNTRY_ALPHA2, StaticCountryLookup};
    use crate::{i18n::Language, interfaces::CountryLookup};

    #[test]
    fn tables_cover_the_same_codes() {
        assert_eq!(COUNTRIES_EN.len(), COUNTRIES_SV.len());
        for code in COUNTRIES_EN.keys() {
            assert!(COUNTRIES_SV.contains_key(code), "{} missing in Swedish table", code);
            assert!(COUNTRY_ALPHA2.contains_key(code), "{} missing in alpha-2 table", code);
        }
        assert_eq!(COUNTRY_ALPHA2.get("35818"), Some(&"AX"));
    }

    #[test]
    fn lookup_by_language() {
        let english = StaticCountryLookup::english();
        assert_eq!(english.lookup("46"), "Sweden");
        assert_eq!(english.lookup("998"), "Uzbekistan");
        assert_eq!(english.lookup_in("46", Language::Sv), "Sverige");

        let swedish = StaticCountryLookup::swedish();
        assert_eq!(swedish.lookup("1"), "Usa, Kanada, Puerto Rico");
        assert_eq!(swedish.lookup_in("1", Language::En), "United States, Canada, Puerto Rico");
    }

    #[test]
    fn unknown_codes_are_empty() {
        let english = StaticCountryLookup::english();
        assert_eq!(english.lookup("0"), "");
        assert_eq!(english.lookup(""), "");
        assert_eq!(english.lookup("046"), "");
        assert_eq!(english.lookup("99"), "");
    }
}
