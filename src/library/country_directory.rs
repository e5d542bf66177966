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

use dashmap::DashMap;
use log::debug;
use strum::AsRefStr;

use super::{
    countries::{COUNTRIES_EN, COUNTRIES_SV},
    country_tables::CALLING_CODES_ALPHA2,
};
use crate::{
    i18n::Language, interfaces::CountryLookup, phonenumber::helper_constants::DEFAULT_COUNTRY_TABLE,
};

/// Column a country is searched by. The string form is used in cache keys.
#[derive(Debug, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryColumn {
    #[strum(serialize = "cc")]
    CallingCode,
    #[strum(serialize = "country_code")]
    Alpha2,
}

/// One row of a country gazetteer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub alpha2: String,
    pub calling_code: String,
    pub name_en: String,
    pub name_sv: String,
}

impl CountryRecord {
    pub fn new(alpha2: &str, calling_code: &str, name_en: &str, name_sv: &str) -> Self {
        Self {
            alpha2: alpha2.to_owned(),
            calling_code: calling_code.to_owned(),
            name_en: name_en.to_owned(),
            name_sv: name_sv.to_owned(),
        }
    }

    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::En => &self.name_en,
            Language::Sv => &self.name_sv,
        }
    }

    fn column(&self, column: CountryColumn) -> &str {
        match column {
            CountryColumn::CallingCode => &self.calling_code,
            CountryColumn::Alpha2 => &self.alpha2,
        }
    }
}

/// Backing storage of a [`CountryDirectory`], typically a database table.
pub trait CountryStore: Send + Sync {
    /// Table name, part of the cache key.
    fn table(&self) -> &str;

    /// Names of all countries whose `column` equals `code`, in storage order.
    fn country_names(&self, column: CountryColumn, code: &str, language: Language) -> Vec<String>;
}

/// Rows kept in memory, searched linearly.
#[derive(Debug, Clone)]
pub struct InMemoryCountryStore {
    table: String,
    rows: Vec<CountryRecord>,
}

impl InMemoryCountryStore {
    pub fn new(table: &str, rows: Vec<CountryRecord>) -> Self {
        Self {
            table: table.to_owned(),
            rows,
        }
    }

    /// One row per calling code of the compiled-in tables, ordered by
    /// calling code.
    pub fn from_static_tables() -> Self {
        let mut rows = CALLING_CODES_ALPHA2
            .iter()
            .map(|&(calling_code, alpha2)| {
                CountryRecord::new(
                    alpha2,
                    calling_code,
                    COUNTRIES_EN.get(calling_code).copied().unwrap_or_default(),
                    COUNTRIES_SV.get(calling_code).copied().unwrap_or_default(),
                )
            })
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| a.calling_code.cmp(&b.calling_code));
        Self::new(DEFAULT_COUNTRY_TABLE, rows)
    }
}

impl CountryStore for InMemoryCountryStore {
    fn table(&self) -> &str {
        &self.table
    }

    fn country_names(&self, column: CountryColumn, code: &str, language: Language) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| row.column(column) == code)
            .map(|row| row.name(language))
            // rows without a name in this language are left out
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}

/// String cache in front of a [`CountryStore`].
pub trait LookupCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Concurrent in-process cache.
#[derive(Debug, Default)]
pub struct DashMapCache {
    entries: DashMap<String, String>,
}

impl DashMapCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LookupCache for DashMapCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Cache that never remembers anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct VoidCache;

impl LookupCache for VoidCache {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}

/// Country names from a [`CountryStore`], cached per table, column, code
/// and language. Several countries sharing a code are joined with `", "`.
pub struct CountryDirectory<S, C> {
    store: S,
    cache: C,
    language: Language,
}

impl<S: CountryStore, C: LookupCache> CountryDirectory<S, C> {
    pub fn new(store: S, cache: C) -> Self {
        Self {
            store,
            cache,
            language: Language::default(),
        }
    }

    /// Language used by [`CountryLookup::lookup`].
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn fetch_by_calling_code(&self, calling_code: &str, language: Language) -> String {
        self.fetch_by(CountryColumn::CallingCode, calling_code, language)
    }

    /// Searches by ISO 3166-1 alpha-2 code, case insensitively. Anything
    /// but ASCII letters yields an empty string.
    pub fn fetch_by_alpha2(&self, code: &str, language: Language) -> String {
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return String::new();
        }
        self.fetch_by(CountryColumn::Alpha2, &code.to_ascii_uppercase(), language)
    }

    fn fetch_by(&self, column: CountryColumn, code: &str, language: Language) -> String {
        let column_name: &str = column.as_ref();
        let key = fast_cat::concat_str!(
            self.store.table(),
            ".",
            column_name,
            ".",
            code,
            ".",
            language.as_str()
        );
        if let Some(names) = self.cache.get(&key) {
            debug!("Country cache hit for {}", key);
            return names;
        }
        debug!("Country cache miss for {}", key);

        let names = self.store.country_names(column, code, language).join(", ");
        self.cache.set(&key, &names);
        names
    }
}

impl<S: CountryStore, C: LookupCache> CountryLookup for CountryDirectory<S, C> {
    fn lookup(&self, code: &str) -> String {
        self.fetch_by_calling_code(code, self.language)
    }

    fn lookup_in(&self, code: &str, language: Language) -> String {
        self.fetch_by_calling_code(code, language)
    }
}
