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

use std::{collections::HashMap, sync::Arc};

use log::debug;

use crate::{
    interfaces::{AreaLookup, CarrierLookup},
    library::{EmptyCarrierLookup, EmptyLookup},
};

pub type AreaRegistry = LookupRegistry<dyn AreaLookup>;
pub type CarrierRegistry = LookupRegistry<dyn CarrierLookup>;

/// Providers keyed by the country calling code they handle.
///
/// Resolving a code nobody registered for yields the fallback provider,
/// which for the default registries is a null object answering `""`.
pub struct LookupRegistry<T: ?Sized> {
    providers: HashMap<String, Arc<T>>,
    fallback: Arc<T>,
}

impl<T: ?Sized> LookupRegistry<T> {
    pub fn new(fallback: Arc<T>) -> Self {
        Self {
            providers: HashMap::new(),
            fallback,
        }
    }

    pub fn with_capacity(fallback: Arc<T>, capacity: usize) -> Self {
        Self {
            providers: HashMap::with_capacity(capacity),
            fallback,
        }
    }

    /// Registers `provider` for `country_code`, returning the provider it
    /// replaced, if any.
    pub fn insert(&mut self, country_code: u32, provider: Arc<T>) -> Option<Arc<T>> {
        let mut buf = itoa::Buffer::new();
        let key = buf.format(country_code);
        let replaced = self.providers.insert(key.to_owned(), provider);
        if replaced.is_some() {
            debug!("Replaced lookup provider registered for country code {}", key);
        }
        replaced
    }

    /// Returns the provider registered for `country_code` or the fallback.
    pub fn resolve(&self, country_code: &str) -> &T {
        self.providers
            .get(country_code)
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    pub fn contains(&self, country_code: &str) -> bool {
        self.providers.contains_key(country_code)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for LookupRegistry<dyn AreaLookup> {
    fn default() -> Self {
        Self::new(Arc::new(EmptyLookup))
    }
}

impl Default for LookupRegistry<dyn CarrierLookup> {
    fn default() -> Self {
        Self::new(Arc::new(EmptyCarrierLookup))
    }
}
