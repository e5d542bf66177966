//! Lookup providers shipped with the crate.

mod areas;
mod carriers;
mod countries;
mod country_directory;
mod country_tables;
mod empty;
#[cfg(feature = "http")]
mod http_transport;

pub use areas::{SWEDISH_AREA_CODES, StaticAreaLookup};
pub use carriers::{NoDataOnFailure, PtsCarrierLookup, PtsCarrierOptions};
pub use countries::{COUNTRIES_EN, COUNTRIES_SV, COUNTRY_ALPHA2, StaticCountryLookup};
pub use country_directory::{
    CountryColumn, CountryDirectory, CountryRecord, CountryStore, DashMapCache,
    InMemoryCountryStore, LookupCache, VoidCache,
};
pub use empty::{EmptyCarrierLookup, EmptyLookup};
#[cfg(feature = "http")]
pub use http_transport::HttpTransport;
