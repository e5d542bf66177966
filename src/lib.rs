mod interfaces;
mod phonenumber;
mod registry;
pub mod i18n;
pub mod library;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::{AreaLookup, CarrierLookup, CarrierTransport, CountryLookup};
pub use phonenumber::{
    PhoneNumberFormat, PhoneNumberRecord,
    errors::CarrierLookupError,
    formatter::{self, group},
    parser::NumberParser,
    phonenumber::PhoneNumber,
};
pub use registry::{AreaRegistry, CarrierRegistry, LookupRegistry};
