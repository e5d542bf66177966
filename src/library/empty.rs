use crate::{
    interfaces::{AreaLookup, CarrierLookup, CountryLookup},
    phonenumber::errors::CarrierLookupError,
};

/// Null object for country and area lookups: knows nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmptyLookup;

impl CountryLookup for EmptyLookup {
    fn lookup(&self, _code: &str) -> String {
        String::new()
    }
}

impl AreaLookup for EmptyLookup {
    fn country_code(&self) -> u32 {
        0
    }

    fn lookup(&self, _ndc: &str) -> String {
        String::new()
    }
}

/// Null object for carrier lookups: knows nothing and never fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCarrierLookup;

impl CarrierLookup for EmptyCarrierLookup {
    fn country_code(&self) -> u32 {
        0
    }

    fn lookup(&self, _ndc: &str, _sn: &str) -> Result<String, CarrierLookupError> {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::{EmptyCarrierLookup, EmptyLookup};
    use crate::{
        i18n::Language,
        interfaces::{AreaLookup, CarrierLookup, CountryLookup},
    };

    #[test]
    fn null_objects_know_nothing() {
        for key in ["", "0", "46", "8", "99999"] {
            assert_eq!(CountryLookup::lookup(&EmptyLookup, key), "");
            assert_eq!(EmptyLookup.lookup_in(key, Language::Sv), "");
            assert_eq!(AreaLookup::lookup(&EmptyLookup, key), "");
            assert_eq!(CarrierLookup::lookup(&EmptyCarrierLookup, key, key).unwrap(), "");
        }
    }

    #[test]
    fn null_objects_handle_no_country() {
        assert_eq!(AreaLookup::country_code(&EmptyLookup), 0);
        assert_eq!(CarrierLookup::country_code(&EmptyCarrierLookup), 0);
    }
}
