use crate::{i18n::Language, phonenumber::errors::CarrierLookupError};

/// Maps a country calling code to a country name.
///
/// Implementations return an empty string when the code is unknown.
pub trait CountryLookup: Send + Sync {
    fn lookup(&self, code: &str) -> String;

    /// Same as [`CountryLookup::lookup`] with a preferred language. Providers
    /// that only know one language ignore it.
    fn lookup_in(&self, code: &str, language: Language) -> String {
        let _ = language;
        self.lookup(code)
    }
}

/// Maps a national destination code to an area name within one country.
pub trait AreaLookup: Send + Sync {
    /// Country calling code this provider handles, `0` for none.
    fn country_code(&self) -> u32;

    fn lookup(&self, ndc: &str) -> String;
}

/// Resolves the network operator of a number within one country.
pub trait CarrierLookup: Send + Sync {
    /// Country calling code this provider handles, `0` for none.
    fn country_code(&self) -> u32;

    /// Returns `Ok("")` when the carrier is unknown. Errors are reserved for
    /// transport or response failures.
    fn lookup(&self, ndc: &str, sn: &str) -> Result<String, CarrierLookupError>;
}

/// Blocking fetch of a carrier service response body.
pub trait CarrierTransport: Send + Sync {
    fn fetch(&self, url: &url::Url) -> Result<String, CarrierLookupError>;
}
