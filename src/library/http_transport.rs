use std::time::Duration;

use url::Url;

use crate::{interfaces::CarrierTransport, phonenumber::errors::CarrierLookupError};

/// Blocking HTTP transport. Every request is bounded by the timeout given
/// at construction.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, CarrierLookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| CarrierLookupError::TransportSetup(err.to_string()))?;
        Ok(Self { client })
    }
}

impl CarrierTransport for HttpTransport {
    fn fetch(&self, url: &Url) -> Result<String, CarrierLookupError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| CarrierLookupError::fetch_failed(url.as_str(), err))?;
        response
            .text()
            .map_err(|err| CarrierLookupError::fetch_failed(url.as_str(), err))
    }
}
