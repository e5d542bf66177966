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

use std::time::Duration;

use log::{trace, warn};
use url::Url;

use crate::{
    interfaces::{CarrierLookup, CarrierTransport},
    phonenumber::{
        errors::CarrierLookupError,
        helper_constants::{
            DEFAULT_CARRIER_TIMEOUT, PTS_COUNTRY_CODE, PTS_ENDPOINT, PTS_NO_OPERATOR_SENTINELS,
            PTS_OPERATOR_NODE,
        },
    },
};

/// Settings for [`PtsCarrierLookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PtsCarrierOptions {
    /// `SearchByNumber` endpoint of the PTS number service.
    pub endpoint: String,
    /// Upper bound for one request, including connect and body read.
    pub timeout: Duration,
}

impl Default for PtsCarrierOptions {
    fn default() -> Self {
        Self {
            endpoint: PTS_ENDPOINT.to_owned(),
            timeout: DEFAULT_CARRIER_TIMEOUT,
        }
    }
}

/// Operator of Swedish numbers, asked from the PTS number service.
///
/// The service answers with a small XML document whose root holds an
/// `Operator` element. Its two "nothing found" texts are reported as an
/// empty carrier; unreachable hosts and broken documents are errors.
pub struct PtsCarrierLookup<T> {
    transport: T,
    endpoint: String,
}

impl<T: CarrierTransport> PtsCarrierLookup<T> {
    pub fn new(transport: T) -> Self {
        Self::with_endpoint(transport, PTS_ENDPOINT)
    }

    pub fn with_endpoint(transport: T, endpoint: &str) -> Self {
        Self {
            transport,
            endpoint: endpoint.to_owned(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_url(&self, ndc: &str, sn: &str) -> Result<Url, CarrierLookupError> {
        Ok(Url::parse_with_params(
            &self.endpoint,
            &[("Ndc", ndc), ("Number", sn)],
        )?)
    }
}

#[cfg(feature = "http")]
impl PtsCarrierLookup<super::HttpTransport> {
    /// Lookup over HTTP with the endpoint and timeout from `options`.
    pub fn from_options(options: &PtsCarrierOptions) -> Result<Self, CarrierLookupError> {
        let transport = super::HttpTransport::new(options.timeout)?;
        Ok(Self::with_endpoint(transport, &options.endpoint))
    }
}

impl<T: CarrierTransport> CarrierLookup for PtsCarrierLookup<T> {
    fn country_code(&self) -> u32 {
        PTS_COUNTRY_CODE
    }

    fn lookup(&self, ndc: &str, sn: &str) -> Result<String, CarrierLookupError> {
        if ndc.is_empty() || sn.is_empty() {
            return Ok(String::new());
        }
        let url = self.request_url(ndc, sn)?;
        trace!("Fetching carrier from {}", url);
        let body = self.transport.fetch(&url)?;
        if body.trim().is_empty() {
            return Err(CarrierLookupError::fetch_failed(url.as_str(), "empty response"));
        }
        parse_operator(&body, url.as_str())
    }
}

/// Extracts the operator name from a PTS response document.
pub(crate) fn parse_operator(body: &str, url: &str) -> Result<String, CarrierLookupError> {
    let doc = roxmltree::Document::parse(body).map_err(|err| {
        CarrierLookupError::MalformedResponse {
            url: url.to_owned(),
            reason: err.to_string(),
        }
    })?;

    let operator = doc
        .root_element()
        .children()
        .find(|node| node.is_element() && node.tag_name().name() == PTS_OPERATOR_NODE)
        .ok_or_else(|| CarrierLookupError::MissingOperator {
            url: url.to_owned(),
        })?;

    let name = operator.text().unwrap_or_default().trim();
    if PTS_NO_OPERATOR_SENTINELS.contains(&name) {
        return Ok(String::new());
    }
    Ok(name.to_owned())
}

/// Treats every failure of the wrapped carrier lookup as "no data".
///
/// Failures are logged, then reported as an empty carrier. Use this only
/// where a missing carrier name is acceptable output for a broken service.
pub struct NoDataOnFailure<C>(pub C);

impl<C: CarrierLookup> CarrierLookup for NoDataOnFailure<C> {
    fn country_code(&self) -> u32 {
        self.0.country_code()
    }

    fn lookup(&self, ndc: &str, sn: &str) -> Result<String, CarrierLookupError> {
        match self.0.lookup(ndc, sn) {
            Ok(carrier) => Ok(carrier),
            Err(err) => {
                warn!("Carrier lookup failed, treating as no data: {}", err);
                Ok(String::new())
            }
        }
    }
}
