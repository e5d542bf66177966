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

use thiserror::Error;

/// Failures of a carrier lookup collaborator.
///
/// These describe a broken environment or integration, never a missing
/// answer: a carrier that is simply unknown is reported as an empty string.
#[derive(Debug, Error)]
pub enum CarrierLookupError {
    #[error("Invalid carrier endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Unable to fetch carrier from '{url}': {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Invalid XML returned from '{url}': {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("Operator node missing from '{url}'")]
    MissingOperator { url: String },

    #[error("Unable to set up carrier transport: {0}")]
    TransportSetup(String),
}

impl CarrierLookupError {
    pub(crate) fn fetch_failed(url: &str, reason: impl ToString) -> Self {
        Self::FetchFailed {
            url: url.to_owned(),
            reason: reason.to_string(),
        }
    }
}
