// Docmosis Rust Library for the Docmosis Cloud Services
// Copyright 2025 Docmosis.com or its affiliates.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error definitions for cloud service operations
//!
//! Failures are split by where they happen:
//! - [`ValidationErr`]: the request is not fit to send, or the reply could not be decoded
//! - [`EnvironmentErr`]: the connection configuration is missing or malformed
//! - [`NetworkError`]: the service could not be reached
//! - [`IoError`]: a local file or stream used by the request failed
//!
//! Every `execute` wraps these in a [`ServiceError`] tagged with the
//! [`ServiceKind`] of the request. A service that answers with a non-success
//! status is *not* an error; see [`HasCloudFields::has_succeeded`](crate::cloud::response_traits::HasCloudFields::has_succeeded).

use std::fmt;
use thiserror::Error;

/// Local request validation and payload decoding errors.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("missing required parameter(s): {}", .0.join(", "))]
    MissingParameters(Vec<String>),

    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    #[error("invalid response payload: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Connection configuration errors, raised while resolving the endpoint.
#[derive(Debug, Error)]
pub enum EnvironmentErr {
    #[error("no base URL configured; call Environment::set_defaults or supply an environment")]
    MissingBaseUrl,

    #[error("invalid base URL '{url}': {cause}")]
    InvalidBaseUrl { url: String, cause: String },

    #[error("no access key configured")]
    MissingAccessKey,

    #[error("invalid proxy configuration: {0}")]
    InvalidProxy(String),
}

/// Connectivity failures raised before any response could be built.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("invalid request URL '{0}'")]
    InvalidUrl(String),

    #[error("{0}")]
    Transport(String),
}

/// Local file or stream failures.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("output sink is a directory: {0}")]
    SinkIsDirectory(String),
}

/// Umbrella error for the framework.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("Environment error: {0}")]
    Environment(#[from] EnvironmentErr),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(IoError::IOError(err))
    }
}

/// Service family a request belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Template,
    Image,
    File,
    Render,
    Ping,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ServiceKind::Template => "template",
            ServiceKind::Image => "image",
            ServiceKind::File => "file",
            ServiceKind::Render => "render",
            ServiceKind::Ping => "ping",
        })
    }
}

/// Error returned by `execute`: the underlying [`Error`] tagged with the
/// service family of the request that failed.
#[derive(Debug, Error)]
#[error("{service} service call failed: {source}")]
pub struct ServiceError {
    service: ServiceKind,
    #[source]
    source: Error,
}

impl ServiceError {
    pub fn new(service: ServiceKind, source: impl Into<Error>) -> Self {
        Self {
            service,
            source: source.into(),
        }
    }

    pub fn service(&self) -> ServiceKind {
        self.service
    }

    pub fn error(&self) -> &Error {
        &self.source
    }

    pub fn into_inner(self) -> Error {
        self.source
    }

    /// Names of the required parameters that were unset, if this is a
    /// validation failure.
    pub fn missing_parameters(&self) -> Option<&[String]> {
        match &self.source {
            Error::Validation(ValidationErr::MissingParameters(names)) => Some(names),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.source, Error::Validation(_))
    }

    pub fn is_environment(&self) -> bool {
        matches!(self.source, Error::Environment(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self.source, Error::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameters_message_names_every_parameter() {
        let err = ValidationErr::MissingParameters(vec!["templateName".into(), "outputName".into()]);
        assert_eq!(
            err.to_string(),
            "missing required parameter(s): templateName, outputName"
        );
    }

    #[test]
    fn test_service_error_exposes_kind_and_source() {
        let err = ServiceError::new(
            ServiceKind::Image,
            ValidationErr::MissingParameters(vec!["imageName".into()]),
        );
        assert_eq!(err.service(), ServiceKind::Image);
        assert!(err.is_validation());
        assert!(!err.is_network());
        assert_eq!(err.missing_parameters(), Some(&["imageName".to_string()][..]));
        assert!(err.to_string().starts_with("image service call failed"));
    }

    #[test]
    fn test_io_error_converts_into_error() {
        let err: Error = std::io::Error::other("disk full").into();
        assert!(matches!(err, Error::Io(IoError::IOError(_))));
    }
}
