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

//! Traits shared by every typed response.
//!
//! Each response embeds a [`CloudResponse`] holding the outcome of the call
//! (status, success flag and messages) and adds its own payload next to it:
//!
//! ```rust,ignore
//! pub struct GetTemplateDetailsResponse {
//!     cloud: CloudResponse,
//!     template_details: Option<TemplateDetails>,
//! }
//! impl_has_cloud_fields!(GetTemplateDetailsResponse);
//! ```
//!
//! [`HasCloudFields`] then gives uniform access to the outcome:
//!
//! ```rust,ignore
//! let resp = Template::get_details().template_name("a.docx").execute().await?;
//! if !resp.has_succeeded() {
//!     eprintln!("{}: {:?}", resp.status(), resp.short_msg());
//! }
//! ```

use crate::cloud::error::ValidationErr;
use crate::cloud::transport::RawResponse;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

#[macro_export]
/// Implements the `HasCloudFields` trait for the specified types.
macro_rules! impl_has_cloud_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::cloud::response_traits::HasCloudFields for $ty {
                #[inline]
                fn cloud(&self) -> &$crate::cloud::response_traits::CloudResponse {
                    &self.cloud
                }
            }
        )*
    };
}

#[macro_export]
/// Implements `FromCloudResponse` for responses that carry no payload beyond
/// the outcome of the call.
macro_rules! impl_from_cloud_response {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::cloud::response_traits::FromCloudResponse for $ty {
                fn from_cloud_response(
                    raw: $crate::cloud::transport::RawResponse,
                ) -> Result<Self, $crate::cloud::error::ValidationErr> {
                    Ok(Self {
                        cloud: $crate::cloud::response_traits::CloudResponse::from_raw(&raw),
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements `FromCloudResponse` and `HasDocument` for responses whose
/// payload is a binary document.
macro_rules! impl_document_response {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::cloud::response_traits::FromCloudResponse for $ty {
                fn from_cloud_response(
                    raw: $crate::cloud::transport::RawResponse,
                ) -> Result<Self, $crate::cloud::error::ValidationErr> {
                    let cloud = $crate::cloud::response_traits::CloudResponse::from_raw(&raw);
                    let document = $crate::cloud::response_traits::Document::from_raw(&cloud, raw);
                    Ok(Self { cloud, document })
                }
            }

            impl $crate::cloud::response_traits::HasDocument for $ty {
                #[inline]
                fn document_info(&self) -> &$crate::cloud::response_traits::Document {
                    &self.document
                }
            }
        )*
    };
}

/// Outcome of a service call, common to every response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CloudResponse {
    status: u16,
    short_msg: Option<String>,
    long_msg: Option<String>,
}

impl CloudResponse {
    pub fn new(status: u16, short_msg: Option<String>, long_msg: Option<String>) -> Self {
        Self {
            status,
            short_msg,
            long_msg,
        }
    }

    /// Reads the outcome from a raw answer.
    ///
    /// Messages come from the `shortMsg` and `longMsg` members of a JSON body.
    /// A failed call without a `shortMsg` gets the reason phrase of its status.
    pub fn from_raw(raw: &RawResponse) -> Self {
        let json = json_body(raw);
        let message = |name: &str| {
            json.as_ref()
                .and_then(|v| v.get(name))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };

        let mut short_msg = message("shortMsg");
        let long_msg = message("longMsg");
        if short_msg.is_none() && !is_success(raw.status) {
            short_msg = raw.reason.clone().or_else(|| {
                http::StatusCode::from_u16(raw.status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .map(str::to_owned)
            });
        }

        Self {
            status: raw.status,
            short_msg,
            long_msg,
        }
    }
}

impl fmt::Display for CloudResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status={}", self.status)?;
        if let Some(s) = &self.short_msg {
            write!(f, " shortMsg={s}")?;
        }
        if let Some(l) = &self.long_msg {
            write!(f, " longMsg={l}")?;
        }
        Ok(())
    }
}

impl HasCloudFields for CloudResponse {
    fn cloud(&self) -> &CloudResponse {
        self
    }
}

/// Success is any 2xx status.
pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

pub trait HasCloudFields {
    fn cloud(&self) -> &CloudResponse;

    /// HTTP status returned by the service.
    #[inline]
    fn status(&self) -> u16 {
        self.cloud().status
    }

    #[inline]
    fn has_succeeded(&self) -> bool {
        is_success(self.cloud().status)
    }

    /// Short description of the outcome, always present on failure.
    #[inline]
    fn short_msg(&self) -> Option<&str> {
        self.cloud().short_msg.as_deref()
    }

    /// Further detail on a failure, when the service supplied any.
    #[inline]
    fn long_msg(&self) -> Option<&str> {
        self.cloud().long_msg.as_deref()
    }
}

/// Builds a typed response from the raw answer of a service.
pub trait FromCloudResponse: HasCloudFields + Sized + Send {
    fn from_cloud_response(raw: RawResponse) -> Result<Self, ValidationErr>;
}

/// Binary payload of a get or render call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    content_type: Option<String>,
    bytes_written: Option<u64>,
    content: Bytes,
}

impl Document {
    /// Empty unless `cloud` succeeded. A payload streamed into a sink keeps
    /// only its size.
    pub fn from_raw(cloud: &CloudResponse, raw: RawResponse) -> Self {
        if !cloud.has_succeeded() {
            return Self::default();
        }
        Self {
            content_type: raw.content_type,
            bytes_written: raw.bytes_written,
            content: if raw.bytes_written.is_some() {
                Bytes::new()
            } else {
                raw.body
            },
        }
    }
}

pub trait HasDocument: HasCloudFields {
    fn document_info(&self) -> &Document;

    /// Bytes written to the output sink, if one was set.
    #[inline]
    fn bytes_written(&self) -> Option<u64> {
        self.document_info().bytes_written
    }

    /// Document held in memory when no output sink was set.
    #[inline]
    fn document(&self) -> Option<&Bytes> {
        let d = self.document_info();
        (self.has_succeeded() && d.bytes_written.is_none()).then_some(&d.content)
    }

    #[inline]
    fn content_type(&self) -> Option<&str> {
        self.document_info().content_type.as_deref()
    }
}

/// Parsed JSON body, if the answer carried one.
pub(crate) fn json_body(raw: &RawResponse) -> Option<Value> {
    if raw.body.is_empty() {
        return None;
    }
    if !raw.is_json() && !raw.body.trim_ascii_start().starts_with(b"{") {
        return None;
    }
    serde_json::from_slice(&raw.body).ok()
}

/// Decodes the whole body of a successful JSON answer into an envelope.
///
/// Unsuccessful calls and empty bodies yield `T::default()`.
pub(crate) fn payload<T: DeserializeOwned + Default>(
    cloud: &CloudResponse,
    raw: &RawResponse,
) -> Result<T, ValidationErr> {
    if !cloud.has_succeeded() || raw.body.is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(&raw.body)?)
}

/// Decodes member `name` of a successful JSON answer.
///
/// Returns `None` for unsuccessful calls and for answers without the member;
/// a body that is not valid JSON is an error.
pub(crate) fn payload_field<T: DeserializeOwned>(
    cloud: &CloudResponse,
    raw: &RawResponse,
    name: &str,
) -> Result<Option<T>, ValidationErr> {
    if !cloud.has_succeeded() || raw.body.is_empty() {
        return Ok(None);
    }
    let mut value: Value = serde_json::from_slice(&raw.body)?;
    match value.get_mut(name).map(Value::take) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => Ok(Some(serde_json::from_value(v)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_range() {
        for status in [200, 201, 204, 299] {
            assert!(is_success(status), "{status}");
        }
        for status in [100, 199, 300, 304, 400, 404, 500] {
            assert!(!is_success(status), "{status}");
        }
    }

    #[test]
    fn test_messages_from_json_body() {
        let raw = RawResponse::json(
            400,
            &json!({"succeeded": false, "shortMsg": "Bad request", "longMsg": "templateName is invalid"}),
        );
        let cloud = CloudResponse::from_raw(&raw);
        assert!(!cloud.has_succeeded());
        assert_eq!(cloud.short_msg(), Some("Bad request"));
        assert_eq!(cloud.long_msg(), Some("templateName is invalid"));
    }

    #[test]
    fn test_reason_phrase_fallback() {
        let cloud = CloudResponse::from_raw(&RawResponse::new(404, "<html>gone</html>"));
        assert_eq!(cloud.status(), 404);
        assert_eq!(cloud.short_msg(), Some("Not Found"));
        assert_eq!(cloud.long_msg(), None);
        assert_eq!(cloud.to_string(), "status=404 shortMsg=Not Found");
    }

    #[test]
    fn test_success_without_message() {
        let cloud = CloudResponse::from_raw(&RawResponse::new(200, "%PDF-1.7"));
        assert!(cloud.has_succeeded());
        assert_eq!(cloud.short_msg(), None);
    }

    #[test]
    fn test_payload_field_rejects_malformed_json() {
        let raw = RawResponse::new(200, "{not json");
        let cloud = CloudResponse::from_raw(&raw);
        let r: Result<Option<Value>, _> = payload_field(&cloud, &raw, "templateDetails");
        assert!(matches!(r, Err(ValidationErr::JsonError(_))));
    }

    #[derive(Debug, Default, serde::Deserialize)]
    #[serde(default)]
    struct Envelope {
        name: String,
    }

    #[test]
    fn test_payload_defaults_on_failure() {
        let raw = RawResponse::json(404, &json!({"name": "x"}));
        let cloud = CloudResponse::from_raw(&raw);
        let e: Envelope = payload(&cloud, &raw).unwrap();
        assert_eq!(e.name, "");

        let raw = RawResponse::json(200, &json!({"name": "x"}));
        let cloud = CloudResponse::from_raw(&raw);
        let e: Envelope = payload(&cloud, &raw).unwrap();
        assert_eq!(e.name, "x");
    }

    #[test]
    fn test_payload_field_ignored_on_failure() {
        let raw = RawResponse::json(500, &json!({"templateDetails": {"name": "x"}}));
        let cloud = CloudResponse::from_raw(&raw);
        let r: Option<Value> = payload_field(&cloud, &raw, "templateDetails").unwrap();
        assert!(r.is_none());
    }
}
