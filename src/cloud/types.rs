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

//! Detail records returned by the template, image and file services

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A template stored in the cloud account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateDetails {
    pub name: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub last_modified_millis_since_epoch: i64,
    #[serde(rename = "lastModifiedISO8601")]
    pub last_modified_iso8601: String,
    #[serde(deserialize_with = "lenient::u64")]
    pub size_bytes: u64,
    pub md5: String,
    pub template_plain_text_field_prefix: Option<String>,
    pub template_plain_text_field_suffix: Option<String>,
    #[serde(deserialize_with = "lenient::bool")]
    pub template_dev_mode: bool,
    #[serde(deserialize_with = "lenient::bool")]
    pub template_has_errors: bool,
    pub template_description: Option<String>,
}

impl TemplateDetails {
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        last_modified(self.last_modified_millis_since_epoch, &self.last_modified_iso8601)
    }
}

impl fmt::Display for TemplateDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TemplateDetails [name={}, lastModified={}, sizeBytes={}, md5={}, devMode={}, hasErrors={}",
            self.name,
            self.last_modified_iso8601,
            self.size_bytes,
            self.md5,
            self.template_dev_mode,
            self.template_has_errors
        )?;
        if let (Some(p), Some(s)) = (
            &self.template_plain_text_field_prefix,
            &self.template_plain_text_field_suffix,
        ) {
            write!(f, ", fieldDelimiters={p}...{s}")?;
        }
        if let Some(d) = &self.template_description {
            write!(f, ", description={d}")?;
        }
        f.write_str("]")
    }
}

/// An image stored in the cloud account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageDetails {
    pub name: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub last_modified_millis_since_epoch: i64,
    #[serde(rename = "lastModifiedISO8601")]
    pub last_modified_iso8601: String,
    #[serde(deserialize_with = "lenient::u64")]
    pub size_bytes: u64,
    pub md5: String,
}

impl ImageDetails {
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        last_modified(self.last_modified_millis_since_epoch, &self.last_modified_iso8601)
    }
}

impl fmt::Display for ImageDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ImageDetails [name={}, lastModified={}, sizeBytes={}, md5={}]",
            self.name, self.last_modified_iso8601, self.size_bytes, self.md5
        )
    }
}

/// A stored file, typically a previously rendered document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileDetails {
    pub name: String,
    #[serde(deserialize_with = "lenient::i64")]
    pub last_modified_millis_since_epoch: i64,
    #[serde(rename = "lastModifiedISO8601")]
    pub last_modified_iso8601: String,
    #[serde(deserialize_with = "lenient::u64")]
    pub size_bytes: u64,
    pub content_type: Option<String>,
    pub meta_data: Option<Value>,
}

impl FileDetails {
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        last_modified(self.last_modified_millis_since_epoch, &self.last_modified_iso8601)
    }
}

impl fmt::Display for FileDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FileDetails [name={}, lastModified={}, sizeBytes={}",
            self.name, self.last_modified_iso8601, self.size_bytes
        )?;
        if let Some(ct) = &self.content_type {
            write!(f, ", contentType={ct}")?;
        }
        if let Some(m) = &self.meta_data {
            write!(f, ", metaData={m}")?;
        }
        f.write_str("]")
    }
}

/// Prefers the epoch millis, falling back to the ISO-8601 text.
fn last_modified(millis: i64, iso8601: &str) -> Option<DateTime<Utc>> {
    if millis > 0
        && let Some(t) = DateTime::from_timestamp_millis(millis)
    {
        return Some(t);
    }
    DateTime::parse_from_rfc3339(iso8601.trim())
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Accepts numbers and booleans sent either natively or as strings.
pub(crate) mod lenient {
    use super::*;
    use serde::de::Error;

    fn text(v: &Value) -> Option<&str> {
        v.as_str().map(str::trim)
    }

    pub fn i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        let v = Value::deserialize(d)?;
        match &v {
            Value::Null => Ok(0),
            Value::Number(n) => n.as_i64().ok_or_else(|| D::Error::custom(format!("not an integer: {n}"))),
            _ => text(&v)
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| D::Error::custom(format!("not an integer: {v}"))),
        }
    }

    pub fn u64<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        let v = Value::deserialize(d)?;
        match &v {
            Value::Null => Ok(0),
            Value::Number(n) => n.as_u64().ok_or_else(|| D::Error::custom(format!("not a size: {n}"))),
            _ => text(&v)
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| D::Error::custom(format!("not a size: {v}"))),
        }
    }

    pub fn opt_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        let v = Value::deserialize(d)?;
        let n = match &v {
            Value::Null => return Ok(None),
            Value::Number(n) => n.as_u64(),
            _ => match text(&v) {
                Some("") => return Ok(None),
                t => t.and_then(|s| s.parse().ok()),
            },
        };
        n.and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("not a page size: {v}")))
    }

    pub fn bool<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let v = Value::deserialize(d)?;
        match &v {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(*b),
            _ => text(&v)
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| D::Error::custom(format!("not a boolean: {v}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_details_from_json() {
        let td: TemplateDetails = serde_json::from_value(json!({
            "name": "samples/WelcomeTemplate.docx",
            "lastModifiedMillisSinceEpoch": 1700000000000i64,
            "lastModifiedISO8601": "2023-11-14T22:13:20Z",
            "sizeBytes": 12345,
            "md5": "9e107d9d372bb6826bd81d3542a419d6",
            "templatePlainTextFieldPrefix": "<<",
            "templatePlainTextFieldSuffix": ">>",
            "templateDevMode": false,
            "templateHasErrors": "false"
        }))
        .unwrap();

        assert_eq!(td.size_bytes, 12345);
        assert_eq!(td.template_plain_text_field_prefix.as_deref(), Some("<<"));
        assert!(!td.template_has_errors);
        assert_eq!(td.template_description, None);
        assert_eq!(
            td.last_modified().unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
    }

    #[test]
    fn test_numbers_as_strings() {
        let img: ImageDetails = serde_json::from_value(json!({
            "name": "logo.png",
            "sizeBytes": "2048",
            "lastModifiedMillisSinceEpoch": "0",
            "lastModifiedISO8601": "2024-02-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(img.size_bytes, 2048);
        assert_eq!(
            img.last_modified().unwrap().to_rfc3339(),
            "2024-02-01T10:00:00+00:00"
        );
    }

    #[test]
    fn test_invalid_size_is_an_error() {
        let r: Result<FileDetails, _> = serde_json::from_value(json!({"sizeBytes": "big"}));
        assert!(r.is_err());
    }

    #[test]
    fn test_file_details_display() {
        let fd = FileDetails {
            name: "out/report.pdf".into(),
            size_bytes: 10,
            content_type: Some("application/pdf".into()),
            ..Default::default()
        };
        assert_eq!(
            fd.to_string(),
            "FileDetails [name=out/report.pdf, lastModified=, sizeBytes=10, contentType=application/pdf]"
        );
    }
}
