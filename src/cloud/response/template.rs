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

use crate::cloud::error::ValidationErr;
use crate::cloud::response_traits::{
    CloudResponse, Document, FromCloudResponse, payload, payload_field,
};
use crate::cloud::transport::RawResponse;
use crate::cloud::types::{TemplateDetails, lenient};
use crate::{impl_document_response, impl_from_cloud_response, impl_has_cloud_fields};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Response of [`Template::list`](crate::cloud::client::Template::list).
#[derive(Clone, Debug)]
pub struct ListTemplatesResponse {
    cloud: CloudResponse,
    templates: Vec<TemplateDetails>,
    template_list_stale: bool,
    next_page_token: Option<String>,
    page_size: Option<u32>,
}
impl_has_cloud_fields!(ListTemplatesResponse);

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TemplateList {
    templates: Option<Vec<TemplateDetails>>,
    #[serde(deserialize_with = "lenient::bool")]
    template_list_stale: bool,
    next_page_token: Option<String>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    page_size: Option<u32>,
}

impl FromCloudResponse for ListTemplatesResponse {
    fn from_cloud_response(raw: RawResponse) -> Result<Self, ValidationErr> {
        let cloud = CloudResponse::from_raw(&raw);
        let list: TemplateList = payload(&cloud, &raw)?;
        Ok(Self {
            templates: list.templates.unwrap_or_default(),
            template_list_stale: list.template_list_stale,
            next_page_token: list.next_page_token.filter(|t| !t.is_empty()),
            page_size: list.page_size,
            cloud,
        })
    }
}

impl ListTemplatesResponse {
    pub fn templates(&self) -> &[TemplateDetails] {
        &self.templates
    }

    /// `true` when the service answered from a list that may not reflect the
    /// latest uploads.
    pub fn template_list_stale(&self) -> bool {
        self.template_list_stale
    }

    /// Token for the next page, absent on the last one.
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}

impl fmt::Display for ListTemplatesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.cloud)?;
        write!(f, "templateListStale: {}", self.template_list_stale)?;
        if let Some(t) = &self.next_page_token {
            write!(f, "\nnextPageToken: {t}")?;
        }
        if let Some(p) = self.page_size {
            write!(f, "\npageSize: {p}")?;
        }
        for t in &self.templates {
            write!(f, "\n{t}")?;
        }
        Ok(())
    }
}

/// Response of [`Template::get`](crate::cloud::client::Template::get).
///
/// Several templates are delivered by the service as a single zip archive.
#[derive(Clone, Debug)]
pub struct GetTemplateResponse {
    cloud: CloudResponse,
    document: Document,
}
impl_has_cloud_fields!(GetTemplateResponse);
impl_document_response!(GetTemplateResponse);

impl fmt::Display for GetTemplateResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GetTemplateResponse [{}]", self.cloud)
    }
}

/// Response of [`Template::get_details`](crate::cloud::client::Template::get_details).
#[derive(Clone, Debug)]
pub struct GetTemplateDetailsResponse {
    cloud: CloudResponse,
    template_details: Option<TemplateDetails>,
}
impl_has_cloud_fields!(GetTemplateDetailsResponse);

impl FromCloudResponse for GetTemplateDetailsResponse {
    fn from_cloud_response(raw: RawResponse) -> Result<Self, ValidationErr> {
        let cloud = CloudResponse::from_raw(&raw);
        Ok(Self {
            template_details: payload_field(&cloud, &raw, "templateDetails")?,
            cloud,
        })
    }
}

impl GetTemplateDetailsResponse {
    pub fn template_details(&self) -> Option<&TemplateDetails> {
        self.template_details.as_ref()
    }
}

impl fmt::Display for GetTemplateDetailsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cloud)?;
        if let Some(td) = &self.template_details {
            write!(f, "\n{td}")?;
        }
        Ok(())
    }
}

/// Response of [`Template::get_structure`](crate::cloud::client::Template::get_structure).
#[derive(Clone, Debug)]
pub struct GetTemplateStructureResponse {
    cloud: CloudResponse,
    template_structure: Option<String>,
}
impl_has_cloud_fields!(GetTemplateStructureResponse);

impl FromCloudResponse for GetTemplateStructureResponse {
    fn from_cloud_response(raw: RawResponse) -> Result<Self, ValidationErr> {
        let cloud = CloudResponse::from_raw(&raw);
        let structure: Option<Value> = payload_field(&cloud, &raw, "templateStructure")?;
        Ok(Self {
            template_structure: structure.map(|v| match v {
                Value::String(s) => s,
                other => other.to_string(),
            }),
            cloud,
        })
    }
}

impl GetTemplateStructureResponse {
    /// Structure of the template as JSON text.
    pub fn template_structure(&self) -> Option<&str> {
        self.template_structure.as_deref()
    }

    /// Structure of the template parsed as JSON.
    pub fn template_structure_json(&self) -> Result<Option<Value>, ValidationErr> {
        match &self.template_structure {
            Some(s) => Ok(Some(serde_json::from_str(s)?)),
            None => Ok(None),
        }
    }
}

impl fmt::Display for GetTemplateStructureResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cloud)?;
        if let Some(s) = &self.template_structure {
            write!(f, "\ntemplateStructure: {s}")?;
        }
        Ok(())
    }
}

/// Response of [`Template::upload`](crate::cloud::client::Template::upload).
#[derive(Clone, Debug)]
pub struct UploadTemplateResponse {
    cloud: CloudResponse,
    template_details: Option<TemplateDetails>,
}
impl_has_cloud_fields!(UploadTemplateResponse);

impl FromCloudResponse for UploadTemplateResponse {
    fn from_cloud_response(raw: RawResponse) -> Result<Self, ValidationErr> {
        let cloud = CloudResponse::from_raw(&raw);
        Ok(Self {
            template_details: payload_field(&cloud, &raw, "templateDetails")?,
            cloud,
        })
    }
}

impl UploadTemplateResponse {
    /// Details of the stored template, including any errors found in it.
    pub fn template_details(&self) -> Option<&TemplateDetails> {
        self.template_details.as_ref()
    }
}

impl fmt::Display for UploadTemplateResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cloud)?;
        if let Some(td) = &self.template_details {
            write!(f, "\n{td}")?;
        }
        Ok(())
    }
}

/// Response of [`Template::delete`](crate::cloud::client::Template::delete).
#[derive(Clone, Debug)]
pub struct DeleteTemplateResponse {
    cloud: CloudResponse,
}
impl_has_cloud_fields!(DeleteTemplateResponse);
impl_from_cloud_response!(DeleteTemplateResponse);

impl fmt::Display for DeleteTemplateResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeleteTemplateResponse [{}]", self.cloud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::response_traits::{HasCloudFields, HasDocument};
    use serde_json::json;

    #[test]
    fn test_list_templates_payload() {
        let raw = RawResponse::json(
            200,
            &json!({
                "succeeded": true,
                "templateListStale": true,
                "nextPageToken": "abc",
                "pageSize": 2,
                "templates": [
                    {"name": "a.docx", "sizeBytes": 10},
                    {"name": "b.docx", "sizeBytes": 20}
                ]
            }),
        );
        let resp = ListTemplatesResponse::from_cloud_response(raw).unwrap();
        assert!(resp.has_succeeded());
        assert!(resp.template_list_stale());
        assert_eq!(resp.next_page_token(), Some("abc"));
        assert_eq!(resp.page_size(), Some(2));
        let names: Vec<_> = resp.templates().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a.docx", "b.docx"]);
    }

    #[test]
    fn test_list_templates_flags_as_text() {
        let raw = RawResponse::json(
            200,
            &json!({"templateListStale": "true", "pageSize": "25", "nextPageToken": null}),
        );
        let resp = ListTemplatesResponse::from_cloud_response(raw).unwrap();
        assert!(resp.template_list_stale());
        assert_eq!(resp.page_size(), Some(25));
        assert_eq!(resp.next_page_token(), None);
        assert!(resp.templates().is_empty());
    }

    #[test]
    fn test_template_details_absent_on_failure() {
        let raw = RawResponse::json(
            404,
            &json!({"succeeded": false, "shortMsg": "Template not found"}),
        );
        let resp = GetTemplateDetailsResponse::from_cloud_response(raw).unwrap();
        assert!(!resp.has_succeeded());
        assert_eq!(resp.short_msg(), Some("Template not found"));
        assert!(resp.template_details().is_none());
    }

    #[test]
    fn test_template_structure_kept_as_text() {
        let raw = RawResponse::json(
            200,
            &json!({"succeeded": true, "templateStructure": {"fields": ["name", "date"]}}),
        );
        let resp = GetTemplateStructureResponse::from_cloud_response(raw).unwrap();
        let parsed = resp.template_structure_json().unwrap().unwrap();
        assert_eq!(parsed, json!({"fields": ["name", "date"]}));
    }

    #[test]
    fn test_get_template_buffers_document_without_sink() {
        let raw = RawResponse::new(200, "PK\u{3}\u{4}zip");
        let resp = GetTemplateResponse::from_cloud_response(raw).unwrap();
        assert_eq!(resp.document().map(|b| b.len()), Some(7));
        assert_eq!(resp.bytes_written(), None);
    }
}
