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
use crate::cloud::response_traits::{CloudResponse, Document, FromCloudResponse, payload};
use crate::cloud::transport::RawResponse;
use crate::cloud::types::{FileDetails, lenient};
use crate::{impl_document_response, impl_from_cloud_response, impl_has_cloud_fields};
use serde::Deserialize;
use std::fmt;

/// Response of [`FileStorage::list`](crate::cloud::client::FileStorage::list).
#[derive(Clone, Debug)]
pub struct ListFilesResponse {
    cloud: CloudResponse,
    files: Vec<FileDetails>,
    next_page_token: Option<String>,
    page_size: Option<u32>,
}
impl_has_cloud_fields!(ListFilesResponse);

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FileList {
    files: Option<Vec<FileDetails>>,
    next_page_token: Option<String>,
    #[serde(deserialize_with = "lenient::opt_u32")]
    page_size: Option<u32>,
}

impl FromCloudResponse for ListFilesResponse {
    fn from_cloud_response(raw: RawResponse) -> Result<Self, ValidationErr> {
        let cloud = CloudResponse::from_raw(&raw);
        let list: FileList = payload(&cloud, &raw)?;
        Ok(Self {
            files: list.files.unwrap_or_default(),
            next_page_token: list.next_page_token.filter(|t| !t.is_empty()),
            page_size: list.page_size,
            cloud,
        })
    }
}

impl ListFilesResponse {
    pub fn files(&self) -> &[FileDetails] {
        &self.files
    }

    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}

impl fmt::Display for ListFilesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cloud)?;
        if let Some(t) = &self.next_page_token {
            write!(f, "\nnextPageToken: {t}")?;
        }
        if let Some(p) = self.page_size {
            write!(f, "\npageSize: {p}")?;
        }
        for file in &self.files {
            write!(f, "\n{file}")?;
        }
        Ok(())
    }
}

/// Response of [`FileStorage::get`](crate::cloud::client::FileStorage::get).
#[derive(Clone, Debug)]
pub struct GetFileResponse {
    cloud: CloudResponse,
    document: Document,
}
impl_has_cloud_fields!(GetFileResponse);
impl_document_response!(GetFileResponse);

impl fmt::Display for GetFileResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GetFileResponse [{}]", self.cloud)
    }
}

/// Response of [`FileStorage::delete`](crate::cloud::client::FileStorage::delete).
#[derive(Clone, Debug)]
pub struct DeleteFilesResponse {
    cloud: CloudResponse,
}
impl_has_cloud_fields!(DeleteFilesResponse);
impl_from_cloud_response!(DeleteFilesResponse);

impl fmt::Display for DeleteFilesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeleteFilesResponse [{}]", self.cloud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::response_traits::{HasCloudFields, HasDocument};
    use serde_json::json;

    #[test]
    fn test_list_files_last_page_has_no_token() {
        let raw = RawResponse::json(
            200,
            &json!({"files": [{"name": "a.pdf"}], "nextPageToken": "", "pageSize": 100}),
        );
        let resp = ListFilesResponse::from_cloud_response(raw).unwrap();
        assert_eq!(resp.files()[0].name, "a.pdf");
        assert_eq!(resp.next_page_token(), None);
        assert_eq!(resp.page_size(), Some(100));
    }

    #[test]
    fn test_list_files_page_size_as_text() {
        let raw = RawResponse::json(200, &json!({"files": [], "pageSize": "50"}));
        let resp = ListFilesResponse::from_cloud_response(raw).unwrap();
        assert_eq!(resp.page_size(), Some(50));

        let raw = RawResponse::json(200, &json!({"pageSize": "lots"}));
        assert!(matches!(
            ListFilesResponse::from_cloud_response(raw),
            Err(ValidationErr::JsonError(_))
        ));
    }

    #[test]
    fn test_get_file_reports_streamed_size() {
        let mut raw = RawResponse::new(200, bytes::Bytes::new());
        raw.content_type = Some("application/pdf".into());
        raw.bytes_written = Some(4096);
        let resp = GetFileResponse::from_cloud_response(raw).unwrap();
        assert!(resp.has_succeeded());
        assert_eq!(resp.bytes_written(), Some(4096));
        assert_eq!(resp.content_type(), Some("application/pdf"));
        assert!(resp.document().is_none());
    }

    #[test]
    fn test_get_file_failure_has_no_document() {
        let resp = GetFileResponse::from_cloud_response(RawResponse::new(404, "")).unwrap();
        assert_eq!(resp.short_msg(), Some("Not Found"));
        assert!(resp.document().is_none());
        assert_eq!(resp.bytes_written(), None);
    }
}
