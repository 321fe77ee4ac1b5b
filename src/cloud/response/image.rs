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
use crate::cloud::types::{ImageDetails, lenient};
use crate::{impl_document_response, impl_from_cloud_response, impl_has_cloud_fields};
use serde::Deserialize;
use std::fmt;

/// Response of [`Image::list`](crate::cloud::client::Image::list).
#[derive(Clone, Debug)]
pub struct ListImagesResponse {
    cloud: CloudResponse,
    images: Vec<ImageDetails>,
    image_list_stale: bool,
}
impl_has_cloud_fields!(ListImagesResponse);

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ImageList {
    images: Option<Vec<ImageDetails>>,
    #[serde(deserialize_with = "lenient::bool")]
    image_list_stale: bool,
}

impl FromCloudResponse for ListImagesResponse {
    fn from_cloud_response(raw: RawResponse) -> Result<Self, ValidationErr> {
        let cloud = CloudResponse::from_raw(&raw);
        let list: ImageList = payload(&cloud, &raw)?;
        Ok(Self {
            images: list.images.unwrap_or_default(),
            image_list_stale: list.image_list_stale,
            cloud,
        })
    }
}

impl ListImagesResponse {
    pub fn images(&self) -> &[ImageDetails] {
        &self.images
    }

    pub fn image_list_stale(&self) -> bool {
        self.image_list_stale
    }
}

impl fmt::Display for ListImagesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.cloud)?;
        write!(f, "imageListStale: {}", self.image_list_stale)?;
        for i in &self.images {
            write!(f, "\n{i}")?;
        }
        Ok(())
    }
}

/// Response of [`Image::get`](crate::cloud::client::Image::get).
#[derive(Clone, Debug)]
pub struct GetImageResponse {
    cloud: CloudResponse,
    document: Document,
}
impl_has_cloud_fields!(GetImageResponse);
impl_document_response!(GetImageResponse);

impl fmt::Display for GetImageResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GetImageResponse [{}]", self.cloud)
    }
}

/// Response of [`Image::upload`](crate::cloud::client::Image::upload).
#[derive(Clone, Debug)]
pub struct UploadImageResponse {
    cloud: CloudResponse,
    image_details: Option<ImageDetails>,
}
impl_has_cloud_fields!(UploadImageResponse);

impl FromCloudResponse for UploadImageResponse {
    fn from_cloud_response(raw: RawResponse) -> Result<Self, ValidationErr> {
        let cloud = CloudResponse::from_raw(&raw);
        Ok(Self {
            image_details: payload_field(&cloud, &raw, "imageDetails")?,
            cloud,
        })
    }
}

impl UploadImageResponse {
    pub fn image_details(&self) -> Option<&ImageDetails> {
        self.image_details.as_ref()
    }
}

impl fmt::Display for UploadImageResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cloud)?;
        if let Some(i) = &self.image_details {
            write!(f, "\n{i}")?;
        }
        Ok(())
    }
}

/// Response of [`Image::delete`](crate::cloud::client::Image::delete).
#[derive(Clone, Debug)]
pub struct DeleteImageResponse {
    cloud: CloudResponse,
}
impl_has_cloud_fields!(DeleteImageResponse);
impl_from_cloud_response!(DeleteImageResponse);

impl fmt::Display for DeleteImageResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeleteImageResponse [{}]", self.cloud)
    }
}
