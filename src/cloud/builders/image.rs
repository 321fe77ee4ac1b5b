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

use crate::cloud::params::ParamValue;
use crate::cloud::request::FileService;
use crate::cloud::response::{
    DeleteImageResponse, GetImageResponse, ListImagesResponse, UploadImageResponse,
};
use bytes::Bytes;
use std::path::PathBuf;

pub const IMAGE_NAME: &str = "imageName";
pub const IMAGE_FILE: &str = "imageFile";
const IMAGE_DESCRIPTION: &str = "imageDescription";
const FOLDER: &str = "folder";
const IS_SYSTEM_IMAGE: &str = "isSystemImage";

cloud_service! {
    /// Request builder for [`Image::list`](crate::cloud::client::Image::list).
    ListImages => ListImagesPhantomData {
        path: "listImages",
        kind: Image,
        required: [],
        response: ListImagesResponse,
    }
}

impl ListImages {
    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.params_mut().set(FOLDER, ParamValue::Text(folder.into()));
        self
    }
}

cloud_service! {
    /// Request builder for [`Image::get`](crate::cloud::client::Image::get).
    GetImage => GetImagePhantomData {
        path: "getImage",
        kind: Image,
        required: [IMAGE_NAME],
        response: GetImageResponse,
    }
}
impl FileService for GetImagePhantomData {}

impl GetImage {
    /// Adds an image to fetch. Several images arrive as one zip archive.
    pub fn image_name(mut self, name: impl Into<String>) -> Self {
        self.params_mut().add(IMAGE_NAME, name);
        self
    }

    pub fn image_names<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.params_mut().set(IMAGE_NAME, names);
        self
    }

    pub fn is_system_image(mut self, system: bool) -> Self {
        self.params_mut().set(IS_SYSTEM_IMAGE, system);
        self
    }
}

cloud_service! {
    /// Request builder for [`Image::upload`](crate::cloud::client::Image::upload).
    UploadImage => UploadImagePhantomData {
        path: "uploadImage",
        kind: Image,
        required: [IMAGE_FILE],
        response: UploadImageResponse,
    }
}

impl UploadImage {
    pub fn image_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.params_mut().set(IMAGE_FILE, ParamValue::File(path.into()));
        self
    }

    pub fn image_content(mut self, file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        self.params_mut().set(
            IMAGE_FILE,
            ParamValue::Bytes {
                file_name: file_name.into(),
                content: content.into(),
            },
        );
        self
    }

    pub fn image_name(mut self, name: impl Into<String>) -> Self {
        self.params_mut().set(IMAGE_NAME, ParamValue::Text(name.into()));
        self
    }

    pub fn image_description(mut self, description: impl Into<String>) -> Self {
        self.params_mut().set(IMAGE_DESCRIPTION, ParamValue::Text(description.into()));
        self
    }
}

cloud_service! {
    /// Request builder for [`Image::delete`](crate::cloud::client::Image::delete).
    DeleteImage => DeleteImagePhantomData {
        path: "deleteImage",
        kind: Image,
        required: [IMAGE_NAME],
        response: DeleteImageResponse,
    }
}

impl DeleteImage {
    pub fn image_name(mut self, name: impl Into<String>) -> Self {
        self.params_mut().add(IMAGE_NAME, name);
        self
    }

    pub fn image_names<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.params_mut().set(IMAGE_NAME, names);
        self
    }
}
