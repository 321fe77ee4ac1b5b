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

use crate::cloud::builders::{DeleteImage, GetImage, ListImages, UploadImage};

/// Image service.
#[derive(Clone, Copy, Debug)]
pub struct Image;

impl Image {
    pub fn list() -> ListImages {
        ListImages::new()
    }

    pub fn get() -> GetImage {
        GetImage::new()
    }

    pub fn upload() -> UploadImage {
        UploadImage::new()
    }

    /// Deletes one or more images.
    ///
    /// ```no_run
    /// use docmosis::cloud::client::Image;
    /// use docmosis::cloud::response_traits::HasCloudFields;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let resp = Image::delete().image_name("logo.png").execute().await?;
    /// assert!(resp.has_succeeded());
    /// # Ok(())
    /// # }
    /// ```
    pub fn delete() -> DeleteImage {
        DeleteImage::new()
    }
}
