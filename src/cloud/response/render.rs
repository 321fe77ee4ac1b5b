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

use crate::cloud::response_traits::{CloudResponse, Document, HasDocument};
use crate::{impl_document_response, impl_has_cloud_fields};
use std::fmt;

/// Response of [`Render::render`](crate::cloud::client::Render::render).
///
/// Holds the rendered document, or its size when it was streamed into a sink.
#[derive(Clone, Debug)]
pub struct RenderResponse {
    cloud: CloudResponse,
    document: Document,
}
impl_has_cloud_fields!(RenderResponse);
impl_document_response!(RenderResponse);

impl fmt::Display for RenderResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RenderResponse [{}", self.cloud)?;
        if let Some(n) = self.bytes_written() {
            write!(f, ", bytesWritten={n}")?;
        }
        f.write_str("]")
    }
}
