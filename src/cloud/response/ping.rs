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

use crate::cloud::response_traits::CloudResponse;
use crate::{impl_from_cloud_response, impl_has_cloud_fields};
use std::fmt;

/// Response of [`Ping::request`](crate::cloud::client::Ping::request).
#[derive(Clone, Debug)]
pub struct PingResponse {
    cloud: CloudResponse,
}
impl_has_cloud_fields!(PingResponse);
impl_from_cloud_response!(PingResponse);

impl fmt::Display for PingResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PingResponse [{}]", self.cloud)
    }
}
