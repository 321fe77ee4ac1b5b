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

use crate::cloud::error::ServiceKind;
use crate::cloud::request::{CloudRequest, Service};
use crate::cloud::response::PingResponse;

/// Request builder for [`Ping::request`](crate::cloud::client::Ping::request).
pub type PingRequest = CloudRequest<PingPhantomData>;

#[derive(Clone, Copy, Debug, Default)]
pub struct PingPhantomData;

impl Service for PingPhantomData {
    const SERVICE_PATH: &'static str = "ping";
    const REQUIRED: &'static [&'static str] = &[];
    const KIND: ServiceKind = ServiceKind::Ping;
    const REQUIRES_ACCESS_KEY: bool = false;
    type Response = PingResponse;
}
