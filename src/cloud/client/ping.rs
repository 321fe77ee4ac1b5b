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

use crate::cloud::builders::PingRequest;
use crate::cloud::environment::Environment;
use crate::cloud::error::ServiceError;
use crate::cloud::response_traits::HasCloudFields;

/// Service availability check. No access key is sent.
#[derive(Clone, Copy, Debug)]
pub struct Ping;

impl Ping {
    pub fn request() -> PingRequest {
        PingRequest::new()
    }

    /// `true` if the service behind the default environment answered with success.
    pub async fn execute() -> Result<bool, ServiceError> {
        Ok(Self::request().execute().await?.has_succeeded())
    }

    pub async fn execute_with_environment(env: &Environment) -> Result<bool, ServiceError> {
        Ok(PingRequest::with_environment(env)
            .execute()
            .await?
            .has_succeeded())
    }
}
