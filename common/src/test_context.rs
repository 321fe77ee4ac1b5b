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

use crate::recording_transport::RecordingTransport;
use docmosis::cloud::environment::{Environment, EnvironmentBuilder};
use std::sync::{Arc, Once};

pub const TEST_BASE_URL: &str = "https://test.docmosis.invalid/api/";
pub const TEST_ACCESS_KEY: &str = "test-access-key";

static LOGGER: Once = Once::new();

/// Installs `env_logger` once per test binary.
pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// An environment wired to a [`RecordingTransport`], plus the transport for
/// inspecting the calls made through it.
#[derive(Clone, Debug)]
pub struct TestContext {
    pub environment: Environment,
    pub transport: Arc<RecordingTransport>,
}

impl TestContext {
    pub fn new(transport: Arc<RecordingTransport>) -> Self {
        init_logging();
        let environment = EnvironmentBuilder::new()
            .base_url(TEST_BASE_URL)
            .access_key(TEST_ACCESS_KEY)
            .transport(transport.clone())
            .build()
            .unwrap();
        Self {
            environment,
            transport,
        }
    }

    /// Live environment from `DOCMOSIS_*` variables, if an access key is set.
    pub fn live_from_env() -> Option<Environment> {
        init_logging();
        match Environment::from_env() {
            Ok(env) => {
                log::debug!("live environment: {env}");
                Some(env)
            }
            Err(e) => {
                log::debug!("no live environment: {e}");
                None
            }
        }
    }
}
