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

//! Generic request shared by every service call
//!
//! A [`CloudRequest`] is parameterised by a service marker implementing
//! [`Service`]. The marker fixes the service path, the required parameters,
//! the service family used to tag errors, and the response type:
//!
//! ```rust,ignore
//! pub type DeleteImage = CloudRequest<DeleteImagePhantomData>;
//! ```
//!
//! Concrete request types add chained setters for their parameters. Markers
//! that also implement [`FileService`] unlock [`send_to`](CloudRequest::send_to)
//! for binary responses.

use crate::cloud::environment::{Environment, EnvironmentBuilder};
use crate::cloud::error::{EnvironmentErr, Error, ServiceError, ServiceKind};
use crate::cloud::params::{ParamValue, ParameterSet};
use crate::cloud::response_traits::{FromCloudResponse, HasCloudFields};
use crate::cloud::transport::{OutputSink, TransportCall};
use std::fmt;
use std::marker::PhantomData;

/// Static description of one service endpoint.
pub trait Service: Send + Sync + 'static {
    /// Path appended to the base URL, e.g. `getImage`.
    const SERVICE_PATH: &'static str;
    /// Parameters that must be set before the request may execute.
    const REQUIRED: &'static [&'static str];
    const KIND: ServiceKind;
    /// Whether the access key is sent with the call.
    const REQUIRES_ACCESS_KEY: bool = true;

    type Response: FromCloudResponse;
}

/// A service answering with a binary document that can be streamed to a sink.
pub trait FileService: Service {}

/// Environment adjustment applied by [`CloudRequest::execute_with`].
///
/// The adjustment is made to the request's own environment copy and stays in
/// place for later executions of the same request. The process-wide default
/// is never touched.
#[derive(Clone, Debug, Default)]
pub enum EnvironmentOverride {
    /// Use the request's environment as it is.
    #[default]
    None,
    /// Replace base URL and access key.
    UrlAndAccessKey(String, String),
    AccessKey(String),
    /// Replace the whole environment.
    Environment(Environment),
}

/// A request for one service call.
pub struct CloudRequest<S: Service> {
    params: ParameterSet,
    environment: EnvironmentBuilder,
    sink: Option<OutputSink>,
    _service: PhantomData<S>,
}

impl<S: Service> Default for CloudRequest<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Service> CloudRequest<S> {
    /// Request bound to a copy of the process-wide default environment.
    pub fn new() -> Self {
        Self::with_builder(EnvironmentBuilder::from_defaults())
    }

    /// Request bound to a copy of `env`.
    pub fn with_environment(env: &Environment) -> Self {
        Self::with_builder(EnvironmentBuilder::copy_from(env))
    }

    fn with_builder(environment: EnvironmentBuilder) -> Self {
        Self {
            params: ParameterSet::new(S::REQUIRED),
            environment,
            sink: None,
            _service: PhantomData,
        }
    }

    /// Replaces this request's environment with a copy of `env`.
    pub fn set_environment(&mut self, env: &Environment) -> &mut Self {
        self.environment.replace(env);
        self
    }

    pub fn environment(&self) -> &EnvironmentBuilder {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut EnvironmentBuilder {
        &mut self.environment
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ParameterSet {
        &mut self.params
    }

    /// Sets a parameter that has no dedicated setter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.set(name, value);
        self
    }

    pub fn service_path(&self) -> &'static str {
        S::SERVICE_PATH
    }

    pub fn service_kind(&self) -> ServiceKind {
        S::KIND
    }

    /// Endpoint this request would be sent to.
    pub fn url(&self) -> Result<String, EnvironmentErr> {
        self.environment.url(S::SERVICE_PATH)
    }

    /// Executes the request with its current environment.
    pub async fn execute(&mut self) -> Result<S::Response, ServiceError> {
        self.execute_with(EnvironmentOverride::None).await
    }

    /// Applies `ov` to this request's environment, then executes.
    ///
    /// A non-success status is returned as a response; check
    /// [`has_succeeded`](HasCloudFields::has_succeeded). `Err` means the call
    /// never produced an answer.
    pub async fn execute_with(
        &mut self,
        ov: EnvironmentOverride,
    ) -> Result<S::Response, ServiceError> {
        match ov {
            EnvironmentOverride::None => {}
            EnvironmentOverride::UrlAndAccessKey(url, key) => {
                self.environment.base_url(url).access_key(key);
            }
            EnvironmentOverride::AccessKey(key) => {
                self.environment.access_key(key);
            }
            EnvironmentOverride::Environment(env) => {
                self.environment.replace(&env);
            }
        }
        self.dispatch()
            .await
            .map_err(|e| ServiceError::new(S::KIND, e))
    }

    async fn dispatch(&mut self) -> Result<S::Response, Error> {
        self.params.validate()?;

        let env = self.environment.build()?;
        let access_key = if S::REQUIRES_ACCESS_KEY {
            Some(env.access_key().ok_or(EnvironmentErr::MissingAccessKey)?)
        } else {
            None
        };
        let url = env.url(S::SERVICE_PATH)?;
        let transport = env.transport()?;

        log::debug!(
            "{} {}: params [{}]",
            S::KIND,
            url,
            self.params.names().join(", ")
        );
        let raw = transport
            .invoke(TransportCall {
                service_path: S::SERVICE_PATH,
                url: &url,
                access_key,
                params: &self.params,
                sink: self.sink.as_mut(),
                environment: &env,
            })
            .await?;
        log::debug!("{} {}: status {}", S::KIND, S::SERVICE_PATH, raw.status);

        let resp = S::Response::from_cloud_response(raw)?;
        if !resp.has_succeeded() {
            log::warn!(
                "{} {} failed: status={} shortMsg={}",
                S::KIND,
                S::SERVICE_PATH,
                resp.status(),
                resp.short_msg().unwrap_or_default()
            );
        }
        Ok(resp)
    }
}

impl<S: FileService> CloudRequest<S> {
    /// Streams a successful binary answer into `sink` instead of memory.
    pub fn send_to(mut self, sink: impl Into<OutputSink>) -> Self {
        self.sink = Some(sink.into());
        self
    }

    pub fn set_sink(&mut self, sink: Option<OutputSink>) -> &mut Self {
        self.sink = sink;
        self
    }

    pub fn sink(&self) -> Option<&OutputSink> {
        self.sink.as_ref()
    }

    /// Hands the sink back to the caller, e.g. to close a writer.
    pub fn take_sink(&mut self) -> Option<OutputSink> {
        self.sink.take()
    }
}

impl<S: Service> fmt::Debug for CloudRequest<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudRequest")
            .field("service_path", &S::SERVICE_PATH)
            .field("params", &self.params)
            .field("environment", &self.environment)
            .field("sink", &self.sink)
            .finish()
    }
}

impl<S: Service> fmt::Display for CloudRequest<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", S::SERVICE_PATH, self.params)
    }
}
