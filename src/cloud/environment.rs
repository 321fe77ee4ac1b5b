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

//! Connection configuration and endpoint resolution
//!
//! An [`Environment`] names the service deployment (base URL), the account
//! (access key) and how to reach it (proxy, timeouts). One environment can be
//! installed as the process-wide default; every request takes a private
//! [`EnvironmentBuilder`] copy of it at construction, so per-request changes
//! never leak into the default.
//!
//! ```no_run
//! use docmosis::cloud::environment::{Environment, EnvironmentBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Process-wide default, once at start-up.
//! Environment::set_defaults("my-access-key")?;
//!
//! // A second deployment used explicitly.
//! let eu = EnvironmentBuilder::new()
//!     .base_url("https://eu1.dws4.docmosis.com/api/")
//!     .access_key("my-eu-key")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use crate::cloud::error::{EnvironmentErr, Error};
use crate::cloud::transport::{HttpTransport, Transport};
use once_cell::sync::{Lazy, OnceCell};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use typed_builder::TypedBuilder;
use url::Url;

/// Base URL used by [`Environment::set_defaults`].
pub const DEFAULT_BASE_URL: &str = "https://us1.dws4.docmosis.com/api/";

/// Default time allowed to establish a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default time allowed between reads of the response.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(120);

pub const ENV_ACCESS_KEY: &str = "DOCMOSIS_ACCESS_KEY";
pub const ENV_BASE_URL: &str = "DOCMOSIS_BASE_URL";
pub const ENV_PROXY_HOST: &str = "DOCMOSIS_PROXY_HOST";
pub const ENV_PROXY_PORT: &str = "DOCMOSIS_PROXY_PORT";
pub const ENV_PROXY_USER: &str = "DOCMOSIS_PROXY_USER";
pub const ENV_PROXY_PASSWORD: &str = "DOCMOSIS_PROXY_PASSWORD";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "DOCMOSIS_CONNECT_TIMEOUT_SECS";
pub const ENV_READ_TIMEOUT_SECS: &str = "DOCMOSIS_READ_TIMEOUT_SECS";

static DEFAULT_ENVIRONMENT: Lazy<RwLock<Option<Environment>>> = Lazy::new(|| RwLock::new(None));

/// HTTP proxy settings.
///
/// ```
/// use docmosis::cloud::environment::ProxyConfig;
///
/// let proxy = ProxyConfig::builder()
///     .host("proxy.internal")
///     .port(3128)
///     .user(Some("svc".to_string()))
///     .password(Some("secret".to_string()))
///     .build();
/// assert_eq!(proxy.url(), "http://proxy.internal:3128");
/// ```
#[derive(Clone, PartialEq, Eq, TypedBuilder)]
pub struct ProxyConfig {
    #[builder(setter(into))]
    pub host: String,
    pub port: u16,
    #[builder(default)]
    pub user: Option<String>,
    #[builder(default)]
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Proxy URL without credentials.
    pub fn url(&self) -> String {
        if self.host.contains("://") {
            format!("{}:{}", self.host, self.port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    pub fn validate(&self) -> Result<(), EnvironmentErr> {
        if self.host.trim().is_empty() {
            return Err(EnvironmentErr::InvalidProxy("proxy host is empty".into()));
        }
        if self.port == 0 {
            return Err(EnvironmentErr::InvalidProxy("proxy port must be non-zero".into()));
        }
        Url::parse(&self.url())
            .map(|_| ())
            .map_err(|e| EnvironmentErr::InvalidProxy(e.to_string()))
    }
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "*****"))
            .finish()
    }
}

/// Resolved connection configuration for the cloud services.
#[derive(Clone)]
pub struct Environment {
    base_url: Option<String>,
    access_key: Option<String>,
    proxy: Option<ProxyConfig>,
    connect_timeout: Duration,
    read_timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
    // Shared by clones; reset whenever a connection setting changes.
    http: Arc<OnceCell<Arc<dyn Transport>>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            base_url: None,
            access_key: None,
            proxy: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            transport: None,
            http: Arc::default(),
        }
    }
}

impl Environment {
    /// An environment with nothing configured. Resolving a URL from it fails.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Installs the process-wide default using [`DEFAULT_BASE_URL`].
    pub fn set_defaults(access_key: &str) -> Result<(), EnvironmentErr> {
        Self::set_defaults_with_url(access_key, DEFAULT_BASE_URL)
    }

    /// Installs the process-wide default for the given deployment.
    ///
    /// Requests constructed afterwards clone this configuration. Requests that
    /// already exist keep the copy they took.
    pub fn set_defaults_with_url(access_key: &str, base_url: &str) -> Result<(), EnvironmentErr> {
        let env = EnvironmentBuilder::new()
            .base_url(base_url)
            .access_key(access_key)
            .build()?;
        Self::set_default_environment(env)
    }

    /// Installs a fully built environment as the process-wide default.
    pub fn set_default_environment(env: Environment) -> Result<(), EnvironmentErr> {
        EnvironmentBuilder::copy_from(&env).validate()?;
        log::info!("default environment configured: {env}");
        *DEFAULT_ENVIRONMENT
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(env);
        Ok(())
    }

    /// Snapshot of the process-wide default, or an unconfigured environment if
    /// none was installed.
    pub fn defaults() -> Environment {
        DEFAULT_ENVIRONMENT
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_default()
    }

    /// Returns the process to the unconfigured state.
    pub fn clear_defaults() {
        *DEFAULT_ENVIRONMENT
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn has_defaults() -> bool {
        DEFAULT_ENVIRONMENT
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Loads an environment from `DOCMOSIS_*` variables.
    ///
    /// `DOCMOSIS_ACCESS_KEY` is mandatory; `DOCMOSIS_BASE_URL` falls back to
    /// [`DEFAULT_BASE_URL`]. A proxy is configured when `DOCMOSIS_PROXY_HOST`
    /// is set.
    pub fn from_env() -> Result<Environment, EnvironmentErr> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Environment, EnvironmentErr> {
        let access_key = lookup(ENV_ACCESS_KEY).ok_or(EnvironmentErr::MissingAccessKey)?;
        let base_url = lookup(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        log::debug!("{ENV_BASE_URL}={base_url}");
        log::debug!("{ENV_ACCESS_KEY}=*****");

        let mut builder = EnvironmentBuilder::new();
        builder.base_url(base_url).access_key(access_key);

        if let Some(host) = lookup(ENV_PROXY_HOST) {
            let port = match lookup(ENV_PROXY_PORT) {
                Some(p) => p.trim().parse::<u16>().map_err(|e| {
                    EnvironmentErr::InvalidProxy(format!("{ENV_PROXY_PORT}={p}: {e}"))
                })?,
                None => 80,
            };
            builder.proxy(Some(
                ProxyConfig::builder()
                    .host(host)
                    .port(port)
                    .user(lookup(ENV_PROXY_USER))
                    .password(lookup(ENV_PROXY_PASSWORD))
                    .build(),
            ));
        }

        if let Some(secs) = parse_secs(&lookup, ENV_CONNECT_TIMEOUT_SECS) {
            builder.connect_timeout(secs);
        }
        if let Some(secs) = parse_secs(&lookup, ENV_READ_TIMEOUT_SECS) {
            builder.read_timeout(secs);
        }

        builder.build()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn access_key(&self) -> Option<&str> {
        self.access_key.as_deref()
    }

    pub fn proxy(&self) -> Option<&ProxyConfig> {
        self.proxy.as_ref()
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Endpoint for `service_path` under the base URL.
    pub fn url(&self, service_path: &str) -> Result<String, EnvironmentErr> {
        let base = self.base_url.as_deref().ok_or(EnvironmentErr::MissingBaseUrl)?;
        let base = check_base_url(base)?;
        Ok(join_url(&base, service_path))
    }

    /// Transport used to reach the service: the configured override, or an
    /// HTTP transport built from this environment on first use and shared by
    /// its copies afterwards.
    pub fn transport(&self) -> Result<Arc<dyn Transport>, Error> {
        if let Some(t) = &self.transport {
            return Ok(Arc::clone(t));
        }
        self.http
            .get_or_try_init(|| {
                let http: Arc<dyn Transport> = Arc::new(HttpTransport::from_environment(self)?);
                Ok::<_, Error>(http)
            })
            .map(Arc::clone)
    }

    pub fn has_transport_override(&self) -> bool {
        self.transport.is_some()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("base_url", &self.base_url)
            .field("access_key", &self.access_key.as_ref().map(|_| "*****"))
            .field("proxy", &self.proxy)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("transport", &self.transport)
            .finish()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "baseUrl={}, accessKey={}",
            self.base_url.as_deref().unwrap_or("<unset>"),
            if self.access_key.is_some() { "*****" } else { "<unset>" }
        )?;
        if let Some(p) = &self.proxy {
            write!(f, ", proxy={}", p.url())?;
        }
        write!(
            f,
            ", connectTimeout={}s, readTimeout={}s",
            self.connect_timeout.as_secs(),
            self.read_timeout.as_secs()
        )
    }
}

/// Mutable copy of an [`Environment`] owned by a single request.
///
/// Setters return the builder for chaining and never validate; validation
/// happens in [`validate`](Self::validate), [`build`](Self::build) and
/// [`url`](Self::url).
#[derive(Clone, Debug, Default)]
pub struct EnvironmentBuilder {
    env: Environment,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Independent builder seeded with the values of `env`.
    pub fn copy_from(env: &Environment) -> Self {
        Self { env: env.clone() }
    }

    /// Builder seeded with the process-wide default.
    pub fn from_defaults() -> Self {
        Self {
            env: Environment::defaults(),
        }
    }

    pub fn base_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.env.base_url = Some(url.into());
        self
    }

    pub fn access_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.env.access_key = Some(key.into());
        self
    }

    pub fn proxy(&mut self, proxy: Option<ProxyConfig>) -> &mut Self {
        self.env.proxy = proxy;
        self.env.http = Arc::default();
        self
    }

    pub fn connect_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.env.connect_timeout = timeout;
        self.env.http = Arc::default();
        self
    }

    pub fn read_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.env.read_timeout = timeout;
        self.env.http = Arc::default();
        self
    }

    /// Routes requests through `transport` instead of the default HTTP one.
    pub fn transport(&mut self, transport: Arc<dyn Transport>) -> &mut Self {
        self.env.transport = Some(transport);
        self
    }

    /// Replaces every value with those of `env`.
    pub fn replace(&mut self, env: &Environment) -> &mut Self {
        self.env = env.clone();
        self
    }

    pub fn get_base_url(&self) -> Option<&str> {
        self.env.base_url()
    }

    pub fn get_access_key(&self) -> Option<&str> {
        self.env.access_key()
    }

    pub fn get_proxy(&self) -> Option<&ProxyConfig> {
        self.env.proxy()
    }

    pub fn get_connect_timeout(&self) -> Duration {
        self.env.connect_timeout
    }

    pub fn get_read_timeout(&self) -> Duration {
        self.env.read_timeout
    }

    /// Checks the base URL, access key and proxy.
    pub fn validate(&self) -> Result<(), EnvironmentErr> {
        let base = self.env.base_url.as_deref().ok_or(EnvironmentErr::MissingBaseUrl)?;
        check_base_url(base)?;
        if let Some(key) = &self.env.access_key
            && key.trim().is_empty()
        {
            return Err(EnvironmentErr::MissingAccessKey);
        }
        if let Some(proxy) = &self.env.proxy {
            proxy.validate()?;
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Environment, EnvironmentErr> {
        self.validate()?;
        Ok(self.env.clone())
    }

    /// Endpoint for `service_path` under the current base URL.
    pub fn url(&self, service_path: &str) -> Result<String, EnvironmentErr> {
        self.env.url(service_path)
    }

    /// Borrow of the values accumulated so far, unvalidated.
    pub fn environment(&self) -> &Environment {
        &self.env
    }
}

impl fmt::Display for EnvironmentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.env, f)
    }
}

/// Validates `base` as an absolute http(s) URL and returns it unchanged.
fn check_base_url(base: &str) -> Result<String, EnvironmentErr> {
    let invalid = |cause: &str| EnvironmentErr::InvalidBaseUrl {
        url: base.to_string(),
        cause: cause.to_string(),
    };

    let parsed = Url::parse(base.trim()).map_err(|e| invalid(&e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(invalid("scheme must be http or https")),
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("valid host must be provided"));
    }
    if parsed.query().is_some() {
        return Err(invalid("query must be none for base URL"));
    }
    if parsed.fragment().is_some() {
        return Err(invalid("fragment must be none for base URL"));
    }
    Ok(base.trim().to_string())
}

/// Joins with exactly one `/` between base and path.
fn join_url(base: &str, service_path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        service_path.trim_start_matches('/')
    )
}

fn parse_secs(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<Duration> {
    let value = lookup(name)?;
    match value.trim().parse::<u64>() {
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(e) => {
            log::warn!("ignoring {name}={value}: {e}");
            None
        }
    }
}
