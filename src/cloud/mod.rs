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

//! Implementation of the Docmosis cloud services client

pub mod builders;
pub mod client;
pub mod environment;
pub mod error;
pub mod params;
pub mod request;
pub mod response;
pub mod response_traits;
pub mod transport;
pub mod types;

pub use client::{FileStorage, Image, Ping, Render, Template};
pub use environment::{Environment, EnvironmentBuilder, ProxyConfig};
pub use error::{Error, ServiceError, ServiceKind};
pub use request::{CloudRequest, EnvironmentOverride};
