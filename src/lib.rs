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

//! # Docmosis Rust SDK (`docmosis`)
//!
//! This crate provides a strongly-typed, async interface to the Docmosis cloud
//! document-generation services: templates, images, stored files, rendering
//! and ping.
//!
//! Each service call has a request type (e.g. [`cloud::builders::GetTemplateDetails`],
//! [`cloud::builders::DeleteImage`], [`cloud::builders::RenderRequest`]) that is
//! configured with chained setters and executed with
//! [`execute`](cloud::request::CloudRequest::execute).
//!
//! ## Basic Usage
//!
//! ```no_run
//! use docmosis::cloud::client::Template;
//! use docmosis::cloud::environment::Environment;
//! use docmosis::cloud::response_traits::HasCloudFields;
//!
//! #[tokio::main]
//! async fn main() {
//!     Environment::set_defaults("my-access-key").expect("invalid configuration");
//!
//!     let resp = Template::get_details()
//!         .template_name("samples/WelcomeTemplate.docx")
//!         .execute()
//!         .await
//!         .expect("request failed");
//!
//!     match resp.template_details() {
//!         Some(td) => println!("{td}"),
//!         None => eprintln!("status={} {:?}", resp.status(), resp.short_msg()),
//!     }
//! }
//! ```
//!
//! ## Outcomes
//! - `Err(ServiceError)`: the request was invalid, the environment unusable,
//!   or the service unreachable. Nothing was received.
//! - `Ok(response)` with `has_succeeded() == false`: the service answered with
//!   a non-2xx status; `status`, `short_msg` and `long_msg` describe it.
//! - `Ok(response)` with `has_succeeded() == true`: payload accessors are populated.
//!
//! ## Design
//! - One generic [`cloud::request::CloudRequest`] parameterised by a service marker
//! - A process-wide default [`cloud::environment::Environment`], copied into every request
//! - Network access behind the [`cloud::transport::Transport`] trait

#![allow(clippy::result_large_err)]
pub mod cloud;
