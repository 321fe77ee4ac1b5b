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

//! Entry points for the cloud services
//!
//! Each service family has a unit struct whose associated functions return a
//! request pre-bound to the endpoint and to a copy of the process-wide default
//! [`Environment`](crate::cloud::environment::Environment):
//!
//! ```no_run
//! use docmosis::cloud::client::FileStorage;
//! use docmosis::cloud::environment::Environment;
//! use docmosis::cloud::response_traits::HasCloudFields;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! Environment::set_defaults("my-access-key")?;
//!
//! let resp = FileStorage::get()
//!     .file_name("myFile.pdf")
//!     .send_to("myFile.pdf")
//!     .execute()
//!     .await?;
//! if !resp.has_succeeded() {
//!     eprintln!("get file failed: {:?}", resp.short_msg());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! To use an explicit environment instead of the default, build the request
//! type directly, e.g. `GetFile::with_environment(&env)`.

mod file_storage;
mod image;
mod ping;
mod render;
mod template;

pub use file_storage::FileStorage;
pub use image::Image;
pub use ping::Ping;
pub use render::Render;
pub use template::Template;
