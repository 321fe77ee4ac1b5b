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

//! Request builders for the [entry points](crate::cloud::client)

/// Declares a service marker, its [`Service`](crate::cloud::request::Service)
/// impl and the request alias built on it.
macro_rules! cloud_service {
    (
        $(#[$meta:meta])*
        $alias:ident => $marker:ident {
            path: $path:literal,
            kind: $kind:ident,
            required: [$($req:expr),* $(,)?],
            response: $resp:ty $(,)?
        }
    ) => {
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $marker;

        impl $crate::cloud::request::Service for $marker {
            const SERVICE_PATH: &'static str = $path;
            const REQUIRED: &'static [&'static str] = &[$($req),*];
            const KIND: $crate::cloud::error::ServiceKind = $crate::cloud::error::ServiceKind::$kind;
            type Response = $resp;
        }

        $(#[$meta])*
        pub type $alias = $crate::cloud::request::CloudRequest<$marker>;
    };
}

mod file;
mod image;
mod ping;
mod render;
mod template;

pub use file::*;
pub use image::*;
pub use ping::*;
pub use render::*;
pub use template::*;
