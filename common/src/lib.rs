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

pub mod recording_transport;
pub mod test_context;

pub use recording_transport::{RecordedCall, RecordingTransport};
pub use test_context::{TEST_ACCESS_KEY, TEST_BASE_URL, TestContext, init_logging};
