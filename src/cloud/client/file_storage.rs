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

use crate::cloud::builders::{DeleteFiles, GetFile, ListFiles};

/// Stored file service.
#[derive(Clone, Copy, Debug)]
pub struct FileStorage;

impl FileStorage {
    pub fn list() -> ListFiles {
        ListFiles::new()
    }

    pub fn get() -> GetFile {
        GetFile::new()
    }

    pub fn delete() -> DeleteFiles {
        DeleteFiles::new()
    }
}
