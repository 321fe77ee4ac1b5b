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

use crate::cloud::params::ParamValue;
use crate::cloud::request::FileService;
use crate::cloud::response::{DeleteFilesResponse, GetFileResponse, ListFilesResponse};

pub const FILE_NAME: &str = "fileName";
const FOLDER: &str = "folder";
const INCLUDE_SUB_FOLDERS: &str = "includeSubFolders";
const INCLUDE_META_DATA: &str = "includeMetaData";
const PAGE_SIZE: &str = "pageSize";
const PAGE_TOKEN: &str = "pageToken";
const IS_FOLDER: &str = "isFolder";

cloud_service! {
    /// Request builder for [`FileStorage::list`](crate::cloud::client::FileStorage::list).
    ListFiles => ListFilesPhantomData {
        path: "listFiles",
        kind: File,
        required: [],
        response: ListFilesResponse,
    }
}

impl ListFiles {
    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.params_mut().set(FOLDER, ParamValue::Text(folder.into()));
        self
    }

    pub fn include_sub_folders(mut self, include: bool) -> Self {
        self.params_mut().set(INCLUDE_SUB_FOLDERS, include);
        self
    }

    pub fn include_meta_data(mut self, include: bool) -> Self {
        self.params_mut().set(INCLUDE_META_DATA, include);
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.params_mut().set(PAGE_SIZE, i64::from(size));
        self
    }

    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.params_mut().set(PAGE_TOKEN, ParamValue::Text(token.into()));
        self
    }
}

cloud_service! {
    /// Request builder for [`FileStorage::get`](crate::cloud::client::FileStorage::get).
    GetFile => GetFilePhantomData {
        path: "getFile",
        kind: File,
        required: [FILE_NAME],
        response: GetFileResponse,
    }
}
impl FileService for GetFilePhantomData {}

impl GetFile {
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.params_mut().set(FILE_NAME, ParamValue::Text(name.into()));
        self
    }
}

cloud_service! {
    /// Request builder for [`FileStorage::delete`](crate::cloud::client::FileStorage::delete).
    DeleteFiles => DeleteFilesPhantomData {
        path: "deleteFiles",
        kind: File,
        required: [FILE_NAME],
        response: DeleteFilesResponse,
    }
}

impl DeleteFiles {
    /// Adds a file to delete. Repeated calls accumulate.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.params_mut().add(FILE_NAME, name);
        self
    }

    pub fn file_names<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.params_mut().set(FILE_NAME, names);
        self
    }

    /// Treats the names as folders and deletes their content.
    pub fn is_folder(mut self, folder: bool) -> Self {
        self.params_mut().set(IS_FOLDER, folder);
        self
    }
}
