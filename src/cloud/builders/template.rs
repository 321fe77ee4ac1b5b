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
use crate::cloud::response::{
    DeleteTemplateResponse, GetTemplateDetailsResponse, GetTemplateResponse,
    GetTemplateStructureResponse, ListTemplatesResponse, UploadTemplateResponse,
};
use bytes::Bytes;
use std::path::PathBuf;

pub const TEMPLATE_NAME: &str = "templateName";
pub const TEMPLATE_FILE: &str = "templateFile";
const TEMPLATE_DESCRIPTION: &str = "templateDescription";
const FOLDER: &str = "folder";
const INCLUDE_DETAIL: &str = "includeDetail";
const PAGE_SIZE: &str = "pageSize";
const PAGE_TOKEN: &str = "pageToken";
const IS_SYSTEM_TEMPLATE: &str = "isSystemTemplate";
const DEV_MODE: &str = "devMode";
const KEEP_PREV_ON_FAIL: &str = "keepPrevOnFail";
const FIELD_DELIMITER_PREFIX: &str = "fieldDelimiterPrefix";
const FIELD_DELIMITER_SUFFIX: &str = "fieldDelimiterSuffix";

cloud_service! {
    /// Request builder for [`Template::list`](crate::cloud::client::Template::list).
    ListTemplates => ListTemplatesPhantomData {
        path: "listTemplates",
        kind: Template,
        required: [],
        response: ListTemplatesResponse,
    }
}

impl ListTemplates {
    /// Restricts the listing to a folder.
    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.params_mut().set(FOLDER, ParamValue::Text(folder.into()));
        self
    }

    pub fn include_detail(mut self, include: bool) -> Self {
        self.params_mut().set(INCLUDE_DETAIL, include);
        self
    }

    /// Maximum number of templates per page.
    pub fn page_size(mut self, size: u32) -> Self {
        self.params_mut().set(PAGE_SIZE, i64::from(size));
        self
    }

    /// Continues a listing from the `nextPageToken` of a previous page.
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.params_mut().set(PAGE_TOKEN, ParamValue::Text(token.into()));
        self
    }
}

cloud_service! {
    /// Request builder for [`Template::get`](crate::cloud::client::Template::get).
    GetTemplate => GetTemplatePhantomData {
        path: "getTemplate",
        kind: Template,
        required: [TEMPLATE_NAME],
        response: GetTemplateResponse,
    }
}
impl FileService for GetTemplatePhantomData {}

impl GetTemplate {
    /// Adds a template to fetch. Repeated calls accumulate.
    pub fn template_name(mut self, name: impl Into<String>) -> Self {
        self.params_mut().add(TEMPLATE_NAME, name);
        self
    }

    /// Replaces the templates to fetch.
    pub fn template_names<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.params_mut().set(TEMPLATE_NAME, names);
        self
    }

    pub fn is_system_template(mut self, system: bool) -> Self {
        self.params_mut().set(IS_SYSTEM_TEMPLATE, system);
        self
    }
}

cloud_service! {
    /// Request builder for [`Template::get_details`](crate::cloud::client::Template::get_details).
    GetTemplateDetails => GetTemplateDetailsPhantomData {
        path: "getTemplateDetails",
        kind: Template,
        required: [TEMPLATE_NAME],
        response: GetTemplateDetailsResponse,
    }
}

impl GetTemplateDetails {
    pub fn template_name(mut self, name: impl Into<String>) -> Self {
        self.params_mut().set(TEMPLATE_NAME, ParamValue::Text(name.into()));
        self
    }

    pub fn is_system_template(mut self, system: bool) -> Self {
        self.params_mut().set(IS_SYSTEM_TEMPLATE, system);
        self
    }
}

cloud_service! {
    /// Request builder for [`Template::get_structure`](crate::cloud::client::Template::get_structure).
    GetTemplateStructure => GetTemplateStructurePhantomData {
        path: "getTemplateStructure",
        kind: Template,
        required: [TEMPLATE_NAME],
        response: GetTemplateStructureResponse,
    }
}

impl GetTemplateStructure {
    pub fn template_name(mut self, name: impl Into<String>) -> Self {
        self.params_mut().set(TEMPLATE_NAME, ParamValue::Text(name.into()));
        self
    }
}

cloud_service! {
    /// Request builder for [`Template::upload`](crate::cloud::client::Template::upload).
    UploadTemplate => UploadTemplatePhantomData {
        path: "uploadTemplate",
        kind: Template,
        required: [TEMPLATE_FILE],
        response: UploadTemplateResponse,
    }
}

impl UploadTemplate {
    /// Local template file to upload. The file is read when the request executes.
    pub fn template_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.params_mut().set(TEMPLATE_FILE, ParamValue::File(path.into()));
        self
    }

    /// In-memory template content, uploaded under `file_name`.
    pub fn template_content(mut self, file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        self.params_mut().set(
            TEMPLATE_FILE,
            ParamValue::Bytes {
                file_name: file_name.into(),
                content: content.into(),
            },
        );
        self
    }

    /// Name to store the template under, including any folder.
    pub fn template_name(mut self, name: impl Into<String>) -> Self {
        self.params_mut().set(TEMPLATE_NAME, ParamValue::Text(name.into()));
        self
    }

    pub fn template_description(mut self, description: impl Into<String>) -> Self {
        self.params_mut().set(TEMPLATE_DESCRIPTION, ParamValue::Text(description.into()));
        self
    }

    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.params_mut().set(DEV_MODE, dev_mode);
        self
    }

    /// Keeps the previous version if the new one has errors.
    pub fn keep_prev_on_fail(mut self, keep: bool) -> Self {
        self.params_mut().set(KEEP_PREV_ON_FAIL, keep);
        self
    }

    pub fn field_delimiters(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.params_mut().set(FIELD_DELIMITER_PREFIX, ParamValue::Text(prefix.into()));
        self.params_mut().set(FIELD_DELIMITER_SUFFIX, ParamValue::Text(suffix.into()));
        self
    }
}

cloud_service! {
    /// Request builder for [`Template::delete`](crate::cloud::client::Template::delete).
    DeleteTemplate => DeleteTemplatePhantomData {
        path: "deleteTemplate",
        kind: Template,
        required: [TEMPLATE_NAME],
        response: DeleteTemplateResponse,
    }
}

impl DeleteTemplate {
    /// Adds a template to delete. Repeated calls accumulate.
    pub fn template_name(mut self, name: impl Into<String>) -> Self {
        self.params_mut().add(TEMPLATE_NAME, name);
        self
    }

    pub fn template_names<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.params_mut().set(TEMPLATE_NAME, names);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::environment::Environment;

    #[test]
    fn test_get_template_accumulates_names() {
        let req = GetTemplate::with_environment(&Environment::unconfigured())
            .template_name("a.docx")
            .template_name("b.docx");
        assert_eq!(req.params().get_list(TEMPLATE_NAME), ["a.docx", "b.docx"]);
        assert_eq!(req.service_path(), "getTemplate");
    }

    #[test]
    fn test_upload_template_content_is_multipart() {
        let req = UploadTemplate::with_environment(&Environment::unconfigured())
            .template_content("welcome.docx", Bytes::from_static(b"PK"))
            .dev_mode(true);
        assert!(req.params().validate().is_ok());
        assert!(req.params().has_parts());
        assert_eq!(
            req.params().form_fields(),
            vec![("devMode".to_string(), "true".to_string())]
        );
    }

    #[test]
    fn test_list_templates_paging_fields() {
        let req = ListTemplates::with_environment(&Environment::unconfigured())
            .folder("samples")
            .page_size(50)
            .page_token("t1");
        assert_eq!(
            req.params().form_fields(),
            vec![
                ("folder".to_string(), "samples".to_string()),
                ("pageSize".to_string(), "50".to_string()),
                ("pageToken".to_string(), "t1".to_string()),
            ]
        );
    }
}
