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

use crate::cloud::builders::{
    DeleteTemplate, GetTemplate, GetTemplateDetails, GetTemplateStructure, ListTemplates,
    UploadTemplate,
};

/// Template service.
#[derive(Clone, Copy, Debug)]
pub struct Template;

impl Template {
    /// Lists the templates in the account.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use docmosis::cloud::client::Template;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let resp = Template::list().folder("samples").include_detail(true).execute().await?;
    /// for t in resp.templates() {
    ///     println!("{} ({} bytes)", t.name, t.size_bytes);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list() -> ListTemplates {
        ListTemplates::new()
    }

    /// Fetches one or more templates.
    pub fn get() -> GetTemplate {
        GetTemplate::new()
    }

    pub fn get_details() -> GetTemplateDetails {
        GetTemplateDetails::new()
    }

    /// Fetches the fields and structure of a template as JSON.
    pub fn get_structure() -> GetTemplateStructure {
        GetTemplateStructure::new()
    }

    pub fn upload() -> UploadTemplate {
        UploadTemplate::new()
    }

    pub fn delete() -> DeleteTemplate {
        DeleteTemplate::new()
    }
}
