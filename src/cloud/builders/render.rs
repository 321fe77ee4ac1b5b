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
use crate::cloud::response::RenderResponse;

const TEMPLATE_NAME: &str = "templateName";
pub const OUTPUT_NAME: &str = "outputName";
const OUTPUT_FORMAT: &str = "outputFormat";
const DATA: &str = "data";
const STORE_TO: &str = "storeTo";
const DEV_MODE: &str = "devMode";
const IS_SYSTEM_TEMPLATE: &str = "isSystemTemplate";
const PASSWORD_PROTECT: &str = "passwordProtect";
const PDF_ARCHIVE_MODE: &str = "pdfArchiveMode";
const PDF_WATERMARK: &str = "pdfWatermark";
const SOURCE_ID: &str = "sourceId";
const BILLING_KEY: &str = "billingKey";
const TAGS: &str = "tags";

cloud_service! {
    /// Request builder for [`Render::render`](crate::cloud::client::Render::render).
    ///
    /// The output format follows the extension of the output name unless
    /// [`output_format`](Self::output_format) is set.
    RenderRequest => RenderPhantomData {
        path: "render",
        kind: Render,
        required: [TEMPLATE_NAME, OUTPUT_NAME],
        response: RenderResponse,
    }
}
impl FileService for RenderPhantomData {}

impl RenderRequest {
    pub fn template_name(mut self, name: impl Into<String>) -> Self {
        self.params_mut().set(TEMPLATE_NAME, ParamValue::Text(name.into()));
        self
    }

    pub fn output_name(mut self, name: impl Into<String>) -> Self {
        self.params_mut().set(OUTPUT_NAME, ParamValue::Text(name.into()));
        self
    }

    /// Adds an output format such as `pdf` or `docx`.
    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.params_mut().add(OUTPUT_FORMAT, format);
        self
    }

    /// Data to merge, as JSON or XML text.
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.params_mut().set(DATA, ParamValue::Text(data.into()));
        self
    }

    pub fn data_json(self, data: &serde_json::Value) -> Self {
        self.data(data.to_string())
    }

    /// Where the service should deliver the result, e.g. `stream` or
    /// `mailto:someone@example.com`. Repeated calls accumulate.
    pub fn store_to(mut self, destination: impl Into<String>) -> Self {
        self.params_mut().add(STORE_TO, destination);
        self
    }

    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.params_mut().set(DEV_MODE, dev_mode);
        self
    }

    pub fn is_system_template(mut self, system: bool) -> Self {
        self.params_mut().set(IS_SYSTEM_TEMPLATE, system);
        self
    }

    pub fn password_protect(mut self, password: impl Into<String>) -> Self {
        self.params_mut().set(PASSWORD_PROTECT, ParamValue::Text(password.into()));
        self
    }

    pub fn pdf_archive_mode(mut self, archive: bool) -> Self {
        self.params_mut().set(PDF_ARCHIVE_MODE, archive);
        self
    }

    pub fn pdf_watermark(mut self, watermark: impl Into<String>) -> Self {
        self.params_mut().set(PDF_WATERMARK, ParamValue::Text(watermark.into()));
        self
    }

    pub fn source_id(mut self, id: impl Into<String>) -> Self {
        self.params_mut().set(SOURCE_ID, ParamValue::Text(id.into()));
        self
    }

    pub fn billing_key(mut self, key: impl Into<String>) -> Self {
        self.params_mut().set(BILLING_KEY, ParamValue::Text(key.into()));
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.params_mut().set(TAGS, ParamValue::Text(tags.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::environment::Environment;
    use serde_json::json;

    #[test]
    fn test_render_requires_template_and_output() {
        let req = RenderRequest::with_environment(&Environment::unconfigured()).output_name("out.pdf");
        assert_eq!(req.params().missing(), ["templateName"]);
    }

    #[test]
    fn test_render_data_json() {
        let req = RenderRequest::with_environment(&Environment::unconfigured())
            .template_name("samples/WelcomeTemplate.docx")
            .output_name("welcome.pdf")
            .data_json(&json!({"title": "Hello"}));
        assert!(req.params().validate().is_ok());
        assert_eq!(req.params().get(DATA).unwrap(), r#"{"title":"Hello"}"#);
    }
}
