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

use docmosis::cloud::builders::{DeleteImage, GetTemplate, PingRequest, RenderRequest, UploadImage};
use docmosis::cloud::environment::EnvironmentBuilder;
use docmosis::cloud::error::{EnvironmentErr, Error, ServiceKind};
use docmosis::cloud::response_traits::HasCloudFields;
use docmosis_common::{RecordingTransport, TEST_ACCESS_KEY, TestContext};
use serde_json::json;

#[tokio::test]
async fn delete_image_without_name_fails_before_transport() {
    let ctx = TestContext::new(RecordingTransport::json(200, json!({"succeeded": true})));

    let err = DeleteImage::with_environment(&ctx.environment)
        .execute()
        .await
        .unwrap_err();

    assert_eq!(err.service(), ServiceKind::Image);
    assert!(err.is_validation());
    assert_eq!(err.missing_parameters(), Some(&["imageName".to_string()][..]));
    assert_eq!(ctx.transport.call_count(), 0);
}

#[tokio::test]
async fn render_names_every_missing_parameter() {
    let ctx = TestContext::new(RecordingTransport::json(200, json!({})));

    let err = RenderRequest::with_environment(&ctx.environment)
        .execute()
        .await
        .unwrap_err();

    assert_eq!(err.service(), ServiceKind::Render);
    assert_eq!(
        err.missing_parameters(),
        Some(&["templateName".to_string(), "outputName".to_string()][..])
    );
    assert_eq!(ctx.transport.call_count(), 0);
}

#[tokio::test]
async fn empty_list_entries_do_not_satisfy_required_parameter() {
    let ctx = TestContext::new(RecordingTransport::json(200, json!({})));

    let err = GetTemplate::with_environment(&ctx.environment)
        .template_names(Vec::<String>::new())
        .execute()
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(ctx.transport.call_count(), 0);
}

#[tokio::test]
async fn delete_image_sends_names_and_access_key() {
    let ctx = TestContext::new(RecordingTransport::json(200, json!({"succeeded": true})));

    let resp = DeleteImage::with_environment(&ctx.environment)
        .image_name("logo.png")
        .image_name("banner.png")
        .execute()
        .await
        .unwrap();

    assert!(resp.has_succeeded());
    let call = ctx.transport.last_call().unwrap();
    assert_eq!(call.service_path, "deleteImage");
    assert_eq!(call.url, "https://test.docmosis.invalid/api/deleteImage");
    assert_eq!(call.access_key.as_deref(), Some(TEST_ACCESS_KEY));
    assert_eq!(call.params.get_list("imageName"), ["logo.png", "banner.png"]);
    assert!(!call.had_sink);
}

#[tokio::test]
async fn upload_image_reads_nothing_when_invalid() {
    let ctx = TestContext::new(RecordingTransport::json(200, json!({})));

    let err = UploadImage::with_environment(&ctx.environment)
        .image_name("logo.png")
        .execute()
        .await
        .unwrap_err();

    assert_eq!(err.missing_parameters(), Some(&["imageFile".to_string()][..]));
    assert_eq!(ctx.transport.call_count(), 0);
}

#[tokio::test]
async fn missing_base_url_is_environment_error() {
    let transport = RecordingTransport::json(200, json!({}));
    let mut b = EnvironmentBuilder::new();
    b.access_key("key").transport(transport.clone());

    let err = DeleteImage::with_environment(b.environment())
        .image_name("logo.png")
        .execute()
        .await
        .unwrap_err();

    assert!(err.is_environment());
    assert!(matches!(
        err.error(),
        Error::Environment(EnvironmentErr::MissingBaseUrl)
    ));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn ping_does_not_send_access_key() {
    let ctx = TestContext::new(RecordingTransport::json(200, json!({"succeeded": true})));

    let resp = PingRequest::with_environment(&ctx.environment)
        .execute()
        .await
        .unwrap();

    assert!(resp.has_succeeded());
    assert_eq!(ctx.transport.last_call().unwrap().access_key, None);
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    let ctx = TestContext::new(RecordingTransport::unreachable());

    let err = DeleteImage::with_environment(&ctx.environment)
        .image_name("logo.png")
        .execute()
        .await
        .unwrap_err();

    assert!(err.is_network());
    assert_eq!(err.service(), ServiceKind::Image);
    assert_eq!(ctx.transport.call_count(), 1);
}
