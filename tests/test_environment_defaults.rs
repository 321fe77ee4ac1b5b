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

use docmosis::cloud::builders::GetImage;
use docmosis::cloud::client::{FileStorage, Image, Ping, Template};
use docmosis::cloud::environment::{DEFAULT_BASE_URL, Environment, EnvironmentBuilder};
use docmosis::cloud::request::EnvironmentOverride;
use docmosis::cloud::response_traits::HasCloudFields;
use docmosis_common::{RecordingTransport, init_logging};
use serde_json::json;
use serial_test::serial;
use std::sync::Arc;

const URL: &str = "https://eu1.dws4.docmosis.com/api/";

fn install_default(transport: Arc<RecordingTransport>) {
    init_logging();
    let env = EnvironmentBuilder::new()
        .base_url(URL)
        .access_key("default-key")
        .transport(transport)
        .build()
        .unwrap();
    Environment::set_default_environment(env).unwrap();
}

#[test]
#[serial]
fn set_defaults_uses_default_base_url() {
    Environment::set_defaults("abc").unwrap();
    let env = Environment::defaults();
    assert_eq!(env.base_url(), Some(DEFAULT_BASE_URL));
    assert_eq!(env.access_key(), Some("abc"));
    assert_eq!(
        Image::get().url().unwrap(),
        "https://us1.dws4.docmosis.com/api/getImage"
    );
    Environment::clear_defaults();
}

#[test]
#[serial]
fn set_defaults_rejects_malformed_url() {
    Environment::clear_defaults();
    assert!(Environment::set_defaults_with_url("abc", "not a url").is_err());
    assert!(!Environment::has_defaults());
}

#[tokio::test]
#[serial]
async fn unconfigured_default_fails_resolution() {
    Environment::clear_defaults();
    let err = FileStorage::get()
        .file_name("myFile.pdf")
        .execute()
        .await
        .unwrap_err();
    assert!(err.is_environment());
}

#[tokio::test]
#[serial]
async fn requests_resolve_against_default() {
    let transport = RecordingTransport::json(200, json!({"succeeded": true}));
    install_default(transport.clone());

    Template::delete()
        .template_name("a.docx")
        .execute()
        .await
        .unwrap();

    let call = transport.last_call().unwrap();
    assert_eq!(call.url, format!("{URL}deleteTemplate"));
    assert_eq!(call.access_key.as_deref(), Some("default-key"));
    Environment::clear_defaults();
}

#[tokio::test]
#[serial]
async fn url_and_access_key_override_leaves_default_untouched() {
    let transport = RecordingTransport::json(200, json!({"succeeded": true}));
    install_default(transport.clone());

    let mut req = Image::delete().image_name("logo.png");
    req.execute_with(EnvironmentOverride::UrlAndAccessKey(
        "https://other.example.com/api".into(),
        "other-key".into(),
    ))
    .await
    .unwrap();

    let call = transport.last_call().unwrap();
    assert_eq!(call.url, "https://other.example.com/api/deleteImage");
    assert_eq!(call.access_key.as_deref(), Some("other-key"));

    let default = Environment::defaults();
    assert_eq!(default.base_url(), Some(URL));
    assert_eq!(default.access_key(), Some("default-key"));

    // a fresh request sees the default again
    Image::delete().image_name("logo.png").execute().await.unwrap();
    assert_eq!(
        transport.last_call().unwrap().access_key.as_deref(),
        Some("default-key")
    );
    Environment::clear_defaults();
}

#[tokio::test]
#[serial]
async fn access_key_override_keeps_base_url() {
    let transport = RecordingTransport::json(200, json!({"succeeded": true}));
    install_default(transport.clone());

    Template::list()
        .execute_with(EnvironmentOverride::AccessKey("k2".into()))
        .await
        .unwrap();

    let call = transport.last_call().unwrap();
    assert_eq!(call.url, format!("{URL}listTemplates"));
    assert_eq!(call.access_key.as_deref(), Some("k2"));
    Environment::clear_defaults();
}

#[tokio::test]
#[serial]
async fn environment_override_replaces_everything() {
    let default_transport = RecordingTransport::json(200, json!({}));
    install_default(default_transport.clone());

    let other_transport = RecordingTransport::json(200, json!({}));
    let other = EnvironmentBuilder::new()
        .base_url("http://localhost:8080/api/")
        .access_key("local")
        .transport(other_transport.clone())
        .build()
        .unwrap();

    FileStorage::list()
        .execute_with(EnvironmentOverride::Environment(other))
        .await
        .unwrap();

    assert_eq!(default_transport.call_count(), 0);
    assert_eq!(
        other_transport.last_call().unwrap().url,
        "http://localhost:8080/api/listFiles"
    );
    Environment::clear_defaults();
}

#[test]
#[serial]
fn requests_keep_the_copy_taken_at_construction() {
    install_default(RecordingTransport::json(200, json!({})));
    let req = GetImage::new().image_name("logo.png");

    Environment::set_defaults_with_url("new-key", "https://later.example.com/api/").unwrap();

    assert_eq!(req.url().unwrap(), format!("{URL}getImage"));
    assert_eq!(req.environment().get_access_key(), Some("default-key"));
    assert_eq!(
        GetImage::new().url().unwrap(),
        "https://later.example.com/api/getImage"
    );
    Environment::clear_defaults();
}

#[tokio::test]
#[serial]
async fn ping_reports_success_flag() {
    let transport = RecordingTransport::json(200, json!({"succeeded": true}));
    install_default(transport.clone());
    assert!(Ping::execute().await.unwrap());

    transport.push(docmosis::cloud::transport::RawResponse::new(503, ""));
    assert!(!Ping::execute().await.unwrap());

    let resp = Ping::request().execute().await.unwrap();
    assert!(resp.has_succeeded());
    Environment::clear_defaults();
}
