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

//! Network collaborator for executing validated requests
//!
//! [`Transport`] is the seam between the request framework and the wire. The
//! framework only calls it after local validation succeeded and the endpoint
//! URL resolved. A transport returns a [`RawResponse`] for anything the service
//! answered, successful or not, and an error only when no answer could be
//! obtained.
//!
//! [`HttpTransport`] is the default implementation, built on `reqwest`.

use crate::cloud::environment::Environment;
use crate::cloud::error::{EnvironmentErr, Error, IoError, NetworkError};
use crate::cloud::params::{ParamValue, ParameterSet};
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::io::{AsyncWrite, AsyncWriteExt};
use futures_util::{Stream, StreamExt};
use http::header::CONTENT_TYPE;
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Form field carrying the access key.
pub const ACCESS_KEY_FIELD: &str = "accessKey";

/// Destination for a binary response payload.
///
/// A [`File`](OutputSink::File) sink is created, written and closed by the
/// transport; the content lands under a temporary name first and is renamed
/// into place once complete. A [`Writer`](OutputSink::Writer) sink is written
/// and flushed but never closed: it stays owned by the request and the caller
/// takes it back with `take_sink()`.
pub enum OutputSink {
    File(PathBuf),
    Writer(Box<dyn AsyncWrite + Unpin + Send>),
}

impl OutputSink {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        OutputSink::File(path.into())
    }

    pub fn writer(w: impl AsyncWrite + Unpin + Send + 'static) -> Self {
        OutputSink::Writer(Box::new(w))
    }

    /// Copies `stream` into the sink, returning the number of bytes written.
    pub async fn write_stream<S>(&mut self, stream: S) -> Result<u64, Error>
    where
        S: Stream<Item = Result<Bytes, Error>> + Send,
    {
        match self {
            OutputSink::File(path) => write_file(path, stream).await,
            OutputSink::Writer(w) => {
                let total = copy_into(w, stream).await?;
                w.flush().await?;
                Ok(total)
            }
        }
    }

    pub async fn write_bytes(&mut self, content: Bytes) -> Result<u64, Error> {
        self.write_stream(futures_util::stream::iter(vec![Ok(content)]))
            .await
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSink::File(p) => f.debug_tuple("File").field(p).finish(),
            OutputSink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

impl From<PathBuf> for OutputSink {
    fn from(p: PathBuf) -> Self {
        OutputSink::File(p)
    }
}

impl From<&str> for OutputSink {
    fn from(p: &str) -> Self {
        OutputSink::File(PathBuf::from(p))
    }
}

impl From<&Path> for OutputSink {
    fn from(p: &Path) -> Self {
        OutputSink::File(p.to_path_buf())
    }
}

async fn copy_into<W, S>(w: &mut W, stream: S) -> Result<u64, Error>
where
    W: AsyncWrite + Unpin + ?Sized,
    S: Stream<Item = Result<Bytes, Error>>,
{
    futures_util::pin_mut!(stream);
    let mut total = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        w.write_all(&chunk).await?;
        total += chunk.len() as u64;
    }
    Ok(total)
}

async fn write_file<S>(file_path: &Path, stream: S) -> Result<u64, Error>
where
    S: Stream<Item = Result<Bytes, Error>>,
{
    if file_path.is_dir() {
        return Err(IoError::SinkIsDirectory(file_path.display().to_string()).into());
    }
    let parent_dir = match file_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !parent_dir.is_dir() {
        async_std::fs::create_dir_all(&parent_dir).await?;
    }
    let file_name = file_path
        .file_name()
        .ok_or_else(|| std::io::Error::other("could not get filename-component of path"))?;
    let mut tmp_file_name = file_name.to_os_string();
    tmp_file_name.push(format!("_{}", Uuid::new_v4().simple()));
    let tmp_file_path = parent_dir.join(tmp_file_name);

    let mut fp = async_std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp_file_path)
        .await?;
    let result = async {
        let written = copy_into(&mut fp, stream).await?;
        fp.flush().await?;
        fp.close().await?;
        drop(fp);
        async_std::fs::rename(&tmp_file_path, file_path).await?;
        Ok::<u64, Error>(written)
    }
    .await;
    if result.is_err() {
        let _ = async_std::fs::remove_file(&tmp_file_path).await;
    }
    result
}

/// Everything a transport needs to perform one call.
pub struct TransportCall<'a> {
    pub service_path: &'a str,
    pub url: &'a str,
    pub access_key: Option<&'a str>,
    pub params: &'a ParameterSet,
    pub sink: Option<&'a mut OutputSink>,
    pub environment: &'a Environment,
}

impl fmt::Debug for TransportCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportCall")
            .field("service_path", &self.service_path)
            .field("url", &self.url)
            .field("access_key", &self.access_key.map(|_| "*****"))
            .field("params", &self.params)
            .field("sink", &self.sink)
            .finish()
    }
}

/// What the service answered, before decoding.
#[derive(Clone, Debug, Default)]
pub struct RawResponse {
    pub status: u16,
    /// Reason phrase for `status`, if known.
    pub reason: Option<String>,
    pub content_type: Option<String>,
    /// Response body; empty when the payload was streamed into a sink.
    pub body: Bytes,
    /// Bytes streamed into the sink, if one was used.
    pub bytes_written: Option<u64>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            reason: http::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .map(str::to_owned),
            content_type: None,
            body: body.into(),
            bytes_written: None,
        }
    }

    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        let mut r = Self::new(status, value.to_string());
        r.content_type = Some("application/json".into());
        r
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|c| c.trim_start().starts_with("application/json"))
    }
}

/// Performs service calls on behalf of the request framework.
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    /// Sends `call` and returns the service's answer.
    ///
    /// Non-success statuses are returned as `Ok`; `Err` is reserved for
    /// failures that prevented any answer, and for sink I/O failures.
    async fn invoke(&self, call: TransportCall<'_>) -> Result<RawResponse, Error>;
}

/// Default transport: form or multipart POST over HTTP(S) via `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a client honouring the proxy and timeouts of `env`.
    pub fn from_environment(env: &Environment) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(env.connect_timeout())
            .read_timeout(env.read_timeout());

        let user_agent = String::from("Docmosis (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") docmosis-rs/"
            + env!("CARGO_PKG_VERSION");
        builder = builder.user_agent(user_agent);

        if let Some(p) = env.proxy() {
            let mut proxy = reqwest::Proxy::all(p.url())
                .map_err(|e| EnvironmentErr::InvalidProxy(e.to_string()))?;
            if let Some(user) = &p.user {
                proxy = proxy.basic_auth(user, p.password.as_deref().unwrap_or_default());
            }
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            http_client: builder.build().map_err(NetworkError::from)?,
        })
    }

    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    async fn build_request(
        &self,
        url: &str,
        access_key: Option<&str>,
        params: &ParameterSet,
    ) -> Result<reqwest::RequestBuilder, Error> {
        let url = reqwest::Url::parse(url).map_err(|_| NetworkError::InvalidUrl(url.to_string()))?;

        let mut fields = params.form_fields();
        if let Some(key) = access_key {
            fields.insert(0, (ACCESS_KEY_FIELD.to_string(), key.to_string()));
        }

        let req = self.http_client.post(url);
        if !params.has_parts() {
            return Ok(req.form(&fields));
        }

        let mut form = reqwest::multipart::Form::new();
        for (name, value) in fields {
            form = form.text(name, value);
        }
        for (name, value) in params.iter() {
            match value {
                ParamValue::File(path) => {
                    let content = async_std::fs::read(path).await?;
                    let file_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| name.to_string());
                    let part = reqwest::multipart::Part::bytes(content).file_name(file_name);
                    form = form.part(name.to_string(), part);
                }
                ParamValue::Bytes { file_name, content } => {
                    let part = reqwest::multipart::Part::bytes(content.to_vec())
                        .file_name(file_name.clone());
                    form = form.part(name.to_string(), part);
                }
                _ => {}
            }
        }
        Ok(req.multipart(form))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn invoke(&self, call: TransportCall<'_>) -> Result<RawResponse, Error> {
        let req = self
            .build_request(call.url, call.access_key, call.params)
            .await?;
        let resp = req.send().await.map_err(NetworkError::from)?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let mut raw = RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_owned),
            content_type,
            body: Bytes::new(),
            bytes_written: None,
        };

        if let Some(sink) = call.sink
            && status.is_success()
            && !raw.is_json()
        {
            let stream = resp
                .bytes_stream()
                .map(|chunk| chunk.map_err(|e| Error::from(NetworkError::from(e))));
            raw.bytes_written = Some(sink.write_stream(stream).await?);
            return Ok(raw);
        }

        raw.body = resp.bytes().await.map_err(NetworkError::from)?;
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::pin::Pin;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::task::{Context, Poll};

    #[test]
    fn test_raw_response_reason_and_json_detection() {
        let r = RawResponse::new(404, "missing");
        assert_eq!(r.reason.as_deref(), Some("Not Found"));
        assert!(!r.is_json());

        let r = RawResponse::json(200, &serde_json::json!({"succeeded": true}));
        assert!(r.is_json());
        assert_eq!(r.reason.as_deref(), Some("OK"));
    }

    #[derive(Clone, Default)]
    struct TrackingWriter {
        written: Arc<std::sync::Mutex<Vec<u8>>>,
        flushes: Arc<AtomicUsize>,
        closed: Arc<AtomicBool>,
    }

    impl AsyncWrite for TrackingWriter {
        fn poll_write(
            self: Pin<&mut Self>,
            _: &mut Context<'_>,
            data: &[u8],
        ) -> Poll<std::io::Result<usize>> {
            self.written.lock().unwrap().extend_from_slice(data);
            Poll::Ready(Ok(data.len()))
        }

        fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            self.flushes.fetch_add(1, Ordering::SeqCst);
            Poll::Ready(Ok(()))
        }

        fn poll_close(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            self.closed.store(true, Ordering::SeqCst);
            Poll::Ready(Ok(()))
        }
    }

    #[async_std::test]
    async fn test_writer_sink_is_flushed_not_closed() {
        let writer = TrackingWriter::default();
        let mut sink = OutputSink::writer(writer.clone());
        let n = sink.write_bytes(Bytes::from_static(b"hello ")).await.unwrap();
        let m = sink.write_bytes(Bytes::from_static(b"world")).await.unwrap();

        assert_eq!(n + m, 11);
        assert_eq!(writer.written.lock().unwrap().as_slice(), b"hello world");
        assert_eq!(writer.flushes.load(Ordering::SeqCst), 2);
        assert!(!writer.closed.load(Ordering::SeqCst));
    }

    #[async_std::test]
    async fn test_file_sink_removes_temp_file_when_rename_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.pdf");
        let blocker = target.clone();
        // A directory appearing at the destination mid-transfer makes the rename fail.
        let chunks = futures_util::stream::iter(vec![Bytes::from_static(b"%PDF-")]).map(
            move |chunk| {
                std::fs::create_dir(&blocker).unwrap();
                Ok::<_, Error>(chunk)
            },
        );
        let mut sink = OutputSink::file(&target);
        assert!(sink.write_stream(chunks).await.is_err());

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, ["out.pdf"]);
        assert!(target.is_dir());
    }

    #[async_std::test]
    async fn test_file_sink_removes_temp_file_on_stream_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.pdf");
        let chunks: Vec<Result<Bytes, Error>> = vec![
            Ok(Bytes::from_static(b"%PDF-")),
            Err(NetworkError::Transport("reset".into()).into()),
        ];
        let mut sink = OutputSink::file(&target);
        assert!(sink.write_stream(futures_util::stream::iter(chunks)).await.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[async_std::test]
    async fn test_file_sink_creates_parent_and_renames() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("out.pdf");
        let mut sink = OutputSink::file(&target);
        let chunks = vec![Ok(Bytes::from_static(b"%PDF-")), Ok(Bytes::from_static(b"1.7"))];
        let n = sink.write_stream(futures_util::stream::iter(chunks)).await.unwrap();

        assert_eq!(n, 8);
        assert_eq!(std::fs::read(&target).unwrap(), b"%PDF-1.7");
        let leftovers: Vec<_> = std::fs::read_dir(target.parent().unwrap())
            .unwrap()
            .collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[async_std::test]
    async fn test_file_sink_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = OutputSink::file(dir.path());
        let err = sink.write_bytes(Bytes::from_static(b"x")).await.unwrap_err();
        assert!(matches!(err, Error::Io(IoError::SinkIsDirectory(_))));
    }

    #[test]
    fn test_http_transport_rejects_bad_proxy() {
        use crate::cloud::environment::{EnvironmentBuilder, ProxyConfig};
        let mut b = EnvironmentBuilder::new();
        b.base_url("https://example.com/api/").proxy(Some(
            ProxyConfig::builder().host("bad host name").port(8080).build(),
        ));
        assert!(HttpTransport::from_environment(b.environment()).is_err());
    }
}
