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

use async_trait::async_trait;
use docmosis::cloud::error::{Error, NetworkError};
use docmosis::cloud::params::ParameterSet;
use docmosis::cloud::transport::{RawResponse, Transport, TransportCall};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// What a [`RecordingTransport`] saw for one call.
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub service_path: String,
    pub url: String,
    pub access_key: Option<String>,
    pub params: ParameterSet,
    pub had_sink: bool,
}

/// Transport double: records every call and answers with canned responses.
///
/// Queued responses are used first, then `fallback`. A successful non-JSON
/// answer is written into the sink when the call carries one.
#[derive(Debug)]
pub struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    queued: Mutex<VecDeque<RawResponse>>,
    fallback: Option<RawResponse>,
}

impl RecordingTransport {
    pub fn new(fallback: RawResponse) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            queued: Mutex::new(VecDeque::new()),
            fallback: Some(fallback),
        })
    }

    pub fn json(status: u16, body: serde_json::Value) -> Arc<Self> {
        Self::new(RawResponse::json(status, &body))
    }

    /// A transport that fails every call as unreachable.
    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            queued: Mutex::new(VecDeque::new()),
            fallback: None,
        })
    }

    pub fn push(&self, resp: RawResponse) {
        self.queued.lock().unwrap().push_back(resp);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    fn next_response(&self) -> Option<RawResponse> {
        let queued = self.queued.lock().unwrap().pop_front();
        queued.or_else(|| self.fallback.clone())
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn invoke(&self, call: TransportCall<'_>) -> Result<RawResponse, Error> {
        self.calls.lock().unwrap().push(RecordedCall {
            service_path: call.service_path.to_string(),
            url: call.url.to_string(),
            access_key: call.access_key.map(str::to_owned),
            params: call.params.clone(),
            had_sink: call.sink.is_some(),
        });

        let Some(mut raw) = self.next_response() else {
            return Err(NetworkError::Transport(format!("connection refused: {}", call.url)).into());
        };
        if let Some(sink) = call.sink
            && (200..=299).contains(&raw.status)
            && !raw.is_json()
        {
            let body = std::mem::take(&mut raw.body);
            raw.bytes_written = Some(sink.write_bytes(body).await?);
        }
        Ok(raw)
    }
}
