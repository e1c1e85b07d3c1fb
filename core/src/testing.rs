//! In-process transport for unit tests.
//!
//! Responses are queued per path and can be held back until the test releases
//! them, which makes completion order a test decision.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use proxylist_common::error::{FetchError, Result};
use tokio::sync::oneshot;

use crate::ports::{RawResponse, Transport};

type Pending = oneshot::Receiver<Result<RawResponse>>;

#[derive(Default)]
pub struct ScriptedTransport {
    queues: Mutex<HashMap<String, VecDeque<Pending>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queues a response for `path` that resolves immediately.
    pub fn respond(&self, path: &str, response: Result<RawResponse>) {
        let _ = self.hold(path).send(response);
    }

    /// Queues a response for `path` that resolves when the returned sender fires.
    pub fn hold(&self, path: &str) -> oneshot::Sender<Result<RawResponse>> {
        let (tx, rx) = oneshot::channel();
        self.queues
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(rx);
        tx
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, path: &str) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(path.to_string());
        let pending: Option<Pending> = self
            .queues
            .lock()
            .unwrap()
            .get_mut(path)
            .and_then(VecDeque::pop_front);

        match pending {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Transport("script dropped".into()))),
            None => Err(FetchError::Transport(format!("no scripted response for {path}"))),
        }
    }
}

pub fn json(status: u16, reason: &str, body: &str) -> Result<RawResponse> {
    Ok(RawResponse {
        status,
        reason: reason.to_string(),
        body: body.as_bytes().to_vec(),
    })
}

pub fn ok_json(body: &str) -> Result<RawResponse> {
    json(200, "OK", body)
}
