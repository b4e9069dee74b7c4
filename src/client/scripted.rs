use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{ApiError, ApiRequest, ApiResponse, Transport};

enum Scripted {
    Reply(ApiResponse),
    Unreachable,
}

/// In-memory transport that answers from a queue and records what was sent.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Scripted>>>,
    sent: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap();
        self.replies
            .lock()
            .unwrap()
            .push_back(Scripted::Reply(ApiResponse {
                status,
                body: body.to_string(),
            }));
    }

    pub(crate) fn unreachable(&self) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Scripted::Unreachable);
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let path = request.path.clone();
        self.sent.lock().unwrap().push(request);
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Reply(resp)) => Ok(resp),
            Some(Scripted::Unreachable) | None => Err(ApiError::Transport {
                url: path,
                source: Box::new(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )),
            }),
        }
    }
}
