//! In-memory transport for tests

use std::cell::RefCell;
use std::collections::VecDeque;

use super::transport::{HttpResponse, Transport};
use crate::error::SubmitError;

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub(crate) url: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: String,
}

/// Replays scripted results in order, then answers 200 with an empty JSON object.
#[derive(Default)]
pub(crate) struct FakeTransport {
    script: RefCell<VecDeque<Result<HttpResponse, SubmitError>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.script.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.script
            .borrow_mut()
            .push_back(Err(SubmitError::Transport(message.to_string())));
        self
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn patch(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<HttpResponse, SubmitError> {
        self.calls.borrow_mut().push(RecordedCall {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: body.to_string(),
        });
        self.script.borrow_mut().pop_front().unwrap_or_else(|| {
            Ok(HttpResponse {
                status: 200,
                body: "{}".to_string(),
            })
        })
    }
}
