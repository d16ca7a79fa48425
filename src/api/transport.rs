use std::time::Duration;

use crate::error::SubmitError;

/// Status and body of a completed HTTP exchange, whatever the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

impl HttpResponse {
    pub(crate) fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Wire seam for the PATCH call. Only network-level failures are errors;
/// non-2xx responses come back as `Ok`.
pub(crate) trait Transport {
    fn patch(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<HttpResponse, SubmitError>;
}

/// Blocking transport backed by a shared ureq agent
pub(crate) struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub(crate) fn new(timeout: Option<Duration>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();
        UreqTransport { agent }
    }
}

impl Transport for UreqTransport {
    fn patch(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<HttpResponse, SubmitError> {
        let mut request = self.agent.patch(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send(body)
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
