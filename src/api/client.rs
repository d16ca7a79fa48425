use std::borrow::Cow;
use std::path::PathBuf;

use log::{error, info};

use super::config::ApiConfig;
use super::transport::Transport;
use crate::error::{AppError, SubmitError};
use crate::payload::Payload;
use crate::request_log::RequestLogger;

/// Where the client gets its connection parameters for each call
#[derive(Debug)]
pub(crate) enum ConfigSource {
    /// Loaded once at startup
    Loaded(ApiConfig),
    /// Re-read before every request, picking up edits made mid-run
    Reload(PathBuf),
}

impl ConfigSource {
    fn current(&self) -> Result<Cow<'_, ApiConfig>, AppError> {
        match self {
            ConfigSource::Loaded(config) => Ok(Cow::Borrowed(config)),
            ConfigSource::Reload(path) => ApiConfig::load(path).map(Cow::Owned),
        }
    }
}

pub(crate) struct ApiClient<T: Transport> {
    transport: T,
    config: ConfigSource,
    logger: RequestLogger,
}

impl<T: Transport> ApiClient<T> {
    pub(crate) fn new(transport: T, config: ConfigSource, logger: RequestLogger) -> Self {
        ApiClient {
            transport,
            config,
            logger,
        }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Log the request, then PATCH it. Returns the response body on 2xx.
    ///
    /// Errors are reported here and handed back for the run summary; the
    /// caller is expected to carry on with the next row.
    pub(crate) fn submit(&self, payload: &Payload) -> Result<String, SubmitError> {
        let result = self.try_submit(payload);
        match &result {
            Ok(body) => info!("API call succeeded: {body}"),
            Err(e) => error!("Network Error: {}", e.detail()),
        }
        result
    }

    fn try_submit(&self, payload: &Payload) -> Result<String, SubmitError> {
        let config = self.config.current()?;
        let headers = config.headers();

        self.logger
            .append(&headers, payload)
            .map_err(SubmitError::Log)?;

        let body = serde_json::to_string(payload)?;
        let response = self
            .transport
            .patch(&config.api_url, &headers.wire_pairs(), &body)?;

        if response.is_success() {
            Ok(response.body)
        } else {
            Err(SubmitError::Status {
                status: response.status,
                body: response.body,
            })
        }
    }
}
