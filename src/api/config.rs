//! Connection and auth parameters read from the API config file

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::consts::DEFAULT_CONTENT_TYPE;
use crate::error::AppError;

/// Contents of `config.json`. Header fields may be absent; only the URL is required.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiConfig {
    #[serde(rename = "cookieHeader", default)]
    pub(crate) cookie_header: String,
    #[serde(rename = "Authorization", default)]
    pub(crate) authorization: String,
    #[serde(rename = "Origin", default)]
    pub(crate) origin: String,
    #[serde(rename = "Referer", default)]
    pub(crate) referer: String,
    #[serde(rename = "contentType", default)]
    pub(crate) content_type: String,
    #[serde(rename = "apiUrl")]
    pub(crate) api_url: String,
}

impl ApiConfig {
    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::Read {
            kind: "API config",
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| AppError::Parse {
            kind: "API config",
            path: path.to_path_buf(),
            source,
        })
    }

    pub(crate) fn headers(&self) -> RequestHeaders {
        RequestHeaders {
            cookie: self.cookie_header.clone(),
            authorization: self.authorization.clone(),
            origin: self.origin.clone(),
            referer: self.referer.clone(),
            content_type: if self.content_type.is_empty() {
                DEFAULT_CONTENT_TYPE.to_string()
            } else {
                self.content_type.clone()
            },
        }
    }
}

/// Header set sent with every PATCH, serialized in this order into the request log.
/// Empty headers are neither sent nor logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct RequestHeaders {
    #[serde(rename = "Cookie", skip_serializing_if = "String::is_empty")]
    pub(crate) cookie: String,
    #[serde(rename = "Authorization", skip_serializing_if = "String::is_empty")]
    pub(crate) authorization: String,
    #[serde(rename = "Origin", skip_serializing_if = "String::is_empty")]
    pub(crate) origin: String,
    #[serde(rename = "Referer", skip_serializing_if = "String::is_empty")]
    pub(crate) referer: String,
    #[serde(rename = "Content-Type", skip_serializing_if = "String::is_empty")]
    pub(crate) content_type: String,
}

impl RequestHeaders {
    /// Header name/value pairs to put on the wire; empty values are left out.
    pub(crate) fn wire_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("Cookie", self.cookie.as_str()),
            ("Authorization", self.authorization.as_str()),
            ("Origin", self.origin.as_str()),
            ("Referer", self.referer.as_str()),
            ("Content-Type", self.content_type.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}
