use serde::{Deserialize, Serialize};

/// One tracked span tagged with the project it is billed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Interval {
    /// Raw CSV value, passed through untouched
    pub(crate) start_time: String,
    /// Raw CSV value, passed through untouched
    pub(crate) end_time: String,
    pub(crate) project_id: String,
}

/// Body of the PATCH request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Payload {
    pub(crate) id: String,
    pub(crate) intervals: Vec<Interval>,
    /// Outer window start: previous UTC day at 23:00
    pub(crate) start_time: String,
    /// Outer window end: UTC day of the interval end at 23:00
    pub(crate) end_time: String,
}
