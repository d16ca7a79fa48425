//! Timesheet API access: config, wire transport and the submitting client

mod client;
mod config;
#[cfg(test)]
pub(crate) mod fake;
mod transport;

pub(crate) use client::{ApiClient, ConfigSource};
pub(crate) use config::{ApiConfig, RequestHeaders};
pub(crate) use transport::{Transport, UreqTransport};
