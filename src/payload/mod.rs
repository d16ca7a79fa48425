//! Request body construction for a single CSV row

mod builder;
mod types;
mod window;

pub(crate) use builder::build_payload;
pub(crate) use types::Payload;
#[cfg(test)]
pub(crate) use types::Interval;
