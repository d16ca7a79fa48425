//! Run inputs: the time-tracker export and the company mapping

mod export;
mod mapping;

pub(crate) use export::{CsvRow, expand_inputs, read_rows};
pub(crate) use mapping::CompanyMapping;
