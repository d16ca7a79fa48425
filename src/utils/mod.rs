pub(crate) mod date;
pub(crate) mod timezone;

pub(crate) use date::parse_timestamp;
pub(crate) use timezone::Timezone;
