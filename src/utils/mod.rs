pub(crate) mod date;
pub(crate) mod logging;
pub(crate) mod open;
pub(crate) mod timezone;

pub(crate) use date::{format_date, parse_date};
pub(crate) use logging::init_logging;
pub(crate) use open::open_in_editor;
pub(crate) use timezone::Timezone;
