mod format;
pub(crate) mod sessions;

pub(crate) use sessions::{output_session_json, print_session_list};
