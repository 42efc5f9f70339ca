//! Small helpers shared by the client and the data model

pub mod format;
pub(crate) mod log_sanitizer;
