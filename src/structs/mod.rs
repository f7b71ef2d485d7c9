pub mod format;
pub mod request;
