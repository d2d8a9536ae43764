pub mod converter;
pub mod filesystem;
pub mod log_file;
