pub mod error;
pub mod v1;
