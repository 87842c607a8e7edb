//! Command implementations for the gitnum CLI.

pub mod passthrough;
pub mod status;

pub use passthrough::execute_passthrough;
pub use status::execute_status;
