//! Shared response and serialization types.

pub mod format;
mod response;

pub use response::{ApiResponse, Created, CreatedId, MessageResponse};
