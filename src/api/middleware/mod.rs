//! API middleware.

mod db_session;
mod session;

pub use db_session::db_session_middleware;
pub use session::{AuthSession, CurrentUser};
