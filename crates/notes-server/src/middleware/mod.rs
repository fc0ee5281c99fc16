//! Middleware shared by every route.

pub mod panic;
pub mod request_id;
