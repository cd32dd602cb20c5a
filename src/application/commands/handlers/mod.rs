//! Command Handlers 实现

mod auth_handlers;
mod data_handlers;

pub use auth_handlers::*;
pub use data_handlers::*;
