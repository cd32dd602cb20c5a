//! HTTP Handlers

mod auth;
mod data;
mod fallback;
mod ping;

pub use auth::*;
pub use data::*;
pub use fallback::*;
pub use ping::*;
