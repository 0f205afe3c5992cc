//! HTTP inbound adapter: customer panel pages and the login surface.

pub mod error;
pub mod health;
pub mod layout;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod tickets;
pub mod users;
pub mod views;

pub use error::ApiResult;
