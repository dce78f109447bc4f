//! Data transfer objects shared between the server and the web client.

pub mod api;
pub mod campaign;
pub mod donation;
pub mod user;
