pub mod cors;
pub mod error;
pub mod patient;
pub mod server;
pub mod store;
