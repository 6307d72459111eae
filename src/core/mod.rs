pub mod auth;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod log;
pub mod session;
pub mod stats;
pub mod sync;
