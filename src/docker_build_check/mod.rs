pub mod api;
pub mod check;
pub mod config;
pub mod context;
pub mod docker;
pub mod environment;
