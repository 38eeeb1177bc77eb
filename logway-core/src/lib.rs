pub mod aggregate;
pub mod api;
pub mod backend;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod query;
pub mod registry;
pub mod server;
pub mod service;
