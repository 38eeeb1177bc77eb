pub mod config;
pub mod explain;


pub use config::ConfigCmd;
pub use explain::ExplainCmd;
