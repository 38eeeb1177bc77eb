pub mod backend;
pub mod query;
pub mod server;
pub mod stack;

pub use backend::*;
pub use query::*;
pub use server::*;
pub use stack::*;

use crate::registry::ServiceRegistry;
use serde::{Deserialize, Serialize};

/// Root of `logway.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogwayConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub query: QueryConfig,
    pub stacks: Vec<StackConfig>,
}

impl LogwayConfig {
    /// Registry described by `[[stacks]]`, or the built-in one when none are declared.
    pub fn registry(&self) -> ServiceRegistry {
        if self.stacks.is_empty() {
            return ServiceRegistry::builtin();
        }
        ServiceRegistry::new(self.stacks.iter().map(StackConfig::to_stack).collect())
    }
}
