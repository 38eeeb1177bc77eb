use crate::registry::{ServiceEntry, Stack};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StackConfig {
    pub name: String,
    #[serde(default)]
    pub services: Vec<ServiceConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub role: String,
    pub container: String,
}

impl StackConfig {
    pub fn to_stack(&self) -> Stack {
        Stack::new(
            self.name.clone(),
            self.services
                .iter()
                .map(|s| ServiceEntry::new(s.role.clone(), s.container.clone()))
                .collect(),
        )
    }
}
