use crate::registry::LookupError;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One service role inside a stack and the container that backs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub role: String,
    pub container: String,
}

impl ServiceEntry {
    pub fn new(role: impl Into<String>, container: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            container: container.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    pub name: String,
    pub services: Vec<ServiceEntry>,
}

impl Stack {
    pub fn new(name: impl Into<String>, services: Vec<ServiceEntry>) -> Self {
        Self {
            name: name.into(),
            services,
        }
    }

    pub fn roles(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.role.as_str()).collect()
    }

    pub fn container(&self, role: &str) -> Option<&str> {
        self.services
            .iter()
            .find(|s| s.role == role)
            .map(|s| s.container.as_str())
    }
}

/// Borrowed view of one (stack, role, container) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRef<'a> {
    pub stack: &'a str,
    pub role: &'a str,
    pub container: &'a str,
}

/// Immutable stack -> role -> container table.
///
/// Order is the order the stacks and roles were declared in, and every
/// listing produced from the registry follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceRegistry {
    stacks: Vec<Stack>,
}

impl ServiceRegistry {
    pub fn new(stacks: Vec<Stack>) -> Self {
        Self { stacks }
    }

    /// The registry used when the configuration does not declare any stacks.
    pub fn builtin() -> Self {
        Self::new(vec![
            Stack::new(
                "template",
                vec![
                    ServiceEntry::new("api", "template-backend-api"),
                    ServiceEntry::new("celery-worker", "template-backend-celery-worker"),
                    ServiceEntry::new("celery-beat", "template-backend-celery-beat"),
                    ServiceEntry::new("nginx", "template-backend-nginx-ssl"),
                    ServiceEntry::new("redis", "template-backend-redis"),
                ],
            ),
            Stack::new(
                "tabular",
                vec![
                    ServiceEntry::new("api", "tabular-bakcend-backend"),
                    ServiceEntry::new("celery-worker", "tabular-bakcend-celery-worker"),
                    ServiceEntry::new("celery-beat", "tabular-bakcend-celery-beat"),
                    ServiceEntry::new("nginx", "tabular-review-nginx-ssl"),
                    ServiceEntry::new("redis", "tabular-review-redis"),
                ],
            ),
        ])
    }

    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn stack_names(&self) -> Vec<&str> {
        self.stacks.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn stack(&self, name: &str) -> Result<&Stack, LookupError> {
        self.stacks
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| LookupError::UnknownStack {
                stack: name.to_string(),
                valid: self.stack_names().into_iter().map(String::from).collect(),
            })
    }

    /// Resolve a (stack, role) pair to its container identifier.
    pub fn resolve(&self, stack: &str, role: &str) -> Result<&str, LookupError> {
        let entry = self.stack(stack)?;
        entry
            .container(role)
            .ok_or_else(|| LookupError::UnknownService {
                stack: stack.to_string(),
                service: role.to_string(),
                valid: entry.roles().into_iter().map(String::from).collect(),
            })
    }

    /// Every configured service, stack by stack, in declaration order.
    pub fn services(&self) -> impl Iterator<Item = ServiceRef<'_>> {
        self.stacks.iter().flat_map(|stack| {
            stack.services.iter().map(move |svc| ServiceRef {
                stack: &stack.name,
                role: &svc.role,
                container: &svc.container,
            })
        })
    }

    pub fn service_count(&self) -> usize {
        self.stacks.iter().map(|s| s.services.len()).sum()
    }
}

struct StackServices<'a>(&'a Stack);

impl Serialize for StackServices<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.services.len()))?;
        for svc in &self.0.services {
            map.serialize_entry(&svc.role, &svc.container)?;
        }
        map.end()
    }
}

impl Serialize for ServiceRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stacks.len()))?;
        for stack in &self.stacks {
            map.serialize_entry(&stack.name, &StackServices(stack))?;
        }
        map.end()
    }
}
