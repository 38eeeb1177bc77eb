use crate::conf::types::LogwayConfig;
use crate::conf::validation::ValidationReport;
use crate::registry::ServiceRegistry;

pub struct ValidatedConfig {
    pub config: LogwayConfig,
    pub registry: ServiceRegistry,
    /// Warnings only; a report with errors never becomes a `ValidatedConfig`.
    pub report: ValidationReport,
}
