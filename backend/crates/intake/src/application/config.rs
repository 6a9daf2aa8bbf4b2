//! Intake Configuration

/// Intake configuration
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Maximum number of records returned by the list operations
    pub list_limit: i64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self { list_limit: 1000 }
    }
}
