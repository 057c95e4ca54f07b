//! Result wrapper types for displaying operation outcomes.
//!
//! Wrapper types that format the results of create, update, copy and delete
//! operations with consistent messaging and resource display.

use std::fmt;

use crate::models::Plan;

/// Wrapper type for displaying the result of create operations.
///
/// Formats creation results with a success message carrying the resource ID
/// followed by the full details of the created resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Can track and display the specific changes made during the update,
/// giving users clear feedback about what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper without change tracking.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create a new UpdateResult wrapper with a list of changes.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan {}", self.resource.id)?;
        if !self.changes.is_empty() {
            writeln!(f)?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plan {} ({})",
            self.resource.id, self.resource.name
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn sample_plan() -> Plan {
        Plan {
            id: 9,
            code: String::new(),
            name: "Sample".to_string(),
            sku_name: String::new(),
            sku_price: String::new(),
            posted: None,
            created_at: Timestamp::from_second(1_700_000_000).unwrap(),
            releases: vec![],
        }
    }

    #[test]
    fn test_create_result_display() {
        let output = format!("{}", CreateResult::new(sample_plan()));
        assert!(output.contains("Created plan with ID: 9"));
        assert!(output.contains("# 9. Sample"));
    }

    #[test]
    fn test_update_result_lists_changes() {
        let result =
            UpdateResult::with_changes(sample_plan(), vec!["name: a -> b".to_string()]);
        let output = format!("{}", result);
        assert!(output.contains("Updated plan 9"));
        assert!(output.contains("- name: a -> b"));
    }

    #[test]
    fn test_delete_result_display() {
        let output = format!("{}", DeleteResult::new(sample_plan()));
        assert_eq!(output, "Deleted plan 9 (Sample)\n");
    }
}
