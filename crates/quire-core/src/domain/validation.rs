use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A project name becomes a file name at the destination root, so it must
    /// be a single, visible path segment.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| {
            Err(DomainError::InvalidProjectName {
                name: name.into(),
                reason: reason.into(),
            })
        };

        if name.trim().is_empty() {
            return invalid("name cannot be empty");
        }
        if name.starts_with('.') {
            return invalid("name cannot start with '.'");
        }
        if name.contains('/') || name.contains('\\') {
            return invalid("name cannot contain path separators");
        }
        if name.chars().any(char::is_control) {
            return invalid("name cannot contain control characters");
        }
        Ok(())
    }
}
