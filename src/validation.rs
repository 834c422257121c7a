//! Input validation for a season's team list.
//!
//! Checks structural integrity of teams before a schedule is built.
//! Detects:
//! - Duplicate team IDs (the packer tells teams apart by ID)
//! - Duplicate team names (the ranking comparator is no longer total)
//! - Fewer than two teams (no fixtures can be generated)

use std::collections::HashSet;

use crate::models::Team;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two teams share the same ID.
    DuplicateId,
    /// Two teams share the same name.
    DuplicateName,
    /// Fewer than two teams.
    TooFewTeams,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether the season cannot be built with this problem present.
    pub fn is_fatal(&self) -> bool {
        self.kind == ValidationErrorKind::DuplicateId
    }
}

/// Validates the team list of a season.
///
/// Checks:
/// 1. No duplicate team IDs
/// 2. No duplicate team names
/// 3. At least two teams
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_teams(teams: &[Team]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for team in teams {
        if !ids.insert(team.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team ID: {}", team.id),
            ));
        }
        if !names.insert(team.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate team name: '{}'", team.name),
            ));
        }
    }

    if teams.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewTeams,
            format!("A season needs at least two teams, got {}", teams.len()),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamId;

    #[test]
    fn test_valid_teams() {
        let teams = vec![Team::new(TeamId(1), "A"), Team::new(TeamId(2), "B")];
        assert!(validate_teams(&teams).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let teams = vec![Team::new(TeamId(1), "A"), Team::new(TeamId(1), "B")];
        let errors = validate_teams(&teams).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.is_fatal()));
    }

    #[test]
    fn test_duplicate_name_not_fatal() {
        let teams = vec![Team::new(TeamId(1), "A"), Team::new(TeamId(2), "A")];
        let errors = validate_teams(&teams).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateName);
        assert!(!errors[0].is_fatal());
    }

    #[test]
    fn test_too_few_teams() {
        let errors = validate_teams(&[Team::new(TeamId(1), "Solo")]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TooFewTeams));
    }

    #[test]
    fn test_multiple_errors() {
        let teams = vec![Team::new(TeamId(1), "A"), Team::new(TeamId(1), "A")];
        let errors = validate_teams(&teams).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
