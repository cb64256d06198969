//! Validation issue model.
//!
//! Rule sets are administrator-edited configuration, so structural problems
//! are reported as data for review instead of being raised as errors.

use serde::{Deserialize, Serialize};

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    /// The rule set is malformed and should not be saved as-is.
    Error,
    /// The rule set works but is probably not what was intended.
    Warning,
}

/// The kind of problem a validation issue describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// A rule has a negative minimum order value.
    NegativeMinOrderValue,
    /// A rule awards a negative number of points.
    NegativeRedeemPoints,
    /// Two active rules share the same minimum order value.
    DuplicateThreshold,
    /// A higher active tier awards fewer points than a lower one.
    NonMonotonicPoints,
    /// Two active rules share the same name.
    DuplicateName,
}

impl IssueCode {
    /// The severity every issue of this kind carries.
    pub fn severity(self) -> IssueSeverity {
        match self {
            IssueCode::NegativeMinOrderValue
            | IssueCode::NegativeRedeemPoints
            | IssueCode::DuplicateThreshold => IssueSeverity::Error,
            IssueCode::NonMonotonicPoints | IssueCode::DuplicateName => IssueSeverity::Warning,
        }
    }
}

/// A structural problem found in a rule set.
///
/// # Example
///
/// ```
/// use redeem_engine::models::{IssueCode, IssueSeverity, ValidationIssue};
///
/// let issue = ValidationIssue::new(IssueCode::DuplicateName, "VIP", "name used twice");
/// assert_eq!(issue.severity, IssueSeverity::Warning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Error or warning.
    pub severity: IssueSeverity,
    /// What kind of problem this is.
    pub code: IssueCode,
    /// The name of the offending rule.
    pub rule_name: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    /// Creates an issue with the severity implied by `code`.
    pub fn new(code: IssueCode, rule_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            rule_name: rule_name.into(),
            message: message.into(),
        }
    }

    /// Returns true for error-severity issues.
    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_problems_are_errors() {
        assert_eq!(IssueCode::NegativeMinOrderValue.severity(), IssueSeverity::Error);
        assert_eq!(IssueCode::NegativeRedeemPoints.severity(), IssueSeverity::Error);
        assert_eq!(IssueCode::DuplicateThreshold.severity(), IssueSeverity::Error);
    }

    #[test]
    fn test_monotonicity_is_a_warning() {
        let issue = ValidationIssue::new(IssueCode::NonMonotonicPoints, "Premium", "fewer points");
        assert_eq!(issue.severity, IssueSeverity::Warning);
        assert!(!issue.is_error());
    }

    #[test]
    fn test_issue_serializes_snake_case() {
        let issue = ValidationIssue::new(IssueCode::DuplicateThreshold, "Medium", "dup");
        let json = serde_json::to_value(&issue).unwrap();

        assert_eq!(json["severity"], "error");
        assert_eq!(json["code"], "duplicate_threshold");
        assert_eq!(json["rule_name"], "Medium");
    }
}
