//! Core data models for the Redemption Points Engine.
//!
//! This module contains the domain models shared by the engine, the
//! configuration loader and the HTTP API.

mod redemption_result;
mod redemption_rule;
mod validation_issue;

pub use redemption_result::{AuditStep, AuditTrace, RedemptionResult};
pub use redemption_rule::RedemptionRule;
pub use validation_issue::{IssueCode, IssueSeverity, ValidationIssue};
