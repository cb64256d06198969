//! HTTP request handlers for the Redemption Points Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{RuleSet, evaluate_with_policy, has_errors, validate_rule_set};
use crate::models::{AuditStep, AuditTrace};

use super::request::{EvaluationRequest, ValidationRequest};
use super::response::{
    ApiError, ApiErrorResponse, EvaluationResponse, RulesResponse, ValidationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/rules", get(rules_handler))
        .route("/rules/validate", post(validate_handler))
        .with_state(state)
}

/// Handler for POST /evaluate.
///
/// Evaluates an order total against the loaded program, or against the
/// rules supplied in the request when present.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let override_rules = request.override_rules();
    let rule_source = if override_rules.is_some() {
        "request"
    } else {
        "program"
    };
    let rules: &RuleSet = override_rules.as_ref().unwrap_or_else(|| state.rules());
    let policy = request.policy.unwrap_or_else(|| state.policy());

    let result = match evaluate_with_policy(request.order_total, rules, policy) {
        Ok(result) => result,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                order_total = %request.order_total,
                error = %err,
                "Evaluation rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            return json_response(api_error.status, &api_error.error);
        }
    };

    let steps = vec![
        AuditStep {
            step_number: 1,
            rule_id: "input_validation".to_string(),
            rule_name: "Order Total Validation".to_string(),
            input: serde_json::json!({
                "order_total": request.order_total.normalize().to_string()
            }),
            output: serde_json::json!({ "accepted": true }),
            reasoning: "Order total is a non-negative amount".to_string(),
        },
        AuditStep {
            step_number: 2,
            rule_id: "tier_selection".to_string(),
            rule_name: "Tier Selection".to_string(),
            input: serde_json::json!({
                "order_total": request.order_total.normalize().to_string(),
                "rule_source": rule_source,
                "rule_count": rules.len(),
                "eligible_count": rules.eligible().len(),
                "policy": policy
            }),
            output: serde_json::json!({
                "points_awarded": result.points_awarded,
                "applied_rule": result.applied_rule_name()
            }),
            reasoning: result.explanation.clone(),
        },
    ];

    let warnings = validate_rule_set(rules);
    let duration_us = micros(start_time.elapsed());

    info!(
        correlation_id = %correlation_id,
        order_total = %request.order_total,
        points_awarded = result.points_awarded,
        applied_rule = result.applied_rule_name().unwrap_or("none"),
        rule_source,
        duration_us,
        "Evaluation completed successfully"
    );

    let response = EvaluationResponse {
        evaluation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        order_total: request.order_total,
        points_awarded: result.points_awarded,
        applied_rule: result.applied_rule,
        explanation: result.explanation,
        policy,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    };

    json_response(StatusCode::OK, &response)
}

/// Handler for POST /rules/validate.
///
/// Always answers 200; problems are reported in the body.
async fn validate_handler(payload: Result<Json<ValidationRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let rules = RuleSet::new(request.rules);
    let issues = validate_rule_set(&rules);
    let valid = !has_errors(&issues);

    info!(
        correlation_id = %correlation_id,
        rules = rules.len(),
        issues = issues.len(),
        valid,
        "Rule set validated"
    );

    json_response(StatusCode::OK, &ValidationResponse { valid, issues })
}

/// Handler for GET /rules.
async fn rules_handler(State(state): State<AppState>) -> Response {
    let response = RulesResponse {
        program: state.program().clone(),
        policy: state.policy(),
        rules: state.rules().rules().to_vec(),
    };

    json_response(StatusCode::OK, &response)
}

/// Whole microseconds in `duration`, saturating at `u64::MAX`.
fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}
