//! HTTP API module for the Redemption Points Engine.
//!
//! This module exposes evaluation and rule-set validation over REST so the
//! order pipeline and the admin panel can call the engine.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EvaluationRequest, ValidationRequest};
pub use response::{ApiError, EvaluationResponse, RulesResponse, ValidationResponse};
pub use state::AppState;
