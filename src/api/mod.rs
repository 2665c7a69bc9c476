mod handlers;
mod models;

use axum::{routing::post, Router};

pub use handlers::{calculate_sum, not_found};
pub use models::{CalculateSumRequest, ErrorResponse, Operand, SumRequestPayload, SumResponse};

pub const CALCULATE_SUM_PATH: &str = "/calculate_sum";

pub fn router() -> Router {
    Router::new()
        .route(CALCULATE_SUM_PATH, post(calculate_sum))
        .fallback(not_found)
}
