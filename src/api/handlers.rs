use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::error::OperandError;

use super::models::{CalculateSumRequest, ErrorResponse, Operand, SumResponse};

pub async fn calculate_sum(
    Json(payload): Json<CalculateSumRequest>,
) -> Result<Json<SumResponse>, (StatusCode, Json<ErrorResponse>)> {
    let sum = add_operands(payload.num1.as_ref(), payload.num2.as_ref()).map_err(|err| {
        warn!(error = %err, "rejected calculate_sum request");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
    })?;

    info!(result = sum, "calculated sum");
    Ok(Json(SumResponse::new(sum)))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}

fn add_operands(num1: Option<&Operand>, num2: Option<&Operand>) -> Result<i64, OperandError> {
    let a = to_integer("num1", num1)?;
    let b = to_integer("num2", num2)?;
    a.checked_add(b).ok_or(OperandError::Overflow(a, b))
}

/// Integer value of an operand. Text is trimmed and may carry a sign,
/// floats are truncated toward zero.
fn to_integer(field: &'static str, operand: Option<&Operand>) -> Result<i64, OperandError> {
    match operand.ok_or(OperandError::Missing(field))? {
        Operand::Int(value) => Ok(*value),
        Operand::Float(value) => {
            let truncated = value.trunc();
            if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64
            {
                Ok(truncated as i64)
            } else {
                Err(OperandError::NotAnInteger {
                    field,
                    value: value.to_string(),
                })
            }
        }
        Operand::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| OperandError::NotAnInteger {
                field,
                value: text.clone(),
            }),
    }
}
