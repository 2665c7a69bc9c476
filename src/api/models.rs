use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /calculate_sum` as sent by the requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumRequestPayload {
    pub num1: String,
    pub num2: String,
}

/// Body of `POST /calculate_sum` as accepted by the service.
#[derive(Debug, Deserialize)]
pub struct CalculateSumRequest {
    #[serde(default)]
    pub num1: Option<Operand>,
    #[serde(default)]
    pub num2: Option<Operand>,
}

/// An operand as it may arrive on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Int(i64),
    Float(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumResponse {
    #[serde(default)]
    pub result: Option<Value>,
}

impl SumResponse {
    pub fn new(result: impl Into<Value>) -> Self {
        Self {
            result: Some(result.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
