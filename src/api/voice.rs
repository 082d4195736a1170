use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{ProviderError, SYSTEM_PROMPT};
use crate::infrastructure::AppState;

pub const NO_INPUT_MESSAGE: &str = "No input provided";
pub const PROVIDER_FAILURE_MESSAGE: &str = "Failed to process voice input";

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoiceRequest {
    /// Transcribed speech
    #[schema(value_type = Option<String>)]
    pub text: Option<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VoiceResponse {
    pub response: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures of `/process-voice`. Only fixed messages reach the client.
#[derive(Debug)]
pub enum VoiceError {
    NoInput,
    /// Body is not a JSON object, or `text` is not a string
    InvalidPayload(String),
    Provider(ProviderError),
}

impl From<ProviderError> for VoiceError {
    fn from(e: ProviderError) -> Self {
        VoiceError::Provider(e)
    }
}

impl From<JsonRejection> for VoiceError {
    fn from(e: JsonRejection) -> Self {
        VoiceError::InvalidPayload(e.body_text())
    }
}

impl IntoResponse for VoiceError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            VoiceError::NoInput => (StatusCode::BAD_REQUEST, NO_INPUT_MESSAGE),
            VoiceError::InvalidPayload(detail) => {
                tracing::error!("Error processing voice input: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, PROVIDER_FAILURE_MESSAGE)
            }
            VoiceError::Provider(e) => {
                tracing::error!("Error processing voice input: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, PROVIDER_FAILURE_MESSAGE)
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Empty values (`null`, `""`, `false`, `0`, `[]`, `{}`) count as no input.
/// Any other non-string value is an invalid payload.
fn input_text(text: Option<Value>) -> Result<String, VoiceError> {
    match text {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(VoiceError::NoInput),
        Some(Value::String(s)) if s.is_empty() => Err(VoiceError::NoInput),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(VoiceError::NoInput),
        Some(Value::Array(a)) if a.is_empty() => Err(VoiceError::NoInput),
        Some(Value::Object(o)) if o.is_empty() => Err(VoiceError::NoInput),
        Some(other) => Err(VoiceError::InvalidPayload(format!(
            "text must be a string, got {}",
            other
        ))),
    }
}

#[utoipa::path(
    post,
    path = "/process-voice",
    request_body = VoiceRequest,
    responses(
        (status = 200, description = "Generated reply", body = VoiceResponse),
        (status = 400, description = "No input provided", body = ErrorResponse),
        (status = 500, description = "Unreadable body or provider call failed", body = ErrorResponse)
    )
)]
pub async fn process_voice(
    State(state): State<AppState>,
    payload: Result<Json<VoiceRequest>, JsonRejection>,
) -> Result<Json<VoiceResponse>, VoiceError> {
    let Json(req) = payload?;

    let text = input_text(req.text).inspect_err(|e| {
        if matches!(e, VoiceError::NoInput) {
            tracing::debug!("Rejected voice request without text");
        }
    })?;

    let response = state.generator.generate(SYSTEM_PROMPT, &text).await?;

    Ok(Json(VoiceResponse { response }))
}
