use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(api::health::health_check, api::voice::process_voice),
    components(schemas(
        api::voice::VoiceRequest,
        api::voice::VoiceResponse,
        api::voice::ErrorResponse,
    )),
    tags(
        (name = "voice-assistant", description = "Voice assistant API")
    )
)]
pub struct ApiDoc;
