//! # Festival Generation Service
//!
//! Backend logic for the `POST /generate-festival` endpoint.
//!
//! ## Workflow
//!
//! 1.  **Validation**: `festival` must be present in the JSON body, be a string
//!     and be non-empty. Anything else is answered with `400 Bad Request`.
//!
//! 2.  **Prompt**: the subject is substituted into the fixed Hindi instruction
//!     built by `prompt::build_prompt`.
//!
//! 3.  **Upstream call**: `GeminiClient::generate_text` performs exactly one
//!     request, bounded by the configured timeout. Transport failures and
//!     upstream error statuses become `500` with a `detail` payload.
//!
//! 4.  **Extraction**: the first candidate's text is handed to
//!     `extract::extract`. No text at all is a `502` "no content"; text without
//!     a usable record is a `502` carrying the raw model output.
//!
//! 5.  **HTTP Response**: the parsed `FestivalRecord` is returned as JSON.

use super::extract::extract;
use super::prompt::build_prompt;
use crate::error::ApiError;
use crate::gemini::GeminiClient;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::festival::FestivalRecord;
use log::{error, info, warn};
use serde_json::Value;
use uuid::Uuid;

/// Actix web handler for `POST /generate-festival`.
///
/// # Returns
/// - `200 OK` with the `FestivalRecord` as JSON.
/// - `400`, `502` or `500` with a JSON error body, see [`ApiError`].
pub async fn process(
    client: web::Data<GeminiClient>,
    payload: web::Json<Value>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    match generate_festival(&client, &payload, request_id).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => {
            if let ApiError::Internal { detail } = &e {
                error!("[{}] Server error: {}", request_id, detail);
            }
            e.error_response()
        }
    }
}

/// Pulls the subject out of the request body.
fn festival_from(payload: &Value) -> Result<&str, ApiError> {
    match payload.get("festival") {
        Some(Value::String(name)) if !name.is_empty() => Ok(name.as_str()),
        _ => Err(ApiError::Validation(
            "Missing or invalid festival name".to_string(),
        )),
    }
}

/// Log line for model output that held no usable record.
fn invalid_output_line(request_id: Uuid, raw: &str) -> String {
    format!("[{}] Invalid JSON from model: {}", request_id, raw)
}

/// Runs one lookup end to end.
async fn generate_festival(
    client: &GeminiClient,
    payload: &Value,
    request_id: Uuid,
) -> Result<FestivalRecord, ApiError> {
    let festival = festival_from(payload)?;
    info!("[{}] Generating festival details for '{}'", request_id, festival);

    let prompt = build_prompt(festival);
    let text = client
        .generate_text(&prompt)
        .await?
        .ok_or(ApiError::UpstreamEmpty)?;

    extract::<FestivalRecord>(&text).map_err(|e| {
        warn!("{}", invalid_output_line(request_id, &e.raw));
        ApiError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::services::{festivals, json_config};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/v1beta/models/gemini-1.5-flash-latest:generateContent";

    fn record_json() -> Value {
        json!({
            "त्योहार": "दिवाली",
            "परिचय": "रोशनी का त्योहार",
            "मनाने_का_कारण": "राम की वापसी",
            "मनाने_की_विधि": "दीये जलाना",
            "अनुष्ठान": "लक्ष्मी पूजन",
            "पूजे_जाने_वाले_देवता": "लक्ष्मी, गणेश",
            "उपयोग_किए_जाने_वाले_मंत्र": "ॐ महालक्ष्म्यै नमः",
            "कहानी_के_पीछे": "चौदह वर्ष का वनवास"
        })
    }

    fn candidate_with(text: &str) -> Value {
        json!({ "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }] })
    }

    fn client_for(server: &MockServer, timeout: Duration) -> GeminiClient {
        let mut config = AppConfig::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some("test-key".to_string()),
            "GEMINI_API_BASE_URL" => Some(server.uri()),
            _ => None,
        })
        .unwrap();
        config.upstream_timeout = timeout;
        GeminiClient::new(&config).unwrap()
    }

    async fn mock_upstream(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(response)
            .mount(server)
            .await;
    }

    async fn call(client: GeminiClient, body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(web::Data::new(client))
                .service(festivals::configure_routes()),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/generate-festival")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn returns_record_from_fenced_model_output() {
        let server = MockServer::start().await;
        let text = format!("```json\n{}\n```", record_json());
        mock_upstream(
            &server,
            ResponseTemplate::new(200).set_body_json(candidate_with(&text)),
        )
        .await;

        let (status, body) = call(
            client_for(&server, Duration::from_secs(30)),
            json!({ "festival": "Diwali" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, record_json());
    }

    #[actix_web::test]
    async fn forwards_subject_inside_prompt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(wiremock::matchers::body_string_contains("Chhath Puja"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_with(
                &record_json().to_string(),
            )))
            .expect(1)
            .mount(&server)
            .await;

        let (status, _) = call(
            client_for(&server, Duration::from_secs(30)),
            json!({ "festival": "Chhath Puja" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        server.verify().await;
    }

    #[actix_web::test]
    async fn missing_festival_is_bad_request_without_upstream_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        for body in [json!({}), json!({ "festival": 42 }), json!({ "festival": "" })] {
            let (status, body) = call(client_for(&server, Duration::from_secs(30)), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Missing or invalid festival name");
        }
        server.verify().await;
    }

    #[actix_web::test]
    async fn malformed_body_is_bad_request() {
        let server = MockServer::start().await;
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(web::Data::new(client_for(&server, Duration::from_secs(30))))
                .service(festivals::configure_routes()),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/generate-festival")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[actix_web::test]
    async fn empty_candidates_is_bad_gateway() {
        let server = MockServer::start().await;
        mock_upstream(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })),
        )
        .await;

        let (status, body) = call(
            client_for(&server, Duration::from_secs(30)),
            json!({ "festival": "Holi" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, json!({ "error": "No content returned from AI" }));
    }

    #[actix_web::test]
    async fn invalid_output_is_logged_with_request_id() {
        let request_id = Uuid::new_v4();
        let line = invalid_output_line(request_id, "not json");
        assert!(line.starts_with(&format!("[{}]", request_id)));
        assert!(line.ends_with("not json"));
    }

    #[actix_web::test]
    async fn unparseable_text_is_bad_gateway_with_raw() {
        let server = MockServer::start().await;
        let text = "माफ़ कीजिए, मुझे इस त्योहार की जानकारी नहीं है।";
        mock_upstream(
            &server,
            ResponseTemplate::new(200).set_body_json(candidate_with(text)),
        )
        .await;

        let (status, body) = call(
            client_for(&server, Duration::from_secs(30)),
            json!({ "festival": "Unknown" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Invalid response format from AI");
        assert_eq!(body["raw"], text);
    }

    #[actix_web::test]
    async fn partial_record_is_bad_gateway() {
        let server = MockServer::start().await;
        let text = json!({ "त्योहार": "होली", "परिचय": "रंग" }).to_string();
        mock_upstream(
            &server,
            ResponseTemplate::new(200).set_body_json(candidate_with(&text)),
        )
        .await;

        let (status, body) = call(
            client_for(&server, Duration::from_secs(30)),
            json!({ "festival": "Holi" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["raw"], text);
    }

    #[actix_web::test]
    async fn upstream_error_status_is_internal_error_with_detail() {
        let server = MockServer::start().await;
        mock_upstream(
            &server,
            ResponseTemplate::new(429).set_body_json(json!({
                "error": { "code": 429, "status": "RESOURCE_EXHAUSTED" }
            })),
        )
        .await;

        let (status, body) = call(
            client_for(&server, Duration::from_secs(30)),
            json!({ "festival": "Holi" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["detail"]["error"]["status"], "RESOURCE_EXHAUSTED");
    }

    #[actix_web::test]
    async fn slow_upstream_is_internal_error() {
        let server = MockServer::start().await;
        mock_upstream(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(candidate_with(&record_json().to_string()))
                .set_delay(Duration::from_secs(5)),
        )
        .await;

        let started = std::time::Instant::now();
        let (status, body) = call(
            client_for(&server, Duration::from_millis(300)),
            json!({ "festival": "Holi" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].is_string());
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
