//! Shared test harness for promptplan E2E tests.
//!
//! Builds assemblers the way the binary does (from configuration) and
//! stands up a wiremock server in place of the Ollama service.

#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pp_classifier::{ClassifierConfig, GenerativeConfig, PlanAssembler};
use pp_protocol::ActionPlan;

/// Fixed reference date (a Wednesday) so schedule assertions are stable.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Build an Ollama chat response body wrapping `content`.
pub fn ollama_response(content: &str) -> Value {
    json!({
        "model": "phi3:mini",
        "message": {
            "role": "assistant",
            "content": content
        },
        "done": true
    })
}

/// Assembler with the generative path pointed at `server`.
pub fn generative_assembler(server: &MockServer) -> PlanAssembler {
    generative_assembler_with_timeout(server, 2)
}

pub fn generative_assembler_with_timeout(server: &MockServer, timeout_secs: u64) -> PlanAssembler {
    let config = ClassifierConfig {
        generative: GenerativeConfig {
            enabled: true,
            host: server.uri(),
            timeout_secs,
            ..Default::default()
        },
    };
    PlanAssembler::from_config(&config)
}

/// Mount a 200 reply whose message content is `content`.
pub async fn mount_reply(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ollama_response(content)))
        .mount(server)
        .await;
}

/// Mount a bare status reply.
pub async fn mount_status(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Plan produced by the rules alone for the same input.
pub fn deterministic_plan(text: &str) -> ActionPlan {
    PlanAssembler::deterministic().classify_deterministic(text, today())
}
