// Copyright © 2025 Nipun Kumar

//! HTTP client for the drug analysis backend.
//!
//! Native builds talk to the backend through `reqwest`; in the browser the
//! request goes through `gloo-net`. Both funnel the raw status and body into
//! [`decode_response`], so error handling is identical on every target.

use async_trait::async_trait;
use dioxus::logger::tracing::{info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    analysis::{AnalysisRequest, DrugResult},
    config::AppConfig,
    error::RequestError,
};

/// Anything that can answer an [`AnalysisRequest`].
#[async_trait(?Send)]
pub trait AnalyzeApi {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Vec<DrugResult>, RequestError>;
}

pub struct AnalysisClient {
    endpoint: String,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl AnalysisClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.analyze_endpoint(),
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::Client::new(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post(&self, request: &AnalysisRequest) -> Result<(u16, String), RequestError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        Ok((status, body))
    }

    #[cfg(target_arch = "wasm32")]
    async fn post(&self, request: &AnalysisRequest) -> Result<(u16, String), RequestError> {
        use gloo_net::http::Request;

        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| RequestError::Transport(format!("{e:?}")))?
            .send()
            .await
            .map_err(|e| RequestError::Transport(format!("{e:?}")))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(format!("{e:?}")))?;
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl AnalyzeApi for AnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Vec<DrugResult>, RequestError> {
        info!("analyzing {} drug(s) via {}", request.drugs.len(), self.endpoint);
        let (status, body) = match self.post(request).await {
            Ok(r) => r,
            Err(e) => {
                warn!("analysis request failed: {e}");
                return Err(e);
            }
        };
        let decoded = decode_response(status, &body);
        if let Err(e) = &decoded {
            warn!("analysis request failed: {e}");
        }
        decoded
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

/// Turns a raw `/analyze` response into results or a [`RequestError`].
pub fn decode_response(status: u16, body: &str) -> Result<Vec<DrugResult>, RequestError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| RequestError::Decode(e.to_string()));
    }
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(detail_text);
    Err(RequestError::Status { status, detail })
}

// FastAPI sends either a plain string or, for request validation failures,
// a list of `{loc, msg, type}` objects.
fn detail_text(detail: Value) -> Option<String> {
    match detail {
        Value::String(s) => Some(s),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|i| i.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}
