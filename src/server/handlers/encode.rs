//! Encode API handlers.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::{
    encode::{EncodeRequest, EncodeResult},
    error::LinebarError,
    render::{self, RenderConfig, TextSize},
    symbology::Symbology,
};

use super::super::state::AppState;

type ApiError = (StatusCode, Json<serde_json::Value>);

fn bad_request(message: impl ToString) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message.to_string() })),
    )
}

/// Symbology information returned by the API.
#[derive(Debug, Serialize)]
pub struct SymbologyInfo {
    pub name: &'static str,
    pub label: &'static str,
}

/// Preview request: an encode request plus optional render overrides.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(flatten)]
    pub request: EncodeRequest,
    pub module_width: Option<u32>,
    pub height: Option<u32>,
    pub margin: Option<u32>,
    pub show_text: Option<bool>,
    /// "small" or "large"
    pub text_size: Option<String>,
    /// Hex color, e.g. "#000000"
    pub foreground: Option<String>,
    pub background: Option<String>,
}

impl PreviewRequest {
    /// Overlay the request's fields on the server defaults.
    fn render_config(&self, defaults: &RenderConfig) -> Result<RenderConfig, LinebarError> {
        let mut config = defaults.clone();
        if let Some(w) = self.module_width {
            config.module_width = w;
        }
        if let Some(h) = self.height {
            config.bar_height = h;
        }
        if let Some(m) = self.margin {
            config.margin = m;
        }
        if let Some(show) = self.show_text {
            config.show_text = show;
        }
        if let Some(size) = &self.text_size {
            config.text_size = match size.as_str() {
                "small" => TextSize::Small,
                "large" => TextSize::Large,
                other => {
                    return Err(LinebarError::Config(format!(
                        "Unknown text size '{}' (expected small or large)",
                        other
                    )));
                }
            };
        }
        if let Some(fg) = &self.foreground {
            config.foreground = render::parse_color(fg)?;
        }
        if let Some(bg) = &self.background {
            config.background = render::parse_color(bg)?;
        }
        config.validate()?;
        Ok(config)
    }
}

/// GET /api/symbologies - List supported symbologies.
pub async fn list() -> Json<Vec<SymbologyInfo>> {
    Json(
        Symbology::ALL
            .iter()
            .map(|s| SymbologyInfo {
                name: s.name(),
                label: s.label(),
            })
            .collect(),
    )
}

/// POST /api/encode - Encode text into a module pattern.
pub async fn encode(Json(request): Json<EncodeRequest>) -> Result<Json<EncodeResult>, ApiError> {
    request.encode().map(Json).map_err(bad_request)
}

/// POST /api/encode/preview - Encode and render as PNG.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    Json(preview): Json<PreviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let config = preview
        .render_config(&state.config.render)
        .map_err(bad_request)?;
    let result = preview.request.encode().map_err(bad_request)?;

    let png_bytes = render::render_png(&result, &config).map_err(|e| match e {
        // Canvas too large for this pattern
        LinebarError::Config(_) => bad_request(e),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Preview render failed: {}", e) })),
        ),
    })?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes))
}
