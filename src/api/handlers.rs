//! API request handlers
//!
//! Handlers for all REST API endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::core::compare_bytes;
use crate::error::SheetResult;
use crate::excel::formula_column_letters;
use crate::layout::Layout;
use crate::types::{ComparisonSummary, ListingEntry, PriceChange};
use crate::writer::export_to_string;

use super::server::AppState;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

impl EndpointInfo {
    fn new(path: &str, method: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Product Sheet Comparator".to_string(),
        version: state.version.clone(),
        description: "Compare a new and an old product table by product ID".to_string(),
        endpoints: vec![
            EndpointInfo::new("/health", "GET", "Health check endpoint"),
            EndpointInfo::new("/version", "GET", "Get server version"),
            EndpointInfo::new(
                "/api/v1/compare",
                "POST",
                "Compare two CSV product tables and build the output table",
            ),
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_message: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        uptime_message: "Server is running".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec![
            "add".to_string(),
            "delete".to_string(),
            "price-change".to_string(),
            "formula-export".to_string(),
        ],
    }))
}

/// Compare request: both uploads as CSV text
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub new_csv: String,
    pub old_csv: String,
    /// Overrides on top of the server's layout
    #[serde(default)]
    pub layout: Option<Layout>,
}

/// Compare response: the four result views
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub summary: ComparisonSummary,
    pub add: Vec<ListingEntry>,
    pub delete: Vec<ListingEntry>,
    /// `null` when either table lacks a price column
    pub price_changes: Option<Vec<PriceChange>>,
    /// Column letters holding the synthesized formulas, e.g. `["N", "O"]`
    pub formula_columns: [String; 2],
    pub export_file_name: String,
    pub export_csv: String,
}

/// Run one comparison for a request.
pub fn run_compare(req: &CompareRequest, default_layout: &Layout) -> SheetResult<CompareResponse> {
    let layout = match &req.layout {
        Some(layout) => {
            layout.validate()?;
            layout
        }
        None => default_layout,
    };

    let comparison = compare_bytes(req.new_csv.as_bytes(), req.old_csv.as_bytes(), layout)?;

    Ok(CompareResponse {
        summary: comparison.summary(),
        add: comparison.add_list(),
        delete: comparison.delete_list(),
        formula_columns: formula_column_letters(&comparison.formula_columns),
        export_csv: export_to_string(&comparison.export)?,
        export_file_name: layout.export_file_name.clone(),
        price_changes: comparison.price_changes,
    })
}

/// POST /api/v1/compare - Compare two product tables
pub async fn compare(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CompareRequest>,
) -> impl IntoResponse {
    match run_compare(&req, &state.layout) {
        Ok(response) => (StatusCode::OK, Json(ApiResponse::ok(response))),
        Err(e) => {
            warn!(error = %e, "compare request rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::<CompareResponse>::err(e.to_string())),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_request_deserialize_without_layout() {
        let json = r#"{"new_csv": "id\nA\n", "old_csv": "id\n"}"#;
        let req: CompareRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.new_csv, "id\nA\n");
        assert!(req.layout.is_none());
    }

    #[test]
    fn test_compare_request_partial_layout() {
        let json = r#"{"new_csv": "", "old_csv": "", "layout": {"reference_letters": ["P", "Q"]}}"#;
        let req: CompareRequest = serde_json::from_str(json).unwrap();
        let layout = req.layout.unwrap();
        assert_eq!(layout.reference_letters, ["P", "Q"]);
        assert_eq!(layout.column_threshold, 15);
    }

    #[test]
    fn test_run_compare_uses_request_layout() {
        let req = CompareRequest {
            new_csv: "id,name\nA,x\n".to_string(),
            old_csv: "id,name\n".to_string(),
            layout: Some(Layout {
                appended_names: ["Link1".to_string(), "Link2".to_string()],
                ..Layout::default()
            }),
        };
        let response = run_compare(&req, &Layout::default()).unwrap();
        assert_eq!(response.export_csv, "id,name,Link1,Link2\nA,x,=L2.url,=M2.url\n");
        assert_eq!(response.formula_columns, ["C", "D"]);
    }

    #[test]
    fn test_run_compare_rejects_invalid_layout() {
        let req = CompareRequest {
            new_csv: "id\nA\n".to_string(),
            old_csv: "id\nA\n".to_string(),
            layout: Some(Layout {
                target_positions: [1, 1],
                ..Layout::default()
            }),
        };
        assert!(run_compare(&req, &Layout::default()).is_err());
    }

    #[test]
    fn test_api_response_err_has_no_data() {
        let response: ApiResponse<CompareResponse> = ApiResponse::err("bad input");
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.error.as_deref(), Some("bad input"));
    }
}
