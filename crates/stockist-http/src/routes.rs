use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use stockist_core::{
    normalizer::{parse_features_traced, parse_specifications_traced, FeatureBranch, SpecBranch},
    FeatureList, ProductForm, SeparatorStyle, SpecificationMap,
};
use tracing::{info, warn};

use crate::{error::ApiError, state::AppState};

pub const ENDPOINTS: &[&str] = &[
    "GET  /api/health",
    "POST /api/normalize/features",
    "POST /api/normalize/specifications",
    "POST /api/products/normalize",
];

#[derive(Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    text: String,
    #[serde(default)]
    lenient: bool,
}

#[derive(Serialize)]
pub struct FeaturesResponse {
    features: FeatureList,
    branch: Option<FeatureBranch>,
}

#[derive(Serialize)]
pub struct SpecificationsResponse {
    specifications: SpecificationMap,
    branch: Option<SpecBranch>,
}

pub async fn index_handler() -> impl IntoResponse {
    Json(json!({
        "message": "Stockist API is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ENDPOINTS,
    }))
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "normalizer": "ready",
        "fallback_key": state.spec_options.fallback_key,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn features_handler(
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<FeaturesResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::MalformedPayload(e.body_text()))?;
    let (features, branch) = parse_features_traced(&request.text);

    info!(count = features.len(), branch = ?branch, "normalized features");
    Ok(Json(FeaturesResponse { features, branch }))
}

pub async fn specifications_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<SpecificationsResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::MalformedPayload(e.body_text()))?;
    let separators = if request.lenient {
        SeparatorStyle::Lenient
    } else {
        SeparatorStyle::ColonOnly
    };
    let options = state.spec_options.clone().with_separators(separators);
    let (specifications, branch) = parse_specifications_traced(&request.text, &options);

    info!(count = specifications.len(), branch = ?branch, "normalized specifications");
    Ok(Json(SpecificationsResponse {
        specifications,
        branch,
    }))
}

pub async fn product_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProductForm>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(form) = payload.map_err(|e| ApiError::MalformedPayload(e.body_text()))?;

    let product = form.normalize(&state.spec_options).map_err(|source| {
        warn!(error = %source, "product form rejected");
        ApiError::InvalidForm {
            source,
            received: form.required_echo(),
        }
    })?;

    info!(
        name = %product.name,
        category = %product.category,
        features = product.features.len(),
        specifications = product.specifications.len(),
        "product form normalized"
    );
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound {
        method,
        path: uri.path().to_string(),
    }
}
