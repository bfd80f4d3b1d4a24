//! HTTP route handlers for Axum.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::{
    api::types::{DatasetsDto, ErrorDto, PredictRequest},
    triage::DISCLAIMER,
};

use super::AppState;

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorDto {
        success: false,
        error: message.into(),
        status: status.as_u16(),
        disclaimer: DISCLAIMER,
    };
    (status, Json(body)).into_response()
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(%rejection, "rejected predict payload");
            return error(StatusCode::BAD_REQUEST, "No JSON data provided");
        }
    };

    let response = state.triage.respond(&request.symptoms);
    let status = if response.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    info!(status = status.as_u16(), "predict handled");
    (status, Json(response)).into_response()
}

pub async fn datasets(State(state): State<AppState>) -> Json<DatasetsDto> {
    Json(DatasetsDto {
        summary: state.datasets.as_ref().clone(),
        disclaimer: DISCLAIMER,
    })
}

pub async fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Endpoint not found")
}
