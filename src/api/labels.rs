//! Label generation endpoint

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::label::{LabelQuery, LabelResponse},
};

/// Generate printable label records for a barcode or barcode range
#[utoipa::path(
    post,
    path = "/labels",
    tag = "labels",
    request_body = LabelQuery,
    responses(
        (status = 200, description = "Printable label records", body = LabelResponse),
        (status = 400, description = "Neither a barcode nor a range was supplied")
    )
)]
pub async fn generate_labels(
    State(state): State<crate::AppState>,
    Json(query): Json<LabelQuery>,
) -> AppResult<Json<LabelResponse>> {
    let labels = state.services.labels.generate(&query).await?;

    Ok(Json(LabelResponse {
        total: labels.len(),
        labels,
    }))
}
