use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use samplereg_core::NewSample;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/users/:id/samples/", post(create_sample_for_account))
        .route("/samples/", get(list_samples))
}

pub async fn create_sample_for_account(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::CreateSampleRequest>,
) -> axum::response::Response {
    let owner_id: i64 = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid account id")
        }
    };

    let mut session = match services.session().await {
        Ok(s) => s,
        Err(e) => return errors::store_error_to_response(e),
    };

    match session.create_sample(owner_id, &NewSample::from(body)).await {
        Ok(sample) => (StatusCode::OK, Json(sample)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_samples(
    Extension(services): Extension<Arc<AppServices>>,
    Query(page): Query<dto::PageQuery>,
) -> axum::response::Response {
    let mut session = match services.session().await {
        Ok(s) => s,
        Err(e) => return errors::store_error_to_response(e),
    };

    match session.list_samples(page.skip, page.limit).await {
        Ok(samples) => (StatusCode::OK, Json(samples)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
