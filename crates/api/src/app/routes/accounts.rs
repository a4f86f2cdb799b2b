use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use samplereg_core::NewAccount;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/users/", post(create_account).get(list_accounts))
        .route("/users/:id", get(get_account))
}

pub async fn create_account(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateAccountRequest>,
) -> axum::response::Response {
    let mut session = match services.session().await {
        Ok(s) => s,
        Err(e) => return errors::store_error_to_response(e),
    };

    match session.create_account(&NewAccount::from(body)).await {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_accounts(
    Extension(services): Extension<Arc<AppServices>>,
    Query(page): Query<dto::PageQuery>,
) -> axum::response::Response {
    let mut session = match services.session().await {
        Ok(s) => s,
        Err(e) => return errors::store_error_to_response(e),
    };

    match session.list_accounts(page.skip, page.limit).await {
        Ok(accounts) => (StatusCode::OK, Json(accounts)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_account(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: i64 = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid account id")
        }
    };

    let mut session = match services.session().await {
        Ok(s) => s,
        Err(e) => return errors::store_error_to_response(e),
    };

    match session.get_account(id).await {
        Ok(Some(account)) => (StatusCode::OK, Json(account)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "User not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}
