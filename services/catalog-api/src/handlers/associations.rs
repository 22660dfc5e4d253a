//! Component–supplier link endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catena_models::ComponentSupplier;
use catena_utils::ApiResponse;

use crate::{handlers::ApiError, AppState};

/// Body for `POST /component-supplier`. Both ids are optional at the
/// serde level so that absence can be reported as its own failure.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub supplier_id: Option<Uuid>,
    pub component_id: Option<Uuid>,
}

/// Association row with audit timestamps stripped.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub component_id: Uuid,
}

impl From<ComponentSupplier> for LinkResponse {
    fn from(link: ComponentSupplier) -> Self {
        Self {
            id: link.id,
            supplier_id: link.supplier_id,
            component_id: link.component_id,
        }
    }
}

/// POST /component-supplier
pub async fn create_link(
    State(state): State<AppState>,
    Json(body): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LinkResponse>>), ApiError> {
    let link = state.links.link(body.supplier_id, body.component_id).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(link.into()))))
}

/// DELETE /component-supplier/:component_id/:supplier_id
pub async fn delete_link(
    State(state): State<AppState>,
    Path((component_id, supplier_id)): Path<(Uuid, Uuid)>,
) -> Result<(StatusCode, Json<ApiResponse<serde_json::Value>>), ApiError> {
    state.links.unlink(component_id, supplier_id).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success_empty())))
}
