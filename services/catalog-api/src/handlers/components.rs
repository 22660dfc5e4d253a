//! Component endpoints.
//!
//! All payloads strip the internal audit timestamps. Mutating endpoints
//! reply 201, including DELETE; that is the contract clients expect.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catena_models::{Component, ComponentDetail, ComponentPatch, Product, Supplier};
use catena_utils::ApiResponse;

use crate::{handlers::ApiError, AppState};

/// Component payload with audit timestamps stripped.
#[derive(Debug, Serialize)]
pub struct ComponentResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<Component> for ComponentResponse {
    fn from(component: Component) -> Self {
        Self {
            id: component.id,
            name: component.name,
            description: component.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SupplierResponse {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
}

impl From<Supplier> for SupplierResponse {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            address: supplier.address,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
        }
    }
}

/// Component with the entities linked through both join collections.
#[derive(Debug, Serialize)]
pub struct ComponentDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub suppliers: Vec<SupplierResponse>,
    pub products: Vec<ProductResponse>,
}

impl From<ComponentDetail> for ComponentDetailResponse {
    fn from(detail: ComponentDetail) -> Self {
        Self {
            id: detail.component.id,
            name: detail.component.name,
            description: detail.component.description,
            suppliers: detail.suppliers.into_iter().map(Into::into).collect(),
            products: detail.products.into_iter().map(Into::into).collect(),
        }
    }
}

/// Body for `POST /components`. `supplier_id` distinguishes an absent
/// field from an explicitly empty list.
#[derive(Debug, Deserialize)]
pub struct CreateComponentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub supplier_id: Option<Vec<Uuid>>,
}

/// Body for `PUT /components/:component_id`; every field is optional.
#[derive(Debug, Deserialize)]
pub struct UpdateComponentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub supplier_id: Option<Vec<Uuid>>,
}

/// GET /components
pub async fn list_components(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<ComponentResponse>>>), ApiError> {
    let components = state.components.list().await?;
    let data = components
        .into_iter()
        .map(ComponentResponse::from)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// GET /components/:component_id
pub async fn get_component(
    State(state): State<AppState>,
    Path(component_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<ComponentDetailResponse>>), ApiError> {
    let detail = state.components.get(component_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(detail.into()))))
}

/// POST /components
pub async fn create_component(
    State(state): State<AppState>,
    Json(body): Json<CreateComponentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ComponentResponse>>), ApiError> {
    let component = state
        .components
        .create(body.name, body.description, body.supplier_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(component.into())),
    ))
}

/// PUT /components/:component_id
///
/// Replies 201 with the pre-update snapshot of the record.
pub async fn update_component(
    State(state): State<AppState>,
    Path(component_id): Path<Uuid>,
    Json(body): Json<UpdateComponentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ComponentResponse>>), ApiError> {
    let patch = ComponentPatch {
        name: body.name,
        description: body.description,
    };
    let snapshot = state
        .components
        .update(component_id, patch, body.supplier_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(snapshot.into())),
    ))
}

/// DELETE /components/:component_id
pub async fn delete_component(
    State(state): State<AppState>,
    Path(component_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<serde_json::Value>>), ApiError> {
    state.components.delete(component_id).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success_empty())))
}
