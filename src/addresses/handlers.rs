use super::protocol::{DELETED_MESSAGE, MessageResponse, NearbyParams, ROOT_MESSAGE};
use super::service::{AddressService, report};
use crate::error::AddressError;
use crate::storage::types::{Address, AddressInput};

use axum::{
    Json,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use std::sync::Arc;

type Body = Result<Json<AddressInput>, JsonRejection>;
type IdPath = Result<Path<i64>, PathRejection>;

pub async fn handle_root() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_MESSAGE))
}

pub async fn handle_create_address(
    Extension(service): Extension<Arc<AddressService>>,
    body: Body,
) -> Result<Json<Address>, AddressError> {
    let Json(req) = body.map_err(|e| rejected("create", e))?;
    service.create(req).await.map(Json)
}

pub async fn handle_get_address(
    Extension(service): Extension<Arc<AddressService>>,
    path: IdPath,
) -> Result<Json<Address>, AddressError> {
    let Path(id) = path.map_err(|e| rejected("get", e))?;
    service.get(id).await.map(Json)
}

pub async fn handle_update_address(
    Extension(service): Extension<Arc<AddressService>>,
    path: IdPath,
    body: Body,
) -> Result<Json<Address>, AddressError> {
    let Path(id) = path.map_err(|e| rejected("update", e))?;
    let Json(req) = body.map_err(|e| rejected("update", e))?;
    service.update(id, req).await.map(Json)
}

pub async fn handle_delete_address(
    Extension(service): Extension<Arc<AddressService>>,
    path: IdPath,
) -> Result<Json<MessageResponse>, AddressError> {
    let Path(id) = path.map_err(|e| rejected("delete", e))?;
    service.delete(id).await?;
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}

pub async fn handle_find_nearby(
    Extension(service): Extension<Arc<AddressService>>,
    query: Result<Query<NearbyParams>, QueryRejection>,
) -> Result<Json<Vec<Address>>, AddressError> {
    let Query(params) = query.map_err(|e| rejected("find_within", e))?;
    service
        .find_within(params.latitude, params.longitude, params.distance)
        .await
        .map(Json)
}

/// Converts an extractor rejection into an `AddressError` and logs it.
fn rejected(operation: &'static str, rejection: impl Into<AddressError>) -> AddressError {
    let err = rejection.into();
    report(operation, &err);
    err
}
