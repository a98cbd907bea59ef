use crate::addresses::handlers::*;
use crate::addresses::protocol::{ENDPOINT_ADDRESS, ENDPOINT_ADDRESSES, ENDPOINT_ROOT};
use crate::addresses::service::AddressService;

use axum::{Extension, Router, routing::get};
use std::sync::Arc;

/// Builds the HTTP router with the service injected as an extension.
pub fn router(service: Arc<AddressService>) -> Router {
    Router::new()
        .route(ENDPOINT_ROOT, get(handle_root))
        .route(
            ENDPOINT_ADDRESSES,
            get(handle_find_nearby).post(handle_create_address),
        )
        .route(
            ENDPOINT_ADDRESS,
            get(handle_get_address)
                .put(handle_update_address)
                .delete(handle_delete_address),
        )
        .layer(Extension(service))
}
