//! Address HTTP Protocol
//!
//! Route paths and the Data Transfer Objects (DTOs) exchanged with clients.
//! Record bodies themselves are `storage::types::Address` and `AddressInput`.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Liveness endpoint.
pub const ENDPOINT_ROOT: &str = "/";
/// Collection endpoint: create (POST) and proximity search (GET).
pub const ENDPOINT_ADDRESSES: &str = "/addresses/";
/// Item endpoint: read (GET), replace (PUT) and delete (DELETE) by id.
pub const ENDPOINT_ADDRESS: &str = "/addresses/:id";

pub const ROOT_MESSAGE: &str = "Hello World";
pub const DELETED_MESSAGE: &str = "Address deleted";

// --- Data Transfer Objects ---

/// Plain acknowledgement body, e.g. `{"message": "Address deleted"}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Query string of the proximity search.
///
/// All three parameters are required; `distance` is in kilometres and the
/// boundary is inclusive.
#[derive(Debug, Serialize, Deserialize)]
pub struct NearbyParams {
    pub latitude: f64,
    pub longitude: f64,
    pub distance: f64,
}
