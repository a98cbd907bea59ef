//! Address Service Module
//!
//! The CRUD and proximity-search surface of the address book.
//!
//! ## Responsibilities
//! - **Validation**: Rejects out-of-range coordinates before they reach the store.
//! - **Persistence**: Delegates to `storage::sqlite::AddressStore`, which enforces uniqueness.
//! - **Proximity**: Scans every record and keeps those within the requested distance.
//! - **API**: Exposes the operations as axum handlers.
//!
//! ## Submodules
//! - **`service`**: Orchestration and error logging.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`protocol`**: Route paths and request/response DTOs.

pub mod handlers;
pub mod protocol;
pub mod service;
