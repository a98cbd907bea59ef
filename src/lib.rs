//! Address Book Service Library
//!
//! This library crate defines the modules behind the address book HTTP service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`coords`**: Coordinate range validation and geodesic distance.
//! - **`storage`**: SQLite-backed address store. Coordinate pairs are unique, enforced by
//!   the database so concurrent writers cannot both succeed.
//! - **`addresses`**: The service layer (validation, persistence, proximity search) and its
//!   HTTP handlers.
//! - **`server`**: Router assembly.
//! - **`config`** / **`error`**: Runtime configuration, logging setup and the shared error type.

pub mod addresses;
pub mod config;
pub mod coords;
pub mod error;
pub mod server;
pub mod storage;
