//! Coordinate Module
//!
//! Pure geographic helpers with no I/O.
//!
//! ## Submodules
//! - **`validator`**: Range checks for latitude/longitude (exclusive bounds).
//! - **`distance`**: Geodesic and haversine distance between coordinate pairs.

pub mod distance;
pub mod validator;
