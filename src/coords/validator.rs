use crate::error::{AddressError, Result};

pub const LATITUDE_LIMIT: f64 = 90.0;
pub const LONGITUDE_LIMIT: f64 = 180.0;

/// Checks that a coordinate pair lies strictly inside the valid ranges.
///
/// Bounds are exclusive: the poles (±90) and the antimeridian (±180) are
/// rejected. NaN and infinities fail the comparison and are rejected too.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_open_range("latitude", latitude, LATITUDE_LIMIT)?;
    check_open_range("longitude", longitude, LONGITUDE_LIMIT)?;
    Ok(())
}

fn check_open_range(field: &'static str, value: f64, limit: f64) -> Result<()> {
    if value > -limit && value < limit {
        return Ok(());
    }

    Err(AddressError::Validation {
        field,
        value,
        min: -limit,
        max: limit,
    })
}
