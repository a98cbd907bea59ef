use serde::{Deserialize, Serialize};

/// A stored address record.
///
/// The store owns record lifetime; everything outside it works on copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Client-supplied fields for creating or replacing an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressInput {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl AddressInput {
    pub fn new(address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            address: address.into(),
            latitude,
            longitude,
        }
    }
}

impl Address {
    /// Replaces every mutable field with the values from `input`.
    /// The id is never touched.
    pub fn apply(&mut self, input: AddressInput) {
        self.address = input.address;
        self.latitude = input.latitude;
        self.longitude = input.longitude;
    }

    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
