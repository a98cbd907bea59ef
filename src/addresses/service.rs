use crate::coords::distance::DistanceModel;
use crate::coords::validator::validate_coordinates;
use crate::error::{AddressError, Result};
use crate::storage::sqlite::AddressStore;
use crate::storage::types::{Address, AddressInput};

/// Business layer in front of the address store.
///
/// Validates input, delegates persistence and filters records by distance.
/// Failures are logged here with the operation name and the offending
/// id or coordinates, then returned unchanged to the caller.
pub struct AddressService {
    store: AddressStore,
    distance_model: DistanceModel,
}

impl AddressService {
    pub fn new(store: AddressStore, distance_model: DistanceModel) -> Self {
        Self {
            store,
            distance_model,
        }
    }

    pub fn distance_model(&self) -> DistanceModel {
        self.distance_model
    }

    pub async fn create(&self, input: AddressInput) -> Result<Address> {
        validate_coordinates(input.latitude, input.longitude)
            .inspect_err(|e| report("create", e))?;

        let record = self
            .store
            .insert(input)
            .await
            .inspect_err(|e| report("create", e))?;

        tracing::info!(
            id = record.id,
            latitude = record.latitude,
            longitude = record.longitude,
            "Created address"
        );
        Ok(record)
    }

    pub async fn get(&self, id: i64) -> Result<Address> {
        let record = self
            .store
            .get_by_id(id)
            .await
            .inspect_err(|e| report("get", e))?;

        tracing::debug!(id, "Fetched address");
        Ok(record)
    }

    pub async fn update(&self, id: i64, input: AddressInput) -> Result<Address> {
        validate_coordinates(input.latitude, input.longitude)
            .inspect_err(|e| report("update", e))?;

        let record = self
            .store
            .update(id, input)
            .await
            .inspect_err(|e| report("update", e))?;

        tracing::info!(
            id,
            latitude = record.latitude,
            longitude = record.longitude,
            "Updated address"
        );
        Ok(record)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store
            .delete(id)
            .await
            .inspect_err(|e| report("delete", e))?;

        tracing::info!(id, "Deleted address");
        Ok(())
    }

    /// Returns every record whose distance from `(latitude, longitude)` is at
    /// most `max_distance_km`, in store order.
    ///
    /// Brute-force scan over all records; there is no spatial index.
    pub async fn find_within(
        &self,
        latitude: f64,
        longitude: f64,
        max_distance_km: f64,
    ) -> Result<Vec<Address>> {
        let records = self
            .store
            .list_all()
            .await
            .inspect_err(|e| report("find_within", e))?;
        let scanned = records.len();

        let nearby: Vec<Address> = records
            .into_iter()
            .filter(|record| {
                self.distance_model.distance_km(
                    latitude,
                    longitude,
                    record.latitude,
                    record.longitude,
                ) <= max_distance_km
            })
            .collect();

        tracing::debug!(
            latitude,
            longitude,
            max_distance_km,
            scanned,
            matched = nearby.len(),
            "Proximity search"
        );
        Ok(nearby)
    }

    pub async fn count(&self) -> Result<usize> {
        self.store.count().await
    }
}

pub(crate) fn report(operation: &'static str, err: &AddressError) {
    match err {
        AddressError::Validation { field, value, .. } => {
            tracing::warn!(operation, field, value, "Rejected out-of-range coordinate")
        }
        AddressError::Rejected { status, detail } => {
            tracing::warn!(operation, status = %status, "Rejected request: {}", detail)
        }
        AddressError::Conflict {
            latitude,
            longitude,
        } => {
            tracing::warn!(operation, latitude, longitude, "Coordinate pair already in use")
        }
        AddressError::NotFound { id } => {
            tracing::warn!(operation, id, "Address with ID {} not found", id)
        }
        AddressError::Database(e) => {
            tracing::error!(operation, "Database failure: {}", e)
        }
        AddressError::Storage(reason) => {
            tracing::error!(operation, "Storage failure: {}", reason)
        }
    }
}
