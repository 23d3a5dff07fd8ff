// Port for the vehicle collection.
//
// Every call is one atomic operation against the store. Implementations must
// serialize reads and writes alike, and never hand out an identifier twice.

use crate::modules::vehicles::core::vehicle::{Vehicle, VehicleDraft};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("vehicle not found: {id}")]
    NotFound { id: String },

    #[error("no identifiers left to assign")]
    IdsExhausted,
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// All vehicles in insertion order.
    async fn list(&self) -> Vec<Vehicle>;

    /// Appends the draft under the next identifier and returns the stored vehicle.
    async fn create(&self, draft: VehicleDraft) -> Result<Vehicle, RepositoryError>;

    async fn get(&self, id: &str) -> Result<Vehicle, RepositoryError>;

    /// Replaces every field but `id` of the first vehicle matching `id`.
    async fn update(&self, id: &str, draft: VehicleDraft) -> Result<Vehicle, RepositoryError>;

    /// Removes the first vehicle matching `id` and returns it.
    async fn delete(&self, id: &str) -> Result<Vehicle, RepositoryError>;
}
