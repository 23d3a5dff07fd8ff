// In memory vehicle store.
//
// Purpose
// - Hold the whole collection for the lifetime of the process.
//
// Responsibilities
// - Keep vehicles in insertion order.
// - Assign sequential string identifiers that are never reused, even after a delete.
// - Serialize every operation, reads included, behind a single mutex.

use crate::modules::vehicles::core::repository::{RepositoryError, VehicleRepository};
use crate::modules::vehicles::core::vehicle::{Vehicle, VehicleDraft};
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug)]
struct Inventory {
    vehicles: Vec<Vehicle>,
    next_id: u64,
}

impl Inventory {
    fn position(&self, id: &str) -> Option<usize> {
        self.vehicles.iter().position(|v| v.id == id)
    }
}

#[derive(Debug)]
pub struct InMemoryVehicleStore {
    inventory: Mutex<Inventory>,
}

impl Default for InMemoryVehicleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryVehicleStore {
    pub fn new() -> Self {
        Self {
            inventory: Mutex::new(Inventory {
                vehicles: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Takes ownership of the seeded vehicles. Numbering continues after the
    /// highest numeric identifier; non numeric identifiers count as zero.
    ///
    /// Fails when that identifier is already `u64::MAX`.
    pub fn from_seed(vehicles: Vec<Vehicle>) -> Result<Self, RepositoryError> {
        let next_id = vehicles
            .iter()
            .filter_map(Vehicle::numeric_id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(RepositoryError::IdsExhausted)?;
        Ok(Self {
            inventory: Mutex::new(Inventory { vehicles, next_id }),
        })
    }

    /// The identifier the next create will receive.
    pub async fn next_id(&self) -> u64 {
        self.inventory.lock().await.next_id
    }
}

#[async_trait::async_trait]
impl VehicleRepository for InMemoryVehicleStore {
    async fn list(&self) -> Vec<Vehicle> {
        let guard = self.inventory.lock().await;
        debug!(count = guard.vehicles.len(), "listing vehicles");
        guard.vehicles.clone()
    }

    async fn create(&self, draft: VehicleDraft) -> Result<Vehicle, RepositoryError> {
        let mut guard = self.inventory.lock().await;
        // The counter must stay ahead of every id handed out, so the last
        // representable value is never assigned.
        let id = guard.next_id;
        guard.next_id = id.checked_add(1).ok_or(RepositoryError::IdsExhausted)?;
        let vehicle = draft.into_vehicle(id.to_string());
        guard.vehicles.push(vehicle.clone());
        debug!(id = %vehicle.id, "vehicle created");
        Ok(vehicle)
    }

    async fn get(&self, id: &str) -> Result<Vehicle, RepositoryError> {
        let guard = self.inventory.lock().await;
        guard
            .vehicles
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })
    }

    async fn update(&self, id: &str, draft: VehicleDraft) -> Result<Vehicle, RepositoryError> {
        let mut guard = self.inventory.lock().await;
        let index = guard
            .position(id)
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })?;
        let vehicle = draft.into_vehicle(id);
        guard.vehicles[index] = vehicle.clone();
        debug!(%id, "vehicle updated");
        Ok(vehicle)
    }

    async fn delete(&self, id: &str) -> Result<Vehicle, RepositoryError> {
        let mut guard = self.inventory.lock().await;
        let index = guard
            .position(id)
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })?;
        let removed = guard.vehicles.remove(index);
        debug!(%id, remaining = guard.vehicles.len(), "vehicle deleted");
        Ok(removed)
    }
}
