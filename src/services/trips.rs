use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::{
    error::AppError,
    models::trip::{NewTrip, Trip, TripPatch, TripStatus},
    store::TripStore,
};

/// Simulated network latency, one duration per operation. Injectable so tests
/// run at full speed with [`Latency::none`].
#[derive(Debug, Clone)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Latency {
    pub fn nominal() -> Self {
        Self {
            list: Duration::from_millis(500),
            get: Duration::from_millis(300),
            create: Duration::from_millis(400),
            update: Duration::from_millis(400),
            delete: Duration::from_millis(300),
        }
    }

    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }

    /// Same duration everywhere, handy for scheduling-sensitive tests.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            get: delay,
            create: delay,
            update: delay,
            delete: delay,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::nominal()
    }
}

/// CRUD operations over a [`TripStore`], each suspending for its simulated
/// delay before touching the store in one atomic step.
#[derive(Debug, Clone)]
pub struct TripService {
    store: TripStore,
    latency: Latency,
}

impl TripService {
    pub fn new(store: TripStore, latency: Latency) -> Self {
        Self { store, latency }
    }

    pub fn store(&self) -> &TripStore {
        &self.store
    }

    /// Snapshot of all trips, or only those matching `scope`. Never fails.
    pub async fn list(&self, scope: Option<TripStatus>) -> Result<Vec<Trip>, AppError> {
        sleep(self.latency.list).await;
        let trips = self.store.snapshot(scope);
        debug!(count = trips.len(), ?scope, "listed trips");
        Ok(trips)
    }

    pub async fn get(&self, id: i64) -> Result<Trip, AppError> {
        sleep(self.latency.get).await;
        self.store.get(id).ok_or(AppError::NotFound(id))
    }

    /// Appends a new trip; the store assigns the identifier.
    pub async fn create(&self, new: NewTrip) -> Result<Trip, AppError> {
        sleep(self.latency.create).await;
        let trip = self.store.insert(new);
        debug!(id = trip.id, "created trip");
        Ok(trip)
    }

    /// Shallow-merges `patch` onto the stored record: supplied fields
    /// overwrite, omitted fields persist.
    pub async fn update(&self, id: i64, patch: TripPatch) -> Result<Trip, AppError> {
        sleep(self.latency.update).await;
        let trip = self.store.apply(id, &patch).ok_or(AppError::NotFound(id))?;
        debug!(id, "updated trip");
        Ok(trip)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sleep(self.latency.delete).await;
        if self.store.remove(id) {
            debug!(id, "deleted trip");
            Ok(())
        } else {
            Err(AppError::NotFound(id))
        }
    }
}
