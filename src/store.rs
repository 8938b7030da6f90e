use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::trip::{NewTrip, Trip, TripPatch, TripStatus};

/// The fixed dataset the application starts from.
const SEED: &[(i64, &str, &str, &str, TripStatus)] = &[
    (1, "PM-101", "A", "B", TripStatus::Active),
    (2, "PM-102", "C", "D", TripStatus::Completed),
    (3, "PM-103", "E", "F", TripStatus::Cancelled),
    (4, "PM-104", "G", "H", TripStatus::Active),
    (5, "PM-105", "I", "J", TripStatus::Active),
    (6, "PM-106", "K", "L", TripStatus::Completed),
    (7, "PM-107", "M", "N", TripStatus::Active),
    (8, "PM-108", "O", "P", TripStatus::Completed),
    (9, "PM-109", "Q", "R", TripStatus::Cancelled),
    (10, "PM-110", "S", "T", TripStatus::Active),
    (11, "PM-111", "U", "V", TripStatus::Completed),
    (12, "PM-112", "W", "X", TripStatus::Active),
    (13, "PM-113", "Y", "Z", TripStatus::Completed),
    (14, "PM-114", "A", "C", TripStatus::Active),
    (15, "PM-115", "B", "D", TripStatus::Cancelled),
    (16, "PM-116", "E", "G", TripStatus::Completed),
    (17, "PM-117", "F", "H", TripStatus::Active),
    (18, "PM-118", "I", "K", TripStatus::Completed),
    (19, "PM-119", "J", "L", TripStatus::Active),
    (20, "PM-120", "M", "O", TripStatus::Cancelled),
];

pub fn seed_trips() -> Vec<Trip> {
    SEED.iter()
        .map(|&(id, vehicle, source, destination, status)| Trip {
            id,
            vehicle: vehicle.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            status,
        })
        .collect()
}

/// Owned, in-memory trip collection. Cloning shares the underlying state, so
/// the service and every test can hold a handle to the same store while each
/// test instantiates its own isolated instance.
///
/// Identifiers move through a monotone watermark: a new trip always receives
/// an id above every id ever handed out, so deleted identifiers are never
/// reassigned.
#[derive(Debug, Clone)]
pub struct TripStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
    trips: Vec<Trip>,
    next_id: i64,
}

impl TripStore {
    pub fn new() -> Self {
        Self::with_trips(Vec::new())
    }

    /// Store preloaded with the fixed application dataset.
    pub fn seeded() -> Self {
        Self::with_trips(seed_trips())
    }

    pub fn with_trips(trips: Vec<Trip>) -> Self {
        let next_id = trips.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(Inner { trips, next_id })),
        }
    }

    // Every operation below is a single lock acquisition, so each store step
    // is atomic even on a multi-threaded runtime.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("trip store mutex poisoned")
    }

    pub fn snapshot(&self, scope: Option<TripStatus>) -> Vec<Trip> {
        let inner = self.lock();
        match scope {
            Some(status) => inner
                .trips
                .iter()
                .filter(|t| t.status == status)
                .cloned()
                .collect(),
            None => inner.trips.clone(),
        }
    }

    pub fn get(&self, id: i64) -> Option<Trip> {
        self.lock().trips.iter().find(|t| t.id == id).cloned()
    }

    pub fn insert(&self, new: NewTrip) -> Trip {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        let trip = new.into_trip(id);
        inner.trips.push(trip.clone());
        trip
    }

    pub fn apply(&self, id: i64, patch: &TripPatch) -> Option<Trip> {
        let mut inner = self.lock();
        let trip = inner.trips.iter_mut().find(|t| t.id == id)?;
        patch.apply_to(trip);
        Some(trip.clone())
    }

    pub fn remove(&self, id: i64) -> bool {
        let mut inner = self.lock();
        let before = inner.trips.len();
        inner.trips.retain(|t| t.id != id);
        inner.trips.len() < before
    }

    pub fn len(&self) -> usize {
        self.lock().trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TripStore {
    fn default() -> Self {
        Self::new()
    }
}
