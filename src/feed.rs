use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::{
    error::AppError,
    models::trip::{NewTrip, Trip, TripPatch, TripStatus},
    services::trips::TripService,
};

/// Client-side cache over the [`TripService`]: the scoped trip list, a loading
/// flag, and the last failure message. Clones share state, so several
/// in-flight calls patch the same cache, each when its own call resolves.
///
/// Scoped fetches are not serialized and cannot be cancelled, so a fetch
/// carries the generation it was issued under and its result is dropped if the
/// scope has moved on. Without that guard a slow stale `list` could overwrite
/// the result of a newer one.
#[derive(Debug, Clone)]
pub struct TripFeed {
    service: TripService,
    state: Arc<Mutex<FeedState>>,
}

#[derive(Debug)]
struct FeedState {
    trips: Vec<Trip>,
    loading: bool,
    error: Option<String>,
    scope: Option<TripStatus>,
    generation: u64,
}

impl TripFeed {
    /// A feed starting at `scope` with an empty cache; call [`refetch`] to
    /// populate it.
    ///
    /// [`refetch`]: TripFeed::refetch
    pub fn new(service: TripService, scope: Option<TripStatus>) -> Self {
        Self {
            service,
            state: Arc::new(Mutex::new(FeedState {
                trips: Vec::new(),
                loading: false,
                error: None,
                scope,
                generation: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().expect("trip feed mutex poisoned")
    }

    /// Re-issues `list` for the active scope. A successful result replaces the
    /// whole cache and clears the error; a failure keeps the previous cache
    /// and records the message. Never propagates to the caller.
    pub async fn refetch(&self) {
        let (scope, generation) = {
            let mut state = self.lock();
            state.loading = true;
            (state.scope, state.generation)
        };

        let result = self.service.list(scope).await;

        let mut state = self.lock();
        if state.generation != generation {
            // The scope changed while this fetch was in flight; a newer fetch
            // owns the cache and the loading flag now.
            debug!(?scope, "discarding stale trip list");
            return;
        }
        match result {
            Ok(trips) => {
                state.trips = trips;
                state.error = None;
            }
            Err(err) => {
                warn!(%err, "trip list fetch failed");
                state.error = Some(err.to_string());
            }
        }
        state.loading = false;
    }

    /// Switches the status scope and fetches a fresh list for it, replacing
    /// the cache. A no-op when the scope is unchanged.
    pub async fn set_scope(&self, scope: Option<TripStatus>) {
        {
            let mut state = self.lock();
            if state.scope == scope {
                return;
            }
            state.scope = scope;
            state.generation += 1;
        }
        self.refetch().await;
    }

    /// Creates a trip and appends it to the cache. Failures are recorded and
    /// propagated so a form handler can react.
    pub async fn add_trip(&self, new: NewTrip) -> Result<Trip, AppError> {
        self.lock().error = None;
        match self.service.create(new).await {
            Ok(trip) => {
                self.lock().trips.push(trip.clone());
                Ok(trip)
            }
            Err(err) => {
                self.lock().error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Updates a trip and replaces the matching cached entry.
    pub async fn edit_trip(&self, id: i64, patch: TripPatch) -> Result<Trip, AppError> {
        self.lock().error = None;
        match self.service.update(id, patch).await {
            Ok(updated) => {
                let mut state = self.lock();
                for trip in &mut state.trips {
                    if trip.id == id {
                        *trip = updated.clone();
                    }
                }
                Ok(updated)
            }
            Err(err) => {
                self.lock().error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Deletes a trip and drops the matching cached entry.
    pub async fn remove_trip(&self, id: i64) -> Result<(), AppError> {
        self.lock().error = None;
        match self.service.delete(id).await {
            Ok(()) => {
                self.lock().trips.retain(|t| t.id != id);
                Ok(())
            }
            Err(err) => {
                self.lock().error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn trips(&self) -> Vec<Trip> {
        self.lock().trips.clone()
    }

    pub fn loading(&self) -> bool {
        self.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn scope(&self) -> Option<TripStatus> {
        self.lock().scope
    }
}
