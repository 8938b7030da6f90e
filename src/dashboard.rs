use serde::Serialize;

use crate::{
    error::AppError,
    feed::TripFeed,
    models::trip::{Trip, TripStatus},
    services::trips::TripService,
};

/// Aggregate counts over the full dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TripStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl TripStats {
    pub fn tally(trips: &[Trip]) -> Self {
        let mut stats = Self {
            total: trips.len(),
            ..Self::default()
        };
        for trip in trips {
            match trip.status {
                TripStatus::Active => stats.active += 1,
                TripStatus::Completed => stats.completed += 1,
                TripStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }
}

/// View-layer composition: the scoped feed, the aggregate counts, and a live
/// free-text search over the cached list.
#[derive(Debug)]
pub struct Dashboard {
    feed: TripFeed,
    stats: TripStats,
    search: String,
}

impl Dashboard {
    /// Fetches the full dataset once for the stat cards and populates the
    /// scoped feed. The counts are a snapshot from this moment; later
    /// mutations through the feed do not refresh them.
    pub async fn open(service: TripService, scope: Option<TripStatus>) -> Result<Self, AppError> {
        let all = service.list(None).await?;
        let stats = TripStats::tally(&all);

        let feed = TripFeed::new(service, scope);
        feed.refetch().await;

        Ok(Self {
            feed,
            stats,
            search: String::new(),
        })
    }

    pub fn feed(&self) -> &TripFeed {
        &self.feed
    }

    pub fn stats(&self) -> TripStats {
        self.stats
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub async fn set_status_filter(&self, scope: Option<TripStatus>) {
        self.feed.set_scope(scope).await;
    }

    /// The cached scoped list narrowed by the search query: case-insensitive
    /// substring match on vehicle, source, or destination. A blank query
    /// matches everything. Purely local, no service calls.
    pub fn visible_trips(&self) -> Vec<Trip> {
        let trips = self.feed.trips();
        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return trips;
        }
        trips
            .into_iter()
            .filter(|t| t.matches_search(&query))
            .collect()
    }
}
