use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    Active,
    Completed,
    Cancelled,
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TripStatus::Active => "Active",
            TripStatus::Completed => "Completed",
            TripStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub vehicle: String,
    pub source: String,
    pub destination: String,
    pub status: TripStatus,
}

impl Trip {
    /// Case-insensitive substring match; `query` must already be lowercased.
    pub fn matches_search(&self, query: &str) -> bool {
        self.vehicle.to_lowercase().contains(query)
            || self.source.to_lowercase().contains(query)
            || self.destination.to_lowercase().contains(query)
    }
}

/// Trip fields without an identifier; ids are assigned by the store on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrip {
    pub vehicle: String,
    pub source: String,
    pub destination: String,
    pub status: TripStatus,
}

impl NewTrip {
    pub fn new(
        vehicle: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        status: TripStatus,
    ) -> Self {
        Self {
            vehicle: vehicle.into(),
            source: source.into(),
            destination: destination.into(),
            status,
        }
    }

    pub fn into_trip(self, id: i64) -> Trip {
        Trip {
            id,
            vehicle: self.vehicle,
            source: self.source,
            destination: self.destination,
            status: self.status,
        }
    }
}

/// Partial update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TripStatus>,
}

impl TripPatch {
    pub fn status(status: TripStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, trip: &mut Trip) {
        if let Some(vehicle) = &self.vehicle {
            trip.vehicle = vehicle.clone();
        }
        if let Some(source) = &self.source {
            trip.source = source.clone();
        }
        if let Some(destination) = &self.destination {
            trip.destination = destination.clone();
        }
        if let Some(status) = self.status {
            trip.status = status;
        }
    }
}
